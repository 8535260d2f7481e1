use crate::{
    error::{InitError, ProviderError},
    provider::{CompletionProvider, DegradedProvider},
};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Live provider backed by the OpenAI Chat Completions API.
///
/// Construction is a two-step factory: [`OpenAiProvider::from_env`] reads the
/// credential and fails with [`InitError::MissingCredential`] when it is
/// absent, leaving the degrade-or-fail decision to the caller. A bad model
/// name or unreachable network is not an init failure; it surfaces on the
/// actual call as a [`ProviderError`].
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: Client,
    model: String,
    api_key: String,
    endpoint: String,
}

impl OpenAiProvider {
    /// Create a provider with an explicit credential.
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            model: model.into(),
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Create a provider from the `OPENAI_API_KEY` environment variable.
    pub fn from_env(model: impl Into<String>) -> Result<Self, InitError> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| InitError::MissingCredential(API_KEY_VAR.to_string()))?;
        Ok(Self::new(model, api_key))
    }

    /// Override the API endpoint (useful for proxies and tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(
        &self,
        prompt: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String, ProviderError> {
        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": temperature,
            "max_tokens": max_tokens,
        });

        let url = format!("{}/chat/completions", self.endpoint.trim_end_matches('/'));
        debug!(model = %self.model, temperature, max_tokens, "requesting completion");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, message });
        }

        let response: Value = resp.json().await?;
        let content = response
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ProviderError::MalformedResponse(
                    "no message content in first choice".to_string(),
                )
            })?;

        Ok(content.trim().to_string())
    }
}

/// Default-construction helper: a live provider when the credential is
/// present, the degraded fallback otherwise.
///
/// Only [`InitError::MissingCredential`] triggers the fallback; there is no
/// catch-all. This is the factory the pipeline uses when no provider is
/// injected, kept as a free function so provider lifetime stays visible at
/// the call site.
pub fn default_provider() -> Box<dyn CompletionProvider> {
    match OpenAiProvider::from_env(DEFAULT_MODEL) {
        Ok(provider) => Box::new(provider),
        Err(InitError::MissingCredential(var)) => {
            warn!(%var, "credential not set, running in degraded mode");
            Box::new(DegradedProvider::new())
        }
    }
}
