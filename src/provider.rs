use crate::error::ProviderError;
use async_trait::async_trait;

/// Marker prefixed to every completion produced in degraded mode.
///
/// Callers and tests match on this literal to tell offline output apart
/// from live backend output.
pub const OFFLINE_MARKER: &str = "[OFFLINE COMPLETION]";

/// How much of the prompt a degraded completion echoes back.
const ECHO_LIMIT: usize = 200;

/// Capability for turning a prompt into a completion.
///
/// The single extension point of the crate: the pipeline is polymorphic over
/// anything implementing this trait (live backend, degraded fallback, test
/// stub). `temperature` and `max_tokens` are validated by the pipeline
/// before the call, not here. Implementations must be stateless with respect
/// to `complete` so one instance can serve concurrent pipeline runs.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String, ProviderError>;
}

/// Deterministic fallback provider for offline and test use.
///
/// Returns [`OFFLINE_MARKER`] followed by a truncated echo of the prompt.
/// Never fails, performs no I/O, and costs nothing. Degraded mode is a
/// first-class operating mode, not an error path: it keeps the pipeline
/// demoable without credentials or network access.
#[derive(Debug, Clone, Default)]
pub struct DegradedProvider;

impl DegradedProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompletionProvider for DegradedProvider {
    async fn complete(
        &self,
        prompt: &str,
        _temperature: f64,
        _max_tokens: u32,
    ) -> Result<String, ProviderError> {
        let echo: String = prompt.chars().take(ECHO_LIMIT).collect();
        Ok(format!("{}\nPrompt: {}", OFFLINE_MARKER, echo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_degraded_output_starts_with_marker() {
        let provider = DegradedProvider::new();
        let out = provider.complete("some prompt", 0.7, 800).await.unwrap();
        assert!(out.starts_with(OFFLINE_MARKER));
        assert!(out.contains("Prompt: some prompt"));
    }

    #[tokio::test]
    async fn test_degraded_truncates_long_prompts() {
        let provider = DegradedProvider::new();
        let prompt = "x".repeat(500);
        let out = provider.complete(&prompt, 0.7, 800).await.unwrap();
        let echoed = out.split("Prompt: ").nth(1).unwrap();
        assert_eq!(echoed.len(), 200);
    }

    #[tokio::test]
    async fn test_degraded_truncation_respects_char_boundaries() {
        let provider = DegradedProvider::new();
        let prompt = "é".repeat(300);
        let out = provider.complete(&prompt, 0.7, 800).await.unwrap();
        let echoed = out.split("Prompt: ").nth(1).unwrap();
        assert_eq!(echoed.chars().count(), 200);
    }

    #[tokio::test]
    async fn test_degraded_is_deterministic() {
        let provider = DegradedProvider::new();
        let a = provider.complete("same prompt", 0.9, 100).await.unwrap();
        let b = provider.complete("same prompt", 0.1, 999).await.unwrap();
        assert_eq!(a, b);
    }
}
