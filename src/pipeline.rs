use crate::{
    error::{PipelineError, Result},
    openai::default_provider,
    prompt,
    provider::CompletionProvider,
    types::{ReasoningRequest, ReasoningResult, SamplingPolicy, Stage},
};
use tracing::debug;

/// Executor for the Generate -> Oppose -> Synthesize chain.
///
/// Drives three sequential completion calls, threading each stage's raw
/// output into the next stage's prompt template. Holds no state between
/// runs: every `run` call is independent given its inputs.
pub struct ReasoningPipeline {
    provider: Box<dyn CompletionProvider>,
    sampling: SamplingPolicy,
}

impl std::fmt::Debug for ReasoningPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReasoningPipeline")
            .field("sampling", &self.sampling)
            .finish_non_exhaustive()
    }
}

impl ReasoningPipeline {
    /// Create a new pipeline builder.
    pub fn builder() -> ReasoningPipelineBuilder {
        ReasoningPipelineBuilder::new()
    }

    /// Pipeline with default sampling and the environment-selected provider
    /// (live when the credential is present, degraded otherwise).
    pub fn with_default_provider() -> Self {
        Self {
            provider: default_provider(),
            sampling: SamplingPolicy::default(),
        }
    }

    pub fn sampling(&self) -> &SamplingPolicy {
        &self.sampling
    }

    /// Execute the three-stage chain and assemble the result.
    ///
    /// Fails fast with [`PipelineError::InvalidRequest`] on an empty topic,
    /// before any provider call. A provider failure in any stage aborts the
    /// remaining stages and surfaces as [`PipelineError::StageFailed`] with
    /// the stage identified; no partial result is returned. There are no
    /// retries at this layer.
    pub async fn run(&self, request: &ReasoningRequest) -> Result<ReasoningResult> {
        if request.topic.trim().is_empty() {
            return Err(PipelineError::InvalidRequest(
                "topic must be non-empty".to_string(),
            ));
        }

        let base = self.sampling.temperature;

        let generate = self
            .call(Stage::Generate, &prompt::generate(request), base)
            .await?;

        let oppose = self
            .call(Stage::Oppose, &prompt::oppose(&generate), base)
            .await?;

        let synthesize = self
            .call(
                Stage::Synthesize,
                &prompt::synthesize(&oppose),
                self.sampling.synthesis_temperature(),
            )
            .await?;

        Ok(ReasoningResult {
            generate,
            oppose,
            synthesize,
        })
    }

    async fn call(&self, stage: Stage, prompt: &str, temperature: f64) -> Result<String> {
        debug!(%stage, temperature, "running stage");
        self.provider
            .complete(prompt, temperature, self.sampling.max_tokens)
            .await
            .map_err(|e| PipelineError::StageFailed {
                stage,
                message: e.to_string(),
            })
    }
}

/// Builder for [`ReasoningPipeline`].
pub struct ReasoningPipelineBuilder {
    provider: Option<Box<dyn CompletionProvider>>,
    sampling: SamplingPolicy,
}

impl ReasoningPipelineBuilder {
    pub fn new() -> Self {
        Self {
            provider: None,
            sampling: SamplingPolicy::default(),
        }
    }

    /// Inject a completion provider. When omitted, `build` falls back to the
    /// explicit [`default_provider`] factory.
    pub fn provider(mut self, provider: Box<dyn CompletionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the sampling policy for all three stages.
    pub fn sampling(mut self, sampling: SamplingPolicy) -> Self {
        self.sampling = sampling;
        self
    }

    /// Shorthand for adjusting only the base temperature.
    pub fn base_temperature(mut self, temperature: f64) -> Self {
        self.sampling.temperature = temperature;
        self
    }

    /// Build the pipeline, validating the sampling policy.
    pub fn build(self) -> Result<ReasoningPipeline> {
        if !(0.0..=2.0).contains(&self.sampling.temperature) {
            return Err(PipelineError::InvalidConfig(format!(
                "temperature must be within [0.0, 2.0], got {}",
                self.sampling.temperature
            )));
        }
        if self.sampling.max_tokens == 0 {
            return Err(PipelineError::InvalidConfig(
                "max_tokens must be positive".to_string(),
            ));
        }

        Ok(ReasoningPipeline {
            provider: self.provider.unwrap_or_else(default_provider),
            sampling: self.sampling,
        })
    }
}

impl Default for ReasoningPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
