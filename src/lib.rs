//! # LLM Dialectic
//!
//! Three-stage reasoning pipeline (Generate, Oppose, Synthesize) over a
//! pluggable LLM completion backend.
//!
//! Given a topic, goal, and constraints, the pipeline produces three chained
//! text artifacts: a divergent set of approaches, an adversarial critique of
//! those approaches, and a final synthesis fusing the critique into a
//! recommended plan. Each stage's prompt embeds the previous stage's raw
//! output, so execution is strictly sequential.
//!
//! ## Features
//!
//! - **Pluggable backends** via the single-method [`CompletionProvider`]
//!   trait (live OpenAI backend, degraded fallback, test stubs)
//! - **Degraded mode** as a first-class operating mode: without a credential
//!   the pipeline still runs, returning deterministic marked completions
//! - **Temperature policy**: the synthesis stage runs 0.2 below the base
//!   temperature (clamped at 0.0) so the fusion step is more deterministic
//!   than the divergent steps
//! - **Stage-tagged failures**: a backend error aborts the run and reports
//!   which stage failed; no partial results
//!
//! ## Quick Start
//!
//! ```no_run
//! use llm_dialectic::{ReasoningPipeline, ReasoningRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Live when OPENAI_API_KEY is set, degraded otherwise.
//!     let pipeline = ReasoningPipeline::with_default_provider();
//!
//!     let request = ReasoningRequest::new("AI Safety").with_goal("roadmap");
//!     let result = pipeline.run(&request).await?;
//!
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```
//!
//! ## Injecting a provider
//!
//! ```no_run
//! use llm_dialectic::{OpenAiProvider, ReasoningPipeline, SamplingPolicy};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OpenAiProvider::from_env("gpt-4o")?;
//! let pipeline = ReasoningPipeline::builder()
//!     .provider(Box::new(provider))
//!     .sampling(SamplingPolicy::default().with_temperature(0.9))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod openai;
pub mod pipeline;
pub mod prompt;
pub mod provider;
pub mod types;

pub use error::{InitError, PipelineError, ProviderError, Result};
pub use openai::{default_provider, OpenAiProvider, DEFAULT_MODEL};
pub use pipeline::{ReasoningPipeline, ReasoningPipelineBuilder};
pub use provider::{CompletionProvider, DegradedProvider, OFFLINE_MARKER};
pub use types::{ReasoningRequest, ReasoningResult, SamplingPolicy, Stage};
