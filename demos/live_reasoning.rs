//! Run the pipeline against the default backend.
//!
//! Live when `OPENAI_API_KEY` is set; falls back to degraded mode otherwise,
//! so this demo always completes. Pass a topic as the first argument, and
//! `--json` to print the result as JSON instead of text.

use llm_dialectic::{ReasoningPipeline, ReasoningRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let topic = args.next().unwrap_or_else(|| "AI Safety".to_string());
    let as_json = args.next().as_deref() == Some("--json");

    let pipeline = ReasoningPipeline::with_default_provider();
    let result = pipeline.run(&ReasoningRequest::new(topic)).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result);
    }

    Ok(())
}
