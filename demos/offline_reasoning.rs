//! Run the pipeline fully offline with the degraded provider.
//!
//! Useful for seeing the stage chaining without credentials or network:
//! each stage returns a marked, truncated echo of its prompt.

use llm_dialectic::{DegradedProvider, ReasoningPipeline, ReasoningRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = ReasoningPipeline::builder()
        .provider(Box::new(DegradedProvider::new()))
        .build()?;

    let request = ReasoningRequest::new("Quantum Computing")
        .with_goal("practical roadmap")
        .with_constraints("5 year horizon");

    let result = pipeline.run(&request).await?;
    println!("{}", result);

    Ok(())
}
