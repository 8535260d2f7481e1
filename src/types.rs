use serde::{Deserialize, Serialize};
use std::fmt;

/// The three sequential steps of the reasoning pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Generate,
    Oppose,
    Synthesize,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Generate => "generate",
            Stage::Oppose => "oppose",
            Stage::Synthesize => "synthesize",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for a single reasoning pass.
///
/// Immutable once constructed; created per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningRequest {
    /// Topic the pipeline should explore. Must be non-empty.
    pub topic: String,
    /// Desired outcome (default: "clarity").
    #[serde(default = "default_goal")]
    pub goal: String,
    /// Constraints steering the reasoning (default: "realistic").
    #[serde(default = "default_constraints")]
    pub constraints: String,
}

fn default_goal() -> String {
    "clarity".to_string()
}

fn default_constraints() -> String {
    "realistic".to_string()
}

impl ReasoningRequest {
    /// Create a request with default goal and constraints.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            goal: default_goal(),
            constraints: default_constraints(),
        }
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = constraints.into();
        self
    }
}

/// Sampling parameters applied across the three stages.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingPolicy {
    /// Base temperature for the generate and oppose stages (0.0 to 2.0).
    pub temperature: f64,
    /// Maximum tokens per completion. Passed through to the provider.
    pub max_tokens: u32,
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 800,
        }
    }
}

impl SamplingPolicy {
    pub fn with_temperature(mut self, temp: f64) -> Self {
        self.temperature = temp;
        self
    }

    pub fn with_max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = tokens;
        self
    }

    /// Temperature for the synthesize stage: 0.2 below the base temperature,
    /// clamped at 0.0. The final fusion step runs more deterministically
    /// than the divergent and critique steps.
    pub fn synthesis_temperature(&self) -> f64 {
        (self.temperature - 0.2).max(0.0)
    }
}

/// Output of one pipeline run: the three chained text artifacts.
///
/// Field order is fixed and every field is always present. Values are raw
/// completion text, never truncated or post-processed. Each later field's
/// prompt embedded the prior field's value, so no field can be recomputed
/// without recomputing everything after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningResult {
    pub generate: String,
    pub oppose: String,
    pub synthesize: String,
}

impl fmt::Display for ReasoningResult {
    /// Sectioned text report, one labeled block per stage.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Generate]\n{}\n\n[Oppose]\n{}\n\n[Synthesize]\n{}",
            self.generate, self.oppose, self.synthesize
        )
    }
}
