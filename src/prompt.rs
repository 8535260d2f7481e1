use crate::types::ReasoningRequest;

/// Template for the divergent generation stage.
pub const GENERATE_TEMPLATE: &str =
    "Topic: {topic}\nGoal: {goal}\nConstraints: {constraints}\nGenerate 5 approaches.";

/// Template for the adversarial critique stage.
pub const OPPOSE_TEMPLATE: &str =
    "Oppose the following:\n{generated}\nList tensions, risks, and the top 2 approaches.";

/// Template for the final fusion stage.
pub const SYNTHESIZE_TEMPLATE: &str =
    "Fuse these perspectives:\n{opposed}\nReturn a final plan, rationale, metrics, and risks.";

/// Render the generate-stage prompt from the request fields.
pub fn generate(request: &ReasoningRequest) -> String {
    GENERATE_TEMPLATE
        .replace("{topic}", &request.topic)
        .replace("{goal}", &request.goal)
        .replace("{constraints}", &request.constraints)
}

/// Render the oppose-stage prompt, embedding the full generate output.
pub fn oppose(generated: &str) -> String {
    OPPOSE_TEMPLATE.replace("{generated}", generated)
}

/// Render the synthesize-stage prompt, embedding the full oppose output.
pub fn synthesize(opposed: &str) -> String {
    SYNTHESIZE_TEMPLATE.replace("{opposed}", opposed)
}
