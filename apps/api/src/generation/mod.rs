// Artifact generation: prompt building, the shared pipeline, output validation.
// All completion calls go through llm_client; no direct HTTP calls here.

pub mod handlers;
pub mod pipeline;
pub mod prompt_builder;
pub mod prompts;
pub mod validator;
