// Carousel generation: input model, audience and voice tables, prompt
// construction, result parsing, and the end-to-end pipeline.
// All LLM calls go through llm_client.

pub mod audience;
pub mod generator;
pub mod handlers;
pub mod input;
pub mod prompt_builder;
pub mod prompts;
pub mod result;
pub mod tone;
