/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Prompt templates for the text generator.
pub mod prompts;
/// Round engine: snippets, hints and guesses.
pub mod round_service;
