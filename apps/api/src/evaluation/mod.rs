// ATS evaluation: resume extraction, prompt assembly, Gemini call, typed result parse.
// All LLM calls go through llm_client; this module only sees the TextGenerator trait.

pub mod extractor;
pub mod handlers;
pub mod parser;
pub mod pipeline;
pub mod prompts;
