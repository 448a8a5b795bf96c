//! Chat-completion client for the hosted LLM backends.
//!
//! One `LlmClient` speaks either the OpenAI chat-completions protocol or the
//! Gemini `generateContent` protocol, selected at construction time. Both
//! request a JSON-only response and hand back the model's output parsed as
//! `serde_json::Value`; shape enforcement happens downstream in the coercer.

pub mod client;
pub mod error;
pub mod prompt;

pub use client::LlmClient;
pub use error::LlmError;
pub use prompt::build_prompt;
