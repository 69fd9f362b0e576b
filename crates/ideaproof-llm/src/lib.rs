//! External LLM collaborator for idea validation (Anthropic/OpenAI/Groq).
//!
//! Builds the advisor prompt, makes a single non-streaming completion call,
//! and turns the model's text into a checked `ValidationReport`.

pub mod config;
pub mod parse;
pub mod prompt;
pub mod providers;
pub mod types;

pub use config::{LLMConfig, ResolvedProvider};
pub use parse::{parse_report, strip_code_fences};
pub use providers::{HttpModelClient, ModelClient};
pub use types::*;
