//! Runtime orchestrator: decides between the live model and the fallback
//! synthesizer and normalizes the outcome into a report or a typed error.

pub mod orchestrator;
pub mod types;

pub use orchestrator::Orchestrator;
pub use types::*;
