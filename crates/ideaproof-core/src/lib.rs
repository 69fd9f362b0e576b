//! Ideaproof Core — report model, error taxonomy, configuration.

pub mod config;
pub mod error;
pub mod report;

pub use config::{FailurePolicy, IdeaproofConfig};
pub use error::{Error, Result};
pub use report::ValidationReport;
