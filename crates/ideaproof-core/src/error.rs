//! Error types for Ideaproof.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No model credentials configured")]
    CredentialsMissing,

    #[error("Upstream model call failed: {0}")]
    Upstream(String),

    #[error("Model returned malformed JSON: {reason}")]
    MalformedResponse { reason: String, raw: String },

    #[error("Model response has an incomplete structure: {0}")]
    IncompleteStructure(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Stable tag for this error, used in API responses and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::CredentialsMissing => "credentials_missing",
            Error::Upstream(_) => "upstream_error",
            Error::MalformedResponse { .. } => "malformed_response",
            Error::IncompleteStructure(_) => "incomplete_structure",
            Error::Config(_) => "config",
            Error::Io(_) => "io",
            Error::Json(_) => "json",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(Error::CredentialsMissing.kind(), "credentials_missing");
        assert_eq!(Error::Upstream("503".into()).kind(), "upstream_error");
        let malformed = Error::MalformedResponse {
            reason: "EOF while parsing".into(),
            raw: "{".into(),
        };
        assert_eq!(malformed.kind(), "malformed_response");
        assert_eq!(
            Error::IncompleteStructure("launchAdvice".into()).kind(),
            "incomplete_structure"
        );
    }

    #[test]
    fn test_malformed_message_omits_raw() {
        let err = Error::MalformedResponse {
            reason: "expected value".into(),
            raw: "not json at all".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("expected value"));
        assert!(!msg.contains("not json at all"));
    }
}
