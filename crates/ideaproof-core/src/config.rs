//! Process configuration and the failure policy.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 3010;

/// Longest idea text accepted from callers, in characters.
pub const MAX_IDEA_CHARS: usize = 2000;

/// What the orchestrator does when the live model path cannot produce a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Surface every failure to the caller, including missing credentials.
    Strict,
    /// Answer with the heuristic fallback report whenever the live path fails.
    #[default]
    Resilient,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Strict => write!(f, "strict"),
            FailurePolicy::Resilient => write!(f, "resilient"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(FailurePolicy::Strict),
            "resilient" => Ok(FailurePolicy::Resilient),
            other => Err(Error::Config(format!(
                "unknown failure policy '{}' (expected strict or resilient)",
                other
            ))),
        }
    }
}

/// Top-level Ideaproof configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaproofConfig {
    /// HTTP server port.
    pub port: u16,
    /// Failure policy applied by the orchestrator.
    pub policy: FailurePolicy,
    /// Cap on outstanding external model calls (None = uncapped).
    pub max_inflight: Option<usize>,
    /// Caller-side cap on idea length.
    pub max_idea_chars: usize,
    /// Root data directory.
    pub data_dir: PathBuf,
    /// LLM provider configuration (`data/llm-config.json`).
    pub llm_config_file: PathBuf,
}

impl IdeaproofConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_lookup(data_dir, |key| std::env::var(key).ok())
    }

    /// Create configuration reading settings through `lookup`.
    pub fn from_lookup<F>(data_dir: impl AsRef<Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = data_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&data_dir)?;

        let port = match lookup("PORT") {
            Some(p) => p
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("invalid PORT '{}'", p)))?,
            None => DEFAULT_PORT,
        };

        let policy = match lookup("IDEAPROOF_POLICY") {
            Some(p) => p.parse()?,
            None => FailurePolicy::default(),
        };

        let max_inflight = match lookup("IDEAPROOF_MAX_INFLIGHT") {
            Some(n) => {
                let n: usize = n.trim().parse().map_err(|_| {
                    Error::Config(format!("invalid IDEAPROOF_MAX_INFLIGHT '{}'", n))
                })?;
                (n > 0).then_some(n)
            }
            None => None,
        };

        Ok(Self {
            port,
            policy,
            max_inflight,
            max_idea_chars: MAX_IDEA_CHARS,
            llm_config_file: data_dir.join("llm-config.json"),
            data_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = IdeaproofConfig::from_lookup(dir.path(), lookup_from(&[])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.policy, FailurePolicy::Resilient);
        assert_eq!(config.max_inflight, None);
        assert_eq!(config.max_idea_chars, 2000);
        assert_eq!(config.llm_config_file, dir.path().join("llm-config.json"));
    }

    #[test]
    fn test_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let config = IdeaproofConfig::from_lookup(
            dir.path(),
            lookup_from(&[
                ("PORT", "8080"),
                ("IDEAPROOF_POLICY", "Strict"),
                ("IDEAPROOF_MAX_INFLIGHT", "4"),
            ]),
        )
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.policy, FailurePolicy::Strict);
        assert_eq!(config.max_inflight, Some(4));
    }

    #[test]
    fn test_zero_inflight_means_uncapped() {
        let dir = tempfile::tempdir().unwrap();
        let config = IdeaproofConfig::from_lookup(
            dir.path(),
            lookup_from(&[("IDEAPROOF_MAX_INFLIGHT", "0")]),
        )
        .unwrap();
        assert_eq!(config.max_inflight, None);
    }

    #[test]
    fn test_invalid_policy() {
        let dir = tempfile::tempdir().unwrap();
        let err = IdeaproofConfig::from_lookup(
            dir.path(),
            lookup_from(&[("IDEAPROOF_POLICY", "lenient")]),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "config");
    }

    #[test]
    fn test_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested/data");
        IdeaproofConfig::from_lookup(&nested, lookup_from(&[])).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_policy_display_roundtrip() {
        for policy in [FailurePolicy::Strict, FailurePolicy::Resilient] {
            assert_eq!(policy.to_string().parse::<FailurePolicy>().unwrap(), policy);
        }
    }
}
