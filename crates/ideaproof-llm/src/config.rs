//! LLM credential configuration and provider selection.
//!
//! This is the only place credentials are read from the environment. The
//! resolved provider is handed to the orchestrator at construction time.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::types::{LLMConfigResponse, LLMProvider};

pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// Stored LLM configuration (`llm-config.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    #[serde(default = "default_preferred")]
    pub preferred_provider: String,
    #[serde(default)]
    pub anthropic_api_key: Option<String>,
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub groq_api_key: Option<String>,
    #[serde(default = "default_anthropic_model")]
    pub anthropic_model: String,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default = "default_groq_model")]
    pub groq_model: String,
    /// Overrides the provider's API origin (proxies, local mocks).
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_preferred() -> String {
    "auto".into()
}
fn default_anthropic_model() -> String {
    DEFAULT_ANTHROPIC_MODEL.into()
}
fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.into()
}
fn default_groq_model() -> String {
    DEFAULT_GROQ_MODEL.into()
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            preferred_provider: default_preferred(),
            anthropic_api_key: None,
            openai_api_key: None,
            groq_api_key: None,
            anthropic_model: default_anthropic_model(),
            openai_model: default_openai_model(),
            groq_model: default_groq_model(),
            base_url: None,
        }
    }
}

/// Provider chosen for live calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub provider: LLMProvider,
    pub model: String,
    pub api_key: String,
    pub base_url: String,
}

impl LLMConfig {
    /// Load config from file, falling back to env vars and defaults.
    pub fn load(config_path: &Path) -> Self {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Load config from file, filling missing keys through `lookup`.
    pub fn load_with<F>(config_path: &Path, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: LLMConfig = match std::fs::read_to_string(config_path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!("Ignoring unreadable {}: {}", config_path.display(), e);
                LLMConfig::default()
            }),
            Err(_) => LLMConfig::default(),
        };

        config.anthropic_api_key = non_blank(config.anthropic_api_key.take())
            .or_else(|| non_blank(lookup("ANTHROPIC_API_KEY")));
        config.openai_api_key = non_blank(config.openai_api_key.take())
            .or_else(|| non_blank(lookup("OPENAI_API_KEY")));
        config.groq_api_key =
            non_blank(config.groq_api_key.take()).or_else(|| non_blank(lookup("GROQ_API_KEY")));

        match config.resolve_provider() {
            Some(resolved) => info!(
                "LLM provider resolved: {} ({})",
                resolved.provider, resolved.model
            ),
            None => info!("No LLM credentials configured"),
        }

        config
    }

    /// Resolve which provider, model and key to use.
    pub fn resolve_provider(&self) -> Option<ResolvedProvider> {
        let pick = |provider: LLMProvider| -> Option<ResolvedProvider> {
            let (key, model) = match provider {
                LLMProvider::Anthropic => (&self.anthropic_api_key, &self.anthropic_model),
                LLMProvider::OpenAI => (&self.openai_api_key, &self.openai_model),
                LLMProvider::Groq => (&self.groq_api_key, &self.groq_model),
            };
            key.as_ref().map(|k| ResolvedProvider {
                provider,
                model: model.clone(),
                api_key: k.clone(),
                base_url: self
                    .base_url
                    .clone()
                    .unwrap_or_else(|| provider.default_base_url().to_string()),
            })
        };

        // Explicit preference
        if self.preferred_provider != "auto" {
            return match self.preferred_provider.as_str() {
                "anthropic" => pick(LLMProvider::Anthropic),
                "openai" => pick(LLMProvider::OpenAI),
                "groq" => pick(LLMProvider::Groq),
                _ => None,
            };
        }

        // Auto mode: Anthropic > Groq > OpenAI
        pick(LLMProvider::Anthropic)
            .or_else(|| pick(LLMProvider::Groq))
            .or_else(|| pick(LLMProvider::OpenAI))
    }

    /// Build the public config response (no API keys exposed).
    pub fn to_response(&self) -> LLMConfigResponse {
        LLMConfigResponse {
            preferred_provider: self.preferred_provider.clone(),
            openai_configured: self.openai_api_key.is_some(),
            anthropic_configured: self.anthropic_api_key.is_some(),
            groq_configured: self.groq_api_key.is_some(),
            anthropic_model: self.anthropic_model.clone(),
            openai_model: self.openai_model.clone(),
            groq_model: self.groq_model.clone(),
            active_provider: self.resolve_provider().map(|r| r.provider.to_string()),
        }
    }
}

fn non_blank(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}
