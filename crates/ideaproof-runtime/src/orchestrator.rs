//! Orchestrator, the single entry point for idea validation.

use std::sync::Arc;

use ideaproof_core::{Error, FailurePolicy, IdeaproofConfig, Result, ValidationReport};
use ideaproof_llm::prompt::{build_user_prompt, SYSTEM_PROMPT};
use ideaproof_llm::{parse_report, HttpModelClient, LLMConfig, ModelClient};
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

use crate::types::*;

/// Top-level orchestrator. Holds no per-request state.
pub struct Orchestrator {
    client: Option<Arc<dyn ModelClient>>,
    policy: FailurePolicy,
    limiter: Option<Arc<Semaphore>>,
    max_inflight: Option<usize>,
}

impl Orchestrator {
    /// Create an orchestrator. `client: None` means no credentials are configured.
    pub fn new(client: Option<Arc<dyn ModelClient>>, policy: FailurePolicy) -> Self {
        Self {
            client,
            policy,
            limiter: None,
            max_inflight: None,
        }
    }

    /// Cap the number of outstanding external model calls.
    pub fn with_max_inflight(mut self, max_inflight: usize) -> Self {
        let permits = max_inflight.max(1);
        self.limiter = Some(Arc::new(Semaphore::new(permits)));
        self.max_inflight = Some(permits);
        self
    }

    /// Build from process and LLM configuration.
    pub fn from_config(config: &IdeaproofConfig, llm_config: &LLMConfig) -> Self {
        let client = llm_config.resolve_provider().map(|resolved| {
            Arc::new(HttpModelClient::new(resolved)) as Arc<dyn ModelClient>
        });

        let orchestrator = Self::new(client, config.policy);
        let orchestrator = match config.max_inflight {
            Some(n) => orchestrator.with_max_inflight(n),
            None => orchestrator,
        };

        info!(
            "Orchestrator initialized: live_model={}, policy={}, max_inflight={:?}",
            orchestrator.client.is_some(),
            orchestrator.policy,
            orchestrator.max_inflight
        );
        orchestrator
    }

    pub fn status(&self) -> OrchestratorStatus {
        OrchestratorStatus {
            live_model: self.client.is_some(),
            model: self.client.as_ref().map(|c| c.describe()),
            policy: self.policy,
            max_inflight: self.max_inflight,
        }
    }

    /// Validate an idea, returning only the report.
    pub async fn validate_idea(&self, idea: &str) -> Result<ValidationReport> {
        self.validate_idea_detailed(idea).await.map(|o| o.report)
    }

    /// Validate an idea, reporting which path produced the result.
    ///
    /// Strict policy surfaces `CredentialsMissing`, `Upstream`,
    /// `MalformedResponse` and `IncompleteStructure`. Resilient policy
    /// answers every one of those with the fallback report instead.
    pub async fn validate_idea_detailed(&self, idea: &str) -> Result<ValidationOutcome> {
        let Some(client) = &self.client else {
            return match self.policy {
                FailurePolicy::Strict => {
                    warn!("Validation refused: no model credentials (strict policy)");
                    Err(Error::CredentialsMissing)
                }
                FailurePolicy::Resilient => {
                    info!("No model credentials, using fallback synthesizer");
                    Ok(fallback(idea))
                }
            };
        };

        info!("Validating idea via live model {}", client.describe());

        match self.live(client.as_ref(), idea).await {
            Ok(report) => Ok(ValidationOutcome {
                report,
                source: ReportSource::Live,
            }),
            Err(e) => {
                if let Error::MalformedResponse { raw, .. } = &e {
                    debug!("Raw model output: {}", raw);
                }
                match self.policy {
                    FailurePolicy::Strict => {
                        error!("Live validation failed ({}): {}", e.kind(), e);
                        Err(e)
                    }
                    FailurePolicy::Resilient => {
                        warn!(
                            "Live validation failed ({}): {}; using fallback synthesizer",
                            e.kind(),
                            e
                        );
                        Ok(fallback(idea))
                    }
                }
            }
        }
    }

    /// One external call, then parse and check.
    async fn live(&self, client: &dyn ModelClient, idea: &str) -> Result<ValidationReport> {
        let _permit = match &self.limiter {
            Some(limiter) => Some(
                limiter
                    .acquire()
                    .await
                    .map_err(|e| Error::Upstream(format!("call limiter closed: {}", e)))?,
            ),
            None => None,
        };

        let prompt = build_user_prompt(idea);
        let text = client.complete(SYSTEM_PROMPT, &prompt).await?;
        debug!("Model returned {} bytes", text.len());
        parse_report(&text)
    }
}

fn fallback(idea: &str) -> ValidationOutcome {
    ValidationOutcome {
        report: ideaproof_synth::synthesize(idea),
        source: ReportSource::Fallback,
    }
}
