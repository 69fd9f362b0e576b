//! Runtime types.

use ideaproof_core::{FailurePolicy, ValidationReport};
use serde::Serialize;

/// Which path produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    /// Parsed from the external model's answer.
    Live,
    /// Built by the keyword synthesizer.
    Fallback,
}

/// A report together with its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutcome {
    pub report: ValidationReport,
    pub source: ReportSource,
}

/// Orchestrator status information.
#[derive(Debug, Clone, Serialize)]
pub struct OrchestratorStatus {
    #[serde(rename = "liveModel")]
    pub live_model: bool,
    pub model: Option<String>,
    pub policy: FailurePolicy,
    #[serde(rename = "maxInflight")]
    pub max_inflight: Option<usize>,
}
