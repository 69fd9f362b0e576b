//! Turning raw model text into a checked report.

use ideaproof_core::{Error, Result, ValidationReport};
use tracing::debug;

/// Strip an optional Markdown code fence (with or without a language tag).
pub fn strip_code_fences(raw: &str) -> &str {
    let text = raw.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // A language tag is a word directly after the opening fence, ended by
    // whitespace or the start of the JSON body.
    let tag_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || "_+-.".contains(c)))
        .unwrap_or(rest.len());
    let body = match rest[tag_len..].chars().next() {
        Some(c) if c.is_whitespace() || c == '{' || c == '[' => &rest[tag_len..],
        _ => rest,
    };

    let body = body.trim();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse model output into a `ValidationReport`.
///
/// Text that is not JSON after fence-stripping is `MalformedResponse` (with
/// the unmodified text kept for diagnostics); JSON with missing or mistyped
/// fields, or failing the report invariant, is `IncompleteStructure`.
pub fn parse_report(raw: &str) -> Result<ValidationReport> {
    let body = strip_code_fences(raw);

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| Error::MalformedResponse {
            reason: e.to_string(),
            raw: raw.to_string(),
        })?;

    let report: ValidationReport = serde_json::from_value(value)
        .map_err(|e| Error::IncompleteStructure(e.to_string()))?;
    report.validate()?;

    debug!(
        "Parsed report: {} pain points, {} competitors",
        report.pain_points.len(),
        report.competitors.len()
    );
    Ok(report)
}
