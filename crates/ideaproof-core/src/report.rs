//! The five-field validation report and its structural invariant.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Accepted number of items per list field, inclusive.
pub const PAIN_POINTS_RANGE: (usize, usize) = (3, 4);
pub const COMPETITORS_RANGE: (usize, usize) = (4, 5);
pub const MVP_FEATURES_RANGE: (usize, usize) = (4, 5);
pub const LAUNCH_ADVICE_RANGE: (usize, usize) = (4, 4);

/// Structured startup-idea validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(rename = "userPersona")]
    pub user_persona: String,
    #[serde(rename = "painPoints")]
    pub pain_points: Vec<String>,
    pub competitors: Vec<String>,
    #[serde(rename = "mvpFeatures")]
    pub mvp_features: Vec<String>,
    #[serde(rename = "launchAdvice")]
    pub launch_advice: Vec<String>,
}

impl ValidationReport {
    /// Check field presence, list lengths and non-empty items.
    ///
    /// The persona is only required to be non-empty; its sentence count is
    /// asked for in the prompt but not checked here.
    ///
    /// Reports the first offending field as `Error::IncompleteStructure`.
    pub fn validate(&self) -> Result<()> {
        if self.user_persona.trim().is_empty() {
            return Err(Error::IncompleteStructure(
                "userPersona must not be empty".into(),
            ));
        }
        check_list("painPoints", &self.pain_points, PAIN_POINTS_RANGE)?;
        check_list("competitors", &self.competitors, COMPETITORS_RANGE)?;
        check_list("mvpFeatures", &self.mvp_features, MVP_FEATURES_RANGE)?;
        check_list("launchAdvice", &self.launch_advice, LAUNCH_ADVICE_RANGE)?;
        Ok(())
    }
}

fn check_list(field: &str, items: &[String], (min, max): (usize, usize)) -> Result<()> {
    if items.len() < min || items.len() > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{}-{}", min, max)
        };
        return Err(Error::IncompleteStructure(format!(
            "{} must have {} items, got {}",
            field,
            expected,
            items.len()
        )));
    }
    if let Some(pos) = items.iter().position(|s| s.trim().is_empty()) {
        return Err(Error::IncompleteStructure(format!(
            "{}[{}] must not be empty",
            field, pos
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> ValidationReport {
        ValidationReport {
            user_persona: "Busy parents in their thirties.".into(),
            pain_points: strings(&["a", "b", "c", "d"]),
            competitors: strings(&["a", "b", "c", "d", "e"]),
            mvp_features: strings(&["a", "b", "c", "d", "e"]),
            launch_advice: strings(&["a", "b", "c", "d"]),
        }
    }

    #[test]
    fn test_valid_report() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_lower_bounds_accepted() {
        let mut report = sample();
        report.pain_points.truncate(3);
        report.competitors.truncate(4);
        report.mvp_features.truncate(4);
        assert!(report.validate().is_ok());
    }

    #[test]
    fn test_blank_persona_rejected() {
        let mut report = sample();
        report.user_persona = "   ".into();
        let err = report.validate().unwrap_err();
        assert!(matches!(err, Error::IncompleteStructure(ref m) if m.contains("userPersona")));
    }

    #[test]
    fn test_long_persona_accepted() {
        let mut report = sample();
        report.user_persona =
            "Nurses aged 25-40. They work e.g. night shifts. They cook rarely. They shop online."
                .into();
        assert!(report.validate().is_ok());
    }

    #[test]
    fn test_wrong_lengths_rejected() {
        let mut report = sample();
        report.pain_points.truncate(2);
        assert!(report.validate().is_err());

        let mut report = sample();
        report.competitors.push("f".into());
        assert!(report.validate().is_err());

        let mut report = sample();
        report.launch_advice.truncate(3);
        let err = report.validate().unwrap_err();
        assert!(err.to_string().contains("launchAdvice must have 4 items, got 3"));
    }

    #[test]
    fn test_empty_item_rejected() {
        let mut report = sample();
        report.mvp_features[2] = "".into();
        let err = report.validate().unwrap_err();
        assert!(err.to_string().contains("mvpFeatures[2]"));
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value["userPersona"].is_string());
        assert!(value["painPoints"].is_array());
        assert!(value["competitors"].is_array());
        assert!(value["mvpFeatures"].is_array());
        assert!(value["launchAdvice"].is_array());
    }
}
