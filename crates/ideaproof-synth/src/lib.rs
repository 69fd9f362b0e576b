//! Ideaproof Synth — heuristic report generation without a live model.
//!
//! `synthesize` classifies the idea by keyword containment and assembles a
//! report from canned text blocks. It is total and deterministic: the same
//! text always yields the same report and no input makes it fail.

pub mod classify;
pub mod tables;

pub use classify::IdeaCategories;

use ideaproof_core::ValidationReport;
use tracing::debug;

use classify::Category;

/// Build a fallback report for `idea`.
pub fn synthesize(idea: &str) -> ValidationReport {
    let categories = IdeaCategories::classify(idea);
    debug!("Fallback synthesis for categories {:?}", categories.matched());

    let persona = categories
        .first_of(&[
            Category::Healthcare,
            Category::Fintech,
            Category::Education,
            Category::MobileApp,
            Category::Saas,
        ])
        .map(tables::persona)
        .unwrap_or(tables::DEFAULT_PERSONA);

    let pain_points = categories
        .first_of(&[
            Category::Ai,
            Category::Healthcare,
            Category::Fintech,
            Category::Ecommerce,
        ])
        .and_then(tables::pain_points)
        .unwrap_or(tables::DEFAULT_PAIN_POINTS);

    let competitors = categories
        .first_of(&[
            Category::MobileApp,
            Category::Saas,
            Category::Healthcare,
            Category::Fintech,
        ])
        .and_then(tables::competitors)
        .unwrap_or(tables::DEFAULT_COMPETITORS);

    let mvp_features = categories
        .first_of(&[Category::MobileApp, Category::Saas])
        .and_then(tables::mvp_features)
        .unwrap_or(tables::DEFAULT_MVP_FEATURES);

    ValidationReport {
        user_persona: persona.to_string(),
        pain_points: to_owned(pain_points),
        competitors: to_owned(competitors),
        mvp_features: to_owned(mvp_features),
        launch_advice: to_owned(tables::LAUNCH_ADVICE),
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
