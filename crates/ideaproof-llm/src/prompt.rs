//! Advisor prompt construction.

pub const SYSTEM_PROMPT: &str = "You are an expert startup advisor and product strategist. \
You have built and sold startups, evaluated thousands of pitches as a venture partner, and \
mentored founders at top accelerators. You know market trends, user psychology, and business \
models.

Give structured, actionable insights a founder can use immediately to validate and improve \
their concept. Be specific, practical, and honest about both opportunities and challenges. \
Never give generic advice that would apply to any startup.";

/// JSON shape the model must answer with.
const RESPONSE_SHAPE: &str = r#"{
  "userPersona": "The ideal user persona in 2-3 sentences: demographics, behaviors, motivations",
  "painPoints": ["pain point 1", "pain point 2", "pain point 3", "pain point 4"],
  "competitors": ["direct competitor 1", "indirect competitor 2", "alternative solution 3", "traditional method 4", "emerging competitor 5"],
  "mvpFeatures": ["essential feature 1", "core feature 2", "must-have feature 3", "basic feature 4", "foundational feature 5"],
  "launchAdvice": ["actionable advice 1", "strategic recommendation 2", "tactical step 3", "marketing insight 4"]
}"#;

const GUIDELINES: &str = "Guidelines:
- User persona: name age ranges, income levels, job roles, tech-savviness and motivations.
- Pain points: real, validated problems that cost time or money. Quantify when possible.
- Competitors: direct competitors, indirect alternatives, current workarounds, and future threats. Name real companies where they exist.
- MVP features: only what the core value proposition needs.
- Launch advice: concrete next steps covering go-to-market, validation, and growth.

Keep every point concise (1-2 sentences) and specific to this idea. \
Respond with the JSON object only, no commentary.";

/// Build the user prompt. The idea is embedded verbatim in a quoted block.
pub fn build_user_prompt(idea: &str) -> String {
    format!(
        "Analyze this startup idea and provide a validation report:\n\n\
         \"{}\"\n\n\
         Answer in exactly this JSON format:\n{}\n\n{}",
        idea, RESPONSE_SHAPE, GUIDELINES
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_embedded_verbatim() {
        let idea = "A \"quoted\" idea\nwith {braces} and 日本語";
        let prompt = build_user_prompt(idea);
        assert!(prompt.contains(&format!("\"{}\"", idea)));
    }

    #[test]
    fn test_prompt_names_every_field() {
        let prompt = build_user_prompt("anything");
        for field in [
            "userPersona",
            "painPoints",
            "competitors",
            "mvpFeatures",
            "launchAdvice",
        ] {
            assert!(prompt.contains(field), "missing {}", field);
        }
        assert!(prompt.contains("JSON object only"));
    }
}
