//! Keyword-based idea classification.
//!
//! Matching is plain substring containment on the lower-cased idea, so short
//! keywords also hit inside longer words ("ai" in "email").

/// Topic a startup idea can touch. Several can apply at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    MobileApp,
    Ai,
    Ecommerce,
    Saas,
    Healthcare,
    Fintech,
    Education,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::MobileApp,
        Category::Ai,
        Category::Ecommerce,
        Category::Saas,
        Category::Healthcare,
        Category::Fintech,
        Category::Education,
    ];

    /// Keywords whose presence sets this category.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::MobileApp => &["app", "mobile"],
            Category::Ai => &["ai", "artificial intelligence", "machine learning"],
            Category::Ecommerce => &["ecommerce", "shop", "buy", "marketplace"],
            Category::Saas => &["saas", "software", "platform", "dashboard"],
            Category::Healthcare => &["health", "medical", "fitness"],
            Category::Fintech => &["fintech", "payment", "banking", "finance"],
            Category::Education => &["education", "learning", "course", "teach"],
        }
    }
}

/// Independent topic flags derived from an idea.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdeaCategories {
    pub mobile_app: bool,
    pub ai: bool,
    pub ecommerce: bool,
    pub saas: bool,
    pub healthcare: bool,
    pub fintech: bool,
    pub education: bool,
}

impl IdeaCategories {
    /// Classify idea text. Lower-cases once, then tests every keyword set.
    pub fn classify(idea: &str) -> Self {
        let lower = idea.to_lowercase();
        let hit = |c: Category| c.keywords().iter().any(|kw| lower.contains(kw));

        Self {
            mobile_app: hit(Category::MobileApp),
            ai: hit(Category::Ai),
            ecommerce: hit(Category::Ecommerce),
            saas: hit(Category::Saas),
            healthcare: hit(Category::Healthcare),
            fintech: hit(Category::Fintech),
            education: hit(Category::Education),
        }
    }

    pub fn contains(&self, category: Category) -> bool {
        match category {
            Category::MobileApp => self.mobile_app,
            Category::Ai => self.ai,
            Category::Ecommerce => self.ecommerce,
            Category::Saas => self.saas,
            Category::Healthcare => self.healthcare,
            Category::Fintech => self.fintech,
            Category::Education => self.education,
        }
    }

    /// First category of `priority` that is set.
    pub fn first_of(&self, priority: &[Category]) -> Option<Category> {
        priority.iter().copied().find(|c| self.contains(*c))
    }

    /// All set categories, in declaration order.
    pub fn matched(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|c| self.contains(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match() {
        let cats = IdeaCategories::classify("lorem ipsum dolor sit amet");
        assert_eq!(cats, IdeaCategories::default());
        assert!(cats.matched().is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let cats = IdeaCategories::classify("A MOBILE FITNESS Tracker");
        assert!(cats.mobile_app);
        assert!(cats.healthcare);
        assert!(!cats.fintech);
    }

    #[test]
    fn test_flags_are_independent() {
        let cats = IdeaCategories::classify("SaaS payment platform for online course creators");
        assert_eq!(
            cats.matched(),
            vec![Category::Saas, Category::Fintech, Category::Education]
        );
    }

    #[test]
    fn test_substring_semantics() {
        // "ai" inside "email", "app" inside "happy".
        let cats = IdeaCategories::classify("email for happy customers");
        assert!(cats.ai);
        assert!(cats.mobile_app);
    }

    #[test]
    fn test_multiword_keywords() {
        assert!(IdeaCategories::classify("Artificial Intelligence copilots").ai);
        assert!(IdeaCategories::classify("applied machine learning").ai);
        assert!(IdeaCategories::classify("We teach cooking").education);
    }

    #[test]
    fn test_first_of_respects_priority() {
        let cats = IdeaCategories::classify("a healthcare fintech app");
        assert_eq!(
            cats.first_of(&[Category::Fintech, Category::Healthcare]),
            Some(Category::Fintech)
        );
        assert_eq!(
            cats.first_of(&[Category::Healthcare, Category::Fintech]),
            Some(Category::Healthcare)
        );
        assert_eq!(cats.first_of(&[Category::Education]), None);
    }
}
