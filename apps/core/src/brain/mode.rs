//! Support modes and the routing decision structure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse support category a message is routed toward.
///
/// Declaration order is the tie-break order used by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Emotional support (validation, coping, grounding)
    Emotional,
    /// Task and logistics support (planning, invisible labor, drafts)
    Logistic,
    /// Coaching and growth support (career, parenting frameworks)
    Growth,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    /// All categories in tie-break order.
    pub const ALL: [Category; 3] = [Category::Emotional, Category::Logistic, Category::Growth];

    /// Returns a lowercase label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Emotional => "emotional",
            Category::Logistic => "logistic",
            Category::Growth => "growth",
        }
    }
}

/// Weighted keyword score per category for a single message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeScore {
    pub emotional: u32,
    pub logistic: u32,
    pub growth: u32,
}

impl ModeScore {
    pub fn new(emotional: u32, logistic: u32, growth: u32) -> Self {
        Self {
            emotional,
            logistic,
            growth,
        }
    }

    /// Score for one category
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Emotional => self.emotional,
            Category::Logistic => self.logistic,
            Category::Growth => self.growth,
        }
    }

    /// Categories sorted by score, highest first.
    ///
    /// The sort is stable over `Category::ALL`, so equal scores keep
    /// enumeration order.
    pub fn ranked(&self) -> [(Category, u32); 3] {
        let mut ranked = Category::ALL.map(|category| (category, self.get(category)));
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Outcome of mode detection for one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeDetectionResult {
    /// Highest-scoring category
    pub primary_mode: Category,
    /// Second-ranked category, present only when blending
    pub secondary_mode: Option<Category>,
    /// Scores after the crisis bonus has been applied
    pub scores: ModeScore,
    /// Whether a crisis phrase was found
    pub is_crisis: bool,
    /// Whether the secondary mode's guidance should be blended in
    pub blend_modes: bool,
}

impl ModeDetectionResult {
    /// Short one-line description for logging
    pub fn summary(&self) -> String {
        format!(
            "Primary: {} ({}), Secondary: {}, Crisis: {}, Scores: e={} l={} g={}",
            self.primary_mode,
            self.scores.get(self.primary_mode),
            self.secondary_mode
                .map(|c| c.label())
                .unwrap_or("none"),
            if self.is_crisis { "yes" } else { "no" },
            self.scores.emotional,
            self.scores.logistic,
            self.scores.growth,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_orders_by_score() {
        let ranked = ModeScore::new(1, 7, 3).ranked();
        assert_eq!(ranked[0], (Category::Logistic, 7));
        assert_eq!(ranked[1], (Category::Growth, 3));
        assert_eq!(ranked[2], (Category::Emotional, 1));
    }

    #[test]
    fn test_ranked_ties_keep_enumeration_order() {
        let ranked = ModeScore::new(0, 0, 0).ranked();
        assert_eq!(ranked.map(|(c, _)| c), Category::ALL);

        let ranked = ModeScore::new(2, 5, 5).ranked();
        assert_eq!(ranked[0].0, Category::Logistic);
        assert_eq!(ranked[1].0, Category::Growth);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Emotional.label(), "emotional");
        assert_eq!(Category::Logistic.to_string(), "logistic");
        assert_eq!(Category::Growth.label(), "growth");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = ModeDetectionResult {
            primary_mode: Category::Emotional,
            secondary_mode: Some(Category::Logistic),
            scores: ModeScore::new(9, 7, 0),
            is_crisis: false,
            blend_modes: true,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["primaryMode"], "emotional");
        assert_eq!(json["secondaryMode"], "logistic");
        assert_eq!(json["blendModes"], true);
        assert_eq!(json["scores"]["logistic"], 7);
    }

    #[test]
    fn test_summary() {
        let result = ModeDetectionResult {
            primary_mode: Category::Growth,
            secondary_mode: None,
            scores: ModeScore::new(0, 0, 4),
            is_crisis: false,
            blend_modes: false,
        };
        let summary = result.summary();
        assert!(summary.contains("Primary: growth (4)"));
        assert!(summary.contains("Secondary: none"));
    }
}
