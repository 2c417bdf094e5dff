//! Trigger lexicons.
//!
//! Weighted keyword lists per support category plus the crisis phrase list.
//! The built-in set is compiled once on first use and shared read-only for
//! the rest of the process. Alternate sets can be loaded from JSON at
//! startup; there is no way to mutate a set once it is built.
//!
//! Keywords are matched by plain substring containment against the
//! lower-cased message, so short keywords also hit inside longer words
//! ("plan" inside "planet").

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tracing::info;
use validator::Validate;

use super::mode::Category;
use crate::error::{BrainError, Result};

/// Version tag of the built-in lexicon set.
pub const LEXICON_VERSION: &str = "1.0.0";

/// Phrases that trigger the crisis override.
const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "end it all",
    "want to die",
    "wish i was dead",
    "wish i were dead",
    "self harm",
    "self-harm",
    "hurt myself",
    "cutting myself",
    "no reason to live",
    "better off without me",
    "can't go on",
    "end my life",
    "hurt my baby",
    "hurt my child",
];

const EMOTIONAL_HIGH: &[&str] = &[
    "overwhelmed",
    "anxious",
    "anxiety",
    "panic",
    "depressed",
    "depression",
    "crying",
    "bad mom",
    "bad mother",
    "mom guilt",
    "guilty",
    "hopeless",
    "worthless",
    "exhausted",
    "burnout",
    "burned out",
    "lonely",
    "can't cope",
    "breaking down",
    "postpartum",
];

const EMOTIONAL_MEDIUM: &[&str] = &[
    "stressed",
    "worried",
    "sad",
    "frustrated",
    "angry",
    "scared",
    "hurt",
    "upset",
    "tired",
    "resent",
    "failing",
    "feel like",
    "struggling",
];

const EMOTIONAL_LOW: &[&str] = &[
    "feel",
    "feeling",
    "mood",
    "emotional",
    "tough",
    "hard day",
    "rough",
    "heavy",
];

const LOGISTIC_HIGH: &[&str] = &[
    "schedule",
    "appointment",
    "deadline",
    "birthday party",
    "plan",
    "organize",
    "calendar",
    "pick up",
    "pickup",
    "drop off",
    "grocery",
    "groceries",
    "to-do",
    "carpool",
    "permission slip",
    "field trip",
];

const LOGISTIC_MEDIUM: &[&str] = &[
    "remind",
    "meeting",
    "errand",
    "school",
    "book",
    "register",
    "sign up",
    "email",
    "list",
    "dinner",
    "laundry",
    "pack",
    "reschedule",
    "practice",
];

const LOGISTIC_LOW: &[&str] = &[
    "need to",
    "tomorrow",
    "this week",
    "later",
    "busy",
    "remember",
    "weekend",
];

const GROWTH_HIGH: &[&str] = &[
    "career",
    "promotion",
    "job interview",
    "raise",
    "salary",
    "goal",
    "leadership",
    "negotiate",
    "confidence",
    "back to work",
    "return to work",
    "tantrum",
    "meltdown",
    "discipline",
];

const GROWTH_MEDIUM: &[&str] = &[
    "learn",
    "grow",
    "improve",
    "skill",
    "habit",
    "parenting",
    "manager",
    "boss",
    "purpose",
    "burnout",
    "bedtime",
    "screen time",
    "sibling",
    "routine",
];

const GROWTH_LOW: &[&str] = &[
    "better",
    "future",
    "change",
    "try",
    "want to",
    "someday",
    "progress",
];

/// Weight tier of a trigger keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    /// Tiers in scoring order
    pub const ALL: [Tier; 3] = [Tier::High, Tier::Medium, Tier::Low];

    /// Points added to a category score per matching keyword
    pub fn weight(&self) -> u32 {
        match self {
            Tier::High => 3,
            Tier::Medium => 2,
            Tier::Low => 1,
        }
    }
}

/// Keyword lists of one category, split by weight tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredKeywords {
    #[serde(default)]
    pub high: Vec<String>,
    #[serde(default)]
    pub medium: Vec<String>,
    #[serde(default)]
    pub low: Vec<String>,
}

impl TieredKeywords {
    fn from_static(high: &[&str], medium: &[&str], low: &[&str]) -> Self {
        let owned =
            |words: &[&str]| -> Vec<String> { words.iter().map(|w| w.to_string()).collect() };
        Self {
            high: owned(high),
            medium: owned(medium),
            low: owned(low),
        }
    }

    /// Keywords of a single tier, in declaration order
    pub fn tier(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::High => &self.high,
            Tier::Medium => &self.medium,
            Tier::Low => &self.low,
        }
    }

    /// Every `(tier, keyword)` pair, high tier first
    pub fn entries(&self) -> impl Iterator<Item = (Tier, &str)> + '_ {
        Tier::ALL
            .into_iter()
            .flat_map(move |tier| self.tier(tier).iter().map(move |kw| (tier, kw.as_str())))
    }

    /// Total number of keywords across tiers
    pub fn len(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn normalize(&mut self) {
        for list in [&mut self.high, &mut self.medium, &mut self.low] {
            for keyword in list.iter_mut() {
                *keyword = keyword.trim().to_lowercase();
            }
        }
    }
}

/// A complete, versioned set of trigger lexicons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Lexicons {
    /// Version tag, reported in logs when the set is loaded
    #[validate(length(min = 1))]
    pub version: String,
    /// Phrases that flag a message as a crisis
    #[validate(length(min = 1))]
    pub crisis_phrases: Vec<String>,
    pub emotional: TieredKeywords,
    pub logistic: TieredKeywords,
    pub growth: TieredKeywords,
}

static DEFAULT_LEXICONS: LazyLock<Arc<Lexicons>> = LazyLock::new(|| {
    let lexicons = Lexicons::builtin();
    info!(version = %lexicons.version, "Built-in trigger lexicons initialized");
    Arc::new(lexicons)
});

/// Process-wide built-in lexicon set.
///
/// Every call hands out the same shared instance.
pub fn default_lexicons() -> Arc<Lexicons> {
    Arc::clone(&DEFAULT_LEXICONS)
}

impl Lexicons {
    /// Build a fresh copy of the built-in lexicons
    pub fn builtin() -> Self {
        Self {
            version: LEXICON_VERSION.to_string(),
            crisis_phrases: CRISIS_PHRASES.iter().map(|p| p.to_string()).collect(),
            emotional: TieredKeywords::from_static(EMOTIONAL_HIGH, EMOTIONAL_MEDIUM, EMOTIONAL_LOW),
            logistic: TieredKeywords::from_static(LOGISTIC_HIGH, LOGISTIC_MEDIUM, LOGISTIC_LOW),
            growth: TieredKeywords::from_static(GROWTH_HIGH, GROWTH_MEDIUM, GROWTH_LOW),
        }
    }

    /// Keyword lists for one category
    pub fn category(&self, category: Category) -> &TieredKeywords {
        match category {
            Category::Emotional => &self.emotional,
            Category::Logistic => &self.logistic,
            Category::Growth => &self.growth,
        }
    }

    /// Parse and validate a lexicon set from JSON.
    ///
    /// Keywords are trimmed and lower-cased before validation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut lexicons: Lexicons = serde_json::from_str(json)?;
        lexicons.normalize();
        lexicons.validate()?;
        lexicons.check_entries()?;
        info!(
            version = %lexicons.version,
            crisis_phrases = lexicons.crisis_phrases.len(),
            "Loaded trigger lexicons"
        );
        Ok(lexicons)
    }

    /// Read a lexicon set from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    fn normalize(&mut self) {
        self.version = self.version.trim().to_string();
        for phrase in self.crisis_phrases.iter_mut() {
            *phrase = phrase.trim().to_lowercase();
        }
        self.emotional.normalize();
        self.logistic.normalize();
        self.growth.normalize();
    }

    /// An empty keyword would match every message.
    fn check_entries(&self) -> Result<()> {
        if self.crisis_phrases.iter().any(|p| p.is_empty()) {
            return Err(BrainError::Validation(
                "crisis_phrases contains an empty phrase".to_string(),
            ));
        }
        for category in Category::ALL {
            if self.category(category).entries().any(|(_, kw)| kw.is_empty()) {
                return Err(BrainError::Validation(format!(
                    "{} lexicon contains an empty keyword",
                    category
                )));
            }
        }
        Ok(())
    }
}
