//! Weighted keyword scoring per category.

use super::lexicon::{Lexicons, Tier, TieredKeywords};
use super::mode::{Category, ModeScore};

/// Score one category for a message.
///
/// Each keyword contained in the lower-cased message adds its tier weight
/// once, no matter how often it occurs.
pub fn score_category(message: &str, lexicon: &TieredKeywords) -> u32 {
    score_lowered(&message.to_lowercase(), lexicon)
}

/// Score every category independently
pub fn score_all(message: &str, lexicons: &Lexicons) -> ModeScore {
    let text = message.to_lowercase();
    ModeScore {
        emotional: score_lowered(&text, lexicons.category(Category::Emotional)),
        logistic: score_lowered(&text, lexicons.category(Category::Logistic)),
        growth: score_lowered(&text, lexicons.category(Category::Growth)),
    }
}

/// Keywords of a category that hit the message, in declaration order
pub fn matched_keywords(message: &str, lexicon: &TieredKeywords) -> Vec<(Tier, String)> {
    let text = message.to_lowercase();
    lexicon
        .entries()
        .filter(|(_, keyword)| text.contains(keyword))
        .map(|(tier, keyword)| (tier, keyword.to_string()))
        .collect()
}

fn score_lowered(text: &str, lexicon: &TieredKeywords) -> u32 {
    lexicon
        .entries()
        .filter(|(_, keyword)| text.contains(keyword))
        .map(|(tier, _)| tier.weight())
        .sum()
}
