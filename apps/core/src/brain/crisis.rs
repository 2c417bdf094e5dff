//! Crisis detection.
//!
//! A crisis match forces emotional mode and replaces every other kind of
//! guidance with the fixed protocol below.

use tracing::warn;

use super::lexicon::{default_lexicons, Lexicons};

/// Protocol block handed to the prompt layer whenever a crisis is detected.
pub const CRISIS_PROTOCOL: &str = "\
CRISIS PROTOCOL: The user may be in danger. Respond with warmth and without judgment.
- Acknowledge their pain directly and thank them for telling you.
- Ask whether they are safe right now.
- Encourage them to contact emergency services (911 in the US) or to call or text 988 (Suicide & Crisis Lifeline).
- Offer the Crisis Text Line: text HOME to 741741.
- Stay with them in the conversation. Do not offer tasks, productivity tips, or coaching.";

/// Check a message against the built-in crisis phrases
pub fn detect_crisis(message: &str) -> bool {
    detect_crisis_with(message, &default_lexicons())
}

/// Check a message against the crisis phrases of a given lexicon set
pub fn detect_crisis_with(message: &str, lexicons: &Lexicons) -> bool {
    let text = message.to_lowercase();
    let is_crisis = lexicons
        .crisis_phrases
        .iter()
        .any(|phrase| text.contains(phrase.as_str()));

    if is_crisis {
        // Never log the message itself.
        warn!(lexicon_version = %lexicons.version, "Crisis phrase detected");
    }

    is_crisis
}
