//! Content records shared by the brain selectors.

use serde::Serialize;

/// A piece of guidance a brain can surface (technique, exercise, framework).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentRecord {
    pub name: &'static str,
    /// What the record is, in one sentence
    pub description: &'static str,
    /// Instruction text handed to the prompt layer
    pub prompt: &'static str,
    /// Lower-case trigger keywords
    #[serde(skip)]
    pub triggers: &'static [&'static str],
}

impl ContentRecord {
    /// Whether any trigger is contained in an already lower-cased text
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|trigger| lowered.contains(trigger))
    }
}

/// First record, in declaration order, whose triggers hit the message.
///
/// List order is priority order; later records are never considered once
/// an earlier one matches.
pub fn first_match(records: &'static [ContentRecord], message: &str) -> Option<&'static ContentRecord> {
    let text = message.to_lowercase();
    records.iter().find(|record| record.matches(&text))
}
