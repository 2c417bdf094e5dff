//! Emotional brain.
//!
//! Surfaces one coping technique and one grounding exercise for the
//! message, or the crisis protocol when the crisis flag is set.

use serde::Serialize;

use super::crisis::CRISIS_PROTOCOL;
use super::records::{first_match, ContentRecord};

/// Coping techniques in priority order
pub const COPING_TECHNIQUES: &[ContentRecord] = &[
    ContentRecord {
        name: "Box Breathing",
        description: "Four-count breathing that slows the stress response.",
        prompt: "Guide the user through box breathing: inhale for 4, hold for 4, exhale for 4, hold for 4, repeated four times.",
        triggers: &["panic", "anxious", "anxiety", "can't breathe", "racing heart"],
    },
    ContentRecord {
        name: "Self-Compassion Break",
        description: "Treating yourself the way you would treat a struggling friend.",
        prompt: "Offer a self-compassion break: name the pain, remind them that every parent struggles, and invite a kind phrase they can say to themselves.",
        triggers: &["bad mom", "bad mother", "guilt", "guilty", "failing", "not good enough"],
    },
    ContentRecord {
        name: "Name It to Tame It",
        description: "Labeling a strong emotion to reduce its intensity.",
        prompt: "Help the user name exactly what they are feeling and where they feel it in their body, without judging it.",
        triggers: &["angry", "frustrated", "rage", "snapped", "yelled"],
    },
    ContentRecord {
        name: "Permission to Rest",
        description: "Reframing rest as a need rather than a reward.",
        prompt: "Validate their exhaustion and help them find one small thing they can drop or postpone today so they can rest.",
        triggers: &["exhausted", "tired", "burned out", "burnout", "drained"],
    },
    ContentRecord {
        name: "Reach Out",
        description: "Reconnecting with one safe person.",
        prompt: "Gently explore who they could reach out to today, even with a short text, and what they might say.",
        triggers: &["lonely", "alone", "isolated", "no one understands"],
    },
    ContentRecord {
        name: "Good Enough Reset",
        description: "Lowering the bar to what is truly necessary today.",
        prompt: "Help them sort today's demands into must-do, nice-to-do, and can-wait, and celebrate doing just the must-dos.",
        triggers: &["overwhelmed", "too much", "can't keep up", "drowning"],
    },
];

/// Grounding exercises in priority order
pub const GROUNDING_EXERCISES: &[ContentRecord] = &[
    ContentRecord {
        name: "5-4-3-2-1 Senses",
        description: "Anchoring attention in the present through the five senses.",
        prompt: "Walk them through naming 5 things they see, 4 they can touch, 3 they hear, 2 they smell, and 1 they taste.",
        triggers: &["panic", "spiraling", "dissociat", "racing thoughts"],
    },
    ContentRecord {
        name: "Feet on the Floor",
        description: "A short physical grounding practice.",
        prompt: "Invite them to press their feet into the floor, notice the support beneath them, and take three slow breaths.",
        triggers: &["overwhelmed", "anxious", "frozen"],
    },
    ContentRecord {
        name: "Cold Water Reset",
        description: "Using temperature to interrupt an intense emotional wave.",
        prompt: "Suggest splashing cold water on their face or holding something cold for thirty seconds while breathing out slowly.",
        triggers: &["angry", "rage", "crying", "can't stop crying"],
    },
    ContentRecord {
        name: "Body Scan",
        description: "Releasing tension by moving attention through the body.",
        prompt: "Lead a short body scan from head to toe, softening each area of tension they notice.",
        triggers: &["tense", "can't sleep", "insomnia", "tired"],
    },
];

/// What the emotional brain contributes for a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmotionalGuidance {
    /// Crisis path: the fixed protocol and nothing else
    Crisis { protocol: &'static str },
    /// Regular support content
    Support {
        technique: Option<&'static ContentRecord>,
        exercise: Option<&'static ContentRecord>,
    },
}

impl EmotionalGuidance {
    pub fn is_crisis(&self) -> bool {
        matches!(self, EmotionalGuidance::Crisis { .. })
    }
}

/// First matching coping technique
pub fn select_technique(message: &str) -> Option<&'static ContentRecord> {
    first_match(COPING_TECHNIQUES, message)
}

/// First matching grounding exercise
pub fn select_exercise(message: &str) -> Option<&'static ContentRecord> {
    first_match(GROUNDING_EXERCISES, message)
}

/// Best single record: a technique if one matches, otherwise an exercise
pub fn select_content(message: &str) -> Option<&'static ContentRecord> {
    select_technique(message).or_else(|| select_exercise(message))
}

/// Emotional guidance for a message.
///
/// With `is_crisis` set the record lists are not scanned at all.
pub fn guidance(message: &str, is_crisis: bool) -> EmotionalGuidance {
    if is_crisis {
        return EmotionalGuidance::Crisis {
            protocol: CRISIS_PROTOCOL,
        };
    }

    EmotionalGuidance::Support {
        technique: select_technique(message),
        exercise: select_exercise(message),
    }
}
