//! Growth brain: career and parenting coaching frameworks.

use serde::Serialize;

use super::records::{first_match, ContentRecord};

/// Career frameworks in priority order
pub const CAREER_FRAMEWORKS: &[ContentRecord] = &[
    ContentRecord {
        name: "Negotiation Prep",
        description: "Preparing a data-backed ask for pay or flexibility.",
        prompt: "Coach them to gather market data, list concrete wins, pick a specific number or arrangement, and rehearse the opening line.",
        triggers: &["raise", "salary", "negotiate", "pay"],
    },
    ContentRecord {
        name: "Return-to-Work Plan",
        description: "Re-entering work after caregiving leave.",
        prompt: "Help them frame the caregiving gap as experience, refresh one key skill, and map a gradual re-entry schedule.",
        triggers: &["back to work", "return to work", "maternity leave", "career gap", "resume"],
    },
    ContentRecord {
        name: "Boundary Script",
        description: "Holding working hours without apologizing.",
        prompt: "Help them write a short, calm statement of their availability and the alternative they can offer.",
        triggers: &["boss", "manager", "overtime", "boundaries", "work-life"],
    },
    ContentRecord {
        name: "Promotion Case",
        description: "Building the case for the next level.",
        prompt: "Guide them to map their impact to the next-level expectations and schedule a growth conversation with their manager.",
        triggers: &["promotion", "leadership", "advance", "performance review"],
    },
    ContentRecord {
        name: "Values Compass",
        description: "Reconnecting work choices with personal values.",
        prompt: "Ask them to name their top three values and check which parts of their current work honor or drain each one.",
        triggers: &["purpose", "meaning", "career change", "stuck in my job", "passion"],
    },
];

/// Parenting frameworks in priority order
pub const PARENTING_FRAMEWORKS: &[ContentRecord] = &[
    ContentRecord {
        name: "Connect Before Correct",
        description: "Co-regulating first, teaching second.",
        prompt: "Suggest getting down to the child's eye level, naming the feeling, and waiting for calm before addressing behavior.",
        triggers: &["tantrum", "meltdown", "defiant", "won't listen"],
    },
    ContentRecord {
        name: "Natural Consequences",
        description: "Letting outcomes teach instead of punishments.",
        prompt: "Help them pick a consequence that is related, respectful, and reasonable, and decide it ahead of time.",
        triggers: &["discipline", "punish", "consequence", "timeout", "time-out"],
    },
    ContentRecord {
        name: "Sibling Mediation",
        description: "Coaching siblings to solve conflicts themselves.",
        prompt: "Walk them through describing the problem neutrally, letting each child speak, and asking the kids for solutions.",
        triggers: &["sibling", "fighting", "brother", "sister"],
    },
    ContentRecord {
        name: "Screen Time Agreement",
        description: "Making screen rules together with the child.",
        prompt: "Help them draft a family screen agreement with clear times, places, and what happens when time is up.",
        triggers: &["screen time", "ipad", "tablet", "video games", "phone"],
    },
    ContentRecord {
        name: "Bedtime Routine",
        description: "A predictable wind-down sequence.",
        prompt: "Help them design a short visual bedtime routine with the same order every night.",
        triggers: &["bedtime", "won't sleep", "sleep"],
    },
    ContentRecord {
        name: "Emotion Coaching",
        description: "Helping a worried child name and work through feelings.",
        prompt: "Coach them to validate the child's worry, get curious about it, and brainstorm one brave step together.",
        triggers: &["anxious child", "worried kid", "shy", "scared"],
    },
];

/// What the growth brain contributes for a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrowthGuidance {
    pub career: Option<&'static ContentRecord>,
    pub parenting: Option<&'static ContentRecord>,
}

/// First matching career framework
pub fn detect_career_framework(message: &str) -> Option<&'static ContentRecord> {
    first_match(CAREER_FRAMEWORKS, message)
}

/// First matching parenting framework
pub fn detect_parenting_topic(message: &str) -> Option<&'static ContentRecord> {
    first_match(PARENTING_FRAMEWORKS, message)
}

/// Best single record: a career framework if one matches, otherwise a parenting one
pub fn select_content(message: &str) -> Option<&'static ContentRecord> {
    detect_career_framework(message).or_else(|| detect_parenting_topic(message))
}

/// Growth guidance for a message: at most one career and one parenting framework
pub fn guidance(message: &str) -> GrowthGuidance {
    GrowthGuidance {
        career: detect_career_framework(message),
        parenting: detect_parenting_topic(message),
    }
}
