//! Logistic brain.
//!
//! Extracts the invisible labor hidden behind named events, spots
//! delegation opportunities, parses urgency and suggests message drafts.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::drafts::{suggest_draft, DraftMessage};

/// Sub-tasks implied by an event or obligation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaborPattern {
    pub trigger: &'static str,
    pub tasks: &'static [&'static str],
}

/// Invisible-labor patterns, in declaration order
pub const LABOR_PATTERNS: &[LaborPattern] = &[
    LaborPattern {
        trigger: "birthday party",
        tasks: &[
            "Pick a date and time",
            "Set the budget",
            "Book the venue",
            "Make the guest list",
            "Send invitations",
            "Track RSVPs",
            "Order or bake the cake",
            "Plan food and drinks",
            "Buy decorations",
            "Plan activities",
            "Prepare goodie bags",
            "Buy a gift",
            "Clean up afterwards",
        ],
    },
    LaborPattern {
        trigger: "birthday",
        tasks: &["Buy a gift", "Wrap the gift", "Sign a card", "Add it to the calendar"],
    },
    LaborPattern {
        trigger: "field trip",
        tasks: &[
            "Sign the permission slip",
            "Pay the trip fee",
            "Pack a lunch",
            "Check the weather and dress for it",
        ],
    },
    LaborPattern {
        trigger: "appointment",
        tasks: &[
            "Confirm the time and location",
            "Arrange childcare or time off",
            "Gather insurance cards and paperwork",
            "Add it to the calendar",
            "Plan transportation",
        ],
    },
    LaborPattern {
        trigger: "vacation",
        tasks: &[
            "Book travel and lodging",
            "Arrange pet care",
            "Hold the mail",
            "Make packing lists for everyone",
            "Plan meals for travel days",
        ],
    },
    LaborPattern {
        trigger: "holiday",
        tasks: &[
            "Plan the menu",
            "Buy and wrap gifts",
            "Send cards",
            "Coordinate travel with family",
            "Decorate",
        ],
    },
    LaborPattern {
        trigger: "back to school",
        tasks: &[
            "Buy school supplies",
            "Fill out school forms",
            "Label clothes and supplies",
            "Reset the bedtime routine",
            "Plan lunches",
        ],
    },
    LaborPattern {
        trigger: "dinner",
        tasks: &[
            "Plan the menu",
            "Check the pantry",
            "Make a grocery list",
            "Shop",
            "Cook",
            "Clean up",
        ],
    },
    LaborPattern {
        trigger: "sick",
        tasks: &[
            "Notify school or daycare",
            "Arrange backup childcare",
            "Pick up medicine",
            "Reschedule commitments",
        ],
    },
    LaborPattern {
        trigger: "moving",
        tasks: &[
            "Book movers",
            "Pack and label boxes",
            "Change address with mail and utilities",
            "Update school records",
            "Set up utilities",
        ],
    },
];

/// Phrases signalling the user is carrying a task alone
pub const DELEGATION_PHRASES: &[&str] = &[
    "no one helps",
    "nobody helps",
    "always me",
    "i have to do everything",
    "i do everything",
    "doing it all",
    "by myself",
    "on my own",
    "all on me",
    "no help",
    "can't do it all",
    "never helps",
    "mental load",
    "default parent",
];

/// Checked first; any hit means high urgency
pub const HIGH_URGENCY: &[&str] = &[
    "urgent",
    "asap",
    "emergency",
    "today",
    "right now",
    "immediately",
    "tonight",
    "overdue",
    "last minute",
    "deadline",
];

/// Checked only when no high-urgency keyword matched
pub const LOW_URGENCY: &[&str] = &[
    "whenever",
    "someday",
    "no rush",
    "eventually",
    "next month",
    "low priority",
    "at some point",
    "no hurry",
];

/// How soon something needs doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        };
        write!(f, "{}", label)
    }
}

/// What the logistic brain contributes for a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogisticGuidance {
    pub labor_tasks: Vec<String>,
    pub delegation_opportunity: bool,
    pub urgency: Urgency,
    pub draft: Option<DraftMessage>,
}

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}

/// First labor pattern whose trigger appears in the message
pub fn select_content(message: &str) -> Option<&'static LaborPattern> {
    let text = message.to_lowercase();
    LABOR_PATTERNS.iter().find(|p| text.contains(p.trigger))
}

/// Union of the sub-tasks of every matching pattern.
///
/// Tasks keep the order in which they are first seen; a task shared by
/// several patterns appears once.
pub fn detect_invisible_labor(message: &str) -> Vec<String> {
    let text = message.to_lowercase();
    let mut seen = HashSet::new();
    let mut tasks = Vec::new();

    for pattern in LABOR_PATTERNS.iter().filter(|p| text.contains(p.trigger)) {
        for task in pattern.tasks {
            if seen.insert(*task) {
                tasks.push(task.to_string());
            }
        }
    }

    tasks
}

/// Whether the message hints that a task could be handed off
pub fn detect_delegation_opportunity(message: &str) -> bool {
    contains_any(&message.to_lowercase(), DELEGATION_PHRASES)
}

/// Urgency by precedence: any high keyword wins, then any low keyword,
/// otherwise medium.
pub fn parse_urgency(message: &str) -> Urgency {
    let text = message.to_lowercase();
    if contains_any(&text, HIGH_URGENCY) {
        Urgency::High
    } else if contains_any(&text, LOW_URGENCY) {
        Urgency::Low
    } else {
        Urgency::Medium
    }
}

/// Logistic guidance for a message, using the message itself as the draft scenario
pub fn guidance(message: &str) -> LogisticGuidance {
    LogisticGuidance {
        labor_tasks: detect_invisible_labor(message),
        delegation_opportunity: detect_delegation_opportunity(message),
        urgency: parse_urgency(message),
        draft: suggest_draft(message, &HashMap::new()),
    }
}
