//! Brain Module Tests
//!
//! Content selection of the emotional, logistic and growth brains, and
//! draft suggestion.

use std::collections::HashMap;

use crate::brain::drafts::{suggest_draft, Channel, DraftScenario};
use crate::brain::emotional::{self, EmotionalGuidance, COPING_TECHNIQUES, GROUNDING_EXERCISES};
use crate::brain::growth::{self, CAREER_FRAMEWORKS, PARENTING_FRAMEWORKS};
use crate::brain::logistic::{
    self, Urgency, DELEGATION_PHRASES, HIGH_URGENCY, LABOR_PATTERNS, LOW_URGENCY,
};
use crate::brain::CRISIS_PROTOCOL;

#[cfg(test)]
mod emotional_brain_tests {
    use super::*;

    #[test]
    fn test_declaration_order_is_priority() {
        let names: Vec<&str> = COPING_TECHNIQUES.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "Box Breathing",
                "Self-Compassion Break",
                "Name It to Tame It",
                "Permission to Rest",
                "Reach Out",
                "Good Enough Reset",
            ]
        );
        assert_eq!(GROUNDING_EXERCISES[0].name, "5-4-3-2-1 Senses");
    }

    #[test]
    fn test_every_record_reachable_by_its_own_triggers() {
        for record in COPING_TECHNIQUES {
            let first = record.triggers[0];
            let selected = emotional::select_technique(first).unwrap();
            // An earlier record may share the trigger; it must then come first
            let selected_at = COPING_TECHNIQUES.iter().position(|r| r.name == selected.name);
            let record_at = COPING_TECHNIQUES.iter().position(|r| r.name == record.name);
            assert!(selected_at <= record_at, "trigger '{}'", first);
        }
    }

    #[test]
    fn test_crisis_path_skips_scanning() {
        match emotional::guidance("so anxious and overwhelmed", true) {
            EmotionalGuidance::Crisis { protocol } => assert_eq!(protocol, CRISIS_PROTOCOL),
            other => panic!("expected crisis guidance, got {:?}", other),
        }
    }

    #[test]
    fn test_no_content_for_neutral_message() {
        assert_eq!(
            emotional::guidance("sunny afternoon", false),
            EmotionalGuidance::Support {
                technique: None,
                exercise: None
            }
        );
    }
}

#[cfg(test)]
mod logistic_brain_tests {
    use super::*;

    #[test]
    fn test_labor_union_of_two_patterns() {
        // "holiday" and "dinner" both include "Plan the menu"
        let tasks = logistic::detect_invisible_labor("hosting the holiday dinner");
        let holiday = LABOR_PATTERNS.iter().find(|p| p.trigger == "holiday").unwrap();
        let dinner = LABOR_PATTERNS.iter().find(|p| p.trigger == "dinner").unwrap();

        for task in holiday.tasks.iter().chain(dinner.tasks.iter()) {
            let count = tasks.iter().filter(|t| t.as_str() == *task).count();
            assert_eq!(count, 1, "task '{}' should appear exactly once", task);
        }
        assert_eq!(tasks.len(), holiday.tasks.len() + dinner.tasks.len() - 1);
        assert_eq!(tasks[0], "Plan the menu");
        assert_eq!(tasks[holiday.tasks.len()], "Check the pantry");
    }

    #[test]
    fn test_labor_order_follows_pattern_declaration() {
        // Message mentions dinner first, but "appointment" is declared earlier
        let tasks = logistic::detect_invisible_labor("dinner, then the appointment");
        assert_eq!(tasks[0], "Confirm the time and location");
    }

    #[test]
    fn test_delegation_phrases() {
        for phrase in DELEGATION_PHRASES {
            assert!(
                logistic::detect_delegation_opportunity(&phrase.to_uppercase()),
                "Expected delegation for '{}'",
                phrase
            );
        }
        assert!(!logistic::detect_delegation_opportunity(""));
    }

    #[test]
    fn test_high_urgency_beats_low() {
        for high in HIGH_URGENCY {
            for low in LOW_URGENCY {
                let message = format!("{} ... {}", low, high);
                assert_eq!(
                    logistic::parse_urgency(&message),
                    Urgency::High,
                    "'{}'",
                    message
                );
            }
        }
    }

    #[test]
    fn test_low_and_default_urgency() {
        assert_eq!(logistic::parse_urgency("eventually clean the garage"), Urgency::Low);
        assert_eq!(logistic::parse_urgency("clean the garage"), Urgency::Medium);
    }

    #[test]
    fn test_urgency_display() {
        assert_eq!(Urgency::High.to_string(), "high");
        assert_eq!(serde_json::to_string(&Urgency::Low).unwrap(), "\"low\"");
    }
}

#[cfg(test)]
mod draft_tests {
    use super::*;

    #[test]
    fn test_each_scenario_detected() {
        let cases = vec![
            ("text my partner about the weekend", DraftScenario::PartnerFamily),
            ("note for the classroom", DraftScenario::School),
            ("move the dentist visit", DraftScenario::Appointment),
            ("set up a playdate", DraftScenario::Playdate),
            ("my boss keeps emailing at night", DraftScenario::WorkBoundary),
            ("I need to decline the bake sale", DraftScenario::Decline),
        ];

        for (text, expected) in cases {
            let draft = suggest_draft(text, &HashMap::new());
            assert_eq!(
                draft.map(|d| d.scenario),
                Some(expected),
                "Scenario for '{}'",
                text
            );
        }
    }

    #[test]
    fn test_work_boundary_is_email_with_subject() {
        let draft = suggest_draft("overtime again", &HashMap::new()).unwrap();
        assert_eq!(draft.channel, Channel::Email);
        assert_eq!(draft.subject.as_deref(), Some("Update on my availability"));
        assert_eq!(draft.context, "Setting a work boundary");
    }

    #[test]
    fn test_partial_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert("friend".to_string(), "Leo".to_string());

        let draft = suggest_draft("sleepover?", &overrides).unwrap();
        assert!(draft.body.contains("get together with Leo"));
        assert!(draft.body.contains("this weekend"));
        assert!(draft.subject.is_none());
    }

    #[test]
    fn test_no_draft_for_unknown_scenario() {
        assert!(suggest_draft("thinking about the weather", &HashMap::new()).is_none());
    }
}

#[cfg(test)]
mod growth_brain_tests {
    use super::*;

    #[test]
    fn test_career_frameworks_first_match() {
        let framework = growth::detect_career_framework("returning from maternity leave, nervous about my resume")
            .unwrap();
        assert_eq!(framework.name, "Return-to-Work Plan");
        assert_eq!(CAREER_FRAMEWORKS[0].name, "Negotiation Prep");
    }

    #[test]
    fn test_parenting_topics() {
        let topic = growth::detect_parenting_topic("how much screen time is ok").unwrap();
        assert_eq!(topic.name, "Screen Time Agreement");
        assert_eq!(PARENTING_FRAMEWORKS.len(), 6);
    }

    #[test]
    fn test_select_content_prefers_career() {
        let record = growth::select_content("my manager and my toddler's tantrum").unwrap();
        assert_eq!(record.name, "Boundary Script");
    }

    #[test]
    fn test_nothing_for_empty() {
        let guidance = growth::guidance("");
        assert!(guidance.career.is_none());
        assert!(guidance.parenting.is_none());
    }
}
