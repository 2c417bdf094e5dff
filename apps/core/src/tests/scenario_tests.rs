//! Scenario Tests
//!
//! Full messages through the engine, from detection to the enhancement string.

use crate::brain::logistic::LABOR_PATTERNS;
use crate::brain::{
    detect_delegation_opportunity, detect_invisible_labor, parse_urgency, BrainGuidance, Category,
    ModeScore, SupportEngine, Urgency, CRISIS_PROTOCOL,
};

const MIXED_MESSAGE: &str =
    "I feel like such a bad mom and I can't stop crying, also need to plan my kid's birthday party";

#[cfg(test)]
mod mixed_message_tests {
    use super::*;

    #[test]
    fn test_emotional_primary_with_logistic_blend() {
        let engine = SupportEngine::new();
        let result = engine.detect_mode(MIXED_MESSAGE);

        // emotional: "bad mom" + "crying" (3 + 3), "feel like" (2), "feel" (1)
        // logistic: "plan" + "birthday party" (3 + 3), "need to" (1)
        assert_eq!(result.scores, ModeScore::new(9, 7, 0));
        assert_eq!(result.primary_mode, Category::Emotional);
        assert_eq!(result.secondary_mode, Some(Category::Logistic));
        assert!(result.blend_modes);
        assert!(!result.is_crisis);
    }

    #[test]
    fn test_full_birthday_checklist() {
        let tasks = detect_invisible_labor(MIXED_MESSAGE);
        let party = LABOR_PATTERNS
            .iter()
            .find(|p| p.trigger == "birthday party")
            .unwrap();
        for task in party.tasks {
            assert!(tasks.iter().any(|t| t == task), "missing '{}'", task);
        }
    }

    #[test]
    fn test_enhancement_layout() {
        let engine = SupportEngine::new();
        let analysis = engine.analyze(MIXED_MESSAGE);
        let text = &analysis.enhancement;

        assert!(text.starts_with("MODE: EMOTIONAL SUPPORT"));
        assert!(text.contains("COPING TECHNIQUE: Self-Compassion Break"));
        assert!(text.contains("GROUNDING EXERCISE: Cold Water Reset"));
        assert!(text.contains("SECONDARY MODE: LOGISTIC"));
        assert!(text.contains("- Order or bake the cake"));
        assert!(!text.contains("CRISIS PROTOCOL"));

        assert!(matches!(
            analysis.secondary_guidance,
            Some(BrainGuidance::Logistic(_))
        ));
    }
}

#[cfg(test)]
mod crisis_scenario_tests {
    use super::*;

    const CRISIS_MESSAGE: &str = "emergency, I want to end it all";

    #[test]
    fn test_crisis_flagged() {
        let engine = SupportEngine::new();
        let result = engine.detect_mode(CRISIS_MESSAGE);
        assert!(result.is_crisis);
        assert_eq!(result.primary_mode, Category::Emotional);
        assert!(!result.blend_modes);
    }

    #[test]
    fn test_enhancement_is_protocol_only() {
        let engine = SupportEngine::new();
        let result = engine.detect_mode(CRISIS_MESSAGE);
        let context = engine.build_context(&result, CRISIS_MESSAGE);

        assert_eq!(context, CRISIS_PROTOCOL);
        assert!(!context.contains("COPING TECHNIQUE"));
        assert!(!context.contains("URGENCY"));
        assert!(!context.contains("FRAMEWORK"));
    }

    #[test]
    fn test_crisis_overrides_blended_result() {
        // Even a result claiming a blend renders the protocol alone
        let engine = SupportEngine::new();
        let mut result = engine.detect_mode(CRISIS_MESSAGE);
        result.blend_modes = true;
        result.secondary_mode = Some(Category::Logistic);
        assert_eq!(engine.build_context(&result, CRISIS_MESSAGE), CRISIS_PROTOCOL);
    }
}

#[cfg(test)]
mod empty_message_tests {
    use super::*;

    #[test]
    fn test_empty_string_defaults() {
        let engine = SupportEngine::new();
        let result = engine.detect_mode("");

        assert_eq!(result.primary_mode, Category::Emotional);
        assert!(!result.blend_modes);
        assert_eq!(result.secondary_mode, None);
        assert!(!detect_delegation_opportunity(""));
        assert_eq!(parse_urgency(""), Urgency::Medium);
    }

    #[test]
    fn test_missing_message_same_as_empty() {
        let engine = SupportEngine::new();
        assert_eq!(engine.detect_mode_opt(None), engine.detect_mode(""));
        assert_eq!(engine.analyze_opt(None).enhancement, engine.analyze("").enhancement);
    }

    #[test]
    fn test_empty_enhancement_is_header_only() {
        let engine = SupportEngine::new();
        let analysis = engine.analyze("");
        assert_eq!(
            analysis.enhancement,
            crate::brain::context::mode_header(Category::Emotional)
        );
    }
}
