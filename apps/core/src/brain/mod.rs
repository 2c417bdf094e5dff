//! # Brain Module
//!
//! Fast, rule-based routing of a user message to a support brain.
//! Runs BEFORE the LLM is called so the prompt can lead with the right tone
//! and reference material.
//!
//! ## Components
//! - `lexicon`: Weighted trigger keywords per category and crisis phrases
//! - `crisis`: Crisis detection and the crisis protocol text
//! - `scorer`: Weighted keyword scoring
//! - `router`: Primary/secondary mode decision
//! - `emotional`, `logistic`, `growth`: Content brains
//! - `drafts`: Message draft templates
//! - `context`: Enhancement string rendering
//! - `context_packet`: Output data structure
//! - `engine`: Main orchestrator

pub mod context;
pub mod context_packet;
pub mod crisis;
pub mod drafts;
pub mod emotional;
pub mod engine;
pub mod growth;
pub mod lexicon;
pub mod logistic;
pub mod mode;
pub mod records;
pub mod router;
pub mod scorer;

// Re-export main types for convenience
pub use context::{build_context, BrainGuidance};
pub use context_packet::SupportAnalysis;
pub use crisis::{detect_crisis, CRISIS_PROTOCOL};
pub use drafts::{suggest_draft, Channel, DraftMessage, DraftScenario};
pub use emotional::EmotionalGuidance;
pub use engine::SupportEngine;
pub use growth::{detect_career_framework, detect_parenting_topic, GrowthGuidance};
pub use lexicon::{default_lexicons, Lexicons, Tier, TieredKeywords, LEXICON_VERSION};
pub use logistic::{
    detect_delegation_opportunity, detect_invisible_labor, parse_urgency, LogisticGuidance,
    Urgency,
};
pub use mode::{Category, ModeDetectionResult, ModeScore};
pub use records::ContentRecord;
pub use router::{detect_mode, ModeRouter, RoutingPolicy};
pub use scorer::{score_all, score_category};
