//! Test Module
//!
//! Test suite for the CareBrain engine.
//!
//! ## Test Categories
//! - `routing_tests`: Crisis override, scoring, tie-breaks and blend decisions
//! - `brain_tests`: Emotional, logistic and growth content selection, drafts
//! - `scenario_tests`: End-to-end message scenarios through the engine
//! - `config_tests`: Environment configuration and lexicon files
//! - `concurrency_tests`: Shared engine across threads, lexicon immutability

pub mod brain_tests;
pub mod scenario_tests;
