// CareBrain Core
// "The Brain" - routes each message to the right support brain

//! Mode detection and brain routing for a parenting support assistant.
//!
//! ```rust
//! use carebrain_core::SupportEngine;
//!
//! let engine = SupportEngine::new();
//! let mut prompt = String::new();
//! let analysis = engine.analyze("I can't stop crying and need to plan the birthday party");
//! prompt.push_str(&analysis.enhancement);
//! assert!(prompt.starts_with("MODE:"));
//! ```

pub mod brain;
pub mod config;
pub mod error;
pub mod logging;

#[cfg(test)]
mod tests;

pub use brain::{
    build_context, detect_crisis, detect_mode, Category, ModeDetectionResult, ModeScore,
    SupportAnalysis, SupportEngine,
};
pub use config::{EngineConfig, LoggingConfig};
pub use error::{BrainError, Result};
pub use logging::init_tracing;
