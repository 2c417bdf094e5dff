//! Support Engine - Main orchestrator for the Brain module.
//!
//! Coordinates crisis detection, category scoring, mode routing, the three
//! content brains and prompt rendering. Every call is a pure function of
//! the message, so one engine can be shared across threads without locks.

use std::sync::Arc;
use tracing::debug;

use super::context::{self, BrainGuidance};
use super::context_packet::SupportAnalysis;
use super::lexicon::{default_lexicons, Lexicons};
use super::mode::ModeDetectionResult;
use super::router::ModeRouter;
use crate::config::EngineConfig;
use crate::error::Result;

/// Main engine that runs the whole routing pipeline
#[derive(Debug, Clone)]
pub struct SupportEngine {
    config: EngineConfig,
    router: ModeRouter,
}

impl Default for SupportEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportEngine {
    /// Create an engine with the default configuration and built-in lexicons
    pub fn new() -> Self {
        Self::assemble(EngineConfig::default(), default_lexicons())
    }

    /// Create an engine from a configuration, loading its lexicon file if one is set
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.check()?;
        let lexicons = config.load_lexicons()?;
        Ok(Self::assemble(config, lexicons))
    }

    /// Create an engine over an already loaded lexicon set.
    ///
    /// The configuration is validated; its `lexicon_path` is ignored.
    pub fn with_lexicons(config: EngineConfig, lexicons: Arc<Lexicons>) -> Result<Self> {
        config.check()?;
        Ok(Self::assemble(config, lexicons))
    }

    fn assemble(config: EngineConfig, lexicons: Arc<Lexicons>) -> Self {
        let router = ModeRouter::new(lexicons, config.routing_policy());
        Self { config, router }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn lexicons(&self) -> &Lexicons {
        self.router.lexicons()
    }

    /// Classify a message
    pub fn detect_mode(&self, message: &str) -> ModeDetectionResult {
        self.router.detect(message)
    }

    /// Classify a possibly missing message; `None` behaves like `""`
    pub fn detect_mode_opt(&self, message: Option<&str>) -> ModeDetectionResult {
        self.router.detect_opt(message)
    }

    /// Enhancement string for an existing detection result
    pub fn build_context(&self, result: &ModeDetectionResult, message: &str) -> String {
        context::build_context(result, message)
    }

    /// Run the whole pipeline on a message
    pub fn analyze(&self, message: &str) -> SupportAnalysis {
        let detection = self.detect_mode(message);

        let primary_guidance =
            BrainGuidance::for_mode(detection.primary_mode, message, detection.is_crisis);
        let secondary_guidance = if detection.is_crisis {
            None
        } else {
            context::blended_mode(&detection)
                .map(|mode| BrainGuidance::for_mode(mode, message, false))
        };

        let enhancement =
            context::render(&detection, &primary_guidance, secondary_guidance.as_ref());

        let analysis = SupportAnalysis {
            detection,
            primary_guidance,
            secondary_guidance,
            enhancement,
        };
        debug!("Support analysis: {}", analysis.summary());
        analysis
    }

    /// Run the pipeline on a possibly missing message
    pub fn analyze_opt(&self, message: Option<&str>) -> SupportAnalysis {
        self.analyze(message.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::emotional::EmotionalGuidance;
    use crate::brain::mode::Category;

    #[test]
    fn test_basic_analysis() {
        let engine = SupportEngine::new();
        let analysis = engine.analyze("I'm so overwhelmed and anxious");

        assert_eq!(analysis.detection.primary_mode, Category::Emotional);
        assert!(analysis.enhancement.starts_with("MODE: EMOTIONAL SUPPORT"));
        assert!(analysis.secondary_guidance.is_none());
    }

    #[test]
    fn test_crisis_analysis_carries_protocol_only() {
        let engine = SupportEngine::new();
        let analysis = engine.analyze("I want to end it all, also need to plan dinner");

        assert!(analysis.is_crisis());
        assert!(matches!(
            analysis.primary_guidance,
            BrainGuidance::Emotional(EmotionalGuidance::Crisis { .. })
        ));
        assert!(analysis.secondary_guidance.is_none());
        assert_eq!(
            analysis.enhancement,
            crate::brain::crisis::CRISIS_PROTOCOL
        );
    }

    #[test]
    fn test_analysis_matches_build_context() {
        let engine = SupportEngine::new();
        let message = "need to plan the holiday dinner and nobody helps";
        let analysis = engine.analyze(message);
        let rebuilt = engine.build_context(&analysis.detection, message);
        assert_eq!(analysis.enhancement, rebuilt);
    }

    #[test]
    fn test_with_lexicons_validates_config() {
        let config = EngineConfig {
            blend_ratio: 5.0,
            ..Default::default()
        };
        let err = SupportEngine::with_lexicons(config, default_lexicons()).unwrap_err();
        assert!(matches!(err, crate::error::BrainError::Validation(_)));

        let engine = SupportEngine::with_lexicons(EngineConfig::default(), default_lexicons())
            .expect("Default config should be valid");
        assert_eq!(engine.lexicons().version, crate::brain::LEXICON_VERSION);
    }

    #[test]
    fn test_analyze_opt_none() {
        let engine = SupportEngine::new();
        assert_eq!(engine.analyze_opt(None), engine.analyze(""));
    }
}
