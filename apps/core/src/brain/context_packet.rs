//! Support Analysis - Output structure of the full pipeline.

use serde::Serialize;

use super::context::BrainGuidance;
use super::mode::ModeDetectionResult;

/// Everything the engine derived from one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportAnalysis {
    /// Routing decision
    pub detection: ModeDetectionResult,

    /// Content from the primary mode's brain
    pub primary_guidance: BrainGuidance,

    /// Content from the secondary mode's brain, when blending
    pub secondary_guidance: Option<BrainGuidance>,

    /// Rendered enhancement string for the prompt assembler
    pub enhancement: String,
}

impl SupportAnalysis {
    /// Whether the crisis protocol replaced all other guidance
    pub fn is_crisis(&self) -> bool {
        self.detection.is_crisis
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{}, Guidance: {}{}",
            self.detection.summary(),
            self.primary_guidance.category(),
            self.secondary_guidance
                .as_ref()
                .map(|g| format!(" + {}", g.category()))
                .unwrap_or_default()
        )
    }
}
