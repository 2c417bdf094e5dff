//! Mode routing.
//!
//! Combines the crisis flag and the category scores into a
//! [`ModeDetectionResult`]:
//!
//! 1. Crisis check and raw category scores
//! 2. Crisis bonus added to the emotional score
//! 3. Stable ranking (ties resolve emotional, logistic, growth)
//! 4. Blend decision between the two top categories
//!
//! Messages with no keyword hits at all land on emotional mode without a
//! secondary mode.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::crisis::detect_crisis_with;
use super::lexicon::{default_lexicons, Lexicons};
use super::mode::{Category, ModeDetectionResult, ModeScore};
use super::scorer::score_all;

/// Bonus added to the emotional score when a crisis phrase is found.
pub const CRISIS_BONUS: u32 = 100;

/// Secondary score must reach this fraction of the primary score to blend.
pub const BLEND_RATIO: f64 = 0.5;

/// Secondary score must be strictly greater than this to blend.
pub const BLEND_MIN_SECONDARY: u32 = 2;

/// Numeric knobs of the routing decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingPolicy {
    pub crisis_bonus: u32,
    pub blend_ratio: f64,
    pub blend_min_secondary: u32,
}

impl Default for RoutingPolicy {
    fn default() -> Self {
        Self {
            crisis_bonus: CRISIS_BONUS,
            blend_ratio: BLEND_RATIO,
            blend_min_secondary: BLEND_MIN_SECONDARY,
        }
    }
}

impl RoutingPolicy {
    /// Whether the second-ranked category should be blended in.
    ///
    /// Both conditions must hold: the ratio check alone would blend on a
    /// zero secondary whenever the primary is zero too.
    pub fn should_blend(&self, primary: u32, secondary: u32) -> bool {
        secondary > self.blend_min_secondary
            && f64::from(secondary) >= self.blend_ratio * f64::from(primary)
    }
}

/// Router over a lexicon set and a routing policy
#[derive(Debug, Clone)]
pub struct ModeRouter {
    lexicons: Arc<Lexicons>,
    policy: RoutingPolicy,
}

impl Default for ModeRouter {
    fn default() -> Self {
        Self::new(default_lexicons(), RoutingPolicy::default())
    }
}

/// Detect the mode of a message with the built-in lexicons and default policy
pub fn detect_mode(message: &str) -> ModeDetectionResult {
    ModeRouter::default().detect(message)
}

impl ModeRouter {
    pub fn new(lexicons: Arc<Lexicons>, policy: RoutingPolicy) -> Self {
        Self { lexicons, policy }
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    pub fn policy(&self) -> &RoutingPolicy {
        &self.policy
    }

    /// Classify a message
    pub fn detect(&self, message: &str) -> ModeDetectionResult {
        let is_crisis = detect_crisis_with(message, &self.lexicons);
        let raw = score_all(message, &self.lexicons);
        self.resolve(raw, is_crisis)
    }

    /// Classify a possibly missing message; `None` behaves like `""`
    pub fn detect_opt(&self, message: Option<&str>) -> ModeDetectionResult {
        self.detect(message.unwrap_or_default())
    }

    /// Turn raw category scores and the crisis flag into a routing decision
    pub fn resolve(&self, raw: ModeScore, is_crisis: bool) -> ModeDetectionResult {
        let mut scores = raw;
        if is_crisis {
            scores.emotional = scores.emotional.saturating_add(self.policy.crisis_bonus);
        }

        let ranked = scores.ranked();
        let (primary_mode, primary_score) = ranked[0];
        let (candidate, secondary_score) = ranked[1];

        let blend_modes = self.policy.should_blend(primary_score, secondary_score);
        let secondary_mode = blend_modes.then_some(candidate);

        debug!(
            primary = %primary_mode,
            secondary = ?secondary_mode.map(|c: Category| c.label()),
            emotional = scores.emotional,
            logistic = scores.logistic,
            growth = scores.growth,
            is_crisis,
            "Mode detected"
        );

        ModeDetectionResult {
            primary_mode,
            secondary_mode,
            scores,
            is_crisis,
            blend_modes,
        }
    }
}
