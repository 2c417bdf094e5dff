//! Engine configuration.
//!
//! Defaults reproduce the documented routing contract exactly. Values can
//! be overridden from the environment (optionally via a `.env` file) at
//! startup:
//!
//! | Variable                        | Field                 |
//! |---------------------------------|-----------------------|
//! | `CAREBRAIN_CRISIS_BONUS`        | `crisis_bonus`        |
//! | `CAREBRAIN_BLEND_RATIO`         | `blend_ratio`         |
//! | `CAREBRAIN_BLEND_MIN_SECONDARY` | `blend_min_secondary` |
//! | `CAREBRAIN_LEXICON_PATH`        | `lexicon_path`        |
//! | `CAREBRAIN_LOG_LEVEL`           | `logging.level`       |
//! | `CAREBRAIN_LOG_JSON`            | `logging.json`        |

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::brain::lexicon::{default_lexicons, Lexicons};
use crate::brain::router::{RoutingPolicy, BLEND_MIN_SECONDARY, BLEND_RATIO, CRISIS_BONUS};
use crate::error::{BrainError, Result};

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Fallback filter directive when `RUST_LOG` is not set
    #[validate(length(min = 1))]
    pub level: String,
    /// Emit bunyan-style JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Configuration of the support engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EngineConfig {
    /// Bonus added to the emotional score on a crisis match
    #[validate(range(min = 1))]
    pub crisis_bonus: u32,
    /// Fraction of the primary score the secondary must reach to blend. Between 0.0 and 1.0.
    #[validate(range(min = 0.0, max = 1.0))]
    pub blend_ratio: f64,
    /// Secondary score must be strictly above this to blend
    pub blend_min_secondary: u32,
    /// Optional JSON lexicon file replacing the built-in lexicons
    pub lexicon_path: Option<PathBuf>,
    #[validate(nested)]
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            crisis_bonus: CRISIS_BONUS,
            blend_ratio: BLEND_RATIO,
            blend_min_secondary: BLEND_MIN_SECONDARY,
            lexicon_path: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Read and parse an optional environment variable
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| BrainError::Config(format!("{}: {}", name, e))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(BrainError::Config(format!("{}: {}", name, e))),
    }
}

impl EngineConfig {
    /// Load the configuration from the environment, reading `.env` first if present
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            info!("Loaded environment from {:?}", path);
        }
        Self::from_process_env()
    }

    /// Load the configuration from the current process environment only
    pub fn from_process_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(bonus) = parse_var("CAREBRAIN_CRISIS_BONUS")? {
            config.crisis_bonus = bonus;
        }
        if let Some(ratio) = parse_var("CAREBRAIN_BLEND_RATIO")? {
            config.blend_ratio = ratio;
        }
        if let Some(min) = parse_var("CAREBRAIN_BLEND_MIN_SECONDARY")? {
            config.blend_min_secondary = min;
        }
        if let Some(path) = parse_var::<PathBuf>("CAREBRAIN_LEXICON_PATH")? {
            config.lexicon_path = Some(path);
        }
        if let Some(level) = parse_var::<String>("CAREBRAIN_LOG_LEVEL")? {
            config.logging.level = level;
        }
        if let Some(json) = parse_var("CAREBRAIN_LOG_JSON")? {
            config.logging.json = json;
        }

        config.check()?;
        Ok(config)
    }

    /// Validate field ranges
    pub fn check(&self) -> Result<()> {
        self.validate()?;
        Ok(())
    }

    /// Routing knobs derived from this configuration
    pub fn routing_policy(&self) -> RoutingPolicy {
        RoutingPolicy {
            crisis_bonus: self.crisis_bonus,
            blend_ratio: self.blend_ratio,
            blend_min_secondary: self.blend_min_secondary,
        }
    }

    /// The lexicon file's contents if one is configured, otherwise the built-in set
    pub fn load_lexicons(&self) -> Result<Arc<Lexicons>> {
        match &self.lexicon_path {
            Some(path) => {
                info!("Loading trigger lexicons from {:?}", path);
                Ok(Arc::new(Lexicons::from_path(path)?))
            }
            None => Ok(default_lexicons()),
        }
    }
}
