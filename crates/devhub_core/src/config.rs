//! Tunables for the palette and drag gesture.
//!
//! # Responsibility
//! - Hold the similarity cutoff, default-view sizes and activation chord.
//! - Validate values loaded from user configuration.
//!
//! # Invariants
//! - `threshold` stays inside `(0.0, 1.0)`; `1.0` would let unrelated records
//!   through.
//! - `activation_distance` is finite and non-negative.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default similarity cutoff; lower scores are better.
pub const DEFAULT_THRESHOLD: f64 = 0.4;
/// Default size of the "Recent Projects" group.
pub const DEFAULT_RECENT_PROJECTS: usize = 3;
/// Pointer travel in pixels before a press becomes a drag.
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 8.0;

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Threshold outside `(0.0, 1.0)` or not a number.
    InvalidThreshold(f64),
    /// Negative or non-finite drag activation distance.
    InvalidActivationDistance(f64),
    /// Activation chord key is not a printable character.
    InvalidActivationKey(char),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidThreshold(value) => {
                write!(f, "similarity threshold must be in (0, 1), got {value}")
            }
            Self::InvalidActivationDistance(value) => write!(
                f,
                "drag activation distance must be finite and >= 0, got {value}"
            ),
            Self::InvalidActivationKey(key) => {
                write!(f, "activation key must be printable, got {key:?}")
            }
        }
    }
}

impl Error for ConfigError {}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Keyboard chord that toggles the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationChord {
    /// Letter key, compared case-insensitively.
    pub key: char,
    /// Accept Ctrl as the chord modifier.
    pub ctrl: bool,
    /// Accept Cmd/Meta as the chord modifier.
    pub meta: bool,
}

impl Default for ActivationChord {
    fn default() -> Self {
        Self {
            key: 'k',
            ctrl: true,
            meta: true,
        }
    }
}

/// Palette search and presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Records whose best field score exceeds this value are dropped.
    pub threshold: f64,
    /// Number of projects listed in the empty-query view.
    pub recent_projects: usize,
    /// Optional cap on items per ranked group.
    pub group_limit: Option<usize>,
    pub activation: ActivationChord,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            recent_projects: DEFAULT_RECENT_PROJECTS,
            group_limit: None,
            activation: ActivationChord::default(),
        }
    }
}

impl PaletteConfig {
    /// Validates user-supplied values.
    ///
    /// # Errors
    /// - `InvalidThreshold` when `threshold` is not inside `(0.0, 1.0)`.
    /// - `InvalidActivationKey` when the chord key is a control character.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        if self.activation.key.is_control() || self.activation.key.is_whitespace() {
            return Err(ConfigError::InvalidActivationKey(self.activation.key));
        }
        Ok(())
    }
}

/// Drag gesture settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Pointer travel required before an armed press starts dragging.
    pub activation_distance: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
        }
    }
}

impl DragConfig {
    /// Validates user-supplied values.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.activation_distance.is_finite() || self.activation_distance < 0.0 {
            return Err(ConfigError::InvalidActivationDistance(
                self.activation_distance,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DragConfig, PaletteConfig};

    #[test]
    fn defaults_are_valid() {
        PaletteConfig::default()
            .validate()
            .expect("default palette config should validate");
        DragConfig::default()
            .validate()
            .expect("default drag config should validate");
    }

    #[test]
    fn threshold_of_one_is_rejected() {
        let config = PaletteConfig {
            threshold: 1.0,
            ..PaletteConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidThreshold(1.0)));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: PaletteConfig =
            serde_json::from_str(r#"{"threshold":0.25}"#).expect("partial config should parse");
        assert_eq!(config.threshold, 0.25);
        assert_eq!(config.recent_projects, 3);
        assert_eq!(config.activation.key, 'k');
    }

    #[test]
    fn negative_drag_distance_is_rejected() {
        let config = DragConfig {
            activation_distance: -1.0,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidActivationDistance(_))
        ));
    }
}
