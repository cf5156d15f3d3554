//! Drag tuning constants and their serializable configuration.

use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Half-width of the square hit-box centered on the disposal zone.
pub const HIT_BOX_HALF_EXTENT: f64 = 40.0;
/// Size an item shrinks to while hovering the disposal zone.
pub const SHRINK_SIZE: Size = Size::new(30.0, 30.0);
/// Bounding box an item's initial size is fitted into on attach.
pub const FIT_BOX_SIZE: Size = Size::new(200.0, 200.0);
/// Duration of shrink and restore transitions, in milliseconds.
pub const TRANSITION_DURATION_MS: u64 = 200;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tuning values for a [`DragController`](crate::DragController).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Half-width of the disposal hit-box.
    pub hit_half_extent: f64,
    /// Target size of the shrink transition.
    pub shrink_size: Size,
    /// Box the item is aspect-fitted into on attach.
    pub fit_box: Size,
    /// Shrink/restore transition duration in milliseconds.
    pub transition_ms: u64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            hit_half_extent: HIT_BOX_HALF_EXTENT,
            shrink_size: SHRINK_SIZE,
            fit_box: FIT_BOX_SIZE,
            transition_ms: TRANSITION_DURATION_MS,
        }
    }
}

impl DragConfig {
    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Check that every extent is strictly positive and finite.
    pub fn validate(&self) -> ConfigResult<()> {
        if !is_positive(self.hit_half_extent) {
            return Err(ConfigError::Invalid(format!(
                "hit_half_extent must be positive, got {}",
                self.hit_half_extent
            )));
        }
        for (name, size) in [("shrink_size", self.shrink_size), ("fit_box", self.fit_box)] {
            if !is_positive(size.width) || !is_positive(size.height) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {}x{}",
                    size.width, size.height
                )));
            }
        }
        Ok(())
    }

    /// Transition duration as a [`Duration`].
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = DragConfig::default();
        assert!((config.hit_half_extent - 40.0).abs() < f64::EPSILON);
        assert_eq!(config.shrink_size, Size::new(30.0, 30.0));
        assert_eq!(config.fit_box, Size::new(200.0, 200.0));
        assert_eq!(config.transition_duration(), Duration::from_millis(200));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = DragConfig::from_json(r#"{ "transition_ms": 350 }"#).unwrap();
        assert_eq!(config.transition_ms, 350);
        assert!((config.hit_half_extent - HIT_BOX_HALF_EXTENT).abs() < f64::EPSILON);
    }

    #[test]
    fn test_json_round_trip() {
        let config = DragConfig {
            hit_half_extent: 25.0,
            ..DragConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(DragConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json() {
        let result = DragConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Serialization(_))));
    }

    #[test]
    fn test_rejects_non_positive_extent() {
        let result = DragConfig::from_json(r#"{ "hit_half_extent": 0.0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let config = DragConfig {
            shrink_size: Size::new(30.0, -1.0),
            ..DragConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
