//! Rig Configuration
//!
//! Author-facing tuning for the orbit camera rig. Every field has a default
//! matching the stock over-the-shoulder setup, so a config file only needs
//! the values it changes.
//!
//! ```json
//! {
//!   "cam_offset": [0.5, 0.0, -2.5],
//!   "max_vertical_angle": 45.0,
//!   "collision": { "probe_radius": 0.25 }
//! }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::input::InputMode;

/// Occlusion probe tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Radius of the volumetric visibility probe (meters)
    pub probe_radius: f32,
    /// Distance removed from the camera offset per rejected candidate (meters)
    pub shrink_step: f32,
    /// Offsets shorter than this collapse to zero (meters)
    pub min_offset: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            probe_radius: 0.2,
            shrink_step: 0.2,
            min_offset: 0.2,
        }
    }
}

/// Orbit camera rig configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Default anchor point relative to the subject, rotated by heading only
    pub pivot_offset: Vec3,
    /// Default camera displacement from the pivot, rotated by full aim
    pub cam_offset: Vec3,
    /// Offset interpolation rate (per second)
    pub smooth: f32,
    /// Horizontal aim speed (degrees per input unit per second)
    pub horizontal_aiming_speed: f32,
    /// Vertical aim speed (degrees per input unit per second)
    pub vertical_aiming_speed: f32,
    /// Default upper clamp for the vertical angle (degrees)
    pub max_vertical_angle: f32,
    /// Lower clamp for the vertical angle (degrees)
    pub min_vertical_angle: f32,
    /// Default field of view (degrees)
    pub default_fov: f32,
    /// Occlusion probe tuning
    pub collision: CollisionConfig,
    /// Fraction of `smooth` used to chase a locked direction
    pub lock_follow_rate: f32,
    /// Rate scale applied to the analog axis when compensating a horizontal clamp
    pub clamp_analog_rate: f32,
    /// Input source active at startup
    pub input_mode: InputMode,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            pivot_offset: Vec3::new(0.0, 1.7, 0.0),
            cam_offset: Vec3::new(0.4, 0.0, -2.0),
            smooth: 10.0,
            horizontal_aiming_speed: 6.0,
            vertical_aiming_speed: 6.0,
            max_vertical_angle: 30.0,
            min_vertical_angle: -60.0,
            default_fov: 60.0,
            collision: CollisionConfig::default(),
            lock_follow_rate: 0.15,
            clamp_analog_rate: 60.0,
            input_mode: InputMode::Touch,
        }
    }
}

impl RigConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("RigConfig: loaded {}", path.display());
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json_string()?)?;
        log::debug!("RigConfig: saved {}", path.display());
        Ok(())
    }

    /// Check that every value is usable by the rig.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let vectors = [("pivot_offset", self.pivot_offset), ("cam_offset", self.cam_offset)];
        for (field, v) in vectors {
            if !v.is_finite() {
                return Err(ConfigError::invalid(field, "must be finite"));
            }
        }

        let scalars = [
            ("smooth", self.smooth),
            ("horizontal_aiming_speed", self.horizontal_aiming_speed),
            ("vertical_aiming_speed", self.vertical_aiming_speed),
            ("max_vertical_angle", self.max_vertical_angle),
            ("min_vertical_angle", self.min_vertical_angle),
            ("default_fov", self.default_fov),
            ("lock_follow_rate", self.lock_follow_rate),
            ("clamp_analog_rate", self.clamp_analog_rate),
            ("collision.probe_radius", self.collision.probe_radius),
            ("collision.shrink_step", self.collision.shrink_step),
            ("collision.min_offset", self.collision.min_offset),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be finite"));
            }
        }

        if self.min_vertical_angle > self.max_vertical_angle {
            return Err(ConfigError::invalid(
                "min_vertical_angle",
                format!(
                    "{} is above max_vertical_angle {}",
                    self.min_vertical_angle, self.max_vertical_angle
                ),
            ));
        }
        if self.smooth <= 0.0 {
            return Err(ConfigError::invalid("smooth", "must be positive"));
        }
        if self.default_fov <= 0.0 || self.default_fov >= 180.0 {
            return Err(ConfigError::invalid("default_fov", "must be in (0, 180)"));
        }
        if self.collision.probe_radius <= 0.0 {
            return Err(ConfigError::invalid("collision.probe_radius", "must be positive"));
        }
        if self.collision.shrink_step <= 0.0 {
            return Err(ConfigError::invalid("collision.shrink_step", "must be positive"));
        }
        if self.collision.min_offset < 0.0 {
            return Err(ConfigError::invalid("collision.min_offset", "must not be negative"));
        }
        Ok(())
    }

    /// Non-fatal configuration warnings.
    pub fn advisories(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if self.cam_offset.y != 0.0 {
            notes.push(format!(
                "vertical camera offset ({}) is ignored during collisions; \
                 move vertical offset into pivot_offset instead",
                self.cam_offset.y
            ));
        }
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RigConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.advisories().is_empty());
        assert_eq!(config.pivot_offset, Vec3::new(0.0, 1.7, 0.0));
        assert_eq!(config.cam_offset, Vec3::new(0.4, 0.0, -2.0));
        assert_eq!(config.collision.shrink_step, 0.2);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = RigConfig::from_json_str(r#"{ "max_vertical_angle": 45.0 }"#)
            .expect("partial config should parse");
        assert_eq!(config.max_vertical_angle, 45.0);
        assert_eq!(config.min_vertical_angle, -60.0);
        assert_eq!(config.input_mode, InputMode::Touch);
    }

    #[test]
    fn test_inverted_vertical_range_rejected() {
        let config = RigConfig {
            min_vertical_angle: 40.0,
            max_vertical_angle: 30.0,
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "min_vertical_angle"),
            other => panic!("expected invalid field, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let config = RigConfig {
            smooth: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_vertical_cam_offset_advisory() {
        let config = RigConfig {
            cam_offset: Vec3::new(0.4, 0.5, -2.0),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.advisories().len(), 1);
    }

    #[test]
    fn test_bad_json_is_json_error() {
        assert!(matches!(
            RigConfig::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
