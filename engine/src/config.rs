//! Controller Configuration
//!
//! Centralized tunables for the player controllers. All values are authored
//! once and held fixed for the lifetime of the controller; nothing here is
//! reloaded at runtime.
//!
//! `ControllerConfig::default()` returns the reference tuning. Overrides can
//! be loaded from a JSON file with [`ControllerConfig::load_from_path`], which
//! fills missing fields from the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised while loading or validating a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    /// A tunable has a value outside its allowed range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Movement tunables (speeds, blending, jump, gravity).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Walking speed in m/s
    pub walk_speed: f32,
    /// Sprinting speed in m/s
    pub sprint_speed: f32,
    /// Blend rate toward the target speed (per second, sprint variant only)
    pub acceleration: f32,
    /// Apex height of a jump in meters
    pub jump_height: f32,
    /// Gravity in m/s^2, negative = downward
    pub gravity: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: 4.0,
            sprint_speed: 8.0,
            acceleration: 10.0,
            jump_height: 2.0,
            gravity: -9.81,
        }
    }
}

/// Mouselook tunables.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Rotation per device count, in radians
    pub sensitivity: f32,
    /// Pitch limit above/below the horizon, in radians
    pub vertical_clamp: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.002,
            // 80 degrees: enough head tilt without hitting the poles
            vertical_clamp: 80.0 * std::f32::consts::PI / 180.0,
        }
    }
}

/// Stamina resource tunables (sprint variant only).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StaminaConfig {
    /// Stamina capacity in points
    pub max_stamina: f32,
    /// Drain while sprint-moving, points per second
    pub depletion_rate: f32,
    /// Recovery once regeneration starts, points per second
    pub regen_rate: f32,
    /// Seconds after the last draining frame before regeneration starts
    pub regen_delay: f32,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            max_stamina: 100.0,
            depletion_rate: 20.0,
            regen_rate: 15.0,
            regen_delay: 2.0,
        }
    }
}

/// Sprint feedback tunables: camera field-of-view widening and the
/// stamina bar fade (sprint variant only).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Field of view while sprinting, in degrees
    pub sprint_fov: f32,
    /// Blend rate of the field-of-view transition (per second)
    pub fov_change_speed: f32,
    /// Opacity change rate of the stamina bar fade (alpha per second)
    pub fade_speed: f32,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            sprint_fov: 70.0,
            fov_change_speed: 8.0,
            fade_speed: 2.0,
        }
    }
}

/// Complete tuning for one player controller instance.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub movement: MovementConfig,
    pub look: LookConfig,
    pub stamina: StaminaConfig,
    pub feedback: FeedbackConfig,
}

impl ControllerConfig {
    /// Load a configuration from a JSON file, falling back to defaults for
    /// any field the file omits. The result is validated before it is
    /// returned.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every tunable against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
            if value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        }

        positive("movement.walk_speed", self.movement.walk_speed)?;
        positive("movement.sprint_speed", self.movement.sprint_speed)?;
        positive("movement.acceleration", self.movement.acceleration)?;
        positive("movement.jump_height", self.movement.jump_height)?;
        if self.movement.gravity >= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "movement.gravity must be negative (downward), got {}",
                self.movement.gravity
            )));
        }
        positive("look.sensitivity", self.look.sensitivity)?;
        if self.look.vertical_clamp <= 0.0
            || self.look.vertical_clamp >= std::f32::consts::FRAC_PI_2
        {
            return Err(ConfigError::Invalid(format!(
                "look.vertical_clamp must be in (0, pi/2) radians, got {}",
                self.look.vertical_clamp
            )));
        }
        positive("stamina.max_stamina", self.stamina.max_stamina)?;
        positive("stamina.depletion_rate", self.stamina.depletion_rate)?;
        positive("stamina.regen_rate", self.stamina.regen_rate)?;
        if self.stamina.regen_delay < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "stamina.regen_delay must not be negative, got {}",
                self.stamina.regen_delay
            )));
        }
        positive("feedback.sprint_fov", self.feedback.sprint_fov)?;
        positive("feedback.fov_change_speed", self.feedback.fov_change_speed)?;
        positive("feedback.fade_speed", self.feedback.fade_speed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ControllerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_tuning() {
        let config = ControllerConfig::default();
        assert_eq!(config.movement.walk_speed, 4.0);
        assert_eq!(config.movement.sprint_speed, 8.0);
        assert_eq!(config.movement.gravity, -9.81);
        assert_eq!(config.stamina.max_stamina, 100.0);
        assert_eq!(config.feedback.sprint_fov, 70.0);
    }

    #[test]
    fn test_rejects_zero_walk_speed() {
        let mut config = ControllerConfig::default();
        config.movement.walk_speed = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let mut config = ControllerConfig::default();
        config.movement.gravity = 9.81;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_pitch_clamp_past_vertical() {
        let mut config = ControllerConfig::default();
        config.look.vertical_clamp = 2.0; // > pi/2
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ControllerConfig =
            serde_json::from_str(r#"{"movement": {"walk_speed": 3.0}}"#).unwrap();
        assert_eq!(config.movement.walk_speed, 3.0);
        // Untouched fields come from the defaults
        assert_eq!(config.movement.sprint_speed, 8.0);
        assert_eq!(config.stamina.regen_delay, 2.0);
    }
}
