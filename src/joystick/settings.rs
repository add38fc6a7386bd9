//! Joystick tuning: placement mode, axis restriction, handle range and dead zone

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::mode::{AxisMode, JoystickMode};

/// Settings validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("handle_range must be a finite value > 0 (got {0})")]
    InvalidHandleRange(f32),

    #[error("dead_zone must be a finite value >= 0 (got {0})")]
    InvalidDeadZone(f32),

    #[error("dead_zone {dead_zone} must be smaller than handle_range {handle_range}")]
    DeadZoneOutOfRange { dead_zone: f32, handle_range: f32 },
}

/// Per-instance joystick configuration
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct JoystickSettings {
    #[serde(default)]
    pub mode: JoystickMode,
    #[serde(default)]
    pub axis_mode: AxisMode,
    /// Drag distance, in base half-sizes, at which the handle is fully displaced
    #[serde(default = "default_handle_range")]
    pub handle_range: f32,
    /// Raw magnitude at or below which the output is forced to zero
    #[serde(default)]
    pub dead_zone: f32,
}

impl JoystickSettings {
    pub fn new(mode: JoystickMode, axis_mode: AxisMode, handle_range: f32, dead_zone: f32) -> Self {
        Self {
            mode,
            axis_mode,
            handle_range,
            dead_zone,
        }
    }

    /// Check the numeric ranges.
    ///
    /// The joystick itself tolerates out-of-range values (the result just
    /// looks odd), so this is only enforced where settings are loaded.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.handle_range.is_finite() || self.handle_range <= 0.0 {
            return Err(SettingsError::InvalidHandleRange(self.handle_range));
        }
        if !self.dead_zone.is_finite() || self.dead_zone < 0.0 {
            return Err(SettingsError::InvalidDeadZone(self.dead_zone));
        }
        if self.dead_zone >= self.handle_range {
            return Err(SettingsError::DeadZoneOutOfRange {
                dead_zone: self.dead_zone,
                handle_range: self.handle_range,
            });
        }
        Ok(())
    }
}

impl Default for JoystickSettings {
    fn default() -> Self {
        Self {
            mode: JoystickMode::default(),
            axis_mode: AxisMode::default(),
            handle_range: default_handle_range(),
            dead_zone: 0.0,
        }
    }
}

fn default_handle_range() -> f32 { 1.0 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = JoystickSettings::default();

        assert_eq!(settings.mode, JoystickMode::Fixed);
        assert_eq!(settings.axis_mode, AxisMode::Both);
        assert_eq!(settings.handle_range, 1.0);
        assert_eq!(settings.dead_zone, 0.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_ranges() {
        let mut settings = JoystickSettings::default();

        settings.handle_range = 0.0;
        assert_eq!(settings.validate(), Err(SettingsError::InvalidHandleRange(0.0)));

        settings.handle_range = f32::NAN;
        assert!(matches!(settings.validate(), Err(SettingsError::InvalidHandleRange(_))));

        settings.handle_range = 1.0;
        settings.dead_zone = -0.1;
        assert_eq!(settings.validate(), Err(SettingsError::InvalidDeadZone(-0.1)));

        settings.dead_zone = 1.0;
        assert_eq!(
            settings.validate(),
            Err(SettingsError::DeadZoneOutOfRange { dead_zone: 1.0, handle_range: 1.0 })
        );
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: JoystickSettings = serde_yaml::from_str("mode: dynamic\ndead_zone: 0.2").unwrap();

        assert_eq!(settings.mode, JoystickMode::Dynamic);
        assert_eq!(settings.axis_mode, AxisMode::Both);
        assert_eq!(settings.handle_range, 1.0);
        assert!((settings.dead_zone - 0.2).abs() < f32::EPSILON);
    }
}
