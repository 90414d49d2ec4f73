//! Shift lock configuration

use std::collections::HashSet;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use crate::error::ConfigError;

/// Shift lock tunables. Every field is optional when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftLockConfig {
    /// Show an on-screen toggle button for touch devices
    pub mobile_support: bool,
    /// Turn the character at `character_rotation_speed` instead of snapping
    pub smooth_character_rotation: bool,
    /// Character turn rate in radians per second
    pub character_rotation_speed: f32,
    /// Damping ratio of the camera offset spring, in (0, 1] (1 = critical)
    pub transition_spring_damper: f32,
    /// Spring response speed while moving toward the shoulder offset
    pub camera_transition_in_speed: f32,
    /// Spring response speed while returning to the default offset
    pub camera_transition_out_speed: f32,
    /// Camera-space offset applied while locked
    pub locked_camera_offset: Vec3,
    /// Cursor asset shown while locked (empty = leave the cursor alone)
    pub locked_mouse_icon: String,
    /// Keys that toggle shift lock
    pub shift_lock_keybinds: HashSet<KeyCode>,
}

impl Default for ShiftLockConfig {
    fn default() -> Self {
        Self {
            mobile_support: false,
            smooth_character_rotation: true,
            character_rotation_speed: 3.0,
            transition_spring_damper: 0.7,
            camera_transition_in_speed: 10.0,
            camera_transition_out_speed: 14.0,
            locked_camera_offset: Vec3::new(1.75, 0.25, 0.0),
            locked_mouse_icon: "assets/cursors/shift_lock.png".to_string(),
            shift_lock_keybinds: HashSet::from([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        }
    }
}

impl ShiftLockConfig {
    /// Check every tunable, returning the first invalid one
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("character_rotation_speed", self.character_rotation_speed)?;
        positive("camera_transition_in_speed", self.camera_transition_in_speed)?;
        positive("camera_transition_out_speed", self.camera_transition_out_speed)?;

        let damper = self.transition_spring_damper;
        if !(damper.is_finite() && damper > 0.0 && damper <= 1.0) {
            return Err(ConfigError::DamperOutOfRange(damper));
        }

        if !self.locked_camera_offset.is_finite() {
            return Err(ConfigError::NonFiniteOffset(self.locked_camera_offset));
        }

        if self.shift_lock_keybinds.is_empty() {
            return Err(ConfigError::NoKeybinds);
        }

        Ok(())
    }

    /// Spring response speed for the direction of the current transition
    pub fn transition_speed(&self, entering: bool) -> f32 {
        if entering {
            self.camera_transition_in_speed
        } else {
            self.camera_transition_out_speed
        }
    }

    /// Camera offset the spring heads toward
    pub fn target_offset(&self, enabled: bool) -> Vec3 {
        if enabled {
            self.locked_camera_offset
        } else {
            Vec3::ZERO
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShiftLockConfig::default();
        assert!(!config.mobile_support);
        assert!(config.smooth_character_rotation);
        assert_eq!(config.character_rotation_speed, 3.0);
        assert_eq!(config.transition_spring_damper, 0.7);
        assert_eq!(config.camera_transition_in_speed, 10.0);
        assert_eq!(config.camera_transition_out_speed, 14.0);
        assert_eq!(config.locked_camera_offset, Vec3::new(1.75, 0.25, 0.0));
        assert!(config.shift_lock_keybinds.contains(&KeyCode::ShiftLeft));
        assert!(config.shift_lock_keybinds.contains(&KeyCode::ShiftRight));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_speeds() {
        let config = ShiftLockConfig {
            camera_transition_in_speed: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "camera_transition_in_speed",
                value: 0.0
            })
        );

        let config = ShiftLockConfig {
            character_rotation_speed: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "character_rotation_speed",
                ..
            })
        ));

        let config = ShiftLockConfig {
            camera_transition_out_speed: f32::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_damper_range() {
        for bad in [0.0, -0.2, 1.01, f32::NAN] {
            let config = ShiftLockConfig {
                transition_spring_damper: bad,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::DamperOutOfRange(_))
            ));
        }

        let critical = ShiftLockConfig {
            transition_spring_damper: 1.0,
            ..Default::default()
        };
        assert!(critical.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_keybinds_and_bad_offset() {
        let config = ShiftLockConfig {
            shift_lock_keybinds: HashSet::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoKeybinds));

        let config = ShiftLockConfig {
            locked_camera_offset: Vec3::new(f32::NAN, 0.0, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteOffset(_))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ShiftLockConfig = serde_json::from_str(
            r#"{ "mobile_support": true, "character_rotation_speed": 6.5 }"#,
        )
        .unwrap();
        assert!(config.mobile_support);
        assert_eq!(config.character_rotation_speed, 6.5);
        assert_eq!(config.camera_transition_out_speed, 14.0);
        assert_eq!(config.shift_lock_keybinds.len(), 2);
    }

    #[test]
    fn test_transition_helpers() {
        let config = ShiftLockConfig::default();
        assert_eq!(config.transition_speed(true), 10.0);
        assert_eq!(config.transition_speed(false), 14.0);
        assert_eq!(config.target_offset(false), Vec3::ZERO);
        assert_eq!(config.target_offset(true), config.locked_camera_offset);
    }
}
