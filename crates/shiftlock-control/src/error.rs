use thiserror::Error;
use winit::keyboard::KeyCode;

/// A tunable in [`ShiftLockConfig`](crate::ShiftLockConfig) is out of range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("transition_spring_damper must be in (0, 1], got {0}")]
    DamperOutOfRange(f32),

    #[error("locked_camera_offset must be finite, got {0}")]
    NonFiniteOffset(glam::Vec3),

    #[error("shift_lock_keybinds must contain at least one key")]
    NoKeybinds,
}

/// A host collaborator refused a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("host rejected command: {0}")]
    Rejected(String),

    #[error("input device unavailable: {0}")]
    DeviceUnavailable(String),
}

/// Errors surfaced by the shift lock controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShiftLockError {
    #[error("invalid shift lock configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("failed to bind shift lock key {key:?}: {source}")]
    InputBinding {
        key: KeyCode,
        #[source]
        source: HostError,
    },
}
