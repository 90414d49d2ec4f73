//! Shift Lock Control - Over-the-shoulder camera lock
//!
//! While shift lock is on, the camera is pushed to a shoulder offset with a
//! damped spring and the character body turns to face where the camera
//! looks. The host engine is reached only through the traits in [`host`].

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod input;
pub mod mobile;
pub mod rotation;
pub mod spring;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ShiftLockConfig;
pub use controller::ShiftLockController;
pub use error::{ConfigError, HostError, ShiftLockError};
pub use host::{
    ButtonHandle, CameraHost, CharacterHost, CursorHost, HostCallback, InputHost,
    ShiftLockHost, SubscriptionHandle, ToggleButtonHost,
};
pub use input::{InputAdapter, InputEvent, InputQueue, InputSource};
pub use mobile::MobileUiAdapter;
pub use rotation::RotationBlender;
pub use spring::SpringDamper;
