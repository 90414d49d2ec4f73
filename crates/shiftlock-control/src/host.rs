//! Host engine collaborators
//!
//! The controller never touches the scene directly. It reads poses and
//! issues commands through these traits, which the host implements for its
//! camera, character, cursor, input and UI systems.

use winit::keyboard::KeyCode;

use crate::error::HostError;

/// Callback handed to the host for input events and button presses
pub type HostCallback = Box<dyn FnMut() + Send + 'static>;

/// Handle for a key subscription, revoked with [`InputHost::unsubscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(pub u64);

/// Handle for an on-screen toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonHandle(pub u64);

/// Camera orientation and camera-local offset
pub trait CameraHost {
    /// Heading the camera is looking along (radians, see `shiftlock_core::angle`)
    fn camera_heading(&self) -> f32;

    /// Apply a camera-space translation on top of the camera's own placement
    fn set_camera_offset(&mut self, offset: glam::Vec3) -> Result<(), HostError>;
}

/// The controlled character's body
pub trait CharacterHost {
    fn character_heading(&self) -> f32;

    fn set_character_heading(&mut self, heading: f32) -> Result<(), HostError>;

    /// Toggle the host's own "face the movement direction" behavior
    fn set_auto_rotate(&mut self, enabled: bool);
}

/// Mouse cursor appearance and lock
pub trait CursorHost {
    fn set_cursor_icon(&mut self, asset: &str);

    fn reset_cursor_icon(&mut self);

    /// Pin the mouse to the screen center
    fn set_mouse_locked(&mut self, locked: bool);
}

/// Raw key events
pub trait InputHost {
    /// Register callbacks for a key. Fails if the device is missing.
    fn subscribe_key(
        &mut self,
        key: KeyCode,
        on_down: HostCallback,
        on_up: HostCallback,
    ) -> Result<SubscriptionHandle, HostError>;

    fn unsubscribe(&mut self, handle: SubscriptionHandle);
}

/// Touch toggle button, only used when mobile support is on
pub trait ToggleButtonHost {
    fn create_toggle_button(&mut self, on_press: HostCallback, on_release: HostCallback)
        -> ButtonHandle;

    fn destroy_button(&mut self, handle: ButtonHandle);
}

/// Everything the controller needs from the host
pub trait ShiftLockHost: CameraHost + CharacterHost + CursorHost + InputHost + ToggleButtonHost {}

impl<T> ShiftLockHost for T where T: CameraHost + CharacterHost + CursorHost + InputHost + ToggleButtonHost
{}
