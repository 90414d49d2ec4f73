//! Simulated host: an orbit camera, a character body, a cursor, a keyboard
//! and a touch screen, wired to the shift lock host traits.

use std::collections::{HashMap, HashSet};

use glam::Vec3;
use shiftlock_control::{
    ButtonHandle, CameraHost, CharacterHost, CursorHost, HostCallback, HostError, InputHost,
    SubscriptionHandle, ToggleButtonHost,
};
use shiftlock_core::rotation_from_heading;
use tracing::{debug, info};
use winit::keyboard::KeyCode;

use crate::camera::OrbitCamera;

/// Character body pose
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterPose {
    pub position: Vec3,
    pub heading: f32,
    /// Host turns the body toward its movement direction
    pub auto_rotate: bool,
}

impl CharacterPose {
    /// Body forward direction
    pub fn forward(&self) -> Vec3 {
        rotation_from_heading(self.heading) * -Vec3::Z
    }
}

struct KeyListener {
    key: KeyCode,
    on_down: HostCallback,
    on_up: HostCallback,
}

struct TouchButton {
    on_press: HostCallback,
    on_release: HostCallback,
}

/// Headless stand-in for an engine
pub struct SimHost {
    pub camera: OrbitCamera,
    pub character: CharacterPose,
    pub cursor_icon: Option<String>,
    pub mouse_locked: bool,
    /// Keys with no physical device behind them
    pub missing_keys: HashSet<KeyCode>,
    listeners: HashMap<SubscriptionHandle, KeyListener>,
    buttons: HashMap<ButtonHandle, TouchButton>,
    next_handle: u64,
}

impl SimHost {
    pub fn new(camera: OrbitCamera) -> Self {
        Self {
            camera,
            character: CharacterPose {
                auto_rotate: true,
                ..Default::default()
            },
            cursor_icon: None,
            mouse_locked: false,
            missing_keys: HashSet::new(),
            listeners: HashMap::new(),
            buttons: HashMap::new(),
            next_handle: 1,
        }
    }

    /// Deliver a physical key press to every listener on that key
    pub fn key_down(&mut self, key: KeyCode) {
        for listener in self.listeners.values_mut().filter(|l| l.key == key) {
            (listener.on_down)();
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        for listener in self.listeners.values_mut().filter(|l| l.key == key) {
            (listener.on_up)();
        }
    }

    /// Tap every on-screen toggle button
    pub fn tap_buttons(&mut self) {
        for button in self.buttons.values_mut() {
            (button.on_press)();
            (button.on_release)();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_handle;
        self.next_handle += 1;
        id
    }
}

impl CameraHost for SimHost {
    fn camera_heading(&self) -> f32 {
        self.camera.heading()
    }

    fn set_camera_offset(&mut self, offset: Vec3) -> Result<(), HostError> {
        self.camera.offset = offset;
        Ok(())
    }
}

impl CharacterHost for SimHost {
    fn character_heading(&self) -> f32 {
        self.character.heading
    }

    fn set_character_heading(&mut self, heading: f32) -> Result<(), HostError> {
        self.character.heading = heading;
        Ok(())
    }

    fn set_auto_rotate(&mut self, enabled: bool) {
        self.character.auto_rotate = enabled;
    }
}

impl CursorHost for SimHost {
    fn set_cursor_icon(&mut self, asset: &str) {
        debug!("Cursor icon -> {}", asset);
        self.cursor_icon = Some(asset.to_string());
    }

    fn reset_cursor_icon(&mut self) {
        debug!("Cursor icon reset");
        self.cursor_icon = None;
    }

    fn set_mouse_locked(&mut self, locked: bool) {
        self.mouse_locked = locked;
    }
}

impl InputHost for SimHost {
    fn subscribe_key(
        &mut self,
        key: KeyCode,
        on_down: HostCallback,
        on_up: HostCallback,
    ) -> Result<SubscriptionHandle, HostError> {
        if self.missing_keys.contains(&key) {
            return Err(HostError::DeviceUnavailable(format!("{:?}", key)));
        }
        let handle = SubscriptionHandle(self.next_id());
        self.listeners.insert(handle, KeyListener { key, on_down, on_up });
        Ok(handle)
    }

    fn unsubscribe(&mut self, handle: SubscriptionHandle) {
        self.listeners.remove(&handle);
    }
}

impl ToggleButtonHost for SimHost {
    fn create_toggle_button(
        &mut self,
        on_press: HostCallback,
        on_release: HostCallback,
    ) -> ButtonHandle {
        let handle = ButtonHandle(self.next_id());
        info!("Touch toggle button shown");
        self.buttons.insert(handle, TouchButton { on_press, on_release });
        handle
    }

    fn destroy_button(&mut self, handle: ButtonHandle) {
        if self.buttons.remove(&handle).is_some() {
            info!("Touch toggle button removed");
        }
    }
}
