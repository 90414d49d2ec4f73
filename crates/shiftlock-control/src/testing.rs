//! Recording host for unit tests

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use glam::Vec3;
use parking_lot::Mutex;
use winit::keyboard::KeyCode;

use crate::error::HostError;
use crate::host::{
    ButtonHandle, CameraHost, CharacterHost, CursorHost, HostCallback, InputHost,
    SubscriptionHandle, ToggleButtonHost,
};

/// Every command the controller issued, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CameraOffset(Vec3),
    CharacterHeading(f32),
    AutoRotate(bool),
    CursorIcon(String),
    ResetCursor,
    MouseLocked(bool),
    Subscribe(KeyCode),
    Unsubscribe(SubscriptionHandle),
    CreateButton(ButtonHandle),
    DestroyButton(ButtonHandle),
}

impl Command {
    /// Whether this command moves the camera or the character
    pub fn is_pose_mutation(&self) -> bool {
        matches!(self, Command::CameraOffset(_) | Command::CharacterHeading(_))
    }
}

pub type CommandLog = Arc<Mutex<Vec<Command>>>;

struct KeySubscription {
    key: KeyCode,
    on_down: HostCallback,
    on_up: HostCallback,
}

struct Button {
    on_press: HostCallback,
    on_release: HostCallback,
}

pub struct MockHost {
    pub camera_heading: f32,
    pub character_heading: f32,
    pub camera_offset: Vec3,
    pub auto_rotate: bool,
    pub cursor_icon: Option<String>,
    pub mouse_locked: bool,
    pub unavailable_keys: HashSet<KeyCode>,
    pub reject_camera_writes: bool,
    pub reject_heading_writes: bool,
    log: CommandLog,
    subscriptions: HashMap<SubscriptionHandle, KeySubscription>,
    buttons: HashMap<ButtonHandle, Button>,
    next_handle: u64,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            camera_heading: 0.0,
            character_heading: 0.0,
            camera_offset: Vec3::ZERO,
            auto_rotate: true,
            cursor_icon: None,
            mouse_locked: false,
            unavailable_keys: HashSet::new(),
            reject_camera_writes: false,
            reject_heading_writes: false,
            log: CommandLog::default(),
            subscriptions: HashMap::new(),
            buttons: HashMap::new(),
            next_handle: 1,
        }
    }

    /// Shared handle to the command log, still readable after the host is dropped
    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }

    pub fn commands(&self) -> Vec<Command> {
        self.log.lock().clone()
    }

    pub fn clear_commands(&self) {
        self.log.lock().clear();
    }

    pub fn pose_mutations(&self) -> usize {
        self.log.lock().iter().filter(|c| c.is_pose_mutation()).count()
    }

    pub fn live_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn live_buttons(&self) -> usize {
        self.buttons.len()
    }

    pub fn key_down(&mut self, key: KeyCode) {
        for sub in self.subscriptions.values_mut().filter(|s| s.key == key) {
            (sub.on_down)();
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        for sub in self.subscriptions.values_mut().filter(|s| s.key == key) {
            (sub.on_up)();
        }
    }

    pub fn tap_button(&mut self) {
        for button in self.buttons.values_mut() {
            (button.on_press)();
            (button.on_release)();
        }
    }

    fn record(&self, command: Command) {
        self.log.lock().push(command);
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_handle;
        self.next_handle += 1;
        id
    }
}

impl CameraHost for MockHost {
    fn camera_heading(&self) -> f32 {
        self.camera_heading
    }

    fn set_camera_offset(&mut self, offset: Vec3) -> Result<(), HostError> {
        if self.reject_camera_writes {
            return Err(HostError::Rejected("camera is scripted".into()));
        }
        self.camera_offset = offset;
        self.record(Command::CameraOffset(offset));
        Ok(())
    }
}

impl CharacterHost for MockHost {
    fn character_heading(&self) -> f32 {
        self.character_heading
    }

    fn set_character_heading(&mut self, heading: f32) -> Result<(), HostError> {
        if self.reject_heading_writes {
            return Err(HostError::Rejected("character is anchored".into()));
        }
        self.character_heading = heading;
        self.record(Command::CharacterHeading(heading));
        Ok(())
    }

    fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
        self.record(Command::AutoRotate(enabled));
    }
}

impl CursorHost for MockHost {
    fn set_cursor_icon(&mut self, asset: &str) {
        self.cursor_icon = Some(asset.to_string());
        self.record(Command::CursorIcon(asset.to_string()));
    }

    fn reset_cursor_icon(&mut self) {
        self.cursor_icon = None;
        self.record(Command::ResetCursor);
    }

    fn set_mouse_locked(&mut self, locked: bool) {
        self.mouse_locked = locked;
        self.record(Command::MouseLocked(locked));
    }
}

impl InputHost for MockHost {
    fn subscribe_key(
        &mut self,
        key: KeyCode,
        on_down: HostCallback,
        on_up: HostCallback,
    ) -> Result<SubscriptionHandle, HostError> {
        if self.unavailable_keys.contains(&key) {
            return Err(HostError::DeviceUnavailable(format!("no keyboard for {:?}", key)));
        }
        let handle = SubscriptionHandle(self.next_id());
        self.subscriptions.insert(handle, KeySubscription { key, on_down, on_up });
        self.record(Command::Subscribe(key));
        Ok(handle)
    }

    fn unsubscribe(&mut self, handle: SubscriptionHandle) {
        self.subscriptions.remove(&handle);
        self.record(Command::Unsubscribe(handle));
    }
}

impl ToggleButtonHost for MockHost {
    fn create_toggle_button(
        &mut self,
        on_press: HostCallback,
        on_release: HostCallback,
    ) -> ButtonHandle {
        let handle = ButtonHandle(self.next_id());
        self.buttons.insert(handle, Button { on_press, on_release });
        self.record(Command::CreateButton(handle));
        handle
    }

    fn destroy_button(&mut self, handle: ButtonHandle) {
        self.buttons.remove(&handle);
        self.record(Command::DestroyButton(handle));
    }
}
