//! Shift lock state machine and per-tick blending

use glam::Vec3;
use shiftlock_core::wrap_angle;
use tracing::{debug, info, warn};
use winit::event::ElementState;
use winit::keyboard::PhysicalKey;

use crate::config::ShiftLockConfig;
use crate::error::ShiftLockError;
use crate::host::ShiftLockHost;
use crate::input::{InputAdapter, InputQueue};
use crate::mobile::MobileUiAdapter;
use crate::rotation::RotationBlender;
use crate::spring::SpringDamper;

/// Ticks shorter than this change nothing
const MIN_TICK: f32 = 1e-6;

/// Shift lock controller.
///
/// Owns the host collaborators it drives. The host loop calls
/// [`update`](Self::update) once per frame; input callbacks registered at
/// construction are applied at the start of the next update.
pub struct ShiftLockController<H: ShiftLockHost> {
    /// Validated configuration
    config: ShiftLockConfig,
    /// Host camera, character, cursor, input and UI
    host: H,
    /// Whether shift lock is on
    enabled: bool,
    /// Camera offset spring
    spring: SpringDamper,
    /// Character turning
    blender: RotationBlender,
    /// Body heading the controller is steering
    character_heading: f32,
    /// Key and touch toggles
    input: InputAdapter,
    /// Touch button, mounted only with mobile support
    mobile: MobileUiAdapter,
    /// Keys that could not be bound at construction
    binding_failures: Vec<ShiftLockError>,
    /// Last camera offset write was rejected
    offset_write_failed: bool,
    /// Last character heading write was rejected
    heading_write_failed: bool,
    /// Torn down, no further commands are issued
    disposed: bool,
}

impl<H: ShiftLockHost> ShiftLockController<H> {
    /// Create a controller, binding its keys and touch button on `host`.
    ///
    /// Fails only on an invalid config. Keys the host cannot bind are
    /// logged and kept in [`binding_failures`](Self::binding_failures).
    pub fn new(config: ShiftLockConfig, mut host: H) -> Result<Self, ShiftLockError> {
        config.validate()?;

        let mut input = InputAdapter::new(config.shift_lock_keybinds.clone());
        let binding_failures = input.subscribe(&mut host);

        let mut mobile = MobileUiAdapter::new();
        if config.mobile_support {
            mobile.mount(&mut host, &input.queue());
        }

        info!(
            "Shift lock ready ({} of {} keys bound, mobile button: {})",
            input.subscription_count(),
            config.shift_lock_keybinds.len(),
            mobile.is_mounted()
        );

        Ok(Self {
            spring: SpringDamper::new(Vec3::ZERO, config.transition_spring_damper),
            blender: RotationBlender::new(),
            character_heading: host.character_heading(),
            config,
            host,
            enabled: false,
            input,
            mobile,
            binding_failures,
            offset_write_failed: false,
            heading_write_failed: false,
            disposed: false,
        })
    }

    /// Create a controller with the default configuration
    pub fn with_defaults(host: H) -> Result<Self, ShiftLockError> {
        Self::new(ShiftLockConfig::default(), host)
    }

    pub fn config(&self) -> &ShiftLockConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Whether shift lock is on
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Same as [`is_enabled`](Self::is_enabled)
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Current camera offset (spring position)
    pub fn offset(&self) -> Vec3 {
        self.spring.position()
    }

    /// Heading the controller last steered the character to
    pub fn character_heading(&self) -> f32 {
        self.character_heading
    }

    /// Whether the camera offset is still moving toward its target
    pub fn is_transitioning(&self) -> bool {
        !self
            .spring
            .is_settled(self.config.target_offset(self.enabled))
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Keys that failed to bind at construction
    pub fn binding_failures(&self) -> &[ShiftLockError] {
        &self.binding_failures
    }

    /// Whether the touch button is on screen
    pub fn has_mobile_button(&self) -> bool {
        self.mobile.is_mounted()
    }

    /// Clonable handle for hosts that deliver input from another thread
    pub fn input_queue(&self) -> InputQueue {
        self.input.queue()
    }

    /// Forward a winit keyboard event; applied on the next update
    pub fn handle_keyboard(&self, physical_key: PhysicalKey, element_state: ElementState) {
        self.input.handle_keyboard(physical_key, element_state);
    }

    /// Programmatic touch press; toggles on the next update
    pub fn press(&self) {
        self.input.press();
    }

    /// Programmatic touch release
    pub fn release(&self) {
        self.input.release();
    }

    /// Turn shift lock on
    pub fn enable(&mut self) {
        if self.disposed || self.enabled {
            return;
        }
        self.enabled = true;

        self.character_heading = self.host.character_heading();
        self.host.set_auto_rotate(false);
        if !self.config.locked_mouse_icon.is_empty() {
            self.host.set_cursor_icon(&self.config.locked_mouse_icon);
        }
        self.host.set_mouse_locked(true);

        debug!("Shift lock enabled");
    }

    /// Turn shift lock off
    pub fn disable(&mut self) {
        if self.disposed || !self.enabled {
            return;
        }
        self.enabled = false;
        self.release_host_state();
        debug!("Shift lock disabled");
    }

    /// Flip shift lock, or force it to `enable` when given
    pub fn toggle_shift_lock(&mut self, enable: Option<bool>) {
        match enable {
            Some(true) => self.enable(),
            Some(false) => self.disable(),
            None if self.enabled => self.disable(),
            None => self.enable(),
        }
    }

    /// Advance one simulation tick of `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.disposed || !(dt > MIN_TICK && dt.is_finite()) {
            return;
        }

        for _ in 0..self.input.drain_toggles() {
            self.toggle_shift_lock(None);
        }

        let target = self.config.target_offset(self.enabled);
        if !self.enabled && !self.offset_write_failed && self.spring.is_settled(target) {
            return;
        }

        let speed = self.config.transition_speed(self.enabled);
        let offset = self.spring.step(target, dt, speed);
        match self.host.set_camera_offset(offset) {
            Ok(()) => self.offset_write_failed = false,
            Err(e) => {
                if !self.offset_write_failed {
                    warn!("Camera offset write rejected, retrying next tick: {}", e);
                }
                self.offset_write_failed = true;
            }
        }

        if self.enabled {
            self.face_camera(dt);
        }
    }

    /// Turn the character toward the camera heading
    fn face_camera(&mut self, dt: f32) {
        let camera_heading = self.host.camera_heading();
        self.character_heading = if self.config.smooth_character_rotation {
            self.blender.step(
                self.character_heading,
                camera_heading,
                dt,
                self.config.character_rotation_speed,
            )
        } else {
            wrap_angle(camera_heading)
        };

        match self.host.set_character_heading(self.character_heading) {
            Ok(()) => self.heading_write_failed = false,
            Err(e) => {
                if !self.heading_write_failed {
                    warn!("Character heading write rejected, retrying next tick: {}", e);
                }
                self.heading_write_failed = true;
            }
        }
    }

    fn release_host_state(&mut self) {
        self.host.set_auto_rotate(true);
        self.host.reset_cursor_icon();
        self.host.set_mouse_locked(false);
    }

    /// Release every subscription and UI element and restore the camera.
    ///
    /// After this no command reaches the host, even if `update` keeps
    /// being called.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        self.input.unsubscribe_all(&mut self.host);
        self.mobile.unmount(&mut self.host);

        if self.enabled {
            self.enabled = false;
            self.release_host_state();
        }

        if self.spring.position() != Vec3::ZERO || self.offset_write_failed {
            if let Err(e) = self.host.set_camera_offset(Vec3::ZERO) {
                warn!("Could not restore camera offset on teardown: {}", e);
            }
        }
        self.spring.reset(Vec3::ZERO);

        self.disposed = true;
        info!("Shift lock torn down");
    }
}

impl<H: ShiftLockHost> Drop for ShiftLockController<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}
