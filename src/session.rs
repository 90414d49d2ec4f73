//! Scripted play session driving the controller frame by frame

use glam::{Vec2, Vec3};
use shiftlock_control::{ShiftLockController, ShiftLockError};
use shiftlock_core::{shortest_angle_delta, GameTime};
use tracing::info;
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::OrbitCamera;
use crate::host::SimHost;
use crate::settings::GameSettings;

/// Frames in the scripted session
pub const SESSION_FRAMES: u32 = 360;

/// Eye height above the character origin
const EYE_HEIGHT: f32 = 1.6;

/// What happened during a session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub frames: u32,
    pub simulated_seconds: f64,
    pub enabled_at_end: bool,
    pub final_offset: Vec3,
    pub camera_heading: f32,
    pub character_heading: f32,
    /// Body forward direction at the end
    pub body_forward: Vec3,
    pub listeners_after_teardown: usize,
    pub buttons_after_teardown: usize,
}

impl SessionReport {
    /// Angle left between the body and the camera at the end
    pub fn heading_error(&self) -> f32 {
        shortest_angle_delta(self.character_heading, self.camera_heading).abs()
    }
}

/// Run the scripted session against a simulated host
pub fn run(settings: &GameSettings) -> Result<SessionReport, ShiftLockError> {
    let mut host = SimHost::new(OrbitCamera::new(settings.camera.clone()));
    host.camera.set_focus(host.character.position + Vec3::Y * EYE_HEIGHT);

    let mut controller = ShiftLockController::new(settings.shift_lock.clone(), host)?;
    for failure in controller.binding_failures() {
        info!("Continuing without binding: {}", failure);
    }

    let mut time = GameTime::new(settings.time.clone());

    for frame in 0..SESSION_FRAMES {
        script(frame, &mut controller);

        time.update(settings.session.frame_delta(frame));
        controller.update(time.delta_time);

        if frame % 60 == 0 {
            let host = controller.host();
            info!(
                "frame {:>3}: enabled={} mouse_locked={} cursor={} auto_rotate={} \
                 offset=({:.2}, {:.2}, {:.2}) camera={:.2} body={:.2}",
                frame,
                controller.is_enabled(),
                host.mouse_locked,
                host.cursor_icon.as_deref().unwrap_or("default"),
                host.character.auto_rotate,
                host.camera.offset.x,
                host.camera.offset.y,
                host.camera.offset.z,
                host.camera.heading(),
                host.character.heading
            );
        }
    }

    let enabled_at_end = controller.is_enabled();
    let final_offset = controller.offset();
    let camera_heading = controller.host().camera.heading();
    let character_heading = controller.character_heading();
    let body_forward = controller.host().character.forward();

    controller.dispose();

    Ok(SessionReport {
        frames: SESSION_FRAMES,
        simulated_seconds: time.total_time,
        enabled_at_end,
        final_offset,
        camera_heading,
        character_heading,
        body_forward,
        listeners_after_teardown: controller.host().listener_count(),
        buttons_after_teardown: controller.host().button_count(),
    })
}

/// Inputs for one frame
fn script(frame: u32, controller: &mut ShiftLockController<SimHost>) {
    match frame {
        // Hold left shift for a while, with key repeat
        10 => controller.host_mut().key_down(KeyCode::ShiftLeft),
        11..=44 if frame % 3 == 0 => controller.host_mut().key_down(KeyCode::ShiftLeft),
        45 => controller.host_mut().key_up(KeyCode::ShiftLeft),
        // Swing the camera around while locked
        20..=100 => controller
            .host_mut()
            .camera
            .handle_mouse_look(Vec2::new(12.0, 0.5)),
        // Toggle off with the touch button, or right shift on desktop
        200 => {
            if controller.has_mobile_button() {
                controller.host_mut().tap_buttons();
            } else {
                controller.handle_keyboard(
                    PhysicalKey::Code(KeyCode::ShiftRight),
                    ElementState::Pressed,
                );
                controller.handle_keyboard(
                    PhysicalKey::Code(KeyCode::ShiftRight),
                    ElementState::Released,
                );
            }
        }
        // Mash the toggle before the camera settles, ending locked
        240 => controller.toggle_shift_lock(Some(true)),
        243 => controller.toggle_shift_lock(None),
        244 => controller.toggle_shift_lock(Some(true)),
        250..=300 => controller
            .host_mut()
            .camera
            .handle_mouse_look(Vec2::new(-20.0, 0.0)),
        _ => {}
    }
}
