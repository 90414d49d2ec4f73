//! Orbit camera with mouse look and a camera-space offset

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use shiftlock_core::heading_from_direction;

/// Orbit camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitCameraConfig {
    /// Distance behind the focus point
    pub distance: f32,
    /// Mouse sensitivity (radians per pixel)
    pub sensitivity: f32,
    /// Minimum pitch angle in degrees
    pub pitch_min: f32,
    /// Maximum pitch angle in degrees
    pub pitch_max: f32,
}

impl Default for OrbitCameraConfig {
    fn default() -> Self {
        Self {
            distance: 8.0,
            sensitivity: 0.003,
            pitch_min: -80.0,
            pitch_max: 80.0,
        }
    }
}

/// Camera orbiting a focus point; yaw 0 looks down -Z
pub struct OrbitCamera {
    pub config: OrbitCameraConfig,
    /// Yaw rotation in radians (horizontal)
    pub yaw: f32,
    /// Pitch rotation in radians (vertical)
    pub pitch: f32,
    /// Camera-space offset (x right, y up, z back)
    pub offset: Vec3,
    /// Point the camera orbits
    focus: Vec3,
}

impl OrbitCamera {
    pub fn new(config: OrbitCameraConfig) -> Self {
        Self {
            config,
            yaw: 0.0,
            pitch: 0.0,
            offset: Vec3::ZERO,
            focus: Vec3::ZERO,
        }
    }

    /// Get the camera's forward direction
    pub fn forward(&self) -> Vec3 {
        let cos_pitch = self.pitch.cos();
        Vec3::new(
            self.yaw.sin() * cos_pitch,
            self.pitch.sin(),
            -self.yaw.cos() * cos_pitch,
        )
    }

    /// Get the camera's right direction
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Get the camera's up direction
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Heading of the look direction on the ground plane
    pub fn heading(&self) -> f32 {
        heading_from_direction(self.forward()).unwrap_or(self.yaw)
    }

    /// World position including the offset
    pub fn position(&self) -> Vec3 {
        let back = -self.forward();
        let shoulder =
            self.right() * self.offset.x + self.up() * self.offset.y + back * self.offset.z;
        self.focus + back * self.config.distance + shoulder
    }

    pub fn set_focus(&mut self, focus: Vec3) {
        self.focus = focus;
    }

    /// Handle mouse look input
    pub fn handle_mouse_look(&mut self, mouse_delta: Vec2) {
        self.yaw += mouse_delta.x * self.config.sensitivity;

        self.pitch -= mouse_delta.y * self.config.sensitivity;
        let pitch_min = self.config.pitch_min.to_radians();
        let pitch_max = self.config.pitch_max.to_radians();
        self.pitch = self.pitch.clamp(pitch_min, pitch_max);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(OrbitCameraConfig::default())
    }
}
