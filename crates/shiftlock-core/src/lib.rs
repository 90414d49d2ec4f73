//! Shift Lock Core - Math and timing primitives
//!
//! This crate provides the foundational types used by the controller:
//! - Mathematical primitives (re-exported from glam)
//! - Heading helpers for yaw angles on the ground plane
//! - Frame clock that turns raw frame deltas into simulation ticks

pub mod angle;
pub mod time;

pub use angle::{
    direction_from_heading, heading_from_direction, rotation_from_heading, shortest_angle_delta,
    wrap_angle,
};
pub use glam::{Quat, Vec2, Vec3};
pub use time::{GameTime, TimeConfig};
