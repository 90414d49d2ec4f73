//! Heading math on the ground plane
//!
//! A heading is a yaw angle in radians. Heading 0 faces -Z and positive
//! headings turn toward +X, matching the orbit camera's yaw.

use std::f32::consts::{PI, TAU};

use glam::{Quat, Vec3};

/// Wrap an angle into the range (-PI, PI]
pub fn wrap_angle(angle: f32) -> f32 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in (-PI, PI]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    wrap_angle(to - from)
}

/// Heading of a direction projected onto the XZ plane.
///
/// Returns `None` for directions that are (nearly) vertical, where the
/// heading is undefined.
pub fn heading_from_direction(direction: Vec3) -> Option<f32> {
    let flat = Vec3::new(direction.x, 0.0, direction.z);
    if flat.length_squared() < 1e-8 {
        return None;
    }
    Some(direction.x.atan2(-direction.z))
}

/// Unit forward vector on the XZ plane for a heading
pub fn direction_from_heading(heading: f32) -> Vec3 {
    Vec3::new(heading.sin(), 0.0, -heading.cos())
}

/// Body rotation for a heading (forward is local -Z)
pub fn rotation_from_heading(heading: f32) -> Quat {
    Quat::from_rotation_y(-heading)
}
