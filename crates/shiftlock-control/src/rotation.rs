//! Constant-rate turning toward a target heading

use shiftlock_core::{shortest_angle_delta, wrap_angle};

/// Turns a heading toward a target along the shortest arc at a fixed
/// angular speed, stopping exactly on the target.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationBlender;

impl RotationBlender {
    pub fn new() -> Self {
        Self
    }

    /// Next heading after turning for `dt` seconds at `speed` rad/s.
    ///
    /// Result is wrapped to (-PI, PI].
    pub fn step(&self, current_heading: f32, target_heading: f32, dt: f32, speed: f32) -> f32 {
        if !(dt > 0.0 && dt.is_finite()) || !(speed > 0.0 && speed.is_finite()) {
            return current_heading;
        }

        let delta = shortest_angle_delta(current_heading, target_heading);
        let max_turn = speed * dt;
        if delta.abs() <= max_turn {
            wrap_angle(target_heading)
        } else {
            wrap_angle(current_heading + max_turn.copysign(delta))
        }
    }
}
