//! Frame clock
//!
//! Converts raw frame deltas from the host loop into the `dt` handed to the
//! controller each tick.

use serde::{Deserialize, Serialize};

/// Configuration for game time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// How many in-game seconds pass per real second
    pub time_scale: f32,
    /// Maximum delta time handed to a single tick (lag spike guard)
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            max_delta_time: 0.25,
        }
    }
}

/// Game time tracking
#[derive(Debug, Clone, Default)]
pub struct GameTime {
    /// Configuration
    pub config: TimeConfig,
    /// Time since start in seconds
    pub total_time: f64,
    /// Delta time for this frame (clamped and scaled)
    pub delta_time: f32,
    /// Clamped but unscaled delta time
    pub unscaled_delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
    /// Whether simulation time is paused
    pub paused: bool,
}

impl GameTime {
    /// Create a new game time with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Advance with the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        let raw_delta = if raw_delta.is_finite() {
            raw_delta.max(0.0)
        } else {
            0.0
        };
        self.unscaled_delta_time = raw_delta.min(self.config.max_delta_time);
        self.frame_count += 1;

        if self.paused {
            self.delta_time = 0.0;
            return;
        }

        self.delta_time = self.unscaled_delta_time * self.config.time_scale;
        self.total_time += self.delta_time as f64;
    }

    /// Pause simulation time
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume simulation time
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Set the time scale (0.0 = frozen, 1.0 = normal, 2.0 = double speed)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_time() {
        let mut time = GameTime::default();
        time.update(0.016);

        assert!(time.delta_time > 0.0);
        assert_eq!(time.frame_count, 1);

        time.pause();
        time.update(0.016);
        assert_eq!(time.delta_time, 0.0);
        assert_eq!(time.frame_count, 2);
    }

    #[test]
    fn test_lag_spike_is_clamped() {
        let mut time = GameTime::default();
        time.update(3.0);
        assert_eq!(time.delta_time, 0.25);
    }

    #[test]
    fn test_bad_deltas_become_zero() {
        let mut time = GameTime::default();
        time.update(f32::NAN);
        assert_eq!(time.delta_time, 0.0);
        time.update(-1.0);
        assert_eq!(time.delta_time, 0.0);
    }

    #[test]
    fn test_time_scale() {
        let mut time = GameTime::default();
        time.set_time_scale(0.5);
        time.update(0.1);
        assert!((time.delta_time - 0.05).abs() < 1e-6);
        time.set_time_scale(-2.0);
        assert_eq!(time.config.time_scale, 0.0);
    }
}
