//! Damped spring for the camera offset
//!
//! Each step evaluates the closed-form solution of a damped harmonic
//! oscillator over `dt`, so any step size is stable: a 2 second hitch
//! lands exactly where 120 small frames would have.

use glam::Vec3;

/// Offset and speed below which the spring snaps to rest on its target
const REST_EPSILON: f32 = 1e-4;

/// Damping ratios this close to 1 use the critically damped solution
const CRITICAL_EPSILON: f32 = 1e-4;

/// Vector spring with position and velocity state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringDamper {
    position: Vec3,
    velocity: Vec3,
    /// Damping ratio (1 = critically damped, below 1 overshoots a little)
    damping_ratio: f32,
}

impl SpringDamper {
    /// Create a spring at rest at `position`
    pub fn new(position: Vec3, damping_ratio: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            damping_ratio,
        }
    }

    /// Current position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Whether the spring is sitting still on `target`
    pub fn is_settled(&self, target: Vec3) -> bool {
        self.velocity == Vec3::ZERO && self.position == target
    }

    /// Advance toward `target` by `dt` seconds with angular frequency `speed`.
    ///
    /// Position and velocity carry over between calls, so changing the
    /// target mid-flight continues smoothly instead of restarting.
    pub fn step(&mut self, target: Vec3, dt: f32, speed: f32) -> Vec3 {
        if !(dt > 0.0 && dt.is_finite()) || !(speed > 0.0 && speed.is_finite()) {
            return self.position;
        }

        let x0 = self.position - target;
        let v0 = self.velocity;
        let zeta = self.damping_ratio.clamp(CRITICAL_EPSILON, 1.0);
        let omega = speed;

        let (x, v) = if zeta >= 1.0 - CRITICAL_EPSILON {
            let decay = (-omega * dt).exp();
            let c = v0 + x0 * omega;
            let x = (x0 + c * dt) * decay;
            let v = (v0 - c * (omega * dt)) * decay;
            (x, v)
        } else {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * dt).exp();
            let (sin, cos) = (omega_d * dt).sin_cos();
            let b = (v0 + x0 * (zeta * omega)) / omega_d;
            let x = (x0 * cos + b * sin) * decay;
            let v = (v0 * cos - (b * (zeta * omega) + x0 * omega_d) * sin) * decay;
            (x, v)
        };

        if x.length() < REST_EPSILON && v.length() < REST_EPSILON {
            self.position = target;
            self.velocity = Vec3::ZERO;
        } else {
            self.position = target + x;
            self.velocity = v;
        }

        self.position
    }

    /// Jump to `position` and stop
    pub fn reset(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
    }
}
