//! Numerical animation primitives: a damped spring, a fixed-duration eased
//! tween, and the rubber-band curve used past the ends of the wheel.

use crate::constants::{MAX_SUBSTEP_SEC, RUBBER_BAND_LIMIT, SPRING_DAMPING, SPRING_STIFFNESS};

/// Unit-mass spring constants: `a = k * (target - x) - c * v`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
        }
    }
}

impl SpringParams {
    pub fn natural_frequency(&self) -> f64 {
        self.stiffness.sqrt()
    }

    /// 1.0 is critical damping.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * self.natural_frequency())
    }
}

/// Position/velocity pair integrated toward `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub position: f64,
    /// Units per second.
    pub velocity: f64,
    pub target: f64,
}

impl Spring {
    pub fn new(position: f64, velocity: f64, target: f64) -> Self {
        Self {
            position,
            velocity,
            target,
        }
    }

    /// Semi-implicit Euler, sub-stepped so large frames stay stable.
    pub fn step(&mut self, params: SpringParams, dt_sec: f64) {
        if dt_sec <= 0.0 {
            return;
        }
        let steps = (dt_sec / MAX_SUBSTEP_SEC).ceil().max(1.0);
        let h = dt_sec / steps;
        for _ in 0..steps as usize {
            let accel =
                params.stiffness * (self.target - self.position) - params.damping * self.velocity;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }
    }

    pub fn is_at_rest(&self, epsilon: f64) -> bool {
        (self.position - self.target).abs() < epsilon && self.velocity.abs() < epsilon
    }
}

#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Fixed-duration eased interpolation. The clock starts on the first sample,
/// so a tween requested between frames does not skip its opening.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    start_ms: Option<f64>,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            start_ms: None,
        }
    }

    /// Returns the value at `now_ms` and whether the tween has finished.
    pub fn sample(&mut self, now_ms: f64) -> (f64, bool) {
        let start = *self.start_ms.get_or_insert(now_ms);
        let progress = if self.duration_ms > 0.0 {
            ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            return (self.to, true);
        }
        let eased = ease_out_cubic(progress);
        (self.from + (self.to - self.from) * eased, false)
    }
}

/// Soft resistance for a drag past an end. `overshoot >= 0` maps to
/// `[0, RUBBER_BAND_LIMIT)` with unit slope at zero.
#[inline]
pub fn rubber_band(overshoot: f64) -> f64 {
    let x = overshoot.max(0.0);
    RUBBER_BAND_LIMIT * x / (x + RUBBER_BAND_LIMIT)
}

/// Apply [`rubber_band`] outside `[lo, hi]`.
pub fn soft_clamp(value: f64, lo: f64, hi: f64) -> f64 {
    if value < lo {
        lo - rubber_band(lo - value)
    } else if value > hi {
        hi + rubber_band(value - hi)
    } else {
        value
    }
}
