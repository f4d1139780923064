// orbit/easing.rs
//
// Easing curves for camera transitions.
// Pure math, no scene or camera state.

use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Easing curve applied to focus-transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Gentle slow start and end.
    QuadInOut,
    /// Stronger slow start and end. Used for focus transitions.
    #[default]
    CubicInOut,
    /// Sine-shaped slow start and end.
    SineInOut,
}

impl Easing {
    /// Apply the curve to a normalized progress value.
    /// `t` is clamped to [0, 1]; every curve maps 0 → 0, 0.5 → 0.5 and 1 → 1.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicInOut => ease_in_out_cubic(t),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

/// Cubic ease-in-out: `4t³` below the midpoint, `1 - (-2t + 2)³ / 2` above it.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linearly interpolate between two points.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}
