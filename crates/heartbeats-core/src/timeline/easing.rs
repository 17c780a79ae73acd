//! Atomic layer: pure easing curves for phase progress
//!
//! Every curve maps [0, 1] onto [0, 1], is monotonically non-decreasing and
//! fixes both endpoints (except `None`, which is a step at 1).

use serde::{Deserialize, Serialize};

/// Easing curve applied to a phase's clamped progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end value
    None,
    #[default]
    Linear,
    /// Cubic ease-out: 1 - (1-t)³
    Cubic,
    /// Quintic ease-out: 1 - (1-t)⁵
    Quintic,
    /// Exponential ease-out: 1 - 2^(-10t)
    EaseOut,
    /// Quadratic ease-in-out
    EaseInOut,
}

impl EasingType {
    /// Apply the easing function to a progress value
    ///
    /// Input outside [0, 1] is clamped first.
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
            EasingType::EaseInOut => quadratic_ease_in_out(t),
        }
    }
}

#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

#[inline]
fn quadratic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMOOTH: [EasingType; 5] = [
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
        EasingType::EaseInOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in SMOOTH {
            assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
        assert_eq!(EasingType::None.apply(0.99), 0.0);
        assert_eq!(EasingType::None.apply(1.0), 1.0);
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in SMOOTH {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                assert!((0.0..=1.0).contains(&v));
                prev = v;
            }
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(EasingType::Linear.apply(-3.0), 0.0);
        assert_eq!(EasingType::Cubic.apply(7.0), 1.0);
    }
}
