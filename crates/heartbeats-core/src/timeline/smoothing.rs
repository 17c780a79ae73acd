//! Atomic layer: scroll smoothing strategies
//!
//! Desktop page views chase the raw scroll offset with an exponential lerp
//! once per frame; lightweight page views use the raw offset as-is.

use serde::{Deserialize, Serialize};

use super::timing::approach;
use super::viewport::Viewport;

/// Configured smoothing strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingMode {
    /// Pick per page view from the viewport width
    #[default]
    Auto,
    /// Per-frame exponential smoothing
    Desktop,
    /// Unsmoothed, computed per scroll event
    Lightweight,
}

impl SmoothingMode {
    /// Resolve to a concrete profile for a page view mounted at `viewport`
    pub fn resolve(self, viewport: &Viewport, breakpoint_px: f64) -> DeviceProfile {
        match self {
            SmoothingMode::Desktop => DeviceProfile::Desktop,
            SmoothingMode::Lightweight => DeviceProfile::Lightweight,
            SmoothingMode::Auto => {
                if viewport.is_narrower_than(breakpoint_px) {
                    DeviceProfile::Lightweight
                } else {
                    DeviceProfile::Desktop
                }
            }
        }
    }
}

/// Concrete smoothing/driver profile of one page view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceProfile {
    Desktop,
    Lightweight,
}

impl DeviceProfile {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceProfile::Desktop => "desktop",
            DeviceProfile::Lightweight => "lightweight",
        }
    }

    /// The other profile
    pub fn toggled(self) -> Self {
        match self {
            DeviceProfile::Desktop => DeviceProfile::Lightweight,
            DeviceProfile::Lightweight => DeviceProfile::Desktop,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Strategy {
    Exponential { factor: f64, epsilon: f64 },
    Direct,
}

/// Tracks the smoothed copy of a target value
#[derive(Debug, Clone)]
pub struct ScrollSmoother {
    strategy: Strategy,
    value: f64,
}

impl ScrollSmoother {
    /// Exponential smoothing by `factor` per step, snapping once within `epsilon`
    ///
    /// `factor` is clamped into (0, 1] so a step never passes the target.
    pub fn exponential(factor: f64, epsilon: f64, initial: f64) -> Self {
        let factor = if factor.is_nan() {
            1.0
        } else {
            factor.clamp(f64::EPSILON, 1.0)
        };
        Self {
            strategy: Strategy::Exponential {
                factor,
                epsilon: epsilon.max(0.0),
            },
            value: initial,
        }
    }

    /// No smoothing: every step lands on the target
    pub fn direct(initial: f64) -> Self {
        Self {
            strategy: Strategy::Direct,
            value: initial,
        }
    }

    /// Advance one step toward `target` and return the new value
    pub fn step(&mut self, target: f64) -> f64 {
        self.value = match self.strategy {
            Strategy::Direct => target,
            Strategy::Exponential { factor, epsilon } => {
                if (target - self.value).abs() <= epsilon {
                    target
                } else {
                    approach(self.value, target, factor)
                }
            }
        };
        self.value
    }

    /// Jump straight to `value`
    pub fn reset(&mut self, value: f64) {
        self.value = value;
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn is_smoothing(&self) -> bool {
        matches!(self.strategy, Strategy::Exponential { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_step() {
        let mut smoother = ScrollSmoother::exponential(0.08, 0.01, 0.0);
        assert!((smoother.step(1000.0) - 80.0).abs() < 1e-9);
        assert!((smoother.step(1000.0) - 153.6).abs() < 1e-9);
    }

    #[test]
    fn test_exponential_never_overshoots() {
        let mut smoother = ScrollSmoother::exponential(0.08, 0.01, 500.0);
        for _ in 0..500 {
            let v = smoother.step(0.0);
            assert!(v >= 0.0);
        }
        assert_eq!(smoother.value(), 0.0);
    }

    #[test]
    fn test_snaps_within_epsilon() {
        let mut smoother = ScrollSmoother::exponential(0.08, 0.5, 99.8);
        assert_eq!(smoother.step(100.0), 100.0);
    }

    #[test]
    fn test_out_of_range_factor_is_clamped() {
        let mut smoother = ScrollSmoother::exponential(1.8, 0.01, 0.0);
        for _ in 0..5 {
            let v = smoother.step(100.0);
            assert!((0.0..=100.0).contains(&v), "overshot to {}", v);
        }

        let mut stalled = ScrollSmoother::exponential(-0.5, 0.01, 0.0);
        assert!(stalled.step(100.0) > 0.0);

        let mut nan = ScrollSmoother::exponential(f64::NAN, 0.01, 0.0);
        assert_eq!(nan.step(100.0), 100.0);
    }

    #[test]
    fn test_direct_lands_on_target() {
        let mut smoother = ScrollSmoother::direct(0.0);
        assert_eq!(smoother.step(1234.5), 1234.5);
        assert!(!smoother.is_smoothing());
    }

    #[test]
    fn test_auto_mode_uses_breakpoint() {
        let phone = Viewport::new(390.0, 844.0);
        let laptop = Viewport::new(1440.0, 900.0);
        assert_eq!(
            SmoothingMode::Auto.resolve(&phone, 768.0),
            DeviceProfile::Lightweight
        );
        assert_eq!(
            SmoothingMode::Auto.resolve(&laptop, 768.0),
            DeviceProfile::Desktop
        );
        assert_eq!(
            SmoothingMode::Desktop.resolve(&phone, 768.0),
            DeviceProfile::Desktop
        );
    }
}
