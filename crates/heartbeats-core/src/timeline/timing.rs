//! Atomic layer: scalar helpers shared by the timeline and presentation
//!
//! Pure functions for clamped progress and interpolation.

/// Progress of `value` through the interval `[start, end]`, clamped to [0, 1]
///
/// A zero-length interval is a step: 0 before `start`, 1 at or after it.
#[inline]
pub fn progress(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span <= 0.0 {
        return if value >= start { 1.0 } else { 0.0 };
    }
    ((value - start) / span).clamp(0.0, 1.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// One exponential smoothing step of `current` toward `target`
///
/// `factor` is expected in (0, 1]; the result always lies between
/// `current` and `target`. Weighting both ends keeps the step finite for any
/// finite pair; a result that still is not finite lands on `target`.
#[inline]
pub fn approach(current: f64, target: f64, factor: f64) -> f64 {
    let next = current * (1.0 - factor) + target * factor;
    if next.is_finite() {
        next
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_interior() {
        assert!((progress(1080.0, 560.0, 1600.0) - 0.5).abs() < 1e-9);
        assert_eq!(progress(560.0, 560.0, 1600.0), 0.0);
        assert_eq!(progress(1600.0, 560.0, 1600.0), 1.0);
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(progress(-50.0, 0.0, 100.0), 0.0);
        assert_eq!(progress(1e9, 0.0, 100.0), 1.0);
    }

    #[test]
    fn test_progress_step_for_empty_interval() {
        assert_eq!(progress(99.9, 100.0, 100.0), 0.0);
        assert_eq!(progress(100.0, 100.0, 100.0), 1.0);
        assert_eq!(progress(250.0, 100.0, 100.0), 1.0);
    }

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_approach_never_overshoots() {
        let next = approach(0.0, 100.0, 0.08);
        assert!((next - 8.0).abs() < 1e-9);
        let back = approach(100.0, 0.0, 0.08);
        assert!(back > 0.0 && back < 100.0);
    }

    #[test]
    fn test_approach_stays_finite_across_full_range() {
        let next = approach(-f64::MAX, f64::MAX, 0.08);
        assert!(next.is_finite());
        assert!(next > -f64::MAX && next < f64::MAX);
        assert_eq!(approach(0.0, f64::MAX, 1.0), f64::MAX);
    }
}
