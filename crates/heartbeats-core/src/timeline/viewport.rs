use serde::{Deserialize, Serialize};

/// Visible page area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a viewport, treating negative or non-finite sizes as zero
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// One percent of the smaller dimension
    #[inline]
    pub fn vmin(&self) -> f64 {
        self.width.min(self.height) / 100.0
    }

    /// True when the viewport is narrower than `breakpoint` pixels
    #[inline]
    pub fn is_narrower_than(&self, breakpoint: f64) -> bool {
        self.width < breakpoint
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vmin_uses_smaller_side() {
        assert!((Viewport::new(1280.0, 800.0).vmin() - 8.0).abs() < 1e-9);
        assert!((Viewport::new(390.0, 844.0).vmin() - 3.9).abs() < 1e-9);
    }

    #[test]
    fn test_new_sanitizes() {
        let vp = Viewport::new(-10.0, f64::NAN);
        assert_eq!(vp.width, 0.0);
        assert_eq!(vp.height, 0.0);
    }
}
