//! Atomic layer: named phases and their boundaries along the scroll axis
//!
//! Spans are configured in multiples of viewport height and resolved to
//! pixels whenever the viewport height changes.

use serde::{Deserialize, Serialize};

use super::easing::EasingType;
use super::timing;
use crate::{Error, Result};

/// Visual phases in their fixed application order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseId {
    Hero,
    Gallery,
    Expansion,
}

impl PhaseId {
    /// Upstream first
    pub const ALL: [PhaseId; 3] = [PhaseId::Hero, PhaseId::Gallery, PhaseId::Expansion];

    pub fn name(&self) -> &'static str {
        match self {
            PhaseId::Hero => "hero",
            PhaseId::Gallery => "gallery",
            PhaseId::Expansion => "expansion",
        }
    }
}

impl std::fmt::Display for PhaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A phase's extent in multiples of viewport height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseSpan {
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub easing: EasingType,
}

impl PhaseSpan {
    pub const fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            easing: EasingType::Linear,
        }
    }

    pub fn with_easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }

    /// Check that the span is finite, non-negative and not reversed
    pub fn validate(&self, name: &str) -> Result<()> {
        let ok = self.start.is_finite()
            && self.end.is_finite()
            && self.start >= 0.0
            && self.start <= self.end;
        if ok {
            Ok(())
        } else {
            Err(Error::InvalidPhase {
                name: name.to_string(),
                start: self.start,
                end: self.end,
            })
        }
    }

    /// Resolve to pixel offsets for a viewport height
    pub fn resolve(&self, id: PhaseId, viewport_height: f64) -> PhaseBoundary {
        PhaseBoundary {
            id,
            start_px: self.start * viewport_height,
            end_px: self.end * viewport_height,
            easing: self.easing,
        }
    }
}

/// A phase resolved to pixel offsets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseBoundary {
    pub id: PhaseId,
    pub start_px: f64,
    pub end_px: f64,
    pub easing: EasingType,
}

impl PhaseBoundary {
    /// Clamped, eased progress of `offset` through this phase
    #[inline]
    pub fn progress(&self, offset: f64) -> f64 {
        self.easing
            .apply(timing::progress(offset, self.start_px, self.end_px))
    }
}

/// Ordered phase spans for one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseLayout {
    #[serde(default = "default_hero")]
    pub hero: PhaseSpan,
    #[serde(default = "default_gallery")]
    pub gallery: PhaseSpan,
    #[serde(default = "default_expansion")]
    pub expansion: PhaseSpan,
}

impl Default for PhaseLayout {
    fn default() -> Self {
        Self {
            hero: default_hero(),
            gallery: default_gallery(),
            expansion: default_expansion(),
        }
    }
}

fn default_hero() -> PhaseSpan {
    PhaseSpan::new(0.0, 0.7)
}

fn default_gallery() -> PhaseSpan {
    PhaseSpan::new(0.7, 2.0)
}

fn default_expansion() -> PhaseSpan {
    PhaseSpan::new(2.0, 2.5)
}

impl PhaseLayout {
    pub fn span(&self, id: PhaseId) -> &PhaseSpan {
        match id {
            PhaseId::Hero => &self.hero,
            PhaseId::Gallery => &self.gallery,
            PhaseId::Expansion => &self.expansion,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for id in PhaseId::ALL {
            self.span(id).validate(id.name())?;
        }
        Ok(())
    }

    /// Resolve every phase for a viewport height, upstream first
    pub fn resolve(&self, viewport_height: f64) -> [PhaseBoundary; 3] {
        PhaseId::ALL.map(|id| self.span(id).resolve(id, viewport_height))
    }

    /// Furthest phase end, in viewport heights
    pub fn total_extent(&self) -> f64 {
        PhaseId::ALL
            .iter()
            .map(|id| self.span(*id).end)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_resolves_at_800() {
        let [hero, gallery, expansion] = PhaseLayout::default().resolve(800.0);
        assert_eq!(hero.id, PhaseId::Hero);
        assert!((hero.end_px - 560.0).abs() < 1e-9);
        assert!((gallery.start_px - 560.0).abs() < 1e-9);
        assert!((gallery.end_px - 1600.0).abs() < 1e-9);
        assert!((expansion.start_px - 1600.0).abs() < 1e-9);
        assert!((expansion.end_px - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_progress_is_eased() {
        let boundary = PhaseSpan::new(0.0, 1.0)
            .with_easing(EasingType::Cubic)
            .resolve(PhaseId::Hero, 100.0);
        assert!((boundary.progress(50.0) - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_reversed_and_negative() {
        assert!(PhaseSpan::new(2.0, 1.0).validate("gallery").is_err());
        assert!(PhaseSpan::new(-0.5, 1.0).validate("hero").is_err());
        assert!(PhaseSpan::new(0.0, f64::INFINITY).validate("hero").is_err());
        assert!(PhaseSpan::new(1.0, 1.0).validate("hold").is_ok());
    }

    #[test]
    fn test_total_extent() {
        assert!((PhaseLayout::default().total_extent() - 2.5).abs() < 1e-9);
    }
}
