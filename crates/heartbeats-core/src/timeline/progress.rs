//! Atomic layer: per-phase progress values and the ordering correction

use serde::{Deserialize, Serialize};

use super::phase::{PhaseBoundary, PhaseId};
use super::viewport::Viewport;

/// Progress of every phase, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseProgress {
    pub hero: f64,
    pub gallery: f64,
    pub expansion: f64,
}

impl PhaseProgress {
    /// Map `offset` through every boundary, then apply the ordering correction
    pub fn compute(boundaries: &[PhaseBoundary; 3], offset: f64) -> Self {
        let mut progress = Self::default();
        for boundary in boundaries {
            *progress.slot(boundary.id) = boundary.progress(offset);
        }
        progress.enforce_ordering();
        progress
    }

    pub fn get(&self, id: PhaseId) -> f64 {
        match id {
            PhaseId::Hero => self.hero,
            PhaseId::Gallery => self.gallery,
            PhaseId::Expansion => self.expansion,
        }
    }

    fn slot(&mut self, id: PhaseId) -> &mut f64 {
        match id {
            PhaseId::Hero => &mut self.hero,
            PhaseId::Gallery => &mut self.gallery,
            PhaseId::Expansion => &mut self.expansion,
        }
    }

    /// Pin every phase upstream of an active one at 1
    fn enforce_ordering(&mut self) {
        let mut downstream_active = false;
        for id in PhaseId::ALL.iter().rev() {
            let value = self.slot(*id);
            if downstream_active {
                *value = 1.0;
            }
            if *value > 0.0 {
                downstream_active = true;
            }
        }
    }
}

/// Everything one `tick()` computed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameProgress {
    pub raw_offset: f64,
    pub smoothed_offset: f64,
    pub viewport: Viewport,
    pub phases: PhaseProgress,
}
