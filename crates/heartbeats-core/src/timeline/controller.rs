//! Molecular layer: the scroll timeline controller
//!
//! Combines smoothing, phase boundaries and progress into one per-frame
//! `tick()`. Call `on_scroll()` from the host's scroll listener and `tick()`
//! once per display refresh (or per scroll event on the lightweight path).

use tracing::{debug, trace};

use super::phase::{PhaseBoundary, PhaseLayout};
use super::progress::{FrameProgress, PhaseProgress};
use super::smoothing::{DeviceProfile, ScrollSmoother};
use super::viewport::Viewport;
use crate::config::TimelineConfig;

/// Ephemeral per-page-view timeline state
#[derive(Debug, Clone)]
pub struct TimelineState {
    /// Latest observed scroll offset
    pub raw_offset: f64,
    /// Offset the phases were last mapped from
    pub smoothed_offset: f64,
    pub viewport: Viewport,
    /// Phase boundaries resolved for `viewport`
    pub boundaries: [PhaseBoundary; 3],
    pub progress: PhaseProgress,
}

/// Maps one scroll offset to per-phase progress, once per frame
#[derive(Debug, Clone)]
pub struct ScrollTimeline {
    layout: PhaseLayout,
    profile: DeviceProfile,
    smoother: ScrollSmoother,
    state: TimelineState,
    /// Viewport reported since the last tick
    pending_viewport: Option<Viewport>,
    /// A scroll arrived since the last tick
    armed: bool,
}

impl ScrollTimeline {
    /// Create a timeline settled at `initial_offset`
    pub fn new(
        config: &TimelineConfig,
        profile: DeviceProfile,
        viewport: Viewport,
        initial_offset: f64,
    ) -> Self {
        let initial_offset = if initial_offset.is_finite() {
            initial_offset
        } else {
            0.0
        };
        let smoother = match profile {
            DeviceProfile::Desktop => ScrollSmoother::exponential(
                config.smoothing_factor,
                config.settle_epsilon_px,
                initial_offset,
            ),
            DeviceProfile::Lightweight => ScrollSmoother::direct(initial_offset),
        };
        let boundaries = config.phases.resolve(viewport.height);
        let progress = PhaseProgress::compute(&boundaries, initial_offset);

        Self {
            layout: config.phases.clone(),
            profile,
            smoother,
            state: TimelineState {
                raw_offset: initial_offset,
                smoothed_offset: initial_offset,
                viewport,
                boundaries,
                progress,
            },
            pending_viewport: None,
            armed: false,
        }
    }

    /// Record the latest raw scroll offset
    ///
    /// Only stores the value; mapping happens on the next `tick()`.
    /// Non-finite offsets are dropped.
    #[inline]
    pub fn on_scroll(&mut self, raw_offset: f64) {
        if !raw_offset.is_finite() {
            trace!(raw_offset, "Ignoring non-finite scroll offset");
            return;
        }
        self.state.raw_offset = raw_offset;
        self.armed = true;
    }

    /// Record a viewport change; boundaries follow on the next `tick()`
    pub fn on_resize(&mut self, viewport: Viewport) {
        if viewport == self.state.viewport && self.pending_viewport.is_none() {
            return;
        }
        self.pending_viewport = Some(viewport);
    }

    /// Advance one frame and return the mapped progress
    pub fn tick(&mut self) -> FrameProgress {
        self.apply_pending_viewport();

        let smoothed = self.smoother.step(self.state.raw_offset);
        self.state.smoothed_offset = smoothed;
        self.state.progress = PhaseProgress::compute(&self.state.boundaries, smoothed);
        self.armed = false;

        self.frame()
    }

    /// Jump straight to `offset` without smoothing and recompute
    pub fn settle_at(&mut self, offset: f64) -> FrameProgress {
        if offset.is_finite() {
            self.state.raw_offset = offset;
        }
        self.smoother.reset(self.state.raw_offset);
        self.tick()
    }

    /// Result of the most recent computation
    pub fn frame(&self) -> FrameProgress {
        FrameProgress {
            raw_offset: self.state.raw_offset,
            smoothed_offset: self.state.smoothed_offset,
            viewport: self.state.viewport,
            phases: self.state.progress,
        }
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.state.smoothed_offset == self.state.raw_offset
    }

    /// True when a scroll was recorded since the last tick
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    #[inline]
    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    #[inline]
    pub fn profile(&self) -> DeviceProfile {
        self.profile
    }

    pub fn layout(&self) -> &PhaseLayout {
        &self.layout
    }

    /// Viewport the next tick will use
    pub fn viewport(&self) -> Viewport {
        self.pending_viewport.unwrap_or(self.state.viewport)
    }

    fn apply_pending_viewport(&mut self) {
        if let Some(viewport) = self.pending_viewport.take() {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "Viewport changed, recomputing phase boundaries"
            );
            self.state.viewport = viewport;
            self.state.boundaries = self.layout.resolve(viewport.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop(height: f64) -> ScrollTimeline {
        ScrollTimeline::new(
            &TimelineConfig::default(),
            DeviceProfile::Desktop,
            Viewport::new(1280.0, height),
            0.0,
        )
    }

    #[test]
    fn test_on_scroll_does_not_compute() {
        let mut timeline = desktop(800.0);
        timeline.on_scroll(1000.0);
        assert!(timeline.is_armed());
        assert_eq!(timeline.state().smoothed_offset, 0.0);
        assert_eq!(timeline.frame().phases, PhaseProgress::default());
    }

    #[test]
    fn test_tick_smooths_on_desktop() {
        let mut timeline = desktop(800.0);
        timeline.on_scroll(1000.0);
        let frame = timeline.tick();
        assert!((frame.smoothed_offset - 80.0).abs() < 1e-9);
        assert!(!timeline.is_armed());
        assert!(!timeline.is_settled());
    }

    #[test]
    fn test_lightweight_uses_raw_offset() {
        let mut timeline = ScrollTimeline::new(
            &TimelineConfig::default(),
            DeviceProfile::Lightweight,
            Viewport::new(390.0, 800.0),
            0.0,
        );
        timeline.on_scroll(1080.0);
        let frame = timeline.tick();
        assert_eq!(frame.smoothed_offset, 1080.0);
        assert!((frame.phases.gallery - 0.5).abs() < 1e-9);
        assert!(timeline.is_settled());
    }

    #[test]
    fn test_non_finite_scroll_is_ignored() {
        let mut timeline = desktop(800.0);
        timeline.on_scroll(300.0);
        timeline.on_scroll(f64::NAN);
        timeline.on_scroll(f64::INFINITY);
        assert_eq!(timeline.state().raw_offset, 300.0);
        let frame = timeline.tick();
        assert!(frame.smoothed_offset.is_finite());
    }

    #[test]
    fn test_resize_applies_on_next_tick() {
        let mut timeline = desktop(800.0);
        timeline.settle_at(1080.0);
        timeline.on_resize(Viewport::new(1280.0, 1000.0));
        assert!((timeline.state().boundaries[1].end_px - 1600.0).abs() < 1e-9);
        assert!((timeline.viewport().height - 1000.0).abs() < 1e-9);

        timeline.tick();
        assert!((timeline.state().boundaries[1].end_px - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_settle_at_skips_smoothing() {
        let mut timeline = desktop(800.0);
        let frame = timeline.settle_at(3000.0);
        assert_eq!(frame.smoothed_offset, 3000.0);
        assert!(timeline.is_settled());
        assert_eq!(frame.phases.expansion, 1.0);
    }
}
