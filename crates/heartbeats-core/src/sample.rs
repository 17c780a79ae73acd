//! Settled timeline samples for inspecting a phase layout offline

use serde::Serialize;

use crate::config::TimelineConfig;
use crate::presentation::{PageStyle, Presenter, Targets};
use crate::timeline::{DeviceProfile, PhaseProgress, ScrollTimeline, Viewport};

/// Progress and styles once the page has come to rest at `offset`
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub offset: f64,
    pub phases: PhaseProgress,
    pub style: PageStyle,
}

/// Most offsets one sampling run produces
pub const MAX_SAMPLES: usize = 100_000;

/// Number of offsets from `from` to `to` inclusive, `step` apart
///
/// Saturates instead of overflowing for ranges no run could hold.
pub fn offset_count(from: f64, to: f64, step: f64) -> usize {
    if !(step > 0.0) || !from.is_finite() || !to.is_finite() || to < from {
        return 1;
    }
    (((to - from) / step).floor() as usize).saturating_add(1)
}

/// Offsets from `from` to `to` inclusive, `step` apart, at most `MAX_SAMPLES`
pub fn offsets(from: f64, to: f64, step: f64) -> Vec<f64> {
    let count = offset_count(from, to, step).min(MAX_SAMPLES);
    if count == 1 {
        return vec![from];
    }
    (0..count).map(|i| from + i as f64 * step).collect()
}

/// Sample the settled timeline at every offset
pub fn sample(
    config: &TimelineConfig,
    profile: DeviceProfile,
    item_count: usize,
    viewport: Viewport,
    offsets: &[f64],
) -> Vec<Sample> {
    let mut timeline = ScrollTimeline::new(config, profile, viewport, 0.0);
    offsets
        .iter()
        .map(|&offset| {
            let frame = timeline.settle_at(offset);
            let mut presenter =
                Presenter::new(profile, item_count, config.stage_smoothing_factor, &frame);
            Sample {
                offset: frame.raw_offset,
                phases: frame.phases,
                style: presenter.apply(&frame, &mut Targets::none()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_inclusive() {
        assert_eq!(offsets(0.0, 300.0, 100.0), vec![0.0, 100.0, 200.0, 300.0]);
        assert_eq!(offsets(0.0, 250.0, 100.0), vec![0.0, 100.0, 200.0]);
    }

    #[test]
    fn test_offsets_degenerate() {
        assert_eq!(offsets(50.0, 0.0, 10.0), vec![50.0]);
        assert_eq!(offsets(0.0, 100.0, 0.0), vec![0.0]);
    }

    #[test]
    fn test_offsets_are_capped() {
        assert!(offset_count(0.0, 1e15, 1e-3) > MAX_SAMPLES);
        assert_eq!(offset_count(-f64::MAX, f64::MAX, 1.0), usize::MAX);
        let capped = offsets(0.0, 1e15, 1e-3);
        assert_eq!(capped.len(), MAX_SAMPLES);
        assert_eq!(capped[0], 0.0);
    }

    #[test]
    fn test_sample_is_settled() {
        let samples = sample(
            &TimelineConfig::default(),
            DeviceProfile::Desktop,
            8,
            Viewport::new(1280.0, 800.0),
            &[0.0, 1080.0, 5000.0],
        );
        assert_eq!(samples.len(), 3);
        assert!((samples[1].phases.gallery - 0.5).abs() < 1e-9);
        assert_eq!(samples[2].phases.expansion, 1.0);
        let stage = samples[2].style.stage.unwrap();
        assert!((stage.scale - 3.2).abs() < 1e-9);
    }
}
