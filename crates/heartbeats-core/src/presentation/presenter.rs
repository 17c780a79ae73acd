use serde::{Deserialize, Serialize};
use tracing::trace;

use super::style::{
    expansion_style, hero_style, parallax_style, stage_pose, stage_progress, track_style,
    ExpansionStyle, HeroStyle, OverlayStyle, ParallaxStyle, StagePose, TrackStyle,
};
use super::targets::Targets;
use crate::timeline::{DeviceProfile, FrameProgress, ScrollSmoother};

/// Stage rig snaps once this close to its target progress
const STAGE_SETTLE_EPSILON: f64 = 1e-4;

/// Every style value derived from one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageStyle {
    pub hero: HeroStyle,
    /// Desktop page views only
    pub stage: Option<StagePose>,
    /// Lightweight page views only
    pub parallax: Option<ParallaxStyle>,
    pub track: TrackStyle,
    pub expansion: ExpansionStyle,
}

/// Turns frame progress into style values and pushes them to targets
#[derive(Debug, Clone)]
pub struct Presenter {
    profile: DeviceProfile,
    item_count: usize,
    /// The drum kit eases toward its scroll pose on its own
    stage: ScrollSmoother,
}

impl Presenter {
    pub fn new(
        profile: DeviceProfile,
        item_count: usize,
        stage_smoothing_factor: f64,
        initial: &FrameProgress,
    ) -> Self {
        let start = stage_progress(initial.raw_offset, &initial.viewport);
        Self {
            profile,
            item_count,
            stage: ScrollSmoother::exponential(stage_smoothing_factor, STAGE_SETTLE_EPSILON, start),
        }
    }

    /// Derive styles for a frame, advancing the stage rig one step
    pub fn compute(&mut self, frame: &FrameProgress) -> PageStyle {
        let (hero, stage, parallax) = match self.profile {
            DeviceProfile::Desktop => {
                let target = stage_progress(frame.raw_offset, &frame.viewport);
                let pose = stage_pose(self.stage.step(target));
                (hero_style(frame.phases.hero), Some(pose), None)
            }
            DeviceProfile::Lightweight => {
                let parallax = parallax_style(frame.raw_offset, &frame.viewport);
                (parallax.hero, None, Some(parallax))
            }
        };

        PageStyle {
            hero,
            stage,
            parallax,
            track: track_style(frame.phases.gallery, self.item_count),
            expansion: expansion_style(frame.phases.expansion, &frame.viewport),
        }
    }

    /// Compute and apply in one step
    pub fn apply(&mut self, frame: &FrameProgress, targets: &mut Targets<'_>) -> PageStyle {
        let style = self.compute(frame);
        apply_style(&style, targets);
        style
    }

    /// True while the stage rig is still easing toward its pose
    pub fn is_animating(&self, frame: &FrameProgress) -> bool {
        self.profile == DeviceProfile::Desktop
            && self.stage.value() != stage_progress(frame.raw_offset, &frame.viewport)
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }
}

/// Assign style values to every mounted target: hero, stage, gallery, expansion
pub fn apply_style(style: &PageStyle, targets: &mut Targets<'_>) {
    match targets.hero.as_mut() {
        Some(hero) => {
            hero.set_opacity(style.hero.opacity);
            hero.set_visible(style.hero.visible);
            hero.set_interactive(style.hero.interactive);
        }
        None => trace!(target_name = "hero", "Visual target missing, skipping"),
    }

    if let Some(pose) = style.stage {
        match targets.stage.as_mut() {
            Some(stage) => stage.set_pose(pose),
            None => trace!(target_name = "stage", "Visual target missing, skipping"),
        }
    }

    if let Some(parallax) = style.parallax {
        match targets.parallax.as_mut() {
            Some(target) => {
                target.set_image_transform(
                    parallax.translate_y_px,
                    parallax.scale,
                    parallax.rotate_x_deg,
                );
                target.set_overlay_alpha(parallax.overlay_alpha);
            }
            None => trace!(target_name = "parallax", "Visual target missing, skipping"),
        }
    }

    match targets.track.as_mut() {
        Some(track) => {
            track.set_translate_x(style.track.translate_x_vmin);
            track.set_object_position(style.track.object_position_pct);
            track.set_last_card_opacity(style.expansion.last_card_opacity);
        }
        None => trace!(target_name = "track", "Visual target missing, skipping"),
    }

    match targets.overlay.as_mut() {
        Some(overlay) => match style.expansion.overlay {
            OverlayStyle::Hidden => overlay.hide(),
            OverlayStyle::Revealing { inset } => overlay.reveal(inset),
        },
        None => trace!(target_name = "overlay", "Visual target missing, skipping"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{ClipInset, HeroTarget, OverlayTarget, TrackTarget};
    use crate::timeline::{PhaseProgress, Viewport};

    #[derive(Default)]
    struct Recorder {
        opacity: Option<f64>,
        visible: Option<bool>,
        translate: Option<f64>,
        last_card: Option<f64>,
        revealed: Option<ClipInset>,
        hidden: bool,
    }

    impl HeroTarget for Recorder {
        fn set_opacity(&mut self, opacity: f64) {
            self.opacity = Some(opacity);
        }
        fn set_visible(&mut self, visible: bool) {
            self.visible = Some(visible);
        }
        fn set_interactive(&mut self, _interactive: bool) {}
    }

    impl TrackTarget for Recorder {
        fn set_translate_x(&mut self, vmin: f64) {
            self.translate = Some(vmin);
        }
        fn set_object_position(&mut self, _percent: f64) {}
        fn set_last_card_opacity(&mut self, opacity: f64) {
            self.last_card = Some(opacity);
        }
    }

    impl OverlayTarget for Recorder {
        fn reveal(&mut self, inset: ClipInset) {
            self.revealed = Some(inset);
            self.hidden = false;
        }
        fn hide(&mut self) {
            self.revealed = None;
            self.hidden = true;
        }
    }

    fn frame(raw: f64, phases: PhaseProgress) -> FrameProgress {
        FrameProgress {
            raw_offset: raw,
            smoothed_offset: raw,
            viewport: Viewport::new(1280.0, 800.0),
            phases,
        }
    }

    #[test]
    fn test_missing_targets_are_skipped() {
        let start = frame(0.0, PhaseProgress::default());
        let mut presenter = Presenter::new(DeviceProfile::Desktop, 8, 0.1, &start);
        let style = presenter.apply(&start, &mut Targets::none());
        assert_eq!(style.hero.opacity, 1.0);
    }

    #[test]
    fn test_apply_reaches_mounted_targets() {
        let start = frame(0.0, PhaseProgress::default());
        let mut presenter = Presenter::new(DeviceProfile::Desktop, 8, 0.1, &start);

        let mut hero = Recorder::default();
        let mut track = Recorder::default();
        let mut overlay = Recorder::default();
        let now = frame(
            2200.0,
            PhaseProgress {
                hero: 1.0,
                gallery: 1.0,
                expansion: 0.5,
            },
        );
        {
            let mut targets = Targets {
                hero: Some(&mut hero),
                track: Some(&mut track),
                overlay: Some(&mut overlay),
                ..Targets::none()
            };
            presenter.apply(&now, &mut targets);
        }

        assert_eq!(hero.visible, Some(false));
        assert!((track.translate.unwrap() + 328.0).abs() < 1e-9);
        assert_eq!(track.last_card, Some(0.0));
        assert!(overlay.revealed.is_some());
        assert!(!overlay.hidden);
    }

    #[test]
    fn test_stage_rig_eases_toward_pose() {
        let start = frame(0.0, PhaseProgress::default());
        let mut presenter = Presenter::new(DeviceProfile::Desktop, 8, 0.1, &start);
        let scrolled = frame(800.0, PhaseProgress::default());

        let first = presenter.compute(&scrolled).stage.unwrap();
        assert!((first.scale - (2.8 + 0.1 * 0.4)).abs() < 1e-9);
        assert!(presenter.is_animating(&scrolled));

        for _ in 0..500 {
            presenter.compute(&scrolled);
        }
        let settled = presenter.compute(&scrolled).stage.unwrap();
        assert!((settled.scale - 3.2).abs() < 1e-9);
        assert!(!presenter.is_animating(&scrolled));
    }

    #[test]
    fn test_lightweight_uses_parallax_hero() {
        let start = frame(400.0, PhaseProgress::default());
        let mut presenter = Presenter::new(DeviceProfile::Lightweight, 8, 0.1, &start);
        let style = presenter.compute(&start);
        assert!(style.stage.is_none());
        let parallax = style.parallax.unwrap();
        assert_eq!(style.hero, parallax.hero);
        assert!((style.hero.opacity - 0.25).abs() < 1e-9);
    }
}
