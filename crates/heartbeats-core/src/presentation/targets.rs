//! Visual targets the page provides
//!
//! The timeline only assigns values; the host decides what a target is (a DOM
//! node, a scene-graph object, a terminal widget).

use super::style::{ClipInset, StagePose};

/// Fixed hero container
pub trait HeroTarget {
    fn set_opacity(&mut self, opacity: f64);
    fn set_visible(&mut self, visible: bool);
    fn set_interactive(&mut self, interactive: bool);
}

/// 3D drum kit group
pub trait StageTarget {
    fn set_pose(&mut self, pose: StagePose);
}

/// Hero image of the lightweight page
pub trait ParallaxTarget {
    fn set_image_transform(&mut self, translate_y_px: f64, scale: f64, rotate_x_deg: f64);
    fn set_overlay_alpha(&mut self, alpha: f64);
}

/// Horizontal gallery track
pub trait TrackTarget {
    fn set_translate_x(&mut self, vmin: f64);
    fn set_object_position(&mut self, percent: f64);
    fn set_last_card_opacity(&mut self, opacity: f64);
}

/// Full-viewport overlay used by the expansion reveal
pub trait OverlayTarget {
    fn reveal(&mut self, inset: ClipInset);
    fn hide(&mut self);
}

/// Targets mounted for the current frame
///
/// Any of them may be absent (not attached yet); absent targets are skipped
/// for the frame.
#[derive(Default)]
pub struct Targets<'a> {
    pub hero: Option<&'a mut dyn HeroTarget>,
    pub stage: Option<&'a mut dyn StageTarget>,
    pub parallax: Option<&'a mut dyn ParallaxTarget>,
    pub track: Option<&'a mut dyn TrackTarget>,
    pub overlay: Option<&'a mut dyn OverlayTarget>,
}

impl<'a> Targets<'a> {
    /// No targets mounted
    pub fn none() -> Self {
        Self::default()
    }
}
