//! Pure mappings from phase progress to style values

use serde::{Deserialize, Serialize};

use crate::timeline::timing::{lerp, progress};
use crate::timeline::Viewport;

/// Hero progress after which the hero starts fading
pub const HERO_FADE_START: f64 = 0.7;
/// Opacity lost per unit of hero progress past the fade start
pub const HERO_FADE_RATE: f64 = 3.33;
/// Opacity at or below which an element is treated as hidden
pub const HIDDEN_OPACITY: f64 = 0.01;

pub const CARD_WIDTH_VMIN: f64 = 40.0;
pub const CARD_HEIGHT_VMIN: f64 = 56.0;
pub const CARD_GAP_VMIN: f64 = 4.0;

const STAGE_BASE_SCALE: f64 = 2.8;
const STAGE_SCALE_GAIN: f64 = 0.4;
const STAGE_BASE_ROTATION: f64 = 0.1;
const STAGE_ROTATION_GAIN: f64 = 0.5;

const PARALLAX_RATE: f64 = 0.4;
const PARALLAX_SCALE_GAIN: f64 = 0.15;
const PARALLAX_TILT_DEG: f64 = 5.0;
const PARALLAX_FADE_RATE: f64 = 1.5;
const PARALLAX_HIDE_AT: f64 = 0.8;
const PARALLAX_OVERLAY_BASE: f64 = 0.3;
const PARALLAX_OVERLAY_GAIN: f64 = 0.4;

/// Hero container state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeroStyle {
    pub opacity: f64,
    pub visible: bool,
    /// Whether the hero should receive pointer events
    pub interactive: bool,
}

/// Hero fade for the 3D stage variant
pub fn hero_style(hero_progress: f64) -> HeroStyle {
    let past_fade = (hero_progress - HERO_FADE_START).max(0.0);
    let opacity = (1.0 - past_fade * HERO_FADE_RATE).clamp(0.0, 1.0);
    let visible = opacity > HIDDEN_OPACITY;
    HeroStyle {
        opacity,
        visible,
        interactive: visible,
    }
}

/// Transform of the 3D drum kit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StagePose {
    pub scale: f64,
    /// Yaw in radians
    pub rotation_y: f64,
}

/// Raw stage progress: one viewport height of scroll
#[inline]
pub fn stage_progress(raw_offset: f64, viewport: &Viewport) -> f64 {
    progress(raw_offset, 0.0, viewport.height)
}

pub fn stage_pose(smoothed_stage_progress: f64) -> StagePose {
    let s = smoothed_stage_progress.clamp(0.0, 1.0);
    StagePose {
        scale: STAGE_BASE_SCALE + s * STAGE_SCALE_GAIN,
        rotation_y: STAGE_BASE_ROTATION + s * STAGE_ROTATION_GAIN,
    }
}

/// Hero image parallax for the lightweight variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallaxStyle {
    pub translate_y_px: f64,
    pub scale: f64,
    pub rotate_x_deg: f64,
    /// Alpha of the darkening overlay
    pub overlay_alpha: f64,
    pub hero: HeroStyle,
}

pub fn parallax_style(raw_offset: f64, viewport: &Viewport) -> ParallaxStyle {
    let p = stage_progress(raw_offset, viewport);
    let opacity = (1.0 - p * PARALLAX_FADE_RATE).max(0.0);
    let visible = p < PARALLAX_HIDE_AT;
    ParallaxStyle {
        translate_y_px: raw_offset.max(0.0) * PARALLAX_RATE,
        scale: 1.0 + p * PARALLAX_SCALE_GAIN,
        rotate_x_deg: p * PARALLAX_TILT_DEG,
        overlay_alpha: PARALLAX_OVERLAY_BASE + p * PARALLAX_OVERLAY_GAIN,
        hero: HeroStyle {
            opacity,
            visible,
            interactive: visible,
        },
    }
}

/// Gallery track translation and media framing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackStyle {
    /// Horizontal translation of the track in vmin (negative is left)
    pub translate_x_vmin: f64,
    /// Horizontal object-position of each card's media, in percent
    pub object_position_pct: f64,
}

impl TrackStyle {
    pub fn translate_x_px(&self, viewport: &Viewport) -> f64 {
        self.translate_x_vmin * viewport.vmin()
    }
}

/// Position the track so the point of interest sits at the viewport centre
///
/// At progress 0 the first card is centred, at 1 the last one.
pub fn track_style(gallery_progress: f64, item_count: usize) -> TrackStyle {
    let p = gallery_progress.clamp(0.0, 1.0);
    let travel = item_count.saturating_sub(1) as f64 * (CARD_WIDTH_VMIN + CARD_GAP_VMIN);
    TrackStyle {
        translate_x_vmin: -(CARD_WIDTH_VMIN / 2.0 + travel * p),
        object_position_pct: lerp(100.0, 0.0, p),
    }
}

/// Clip-path inset, one offset per edge in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClipInset {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ClipInset {
    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// CSS `clip-path` value
    pub fn css(&self) -> String {
        format!(
            "inset({:.2}px {:.2}px {:.2}px {:.2}px round 0px)",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Full-viewport overlay of the last gallery item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OverlayStyle {
    Hidden,
    Revealing { inset: ClipInset },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpansionStyle {
    pub overlay: OverlayStyle,
    /// Opacity of the last card on the track
    pub last_card_opacity: f64,
}

/// Grow the last card into the viewport by shrinking a clip inset
///
/// At progress just above 0 the inset frames exactly the centred card; at 1
/// the inset is zero.
pub fn expansion_style(expansion_progress: f64, viewport: &Viewport) -> ExpansionStyle {
    let p = expansion_progress.clamp(0.0, 1.0);
    if p <= 0.0 {
        return ExpansionStyle {
            overlay: OverlayStyle::Hidden,
            last_card_opacity: 1.0,
        };
    }

    let remaining = 1.0 - p;
    let vmin = viewport.vmin();
    let vertical = (viewport.height / 2.0 - CARD_HEIGHT_VMIN / 2.0 * vmin).max(0.0);
    let horizontal = (viewport.width / 2.0 - CARD_WIDTH_VMIN / 2.0 * vmin).max(0.0);

    ExpansionStyle {
        overlay: OverlayStyle::Revealing {
            inset: ClipInset::symmetric(vertical * remaining, horizontal * remaining),
        },
        last_card_opacity: 0.0,
    }
}
