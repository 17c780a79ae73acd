//! Applies timeline progress to the page's visual targets
//!
//! `style` holds the pure progress-to-style mappings, `targets` the traits a
//! host implements, and `presenter` ties them together in the fixed order
//! hero → stage → gallery → expansion. Values are assigned directly every
//! frame; the timeline's smoothing already supplies the inertia.

pub mod presenter;
pub mod style;
pub mod targets;

pub use presenter::{apply_style, PageStyle, Presenter};
pub use style::{
    ClipInset, ExpansionStyle, HeroStyle, OverlayStyle, ParallaxStyle, StagePose, TrackStyle,
};
pub use targets::{
    HeroTarget, OverlayTarget, ParallaxTarget, StageTarget, Targets, TrackTarget,
};
