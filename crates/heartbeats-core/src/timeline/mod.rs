//! Scroll timeline for the HeartBeats landing page
//!
//! Turns one vertical scroll offset into clamped, eased progress for each
//! visual phase (hero fade, gallery scroll, expansion reveal).
//!
//! ## Atomic layer
//! - `easing` - Pure easing curves
//! - `timing` - Clamped progress and interpolation helpers
//! - `viewport` - Viewport dimensions
//! - `phase` - Phase ids, spans and resolved boundaries
//! - `smoothing` - Exponential and direct smoothing strategies
//! - `progress` - Per-phase progress and the ordering correction
//!
//! ## Molecular layer
//! - `controller` - `ScrollTimeline`, the per-frame controller
//!
//! # Usage
//!
//! ```ignore
//! use heartbeats_core::timeline::{DeviceProfile, ScrollTimeline, Viewport};
//! use heartbeats_core::TimelineConfig;
//!
//! let mut timeline = ScrollTimeline::new(
//!     &TimelineConfig::default(),
//!     DeviceProfile::Desktop,
//!     Viewport::new(1280.0, 800.0),
//!     0.0,
//! );
//!
//! // From the scroll listener
//! timeline.on_scroll(1080.0);
//!
//! // Once per display refresh
//! let frame = timeline.tick();
//! ```

// Atomic layer
pub mod easing;
pub mod phase;
pub mod progress;
pub mod smoothing;
pub mod timing;
pub mod viewport;

// Molecular layer
pub mod controller;

pub use controller::{ScrollTimeline, TimelineState};
pub use easing::EasingType;
pub use phase::{PhaseBoundary, PhaseId, PhaseLayout, PhaseSpan};
pub use progress::{FrameProgress, PhaseProgress};
pub use smoothing::{DeviceProfile, ScrollSmoother, SmoothingMode};
pub use viewport::Viewport;
