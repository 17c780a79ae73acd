//! Page-view lifecycle
//!
//! A `PageView` owns the timeline state of one mounted page. It is created on
//! mount, fed host events while mounted, and consumed on unmount. Which
//! driver runs is fixed at mount time, so the per-frame loop and the
//! per-scroll path are never both active for one page view.

use tracing::debug;

use crate::config::TimelineConfig;
use crate::presentation::{PageStyle, Presenter, Targets};
use crate::timeline::{DeviceProfile, FrameProgress, ScrollTimeline, Viewport};

/// Input from the host environment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Scroll listener fired with the page's scroll offset
    Scroll(f64),
    /// Viewport size changed (resize, rotation)
    Resize(Viewport),
    /// Display refresh; the previous computation has been presented
    Frame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Driver {
    /// Scroll only records; every frame computes
    PerFrame,
    /// Scroll computes immediately unless the last result is still unpresented
    OnScroll { awaiting_present: bool, stale: bool },
}

/// One mounted page and its timeline
#[derive(Debug)]
pub struct PageView {
    timeline: ScrollTimeline,
    presenter: Presenter,
    driver: Driver,
    style: PageStyle,
    max_scroll_vh: f64,
}

impl PageView {
    /// Mount with the profile chosen by `config.mode` for this viewport
    pub fn mount(
        config: &TimelineConfig,
        item_count: usize,
        viewport: Viewport,
        initial_offset: f64,
        targets: &mut Targets<'_>,
    ) -> Self {
        let profile = config
            .mode
            .resolve(&viewport, config.lightweight_breakpoint_px);
        Self::mount_with_profile(config, profile, item_count, viewport, initial_offset, targets)
    }

    /// Mount with an explicit profile
    ///
    /// The initial offset is applied to the targets immediately, without
    /// smoothing.
    pub fn mount_with_profile(
        config: &TimelineConfig,
        profile: DeviceProfile,
        item_count: usize,
        viewport: Viewport,
        initial_offset: f64,
        targets: &mut Targets<'_>,
    ) -> Self {
        let timeline = ScrollTimeline::new(config, profile, viewport, initial_offset);
        let frame = timeline.frame();
        let mut presenter =
            Presenter::new(profile, item_count, config.stage_smoothing_factor, &frame);
        let style = presenter.apply(&frame, targets);

        let driver = match profile {
            DeviceProfile::Desktop => Driver::PerFrame,
            DeviceProfile::Lightweight => Driver::OnScroll {
                awaiting_present: true,
                stale: false,
            },
        };

        debug!(
            profile = profile.label(),
            width = viewport.width,
            height = viewport.height,
            offset = frame.raw_offset,
            "Page view mounted"
        );

        Self {
            timeline,
            presenter,
            driver,
            style,
            max_scroll_vh: (config.page_height_vh - 1.0).max(0.0),
        }
    }

    /// Feed one host event
    ///
    /// Returns the applied styles when the event triggered a computation.
    pub fn handle(&mut self, event: HostEvent, targets: &mut Targets<'_>) -> Option<PageStyle> {
        match (event, self.driver) {
            (HostEvent::Scroll(offset), Driver::PerFrame) => {
                self.timeline.on_scroll(offset);
                None
            }
            (HostEvent::Resize(viewport), Driver::PerFrame) => {
                self.timeline.on_resize(viewport);
                None
            }
            (HostEvent::Frame, Driver::PerFrame) => Some(self.compute(targets)),

            (HostEvent::Scroll(offset), Driver::OnScroll { awaiting_present, .. }) => {
                self.timeline.on_scroll(offset);
                if awaiting_present {
                    self.driver = Driver::OnScroll {
                        awaiting_present,
                        stale: true,
                    };
                    return None;
                }
                self.driver = Driver::OnScroll {
                    awaiting_present: true,
                    stale: false,
                };
                Some(self.compute(targets))
            }
            (HostEvent::Resize(viewport), Driver::OnScroll { awaiting_present, .. }) => {
                self.timeline.on_resize(viewport);
                self.driver = Driver::OnScroll {
                    awaiting_present,
                    stale: true,
                };
                None
            }
            (HostEvent::Frame, Driver::OnScroll { stale, .. }) => {
                self.driver = Driver::OnScroll {
                    awaiting_present: stale,
                    stale: false,
                };
                if stale {
                    Some(self.compute(targets))
                } else {
                    None
                }
            }
        }
    }

    fn compute(&mut self, targets: &mut Targets<'_>) -> PageStyle {
        let frame = self.timeline.tick();
        self.style = self.presenter.apply(&frame, targets);
        self.style
    }

    /// Tear down the page view
    pub fn unmount(self) -> FrameProgress {
        let frame = self.timeline.frame();
        debug!(
            profile = self.timeline.profile().label(),
            offset = frame.raw_offset,
            "Page view unmounted"
        );
        frame
    }

    pub fn profile(&self) -> DeviceProfile {
        self.timeline.profile()
    }

    pub fn frame(&self) -> FrameProgress {
        self.timeline.frame()
    }

    /// Styles applied by the latest computation
    pub fn style(&self) -> &PageStyle {
        &self.style
    }

    pub fn timeline(&self) -> &ScrollTimeline {
        &self.timeline
    }

    /// Largest scroll offset for the current viewport
    pub fn max_scroll(&self) -> f64 {
        self.max_scroll_vh * self.timeline.viewport().height
    }

    /// True while another frame would still change what is on screen
    pub fn is_animating(&self) -> bool {
        let frame = self.timeline.frame();
        !self.timeline.is_settled()
            || self.timeline.is_armed()
            || self.presenter.is_animating(&frame)
    }
}
