use std::mem;

use heartbeats_core::config::UiConfig;
use heartbeats_core::presentation::{
    ClipInset, HeroTarget, OverlayTarget, ParallaxTarget, StagePose, StageTarget, Targets,
    TrackTarget,
};
use heartbeats_core::timeline::{DeviceProfile, FrameProgress, SmoothingMode, Viewport};
use heartbeats_core::{AppConfig, HostEvent, MediaItem, PageView};
use tracing::{debug, info};

use crate::input::Action;
use crate::theme::Theme;

/// Rows reserved below the page for the status bar
pub const STATUS_BAR_ROWS: u16 = 1;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Help,
}

/// Hero container as last assigned by the timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroView {
    pub opacity: f64,
    pub visible: bool,
    pub interactive: bool,
}

impl Default for HeroView {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            visible: true,
            interactive: true,
        }
    }
}

impl HeroTarget for HeroView {
    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StageView {
    pub pose: Option<StagePose>,
}

impl StageTarget for StageView {
    fn set_pose(&mut self, pose: StagePose) {
        self.pose = Some(pose);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxView {
    pub translate_y_px: f64,
    pub scale: f64,
    pub rotate_x_deg: f64,
    pub overlay_alpha: f64,
}

impl Default for ParallaxView {
    fn default() -> Self {
        Self {
            translate_y_px: 0.0,
            scale: 1.0,
            rotate_x_deg: 0.0,
            overlay_alpha: 0.0,
        }
    }
}

impl ParallaxTarget for ParallaxView {
    fn set_image_transform(&mut self, translate_y_px: f64, scale: f64, rotate_x_deg: f64) {
        self.translate_y_px = translate_y_px;
        self.scale = scale;
        self.rotate_x_deg = rotate_x_deg;
    }

    fn set_overlay_alpha(&mut self, alpha: f64) {
        self.overlay_alpha = alpha;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackView {
    pub translate_x_vmin: f64,
    pub object_position_pct: f64,
    pub last_card_opacity: f64,
}

impl Default for TrackView {
    fn default() -> Self {
        Self {
            translate_x_vmin: 0.0,
            object_position_pct: 100.0,
            last_card_opacity: 1.0,
        }
    }
}

impl TrackTarget for TrackView {
    fn set_translate_x(&mut self, vmin: f64) {
        self.translate_x_vmin = vmin;
    }

    fn set_object_position(&mut self, percent: f64) {
        self.object_position_pct = percent;
    }

    fn set_last_card_opacity(&mut self, opacity: f64) {
        self.last_card_opacity = opacity;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OverlayView {
    /// Clip inset while revealing, `None` while hidden
    pub inset: Option<ClipInset>,
}

impl OverlayTarget for OverlayView {
    fn reveal(&mut self, inset: ClipInset) {
        self.inset = Some(inset);
    }

    fn hide(&mut self) {
        self.inset = None;
    }
}

/// Terminal stand-ins for the page's visual targets
///
/// Widgets draw from these, so the screen shows exactly what the timeline
/// assigned.
#[derive(Debug, Clone, Default)]
pub struct SceneView {
    pub hero: HeroView,
    pub stage: StageView,
    pub parallax: ParallaxView,
    pub track: TrackView,
    pub overlay: OverlayView,
}

impl SceneView {
    pub fn targets(&mut self) -> Targets<'_> {
        Targets {
            hero: Some(&mut self.hero),
            stage: Some(&mut self.stage),
            parallax: Some(&mut self.parallax),
            track: Some(&mut self.track),
            overlay: Some(&mut self.overlay),
        }
    }
}

/// Main application state
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub mode: Mode,
    /// Pending key for multi-key sequences (e.g., 'g' for 'gg')
    pub pending_key: Option<char>,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub scene: SceneView,
    page: PageView,
    /// Host scroll position in pixels
    scroll_px: f64,
    /// Something on screen changed since the last draw
    dirty: bool,
}

impl App {
    /// Mount the page for a terminal of `size` (columns, rows)
    ///
    /// `mode` overrides the configured smoothing mode.
    pub fn new(mut config: AppConfig, mode: Option<SmoothingMode>, size: (u16, u16)) -> Self {
        if let Some(mode) = mode {
            config.timeline.mode = mode;
        }

        let viewport = viewport_for(&config.ui, size.0, size.1);
        let mut scene = SceneView::default();
        let page = PageView::mount(
            &config.timeline,
            config.gallery.items.len(),
            viewport,
            0.0,
            &mut scene.targets(),
        );
        info!(
            profile = page.profile().label(),
            width = viewport.width,
            height = viewport.height,
            "Preview started"
        );

        Self {
            config,
            theme: Theme::default(),
            mode: Mode::Normal,
            pending_key: None,
            status_message: None,
            should_quit: false,
            scene,
            page,
            scroll_px: 0.0,
            dirty: true,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        let line = self.config.ui.scroll_line_px as f64;
        let height = self.page.timeline().viewport().height;

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroll_by(line),
            Action::ScrollUp => self.scroll_by(-line),
            Action::ScrollHalfPageDown => self.scroll_by(height / 2.0),
            Action::ScrollHalfPageUp => self.scroll_by(-height / 2.0),
            Action::ScrollPageDown => self.scroll_by(height),
            Action::ScrollPageUp => self.scroll_by(-height),
            Action::JumpToTop => self.scroll_to(0.0),
            Action::JumpToBottom => self.scroll_to(self.page.max_scroll()),
            Action::PendingG => {
                self.pending_key = Some('g');
                return;
            }
            Action::ToggleMode => self.toggle_mode(),
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    Mode::Help => Mode::Normal,
                    Mode::Normal => Mode::Help,
                };
                self.dirty = true;
            }
            Action::ExitMode => {
                self.mode = Mode::Normal;
                self.status_message = None;
                self.dirty = true;
            }
            Action::None => {}
        }
        self.pending_key = None;
    }

    /// Mouse wheel notches, positive is down
    pub fn scroll_lines(&mut self, lines: i32) {
        self.scroll_by(lines as f64 * self.config.ui.scroll_line_px as f64);
    }

    pub fn scroll_by(&mut self, delta_px: f64) {
        self.scroll_to(self.scroll_px + delta_px);
    }

    /// Move the host scroll position, clamped to the page
    pub fn scroll_to(&mut self, offset_px: f64) {
        let offset = offset_px.clamp(0.0, self.page.max_scroll());
        if offset == self.scroll_px {
            return;
        }
        self.scroll_px = offset;
        self.status_message = None;
        self.dirty = true;
        self.send(HostEvent::Scroll(offset));
    }

    /// Terminal resized to `cols` x `rows`
    pub fn resize(&mut self, cols: u16, rows: u16) {
        let viewport = viewport_for(&self.config.ui, cols, rows);
        debug!(cols, rows, width = viewport.width, height = viewport.height, "Terminal resized");
        self.send(HostEvent::Resize(viewport));
        self.dirty = true;

        // The page got shorter; keep the scroll position on it
        let max = self.page.max_scroll();
        if self.scroll_px > max {
            self.scroll_to(max);
        }
    }

    /// Display refresh
    pub fn on_frame(&mut self) {
        self.send(HostEvent::Frame);
    }

    /// Remount the page view with the other driver at the current offset
    pub fn toggle_mode(&mut self) {
        let profile = self.page.profile().toggled();
        let viewport = self.page.timeline().viewport();

        let mut scene = SceneView::default();
        let page = PageView::mount_with_profile(
            &self.config.timeline,
            profile,
            self.config.gallery.items.len(),
            viewport,
            self.scroll_px,
            &mut scene.targets(),
        );
        mem::replace(&mut self.page, page).unmount();
        self.scene = scene;

        self.status_message = Some(format!("Switched to {} driver", profile.label()));
        self.dirty = true;
    }

    fn send(&mut self, event: HostEvent) {
        let before = *self.page.style();
        let mut targets = self.scene.targets();
        if let Some(style) = self.page.handle(event, &mut targets) {
            if style != before {
                self.dirty = true;
            }
        }
    }

    /// Tear down the page view, returning its last computed frame
    pub fn unmount(self) -> FrameProgress {
        self.page.unmount()
    }

    /// True once per change; the caller redraws when it returns true
    pub fn take_redraw(&mut self) -> bool {
        mem::take(&mut self.dirty)
    }

    pub fn page(&self) -> &PageView {
        &self.page
    }

    pub fn frame(&self) -> FrameProgress {
        self.page.frame()
    }

    pub fn profile(&self) -> DeviceProfile {
        self.page.profile()
    }

    pub fn scroll_px(&self) -> f64 {
        self.scroll_px
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.config.gallery.items
    }

    /// Pixel size of one terminal cell
    pub fn cell_size(&self) -> (f64, f64) {
        cell_size(&self.config.ui)
    }
}

fn cell_size(ui: &UiConfig) -> (f64, f64) {
    (ui.cell_width_px as f64, ui.cell_height_px as f64)
}

/// Page viewport in pixels for a terminal of `cols` x `rows`
pub fn viewport_for(ui: &UiConfig, cols: u16, rows: u16) -> Viewport {
    let (cell_w, cell_h) = cell_size(ui);
    Viewport::new(
        cols as f64 * cell_w,
        rows.saturating_sub(STATUS_BAR_ROWS) as f64 * cell_h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(size: (u16, u16)) -> App {
        App::new(AppConfig::default(), None, size)
    }

    fn settle(app: &mut App) {
        for _ in 0..2000 {
            app.on_frame();
        }
    }

    #[test]
    fn test_viewport_from_terminal_size() {
        let viewport = viewport_for(&UiConfig::default(), 160, 51);
        assert_eq!(viewport, Viewport::new(1280.0, 800.0));
        assert_eq!(viewport_for(&UiConfig::default(), 10, 0).height, 0.0);
    }

    #[test]
    fn test_auto_mode_follows_terminal_width() {
        assert_eq!(app((160, 51)).profile(), DeviceProfile::Desktop);
        assert_eq!(app((48, 51)).profile(), DeviceProfile::Lightweight);
        let forced = App::new(AppConfig::default(), Some(SmoothingMode::Desktop), (48, 51));
        assert_eq!(forced.profile(), DeviceProfile::Desktop);
    }

    #[test]
    fn test_scroll_is_clamped_to_page() {
        let mut app = app((160, 51));
        app.handle_action(Action::ScrollUp);
        assert_eq!(app.scroll_px(), 0.0);
        app.handle_action(Action::JumpToBottom);
        assert!((app.scroll_px() - 3600.0).abs() < 1e-9);
        app.handle_action(Action::ScrollPageDown);
        assert!((app.scroll_px() - 3600.0).abs() < 1e-9);
        app.handle_action(Action::JumpToTop);
        assert_eq!(app.scroll_px(), 0.0);
    }

    #[test]
    fn test_desktop_scene_follows_frames() {
        let mut app = app((160, 51));
        app.scroll_to(1080.0);
        app.on_frame();
        assert!(app.frame().smoothed_offset < 1080.0);

        settle(&mut app);
        assert!((app.frame().phases.gallery - 0.5).abs() < 1e-6);
        assert!(!app.scene.hero.visible);
        assert!((app.scene.track.translate_x_vmin + 20.0 + 7.0 * 44.0 * 0.5).abs() < 1e-3);
        assert!(app.scene.stage.pose.is_some());
    }

    #[test]
    fn test_lightweight_scene_updates_on_scroll() {
        let mut app = app((48, 51));
        app.on_frame();
        app.scroll_to(400.0);
        assert_eq!(app.frame().smoothed_offset, 400.0);
        assert!((app.scene.parallax.translate_y_px - 160.0).abs() < 1e-9);
    }

    #[test]
    fn test_toggle_mode_keeps_offset() {
        let mut app = app((160, 51));
        app.scroll_to(2000.0);
        settle(&mut app);
        app.handle_action(Action::ToggleMode);

        assert_eq!(app.profile(), DeviceProfile::Lightweight);
        assert_eq!(app.frame().smoothed_offset, 2000.0);
        assert!(app.scene.stage.pose.is_none());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_scrolling_clears_status_message() {
        let mut app = app((160, 51));
        app.handle_action(Action::ToggleMode);
        assert!(app.status_message.is_some());

        app.handle_action(Action::ScrollDown);
        assert!(app.status_message.is_none());
        assert!(app.scroll_px() > 0.0);
    }

    #[test]
    fn test_resize_clamps_scroll() {
        let mut app = app((160, 51));
        app.handle_action(Action::JumpToBottom);
        app.resize(160, 26);
        assert!((app.scroll_px() - 1800.0).abs() < 1e-9);
    }

    #[test]
    fn test_pending_g_cleared_by_next_action() {
        let mut app = app((160, 51));
        app.handle_action(Action::PendingG);
        assert_eq!(app.pending_key, Some('g'));
        app.handle_action(Action::JumpToTop);
        assert_eq!(app.pending_key, None);
    }

    #[test]
    fn test_redraw_only_after_changes() {
        let mut app = app((160, 51));
        assert!(app.take_redraw());
        app.on_frame();
        assert!(!app.take_redraw());
        app.scroll_to(100.0);
        assert!(app.take_redraw());
    }
}
