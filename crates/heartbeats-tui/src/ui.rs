use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, Mode, STATUS_BAR_ROWS};
use crate::widgets::{GalleryWidget, HeroWidget, OverlayWidget, PopupWidget, StatusBarWidget};

/// Draw one full screen: page layers bottom to top, then the status bar
pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Main layout: page + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_BAR_ROWS)])
        .split(size);
    let page = main_layout[0];

    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg0)),
        page,
    );
    GalleryWidget::render(frame, page, app);
    HeroWidget::render(frame, page, app);
    OverlayWidget::render(frame, page, app);
    StatusBarWidget::render(frame, main_layout[1], app);

    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;
    use heartbeats_core::AppConfig;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn screen(app: &App, cols: u16, rows: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn contains(buffer: &Buffer, needle: &str) -> bool {
        let area = buffer.area;
        (area.top()..area.bottom()).any(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect();
            row.contains(needle)
        })
    }

    #[test]
    fn test_hero_on_first_screen() {
        let app = App::new(AppConfig::default(), None, (160, 51));
        let buffer = screen(&app, 160, 51);
        assert!(contains(&buffer, "H E A R T B E A T S"));
        assert!(contains(&buffer, "DESKTOP"));
    }

    #[test]
    fn test_gallery_replaces_hero() {
        let mut app = App::new(AppConfig::default(), None, (160, 51));
        app.scroll_to(1080.0);
        for _ in 0..2000 {
            app.on_frame();
        }
        let buffer = screen(&app, 160, 51);
        assert!(!contains(&buffer, "H E A R T B E A T S"));
        assert!(contains(&buffer, "image"));
    }

    #[test]
    fn test_expanded_overlay_fills_page() {
        let mut app = App::new(AppConfig::default(), None, (160, 51));
        app.handle_action(Action::JumpToBottom);
        for _ in 0..2000 {
            app.on_frame();
        }
        let buffer = screen(&app, 160, 51);
        assert!(contains(&buffer, "video · 100%"));
        assert!(contains(&buffer, "/bpgc.mov"));
    }

    #[test]
    fn test_help_popup_and_tiny_terminal() {
        let mut app = App::new(AppConfig::default(), None, (160, 51));
        app.handle_action(Action::ToggleHelp);
        assert!(contains(&screen(&app, 160, 51), "any key to close"));

        let tiny = App::new(AppConfig::default(), None, (3, 2));
        screen(&tiny, 3, 2);
    }
}
