use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match app.mode {
            Mode::Normal => app.profile().label().to_uppercase(),
            Mode::Help => "HELP".to_string(),
        };

        let progress = app.frame().phases;
        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {:.0}/{:.0}px | hero {:>3.0}% gallery {:>3.0}% expansion {:>3.0}%",
                mode_str,
                app.scroll_px(),
                app.page().max_scroll(),
                progress.hero * 100.0,
                progress.gallery * 100.0,
                progress.expansion * 100.0,
            )
        };

        let help_hint = " q:quit j/k:scroll m:mode ?:help ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
