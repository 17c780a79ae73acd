use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key binding overview
    pub fn render_help(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let keymap = &app.config.keymap;

        let entries = [
            (keymap.scroll_down.as_str(), "scroll down"),
            (keymap.scroll_up.as_str(), "scroll up"),
            (keymap.scroll_half_down.as_str(), "half page down"),
            (keymap.scroll_half_up.as_str(), "half page up"),
            (keymap.scroll_page_down.as_str(), "page down"),
            (keymap.scroll_page_up.as_str(), "page up"),
            (keymap.jump_to_top.as_str(), "top of page"),
            (keymap.jump_to_bottom.as_str(), "bottom of page"),
            (keymap.toggle_mode.as_str(), "switch desktop/lightweight"),
            (keymap.help.as_str(), "toggle help"),
            (keymap.quit.as_str(), "quit"),
        ];

        let area = frame.area();
        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (entries.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines: Vec<Line> = entries
            .iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<8}", key),
                        Style::default().fg(theme.green).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*what, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "any key to close",
                Style::default().fg(theme.grey1),
            ))
            .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        assert_eq!(
            centered_rect(40, 10, Rect::new(0, 0, 100, 50)),
            Rect::new(30, 20, 40, 10)
        );
        assert_eq!(
            centered_rect(40, 10, Rect::new(0, 0, 20, 5)),
            Rect::new(0, 0, 40, 10)
        );
    }
}
