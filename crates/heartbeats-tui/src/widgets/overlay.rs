use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{page_rect, truncate_to_width};
use crate::app::App;

/// Last gallery item growing to fill the viewport
pub struct OverlayWidget;

impl OverlayWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let Some(inset) = app.scene.overlay.inset else {
            return;
        };
        let Some(item) = app.items().last() else {
            return;
        };

        let viewport = app.frame().viewport;
        let Some(rect) = page_rect(
            area,
            app.cell_size(),
            inset.left,
            inset.top,
            viewport.width - inset.left - inset.right,
            viewport.height - inset.top - inset.bottom,
        ) else {
            return;
        };

        let theme = &app.theme;
        let progress = app.frame().phases.expansion;

        frame.render_widget(Clear, rect);
        let block = Block::default()
            .title(format!(" {} · {:.0}% ", item.label(), progress * 100.0))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.overlay));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        if inner.height == 0 {
            return;
        }
        let marker = if item.is_motion() { "▶" } else { "◼" };
        let lines = vec![
            Line::from(Span::styled(
                marker,
                Style::default().fg(theme.red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate_to_width(&item.source(), inner.width as usize),
                Style::default().fg(theme.grey2),
            )),
        ];
        let top_pad = inner.height.saturating_sub(lines.len() as u16) / 2;
        let body = Rect {
            y: inner.y + top_pad,
            height: inner.height - top_pad,
            ..inner
        };
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    }
}
