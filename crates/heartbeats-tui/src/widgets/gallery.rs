use heartbeats_core::presentation::style::{
    CARD_GAP_VMIN, CARD_HEIGHT_VMIN, CARD_WIDTH_VMIN, HIDDEN_OPACITY,
};
use heartbeats_core::MediaItem;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{page_rect, truncate_to_width};
use crate::app::App;

/// Horizontal gallery track
pub struct GalleryWidget;

impl GalleryWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let viewport = app.frame().viewport;
        let vmin = viewport.vmin();
        let track = &app.scene.track;

        // Cards come through as the hero fades out
        let hero = &app.scene.hero;
        let reveal = if hero.visible { 1.0 - hero.opacity } else { 1.0 };

        let items = app.items();
        let last = items.len().saturating_sub(1);
        let top = viewport.height / 2.0 - CARD_HEIGHT_VMIN / 2.0 * vmin;

        for (index, item) in items.iter().enumerate() {
            let card_opacity = if index == last {
                track.last_card_opacity
            } else {
                1.0
            };
            let opacity = card_opacity * reveal;
            if opacity <= HIDDEN_OPACITY {
                continue;
            }

            let offset_vmin = track.translate_x_vmin + index as f64 * (CARD_WIDTH_VMIN + CARD_GAP_VMIN);
            let left = viewport.width / 2.0 + offset_vmin * vmin;
            let Some(rect) = page_rect(
                area,
                app.cell_size(),
                left,
                top,
                CARD_WIDTH_VMIN * vmin,
                CARD_HEIGHT_VMIN * vmin,
            ) else {
                continue;
            };

            render_card(frame, rect, app, index, item, opacity);
        }
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    index: usize,
    item: &MediaItem,
    opacity: f64,
) {
    let theme = &app.theme;
    let fg = theme.fade(theme.fg0, opacity);
    let dim = theme.fade(theme.grey1, opacity);
    let accent = if item.is_motion() {
        theme.fade(theme.red, opacity)
    } else {
        theme.fade(theme.card_border, opacity)
    };

    let block = Block::default()
        .title(format!(" {}/{} ", index + 1, app.items().len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(theme.fade(theme.card, opacity)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let marker = if item.is_motion() { "▶ " } else { "◼ " };
    let lines = vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(accent)),
            Span::styled(
                item.label(),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            truncate_to_width(&item.source(), width),
            Style::default().fg(dim),
        )),
        Line::from(Span::styled(
            format!("focus {:>3.0}%", app.scene.track.object_position_pct),
            Style::default().fg(dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
