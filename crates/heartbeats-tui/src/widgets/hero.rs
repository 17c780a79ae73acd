use heartbeats_core::timeline::DeviceProfile;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;

const TITLE: &str = "H E A R T B E A T S";

const DRUM_KIT: [&str; 5] = [
    r"   ____         ____   ",
    r"  (____)  ___  (____)  ",
    r"   |  |  (___)  |  |   ",
    r"  _|__|__/   \__|__|_  ",
    r" (________________)  | ",
];

/// Fixed hero section
pub struct HeroWidget;

impl HeroWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let hero = &app.scene.hero;
        if !hero.visible || area.height == 0 {
            return;
        }

        match app.profile() {
            DeviceProfile::Desktop => render_stage(frame, area, app, hero.opacity),
            DeviceProfile::Lightweight => render_parallax(frame, area, app, hero.opacity),
        }
    }
}

/// Title over the 3D drum kit
fn render_stage(frame: &mut Frame, area: Rect, app: &App, opacity: f64) {
    let theme = &app.theme;
    let fg = theme.fade(theme.fg1, opacity);
    let kit = theme.fade(theme.yellow, opacity);
    let dim = theme.fade(theme.grey1, opacity);

    let mut lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(pose) = app.scene.stage.pose {
        // Turning the kit slides the art sideways, one column per 0.1 rad
        let shift = (pose.rotation_y * 10.0).round().max(0.0) as usize;
        let pad = " ".repeat(shift);
        for row in DRUM_KIT {
            lines.push(Line::from(Span::styled(
                format!("{}{}{}", pad, row, " ".repeat(shift)),
                Style::default().fg(kit),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("scale {:.2}  yaw {:.2} rad", pose.scale, pose.rotation_y),
            Style::default().fg(dim),
        )));
    }

    lines.push(Line::from(Span::styled(
        "scroll to play ↓",
        Style::default().fg(dim),
    )));

    let top_pad = area.height.saturating_sub(lines.len() as u16) / 2;
    render_centered(frame, area, lines, top_pad);
}

/// Title over the hero image with scroll parallax
fn render_parallax(frame: &mut Frame, area: Rect, app: &App, opacity: f64) {
    let theme = &app.theme;
    let parallax = &app.scene.parallax;
    let (_, cell_h) = app.cell_size();

    let background = theme.darken(theme.bg2, parallax.overlay_alpha);
    frame.render_widget(
        Block::default().style(Style::default().bg(background)),
        area,
    );

    let fg = theme.fade(theme.fg1, opacity);
    let dim = theme.fade(theme.grey2, opacity);
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "image y {:.0}px  scale {:.2}  tilt {:.1}°",
                parallax.translate_y_px, parallax.scale, parallax.rotate_x_deg
            ),
            Style::default().fg(dim),
        )),
    ];

    // The image lags behind the scroll, so the title drifts down the screen
    let drift = (parallax.translate_y_px / cell_h).round().max(0.0) as u16;
    let top_pad = (area.height.saturating_sub(lines.len() as u16) / 2).saturating_add(drift);
    if top_pad >= area.height {
        return;
    }
    render_centered(frame, area, lines, top_pad);
}

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>, top_pad: u16) {
    let body = Rect {
        y: area.y + top_pad.min(area.height),
        height: area.height.saturating_sub(top_pad),
        ..area
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
}
