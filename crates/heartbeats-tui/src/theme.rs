use ratatui::style::Color;

/// Runtime palette for the preview
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey1: Color,
    pub grey2: Color,

    // Palette colors
    pub red: Color,
    pub orange: Color,
    pub yellow: Color,
    pub green: Color,
    pub aqua: Color,
    pub blue: Color,
    pub purple: Color,

    // Semantic colors
    pub card: Color,
    pub card_border: Color,
    pub overlay: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            red: Color::Rgb(0xea, 0x69, 0x62),
            orange: Color::Rgb(0xe7, 0x8a, 0x4e),
            yellow: Color::Rgb(0xd8, 0xa6, 0x57),
            green: Color::Rgb(0xa9, 0xb6, 0x65),
            aqua: Color::Rgb(0x89, 0xb4, 0x82),
            blue: Color::Rgb(0x7d, 0xae, 0xa3),
            purple: Color::Rgb(0xd3, 0x86, 0x9b),
            card: Color::Rgb(0x3c, 0x38, 0x36),
            card_border: Color::Rgb(0x7d, 0xae, 0xa3),
            overlay: Color::Rgb(0x1d, 0x20, 0x21),
            accent: Color::Rgb(0xea, 0x69, 0x62),
        }
    }
}

impl Theme {
    /// Blend `color` toward the page background; `alpha` 0 is fully faded
    pub fn fade(&self, color: Color, alpha: f64) -> Color {
        blend(self.bg0, color, alpha)
    }

    /// Darken `color` toward black by `amount`
    pub fn darken(&self, color: Color, amount: f64) -> Color {
        blend(Color::Rgb(0, 0, 0), color, 1.0 - amount)
    }
}

/// Linear blend from `from` to `to`; only RGB colors blend, others switch at 0.5
fn blend(from: Color, to: Color, alpha: f64) -> Color {
    let alpha = if alpha.is_finite() {
        alpha.clamp(0.0, 1.0)
    } else {
        0.0
    };
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => Color::Rgb(
            mix(r0, r1, alpha),
            mix(g0, g1, alpha),
            mix(b0, b1, alpha),
        ),
        _ if alpha < 0.5 => from,
        _ => to,
    }
}

fn mix(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let theme = Theme::default();
        assert_eq!(theme.fade(theme.fg0, 1.0), theme.fg0);
        assert_eq!(theme.fade(theme.fg0, 0.0), theme.bg0);
        assert_eq!(theme.fade(theme.fg0, f64::NAN), theme.bg0);
    }

    #[test]
    fn test_fade_halfway() {
        let theme = Theme::default();
        assert_eq!(
            blend(Color::Rgb(0, 0, 0), Color::Rgb(200, 100, 50), 0.5),
            Color::Rgb(100, 50, 25)
        );
        assert_eq!(theme.darken(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_named_colors_switch() {
        assert_eq!(blend(Color::Black, Color::White, 0.2), Color::Black);
        assert_eq!(blend(Color::Black, Color::White, 0.8), Color::White);
    }
}
