mod gallery;
mod hero;
mod overlay;
mod popup;
mod status_bar;

pub use gallery::GalleryWidget;
pub use hero::HeroWidget;
pub use overlay::OverlayWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

/// Map a rectangle in page pixels onto the cells of `area`, clipped to it
///
/// `cell` is the pixel size of one cell. Returns `None` when nothing of the
/// rectangle is on screen.
pub(crate) fn page_rect(
    area: Rect,
    cell: (f64, f64),
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Option<Rect> {
    let to_col = |px: f64| area.x as i64 + (px / cell.0).round() as i64;
    let to_row = |px: f64| area.y as i64 + (px / cell.1).round() as i64;

    let left = to_col(x).max(area.left() as i64);
    let right = to_col(x + width).min(area.right() as i64);
    let top = to_row(y).max(area.top() as i64);
    let bottom = to_row(y + height).min(area.bottom() as i64);

    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// Truncate to at most `max_width` columns, with an ellipsis when cut
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            if max_width > 0 {
                while used + 1 > max_width {
                    match out.pop() {
                        Some(last) => used -= last.width().unwrap_or(0),
                        None => break,
                    }
                }
                out.push('…');
            }
            return out;
        }
        used += w;
        out.push(ch);
    }
    out
}
