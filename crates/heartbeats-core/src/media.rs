//! Gallery media model
//!
//! Each gallery entry is a tagged variant so hosts match exhaustively on the
//! kind of media instead of comparing strings.

use serde::{Deserialize, Serialize};

/// A single piece of gallery media
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaItem {
    Image { url: String },
    /// Muted, looping inline video
    Video { url: String },
    /// Hosted video referenced by its YouTube id
    EmbeddedVideo { id: String },
}

impl MediaItem {
    pub fn image(url: impl Into<String>) -> Self {
        MediaItem::Image { url: url.into() }
    }

    pub fn video(url: impl Into<String>) -> Self {
        MediaItem::Video { url: url.into() }
    }

    pub fn embedded(id: impl Into<String>) -> Self {
        MediaItem::EmbeddedVideo { id: id.into() }
    }

    /// Address a renderer loads the media from
    pub fn source(&self) -> String {
        match self {
            MediaItem::Image { url } | MediaItem::Video { url } => url.clone(),
            MediaItem::EmbeddedVideo { id } => format!("https://www.youtube.com/embed/{}", id),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaItem::Image { .. } => "image",
            MediaItem::Video { .. } => "video",
            MediaItem::EmbeddedVideo { .. } => "embed",
        }
    }

    /// Whether the media moves on its own
    pub fn is_motion(&self) -> bool {
        match self {
            MediaItem::Image { .. } => false,
            MediaItem::Video { .. } | MediaItem::EmbeddedVideo { .. } => true,
        }
    }
}

const PHOTO_QUERY: &str = "?q=80&w=1740&auto=format&fit=crop";

/// The band's default gallery: seven photos and the closing video
pub fn default_items() -> Vec<MediaItem> {
    [
        "https://plus.unsplash.com/premium_photo-1682855223699-edb85ffa57b3",
        "https://images.unsplash.com/photo-1605340406960-f5b496c38b3d",
        "https://images.unsplash.com/photo-1514320291840-2e0a9bf2a9ae",
        "https://images.unsplash.com/photo-1521547418549-6a31aad7c177",
        "https://images.unsplash.com/photo-1550635707-e8c55839e834",
        "https://images.unsplash.com/photo-1614247912229-26a7e2114c0a",
        "https://images.unsplash.com/photo-1508979822114-db019a20d576",
    ]
    .iter()
    .map(|base| MediaItem::image(format!("{}{}", base, PHOTO_QUERY)))
    .chain(std::iter::once(MediaItem::video("/bpgc.mov")))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gallery_ends_with_video() {
        let items = default_items();
        assert_eq!(items.len(), 8);
        assert_eq!(items.last(), Some(&MediaItem::video("/bpgc.mov")));
        assert!(items[..7].iter().all(|item| !item.is_motion()));
    }

    #[test]
    fn test_embedded_source() {
        let item = MediaItem::embedded("abc123");
        assert_eq!(item.source(), "https://www.youtube.com/embed/abc123");
        assert_eq!(item.label(), "embed");
        assert!(item.is_motion());
    }
}
