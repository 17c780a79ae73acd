pub mod config;
pub mod error;
pub mod media;
pub mod page;
pub mod presentation;
pub mod sample;
pub mod timeline;

pub use config::{AppConfig, TimelineConfig};
pub use error::{Error, Result};
pub use media::MediaItem;
pub use page::{HostEvent, PageView};
