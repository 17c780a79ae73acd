use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::media::MediaItem;
use crate::timeline::{PhaseLayout, SmoothingMode};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (holds the preview log)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Scroll timeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Smoothing strategy: "auto", "desktop" or "lightweight"
    #[serde(default)]
    pub mode: SmoothingMode,
    /// Fraction of the remaining distance covered per frame (desktop)
    #[serde(default = "default_smoothing_factor")]
    pub smoothing_factor: f64,
    /// Distance (px) below which the smoothed offset snaps to the raw one
    #[serde(default = "default_settle_epsilon")]
    pub settle_epsilon_px: f64,
    /// Viewports narrower than this use the lightweight path in auto mode
    #[serde(default = "default_breakpoint")]
    pub lightweight_breakpoint_px: f64,
    /// Smoothing factor of the 3D stage rig
    #[serde(default = "default_stage_smoothing")]
    pub stage_smoothing_factor: f64,
    /// Total page height in viewport heights
    #[serde(default = "default_page_height")]
    pub page_height_vh: f64,
    /// Phase boundaries in viewport heights
    #[serde(default)]
    pub phases: PhaseLayout,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            mode: SmoothingMode::default(),
            smoothing_factor: default_smoothing_factor(),
            settle_epsilon_px: default_settle_epsilon(),
            lightweight_breakpoint_px: default_breakpoint(),
            stage_smoothing_factor: default_stage_smoothing(),
            page_height_vh: default_page_height(),
            phases: PhaseLayout::default(),
        }
    }
}

impl TimelineConfig {
    /// Check factors and phase spans
    pub fn validate(&self) -> crate::Result<()> {
        for factor in [self.smoothing_factor, self.stage_smoothing_factor] {
            if !(factor > 0.0 && factor < 1.0) {
                return Err(crate::Error::InvalidSmoothing(factor));
            }
        }
        if !self.settle_epsilon_px.is_finite() || self.settle_epsilon_px < 0.0 {
            return Err(crate::Error::Config(format!(
                "settle_epsilon_px must be a non-negative number, got {}",
                self.settle_epsilon_px
            )));
        }
        if !self.page_height_vh.is_finite() || self.page_height_vh < 1.0 {
            return Err(crate::Error::Config(format!(
                "page_height_vh must be at least 1.0, got {}",
                self.page_height_vh
            )));
        }
        self.phases.validate()
    }

    /// Largest scroll offset (px) for a viewport height
    pub fn max_scroll(&self, viewport_height: f64) -> f64 {
        ((self.page_height_vh - 1.0) * viewport_height).max(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display refresh rate of the preview
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Pixels represented by one terminal column
    #[serde(default = "default_cell_width")]
    pub cell_width_px: u16,
    /// Pixels represented by one terminal row
    #[serde(default = "default_cell_height")]
    pub cell_height_px: u16,
    /// Pixels scrolled per line step (keys and mouse wheel)
    #[serde(default = "default_scroll_line")]
    pub scroll_line_px: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animation_fps: default_animation_fps(),
            cell_width_px: default_cell_width(),
            cell_height_px: default_cell_height(),
            scroll_line_px: default_scroll_line(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Media shown on the gallery track; the last one expands
    #[serde(default = "crate::media::default_items")]
    pub items: Vec<MediaItem>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            items: crate::media::default_items(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "G" (Shift+g), "gg", "<Esc>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,
    /// Switch between desktop and lightweight page views
    #[serde(default = "default_key_toggle_mode")]
    pub toggle_mode: String,
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            toggle_mode: default_key_toggle_mode(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_toggle_mode() -> String { "m".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("heartbeats")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_smoothing_factor() -> f64 {
    0.08
}

fn default_settle_epsilon() -> f64 {
    0.01
}

fn default_breakpoint() -> f64 {
    768.0 // iPad portrait width
}

fn default_stage_smoothing() -> f64 {
    0.1
}

fn default_page_height() -> f64 {
    5.5
}

fn default_animation_fps() -> u32 {
    60
}

fn default_cell_width() -> u16 {
    8
}

fn default_cell_height() -> u16 {
    16
}

fn default_scroll_line() -> u32 {
    40
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml_string()?)?;

        Ok(())
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.timeline.validate()?;
        if self.gallery.items.is_empty() {
            return Err(crate::Error::Config(
                "gallery needs at least one media item".to_string(),
            ));
        }
        if self.ui.animation_fps == 0 {
            return Err(crate::Error::Config(
                "ui.animation_fps must be positive".to_string(),
            ));
        }
        if self.ui.cell_width_px == 0 || self.ui.cell_height_px == 0 {
            return Err(crate::Error::Config(
                "ui.cell_width_px and ui.cell_height_px must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/heartbeats/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("heartbeats")
            .join("config.toml")
    }

    /// Get the preview log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("heartbeats.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
