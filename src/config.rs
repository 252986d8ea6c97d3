//! Panel configuration (flexlayout.toml)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::Easing;
use crate::panel::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::platform::RenderQuality;
use crate::types::Color;
use crate::widget::{LabelStyle, ShimmerStyle};

const CONFIG_FILE: &str = "flexlayout.toml";

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Panel width in pixels
    #[serde(default = "default_width")]
    pub width: i32,

    /// Panel height in pixels
    #[serde(default = "default_height")]
    pub height: i32,

    /// Rendering quality hint ("low", "medium", "high")
    #[serde(default)]
    pub quality: RenderQuality,

    #[serde(default)]
    pub label: LabelConfig,

    #[serde(default)]
    pub button: ButtonConfig,

    /// Log file; logging stays off when unset
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            quality: RenderQuality::default(),
            label: LabelConfig::default(),
            button: ButtonConfig::default(),
            log_file: None,
        }
    }
}

fn default_width() -> i32 {
    DEFAULT_WIDTH
}

fn default_height() -> i32 {
    DEFAULT_HEIGHT
}

/// Text label settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Font size as a fraction of the label height
    #[serde(default = "default_scale")]
    pub scale: f64,

    #[serde(default = "default_base_color")]
    pub base_color: String,

    #[serde(default = "default_hover_color")]
    pub hover_color: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            base_color: default_base_color(),
            hover_color: default_hover_color(),
        }
    }
}

fn default_scale() -> f64 {
    0.8
}

fn default_base_color() -> String {
    "#ffffff".to_string()
}

fn default_hover_color() -> String {
    "#ffc800".to_string()
}

impl LabelConfig {
    /// Resolve to a label style; unparseable colors keep the built-in ones
    pub fn style(&self) -> LabelStyle {
        let fallback = LabelStyle::new(self.scale);
        let base = color_or(&self.base_color, fallback.base_color);
        let hover = color_or(&self.hover_color, fallback.hover_color);
        fallback.with_colors(base, hover)
    }
}

/// Image button settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ButtonConfig {
    /// Length of the hover shimmer in milliseconds
    #[serde(default = "default_shimmer_ms")]
    pub shimmer_ms: u64,

    /// Easing name, e.g. "linear", "ease-out", "ease-out-quart"
    #[serde(default = "default_shimmer_easing")]
    pub shimmer_easing: String,

    #[serde(default = "default_shimmer_color")]
    pub shimmer_color: String,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            shimmer_ms: default_shimmer_ms(),
            shimmer_easing: default_shimmer_easing(),
            shimmer_color: default_shimmer_color(),
        }
    }
}

fn default_shimmer_ms() -> u64 {
    600
}

fn default_shimmer_easing() -> String {
    "ease-out-quart".to_string()
}

fn default_shimmer_color() -> String {
    "#ffffff60".to_string()
}

impl ButtonConfig {
    pub fn shimmer(&self) -> ShimmerStyle {
        let fallback = ShimmerStyle::default();
        let easing = Easing::from_name(&self.shimmer_easing).unwrap_or_else(|| {
            crate::log!(
                "Unknown shimmer easing '{}', using default",
                self.shimmer_easing
            );
            fallback.easing
        });
        ShimmerStyle {
            duration: Duration::from_millis(self.shimmer_ms),
            easing,
            color: color_or(&self.shimmer_color, fallback.color),
            ..fallback
        }
    }
}

fn color_or(hex: &str, fallback: Color) -> Color {
    Color::from_hex(hex).unwrap_or_else(|e| {
        crate::log!("{}, using default", e);
        fallback
    })
}

impl PanelConfig {
    /// Find flexlayout.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("flexlayout").join(CONFIG_FILE)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE))),
            Some(PathBuf::from(CONFIG_FILE)),
        ];

        candidates.into_iter().flatten().find(|p| p.exists())
    }

    /// Load configuration, returning defaults if none is found or it is invalid
    pub fn load() -> Self {
        let Some(path) = Self::find_config_path() else {
            return Self::default();
        };
        Self::load_from_path(&path).unwrap_or_else(|e| {
            crate::log!("Failed to load config {:?}: {}", path, e);
            Self::default()
        })
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: PanelConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Open the configured log file, if any
    pub fn init_logging(&self) {
        if let Some(ref path) = self.log_file {
            crate::log::init(path);
        }
    }
}
