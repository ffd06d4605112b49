//! Application configuration.

use crate::app::AppResult;
use kurbo::Size;
use scribble_core::ToolKind;
use scribble_render::{RoughOptions, SerializableColor, SurfaceStyle};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Host configuration. Every field may be omitted from the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: SerializableColor,
    pub stroke_color: SerializableColor,
    /// Tool active before the first tool change.
    pub initial_tool: ToolKind,
    pub rough: RoughOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Scribble".to_string(),
            width: 1280,
            height: 800,
            background_color: SerializableColor::light_gray(),
            stroke_color: SerializableColor::black(),
            initial_tool: ToolKind::default(),
            rough: RoughOptions::default(),
        }
    }
}

impl AppConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Surface paint settings derived from this configuration.
    pub fn surface_style(&self) -> SurfaceStyle {
        SurfaceStyle::new(Size::new(self.width as f64, self.height as f64))
            .with_background(self.background_color.into())
            .with_stroke(self.stroke_color.into())
    }
}
