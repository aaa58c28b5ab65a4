//! Viewer configuration parsed from environment variables.

use std::path::PathBuf;

use crate::consts::DEFAULT_WINDOW_TITLE;
use crate::input::Button;
use crate::render::{Color, RenderConfig};

pub const DEFAULT_DATA_PATH: &str = ".";

/// What a window resize does to the camera framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizePolicy {
    /// Keep window scale and camera offset; only recentre on the new viewport.
    #[default]
    KeepFraming,
    /// Re-run the fit against the bounds fitted at startup. Zoom returns to 1,
    /// since the fitted offset only frames the bounds at that zoom.
    Refit,
}

/// Properties the host applies to its window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
    pub title: String,
    pub resizable: bool,
    pub pointer_visible: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self { title: DEFAULT_WINDOW_TITLE.to_string(), resizable: true, pointer_visible: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value '{value}' (expected {expected})")]
    InvalidValue { var: &'static str, value: String, expected: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Game data directory handed to the surface factory.
    pub data_path: PathBuf,
    /// Button that pans the camera while held.
    pub pan_button: Button,
    pub resize_policy: ResizePolicy,
    pub clear_color: Color,
    pub window: WindowOptions,
    /// Initial toggles forwarded to the scene.
    pub render: RenderConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

impl ViewerConfig {
    /// Defaults with the given data path: right-button pan, keep framing on resize, black clear.
    #[must_use]
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            pan_button: Button::Secondary,
            resize_policy: ResizePolicy::default(),
            clear_color: Color::BLACK,
            window: WindowOptions::default(),
            render: RenderConfig::default(),
        }
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `MAPVIEW_DATA_PATH`: default `.`
    /// - `MAPVIEW_PAN_BUTTON`: `primary`, `middle` or `secondary` (default)
    /// - `MAPVIEW_RESIZE_POLICY`: `keep` (default) or `refit`
    /// - `MAPVIEW_WINDOW_TITLE`: default `mapview`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to an unknown value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_path = std::env::var("MAPVIEW_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
        let mut config = Self::new(data_path);

        let pan_button = std::env::var("MAPVIEW_PAN_BUTTON").unwrap_or_else(|_| "secondary".to_string());
        config.pan_button = parse_pan_button(&pan_button)?;
        let resize_policy = std::env::var("MAPVIEW_RESIZE_POLICY").unwrap_or_else(|_| "keep".to_string());
        config.resize_policy = parse_resize_policy(&resize_policy)?;
        if let Ok(title) = std::env::var("MAPVIEW_WINDOW_TITLE") {
            config.window.title = title;
        }

        Ok(config)
    }
}

fn parse_pan_button(raw: &str) -> Result<Button, ConfigError> {
    Button::from_name(raw).ok_or_else(|| ConfigError::InvalidValue {
        var: "MAPVIEW_PAN_BUTTON",
        value: raw.to_string(),
        expected: "'primary', 'middle' or 'secondary'",
    })
}

fn parse_resize_policy(raw: &str) -> Result<ResizePolicy, ConfigError> {
    match raw {
        "keep" => Ok(ResizePolicy::KeepFraming),
        "refit" => Ok(ResizePolicy::Refit),
        other => Err(ConfigError::InvalidValue {
            var: "MAPVIEW_RESIZE_POLICY",
            value: other.to_string(),
            expected: "'keep' or 'refit'",
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
