//! Rendering seams: the surface the frame is drawn on and the scene that draws it.
//!
//! Everything behind these traits lives outside this crate. The graphics
//! device, the line shader, asset loading and the recursive scene-graph walk
//! belong to the host; the frame loop only decides *when* each of them runs
//! and with which transform.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::camera::Viewport;
use crate::fit::SceneBounds;
use crate::frame::FrameTime;
use crate::transform::Transform;

/// RGBA clear colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Toggles for auxiliary scene elements.
///
/// The frame loop holds and forwards this snapshot; only the scene reads it.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub show_background: bool,
    pub show_assets: bool,
    pub show_collision: bool,
    pub show_camera_bounds: bool,
    pub show_kill_bounds: bool,
    pub show_spawn: bool,
    pub show_respawn: bool,
    pub show_item_spawn: bool,
    pub show_nav_node: bool,
}

/// Scratch space the scene may fill while drawing a single frame.
///
/// A fresh, empty value is handed to the scene every frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderData {
    /// Transforms of named scene elements resolved earlier in the same frame.
    pub resolved: HashMap<String, Transform>,
}

impl RenderData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("graphics device unavailable: {0}")]
    Unavailable(String),
    #[error("game data not found at {path}")]
    MissingData { path: PathBuf },
}

/// The render target a frame is drawn on.
pub trait Surface {
    /// Fill the whole target with `color`.
    fn clear(&mut self, color: Color);

    /// Rebuild any resolution-dependent buffers after the window changed size.
    fn resize_line_shader(&mut self, viewport: Viewport);

    /// Flush queued draw calls and present the frame.
    fn finalize_draw(&mut self);

    /// Give back device resources. Called exactly once, at shutdown.
    fn release(&mut self) {}
}

/// Builds the surface on first use.
pub trait SurfaceFactory {
    type Surface: Surface;

    /// Create a surface that loads its assets from `data_path`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the device or the game data is unavailable.
    fn create(&mut self, data_path: &Path, viewport: Viewport) -> Result<Self::Surface, SurfaceError>;
}

/// A drawable scene handed to the frame loop.
pub trait Scene<S: Surface> {
    /// Draw onto `surface`, mapping scene coordinates through `transform`.
    fn draw_on(
        &self,
        surface: &mut S,
        config: &RenderConfig,
        transform: Transform,
        time: FrameTime,
        data: &mut RenderData,
    );

    /// Rectangle the camera should frame initially, if this scene declares one.
    fn camera_bounds(&self) -> Option<SceneBounds> {
        None
    }
}
