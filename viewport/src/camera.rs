#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_PER_MSEC};
use crate::input::{Button, InputSnapshot};
use crate::transform::Transform;

/// Size of the render target in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero, negative, or not finite.
    ///
    /// Nothing can be fitted into a degenerate viewport.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    /// Translation that moves the origin to the middle of the viewport.
    #[must_use]
    pub fn center_transform(&self) -> Transform {
        Transform::translate(self.width / 2.0, self.height / 2.0)
    }
}

/// Camera pose for pan/zoom over the map.
///
/// `x` / `y` are an offset in scene units, applied before zoom.
/// `zoom` is a scale factor kept within `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, zoom: DEFAULT_ZOOM }
    }
}

impl Camera {
    /// A camera at offset `(x, y)` with the default zoom.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, zoom: DEFAULT_ZOOM }
    }

    /// Zoom by `raw_delta` scroll units over a frame of `elapsed_ms`, then clamp.
    ///
    /// Scaling by frame time keeps the zoom rate independent of frame rate.
    /// A NaN result leaves the zoom untouched.
    pub fn adjust_zoom(&mut self, raw_delta: f64, elapsed_ms: f64) {
        let next = self.zoom + ZOOM_PER_MSEC * raw_delta * elapsed_ms;
        if next.is_nan() {
            return;
        }
        self.zoom = next.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Move the camera by a pointer delta in window pixels.
    ///
    /// Dividing by `zoom * window_scale` keeps the scene under the pointer at
    /// any zoom level.
    pub fn pan(&mut self, dx: i32, dy: i32, window_scale: f64) {
        let pixels_per_unit = self.zoom * window_scale;
        if !pixels_per_unit.is_finite() || pixels_per_unit <= 0.0 {
            return;
        }
        self.x += f64::from(dx) / pixels_per_unit;
        self.y += f64::from(dy) / pixels_per_unit;
    }

    /// Pan with this frame's pointer delta if `button` is held. Returns whether the camera moved.
    pub fn drag(&mut self, input: &InputSnapshot, button: Button, window_scale: f64) -> bool {
        if !input.is_down(button) {
            return false;
        }
        let before = (self.x, self.y);
        self.pan(input.pointer_dx, input.pointer_dy, window_scale);
        before != (self.x, self.y)
    }

    /// Scene-to-camera transform: translate by the offset, then zoom.
    #[must_use]
    pub fn to_transform(&self) -> Transform {
        Transform::uniform_scale(self.zoom) * Transform::translate(self.x, self.y)
    }
}
