//! Initial framing: derive a camera pose and window scale from scene bounds.
//!
//! The fit picks the uniform scale that makes the whole bounding rectangle
//! visible (the binding dimension wins, aspect ratio is preserved) and an
//! offset that lines the rectangle up with the recentred viewport.

#[cfg(test)]
#[path = "fit_test.rs"]
mod fit_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Viewport};

/// Author-declared rectangle in scene coordinates that the camera should frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl SceneBounds {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// True when the rectangle has no usable area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.x.is_finite()
            && self.y.is_finite()
            && self.w.is_finite()
            && self.h.is_finite()
            && self.w > 0.0
            && self.h > 0.0)
    }
}

/// Result of fitting a viewport to scene bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFit {
    pub camera: Camera,
    /// Uniform scale from scene units to window pixels.
    pub window_scale: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    #[error("scene has no camera bounds")]
    MissingBounds,
    #[error("viewport {width}x{height} has no usable area")]
    DegenerateViewport { width: f64, height: f64 },
    #[error("scene bounds {w}x{h} have no usable area")]
    DegenerateBounds { w: f64, h: f64 },
}

/// Fit `viewport` to `bounds`.
///
/// # Errors
///
/// Returns [`FitError::MissingBounds`] when `bounds` is `None`, and a
/// degenerate-variant error when either rectangle has zero, negative or
/// non-finite extent. Callers fall back to an unframed default camera.
pub fn fit(bounds: Option<SceneBounds>, viewport: Viewport) -> Result<ViewportFit, FitError> {
    let bounds = bounds.ok_or(FitError::MissingBounds)?;
    if viewport.is_degenerate() {
        return Err(FitError::DegenerateViewport { width: viewport.width, height: viewport.height });
    }
    if bounds.is_degenerate() {
        return Err(FitError::DegenerateBounds { w: bounds.w, h: bounds.h });
    }

    let window_scale = f64::min(viewport.width / bounds.w, viewport.height / bounds.h);
    let camera = Camera::new(
        -bounds.x - viewport.width / (2.0 * window_scale),
        -bounds.y - viewport.height / (2.0 * window_scale),
    );

    Ok(ViewportFit { camera, window_scale })
}
