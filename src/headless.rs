//! Headless render surface and scene used by the replay driver.
//!
//! Nothing is rasterized: the surface counts what the frame loop asked of it
//! and logs it, and the scene logs where its bounds land on screen.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use serde::Serialize;
use viewport::camera::Viewport;
use viewport::fit::SceneBounds;
use viewport::frame::FrameTime;
use viewport::render::{Color, RenderConfig, RenderData, Scene, Surface, SurfaceError, SurfaceFactory};
use viewport::transform::{Point, Transform};

#[cfg(test)]
#[path = "headless_test.rs"]
mod headless_test;

/// What the frame loop did to the surface over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SurfaceStats {
    pub clears: u64,
    pub presents: u64,
    pub resizes: u64,
    pub released: bool,
}

pub struct HeadlessSurface {
    viewport: Viewport,
    stats: Rc<RefCell<SurfaceStats>>,
}

impl Surface for HeadlessSurface {
    fn clear(&mut self, color: Color) {
        self.stats.borrow_mut().clears += 1;
        tracing::trace!(r = color.r, g = color.g, b = color.b, "clear");
    }

    fn resize_line_shader(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.stats.borrow_mut().resizes += 1;
        tracing::debug!(width = viewport.width, height = viewport.height, "line shader resized");
    }

    fn finalize_draw(&mut self) {
        self.stats.borrow_mut().presents += 1;
    }

    fn release(&mut self) {
        self.stats.borrow_mut().released = true;
        tracing::debug!(width = self.viewport.width, height = self.viewport.height, "headless surface released");
    }
}

/// Builds [`HeadlessSurface`]s that all report into one shared [`SurfaceStats`].
pub struct HeadlessFactory {
    stats: Rc<RefCell<SurfaceStats>>,
}

impl Default for HeadlessFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessFactory {
    #[must_use]
    pub fn new() -> Self {
        Self { stats: Rc::new(RefCell::new(SurfaceStats::default())) }
    }

    /// Handle to the stats, readable after the frame loop has shut down.
    #[must_use]
    pub fn stats(&self) -> Rc<RefCell<SurfaceStats>> {
        Rc::clone(&self.stats)
    }
}

impl SurfaceFactory for HeadlessFactory {
    type Surface = HeadlessSurface;

    fn create(&mut self, data_path: &Path, viewport: Viewport) -> Result<HeadlessSurface, SurfaceError> {
        if !data_path.is_dir() {
            return Err(SurfaceError::MissingData { path: data_path.to_path_buf() });
        }
        Ok(HeadlessSurface { viewport, stats: Rc::clone(&self.stats) })
    }
}

/// A scene that has nothing to draw but its declared bounds.
pub struct ScriptScene {
    bounds: Option<SceneBounds>,
}

impl ScriptScene {
    #[must_use]
    pub fn new(bounds: Option<SceneBounds>) -> Self {
        Self { bounds }
    }
}

impl<S: Surface> Scene<S> for ScriptScene {
    fn draw_on(
        &self,
        _surface: &mut S,
        _config: &RenderConfig,
        transform: Transform,
        time: FrameTime,
        _data: &mut RenderData,
    ) {
        let Some(b) = self.bounds else {
            return;
        };
        let top_left = transform.apply(Point::new(b.x, b.y));
        let bottom_right = transform.apply(Point::new(b.x + b.w, b.y + b.h));
        tracing::trace!(
            total_ms = time.total.as_millis(),
            left = top_left.x,
            top = top_left.y,
            right = bottom_right.x,
            bottom = bottom_right.y,
            "scene bounds on screen"
        );
    }

    fn camera_bounds(&self) -> Option<SceneBounds> {
        self.bounds
    }
}
