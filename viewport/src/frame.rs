//! Per-frame driver: sample input, move the camera, compose the render
//! transform and hand the frame to the scene.
//!
//! DESIGN
//! ======
//! `FrameCore` holds every piece of state that does not touch the render
//! surface (input sampler, camera, window scale, viewport) so it can be tested
//! without a device. `FrameLoop` wraps it and owns the surface lifecycle:
//! the surface is created on the first draw and released exactly once, either
//! by `shutdown` or when the loop is dropped.
//!
//! Each tick runs `update` then `draw`, in that order:
//! 1. refresh input
//! 2. zoom from scroll, pan while the pan button is held (camera must exist)
//! 3. create surface and camera if missing
//! 4. compose `center * window_scale * camera`
//! 5. clear, 6. draw the scene, 7. present

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use std::time::Duration;

use crate::camera::{Camera, Viewport};
use crate::config::{ResizePolicy, ViewerConfig};
use crate::consts::DEFAULT_WINDOW_SCALE;
use crate::fit::{FitError, SceneBounds, fit};
use crate::input::{Button, InputSampler, InputSource};
use crate::render::{RenderConfig, RenderData, Scene, Surface, SurfaceError, SurfaceFactory};
use crate::transform::{Point, Transform};

/// Timing for one tick of the host loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameTime {
    /// Time since the previous tick.
    pub elapsed: Duration,
    /// Time since the session started.
    pub total: Duration,
}

impl FrameTime {
    #[must_use]
    pub fn new(elapsed: Duration, total: Duration) -> Self {
        Self { elapsed, total }
    }

    /// Frame time in (fractional) milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("render surface: {0}")]
    Surface(#[from] SurfaceError),
}

// =============================================================================
// FRAME CORE
// =============================================================================

/// Frame state that doesn't depend on the render surface.
#[derive(Debug, Clone)]
pub struct FrameCore {
    pub input: InputSampler,
    /// `None` until the first draw with a usable viewport.
    pub camera: Option<Camera>,
    pub window_scale: f64,
    pub viewport: Viewport,
    pub pan_button: Button,
    pub resize_policy: ResizePolicy,
    /// Bounds the camera was fitted to, kept for re-fitting on resize.
    fitted_bounds: Option<SceneBounds>,
}

impl FrameCore {
    #[must_use]
    pub fn new(viewport: Viewport, pan_button: Button, resize_policy: ResizePolicy) -> Self {
        Self {
            input: InputSampler::new(),
            camera: None,
            window_scale: DEFAULT_WINDOW_SCALE,
            viewport,
            pan_button,
            resize_policy,
            fitted_bounds: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &ViewerConfig, viewport: Viewport) -> Self {
        Self::new(viewport, config.pan_button, config.resize_policy)
    }

    // --- Update ---

    /// Refresh input and apply it to the camera.
    pub fn update(&mut self, source: &mut impl InputSource, time: FrameTime) {
        self.input.refresh(source);
        self.apply_input(time);
    }

    /// Apply the current input snapshot to the camera, if one exists.
    pub fn apply_input(&mut self, time: FrameTime) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };
        let input = self.input.snapshot();
        camera.adjust_zoom(input.scroll_delta, time.elapsed_ms());
        camera.drag(&input, self.pan_button, self.window_scale);
    }

    // --- Lazy camera ---

    /// Create the camera if it doesn't exist yet. Returns whether a camera exists afterwards.
    ///
    /// Without bounds (or with unusable bounds) the camera falls back to the
    /// default pose at window scale 1. With a degenerate viewport nothing is
    /// created and the next call tries again.
    pub fn ensure_camera(&mut self, bounds: Option<SceneBounds>) -> bool {
        if self.camera.is_some() {
            return true;
        }

        match fit(bounds, self.viewport) {
            Ok(fitted) => {
                tracing::info!(
                    window_scale = fitted.window_scale,
                    x = fitted.camera.x,
                    y = fitted.camera.y,
                    "camera fitted to scene bounds"
                );
                self.camera = Some(fitted.camera);
                self.window_scale = fitted.window_scale;
                self.fitted_bounds = bounds;
            }
            Err(FitError::DegenerateViewport { width, height }) => {
                tracing::debug!(width, height, "no viewport yet; camera deferred");
                return false;
            }
            Err(FitError::MissingBounds) => {
                tracing::debug!("scene has no camera bounds; using default camera");
                self.use_default_camera();
            }
            Err(e @ FitError::DegenerateBounds { .. }) => {
                tracing::warn!(error = %e, "cannot fit camera; using default camera");
                self.use_default_camera();
            }
        }
        true
    }

    fn use_default_camera(&mut self) {
        self.camera = Some(Camera::default());
        self.window_scale = DEFAULT_WINDOW_SCALE;
        self.fitted_bounds = None;
    }

    // --- Transform ---

    /// The composed scene-to-window transform for this frame.
    ///
    /// Camera first, then window scale, then recentring on the viewport.
    /// Before the camera exists the default pose is used.
    #[must_use]
    pub fn render_transform(&self) -> Transform {
        let camera = self.camera.unwrap_or_default();
        self.viewport.center_transform() * Transform::uniform_scale(self.window_scale) * camera.to_transform()
    }

    /// Map a scene point to window pixels.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        self.render_transform().apply(world)
    }

    /// Map a window pixel to scene coordinates, or `None` if the transform is singular.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Option<Point> {
        self.render_transform().inverse().map(|inv| inv.apply(screen))
    }

    // --- Resize ---

    /// Record a new viewport size and apply the resize policy.
    ///
    /// A degenerate size (minimised window, NaN from the host) is ignored and
    /// the last usable viewport stays in effect. Returns whether the camera
    /// was re-fitted.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport.is_degenerate() {
            tracing::debug!(width = viewport.width, height = viewport.height, "unusable viewport ignored");
            return false;
        }
        self.viewport = viewport;
        if self.resize_policy != ResizePolicy::Refit {
            return false;
        }
        let (Some(camera), Some(bounds)) = (self.camera.as_mut(), self.fitted_bounds) else {
            return false;
        };
        match fit(Some(bounds), viewport) {
            Ok(fitted) => {
                // The fitted offset only frames the bounds at zoom 1.
                *camera = fitted.camera;
                self.window_scale = fitted.window_scale;
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "resize re-fit skipped");
                false
            }
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn camera(&self) -> Option<Camera> {
        self.camera
    }

    #[must_use]
    pub fn window_scale(&self) -> f64 {
        self.window_scale
    }
}

// =============================================================================
// FRAME LOOP
// =============================================================================

/// The full frame driver. Wraps `FrameCore` and owns the scene and render surface.
pub struct FrameLoop<F, S>
where
    F: SurfaceFactory,
    S: Scene<F::Surface>,
{
    pub core: FrameCore,
    config: ViewerConfig,
    factory: F,
    scene: S,
    surface: Option<F::Surface>,
    frames: u64,
}

impl<F, S> FrameLoop<F, S>
where
    F: SurfaceFactory,
    S: Scene<F::Surface>,
{
    #[must_use]
    pub fn new(config: ViewerConfig, factory: F, scene: S, viewport: Viewport) -> Self {
        let core = FrameCore::from_config(&config, viewport);
        Self { core, config, factory, scene, surface: None, frames: 0 }
    }

    /// Run one full tick: update, then draw.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Surface`] if the surface could not be created.
    pub fn tick(&mut self, source: &mut impl InputSource, time: FrameTime) -> Result<(), FrameError> {
        self.update(source, time);
        self.draw(time)
    }

    /// Sample input and move the camera.
    pub fn update(&mut self, source: &mut impl InputSource, time: FrameTime) {
        self.core.update(source, time);
    }

    /// Draw and present one frame.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Surface`] if the surface could not be created.
    /// Nothing is drawn in that case and the next call tries again.
    pub fn draw(&mut self, time: FrameTime) -> Result<(), FrameError> {
        if self.surface.is_none() {
            let surface = self.factory.create(&self.config.data_path, self.core.viewport)?;
            tracing::info!(data_path = %self.config.data_path.display(), "render surface acquired");
            self.surface = Some(surface);
        }
        self.core.ensure_camera(self.scene.camera_bounds());

        let transform = self.core.render_transform();
        if let Some(surface) = self.surface.as_mut() {
            surface.clear(self.config.clear_color);
            let mut data = RenderData::new();
            self.scene.draw_on(surface, &self.config.render, transform, time, &mut data);
            surface.finalize_draw();
        }
        self.frames += 1;
        Ok(())
    }

    /// Propagate a window resize to the frame state and the surface.
    pub fn on_window_resize(&mut self, viewport: Viewport) {
        let refitted = self.core.resize(viewport);
        tracing::debug!(width = viewport.width, height = viewport.height, refitted, "window resized");
        if let Some(surface) = self.surface.as_mut() {
            surface.resize_line_shader(viewport);
        }
    }

    /// Release the surface and end the session.
    pub fn shutdown(mut self) {
        self.release_surface();
    }

    fn release_surface(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.release();
            tracing::info!(frames = self.frames, "render surface released");
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn camera(&self) -> Option<Camera> {
        self.core.camera()
    }

    #[must_use]
    pub fn window_scale(&self) -> f64 {
        self.core.window_scale()
    }

    #[must_use]
    pub fn render_config(&self) -> &RenderConfig {
        &self.config.render
    }

    /// Replace the toggles forwarded to the scene from the next frame on.
    pub fn set_render_config(&mut self, render: RenderConfig) {
        self.config.render = render;
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Number of frames drawn so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }
}

impl<F, S> Drop for FrameLoop<F, S>
where
    F: SurfaceFactory,
    S: Scene<F::Surface>,
{
    fn drop(&mut self) {
        self.release_surface();
    }
}
