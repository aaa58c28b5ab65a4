//! Session scripts: recorded pointer input replayed through the frame loop.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use viewport::camera::{Camera, Viewport};
use viewport::config::ViewerConfig;
use viewport::fit::SceneBounds;
use viewport::frame::{FrameError, FrameLoop, FrameTime};
use viewport::input::{Button, Buttons, DeviceState, InputSource};
use viewport::render::RenderConfig;

use crate::headless::{HeadlessFactory, ScriptScene, SurfaceStats};

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

const DEFAULT_FRAME_MS: u64 = 16;

fn default_frame_ms() -> u64 {
    DEFAULT_FRAME_MS
}

/// A recorded viewing session.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    /// Window size at startup.
    pub viewport: Viewport,
    /// Bounds the scene declares, if any.
    #[serde(default)]
    pub bounds: Option<SceneBounds>,
    #[serde(default)]
    pub render_config: RenderConfig,
    #[serde(default)]
    pub frames: Vec<ScriptFrame>,
}

/// Device state for one tick.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptFrame {
    #[serde(default = "default_frame_ms")]
    pub elapsed_ms: u64,
    /// Absolute pointer position in window pixels. When absent the pointer
    /// stays where the previous frame left it.
    #[serde(default)]
    pub pointer: Option<(i32, i32)>,
    /// Wheel movement during this tick.
    #[serde(default)]
    pub scroll: f64,
    /// Buttons held during this tick.
    #[serde(default)]
    pub buttons: Vec<Button>,
    /// Window size change delivered before this tick.
    #[serde(default)]
    pub resize: Option<Viewport>,
}

/// Input device fed from script frames.
#[derive(Debug, Clone, Default)]
pub struct ReplayInput {
    state: DeviceState,
}

impl ReplayInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the device to the state recorded in `frame`.
    pub fn advance(&mut self, frame: &ScriptFrame) {
        if let Some((x, y)) = frame.pointer {
            self.state.pointer_x = x;
            self.state.pointer_y = y;
        }
        self.state.scroll_value += frame.scroll;
        self.state.buttons = Buttons::held(&frame.buttons);
    }
}

impl InputSource for ReplayInput {
    fn poll(&mut self) -> DeviceState {
        self.state
    }
}

/// Final state of a replayed session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayOutcome {
    pub frames: u64,
    pub camera: Option<Camera>,
    pub window_scale: f64,
    pub surface: SurfaceStats,
}

/// Replay `script` against a headless surface.
///
/// # Errors
///
/// Returns [`FrameError`] if the surface cannot be created (e.g. the data path is missing).
pub fn run(script: &Script, mut config: ViewerConfig) -> Result<ReplayOutcome, FrameError> {
    config.render = script.render_config.clone();

    let factory = HeadlessFactory::new();
    let stats = factory.stats();
    let mut frame_loop = FrameLoop::new(config, factory, ScriptScene::new(script.bounds), script.viewport);
    let mut input = ReplayInput::new();
    let mut total = Duration::ZERO;

    for frame in &script.frames {
        if let Some(viewport) = frame.resize {
            frame_loop.on_window_resize(viewport);
        }
        input.advance(frame);
        let elapsed = Duration::from_millis(frame.elapsed_ms);
        total += elapsed;
        frame_loop.tick(&mut input, FrameTime::new(elapsed, total))?;
    }

    let frames = frame_loop.frame_count();
    let camera = frame_loop.camera();
    let window_scale = frame_loop.window_scale();
    frame_loop.shutdown();

    let surface = *stats.borrow();
    tracing::info!(frames, window_scale, "replay finished");
    Ok(ReplayOutcome { frames, camera, window_scale, surface })
}
