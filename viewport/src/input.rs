//! Input model: mouse buttons, polled device state, and the per-frame sampler.
//!
//! The host exposes its pointer device through [`InputSource`], which reports
//! absolute state (pointer position, cumulative scroll value, held buttons).
//! [`InputSampler`] is refreshed once at the top of each frame and turns two
//! consecutive device states into an [`InputSnapshot`] of deltas. The sampler
//! is owned by the frame driver and handed to whatever reads input that tick.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Parse a button name as used in configuration (`primary`, `middle`, `secondary`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "primary" | "left" => Some(Self::Primary),
            "middle" => Some(Self::Middle),
            "secondary" | "right" => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Held/released state of every tracked button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Buttons {
    pub primary: bool,
    pub middle: bool,
    pub secondary: bool,
}

impl Buttons {
    /// A set with exactly the given buttons held.
    #[must_use]
    pub fn held(buttons: &[Button]) -> Self {
        let mut out = Self::default();
        for &button in buttons {
            out.set(button, true);
        }
        out
    }

    #[must_use]
    pub fn is_down(self, button: Button) -> bool {
        match button {
            Button::Primary => self.primary,
            Button::Middle => self.middle,
            Button::Secondary => self.secondary,
        }
    }

    pub fn set(&mut self, button: Button, down: bool) {
        match button {
            Button::Primary => self.primary = down,
            Button::Middle => self.middle = down,
            Button::Secondary => self.secondary = down,
        }
    }
}

/// Absolute device state as reported by the host at poll time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeviceState {
    /// Pointer x in window pixels.
    pub pointer_x: i32,
    /// Pointer y in window pixels.
    pub pointer_y: i32,
    /// Cumulative scroll-wheel value since the device was opened.
    pub scroll_value: f64,
    pub buttons: Buttons,
}

/// A polled input device.
pub trait InputSource {
    /// Read the current absolute device state.
    fn poll(&mut self) -> DeviceState;
}

/// Per-frame input deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Pointer movement along x since the previous refresh, in window pixels.
    pub pointer_dx: i32,
    /// Pointer movement along y since the previous refresh, in window pixels.
    pub pointer_dy: i32,
    /// Scroll accumulated since the previous refresh (positive = away from the user).
    pub scroll_delta: f64,
    /// Buttons held at refresh time.
    pub buttons: Buttons,
}

impl InputSnapshot {
    #[must_use]
    pub fn is_down(&self, button: Button) -> bool {
        self.buttons.is_down(button)
    }
}

/// Frame-scoped input state.
///
/// `refresh` must run exactly once per frame, before any accessor is read;
/// calling it twice in one frame discards the movement seen by the first call.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    previous: Option<DeviceState>,
    snapshot: InputSnapshot,
}

impl InputSampler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll `source` and recompute the snapshot.
    pub fn refresh(&mut self, source: &mut impl InputSource) {
        self.refresh_from(source.poll());
    }

    /// Recompute the snapshot from an already-polled device state.
    ///
    /// The first refresh of a session reports zero deltas.
    pub fn refresh_from(&mut self, current: DeviceState) {
        let previous = self.previous.unwrap_or(current);
        self.snapshot = InputSnapshot {
            pointer_dx: current.pointer_x.saturating_sub(previous.pointer_x),
            pointer_dy: current.pointer_y.saturating_sub(previous.pointer_y),
            scroll_delta: current.scroll_value - previous.scroll_value,
            buttons: current.buttons,
        };
        self.previous = Some(current);
    }

    /// Pointer movement since the previous refresh.
    #[must_use]
    pub fn pointer_delta(&self) -> (i32, i32) {
        (self.snapshot.pointer_dx, self.snapshot.pointer_dy)
    }

    /// Scroll accumulated since the previous refresh.
    #[must_use]
    pub fn scroll_delta(&self) -> f64 {
        self.snapshot.scroll_delta
    }

    #[must_use]
    pub fn is_down(&self, button: Button) -> bool {
        self.snapshot.is_down(button)
    }

    /// The full snapshot for this frame.
    #[must_use]
    pub fn snapshot(&self) -> InputSnapshot {
        self.snapshot
    }
}
