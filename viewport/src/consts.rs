//! Shared numeric constants for the viewport crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest zoom factor the camera can reach.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest zoom factor the camera can reach.
pub const MAX_ZOOM: f64 = 7.0;

/// Zoom change per scroll unit per millisecond of frame time.
pub const ZOOM_PER_MSEC: f64 = 0.00005;

/// Zoom factor of a freshly created camera.
pub const DEFAULT_ZOOM: f64 = 1.0;

// ── Framing ─────────────────────────────────────────────────────

/// Window scale used when no scene bounds were available to fit against.
pub const DEFAULT_WINDOW_SCALE: f64 = 1.0;

// ── Host window ─────────────────────────────────────────────────

/// Default title handed to the hosting window.
pub const DEFAULT_WINDOW_TITLE: &str = "mapview";
