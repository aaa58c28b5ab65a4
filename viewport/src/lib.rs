//! Camera and frame-composition core for the map viewer.
//!
//! This crate owns the per-frame update/draw loop of the viewer: sampling
//! pointer input, moving the pan/zoom camera, fitting the initial camera to the
//! scene's declared bounds, and composing the single affine transform the scene
//! is drawn with. The graphics device, asset loading and the scene-graph walk
//! stay with the host and are reached only through the traits in [`render`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`frame`] | Frame driver and testable [`frame::FrameCore`] |
//! | [`camera`] | Camera pose, zoom/pan rules, viewport size |
//! | [`fit`] | Initial framing from scene bounds |
//! | [`transform`] | 2D affine transform value type |
//! | [`input`] | Polled device state and the per-frame input sampler |
//! | [`render`] | Surface and scene seams, render config |
//! | [`config`] | Viewer configuration from the environment |
//! | [`consts`] | Shared numeric constants (zoom limits, defaults) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod fit;
pub mod frame;
pub mod input;
pub mod render;
pub mod transform;
