//! Look-at camera, motion primitives, per-mode controller, and the two
//! projection presets.

/// Per-mode camera update from resolved input.
pub mod controller;
/// Camera value type, projection kind, and GPU uniform.
pub mod core;
/// Camera modes, presets, and the projection toggle.
pub mod mode;
/// Yaw/pitch/roll and translation primitives.
pub mod motion;

pub use controller::{CameraController, CameraControls};
pub use core::{Camera, CameraUniform, Projection};
pub use mode::{toggle_projection, CameraMode, WORLD_UP};
