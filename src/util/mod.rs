//! Shared utilities.

/// Frame limiting, clamped frame steps and FPS tracking.
pub mod frame_timing;
