// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! First- and third-person 3D camera demo built on wgpu.
//!
//! A small static scene (ground plane, three walls, a field of random
//! columns, one point light) is viewed through a single camera that can be
//! switched between four interaction modes and two projections. A HUD
//! overlay reports the live camera state.
//!
//! # Key entry points
//!
//! - [`engine::CameraDemo`] - GPU resources plus the per-frame update/render
//! - [`engine::DemoState`] - the pure demo state (camera, mode, light, scene)
//! - [`camera::CameraController`] - per-mode camera update from input
//! - [`hud::HudText`] - the HUD text as a pure function of camera state
//! - [`options::Options`] - runtime configuration loaded from TOML
//! - `Viewer` - standalone winit window (feature `viewer`)

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod hud;
pub mod input;
pub mod lighting;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
mod viewer;

pub use engine::{CameraDemo, DemoCommand, DemoState};
pub use error::VantageError;
pub use input::{
    FrameInput, InputEvent, InputProcessor, InputState, KeyAction, MouseButton,
};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
