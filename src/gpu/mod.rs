//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, dynamic vertex buffers,
//! pipeline boilerplate, and the scene's depth/MSAA targets.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// Shared wgpu boilerplate helpers for render pipelines.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth and multisample render targets.
pub mod texture;
