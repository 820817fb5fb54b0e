//! Input handling: event types, per-frame input state, and the processor
//! that resolves key bindings into demo commands and camera controls.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Resolves events into commands and camera controls.
pub mod processor;
/// Held keys, press edges, and mouse accumulation.
pub mod state;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::{FrameInput, InputProcessor};
pub use state::InputState;
