/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// resolves them, once per frame, into demo commands and camera controls.
///
/// # Example
///
/// ```
/// use vantage::{InputEvent, InputProcessor};
///
/// let mut input = InputProcessor::default();
/// input.handle_event(InputEvent::Key {
///     key: "KeyP".into(),
///     pressed: true,
///     repeat: false,
/// });
/// let frame = input.take_frame();
/// assert_eq!(frame.commands.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Keyboard key changed state.
    Key {
        /// Physical key in `winit::keyboard::KeyCode` debug format.
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// OS auto-repeat of a held key.
        repeat: bool,
    },
    /// Relative mouse motion in pixels (unaffected by cursor grab).
    MouseMotion {
        /// Horizontal motion, positive to the right.
        dx: f32,
        /// Vertical motion, positive downward.
        dy: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = toward the target).
    Scroll {
        /// Scroll amount in notches.
        delta: f32,
    },
    /// The window gained or lost keyboard focus.
    Focus {
        /// Whether the window is now focused.
        focused: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}
