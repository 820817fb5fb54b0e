use std::collections::HashSet;

use glam::Vec2;

use super::event::{InputEvent, MouseButton};

/// Raw input accumulated between two frames.
///
/// Held keys and buttons persist across frames; key-down edges, mouse
/// motion and scroll are cleared by [`end_frame`](Self::end_frame).
#[derive(Debug, Default)]
pub struct InputState {
    held_keys: HashSet<String>,
    pressed_keys: Vec<String>,
    held_buttons: HashSet<MouseButton>,
    mouse_delta: Vec2,
    scroll: f32,
}

impl InputState {
    /// Create an empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the state.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key {
                key,
                pressed,
                repeat,
            } => {
                if !pressed {
                    let _ = self.held_keys.remove(&key);
                } else if !repeat && self.held_keys.insert(key.clone()) {
                    self.pressed_keys.push(key);
                }
            }
            InputEvent::MouseMotion { dx, dy } => {
                self.mouse_delta += Vec2::new(dx, dy);
            }
            InputEvent::MouseButton { button, pressed } => {
                if pressed {
                    let _ = self.held_buttons.insert(button);
                } else {
                    let _ = self.held_buttons.remove(&button);
                }
            }
            InputEvent::Scroll { delta } => self.scroll += delta,
            InputEvent::Focus { focused } => {
                if !focused {
                    self.held_keys.clear();
                    self.held_buttons.clear();
                }
            }
        }
    }

    /// Whether a key is currently held.
    #[must_use]
    pub fn is_key_down(&self, key: &str) -> bool {
        self.held_keys.contains(key)
    }

    /// Keys that went down since the last frame, in press order.
    #[must_use]
    pub fn pressed_keys(&self) -> &[String] {
        &self.pressed_keys
    }

    /// Whether a mouse button is currently held.
    #[must_use]
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.held_buttons.contains(&button)
    }

    /// Mouse motion accumulated since the last frame.
    #[must_use]
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Scroll accumulated since the last frame.
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Clear per-frame edges and deltas.
    pub fn end_frame(&mut self) {
        self.pressed_keys.clear();
        self.mouse_delta = Vec2::ZERO;
        self.scroll = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: &str, pressed: bool, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key: key.into(),
            pressed,
            repeat,
        }
    }

    #[test]
    fn press_edges_ignore_repeats_and_held_keys() {
        let mut state = InputState::new();
        state.handle_event(key("KeyW", true, false));
        state.handle_event(key("KeyW", true, true));
        state.handle_event(key("KeyW", true, false));
        assert_eq!(state.pressed_keys(), ["KeyW"]);
        assert!(state.is_key_down("KeyW"));

        state.end_frame();
        assert!(state.pressed_keys().is_empty());
        assert!(state.is_key_down("KeyW"));

        state.handle_event(key("KeyW", false, false));
        assert!(!state.is_key_down("KeyW"));
    }

    #[test]
    fn motion_and_scroll_accumulate_until_end_of_frame() {
        let mut state = InputState::new();
        state.handle_event(InputEvent::MouseMotion { dx: 2.0, dy: -1.0 });
        state.handle_event(InputEvent::MouseMotion { dx: 3.0, dy: 4.0 });
        state.handle_event(InputEvent::Scroll { delta: 1.5 });
        assert_eq!(state.mouse_delta(), Vec2::new(5.0, 3.0));
        assert_eq!(state.scroll(), 1.5);

        state.end_frame();
        assert_eq!(state.mouse_delta(), Vec2::ZERO);
        assert_eq!(state.scroll(), 0.0);
    }

    #[test]
    fn losing_focus_releases_everything() {
        let mut state = InputState::new();
        state.handle_event(key("KeyD", true, false));
        state.handle_event(InputEvent::MouseButton {
            button: MouseButton::Middle,
            pressed: true,
        });
        state.handle_event(InputEvent::Focus { focused: false });
        assert!(!state.is_key_down("KeyD"));
        assert!(!state.is_button_down(MouseButton::Middle));
    }
}
