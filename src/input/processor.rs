//! Converts raw platform events into demo commands and camera controls.
//!
//! The `InputProcessor` owns the transient input state and the key-binding
//! map. It is the only thing between raw window events and
//! [`DemoState::update`](crate::DemoState::update).

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::state::InputState;
use crate::camera::CameraControls;
use crate::engine::DemoCommand;
use crate::options::KeybindingOptions;

/// Everything the demo needs from input for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Discrete commands, in key-press order.
    pub commands: Vec<DemoCommand>,
    /// Held-key and mouse state for the camera controller.
    pub controls: CameraControls,
}

/// Resolves [`InputEvent`]s through the key bindings.
#[derive(Debug, Default)]
pub struct InputProcessor {
    state: InputState,
    bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with the given key bindings.
    #[must_use]
    pub fn new(bindings: KeybindingOptions) -> Self {
        Self {
            state: InputState::new(),
            bindings,
        }
    }

    /// The raw input state.
    #[must_use]
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Record one event. Nothing is resolved until
    /// [`take_frame`](Self::take_frame).
    pub fn handle_event(&mut self, event: InputEvent) {
        self.state.handle_event(event);
    }

    /// Resolve the accumulated input into this frame's commands and
    /// controls, then clear per-frame edges and deltas.
    pub fn take_frame(&mut self) -> FrameInput {
        let commands = self
            .state
            .pressed_keys()
            .iter()
            .filter_map(|key| self.bindings.lookup(key))
            .filter_map(KeyAction::command)
            .collect();

        let controls = CameraControls {
            forward: self.held(KeyAction::MoveForward),
            back: self.held(KeyAction::MoveBack),
            left: self.held(KeyAction::MoveLeft),
            right: self.held(KeyAction::MoveRight),
            up: self.held(KeyAction::MoveUp),
            down: self.held(KeyAction::MoveDown),
            look_up: self.held(KeyAction::LookUp),
            look_down: self.held(KeyAction::LookDown),
            look_left: self.held(KeyAction::LookLeft),
            look_right: self.held(KeyAction::LookRight),
            roll_left: self.held(KeyAction::RollLeft),
            roll_right: self.held(KeyAction::RollRight),
            pan: self.state.is_button_down(MouseButton::Middle),
            zoom_in: self.pressed(KeyAction::ZoomIn),
            zoom_out: self.pressed(KeyAction::ZoomOut),
            mouse_delta: self.state.mouse_delta(),
            scroll: self.state.scroll(),
        };

        self.state.end_frame();
        FrameInput { commands, controls }
    }

    fn held(&self, action: KeyAction) -> bool {
        self.bindings
            .key_for(action)
            .is_some_and(|key| self.state.is_key_down(key))
    }

    fn pressed(&self, action: KeyAction) -> bool {
        self.bindings
            .key_for(action)
            .is_some_and(|key| self.state.pressed_keys().iter().any(|k| k == key))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::camera::CameraMode;

    fn press(input: &mut InputProcessor, key: &str) {
        input.handle_event(InputEvent::Key {
            key: key.into(),
            pressed: true,
            repeat: false,
        });
    }

    fn release(input: &mut InputProcessor, key: &str) {
        input.handle_event(InputEvent::Key {
            key: key.into(),
            pressed: false,
            repeat: false,
        });
    }

    #[test]
    fn discrete_keys_become_commands_in_press_order() {
        let mut input = InputProcessor::default();
        press(&mut input, "Digit4");
        press(&mut input, "KeyP");
        press(&mut input, "KeyY");
        press(&mut input, "KeyZ");

        let frame = input.take_frame();
        assert_eq!(
            frame.commands,
            [
                DemoCommand::SelectMode(CameraMode::Orbital),
                DemoCommand::ToggleProjection,
                DemoCommand::ToggleLight,
            ]
        );
        // Still held, but no new edges.
        assert!(input.take_frame().commands.is_empty());
    }

    #[test]
    fn held_keys_drive_controls_until_released() {
        let mut input = InputProcessor::default();
        press(&mut input, "KeyW");
        press(&mut input, "ArrowLeft");

        let controls = input.take_frame().controls;
        assert!(controls.forward);
        assert!(controls.look_left);
        assert!(!controls.back);

        let controls = input.take_frame().controls;
        assert!(controls.forward);

        release(&mut input, "KeyW");
        assert!(!input.take_frame().controls.forward);
    }

    #[test]
    fn zoom_keys_fire_once_per_press() {
        let mut input = InputProcessor::default();
        press(&mut input, "NumpadSubtract");
        assert!(input.take_frame().controls.zoom_out);
        assert!(!input.take_frame().controls.zoom_out);
    }

    #[test]
    fn mouse_state_is_forwarded() {
        let mut input = InputProcessor::default();
        input.handle_event(InputEvent::MouseMotion { dx: 4.0, dy: 1.0 });
        input.handle_event(InputEvent::Scroll { delta: -2.0 });
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Middle,
            pressed: true,
        });

        let controls = input.take_frame().controls;
        assert_eq!(controls.mouse_delta, Vec2::new(4.0, 1.0));
        assert_eq!(controls.scroll, -2.0);
        assert!(controls.pan);

        let controls = input.take_frame().controls;
        assert_eq!(controls.mouse_delta, Vec2::ZERO);
        assert!(controls.pan);
    }

    #[test]
    fn rebound_keys_take_effect() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::ToggleLight, "KeyL");
        let mut input = InputProcessor::new(bindings);

        press(&mut input, "KeyY");
        assert!(input.take_frame().commands.is_empty());
        press(&mut input, "KeyL");
        assert_eq!(input.take_frame().commands, [DemoCommand::ToggleLight]);
    }
}
