use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"Digit1"`, `"ControlLeft"`, `"NumpadAdd"`, etc.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ToggleProjection` → `"KeyP"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::ModeFree, "Digit1".into()),
            (KeyAction::ModeFirstPerson, "Digit2".into()),
            (KeyAction::ModeThirdPerson, "Digit3".into()),
            (KeyAction::ModeOrbital, "Digit4".into()),
            (KeyAction::ToggleProjection, "KeyP".into()),
            (KeyAction::ToggleLight, "KeyY".into()),
            (KeyAction::Quit, "Escape".into()),
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveBack, "KeyS".into()),
            (KeyAction::MoveLeft, "KeyA".into()),
            (KeyAction::MoveRight, "KeyD".into()),
            (KeyAction::MoveUp, "Space".into()),
            (KeyAction::MoveDown, "ControlLeft".into()),
            (KeyAction::LookUp, "ArrowUp".into()),
            (KeyAction::LookDown, "ArrowDown".into()),
            (KeyAction::LookLeft, "ArrowLeft".into()),
            (KeyAction::LookRight, "ArrowRight".into()),
            (KeyAction::RollLeft, "KeyQ".into()),
            (KeyAction::RollRight, "KeyE".into()),
            (KeyAction::ZoomIn, "NumpadAdd".into()),
            (KeyAction::ZoomOut, "NumpadSubtract".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            if let Some(previous) =
                self.key_to_action.insert(key.clone(), *action)
            {
                log::warn!(
                    "key {key} bound to both {previous:?} and {action:?}"
                );
            }
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// The key string bound to an action, if any.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }
}
