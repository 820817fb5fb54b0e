//! Centralized runtime options with TOML file support.
//!
//! All tweakable settings (window, camera speeds, lighting, scene dressing,
//! keybindings) are consolidated here. Every section uses
//! `#[serde(default)]` so partial TOML files (e.g. only overriding
//! `[camera]`) work correctly.

mod camera;
mod display;
mod keybindings;
mod lighting;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window and presentation settings.
    pub display: DisplayOptions,
    /// Camera speeds and clip planes.
    pub camera: CameraOptions,
    /// Point light parameters.
    pub lighting: LightingOptions,
    /// Scene dressing parameters.
    pub scene: SceneOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::OptionsParse`] on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, VantageError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`VantageError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraMode;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
move_speed = 10.0
initial_mode = "orbital"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.move_speed, 10.0);
        assert_eq!(opts.camera.initial_mode, CameraMode::Orbital);
        // Everything else should be default
        assert_eq!(opts.camera.mouse_sensitivity, 0.003);
        assert_eq!(opts.display.width, 1366);
        assert_eq!(opts.scene.columns, 20);
        assert!(opts.lighting.enabled);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyP"),
            Some(KeyAction::ToggleProjection)
        );
        assert_eq!(opts.keybindings.lookup("Digit3"), Some(KeyAction::ModeThirdPerson));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebinding_from_toml_updates_reverse_map() {
        let toml_str = r#"
[keybindings.bindings]
toggle_projection = "KeyO"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyO"),
            Some(KeyAction::ToggleProjection)
        );
        // A bindings table replaces the whole default map.
        assert_eq!(opts.keybindings.lookup("KeyP"), None);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera\nmove_speed = ").unwrap_err();
        assert!(matches!(err, VantageError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!(
            "vantage-options-{}",
            std::process::id()
        ));
        let path = dir.join("options.toml");
        let mut opts = Options::default();
        opts.scene.seed = Some(7);
        opts.keybindings.bind(KeyAction::ToggleLight, "KeyL");
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.scene.seed, Some(7));
        assert_eq!(loaded.keybindings.lookup("KeyL"), Some(KeyAction::ToggleLight));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
