use serde::{Deserialize, Serialize};

use crate::camera::CameraMode;
use crate::engine::DemoCommand;

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML option files stay
/// readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_projection = "KeyP"
/// move_forward = "KeyW"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Switch to free flight.
    ModeFree,
    /// Switch to first person.
    ModeFirstPerson,
    /// Switch to third person.
    ModeThirdPerson,
    /// Switch to the automatic orbit.
    ModeOrbital,
    /// Swap perspective and isometric presets.
    ToggleProjection,
    /// Switch the point light on or off.
    ToggleLight,
    /// Close the demo.
    Quit,
    /// Move along the view direction.
    MoveForward,
    /// Move against the view direction.
    MoveBack,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Rise (free mode).
    MoveUp,
    /// Sink (free mode).
    MoveDown,
    /// Pitch up.
    LookUp,
    /// Pitch down.
    LookDown,
    /// Yaw left.
    LookLeft,
    /// Yaw right.
    LookRight,
    /// Roll counter-clockwise.
    RollLeft,
    /// Roll clockwise.
    RollRight,
    /// Step toward the target.
    ZoomIn,
    /// Step away from the target.
    ZoomOut,
}

impl KeyAction {
    /// The discrete command fired when the key goes down, or `None` for
    /// actions that are sampled while held.
    #[must_use]
    pub const fn command(self) -> Option<DemoCommand> {
        match self {
            Self::ModeFree => Some(DemoCommand::SelectMode(CameraMode::Free)),
            Self::ModeFirstPerson => {
                Some(DemoCommand::SelectMode(CameraMode::FirstPerson))
            }
            Self::ModeThirdPerson => {
                Some(DemoCommand::SelectMode(CameraMode::ThirdPerson))
            }
            Self::ModeOrbital => {
                Some(DemoCommand::SelectMode(CameraMode::Orbital))
            }
            Self::ToggleProjection => Some(DemoCommand::ToggleProjection),
            Self::ToggleLight => Some(DemoCommand::ToggleLight),
            Self::Quit => Some(DemoCommand::Quit),
            _ => None,
        }
    }
}
