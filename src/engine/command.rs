//! The demo's discrete interactive vocabulary.
//!
//! Key presses resolve to a `DemoCommand` through the key bindings;
//! continuous input (held keys, mouse motion) goes to the camera controller
//! instead. Commands are applied by
//! [`DemoState::execute`](super::DemoState::execute).

use crate::camera::CameraMode;

/// A discrete action triggered by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoCommand {
    /// Switch the camera mode and reset the camera roll.
    SelectMode(CameraMode),
    /// Swap between the perspective and isometric presets.
    ToggleProjection,
    /// Switch the point light on or off.
    ToggleLight,
    /// Close the demo.
    Quit,
}

/// When a command runs within a frame. Phases run in declaration order;
/// commands sharing a phase keep their press order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FramePhase {
    /// Mode keys, before anything else touches the camera.
    SelectMode,
    /// The projection toggle, which overrides any mode picked this frame.
    Projection,
    /// After the camera update.
    AfterCameraUpdate,
}

impl DemoCommand {
    /// The phase of the frame this command runs in.
    #[must_use]
    pub const fn phase(self) -> FramePhase {
        match self {
            Self::SelectMode(_) => FramePhase::SelectMode,
            Self::ToggleProjection => FramePhase::Projection,
            Self::ToggleLight | Self::Quit => FramePhase::AfterCameraUpdate,
        }
    }

    /// Whether the command must be applied before the camera update of the
    /// frame it arrives in (it changes the camera or how it moves).
    #[must_use]
    pub fn precedes_camera_update(self) -> bool {
        self.phase() < FramePhase::AfterCameraUpdate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_order_mode_then_projection_then_the_rest() {
        let mode = DemoCommand::SelectMode(CameraMode::Free);
        assert!(mode.phase() < DemoCommand::ToggleProjection.phase());
        assert!(mode.precedes_camera_update());
        assert!(DemoCommand::ToggleProjection.precedes_camera_update());
        assert!(!DemoCommand::ToggleLight.precedes_camera_update());
        assert!(!DemoCommand::Quit.precedes_camera_update());
    }
}
