//! GPU-free demo state and its per-frame update.

use glam::Vec3;

use super::command::DemoCommand;
use crate::camera::{toggle_projection, Camera, CameraController, CameraMode, WORLD_UP};
use crate::hud::HudText;
use crate::input::FrameInput;
use crate::lighting::PointLight;
use crate::options::Options;
use crate::scene::Scene;

/// Everything the demo simulates: the camera, its mode, the light and the
/// static scene. Rendering reads it; only commands and the controller
/// write it.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoState {
    /// The single camera.
    pub camera: Camera,
    /// How input drives the camera.
    pub mode: CameraMode,
    /// The point light.
    pub light: PointLight,
    /// Static world geometry.
    pub scene: Scene,
    quit: bool,
}

impl DemoState {
    /// Starting state: perspective preset, configured mode and light, and a
    /// freshly generated column field.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self::with_scene(options, Scene::new(&options.scene))
    }

    /// Starting state around an existing scene.
    #[must_use]
    pub fn with_scene(options: &Options, scene: Scene) -> Self {
        Self {
            camera: Camera::default(),
            mode: options.camera.initial_mode,
            light: PointLight::from_options(&options.lighting),
            scene,
            quit: false,
        }
    }

    /// Apply one command.
    pub fn execute(&mut self, command: DemoCommand) {
        match command {
            DemoCommand::SelectMode(mode) => {
                self.mode = mode;
                self.camera.up = WORLD_UP;
                log::debug!("camera mode {}", mode.label());
            }
            DemoCommand::ToggleProjection => {
                self.mode = toggle_projection(&mut self.camera);
                log::debug!(
                    "projection {}, mode {}",
                    self.camera.projection.label(),
                    self.mode.label()
                );
            }
            DemoCommand::ToggleLight => self.light.toggle(),
            DemoCommand::Quit => {
                log::info!("quit requested");
                self.quit = true;
            }
        }
    }

    /// Advance one frame: mode commands, then the projection toggle, then
    /// the camera controller, then the remaining commands.
    pub fn update(
        &mut self,
        input: &FrameInput,
        controller: &CameraController,
        dt: f32,
    ) {
        let mut commands = input.commands.clone();
        // Stable, so the last mode key of the frame still wins.
        commands.sort_by_key(|command| command.phase());
        let split = commands
            .iter()
            .position(|command| !command.precedes_camera_update())
            .unwrap_or(commands.len());
        let (before, after) = commands.split_at(split);

        for &command in before {
            self.execute(command);
        }
        controller.update(&mut self.camera, self.mode, &input.controls, dt);
        for &command in after {
            self.execute(command);
        }
    }

    /// Whether a [`DemoCommand::Quit`] has been executed.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Where the player cube is drawn, if the mode shows one.
    #[must_use]
    pub fn player_position(&self) -> Option<Vec3> {
        (self.mode == CameraMode::ThirdPerson).then_some(self.camera.target)
    }

    /// HUD text for the current camera.
    #[must_use]
    pub fn hud_text(&self) -> HudText {
        HudText::compose(&self.camera, self.mode)
    }
}
