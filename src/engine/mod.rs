//! The demo driver: [`CameraDemo`] owns the GPU side, [`DemoState`] the
//! simulated camera, mode, light and scene.

pub mod command;
mod state;

pub use command::{DemoCommand, FramePhase};
pub use state::DemoState;

use crate::camera::CameraController;
use crate::error::VantageError;
use crate::gpu::render_context::{RenderContext, SurfaceSettings};
use crate::gpu::texture::SceneTargets;
use crate::hud::HudRenderer;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::renderer::{FrameScene, SceneRenderer};
use crate::scene::{build_marker_mesh, palette, SceneMesh};
use crate::util::frame_timing::FrameTiming;

/// The camera demo: GPU resources plus the simulated [`DemoState`].
///
/// # Frame loop
///
/// Forward window input with [`handle_input`](Self::handle_input). Each
/// frame, call [`update`](Self::update) and then [`render`](Self::render).
/// Call [`resize`](Self::resize) when the window size changes and
/// [`set_scale_factor`](Self::set_scale_factor) when the DPI changes.
pub struct CameraDemo {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    /// Depth and MSAA targets for the scene pass.
    targets: SceneTargets,
    /// Ground, walls, columns and markers.
    scene_renderer: SceneRenderer,
    /// Panels and text overlay.
    hud_renderer: HudRenderer,
    /// Reused per-frame marker geometry.
    markers: SceneMesh,

    /// Camera, mode, light and scene.
    state: DemoState,
    /// Per-mode camera update.
    controller: CameraController,
    /// Key bindings and per-frame input.
    input: InputProcessor,
    /// Per-frame timing and FPS tracking.
    frame_timing: FrameTiming,
    /// Window DPI factor for the HUD.
    scale_factor: f64,
    /// Runtime options the demo was built from.
    options: Options,
}

impl CameraDemo {
    /// Set up the GPU, generate the scene and upload it.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Gpu`] if GPU initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        scale_factor: f64,
        options: Options,
    ) -> Result<Self, VantageError> {
        let context = RenderContext::new(
            window,
            SurfaceSettings {
                width: size.0,
                height: size.1,
                vsync: options.display.vsync,
                msaa_samples: options.display.msaa_samples,
            },
        )
        .await?;

        let state = DemoState::new(&options);
        let targets = SceneTargets::new(
            &context.device,
            (context.config.width, context.config.height),
            context.format(),
            context.sample_count,
        );
        let scene_renderer = SceneRenderer::new(
            &context.device,
            context.format(),
            context.sample_count,
            &state.scene.static_mesh(),
            &state.light,
            &options.camera,
            &options.lighting,
        );
        let hud_renderer =
            HudRenderer::new(&context.device, &context.queue, context.format());

        log::info!(
            "demo ready: {}x{}, {}x MSAA, mode {}",
            context.config.width,
            context.config.height,
            context.sample_count,
            state.mode.label()
        );

        Ok(Self {
            targets,
            scene_renderer,
            hud_renderer,
            markers: SceneMesh::new(),
            controller: CameraController::new(&options.camera),
            input: InputProcessor::new(options.keybindings.clone()),
            frame_timing: FrameTiming::new(options.display.target_fps),
            state,
            scale_factor,
            options,
            context,
        })
    }

    /// Record a platform-agnostic input event for the next update.
    pub fn handle_input(&mut self, event: InputEvent) {
        self.input.handle_event(event);
    }

    /// Whether the frame limiter allows another frame yet.
    #[must_use]
    pub fn frame_due(&self) -> bool {
        self.frame_timing.should_render()
    }

    /// When the next frame is due under the frame limiter, if limited.
    #[must_use]
    pub fn next_frame_at(&self) -> Option<web_time::Instant> {
        self.frame_timing.next_frame_at()
    }

    /// Advance the simulation by the time since the last frame. Returns
    /// `true` once quit has been requested.
    pub fn update(&mut self) -> bool {
        let dt = self.frame_timing.begin_frame();
        let frame = self.input.take_frame();
        self.state.update(&frame, &self.controller, dt);
        self.state.quit_requested()
    }

    /// Draw the scene and the HUD, then present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the next swapchain image cannot be
    /// acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let size = (self.context.config.width, self.context.config.height);

        build_marker_mesh(
            &mut self.markers,
            self.state.player_position(),
            &self.state.light,
        );
        self.scene_renderer.prepare(
            &self.context.device,
            &self.context.queue,
            &FrameScene {
                camera: &self.state.camera,
                aspect: self.context.aspect(),
                light: &self.state.light,
                markers: &self.markers,
            },
        );
        self.hud_renderer.prepare(
            &self.context.device,
            &self.context.queue,
            size,
            self.scale_factor as f32,
            &self.state.hud_text(),
        );

        let mut encoder = self.context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(
                        self.targets
                            .color_attachment(&view, palette::RAYWHITE.to_linear()),
                    )],
                    depth_stencil_attachment: Some(
                        self.targets.depth_attachment(),
                    ),
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
            self.scene_renderer.render(&mut pass);
        }
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("HUD Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
            self.hud_renderer.render(&mut pass);
        }
        self.context.submit(encoder);
        frame.present();
        self.hud_renderer.trim();

        Ok(())
    }

    /// Resize the surface and the size-dependent scene targets.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.context.resize(width, height);
            self.targets = SceneTargets::new(
                &self.context.device,
                (width, height),
                self.context.format(),
                self.context.sample_count,
            );
        }
    }

    /// Reconfigure the surface at its current size (after `Lost` or
    /// `Outdated`).
    pub fn reconfigure(&mut self) {
        let (width, height) =
            (self.context.config.width, self.context.config.height);
        self.resize(width, height);
    }

    /// Update the DPI factor used to lay out the HUD.
    pub fn set_scale_factor(&mut self, scale: f64) {
        self.scale_factor = scale;
    }

    /// The simulated state.
    #[must_use]
    pub fn state(&self) -> &DemoState {
        &self.state
    }

    /// The options the demo was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
