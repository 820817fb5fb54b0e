//! Standalone demo window backed by winit.
//!
//! ```no_run
//! # use vantage::{Options, Viewer};
//! Viewer::builder()
//!     .with_options(Options::default())
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    engine::CameraDemo, error::VantageError, options::Options, InputEvent,
    MouseButton,
};

/// Pixels per scroll notch for touchpads reporting pixel deltas.
const PIXELS_PER_NOTCH: f64 = 100.0;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    /// Create a builder with default options and the configured title.
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Override the window title from the display options.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.display.title = title;
        }
        Viewer { options }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window running the camera demo.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or quit is requested.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Viewer`] if the event loop cannot be created
    /// or fails, and [`VantageError::Gpu`] if the demo could not start.
    pub fn run(self) -> Result<(), VantageError> {
        let event_loop = EventLoop::new()
            .map_err(|e| VantageError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            demo: None,
            options: Some(self.options),
            startup_error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| VantageError::Viewer(e.to_string()))?;

        app.startup_error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    demo: Option<CameraDemo>,
    options: Option<Options>,
    startup_error: Option<VantageError>,
}

/// Lock the cursor for relative motion, falling back to confining it, and
/// hide it.
fn grab_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(e) = grabbed {
        log::warn!("cursor grab unavailable: {e}");
    }
    window.set_cursor_visible(false);
}

impl ViewerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: VantageError) {
        log::error!("{error}");
        self.startup_error = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(demo) = &mut self.demo else {
            return;
        };
        if !demo.frame_due() {
            return;
        }

        if demo.update() {
            event_loop.exit();
            return;
        }

        match demo.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                demo.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {e:?}"),
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(options) = self.options.take() else {
            return;
        };

        let attrs = Window::default_attributes()
            .with_title(&options.display.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                options.display.width,
                options.display.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, VantageError::Viewer(e.to_string()));
                return;
            }
        };

        if options.display.grab_cursor {
            grab_cursor(&window);
        }

        let inner = window.inner_size();
        let scale = window.scale_factor();
        let demo = match pollster::block_on(CameraDemo::new(
            window.clone(),
            (inner.width.max(1), inner.height.max(1)),
            scale,
            options,
        )) {
            Ok(demo) => demo,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.demo = Some(demo);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(demo) = &mut self.demo {
                    demo.resize(size.width, size.height);
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(demo) = &mut self.demo {
                    demo.set_scale_factor(scale_factor);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            WindowEvent::Focused(focused) => {
                if let Some(demo) = &mut self.demo {
                    demo.handle_input(InputEvent::Focus { focused });
                }
                if focused {
                    if let (Some(window), Some(demo)) = (&self.window, &self.demo) {
                        if demo.options().display.grab_cursor {
                            grab_cursor(window);
                        }
                    }
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                if let Some(demo) = &mut self.demo {
                    demo.handle_input(InputEvent::MouseButton {
                        button: MouseButton::from(button),
                        pressed: state == ElementState::Pressed,
                    });
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        (pos.y / PIXELS_PER_NOTCH) as f32
                    }
                };
                if let Some(demo) = &mut self.demo {
                    demo.handle_input(InputEvent::Scroll { delta });
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                if let Some(demo) = &mut self.demo {
                    demo.handle_input(InputEvent::Key {
                        key: format!("{code:?}"),
                        pressed: event.state == ElementState::Pressed,
                        repeat: event.repeat,
                    });
                }
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if let Some(demo) = &mut self.demo {
                demo.handle_input(InputEvent::MouseMotion {
                    dx: dx as f32,
                    dy: dy as f32,
                });
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(demo)) = (&self.window, &self.demo) else {
            return;
        };
        match demo.next_frame_at() {
            Some(at) if !demo.frame_due() => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(at));
            }
            _ => {
                event_loop.set_control_flow(ControlFlow::Poll);
                window.request_redraw();
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // The surface borrows the window; release GPU resources first.
        self.demo = None;
        self.window = None;
    }
}
