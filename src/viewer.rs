//! Standalone window that drives a [`Camera`] from live input.
//!
//! Nothing is drawn: the window exists to deliver keyboard, cursor, and
//! scroll events. Each redraw runs one frame of the update contract
//! (tick the clock, apply collected input, rebuild the camera uniform) and
//! the camera state is logged at debug level once a second.
//!
//! ```no_run
//! # use flycam::Viewer;
//! Viewer::builder()
//!     .with_title("flycam")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    camera::{Camera, CameraUniform, Projection},
    error::FlycamError,
    input::{InputEvent, InputProcessor},
    options::Options,
    util::frame_clock::FrameClock,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default options and the title "flycam".
    fn new() -> Self {
        Self {
            options: None,
            title: "flycam".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window whose input drives a free-fly camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or Escape is pressed.
    pub fn run(self) -> Result<(), FlycamError> {
        let event_loop =
            EventLoop::new().map_err(|e| FlycamError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            camera: self.options.build_camera(),
            input: self.options.build_input(),
            projection: self.options.build_projection(1, 1),
            uniform: CameraUniform::new(),
            clock: FrameClock::new(),
            title: self.title,
            cursor_grabbed: false,
            since_report: 0.0,
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| FlycamError::Viewer(e.to_string()))?;

        app.error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Seconds between camera state reports in the log.
const REPORT_INTERVAL: f32 = 1.0;

/// Internal winit application handler. Owns the camera by value; input is
/// only applied from the redraw step.
struct ViewerApp {
    window: Option<Arc<Window>>,
    camera: Camera,
    input: InputProcessor,
    projection: Projection,
    uniform: CameraUniform,
    clock: FrameClock,
    title: String,
    /// Whether the cursor is hidden and held by the window. Look input then
    /// comes from raw device motion instead of cursor positions.
    cursor_grabbed: bool,
    since_report: f32,
    error: Option<FlycamError>,
}

impl ViewerApp {
    /// Run one frame: all input for the frame lands before the view is
    /// derived.
    fn frame(&mut self) {
        let delta_time = self.clock.tick();
        self.input.apply_frame(&mut self.camera, delta_time);
        self.uniform.update(&self.camera, &self.projection);

        self.since_report += delta_time;
        if self.since_report >= REPORT_INTERVAL {
            self.since_report = 0.0;
            log::debug!(
                "pos {} fwd {} fov {:.1} ({:.0} fps)",
                self.camera.position(),
                self.camera.forward(),
                self.camera.fov(),
                self.clock.fps(),
            );
        }
    }

    fn set_grab(&mut self, grab: bool) {
        let Some(window) = &self.window else {
            return;
        };
        self.cursor_grabbed = if grab {
            grab_cursor(window)
        } else {
            release_cursor(window);
            false
        };
    }

    /// Queue an event unless it duplicates the active motion source.
    fn queue(&mut self, event: &InputEvent) {
        if accepts(self.cursor_grabbed, event) {
            self.input.handle_event(event);
        }
    }
}

/// A grabbed cursor is pinned (or stops at the window edge), so only raw
/// motion is meaningful; an ungrabbed one is followed by position.
fn accepts(cursor_grabbed: bool, event: &InputEvent) -> bool {
    match event {
        InputEvent::CursorMoved { .. } => !cursor_grabbed,
        InputEvent::MouseMotion { .. } => cursor_grabbed,
        _ => true,
    }
}

/// Hide the cursor and hold it in the window. Returns whether a grab mode
/// was accepted.
fn grab_cursor(window: &Window) -> bool {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(e) = grabbed {
        log::warn!("cursor grab unavailable, following cursor position: {e}");
        return false;
    }
    window.set_cursor_visible(false);
    true
}

fn release_cursor(window: &Window) {
    if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
        log::warn!("failed to release cursor: {e}");
    }
    window.set_cursor_visible(true);
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(800.0, 800.0));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.error = Some(FlycamError::Viewer(e.to_string()));
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.projection.resize(size.width, size.height);
        log::info!("viewer started ({}x{})", size.width, size.height);

        window.request_redraw();
        self.window = Some(window);
        self.set_grab(true);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::KeyboardInput { event: key, .. }
                if key.state == ElementState::Pressed
                    && key.physical_key
                        == PhysicalKey::Code(KeyCode::Escape) =>
            {
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                self.projection.resize(size.width, size.height);
                return;
            }
            WindowEvent::Focused(focused) => self.set_grab(*focused),
            WindowEvent::RedrawRequested => {
                self.frame();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
                return;
            }
            _ => {}
        }

        if let Some(input) = InputEvent::from_window_event(&event) {
            self.queue(&input);
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let Some(input) = InputEvent::from_device_event(&event) {
            self.queue(&input);
        }
    }
}
