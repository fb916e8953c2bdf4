/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) as they
/// arrive and turned into [`CameraCommand`](crate::camera::CameraCommand)
/// values once per frame.
///
/// # Example
///
/// ```ignore
/// input.handle_event(&InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// input.handle_event(&InputEvent::Scroll { delta: 1.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical key pressed or released.
    Key {
        /// Key code string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"Escape"`, ...).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position, growing rightwards.
        x: f32,
        /// Vertical position, growing downwards.
        y: f32,
    },
    /// Raw pointer motion, independent of the cursor position. Delivered
    /// while the cursor is grabbed and cannot leave its spot.
    MouseMotion {
        /// Horizontal motion, positive rightwards.
        dx: f32,
        /// Vertical motion, positive downwards.
        dy: f32,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount.
        delta: f32,
    },
    /// Window lost focus: release held keys and forget the cursor.
    FocusLost,
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit window event, if it carries camera input.
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
    ) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                match event.physical_key {
                    PhysicalKey::Code(code) => Some(Self::Key {
                        key: format!("{code:?}"),
                        pressed: event.state == ElementState::Pressed,
                    }),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }

    /// Convert a winit device event, if it carries pointer motion.
    #[must_use]
    pub fn from_device_event(
        event: &winit::event::DeviceEvent,
    ) -> Option<Self> {
        let winit::event::DeviceEvent::MouseMotion { delta: (dx, dy) } = event
        else {
            return None;
        };
        Some(Self::MouseMotion {
            dx: *dx as f32,
            dy: *dy as f32,
        })
    }
}
