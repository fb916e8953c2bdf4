//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (held movement
//! keys, cursor tracking, pending scroll) and the key-binding map. It sits
//! between window events, which may arrive at any point during a frame,
//! and the camera, which is updated once per frame.

use std::collections::HashSet;

use glam::Vec2;

use super::event::InputEvent;
use super::keyboard::KeyBindings;
use super::mouse::CursorTracker;
use crate::camera::{Camera, CameraCommand, CameraMovement};

/// Collects a frame's worth of [`InputEvent`]s and emits
/// [`CameraCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // As window events arrive:
/// input.handle_event(&event);
///
/// // Once per frame, before building the view matrix:
/// let dt = clock.tick();
/// input.apply_frame(&mut camera, dt);
/// let view = camera.view_matrix();
/// ```
pub struct InputProcessor {
    /// Key string → direction mapping.
    key_bindings: KeyBindings,
    /// Directions whose key is currently held.
    held: HashSet<CameraMovement>,
    /// Cursor tracking and motion accumulation.
    cursor: CursorTracker,
    /// Scroll accumulated since the last frame.
    pending_scroll: f32,
    /// Whether look commands clamp pitch.
    constrain_pitch: bool,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeyBindings::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            held: HashSet::new(),
            cursor: CursorTracker::default(),
            pending_scroll: 0.0,
            constrain_pitch: true,
        }
    }

    /// Set whether look commands clamp pitch.
    #[must_use]
    pub fn with_constrain_pitch(mut self, constrain_pitch: bool) -> Self {
        self.constrain_pitch = constrain_pitch;
        self
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Whether the key for `movement` is currently held.
    #[must_use]
    pub fn is_held(&self, movement: CameraMovement) -> bool {
        self.held.contains(&movement)
    }

    /// Record a single event. Nothing touches the camera until
    /// [`frame_commands`](Self::frame_commands) is called.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Key { ref key, pressed } => {
                self.handle_key(key, pressed);
            }
            InputEvent::CursorMoved { x, y } => {
                self.cursor.handle_position(x, y);
            }
            InputEvent::MouseMotion { dx, dy } => {
                self.cursor.handle_motion(dx, dy);
            }
            InputEvent::Scroll { delta } => self.pending_scroll += delta,
            InputEvent::FocusLost => {
                self.held.clear();
                self.cursor.reset();
                self.pending_scroll = 0.0;
            }
        }
    }

    fn handle_key(&mut self, key: &str, pressed: bool) {
        let Some(movement) = self.key_bindings.lookup(key) else {
            return;
        };
        if pressed {
            let _ = self.held.insert(movement);
        } else {
            let _ = self.held.remove(&movement);
        }
    }

    /// Drain the frame's input into commands: one `Move` per held
    /// direction, then `Look` and `Zoom` if there was any motion or scroll.
    ///
    /// Held keys persist across frames; motion and scroll are consumed.
    pub fn frame_commands(&mut self, delta_time: f32) -> Vec<CameraCommand> {
        let mut commands: Vec<CameraCommand> = CameraMovement::ALL
            .into_iter()
            .filter(|movement| self.held.contains(movement))
            .map(|direction| CameraCommand::Move {
                direction,
                delta_time,
            })
            .collect();

        let delta = self.cursor.take_delta();
        if delta != Vec2::ZERO {
            commands.push(CameraCommand::Look {
                delta,
                constrain_pitch: self.constrain_pitch,
            });
        }

        let scroll = std::mem::take(&mut self.pending_scroll);
        if scroll != 0.0 {
            commands.push(CameraCommand::Zoom { delta: scroll });
        }

        commands
    }

    /// Apply the frame's input to `camera`.
    pub fn apply_frame(&mut self, camera: &mut Camera, delta_time: f32) {
        let commands = self.frame_commands(delta_time);
        log::trace!("applying {} camera commands", commands.len());
        for command in commands {
            camera.execute(command);
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn key(key: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            key: key.into(),
            pressed,
        }
    }

    #[test]
    fn idle_frame_produces_nothing() {
        let mut input = InputProcessor::new();
        assert!(input.frame_commands(0.016).is_empty());
    }

    #[test]
    fn held_keys_move_every_frame() {
        let mut input = InputProcessor::new();
        input.handle_event(&key("KeyD", true));
        input.handle_event(&key("KeyW", true));

        let expected = vec![
            CameraCommand::Move {
                direction: CameraMovement::Forward,
                delta_time: 0.5,
            },
            CameraCommand::Move {
                direction: CameraMovement::Right,
                delta_time: 0.5,
            },
        ];
        assert_eq!(input.frame_commands(0.5), expected);
        assert_eq!(input.frame_commands(0.5), expected);

        input.handle_event(&key("KeyW", false));
        assert_eq!(input.frame_commands(0.5).len(), 1);
        assert!(!input.is_held(CameraMovement::Forward));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut input = InputProcessor::new();
        input.handle_event(&key("KeyQ", true));
        assert!(input.frame_commands(1.0).is_empty());
    }

    #[test]
    fn cursor_motion_becomes_one_look() {
        let mut input = InputProcessor::new();
        input.handle_event(&InputEvent::CursorMoved { x: 400.0, y: 400.0 });
        input.handle_event(&InputEvent::CursorMoved { x: 420.0, y: 390.0 });
        input.handle_event(&InputEvent::CursorMoved { x: 430.0, y: 380.0 });

        assert_eq!(
            input.frame_commands(0.016),
            vec![CameraCommand::Look {
                delta: Vec2::new(30.0, 20.0),
                constrain_pitch: true,
            }]
        );
        assert!(input.frame_commands(0.016).is_empty());
    }

    #[test]
    fn raw_motion_turns_camera_without_cursor_position() {
        let mut camera = Camera::default();
        let mut input = InputProcessor::new();
        let motion = |dx, dy| InputEvent::MouseMotion { dx, dy };
        input.handle_event(&motion(450.0, 0.0));
        input.handle_event(&motion(450.0, -100.0));

        assert_eq!(
            input.frame_commands(0.016),
            vec![CameraCommand::Look {
                delta: Vec2::new(900.0, 100.0),
                constrain_pitch: true,
            }]
        );

        input.handle_event(&motion(900.0, 0.0));
        input.apply_frame(&mut camera, 0.016);
        assert!((camera.forward() - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn scroll_accumulates_into_zoom() {
        let mut input = InputProcessor::new();
        input.handle_event(&InputEvent::Scroll { delta: 1.0 });
        input.handle_event(&InputEvent::Scroll { delta: 2.0 });
        assert_eq!(
            input.frame_commands(0.016),
            vec![CameraCommand::Zoom { delta: 3.0 }]
        );
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut input = InputProcessor::new();
        input.handle_event(&key("KeyA", true));
        input.handle_event(&InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        input.handle_event(&InputEvent::Scroll { delta: 4.0 });
        input.handle_event(&InputEvent::FocusLost);
        input.handle_event(&InputEvent::CursorMoved { x: 300.0, y: 300.0 });
        assert!(input.frame_commands(0.016).is_empty());
    }

    #[test]
    fn apply_frame_updates_camera() {
        let mut camera = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        let mut input = InputProcessor::new();
        input.handle_event(&key("KeyW", true));
        input.handle_event(&InputEvent::Scroll { delta: 10.0 });

        input.apply_frame(&mut camera, 1.0);

        let expected = Vec3::new(0.0, 0.0, -7.0);
        assert!((camera.position() - expected).length() < 1e-5);
        assert_eq!(camera.fov(), 80.0);
    }

    #[test]
    fn unconstrained_processor_lets_pitch_pass_limit() {
        let mut camera = Camera::default();
        let mut input = InputProcessor::new().with_constrain_pitch(false);
        input.handle_event(&InputEvent::CursorMoved { x: 0.0, y: 1000.0 });
        input.handle_event(&InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        input.apply_frame(&mut camera, 0.016);
        assert_eq!(camera.pitch(), 100.0);
    }
}
