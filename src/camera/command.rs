//! Explicit camera updates.
//!
//! Input is collected into `CameraCommand` values once per frame and
//! applied synchronously through [`Camera::execute`](super::Camera::execute)
//! before the view is queried, rather than mutating the camera from
//! window callbacks.

use glam::Vec2;

use super::movement::CameraMovement;

/// A single camera update.
///
/// ```ignore
/// camera.execute(CameraCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Translate along one axis for `delta_time` seconds.
    Move {
        /// Which way to move.
        direction: CameraMovement,
        /// Elapsed frame time in seconds.
        delta_time: f32,
    },

    /// Rotate by a pointer-motion delta (device units, y up).
    Look {
        /// Horizontal and vertical motion.
        delta: Vec2,
        /// Clamp pitch short of straight up/down.
        constrain_pitch: bool,
    },

    /// Adjust the field of view (positive = narrower).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
}
