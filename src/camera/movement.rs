use serde::{Deserialize, Serialize};

/// Discrete movement intent applied for one frame.
///
/// Serde serializes as `snake_case` strings so key-binding presets stay
/// readable:
/// ```toml
/// [keybindings.bindings]
/// forward = "KeyW"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMovement {
    /// Along the look direction.
    Forward,
    /// Against the look direction.
    Backward,
    /// Against the right vector.
    Left,
    /// Along the right vector.
    Right,
}

impl CameraMovement {
    /// All directions, in the order a frame applies them.
    pub const ALL: [Self; 4] =
        [Self::Forward, Self::Backward, Self::Left, Self::Right];

    /// +1 when moving along the axis, -1 when moving against it.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward | Self::Right => 1.0,
            Self::Backward | Self::Left => -1.0,
        }
    }
}
