//! Free-fly camera: Euler-angle orientation, movement, zoom, and the
//! matrices derived from them.

/// Per-frame update commands.
pub mod command;
/// Camera state and update operations.
pub mod core;
/// Discrete movement intents.
pub mod movement;
/// Perspective projection parameters.
pub mod projection;
/// GPU-ready camera snapshot.
pub mod uniform;

pub use self::core::Camera;
pub use command::CameraCommand;
pub use movement::CameraMovement;
pub use projection::Projection;
pub use uniform::CameraUniform;
