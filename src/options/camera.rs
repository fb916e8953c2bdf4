use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::core::{
    DEFAULT_FOV, DEFAULT_MOUSE_SENSITIVITY, DEFAULT_MOVEMENT_SPEED,
    DEFAULT_PITCH, DEFAULT_YAW,
};
use crate::camera::projection::{DEFAULT_ZFAR, DEFAULT_ZNEAR};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement, tuning, and projection parameters.
pub struct CameraOptions {
    /// Starting world-space position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Global up reference.
    #[schemars(skip)]
    pub world_up: [f32; 3],
    /// Starting yaw in degrees.
    #[schemars(skip)]
    pub yaw: f32,
    /// Starting pitch in degrees.
    #[schemars(skip)]
    pub pitch: f32,
    /// Movement speed in distance units per second.
    #[schemars(title = "Movement Speed", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub movement_speed: f32,
    /// Degrees of rotation per unit of pointer motion.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub fov: f32,
    /// Clamp pitch short of straight up/down.
    #[schemars(title = "Constrain Pitch")]
    pub constrain_pitch: bool,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            fov: DEFAULT_FOV,
            constrain_pitch: true,
            znear: DEFAULT_ZNEAR,
            zfar: DEFAULT_ZFAR,
        }
    }
}
