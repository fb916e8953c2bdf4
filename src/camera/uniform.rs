use glam::Mat4;

use super::core::Camera;
use super::projection::Projection;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Uniform-buffer layout holding the camera matrices and view position.
pub struct CameraUniform {
    /// World-to-view matrix.
    pub view: [[f32; 4]; 4],
    /// View-to-clip matrix.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position, for specular lighting.
    pub view_position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view_position: [0.0; 3],
            fov: 90.0,
        }
    }

    /// Update every field from the camera's current state.
    pub fn update(&mut self, camera: &Camera, projection: &Projection) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.projection = projection.matrix(camera.fov()).to_cols_array_2d();
        self.view_position = camera.position().to_array();
        self.fov = camera.fov();
    }
}

#[cfg(test)]
mod tests {
    use std::mem::size_of;

    use glam::Vec3;

    use super::*;

    #[test]
    fn uniform_is_tightly_packed() {
        assert_eq!(size_of::<CameraUniform>(), 144);
        let uniform = CameraUniform::new();
        let bytes = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 144);
    }

    #[test]
    fn update_copies_camera_state() {
        let mut camera = Camera::at(Vec3::new(1.0, 2.0, 3.0));
        camera.process_zoom(30.0);
        let projection = Projection::new(1280, 720);

        let mut uniform = CameraUniform::new();
        uniform.update(&camera, &projection);

        assert_eq!(uniform.view_position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.fov, 60.0);
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(
            uniform.projection,
            projection.matrix(60.0).to_cols_array_2d()
        );
    }
}
