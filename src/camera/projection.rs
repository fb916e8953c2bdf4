use glam::Mat4;

/// Default near clipping plane distance.
pub const DEFAULT_ZNEAR: f32 = 0.1;
/// Default far clipping plane distance.
pub const DEFAULT_ZFAR: f32 = 100.0;

/// Perspective projection parameters. The field of view lives on the
/// [`Camera`](super::Camera) since zoom input changes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Projection for a `width` x `height` viewport with default clip
    /// planes.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            aspect: aspect_ratio(width, height),
            znear: DEFAULT_ZNEAR,
            zfar: DEFAULT_ZFAR,
        }
    }

    /// Override the clip planes.
    #[must_use]
    pub fn with_clip_planes(mut self, znear: f32, zfar: f32) -> Self {
        self.znear = znear;
        self.zfar = zfar;
        self
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }

    /// Right-handed perspective matrix with [0,1] depth range.
    #[must_use]
    pub fn matrix(&self, fov_degrees: f32) -> Mat4 {
        Mat4::perspective_rh(
            fov_degrees.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

// Minimised windows report a zero height.
fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
