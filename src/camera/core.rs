use glam::{Mat4, Vec3};

use super::command::CameraCommand;
use super::movement::CameraMovement;
use super::projection::Projection;
use crate::options::CameraOptions;

/// Default yaw in degrees. -90 points the initial forward vector along -Z.
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees.
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in distance units per second.
pub const DEFAULT_MOVEMENT_SPEED: f32 = 10.0;
/// Default degrees of rotation per unit of pointer motion.
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;
/// Default vertical field of view in degrees.
pub const DEFAULT_FOV: f32 = 90.0;

/// Pitch limit in degrees when pitch is constrained.
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest allowed field of view in degrees.
pub const MIN_FOV: f32 = 1.0;
/// Widest allowed field of view in degrees.
pub const MAX_FOV: f32 = 100.0;

/// Free-fly camera driven by Euler angles.
///
/// `yaw` and `pitch` are the only independently settable orientation
/// state. `forward`, `right` and `up` are always derived from them and the
/// fixed `world_up`, so they stay unit length and mutually orthogonal.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,

    yaw: f32,
    pitch: f32,

    movement_speed: f32,
    mouse_sensitivity: f32,
    fov: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl Camera {
    /// Create a camera from vector arguments.
    #[must_use]
    pub fn new(
        position: Vec3,
        world_up: Vec3,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            forward: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            fov: DEFAULT_FOV,
        };
        camera.update_vectors();
        log::debug!("camera created at {position} (yaw {yaw}, pitch {pitch})");
        camera
    }

    /// Create a camera from scalar arguments. Equivalent to [`Camera::new`].
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_scalars(
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self::new(
            Vec3::new(pos_x, pos_y, pos_z),
            Vec3::new(up_x, up_y, up_z),
            yaw,
            pitch,
        )
    }

    /// Camera at `position` with default world-up, yaw and pitch.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    /// Build a camera from configuration. Out-of-range values are clamped
    /// the same way the update operations clamp them.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let pitch = if options.constrain_pitch {
            options.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
        } else {
            options.pitch
        };
        let mut camera = Self::new(
            Vec3::from_array(options.position),
            Vec3::from_array(options.world_up).normalize_or(Vec3::Y),
            options.yaw,
            pitch,
        );
        camera.movement_speed = options.movement_speed;
        camera.mouse_sensitivity = options.mouse_sensitivity;
        camera.set_fov(options.fov);
        camera
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit look direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Unit vector pointing to the camera's right.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit vector pointing up in the camera's frame.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Fixed global up reference.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Movement speed in distance units per second.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Degrees of rotation per unit of pointer motion.
    #[must_use]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Look-at view matrix (right-handed: `forward` maps to -Z, `up` to +Y).
    ///
    /// Rebuilt on every call.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
    }

    /// Combined projection * view matrix.
    #[must_use]
    pub fn view_projection(&self, projection: &Projection) -> Mat4 {
        projection.matrix(self.fov) * self.view_matrix()
    }

    // ── Tuning ───────────────────────────────────────────────────────

    /// Set the movement speed.
    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    /// Set the mouse sensitivity.
    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    /// Set the field of view, clamped to `MIN_FOV..=MAX_FOV`.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.clamp(MIN_FOV, MAX_FOV);
    }

    // ── Updates ──────────────────────────────────────────────────────

    /// Move along the forward or right axis for `delta_time` seconds.
    ///
    /// A negative `delta_time` is a caller error; it is applied as given
    /// and moves the camera the opposite way.
    pub fn process_movement(
        &mut self,
        direction: CameraMovement,
        delta_time: f32,
    ) {
        if delta_time < 0.0 {
            log::warn!("negative frame delta passed to camera: {delta_time}s");
        }
        let velocity = self.movement_speed * delta_time;
        let axis = match direction {
            CameraMovement::Forward | CameraMovement::Backward => self.forward,
            CameraMovement::Left | CameraMovement::Right => self.right,
        };
        self.position += axis * (direction.sign() * velocity);
    }

    /// Rotate by a pointer-motion delta in device units.
    ///
    /// With `constrain_pitch`, pitch is hard-clamped to
    /// `-PITCH_LIMIT..=PITCH_LIMIT` so the look direction never becomes
    /// parallel to `world_up`.
    pub fn process_look(
        &mut self,
        x_offset: f32,
        y_offset: f32,
        constrain_pitch: bool,
    ) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// [`Camera::process_look`] with pitch constrained.
    pub fn process_look_constrained(
        &mut self,
        x_offset: f32,
        y_offset: f32,
    ) {
        self.process_look(x_offset, y_offset, true);
    }

    /// Narrow (positive offset) or widen (negative offset) the field of
    /// view, clamped to `MIN_FOV..=MAX_FOV`.
    pub fn process_zoom(&mut self, y_offset: f32) {
        self.set_fov(self.fov - y_offset);
    }

    /// Apply a single update command.
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Move {
                direction,
                delta_time,
            } => self.process_movement(direction, delta_time),
            CameraCommand::Look {
                delta,
                constrain_pitch,
            } => self.process_look(delta.x, delta.y, constrain_pitch),
            CameraCommand::Zoom { delta } => self.process_zoom(delta),
        }
    }

    /// Recompute the basis from yaw, pitch and world-up.
    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        let forward =
            Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos);
        self.forward = forward.normalize();
        self.right = self.forward.cross(self.world_up).normalize();
        self.up = self.right.cross(self.forward).normalize();
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec4Swizzles};

    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPS, "{a} != {b}");
    }

    fn assert_orthonormal(camera: &Camera) {
        for v in [camera.forward(), camera.right(), camera.up()] {
            assert!((v.length() - 1.0).abs() < EPS, "not unit: {v}");
        }
        assert!(camera.forward().dot(camera.right()).abs() < EPS);
        assert!(camera.forward().dot(camera.up()).abs() < EPS);
        assert!(camera.right().dot(camera.up()).abs() < EPS);
    }

    #[test]
    fn default_looks_down_negative_z() {
        let camera = Camera::default();
        assert_vec_near(camera.forward(), Vec3::NEG_Z);
        assert_vec_near(camera.right(), Vec3::X);
        assert_vec_near(camera.up(), Vec3::Y);
        assert_eq!(camera.movement_speed(), 10.0);
        assert_eq!(camera.mouse_sensitivity(), 0.1);
        assert_eq!(camera.fov(), 90.0);
    }

    #[test]
    fn basis_is_orthonormal_across_angles() {
        let mut yaw = -720.0;
        while yaw <= 720.0 {
            let mut pitch = -89.0;
            while pitch <= 89.0 {
                let camera = Camera::new(Vec3::ZERO, Vec3::Y, yaw, pitch);
                assert_orthonormal(&camera);
                pitch += 11.0;
            }
            yaw += 37.5;
        }
    }

    #[test]
    fn zero_look_is_idempotent() {
        let mut camera =
            Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 30.0, 12.0);
        let before = camera.clone();
        camera.process_look_constrained(0.0, 0.0);
        assert_eq!(camera.position(), before.position());
        assert_eq!(camera.yaw(), before.yaw());
        assert_eq!(camera.pitch(), before.pitch());
        assert_vec_near(camera.forward(), before.forward());
        assert_vec_near(camera.right(), before.right());
        assert_vec_near(camera.up(), before.up());
    }

    #[test]
    fn pitch_saturates_at_limit() {
        let mut camera = Camera::default();
        for _ in 0..50 {
            camera.process_look_constrained(0.0, 1000.0);
            assert!(camera.pitch() <= PITCH_LIMIT);
        }
        assert_eq!(camera.pitch(), 89.0);
        assert_orthonormal(&camera);

        camera.process_look_constrained(0.0, -1_000_000.0);
        assert_eq!(camera.pitch(), -89.0);
    }

    #[test]
    fn unconstrained_pitch_passes_limit() {
        let mut camera = Camera::default();
        camera.process_look(0.0, 1000.0, false);
        assert_eq!(camera.pitch(), 100.0);
    }

    #[test]
    fn look_scales_by_sensitivity() {
        let mut camera = Camera::default();
        camera.process_look_constrained(100.0, 50.0);
        assert!((camera.yaw() - (-80.0)).abs() < EPS);
        assert!((camera.pitch() - 5.0).abs() < EPS);
    }

    #[test]
    fn zoom_clamps_to_range() {
        let mut camera = Camera::default();
        camera.process_zoom(-1000.0);
        assert_eq!(camera.fov(), 100.0);
        camera.process_zoom(1000.0);
        assert_eq!(camera.fov(), 1.0);
        camera.process_zoom(-44.0);
        assert_eq!(camera.fov(), 45.0);
    }

    #[test]
    fn zoom_leaves_orientation_alone() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::Y, 10.0, 20.0);
        let forward = camera.forward();
        camera.process_zoom(5.0);
        assert_eq!(camera.forward(), forward);
    }

    #[test]
    fn forward_movement_uses_speed_and_delta() {
        let mut camera = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        camera.process_movement(CameraMovement::Forward, 1.0);
        assert_vec_near(camera.position(), Vec3::new(0.0, 0.0, -7.0));
        camera.process_movement(CameraMovement::Backward, 0.5);
        assert_vec_near(camera.position(), Vec3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn strafe_is_reversible() {
        let mut camera =
            Camera::new(Vec3::new(4.0, -1.0, 2.0), Vec3::Y, 33.0, -17.0);
        let start = camera.position();
        camera.process_movement(CameraMovement::Left, 0.37);
        assert!((camera.position() - start).length() > 1.0);
        camera.process_movement(CameraMovement::Right, 0.37);
        assert_vec_near(camera.position(), start);
    }

    #[test]
    fn movement_does_not_rotate() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::Y, 45.0, 10.0);
        let before = camera.clone();
        camera.process_movement(CameraMovement::Right, 0.25);
        assert_eq!(camera.forward(), before.forward());
        assert_eq!(camera.yaw(), before.yaw());
    }

    #[test]
    fn view_maps_target_onto_negative_z() {
        let camera =
            Camera::new(Vec3::new(2.0, 5.0, -3.0), Vec3::Y, 127.0, 31.0);
        let target = camera.position() + camera.forward();
        let local = (camera.view_matrix() * target.extend(1.0)).xyz();
        assert!(local.x.abs() < EPS);
        assert!(local.y.abs() < EPS);
        assert!((local.z + 1.0).abs() < EPS);

        let above = camera.position() + camera.up();
        let local_up = (camera.view_matrix() * above.extend(1.0)).xyz();
        assert_vec_near(local_up, Vec3::Y);
    }

    #[test]
    fn view_reflects_latest_state() {
        let mut camera = Camera::default();
        let before = camera.view_matrix();
        camera.process_movement(CameraMovement::Forward, 0.1);
        assert_ne!(camera.view_matrix(), before);
    }

    #[test]
    fn constructors_agree() {
        let a = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 15.0, -40.0);
        let b =
            Camera::from_scalars(1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 15.0, -40.0);
        assert_vec_near(a.position(), b.position());
        assert_eq!(a.yaw(), b.yaw());
        assert_eq!(a.pitch(), b.pitch());
        assert_vec_near(a.forward(), b.forward());
        assert_vec_near(a.right(), b.right());
        assert_vec_near(a.up(), b.up());
    }

    #[test]
    fn from_options_clamps_inputs() {
        let options = CameraOptions {
            pitch: 120.0,
            fov: 400.0,
            movement_speed: 2.5,
            ..CameraOptions::default()
        };
        let camera = Camera::from_options(&options);
        assert_eq!(camera.pitch(), 89.0);
        assert_eq!(camera.fov(), 100.0);
        assert_eq!(camera.movement_speed(), 2.5);
        assert_orthonormal(&camera);
    }

    #[test]
    fn execute_dispatches_commands() {
        let mut camera = Camera::default();
        camera.execute(CameraCommand::Look {
            delta: Vec2::new(900.0, 0.0),
            constrain_pitch: true,
        });
        assert_vec_near(camera.forward(), Vec3::X);
        camera.execute(CameraCommand::Move {
            direction: CameraMovement::Forward,
            delta_time: 0.5,
        });
        assert_vec_near(camera.position(), Vec3::new(5.0, 0.0, 0.0));
        camera.execute(CameraCommand::Zoom { delta: 30.0 });
        assert_eq!(camera.fov(), 60.0);
    }
}
