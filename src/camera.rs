use crate::math::{self, Deg, Matrix4, Vector3};

const SPEED: f32 = 0.1;
const ROTATION_SENSITIVITY: f32 = 0.5;

/// A perspective camera with Euler angle orientation.
///
/// The view and perspective matrices are cached and every mutator recomputes
/// the ones it affects, so the getters never return stale matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    fov: f32,
    aspect: f32,
    near_clip: f32,
    far_clip: f32,

    position: Vector3,
    /// Rotation around the x, y and z axes in degrees.
    orientation: Vector3,

    up: Vector3,
    forward: Vector3,
    right: Vector3,

    speed: f32,
    rotation_sensitivity: f32,

    view: Matrix4,
    perspective: Matrix4,
}

impl Default for Camera {
    /// A camera at the origin looking down the negative z axis with a 67° field of view,
    /// a square aspect ratio and clip planes at 0.1 and 100.
    fn default() -> Self {
        Self::new(
            Vector3::default(),
            Vector3::from([0., 0., -1.]),
            Self::DEFAULT_FOV,
            Self::DEFAULT_ASPECT,
            Self::DEFAULT_NEAR_CLIP,
            Self::DEFAULT_FAR_CLIP,
        )
    }
}

impl Camera {
    pub const DEFAULT_FOV: f32 = 67.;
    pub const DEFAULT_ASPECT: f32 = 1.;
    pub const DEFAULT_NEAR_CLIP: f32 = 0.1;
    pub const DEFAULT_FAR_CLIP: f32 = 100.;

    /// Creates a camera at `position` with an unrotated orientation.
    ///
    /// `direction` only seeds the forward vector: the basis is re-derived from the
    /// view matrix right away, like after every move or rotation.
    pub fn new(
        position: Vector3,
        direction: Vector3,
        fov: f32,
        aspect: f32,
        near_clip: f32,
        far_clip: f32,
    ) -> Self {
        let up = Vector3::from([0., 1., 0.]);
        let mut camera = Self {
            fov,
            aspect,
            near_clip,
            far_clip,
            position,
            orientation: Vector3::default(),
            up,
            forward: direction,
            right: up.cross(direction),
            speed: SPEED,
            rotation_sensitivity: ROTATION_SENSITIVITY,
            view: Matrix4::unit(),
            perspective: Matrix4::unit(),
        };
        camera.update_view();
        camera.update_perspective();
        log::debug!("Created camera at {:?} with fov {fov}°", camera.position.as_slice());
        camera
    }

    /// The camera every new scene starts with.
    pub fn scene_default() -> Self {
        Self::new(
            Vector3::from([0., 0., 15.]),
            Vector3::from([0., -1., 0.]),
            67.,
            1.,
            0.01,
            1000.,
        )
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// The forward vector of the camera's current basis.
    pub fn direction(&self) -> Vector3 {
        self.forward
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    pub fn right(&self) -> Vector3 {
        self.right
    }

    pub fn orientation(&self) -> Vector3 {
        self.orientation
    }

    pub fn view_matrix(&self) -> &Matrix4 {
        &self.view
    }

    pub fn perspective_matrix(&self) -> &Matrix4 {
        &self.perspective
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn rotation_sensitivity(&self) -> f32 {
        self.rotation_sensitivity
    }

    /// Sets the field of view in degrees.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
        self.update_perspective();
    }

    /// Sets the aspect ratio, usually the framebuffer's width divided by its height.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_perspective();
    }

    pub fn set_near_clip(&mut self, near_clip: f32) {
        self.near_clip = near_clip;
        self.update_perspective();
    }

    pub fn set_far_clip(&mut self, far_clip: f32) {
        self.far_clip = far_clip;
        self.update_perspective();
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
        self.update_view();
    }

    pub fn set_orientation(&mut self, orientation: Vector3) {
        self.orientation = orientation;
        self.update_view();
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn set_rotation_sensitivity(&mut self, rotation_sensitivity: f32) {
        self.rotation_sensitivity = rotation_sensitivity;
    }

    /// Moves the camera along its own axes.
    ///
    /// `offset.x` moves along the right vector, `offset.y` along the up vector and
    /// `offset.z` along the forward vector, scaled by the camera speed.
    pub fn move_by(&mut self, offset: Vector3) {
        let offset = self.forward * offset.z() + self.right * offset.x() + self.up * offset.y();
        self.position += offset * self.speed;
        self.update_view();
    }

    /// Adds `offset`, scaled by the rotation sensitivity, to the orientation.
    pub fn rotate(&mut self, offset: Vector3) {
        self.orientation += offset * self.rotation_sensitivity;
        self.update_view();
    }

    fn update_view(&mut self) {
        let r = math::rotation(self.orientation);
        let t = math::translation(-self.position);
        self.view = r * t;

        // the basis vectors are the rows of the rotation block
        let view = &self.view;
        self.forward = Vector3::from([view[(0, 2)], view[(1, 2)], view[(2, 2)]]);
        self.up = Vector3::from([view[(0, 1)], view[(1, 1)], view[(2, 1)]]);
        self.right = Vector3::from([view[(0, 0)], view[(1, 0)], view[(2, 0)]]);
        log::trace!("Updated camera view, forward is now {:?}", self.forward.as_slice());
    }

    fn update_perspective(&mut self) {
        self.perspective = math::perspective(Deg(self.fov), self.aspect, self.near_clip, self.far_clip);
        log::trace!(
            "Updated camera perspective: fov {}°, aspect {}, clip {}..{}",
            self.fov, self.aspect, self.near_clip, self.far_clip,
        );
    }
}
