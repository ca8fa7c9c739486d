use crate::math::{self, Matrix4, Vector3};

/// Position, scale and orientation of a scene object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    position: Vector3,
    scale: Vector3,
    /// Rotation around the x, y and z axes in degrees.
    orientation: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::default(),
            scale: Vector3::new(1.),
            orientation: Vector3::default(),
        }
    }
}

impl Transform {
    pub fn new(position: Vector3, scale: Vector3, orientation: Vector3) -> Self {
        Self { position, scale, orientation }
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn scale(&self) -> Vector3 {
        self.scale
    }

    /// Rotation around the x, y and z axes in degrees.
    pub fn orientation(&self) -> Vector3 {
        self.orientation
    }

    pub fn position_mut(&mut self) -> &mut Vector3 {
        &mut self.position
    }

    pub fn scale_mut(&mut self) -> &mut Vector3 {
        &mut self.scale
    }

    pub fn orientation_mut(&mut self) -> &mut Vector3 {
        &mut self.orientation
    }

    /// The model matrix: scales first, then rotates, then translates.
    ///
    /// Computed from the current fields on every call.
    pub fn matrix(&self) -> Matrix4 {
        math::translation(self.position) * math::rotation(self.orientation) * math::scale(self.scale)
    }
}
