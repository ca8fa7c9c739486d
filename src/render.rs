//! Hands camera and transform matrices to whatever binds shader uniforms.

use crate::camera::Camera;
use crate::math::{Matrix4, Vector3};
use crate::transform::Transform;

use anyhow::Context;

use std::collections::HashMap;

pub const VIEW: &str = "view";
pub const PROJECTION: &str = "projection";
pub const EYE: &str = "eye";
pub const MODEL: &str = "model";

/// Something that accepts named shader uniforms, e.g. a bound shader program.
pub trait UniformSink {
    /// Sets a 4x4 matrix from 16 column major floats.
    fn set_mat4(&mut self, name: &str, value: &[f32]) -> Result<(), anyhow::Error>;

    /// Sets a three component vector.
    fn set_vec3(&mut self, name: &str, value: &[f32]) -> Result<(), anyhow::Error>;
}

/// All per draw uniforms laid out for a uniform buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct FrameUniforms {
    pub model: Matrix4,
    pub view: Matrix4,
    pub projection: Matrix4,
    pub eye: Vector3,
}

impl FrameUniforms {
    pub fn new(camera: &Camera, transform: &Transform) -> Self {
        Self {
            model: transform.matrix(),
            view: *camera.view_matrix(),
            projection: *camera.perspective_matrix(),
            eye: camera.position(),
        }
    }

    pub fn upload<S: UniformSink>(&self, sink: &mut S) -> Result<(), anyhow::Error> {
        set_mat4(sink, VIEW, &self.view)?;
        set_mat4(sink, PROJECTION, &self.projection)?;
        set_vec3(sink, EYE, &self.eye)?;
        set_mat4(sink, MODEL, &self.model)
    }
}

/// Sets the camera's cached view and projection matrices and its position.
pub fn upload_camera<S: UniformSink>(camera: &Camera, sink: &mut S) -> Result<(), anyhow::Error> {
    set_mat4(sink, VIEW, camera.view_matrix())?;
    set_mat4(sink, PROJECTION, camera.perspective_matrix())?;
    set_vec3(sink, EYE, &camera.position())
}

/// Sets the model matrix of `transform`.
pub fn upload_model<S: UniformSink>(transform: &Transform, sink: &mut S) -> Result<(), anyhow::Error> {
    set_mat4(sink, MODEL, &transform.matrix())
}

fn set_mat4<S: UniformSink>(sink: &mut S, name: &str, value: &Matrix4) -> Result<(), anyhow::Error> {
    log::trace!("Setting uniform {name} to {:?}", value.as_slice());
    sink.set_mat4(name, value.as_slice())
        .inspect_err(|err| log::warn!("Uniform {name} was rejected: {err}"))
        .with_context(|| format!("Failed to set mat4 uniform {name}"))
}

fn set_vec3<S: UniformSink>(sink: &mut S, name: &str, value: &Vector3) -> Result<(), anyhow::Error> {
    log::trace!("Setting uniform {name} to {:?}", value.as_slice());
    sink.set_vec3(name, value.as_slice())
        .inspect_err(|err| log::warn!("Uniform {name} was rejected: {err}"))
        .with_context(|| format!("Failed to set vec3 uniform {name}"))
}

/// Keeps the last value set for every uniform.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    mat4s: HashMap<String, [f32; 16]>,
    vec3s: HashMap<String, [f32; 3]>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mat4(&self, name: &str) -> Option<Matrix4> {
        self.mat4s.get(name).map(|values| Matrix4::from_flat(*values))
    }

    pub fn vec3(&self, name: &str) -> Option<Vector3> {
        self.vec3s.get(name).map(|&values| Vector3::from(values))
    }

    pub fn len(&self) -> usize {
        self.mat4s.len() + self.vec3s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UniformSink for RecordingSink {
    fn set_mat4(&mut self, name: &str, value: &[f32]) -> Result<(), anyhow::Error> {
        let value: [f32; 16] = value.try_into()
            .with_context(|| format!("expected 16 floats, got {}", value.len()))?;
        self.mat4s.insert(name.to_owned(), value);
        Ok(())
    }

    fn set_vec3(&mut self, name: &str, value: &[f32]) -> Result<(), anyhow::Error> {
        let value: [f32; 3] = value.try_into()
            .with_context(|| format!("expected 3 floats, got {}", value.len()))?;
        self.vec3s.insert(name.to_owned(), value);
        Ok(())
    }
}
