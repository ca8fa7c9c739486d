pub mod camera;
pub mod math;
pub mod render;
pub mod transform;

pub use camera::Camera;
pub use transform::Transform;
