pub use camera::Camera;
pub use look_at_camera::LookAtCamera;
pub use perspective_camera::PerspectiveCamera;

mod camera;
mod look_at_camera;
mod perspective_camera;
