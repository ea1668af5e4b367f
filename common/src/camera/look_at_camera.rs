use nalgebra::{Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::camera::camera::Camera;
use crate::maths;

/// Fixed camera aimed at a point.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LookAtCamera {
    pub eye: Point3<f32>,
    pub center: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera for LookAtCamera {
    fn position(&self) -> Point3<f32> {
        self.eye
    }

    fn view(&self) -> Matrix4<f32> {
        maths::look_at(&self.eye, &self.center, &self.up)
    }

    fn projection(&self, aspect: f32) -> Matrix4<f32> {
        maths::perspective(self.fov_degrees, aspect, self.near, self.far)
    }
}

impl Default for LookAtCamera {
    fn default() -> Self {
        Self {
            eye: Point3::new(0.0, 0.0, 20.0),
            center: Point3::origin(),
            up: Vector3::y(),
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_looks_down_negative_z() {
        let camera = LookAtCamera::default();

        let origin_in_view = camera.view().transform_point(&Point3::origin());
        assert_relative_eq!(origin_in_view, Point3::new(0.0, 0.0, -20.0), epsilon = 1e-5);
        assert_eq!(camera.position(), Point3::new(0.0, 0.0, 20.0));
    }

    #[test]
    fn view_projection_keeps_origin_centered() {
        let camera = LookAtCamera::default();
        let vp = camera.view_projection(16.0 / 9.0);

        let origin = vp.transform_point(&Point3::origin());
        assert_relative_eq!(origin.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(origin.y, 0.0, epsilon = 1e-6);
        assert!(origin.z > -1.0 && origin.z < 1.0);
    }

    #[test]
    fn partial_settings_fill_defaults() {
        let camera: LookAtCamera = serde_json::from_str(r#"{ "fov_degrees": 60.0 }"#).unwrap();

        assert_relative_eq!(camera.fov_degrees, 60.0);
        assert_eq!(camera.eye, LookAtCamera::default().eye);
    }
}
