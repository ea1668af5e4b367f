use nalgebra::{Isometry3, Matrix4, Point3, Translation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::camera::camera::Camera;
use crate::maths;

/// Camera placed like any other object in the scene, by a position and an
/// XYZ Euler rotation. Its view is the inverse of that placement.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PerspectiveCamera {
    pub position: Point3<f32>,
    pub rotation: Vector3<f32>,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    fn placement(&self) -> Isometry3<f32> {
        Isometry3::from_parts(
            Translation3::from(self.position.coords),
            maths::euler_xyz(&self.rotation),
        )
    }
}

impl Camera for PerspectiveCamera {
    fn position(&self) -> Point3<f32> {
        self.position
    }

    fn view(&self) -> Matrix4<f32> {
        self.placement().inverse().to_homogeneous()
    }

    fn projection(&self, aspect: f32) -> Matrix4<f32> {
        maths::perspective(self.fov_degrees, aspect, self.near, self.far)
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 500.0, 1000.0),
            rotation: Vector3::new(-0.5, 0.0, 0.0),
            fov_degrees: 60.0,
            near: 1.0,
            far: 10000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn unrotated_camera_only_translates() {
        let camera = PerspectiveCamera {
            position: Point3::new(1.0, 2.0, 3.0),
            rotation: Vector3::zeros(),
            ..PerspectiveCamera::default()
        };

        let view = camera.view();
        assert_relative_eq!(
            view.transform_point(&Point3::new(1.0, 2.0, 3.0)),
            Point3::origin(),
            epsilon = 1e-5
        );
    }

    #[test]
    fn view_inverts_placement() {
        let camera = PerspectiveCamera::default();
        let placement = camera.placement().to_homogeneous();

        assert_relative_eq!(camera.view() * placement, Matrix4::identity(), epsilon = 1e-4);
    }

    #[test]
    fn default_camera_tilts_down_at_origin() {
        let camera = PerspectiveCamera::default();
        let origin_in_view = camera.view().transform_point(&Point3::origin());

        // In front of the camera
        assert!(origin_in_view.z < 0.0);
        // atan(500 / 1000) is a little under the 0.5 rad pitch, so the
        // origin ends up just above the line of sight
        assert!(origin_in_view.y > 0.0);
        assert_relative_eq!(origin_in_view.x, 0.0, epsilon = 1e-3);
    }
}
