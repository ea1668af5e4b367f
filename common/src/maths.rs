use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};

pub fn raw_matrix(matrix: Matrix4<f32>) -> [[f32; 4]; 4] {
    <[[f32; 4]; 4]>::from(matrix)
}

/// Width over height, falling back to 1 while the window has no height
/// (minimised windows report a zero size).
pub fn aspect_ratio(window_width: f32, window_height: f32) -> f32 {
    if window_width <= 0.0 || window_height <= 0.0 {
        return 1.0;
    }

    window_width / window_height
}

/// OpenGL style projection with a vertical field of view given in degrees.
pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    Matrix4::new_perspective(aspect, fov_degrees.to_radians(), near, far)
}

pub fn look_at(eye: &Point3<f32>, center: &Point3<f32>, up: &Vector3<f32>) -> Matrix4<f32> {
    // There is no viewing direction to build a basis from
    if eye == center {
        return Matrix4::identity();
    }

    Matrix4::look_at_rh(eye, center, up)
}

pub fn mvp(projection: &Matrix4<f32>, view: &Matrix4<f32>, model: &Matrix4<f32>) -> Matrix4<f32> {
    projection * view * model
}

/// Euler rotation applied about X, then the rotated Y, then the rotated Z.
pub fn euler_xyz(rotation: &Vector3<f32>) -> UnitQuaternion<f32> {
    UnitQuaternion::from_axis_angle(&Vector3::x_axis(), rotation.x)
        * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), rotation.y)
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), rotation.z)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector4;

    use super::*;

    fn project(matrix: &Matrix4<f32>, point: Vector3<f32>) -> Vector3<f32> {
        let clip = matrix * Vector4::new(point.x, point.y, point.z, 1.0);
        clip.xyz() / clip.w
    }

    #[test]
    fn aspect_ratio_of_zero_height_window() {
        assert_relative_eq!(aspect_ratio(800.0, 0.0), 1.0);
        assert_relative_eq!(aspect_ratio(0.0, 0.0), 1.0);
        assert_relative_eq!(aspect_ratio(800.0, 400.0), 2.0);
    }

    #[test]
    fn perspective_maps_near_and_far_to_clip_bounds() {
        let projection = perspective(45.0, 1.0, 0.1, 100.0);

        let near = project(&projection, Vector3::new(0.0, 0.0, -0.1));
        let far = project(&projection, Vector3::new(0.0, 0.0, -100.0));

        assert_relative_eq!(near.z, -1.0, epsilon = 1e-4);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn perspective_uses_vertical_fov_in_degrees() {
        let projection = perspective(90.0, 2.0, 0.1, 100.0);

        // tan(45 deg) = 1, so y = -z lands on the top edge
        let top = project(&projection, Vector3::new(0.0, 5.0, -5.0));
        assert_relative_eq!(top.y, 1.0, epsilon = 1e-5);

        // Horizontal extent is stretched by the aspect ratio
        let right = project(&projection, Vector3::new(10.0, 0.0, -5.0));
        assert_relative_eq!(right.x, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let view = look_at(
            &Point3::new(0.0, 0.0, 20.0),
            &Point3::origin(),
            &Vector3::y(),
        );

        let eye_in_view = view.transform_point(&Point3::new(0.0, 0.0, 20.0));
        assert_relative_eq!(eye_in_view, Point3::origin(), epsilon = 1e-5);

        let center_in_view = view.transform_point(&Point3::origin());
        assert_relative_eq!(center_in_view, Point3::new(0.0, 0.0, -20.0), epsilon = 1e-5);
    }

    #[test]
    fn look_at_same_point_is_identity() {
        let point = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(look_at(&point, &point, &Vector3::y()), Matrix4::identity());
    }

    #[test]
    fn mvp_of_triangle_apex() {
        let projection = perspective(45.0, 1.0, 0.1, 100.0);
        let view = look_at(
            &Point3::new(0.0, 0.0, 20.0),
            &Point3::origin(),
            &Vector3::y(),
        );
        let mvp = mvp(&projection, &view, &Matrix4::identity());

        let apex = project(&mvp, Vector3::new(0.0, 1.0, 0.0));
        let focal_length = 1.0 / 22.5_f32.to_radians().tan();

        assert_relative_eq!(apex.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(apex.y, focal_length / 20.0, epsilon = 1e-5);
    }

    #[test]
    fn mvp_applies_model_first() {
        let projection = Matrix4::identity();
        let view = Matrix4::new_translation(&Vector3::new(1.0, 0.0, 0.0));
        let model = Matrix4::new_nonuniform_scaling(&Vector3::new(2.0, 2.0, 2.0));

        let point = mvp(&projection, &view, &model).transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(point, Point3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn euler_xyz_single_axis() {
        let rotation = euler_xyz(&Vector3::new(0.5, 0.0, 0.0));
        let expected = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), 0.5);

        assert_relative_eq!(rotation, expected, epsilon = 1e-6);
    }

    #[test]
    fn euler_xyz_applies_x_before_y() {
        // Rotating +Z by 90 deg about Y gives +X, which X rotation leaves alone
        let rotation = euler_xyz(&Vector3::new(
            std::f32::consts::FRAC_PI_2,
            std::f32::consts::FRAC_PI_2,
            0.0,
        ));

        let rotated = rotation * Vector3::z();
        assert_relative_eq!(rotated, Vector3::x(), epsilon = 1e-6);
    }

    #[test]
    fn raw_matrix_is_column_major() {
        let raw = raw_matrix(Matrix4::new_translation(&Vector3::new(1.0, 2.0, 3.0)));

        assert_eq!(raw[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(raw[0], [1.0, 0.0, 0.0, 0.0]);
    }
}
