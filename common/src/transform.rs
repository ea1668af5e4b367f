use nalgebra::{Matrix4, Translation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::maths;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Transform {
    translation: Translation3<f32>,
    /// Euler angles in radians, applied in XYZ order.
    rotation: Vector3<f32>,
    #[serde(skip, default = "Matrix4::identity")]
    matrix: Matrix4<f32>,
    #[serde(skip, default = "dirty")]
    dirty: bool,
}

fn dirty() -> bool {
    true
}

impl Transform {
    pub fn from_translation(translation: Vector3<f32>) -> Self {
        let mut transform = Self::identity();
        transform.set_translation(Translation3::from(translation));
        transform.compute_transform_matrix();
        transform
    }

    pub fn compute_transform_matrix(&mut self) {
        if self.dirty {
            let rotation_matrix = maths::euler_xyz(&self.rotation).to_homogeneous();
            let translation_matrix = self.translation.to_homogeneous();

            self.matrix = translation_matrix * rotation_matrix;

            self.dirty = false;
        }
    }

    pub fn raw_matrix(&self) -> [[f32; 4]; 4] {
        maths::raw_matrix(self.matrix())
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        #[cfg(debug_assertions)]
        if self.dirty {
            log::warn!("Obtaining dirty transform matrix.")
        }

        self.matrix
    }

    pub fn rotation(&self) -> Vector3<f32> {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Vector3<f32>) {
        self.rotation = rotation;
        self.dirty = true;
    }

    pub fn rotate_by(&mut self, delta: Vector3<f32>) {
        self.rotation += delta;
        self.dirty = true;
    }

    pub fn translation(&self) -> Translation3<f32> {
        self.translation
    }

    pub fn set_translation(&mut self, translation: Translation3<f32>) {
        self.translation = translation;
        self.dirty = true;
    }

    pub fn identity() -> Self {
        Self::default()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Translation3::identity(),
            rotation: Vector3::zeros(),
            matrix: Matrix4::identity(),
            dirty: false,
        }
    }
}
