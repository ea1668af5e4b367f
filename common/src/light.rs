use nalgebra::{Point3, Vector3};

use crate::colors::{Color, ColorExt};

/// Parallel light travelling from `position` towards `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Point3<f32>,
    pub target: Point3<f32>,
}

impl DirectionalLight {
    pub fn direction(&self) -> Vector3<f32> {
        // Coincident points have no direction, shine straight down instead
        (self.target - self.position)
            .try_normalize(f32::EPSILON)
            .unwrap_or(-Vector3::y())
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Color::from_named(palette::named::WHITE),
            intensity: 1.0,
            position: Point3::new(0.0, 1.0, 0.0),
            target: Point3::origin(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShaderLight {
    pub light_direction: [f32; 3],
    pub light_color: [f32; 3],
}

impl From<&DirectionalLight> for ShaderLight {
    fn from(light: &DirectionalLight) -> Self {
        Self {
            light_direction: light.direction().into(),
            light_color: (light.color.to_linear_vector3() * light.intensity).into(),
        }
    }
}
