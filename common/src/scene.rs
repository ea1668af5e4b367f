use color_eyre::Result;
use color_eyre::eyre::eyre;
use nalgebra::{Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::colors::{Color, ColorExt};
use crate::config::CubesSettings;
use crate::geometry::BoxGeometry;
use crate::light::DirectionalLight;
use crate::transform::Transform;

/// Index of a geometry owned by a [`Scene`], shared by every mesh drawn with it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeometryHandle(usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: Color::from_named(palette::named::WHITE),
            specular: <Color as ColorExt>::from_hex(0x111111),
            shininess: 30.0,
        }
    }
}

/// Cloning a mesh keeps the geometry handle, so both copies draw the same
/// buffers with their own material and transform.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub geometry: GeometryHandle,
    pub material: Material,
    pub transform: Transform,
}

/// Rotation applied every frame, in radians. Mesh `i` turns by
/// `base + i * step` on both the X and Y axes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spin {
    pub base: Vector2<f32>,
    pub step: f32,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            base: Vector2::new(0.01, 0.02),
            step: 0.01,
        }
    }
}

impl Spin {
    pub fn for_mesh(&self, index: usize) -> Vector3<f32> {
        let offset = index as f32 * self.step;
        Vector3::new(self.base.x + offset, self.base.y + offset, 0.0)
    }
}

pub struct Scene {
    pub geometries: Vec<BoxGeometry>,
    pub meshes: Vec<Mesh>,
    pub lights: Vec<DirectionalLight>,
    pub clear_color: Color,
    pub spin: Spin,
    frames: u64,
}

impl Scene {
    pub fn new(clear_color: Color) -> Self {
        Self {
            geometries: Vec::new(),
            meshes: Vec::new(),
            lights: Vec::new(),
            clear_color,
            spin: Spin::default(),
            frames: 0,
        }
    }

    pub fn from_settings(settings: &CubesSettings) -> Result<Self> {
        let mut scene = Scene::new(<Color as ColorExt>::from_hex(settings.clear_color));
        scene.spin = settings.spin;

        let cube = &settings.cube;
        let geometry = scene.add_geometry(BoxGeometry::new(
            cube.size.x,
            cube.size.y,
            cube.size.z,
        )?);

        let (first_position, cloned_positions) = cube
            .positions
            .split_first()
            .ok_or_else(|| eyre!("The scene needs at least one cube position"))?;

        let original = Mesh {
            geometry,
            material: Material {
                diffuse: <Color as ColorExt>::from_hex(cube.color),
                specular: <Color as ColorExt>::from_hex(cube.specular),
                shininess: cube.shininess,
            },
            transform: Transform::from_translation(first_position.coords),
        };

        for position in cloned_positions {
            let mut clone = original.clone();
            clone.transform = Transform::from_translation(position.coords);
            scene.meshes.push(clone);
        }
        scene.meshes.insert(0, original);

        scene.lights.push(DirectionalLight {
            color: <Color as ColorExt>::from_hex(settings.light.color),
            intensity: settings.light.intensity,
            position: settings.light.position,
            target: settings.light.target,
        });

        log::info!(
            "Built scene with {} meshes and {} lights",
            scene.meshes.len(),
            scene.lights.len()
        );

        Ok(scene)
    }

    pub fn add_geometry(&mut self, geometry: BoxGeometry) -> GeometryHandle {
        self.geometries.push(geometry);
        GeometryHandle(self.geometries.len() - 1)
    }

    pub fn geometry(&self, handle: GeometryHandle) -> Option<&BoxGeometry> {
        self.geometries.get(handle.0)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances every mesh by one frame of spin.
    pub fn animate(&mut self) {
        for (index, mesh) in self.meshes.iter_mut().enumerate() {
            mesh.transform.rotate_by(self.spin.for_mesh(index));
            mesh.transform.compute_transform_matrix();
        }

        self.frames += 1;
    }

    pub fn main_light(&self) -> DirectionalLight {
        self.lights.first().cloned().unwrap_or_default()
    }

    pub fn centroid(&self) -> Point3<f32> {
        if self.meshes.is_empty() {
            return Point3::origin();
        }

        let sum = self
            .meshes
            .iter()
            .map(|mesh| mesh.transform.translation().vector)
            .sum::<Vector3<f32>>();

        Point3::from(sum / self.meshes.len() as f32)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_settings_build_two_red_cubes() {
        let scene = Scene::from_settings(&CubesSettings::default()).unwrap();

        assert_eq!(scene.meshes.len(), 2);
        assert_eq!(scene.geometries.len(), 1);
        assert_eq!(scene.meshes[0].geometry, scene.meshes[1].geometry);
        assert_eq!(scene.meshes[0].material, scene.meshes[1].material);
        assert_eq!(scene.meshes[0].material.diffuse, <Color as ColorExt>::from_hex(0xff0000));
        assert_eq!(scene.meshes[0].material.specular, <Color as ColorExt>::from_hex(0x222222));

        assert_relative_eq!(scene.meshes[0].transform.translation().vector.x, 0.0);
        assert_relative_eq!(scene.meshes[1].transform.translation().vector.x, 300.0);
        assert_relative_eq!(scene.centroid(), Point3::new(150.0, 0.0, 0.0));
    }

    #[test]
    fn default_light_and_background() {
        let scene = Scene::from_settings(&CubesSettings::default()).unwrap();
        let light = scene.main_light();

        assert_eq!(light.color, <Color as ColorExt>::from_hex(0xffffff));
        assert_relative_eq!(light.intensity, 3.0);
        assert_relative_eq!(light.position, Point3::new(-50.0, 200.0, 50.0));
        assert_eq!(scene.clear_color, <Color as ColorExt>::from_hex(0x333333));
    }

    #[test]
    fn geometry_handles_resolve() {
        let scene = Scene::from_settings(&CubesSettings::default()).unwrap();
        let geometry = scene.geometry(scene.meshes[0].geometry).unwrap();

        assert_eq!(geometry.vertices.len(), 24);
        assert!(scene.geometry(GeometryHandle(7)).is_none());
    }

    #[test]
    fn animate_spins_later_meshes_faster() {
        let mut scene = Scene::from_settings(&CubesSettings::default()).unwrap();

        for _ in 0..100 {
            scene.animate();
        }

        assert_eq!(scene.frames(), 100);
        assert_relative_eq!(
            scene.meshes[0].transform.rotation(),
            Vector3::new(1.0, 2.0, 0.0),
            epsilon = 1e-4
        );
        assert_relative_eq!(
            scene.meshes[1].transform.rotation(),
            Vector3::new(2.0, 3.0, 0.0),
            epsilon = 1e-4
        );
    }

    #[test]
    fn animate_keeps_matrices_current() {
        let mut scene = Scene::from_settings(&CubesSettings::default()).unwrap();
        scene.animate();

        let mut expected = scene.meshes[1].transform.clone();
        expected.set_rotation(expected.rotation());
        expected.compute_transform_matrix();

        assert_relative_eq!(scene.meshes[1].transform.matrix(), expected.matrix());
    }

    #[test]
    fn spin_for_random_mesh_counts() {
        let spin = Spin::default();

        for _ in 0..20 {
            let index = fastrand::usize(0..1000);
            let delta = spin.for_mesh(index);

            assert_relative_eq!(delta.x, 0.01 + index as f32 / 100.0, epsilon = 1e-4);
            assert_relative_eq!(delta.y, 0.02 + index as f32 / 100.0, epsilon = 1e-4);
            assert_relative_eq!(delta.z, 0.0);
        }
    }

    #[test]
    fn empty_position_list_is_an_error() {
        let mut settings = CubesSettings::default();
        settings.cube.positions.clear();

        assert!(Scene::from_settings(&settings).is_err());
    }

    #[test]
    fn empty_scene_has_default_light() {
        let scene = Scene::new(<Color as ColorExt>::from_hex(0));

        assert_eq!(scene.main_light(), DirectionalLight::default());
        assert_eq!(scene.centroid(), Point3::origin());
    }
}
