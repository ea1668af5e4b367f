use color_eyre::Result;
use color_eyre::eyre::eyre;
use fxhash::FxHashMap;
use glium::glutin::surface::WindowSurface;
use glium::{
    BackfaceCullingMode, Depth, DepthTest, Display, DrawParameters, Frame, Program, Surface,
    uniform,
};
use nalgebra::Matrix4;

use crate::camera::Camera;
use crate::colors::{Color, ColorExt};
use crate::geometry::{ColoredMesh, GpuMesh};
use crate::light::ShaderLight;
use crate::maths;
use crate::scene::{GeometryHandle, Scene};
use crate::shader::{self, ShaderSet};

pub struct Renderer {
    aspect: f32,

    vertex_color_program: Program,

    phong_program: Program,
    // Scene geometry is uploaded the first time a mesh refers to it
    gpu_meshes: FxHashMap<GeometryHandle, GpuMesh>,
}

impl Renderer {
    pub fn new(
        window_width: f32,
        window_height: f32,
        shaders: &ShaderSet,
        display: &Display<WindowSurface>,
    ) -> Result<Self> {
        let vertex_color_program =
            shader::new_program(display, &shaders.vertex_color, shaders.alert_on_error)?;

        let phong_program = shader::new_program(display, &shaders.phong, shaders.alert_on_error)?;

        Ok(Self {
            aspect: maths::aspect_ratio(window_width, window_height),
            vertex_color_program,
            phong_program,
            gpu_meshes: FxHashMap::default(),
        })
    }

    pub fn update_projection_matrices(&mut self, window_width: f32, window_height: f32) {
        self.aspect = maths::aspect_ratio(window_width, window_height);
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn clear(target: &mut Frame, color: Color, depth: f32) {
        target.clear_color_and_depth(color.to_linear_components_tuple(), depth);
    }

    pub fn render_colored_mesh(
        &self,
        mesh: &ColoredMesh,
        camera: &impl Camera,
        model: &Matrix4<f32>,
        target: &mut Frame,
    ) -> Result<()> {
        let mvp = maths::mvp(&camera.projection(self.aspect), &camera.view(), model);

        let uniforms = uniform! {
            mvpMatrix: maths::raw_matrix(mvp),
        };

        target.draw(
            (&mesh.positions, &mesh.colors),
            &mesh.indices,
            &self.vertex_color_program,
            &uniforms,
            &DrawParameters {
                depth: Depth {
                    test: DepthTest::IfLessOrEqual,
                    write: true,
                    ..Default::default()
                },
                ..DrawParameters::default()
            },
        )?;

        Ok(())
    }

    pub fn render_scene(
        &mut self,
        scene: &Scene,
        camera: &impl Camera,
        display: &Display<WindowSurface>,
        target: &mut Frame,
    ) -> Result<()> {
        for mesh in &scene.meshes {
            if !self.gpu_meshes.contains_key(&mesh.geometry) {
                let geometry = scene
                    .geometry(mesh.geometry)
                    .ok_or_else(|| eyre!("Mesh refers to missing geometry {:?}", mesh.geometry))?;

                log::debug!("Uploading geometry {:?}", mesh.geometry);
                self.gpu_meshes
                    .insert(mesh.geometry, GpuMesh::upload(display, geometry)?);
            }
        }

        let vp = maths::raw_matrix(camera.view_projection(self.aspect));
        let camera_position = <[f32; 3]>::from(camera.position());
        let light = ShaderLight::from(&scene.main_light());

        let draw_parameters = DrawParameters {
            depth: Depth {
                test: DepthTest::IfLess,
                write: true,
                ..Default::default()
            },
            backface_culling: BackfaceCullingMode::CullClockwise,
            ..DrawParameters::default()
        };

        for mesh in &scene.meshes {
            let Some(gpu_mesh) = self.gpu_meshes.get(&mesh.geometry) else {
                continue;
            };

            let uniforms = uniform! {
                model: mesh.transform.raw_matrix(),
                vp: vp,
                camera_position: camera_position,
                light_direction: light.light_direction,
                light_color: light.light_color,
                diffuse_color: <[f32; 3]>::from(mesh.material.diffuse.to_linear_vector3()),
                specular_color: <[f32; 3]>::from(mesh.material.specular.to_linear_vector3()),
                shininess: mesh.material.shininess,
            };

            target.draw(
                &gpu_mesh.vertices,
                &gpu_mesh.indices,
                &self.phong_program,
                &uniforms,
                &draw_parameters,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_takes_window_size_before_display() {
        // Checked at compile time, no GL context needed
        let _: fn(f32, f32, &ShaderSet, &Display<WindowSurface>) -> Result<Renderer> =
            Renderer::new;
    }
}
