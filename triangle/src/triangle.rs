use color_eyre::Result;
use glium::Display;
use glium::glutin::surface::WindowSurface;
use nalgebra::Matrix4;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use common::application::Application;
use common::camera::LookAtCamera;
use common::colors::{Color, ColorExt};
use common::config::TriangleSettings;
use common::geometry::{ColoredGeometry, ColoredMesh};
use common::renderer::Renderer;
use common::shader::{ShaderPair, ShaderSet};

pub struct Triangle {
    renderer: Renderer,
    mesh: ColoredMesh,
    camera: LookAtCamera,
    model: Matrix4<f32>,
    clear_color: Color,
    clear_depth: f32,
}

impl Application for Triangle {
    type Settings = TriangleSettings;

    const ANIMATED: bool = false;

    fn new(
        window: &Window,
        display: &Display<WindowSurface>,
        _event_loop: &ActiveEventLoop,
        settings: &TriangleSettings,
    ) -> Result<Self> {
        let shaders = ShaderSet {
            vertex_color: ShaderPair::vertex_color().with_overrides(&settings.shaders)?,
            alert_on_error: settings.alert_on_shader_error,
            ..ShaderSet::default()
        };

        let inner_size = window.inner_size();
        let renderer = Renderer::new(
            inner_size.width as f32,
            inner_size.height as f32,
            &shaders,
            display,
        )?;

        let geometry = match &settings.geometry {
            Some(flat) => ColoredGeometry::new(&flat.positions, &flat.colors, &flat.indices)?,
            None => ColoredGeometry::triangle(),
        };
        let mesh = ColoredMesh::upload(display, &geometry)?;

        Ok(Self {
            renderer,
            mesh,
            camera: settings.camera.clone(),
            model: Matrix4::identity(),
            clear_color: <Color as ColorExt>::from_hex(settings.clear_color),
            clear_depth: settings.clear_depth,
        })
    }

    fn window_event(
        &mut self,
        event: WindowEvent,
        event_loop: &ActiveEventLoop,
        window: &Window,
        display: &Display<WindowSurface>,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. }
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                event_loop.exit()
            }
            WindowEvent::Resized(new_size) => {
                display.resize((new_size.width, new_size.height));

                self.renderer
                    .update_projection_matrices(new_size.width as f32, new_size.height as f32);

                window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                if let Err(error) = self.render(display) {
                    log::error!("{error:?}");
                    event_loop.exit();
                }
            }
            _ => (),
        };
    }
}

impl Triangle {
    fn render(&mut self, display: &Display<WindowSurface>) -> Result<()> {
        let mut target = display.draw();

        Renderer::clear(&mut target, self.clear_color, self.clear_depth);
        let result = self
            .renderer
            .render_colored_mesh(&self.mesh, &self.camera, &self.model, &mut target);

        // The frame has to be finished even when drawing failed
        target.finish()?;
        result?;

        log::trace!("Drew triangle at aspect {}", self.renderer.aspect());

        Ok(())
    }
}
