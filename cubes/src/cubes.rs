use std::time::Duration;

use color_eyre::Result;
use glium::Display;
use glium::glutin::surface::WindowSurface;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use common::application::Application;
use common::camera::PerspectiveCamera;
use common::config::CubesSettings;
use common::renderer::Renderer;
use common::scene::Scene;
use common::shader::{ShaderPair, ShaderSet};

use crate::frame_state::FrameState;

pub struct Cubes {
    renderer: Renderer,
    scene: Scene,
    camera: PerspectiveCamera,
    state: FrameState,
    stats_interval: Duration,
}

impl Application for Cubes {
    type Settings = CubesSettings;

    fn new(
        window: &Window,
        display: &Display<WindowSurface>,
        _event_loop: &ActiveEventLoop,
        settings: &CubesSettings,
    ) -> Result<Self> {
        let shaders = ShaderSet {
            phong: ShaderPair::phong().with_overrides(&settings.shaders)?,
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

        let scene = Scene::from_settings(settings)?;
        log::debug!("Scene centered on {}", scene.centroid());

        Ok(Self {
            renderer,
            scene,
            camera: settings.camera.clone(),
            state: FrameState::default(),
            stats_interval: Duration::from_secs_f32(settings.stats_interval.max(0.0)),
        })
    }

    fn window_event(
        &mut self,
        event: WindowEvent,
        event_loop: &ActiveEventLoop,
        _window: &Window,
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
            }
            WindowEvent::RedrawRequested => {
                self.update();

                if let Err(error) = self.render(display) {
                    log::error!("{error:?}");
                    event_loop.exit();
                }

                self.state.update_statistics();
            }
            _ => (),
        };
    }
}

impl Cubes {
    fn update(&mut self) {
        self.scene.animate();

        if let Some(fps) = self.state.take_report(self.stats_interval) {
            log::info!(
                "{:.1} fps average, {:.1} fps last frame ({:.2} ms, {} frames total)",
                fps,
                self.state.fps,
                self.state.deltatime * 1000.0,
                self.scene.frames()
            );
        }
    }

    fn render(&mut self, display: &Display<WindowSurface>) -> Result<()> {
        let mut target = display.draw();

        Renderer::clear(&mut target, self.scene.clear_color, 1.0);
        let result = self
            .renderer
            .render_scene(&self.scene, &self.camera, display, &mut target);

        target.finish()?;
        result
    }
}
