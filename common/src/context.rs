use color_eyre::{Report, Result};
use glium::backend::glutin::SimpleWindowBuilder;
use glium::glutin::surface::WindowSurface;
use glium::index::PrimitiveType;
use glium::{Display, IndexBuffer, Vertex, VertexBuffer};
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::application::Application;

pub struct OpenGLContext<A: Application> {
    pub window: Option<Window>,
    pub display: Option<Display<WindowSurface>>,
    pub application: Option<A>,
    window_attributes: WindowAttributes,
    settings: A::Settings,
    error: Option<Report>,
}

impl<A: Application> OpenGLContext<A> {
    pub fn new(window_attributes: WindowAttributes, settings: A::Settings) -> Self {
        Self {
            window: None,
            display: None,
            application: None,
            window_attributes,
            settings,
            error: None,
        }
    }

    /// Surfaces the error that stopped the application from starting, if any.
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl<A: Application> ApplicationHandler for OpenGLContext<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Resumed can fire more than once on some platforms
        if self.application.is_some() || self.error.is_some() {
            return;
        }

        let (window, display) = SimpleWindowBuilder::new()
            .set_window_builder(self.window_attributes.clone())
            .build(event_loop);

        let inner_size = window.inner_size();
        log::info!(
            "Created OpenGL window {}x{}",
            inner_size.width,
            inner_size.height
        );

        match A::new(&window, &display, event_loop, &self.settings) {
            Ok(application) => {
                window.request_redraw();
                self.application = Some(application);
            }
            Err(error) => {
                log::error!("Failed to start application: {error}");
                self.error = Some(error);
                event_loop.exit();
            }
        }

        self.window = Some(window);
        self.display = Some(display);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(window), Some(display), Some(application)) = (
            self.window.as_ref(),
            self.display.as_ref(),
            self.application.as_mut(),
        ) else {
            return;
        };

        if window_id != window.id() {
            return;
        }

        application.window_event(event, event_loop, window, display);
    }

    fn device_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let (Some(window), Some(display), Some(application)) = (
            self.window.as_ref(),
            self.display.as_ref(),
            self.application.as_mut(),
        ) else {
            return;
        };

        application.device_event(event, event_loop, window, display);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if A::ANIMATED {
            if let Some(window) = self.window.as_ref() {
                window.request_redraw();
            }
        }
    }
}

/// Uploads vertex data into a static vertex buffer object.
pub fn create_vbo<T: Copy + Vertex>(
    display: &Display<WindowSurface>,
    data: &[T],
) -> Result<VertexBuffer<T>> {
    Ok(VertexBuffer::immutable(display, data)?)
}

/// Uploads triangle indices into a static index buffer object.
pub fn create_ibo(display: &Display<WindowSurface>, data: &[u16]) -> Result<IndexBuffer<u16>> {
    Ok(IndexBuffer::immutable(
        display,
        PrimitiveType::TrianglesList,
        data,
    )?)
}
