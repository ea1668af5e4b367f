use color_eyre::Result;
use glium::Display;
use glium::glutin::surface::WindowSurface;
use winit::event::{DeviceEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

pub trait Application: Sized {
    type Settings;

    /// Redraw every frame instead of only when the window asks for it.
    const ANIMATED: bool = true;

    fn new(
        window: &Window,
        display: &Display<WindowSurface>,
        event_loop: &ActiveEventLoop,
        settings: &Self::Settings,
    ) -> Result<Self>;

    fn window_event(
        &mut self,
        event: WindowEvent,
        event_loop: &ActiveEventLoop,
        window: &Window,
        display: &Display<WindowSurface>,
    );

    #[allow(unused_variables)]
    fn device_event(
        &mut self,
        event: DeviceEvent,
        event_loop: &ActiveEventLoop,
        window: &Window,
        display: &Display<WindowSurface>,
    ) {
    }
}
