use color_eyre::Result;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowAttributes;

use crate::application::Application;
use crate::context::OpenGLContext;

pub fn run<A: Application>(window_attributes: WindowAttributes, settings: A::Settings) -> Result<()> {
    let event_loop = EventLoop::new()?;

    // Static scenes only need a frame when the window is exposed or resized
    event_loop.set_control_flow(if A::ANIMATED {
        ControlFlow::Poll
    } else {
        ControlFlow::Wait
    });

    let mut opengl_context = OpenGLContext::<A>::new(window_attributes, settings);
    event_loop.run_app(&mut opengl_context)?;

    opengl_context.into_result()
}
