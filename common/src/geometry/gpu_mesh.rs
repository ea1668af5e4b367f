use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::{Display, IndexBuffer, VertexBuffer};

use crate::context;
use crate::geometry::{BoxGeometry, ColoredGeometry, NormalVertex, Position, VertexColor};

/// Positions and colors live in separate buffers and are bound together at
/// draw time.
pub struct ColoredMesh {
    pub positions: VertexBuffer<Position>,
    pub colors: VertexBuffer<VertexColor>,
    pub indices: IndexBuffer<u16>,
}

impl ColoredMesh {
    pub fn upload(display: &Display<WindowSurface>, geometry: &ColoredGeometry) -> Result<Self> {
        log::debug!(
            "Uploading {} vertices and {} indices",
            geometry.vertex_count(),
            geometry.indices.len()
        );

        Ok(Self {
            positions: context::create_vbo(display, &geometry.positions)?,
            colors: context::create_vbo(display, &geometry.colors)?,
            indices: context::create_ibo(display, &geometry.indices)?,
        })
    }
}

pub struct GpuMesh {
    pub vertices: VertexBuffer<NormalVertex>,
    pub indices: IndexBuffer<u16>,
}

impl GpuMesh {
    pub fn upload(display: &Display<WindowSurface>, geometry: &BoxGeometry) -> Result<Self> {
        Ok(Self {
            vertices: context::create_vbo(display, &geometry.vertices)?,
            indices: context::create_ibo(display, &geometry.indices)?,
        })
    }
}
