use glium::implement_vertex;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub position: [f32; 3],
}
implement_vertex!(Position, position);

#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct VertexColor {
    pub color: [f32; 4],
}
implement_vertex!(VertexColor, color);

#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}
implement_vertex!(NormalVertex, position, normal);
