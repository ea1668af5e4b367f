pub use box_geometry::BoxGeometry;
pub use colored_geometry::ColoredGeometry;
pub use gpu_mesh::{ColoredMesh, GpuMesh};
pub use vertex::{NormalVertex, Position, VertexColor};

mod box_geometry;
mod colored_geometry;
mod gpu_mesh;
pub mod vertex;
