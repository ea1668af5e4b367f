use color_eyre::Result;
use color_eyre::eyre::ensure;
use nalgebra::Vector3;

use crate::geometry::NormalVertex;

/// Axis aligned box centered on the origin with flat shaded faces.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxGeometry {
    pub vertices: Vec<NormalVertex>,
    pub indices: Vec<u16>,
}

// (normal, u, v) per face, with u x v == normal so that the corner order
// below winds counter-clockwise seen from outside
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
];

const CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

impl BoxGeometry {
    pub fn new(width: f32, height: f32, depth: f32) -> Result<Self> {
        for (name, extent) in [("width", width), ("height", height), ("depth", depth)] {
            ensure!(
                extent.is_finite() && extent > 0.0,
                "Box {name} must be a positive number, got {extent}"
            );
        }

        let half_extents = Vector3::new(width, height, depth) / 2.0;

        let mut vertices = Vec::with_capacity(FACES.len() * CORNERS.len());
        let mut indices = Vec::with_capacity(FACES.len() * 6);

        for (normal, u, v) in FACES {
            let normal = Vector3::from(normal);
            let u = Vector3::from(u);
            let v = Vector3::from(v);

            let first = vertices.len() as u16;

            for (su, sv) in CORNERS {
                let corner = (normal + u * su + v * sv).component_mul(&half_extents);

                vertices.push(NormalVertex {
                    position: corner.into(),
                    normal: normal.into(),
                });
            }

            indices.extend([first, first + 1, first + 2, first, first + 2, first + 3]);
        }

        Ok(Self { vertices, indices })
    }

    pub fn cube(size: f32) -> Result<Self> {
        Self::new(size, size, size)
    }
}
