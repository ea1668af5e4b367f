use color_eyre::Result;
use color_eyre::eyre::{bail, ensure};
use itertools::Itertools;

use crate::geometry::{Position, VertexColor};

/// Indexed triangles with one position stream and one color stream.
#[derive(Clone, Debug, PartialEq)]
pub struct ColoredGeometry {
    pub positions: Vec<Position>,
    pub colors: Vec<VertexColor>,
    pub indices: Vec<u16>,
}

impl ColoredGeometry {
    /// Builds geometry from flat `xyz` positions and `rgba` colors.
    pub fn new(positions: &[f32], colors: &[f32], indices: &[u16]) -> Result<Self> {
        ensure!(
            positions.len() % 3 == 0,
            "Position data has {} floats, expected a multiple of 3",
            positions.len()
        );
        ensure!(
            colors.len() % 4 == 0,
            "Color data has {} floats, expected a multiple of 4",
            colors.len()
        );

        let vertex_count = positions.len() / 3;
        ensure!(
            colors.len() / 4 == vertex_count,
            "{} vertices but {} colors",
            vertex_count,
            colors.len() / 4
        );
        ensure!(
            vertex_count <= u16::MAX as usize + 1,
            "{vertex_count} vertices cannot be addressed by 16 bit indices"
        );
        ensure!(!indices.is_empty(), "No indices to draw");
        ensure!(
            indices.len() % 3 == 0,
            "{} indices do not form whole triangles",
            indices.len()
        );

        if let Some(index) = indices.iter().find(|index| **index as usize >= vertex_count) {
            bail!("Index {index} is out of range for {vertex_count} vertices");
        }

        let positions = positions
            .iter()
            .copied()
            .tuples()
            .map(|(x, y, z)| Position {
                position: [x, y, z],
            })
            .collect_vec();

        let colors = colors
            .iter()
            .copied()
            .tuples()
            .map(|(r, g, b, a)| VertexColor {
                color: [r, g, b, a],
            })
            .collect_vec();

        Ok(Self {
            positions,
            colors,
            indices: indices.to_vec(),
        })
    }

    /// Apex up, red top, green left, blue right.
    pub fn triangle() -> Self {
        Self {
            positions: vec![
                Position {
                    position: [0.0, 1.0, 0.0],
                },
                Position {
                    position: [-1.0, 0.0, 0.0],
                },
                Position {
                    position: [1.0, 0.0, 0.0],
                },
            ],
            colors: vec![
                VertexColor {
                    color: [1.0, 0.0, 0.0, 1.0],
                },
                VertexColor {
                    color: [0.0, 1.0, 0.0, 1.0],
                },
                VertexColor {
                    color: [0.0, 0.0, 1.0, 1.0],
                },
            ],
            indices: vec![0, 1, 2],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}
