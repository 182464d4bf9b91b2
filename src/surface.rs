//! Surface grid generation.
//!
//! This module provides the [`SurfaceVertex`] layout and [`SurfaceGrid`], a
//! regular `n x n` grid over the unit square that the vertex stage lifts onto
//! the saddle surface described by [`Saddle`].

use crate::math::Vec3;

/// Vertex data for the surface grid.
///
/// Each vertex contains:
/// - `position`: 2D grid position; the height is computed per vertex later.
/// - `color`: RGB color.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SurfaceVertex {
    /// Grid position in the plane, in [-0.5, 0.5).
    pub position: [f32; 2],
    /// RGB color.
    pub color: [f32; 3],
}

/// Default vertex color (green).
const GRID_COLOR: [f32; 3] = [0.0, 1.0, 0.0];

/// A triangulated `n x n` grid centered at the origin.
#[derive(Debug, Clone)]
pub struct SurfaceGrid {
    /// Vertices per side.
    pub n: usize,
    /// `n * n` vertices, row by row along z.
    pub vertices: Vec<SurfaceVertex>,
    /// Two counter-clockwise triangles per cell.
    pub indices: Vec<u32>,
}

impl SurfaceGrid {
    /// Builds the grid with `n` vertices per side.
    ///
    /// Grids with fewer than two vertices per side have no cells and so no
    /// indices.
    pub fn new(n: usize) -> Self {
        let side = n as f32;
        let mut vertices = Vec::with_capacity(n * n);
        for z in 0..n {
            for x in 0..n {
                vertices.push(SurfaceVertex {
                    position: [x as f32 / side - 0.5, z as f32 / side - 0.5],
                    color: GRID_COLOR,
                });
            }
        }

        let cells = n.saturating_sub(1);
        let mut indices = Vec::with_capacity(cells * cells * 6);
        for z in 0..cells {
            for x in 0..cells {
                let here = (z * n + x) as u32;
                let right = here + 1;
                let below = ((z + 1) * n + x) as u32;
                let below_right = below + 1;
                indices.extend_from_slice(&[here, below, below_right, right, here, below_right]);
            }
        }

        Self { n, vertices, indices }
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Raw vertex bytes, 5 floats per vertex.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Hyperbolic paraboloid `f(x, y) = x²/a² - y²/b²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saddle {
    /// Curvature along x.
    pub a: f32,
    /// Curvature along y.
    pub b: f32,
}

impl Default for Saddle {
    fn default() -> Self {
        Self { a: 0.8, b: 0.6 }
    }
}

impl Saddle {
    /// Surface height over grid position `(x, y)`.
    pub fn height(&self, x: f32, y: f32) -> f32 {
        x * x / (self.a * self.a) - y * y / (self.b * self.b)
    }

    /// Gradient of `F(x, y, z) = f(x, y) - z`, used as the unnormalised
    /// surface normal.
    pub fn gradient(&self, x: f32, y: f32) -> Vec3 {
        Vec3::new(2.0 * x / (self.a * self.a), -2.0 * y / (self.b * self.b), -1.0)
    }

    /// Lifts a grid vertex onto the surface.
    pub fn lift(&self, vertex: &SurfaceVertex) -> Vec3 {
        let [x, y] = vertex.position;
        Vec3::new(x, y, self.height(x, y))
    }
}
