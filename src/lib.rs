//! Incremental planar Delaunay triangulation.
//!
//! ```
//! use delaunay2d::{Color, Triangulation};
//!
//! let square = [[0., 0.], [1., 0.], [1., 1.], [0., 1.]];
//! let triangulation = Triangulation::contour(&square).unwrap();
//! assert_eq!(triangulation.len(), 2);
//!
//! let mesh = triangulation.to_mesh(Color::WHITE);
//! assert_eq!(mesh.vertices.len(), 4);
//! ```

mod circle;
mod mesh;
mod triangle;
mod triangulation;
mod triangulator;
pub mod utils;
mod vec2;

pub use {
    circle::Circle,
    mesh::{Color, Mesh},
    triangle::{Triangle, TriangleKey},
    triangulation::Triangulation,
    triangulator::{Triangulator, TriangulatorError, DEFAULT_SUPER_TRIANGLE_MARGIN},
    vec2::Vec2,
};

#[cfg(test)]
mod test;
