use std::collections::HashMap;

use crate::{triangle::Triangle, utils::compute_bounds, vec2::Vec2};

/// 8-bit RGBA vertex color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Indexed triangle list ready to hand to a renderer.
///
/// Each vertex appears once; `colors` runs parallel to `vertices` and every
/// three consecutive `indices` form one counter-clockwise triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec2>,
    pub colors: Vec<Color>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn from_triangles<'a, I>(triangles: I, color: Color) -> Self
    where
        I: IntoIterator<Item = &'a Triangle>,
    {
        let mut point_to_index: HashMap<Vec2, u32> = HashMap::new();
        let mut vertices = vec![];
        let mut indices = vec![];

        for t in triangles {
            let mut index = |p: Vec2| {
                *point_to_index.entry(p).or_insert_with(|| {
                    vertices.push(p);
                    (vertices.len() - 1) as u32
                })
            };
            let i0 = index(t.p0());
            let i1 = index(t.p1());
            let i2 = index(t.p2());

            if t.is_counter_clockwise() {
                indices.extend_from_slice(&[i0, i1, i2]);
            } else {
                indices.extend_from_slice(&[i0, i2, i1]);
            }
        }

        Self {
            colors: vec![color; vertices.len()],
            vertices,
            indices,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// The vertex triples referenced by `indices`, in emission order.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        self.indices.chunks_exact(3).map(|chunk| {
            [
                self.vertices[chunk[0] as usize],
                self.vertices[chunk[1] as usize],
                self.vertices[chunk[2] as usize],
            ]
        })
    }

    /// Axis-aligned bounds of the vertices as `(min, max)`.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        compute_bounds(&self.vertices)
    }
}
