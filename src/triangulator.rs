use snafu::{ensure, Snafu};

use crate::{triangulation::Triangulation, utils::all_collinear, vec2::Vec2};

/// Margin added to the super-triangle radius so a zero-size bounding box still
/// yields a proper seed triangle.
pub const DEFAULT_SUPER_TRIANGLE_MARGIN: f64 = 0.1;

/// Configures and runs a Delaunay triangulation.
///
/// The default triangulates a bare point cloud over its convex hull. Use
/// [`Triangulator::contour`] to treat the points as an ordered polygon boundary
/// and keep only the triangles inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangulator {
    pub(crate) contour: bool,
    pub(crate) remove_degenerate: bool,
    pub(crate) super_triangle_margin: f64,
}

impl Default for Triangulator {
    fn default() -> Self {
        Self {
            contour: false,
            remove_degenerate: true,
            super_triangle_margin: DEFAULT_SUPER_TRIANGLE_MARGIN,
        }
    }
}

impl Triangulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contour() -> Self {
        Self::default().with_contour(true)
    }

    /// Clip the result against the input treated as a closed contour.
    pub fn with_contour(mut self, contour: bool) -> Self {
        self.contour = contour;
        self
    }

    /// Drop zero-area triangles after construction.
    pub fn with_degenerate_removal(mut self, remove_degenerate: bool) -> Self {
        self.remove_degenerate = remove_degenerate;
        self
    }

    pub fn with_super_triangle_margin(mut self, margin: f64) -> Self {
        self.super_triangle_margin = margin;
        self
    }

    pub fn is_contour(&self) -> bool {
        self.contour
    }

    /// Triangulates `points`.
    ///
    /// All input checks run before any triangle is built, so an error never
    /// leaves a partial triangulation behind.
    pub fn triangulate<P>(&self, points: &[P]) -> Result<Triangulation, TriangulatorError>
    where
        P: Into<Vec2> + Copy,
    {
        ensure!(
            self.super_triangle_margin.is_finite() && self.super_triangle_margin > 0.,
            InvalidMarginSnafu {
                margin: self.super_triangle_margin
            }
        );
        ensure!(!points.is_empty(), EmptyInputSnafu);

        let points: Vec<Vec2> = points.iter().map(|p| (*p).into()).collect();
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(TriangulatorError::NonFinitePoint {
                index,
                x: p.x,
                y: p.y,
            });
        }
        ensure!(!all_collinear(&points), DegenerateInputSnafu);

        Triangulation::build(&points, self)
    }
}

#[derive(Debug, Snafu)]
pub enum TriangulatorError {
    #[snafu(display("cannot triangulate an empty point set"))]
    EmptyInput,
    #[snafu(display("point {} is not finite: ({}, {})", index, x, y))]
    NonFinitePoint { index: usize, x: f64, y: f64 },
    #[snafu(display("all points are collinear"))]
    DegenerateInput,
    #[snafu(display("points span too large a range to enclose in a super-triangle"))]
    OutOfRange,
    #[snafu(display("super-triangle margin must be finite and positive, got {}", margin))]
    InvalidMargin { margin: f64 },
}
