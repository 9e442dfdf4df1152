use std::f64::consts::TAU;

use crate::vec2::Vec2;

/// A circle given by its center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
    radius_squared: f64,
}

impl Circle {
    /// Creates a circle. Negative radii are folded to their magnitude.
    pub fn new(center: Vec2, radius: f64) -> Self {
        let radius = radius.abs();
        Self {
            center,
            radius,
            radius_squared: radius * radius,
        }
    }

    /// Circle passing through `a`, `b` and `c`.
    ///
    /// Returns `None` when the three points are collinear (or coincide), since
    /// no finite circle passes through them.
    pub fn circumscribed(a: Vec2, b: Vec2, c: Vec2) -> Option<Circle> {
        //   { |o - a|^2 = r^2
        //   { |o - b|^2 = r^2
        //   { |o - c|^2 = r^2
        //
        // Moving the origin to `a` (d = b - a, e = c - a) and subtracting the first equation
        // from the others leaves the perpendicular bisector system
        //
        //   { 2 d.x o.x + 2 d.y o.y = |d|^2
        //   { 2 e.x o.x + 2 e.y o.y = |e|^2
        //
        // whose determinant is 2 (d x e). It vanishes exactly for collinear points.
        let d = b - a;
        let e = c - a;
        let det = 2. * d.cross(e);
        if det == 0. {
            return None;
        }

        let dl = d.length_squared();
        let el = e.length_squared();
        let offset = Vec2::new((e.y * dl - d.y * el) / det, (d.x * el - e.x * dl) / det);
        if !offset.is_finite() {
            return None;
        }

        let center = a + offset;
        let radius_squared = offset.length_squared();
        Some(Circle {
            center,
            radius: radius_squared.sqrt(),
            radius_squared,
        })
    }

    /// Whether `point` lies inside or on the circle.
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) <= self.radius_squared
    }

    /// Closed polyline approximating the circle with `segments` chords.
    ///
    /// The first point is repeated at the end so consumers can draw it as a line strip.
    pub fn outline(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(3);
        let step = TAU / segments as f64;
        (0..=segments)
            .map(|i| {
                let angle = step * (i % segments) as f64;
                self.center + Vec2::new(angle.cos(), angle.sin()) * self.radius
            })
            .collect()
    }
}
