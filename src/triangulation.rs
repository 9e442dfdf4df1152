use std::collections::{hash_set, HashMap, HashSet};

use tracing::{debug, trace};

use crate::{
    mesh::{Color, Mesh},
    triangle::{Triangle, TriangleKey},
    triangulator::{Triangulator, TriangulatorError},
    utils::{compute_bounds, point_in_polygon},
    vec2::Vec2,
};

/// A Delaunay triangulation built by incremental Bowyer–Watson insertion.
///
/// The triangle set is owned exclusively; consumers get read access through
/// [`iter`](Self::iter) or a copy through [`into_triangles`](Self::into_triangles)
/// and [`to_mesh`](Self::to_mesh). Iteration order is unspecified.
#[derive(Clone, Debug)]
pub struct Triangulation {
    triangles: HashSet<Triangle>,
    super_triangle: Triangle,
}

impl Triangulation {
    /// Triangulates a point cloud over its convex hull with the default settings.
    pub fn new<P>(points: &[P]) -> Result<Self, TriangulatorError>
    where
        P: Into<Vec2> + Copy,
    {
        Triangulator::new().triangulate(points)
    }

    /// Triangulates the interior of the closed contour traced by `points`.
    pub fn contour<P>(points: &[P]) -> Result<Self, TriangulatorError>
    where
        P: Into<Vec2> + Copy,
    {
        Triangulator::contour().triangulate(points)
    }

    /// Runs every phase over validated, finite, non-empty input.
    pub(crate) fn build(points: &[Vec2], config: &Triangulator) -> Result<Self, TriangulatorError> {
        debug!(
            points = points.len(),
            contour = config.is_contour(),
            "triangulation started"
        );

        let mut triangulation = Self::seed(points, config.super_triangle_margin)?;

        let mut inserted = HashSet::with_capacity(points.len());
        for &point in points {
            if inserted.insert(point) {
                triangulation.add_point(point);
            } else {
                trace!(x = point.x, y = point.y, "skipping duplicate point");
            }
        }

        let removed = triangulation.remove_super_triangle();
        debug!(removed, "removed triangles touching the super-triangle");

        if config.is_contour() {
            let removed = triangulation.remove_external_triangles(points);
            debug!(removed, "removed triangles outside the contour");
        }

        if config.remove_degenerate {
            let removed = triangulation.remove_degenerate_triangles();
            debug!(removed, "removed degenerate triangles");
        }

        debug!(
            triangles = triangulation.triangles.len(),
            "triangulation finished"
        );
        Ok(triangulation)
    }

    /// Creates the state holding only a super-triangle that strictly encloses `points`.
    pub(crate) fn seed(points: &[Vec2], margin: f64) -> Result<Self, TriangulatorError> {
        let (min, max) = compute_bounds(points).ok_or(TriangulatorError::EmptyInput)?;

        let center = (min + max) * 0.5;
        let radius = (max - min).length() * 0.5 + margin;
        let scale = 3f64.sqrt();

        let a = center + Vec2::new(radius * scale, radius);
        let b = center + Vec2::new(-radius * scale, radius);
        let c = center + Vec2::new(0., -radius * 2.);
        let super_triangle = Triangle::new(a, b, c).ok_or(TriangulatorError::OutOfRange)?;
        if super_triangle.circumscribed_circle().is_none() {
            return Err(TriangulatorError::OutOfRange);
        }
        debug!(?center, radius, "seeded super-triangle");

        let mut triangles = HashSet::new();
        triangles.insert(super_triangle);
        Ok(Self {
            triangles,
            super_triangle,
        })
    }

    /// Inserts one point, retriangulating the cavity of every triangle whose
    /// circumscribed circle contains it.
    pub(crate) fn add_point(&mut self, point: Vec2) {
        let mut removing = vec![];
        let mut adding = vec![];
        for t in self.triangles.iter() {
            if t.circumcircle_contains(point) {
                let [p0, p1, p2] = t.vertices();
                adding.push(Triangle::from_finite(point, p0, p1));
                adding.push(Triangle::from_finite(point, p1, p2));
                adding.push(Triangle::from_finite(point, p2, p0));
                removing.push(*t);
            }
        }

        trace!(
            x = point.x,
            y = point.y,
            cavity = removing.len(),
            "inserting point"
        );
        self.apply(&removing, adding);
    }

    /// Applies a batch collected during a read-only scan.
    ///
    /// Removals go first. Proposed triangles that appear more than once in
    /// `adding` sit on an edge shared by two cavity triangles, so every copy of
    /// them is dropped; the rest are inserted.
    fn apply(&mut self, removing: &[Triangle], adding: Vec<Triangle>) {
        for t in removing {
            self.triangles.remove(t);
        }

        let mut proposed: HashMap<TriangleKey, usize> = HashMap::with_capacity(adding.len());
        for t in adding.iter() {
            *proposed.entry(t.key()).or_default() += 1;
        }
        for t in adding {
            if proposed[&t.key()] == 1 {
                self.triangles.insert(t);
            }
        }
    }

    /// Removes every triangle matching `predicate` and returns how many went.
    fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Triangle) -> bool,
    {
        let removing: Vec<Triangle> = self
            .triangles
            .iter()
            .filter(|t| predicate(*t))
            .copied()
            .collect();
        self.apply(&removing, vec![]);
        removing.len()
    }

    /// Removes every triangle sharing a vertex with the super-triangle.
    pub(crate) fn remove_super_triangle(&mut self) -> usize {
        let super_triangle = self.super_triangle;
        self.remove_where(|t| super_triangle.has_common_point(t))
    }

    /// Removes every triangle whose centroid lies outside `contour`.
    ///
    /// Triangles straddling the boundary are kept or dropped whole.
    pub(crate) fn remove_external_triangles(&mut self, contour: &[Vec2]) -> usize {
        self.remove_where(|t| !point_in_polygon(contour, t.centroid()))
    }

    pub(crate) fn remove_degenerate_triangles(&mut self) -> usize {
        self.remove_where(|t| t.area() <= 0.)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    pub fn for_each_triangle<F>(&self, f: F)
    where
        F: FnMut(&Triangle),
    {
        self.triangles.iter().for_each(f)
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn contains(&self, triangle: &Triangle) -> bool {
        self.triangles.contains(triangle)
    }

    /// The seed triangle. None of its vertices appears in the final triangles.
    pub fn super_triangle(&self) -> &Triangle {
        &self.super_triangle
    }

    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles.into_iter().collect()
    }

    /// Converts the triangles into an indexed mesh painted with a single `color`.
    pub fn to_mesh(&self, color: Color) -> Mesh {
        Mesh::from_triangles(self.triangles.iter(), color)
    }
}

impl<'a> IntoIterator for &'a Triangulation {
    type Item = &'a Triangle;
    type IntoIter = hash_set::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
