use std::hash::{Hash, Hasher};

use robust::Coord;

use crate::{circle::Circle, vec2::Vec2};

/// Order-independent identity of a triangle: its vertex keys sorted by coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TriangleKey([(u64, u64); 3]);

impl TriangleKey {
    fn new(points: &[Vec2; 3]) -> Self {
        let mut sorted = *points;
        sorted.sort_by(Vec2::total_cmp);
        Self([sorted[0].key(), sorted[1].key(), sorted[2].key()])
    }
}

/// An immutable triangle.
///
/// The centroid, signed area and circumscribed circle are computed once on
/// construction. Two triangles are equal when they have the same three
/// vertices, regardless of the order in which they were given.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    points: [Vec2; 3],
    centroid: Vec2,
    signed_area: f64,
    orientation: f64,
    circle: Option<Circle>,
    key: TriangleKey,
}

impl Triangle {
    /// Creates a triangle, or `None` if any vertex is not finite.
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2) -> Option<Self> {
        if p0.is_finite() && p1.is_finite() && p2.is_finite() {
            Some(Self::from_finite(p0, p1, p2))
        } else {
            None
        }
    }

    pub(crate) fn from_finite(p0: Vec2, p1: Vec2, p2: Vec2) -> Self {
        let points = [p0, p1, p2];
        Self {
            points,
            centroid: (p0 + p1 + p2) / 3.,
            signed_area: (p1 - p0).cross(p2 - p0) * 0.5,
            orientation: robust::orient2d(coord(p0), coord(p1), coord(p2)),
            circle: Circle::circumscribed(p0, p1, p2),
            key: TriangleKey::new(&points),
        }
    }

    pub fn p0(&self) -> Vec2 {
        self.points[0]
    }

    pub fn p1(&self) -> Vec2 {
        self.points[1]
    }

    pub fn p2(&self) -> Vec2 {
        self.points[2]
    }

    pub fn vertices(&self) -> [Vec2; 3] {
        self.points
    }

    /// The three edges in vertex order: `p0-p1`, `p1-p2`, `p2-p0`.
    pub fn edges(&self) -> [(Vec2, Vec2); 3] {
        let [a, b, c] = self.points;
        [(a, b), (b, c), (c, a)]
    }

    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    /// Area, positive when the vertices run counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        self.signed_area
    }

    pub fn area(&self) -> f64 {
        self.signed_area.abs()
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area > 0.
    }

    /// The circumscribed circle. `None` for a degenerate (collinear) triangle.
    pub fn circumscribed_circle(&self) -> Option<&Circle> {
        self.circle.as_ref()
    }

    /// Whether the circumscribed circle contains `point`, boundary included.
    ///
    /// Decided with exact predicates rather than through the rounded
    /// [`Circle`], so four co-circular points agree on which circles they
    /// touch no matter which three of them form the triangle. A degenerate
    /// triangle contains nothing.
    pub fn circumcircle_contains(&self, point: Vec2) -> bool {
        let [p0, p1, p2] = self.points;
        if self.orientation == 0. {
            return false;
        }
        let det = robust::incircle(coord(p0), coord(p1), coord(p2), coord(point));
        if self.orientation > 0. {
            det >= 0.
        } else {
            det <= 0.
        }
    }

    pub fn contains_vertex(&self, point: Vec2) -> bool {
        self.points.contains(&point)
    }

    /// Whether any vertex of `self` is also a vertex of `other`.
    pub fn has_common_point(&self, other: &Triangle) -> bool {
        self.points.iter().any(|p| other.contains_vertex(*p))
    }

    pub fn key(&self) -> TriangleKey {
        self.key
    }
}

fn coord(p: Vec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}
