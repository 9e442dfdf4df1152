//! Stateless 2D helpers shared by the triangulation passes and their consumers.

use crate::vec2::Vec2;

/// Axis-aligned bounds of `points` as `(min, max)`, or `None` for an empty slice.
pub fn compute_bounds(points: &[Vec2]) -> Option<(Vec2, Vec2)> {
    let (first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p))),
    )
}

/// Signed cross product of two vectors, positive when `b` turns counter-clockwise from `a`.
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.cross(b)
}

/// Even-odd test of `test` against the closed polygon `verts`.
///
/// Points exactly on an edge may land on either side.
pub fn point_in_polygon(verts: &[Vec2], test: Vec2) -> bool {
    if verts.len() < 3 {
        return false;
    }

    //        vi
    //       /
    //      /   <-- cast a ray towards -x from test and count crossings
    //     /          .
    //    vj         test
    //
    // An edge is only counted when it straddles the ray's y, which also keeps
    // horizontal edges (vi.y == vj.y) out of the division below.
    let mut inside = false;
    let mut j = verts.len() - 1;
    for i in 0..verts.len() {
        let (vi, vj) = (verts[i], verts[j]);
        if (vi.y > test.y) != (vj.y > test.y)
            && test.x < (vj.x - vi.x) * (test.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Intersection point of segments `from1-to1` and `from2-to2`.
///
/// Parallel (including collinear) segments report no intersection.
pub fn segment_intersection(from1: Vec2, to1: Vec2, from2: Vec2, to2: Vec2) -> Option<Vec2> {
    //   from1 + (to1 - from1) * r = from2 + (to2 - from2) * s
    //
    // solved with Cramer's rule; both parameters must fall within [0, 1].
    let d1 = to1 - from1;
    let d2 = to2 - from2;
    let det = d1.cross(d2);
    if det == 0. {
        return None;
    }

    let offset = from2 - from1;
    let r = offset.cross(d2) / det;
    let s = offset.cross(d1) / det;
    if (0. ..=1.).contains(&r) && (0. ..=1.).contains(&s) {
        Some(from1 + d1 * r)
    } else {
        None
    }
}

/// Crossing points between non-adjacent edges of the closed contour.
///
/// Adjacent edges always meet at their shared vertex, so they are not reported.
pub fn self_intersections(contour: &[Vec2]) -> Vec<Vec2> {
    let n = contour.len();
    let mut intersections = vec![];
    if n < 4 {
        return intersections;
    }

    for i in 0..n {
        let (a1, a2) = (contour[i], contour[(i + 1) % n]);
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (b1, b2) = (contour[j], contour[(j + 1) % n]);
            if let Some(point) = segment_intersection(a1, a2, b1, b2) {
                intersections.push(point);
            }
        }
    }
    intersections
}

pub fn is_simple_polygon(contour: &[Vec2]) -> bool {
    self_intersections(contour).is_empty()
}

/// Relative tolerance for [`all_collinear`]: the sine of the largest angle a
/// point may deviate from the line and still count as on it.
const COLLINEAR_TOLERANCE: f64 = 1e-12;

/// True when `points` holds at least three distinct points and all of them lie on one line.
///
/// Such a set has no 2D triangulation. The line runs from the first point to
/// the point farthest from it, and the test is scale-relative, so points such
/// as `(i, 0.1 * i)` whose slope has no exact binary form still count.
pub fn all_collinear(points: &[Vec2]) -> bool {
    let Some(&a) = points.first() else {
        return false;
    };
    let Some(&b) = points
        .iter()
        .max_by(|p, q| a.distance_squared(**p).total_cmp(&a.distance_squared(**q)))
    else {
        return false;
    };
    if b == a {
        return false;
    }

    let dir = b - a;
    let dir_length = dir.length();
    let mut third = false;
    for p in points {
        let offset = *p - a;
        // NaN from overflowing coordinates counts as off the line.
        let on_line =
            dir.cross(offset).abs() <= COLLINEAR_TOLERANCE * dir_length * offset.length();
        if !on_line {
            return false;
        }
        third |= *p != a && *p != b;
    }
    third
}
