use crate::{Triangle, Vec2};

mod properties;
mod utils;

const TOLERANCE: f64 = 1e-9;
const CIRCLE_TOLERANCE: f64 = 1e-6;

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle {
    Triangle::new(a.into(), b.into(), c.into()).unwrap()
}

/// Whether any point lies strictly inside the circumscribed circle of `t`, beyond a
/// relative tolerance.
fn violates_empty_circle(t: &Triangle, points: &[Vec2]) -> Option<Vec2> {
    let circle = t.circumscribed_circle()?;
    let r2 = circle.radius * circle.radius;
    points.iter().copied().find(|p| {
        !t.contains_vertex(*p) && circle.center.distance_squared(*p) < r2 * (1. - CIRCLE_TOLERANCE)
    })
}
