use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    ops::{Add, Div, Mul, Neg, Sub},
};

/// A 2D point or vector.
///
/// Points are compared and hashed by value, so two vertices with identical
/// coordinates are the same vertex wherever they appear. `-0.0` and `0.0` are
/// treated as the same coordinate. Coordinates reaching a [`Triangle`] are
/// always finite, which is what makes the `Eq` implementation sound.
///
/// [`Triangle`]: crate::Triangle
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0., 0.);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    pub fn distance_squared(&self, rhs: Vec2) -> f64 {
        (*self - rhs).length_squared()
    }

    pub fn dot(&self, rhs: Vec2) -> f64 {
        (self.x * rhs.x) + (self.y * rhs.y)
    }

    pub fn cross(&self, rhs: Vec2) -> f64 {
        (self.x * rhs.y) - (self.y * rhs.x)
    }

    pub fn min(&self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x.min(rhs.x), self.y.min(rhs.y))
    }

    pub fn max(&self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x.max(rhs.x), self.y.max(rhs.y))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Bit patterns of the coordinates with `-0.0` folded into `0.0`.
    pub(crate) fn key(&self) -> (u64, u64) {
        ((self.x + 0.).to_bits(), (self.y + 0.).to_bits())
    }

    /// Total order over coordinates, x first.
    pub(crate) fn total_cmp(&self, other: &Vec2) -> Ordering {
        (self.x + 0.)
            .total_cmp(&(other.x + 0.))
            .then_with(|| (self.y + 0.).total_cmp(&(other.y + 0.)))
    }
}

impl Eq for Vec2 {}

impl Hash for Vec2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x.add(rhs.x),
            y: self.y.add(rhs.y),
        }
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x.sub(rhs.x),
            y: self.y.sub(rhs.y),
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            x: self.x.mul(rhs),
            y: self.y.mul(rhs),
        }
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self {
            x: self.x.div(rhs),
            y: self.y.div(rhs),
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
