use std::ops::{Add, Sub};

/// Geometric primitive representing a point (or a displacement vector)
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn distance(&self, other: &Point) -> f64 {
        self.sq_distance(other).sqrt()
    }

    pub fn sq_distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }

    pub fn norm(&self) -> f64 {
        (self.0.powi(2) + self.1.powi(2)).sqrt()
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.0 * other.0 + self.1 * other.1
    }

    pub fn scale(self, factor: f64) -> Point {
        Point(self.0 * factor, self.1 * factor)
    }

    /// Returns the vector with unit length in the same direction, `None` for the zero vector.
    pub fn normalized(self) -> Option<Point> {
        let n = self.norm();
        match n > 0.0 {
            true => Some(self.scale(1.0 / n)),
            false => None,
        }
    }

    /// Approximate equality, both coordinates within `tolerance`
    pub fn almost_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance && (self.1 - other.1).abs() <= tolerance
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.0 as f32, p.1 as f32)
    }
}
