use crate::geometry::primitives::{Point, Rect};

/// Geometric primitive representing a circle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        debug_assert!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid circle center: {center:?}"
        );

        Self { center, radius }
    }

    /// The four axis extrema of the circle: right, bottom, left, top (y grows downwards).
    pub fn extrema(&self) -> [Point; 4] {
        let Point(x, y) = self.center;
        let r = self.radius;
        [
            Point(x + r, y),
            Point(x, y + r),
            Point(x - r, y),
            Point(x, y - r),
        ]
    }

    pub fn bbox(&self) -> Rect {
        let Point(x, y) = self.center;
        let r = self.radius;
        Rect {
            x_min: x - r,
            y_min: y - r,
            x_max: x + r,
            y_max: y + r,
        }
    }
}
