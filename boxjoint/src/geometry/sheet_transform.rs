use std::fmt::Display;

use crate::geometry::primitives::{Circle, Point};

/// Rigid transformation that maps a part's local coordinates onto a sheet,
/// decomposed into an optional quarter turn followed by a translation.
///
/// A quarter turn maps local `(x, y)` onto `(-y, x)`, which is clockwise with y growing downwards.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct SheetTransform {
    /// Whether the part is turned by 90°
    pub rotated: bool,
    /// The translation in the x and y-axis, applied after the rotation
    pub translation: (f64, f64),
}

impl SheetTransform {
    pub const fn empty() -> Self {
        Self {
            rotated: false,
            translation: (0.0, 0.0),
        }
    }

    /// Transformation placing a part of local height `part_height` so that the top left corner
    /// of its (possibly rotated) footprint lands on `(x, y)`.
    pub fn for_placement(x: f64, y: f64, rotated: bool, part_height: f64) -> Self {
        let translation = match rotated {
            true => (x + part_height, y),
            false => (x, y),
        };
        Self {
            rotated,
            translation,
        }
    }

    pub fn apply(&self, Point(x, y): Point) -> Point {
        let (tx, ty) = self.translation;
        match self.rotated {
            true => Point(-y + tx, x + ty),
            false => Point(x + tx, y + ty),
        }
    }

    pub fn apply_circle(&self, circle: &Circle) -> Circle {
        Circle::new(self.apply(circle.center), circle.radius)
    }
}

impl Default for SheetTransform {
    fn default() -> Self {
        Self::empty()
    }
}

impl Display for SheetTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "r: {}°, t: ({:.3}, {:.3})",
            if self.rotated { 90 } else { 0 },
            self.translation.0,
            self.translation.1
        )
    }
}
