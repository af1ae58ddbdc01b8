use crate::geometry::primitives::Point;

///Axis-aligned rectangle, y grows downwards
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Rectangle with its top left corner at `(x, y)`
    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    /// Smallest rectangle containing all `points`, `None` if there are none.
    pub fn bounding_box(points: impl IntoIterator<Item = Point>) -> Option<Rect> {
        points.into_iter().fold(None, |acc, Point(x, y)| {
            Some(match acc {
                None => Rect {
                    x_min: x,
                    y_min: y,
                    x_max: x,
                    y_max: y,
                },
                Some(r) => Rect {
                    x_min: r.x_min.min(x),
                    y_min: r.y_min.min(y),
                    x_max: r.x_max.max(x),
                    y_max: r.y_max.max(y),
                },
            })
        })
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = f64::max(a.x_min, b.x_min);
        let y_min = f64::max(a.y_min, b.y_min);
        let x_max = f64::min(a.x_max, b.x_max);
        let y_max = f64::min(a.y_max, b.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }

    /// True if the interiors of both rectangles overlap by more than `tolerance` along both axes.
    /// Touching rectangles do not overlap.
    pub fn overlaps(&self, other: &Rect, tolerance: f64) -> bool {
        f64::min(self.x_max, other.x_max) - f64::max(self.x_min, other.x_min) > tolerance
            && f64::min(self.y_max, other.y_max) - f64::max(self.y_min, other.y_min) > tolerance
    }

    /// True if `other` lies within `self`, allowing it to stick out by at most `tolerance`.
    pub fn contains_rect(&self, other: &Rect, tolerance: f64) -> bool {
        other.x_min >= self.x_min - tolerance
            && other.y_min >= self.y_min - tolerance
            && other.x_max <= self.x_max + tolerance
            && other.y_max <= self.y_max + tolerance
    }

    /// True if `point` lies within `self`, allowing it to stick out by at most `tolerance`.
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min - tolerance
            && x <= self.x_max + tolerance
            && y >= self.y_min - tolerance
            && y <= self.y_max + tolerance
    }
}
