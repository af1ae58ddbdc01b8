use svg::node::Value;
use svg::node::element::path::Data;

use crate::geometry::SheetTransform;
use crate::geometry::primitives::{Circle, Point};

/// Closed polyline through `points`, mapped through `transform`.
pub fn polygon_data(points: &[Point], transform: &SheetTransform) -> Data {
    let mut points = points.iter().map(|p| transform.apply(*p));
    let Some(first) = points.next() else {
        return Data::new();
    };
    let data = Data::new().move_to::<(f32, f32)>(first.into());
    points
        .fold(data, |data, p| data.line_to::<(f32, f32)>(p.into()))
        .close()
}

/// Circle drawn as two half arcs, mapped through `transform`.
pub fn circle_data(circle: &Circle, transform: &SheetTransform) -> Data {
    let Circle { center, radius } = transform.apply_circle(circle);
    let r = radius as f32;
    let (cx, cy): (f32, f32) = center.into();
    Data::new()
        .move_to((cx + r, cy))
        .elliptical_arc_to(vec![r, r, 0.0, 0.0, 1.0, cx - r, cy])
        .elliptical_arc_to(vec![r, r, 0.0, 0.0, 1.0, cx + r, cy])
        .close()
}

/// Open line segment from `a` to `b`, mapped through `transform`.
pub fn segment_data(a: Point, b: Point, transform: &SheetTransform) -> Data {
    Data::new()
        .move_to::<(f32, f32)>(transform.apply(a).into())
        .line_to::<(f32, f32)>(transform.apply(b).into())
}

/// The `d` attribute string of a path
pub fn data_to_string(data: Data) -> String {
    Value::from(data).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_is_a_single_closed_path() {
        let square = [
            Point(0.0, 0.0),
            Point(1.0, 0.0),
            Point(1.0, 1.0),
            Point(0.0, 1.0),
        ];
        let d = data_to_string(polygon_data(&square, &SheetTransform::empty()));
        assert!(d.starts_with('M'));
        assert_eq!(d.matches('M').count(), 1);
        assert_eq!(d.matches('L').count(), 3);
        assert!(d.trim_end().ends_with('z'));
    }

    #[test]
    fn circle_uses_two_arcs() {
        let d = data_to_string(circle_data(
            &Circle::new(Point(2.0, 2.0), 0.5),
            &SheetTransform::empty(),
        ));
        assert_eq!(d.matches('A').count(), 2);
    }

    #[test]
    fn empty_polygon_has_no_commands() {
        assert_eq!(
            data_to_string(polygon_data(&[], &SheetTransform::empty())),
            ""
        );
    }
}
