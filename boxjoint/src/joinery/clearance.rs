use crate::geometry::primitives::{Circle, Point};

/// Slack on the clearance checks, absorbs rounding of the corrected centers
const CHECK_TOLERANCE: f64 = 1e-9;

/// Minimum distances a feature hole keeps from the panel boundary and from finger roots
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClearanceRules {
    /// Between the panel edge and the edge of the hole
    pub min_edge: f64,
    /// Between a valley point and the edge of the hole
    pub min_valley: f64,
}

impl ClearanceRules {
    pub fn for_thickness(t: f64) -> Self {
        ClearanceRules {
            min_edge: f64::max(3.0 * t, 0.3),
            min_valley: f64::max(2.0 * t, 0.25),
        }
    }

    /// Smallest distance from the edge of `hole` to the border of a `width` x `height` panel
    pub fn edge_distance(hole: &Circle, width: f64, height: f64) -> f64 {
        let Point(x, y) = hole.center;
        let r = hole.radius;
        [x - r, width - x - r, y - r, height - y - r]
            .into_iter()
            .fold(f64::INFINITY, f64::min)
    }

    /// Smallest distance from the edge of `hole` to any of the `valleys`, infinite if there are none
    pub fn valley_distance(hole: &Circle, valleys: &[Point]) -> f64 {
        valleys
            .iter()
            .map(|v| v.distance(&hole.center) - hole.radius)
            .fold(f64::INFINITY, f64::min)
    }

    pub fn is_satisfied(&self, hole: &Circle, width: f64, height: f64, valleys: &[Point]) -> bool {
        Self::edge_distance(hole, width, height) >= self.min_edge - CHECK_TOLERANCE
            && Self::valley_distance(hole, valleys) >= self.min_valley - CHECK_TOLERANCE
    }
}

/// Pushes `hole` away from the panel border and then away from the nearest valley, clamping the result inside the panel.
///
/// This is a single local pass: the valley step may move the hole back towards a border or next
/// to another valley, and only the final clamp is guaranteed to hold.
pub fn enforce_clearance(
    hole: Circle,
    width: f64,
    height: f64,
    valleys: &[Point],
    rules: &ClearanceRules,
) -> Circle {
    let moved = clearance_pass(hole, width, height, valleys, rules);
    report_move(&hole, &moved, width, height, valleys, rules);
    moved
}

/// Repeats [`enforce_clearance`] until the hole meets both minimums or `max_passes` are spent.
pub fn settle_clearance(
    hole: Circle,
    width: f64,
    height: f64,
    valleys: &[Point],
    rules: &ClearanceRules,
    max_passes: usize,
) -> Circle {
    let mut current = hole;
    for _ in 0..max_passes {
        if rules.is_satisfied(&current, width, height, valleys) {
            break;
        }
        current = clearance_pass(current, width, height, valleys, rules);
    }
    report_move(&hole, &current, width, height, valleys, rules);
    current
}

fn clearance_pass(
    hole: Circle,
    width: f64,
    height: f64,
    valleys: &[Point],
    rules: &ClearanceRules,
) -> Circle {
    let r = hole.radius;
    let Point(mut x, mut y) = hole.center;

    // the axis with the smaller margin is corrected first
    let margin_x = f64::min(x - r, width - x - r);
    let margin_y = f64::min(y - r, height - y - r);
    let push = |c: f64, dim: f64| match c <= dim / 2.0 {
        true => r + rules.min_edge,
        false => dim - r - rules.min_edge,
    };
    let axes = match margin_x <= margin_y {
        true => [(margin_x, true), (margin_y, false)],
        false => [(margin_y, false), (margin_x, true)],
    };
    for (margin, is_x) in axes {
        if margin < rules.min_edge {
            match is_x {
                true => x = push(x, width),
                false => y = push(y, height),
            }
        }
    }

    let mut center = Point(x, y);
    let nearest = valleys
        .iter()
        .min_by(|a, b| a.sq_distance(&center).total_cmp(&b.sq_distance(&center)));
    if let Some(&valley) = nearest {
        let required = r + rules.min_valley;
        if valley.distance(&center) < required {
            let panel_center = Point(width / 2.0, height / 2.0);
            let away = (center - valley)
                .normalized()
                .or_else(|| (panel_center - center).normalized())
                .unwrap_or(Point(1.0, 0.0));
            center = valley + away.scale(required);
        }
    }

    let clamp = |c: f64, dim: f64| match 2.0 * r > dim {
        true => dim / 2.0,
        false => c.clamp(r, dim - r),
    };
    Circle::new(Point(clamp(center.0, width), clamp(center.1, height)), r)
}

fn report_move(
    from: &Circle,
    to: &Circle,
    width: f64,
    height: f64,
    valleys: &[Point],
    rules: &ClearanceRules,
) {
    if to.center != from.center {
        log::debug!(
            "[CLEARANCE] hole moved from ({:.3}, {:.3}) to ({:.3}, {:.3})",
            from.center.0,
            from.center.1,
            to.center.0,
            to.center.1
        );
    }
    if !rules.is_satisfied(to, width, height, valleys) {
        log::warn!(
            "[CLEARANCE] hole of radius {:.3} at ({:.3}, {:.3}) cannot meet the minimum clearances on a {width:.3} x {height:.3} panel",
            to.radius,
            to.center.0,
            to.center.1
        );
    }
}
