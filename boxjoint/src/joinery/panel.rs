use itertools::Itertools;

use crate::entities::{Hole, HoleKind};
use crate::geometry::primitives::{Circle, Point, Rect};
use crate::joinery::edge::{EdgeFrame, EdgeProfile, EdgeSpec, JointParams, edge_profile};

/// Radius of the stress relief holes drilled at the root of every finger
pub const RELIEF_HOLE_RADIUS: f64 = 0.01;

/// Parallel unit normals are considered opposite below this miter denominator
const MITER_EPS: f64 = 1e-9;

/// The four edges of a rectangular panel, in contour order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelEdges {
    pub top: EdgeSpec,
    pub right: EdgeSpec,
    pub bottom: EdgeSpec,
    pub left: EdgeSpec,
}

impl PanelEdges {
    pub fn width(&self) -> f64 {
        self.top.length
    }

    pub fn height(&self) -> f64 {
        self.right.length
    }

    /// Edges in contour order. The bottom and left edges run against the panel axes, so their
    /// segments are counted from the far end and every edge lays out its fingers from the panel origin.
    pub(crate) fn in_order(&self) -> [EdgeSpec; 4] {
        [self.top, self.right, self.bottom.reversed(), self.left.reversed()]
    }

    /// Placement of every edge on the nominal `width` x `height` rectangle, y grows downwards.
    /// The contour runs top (left to right), right (downwards), bottom (right to left), left (upwards).
    fn frames(&self) -> [EdgeFrame; 4] {
        let (w, h) = (self.width(), self.height());
        let frame = |origin: (f64, f64), direction: (f64, f64), inward: (f64, f64)| EdgeFrame {
            origin: origin.into(),
            direction: direction.into(),
            inward: inward.into(),
        };
        [
            frame((0.0, 0.0), (1.0, 0.0), (0.0, 1.0)),
            frame((w, 0.0), (0.0, 1.0), (-1.0, 0.0)),
            frame((w, h), (-1.0, 0.0), (0.0, -1.0)),
            frame((0.0, h), (0.0, -1.0), (1.0, 0.0)),
        ]
    }
}

/// A finished panel outline, kerf compensated and normalized so its bounding box starts at the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelOutline {
    pub contour: Vec<Point>,
    pub width: f64,
    pub height: f64,
    /// Finger roots, in local coordinates
    pub valleys: Vec<Point>,
    /// Translation from nominal panel coordinates to local coordinates
    shift: Point,
}

impl PanelOutline {
    /// Maps a point in nominal panel coordinates to the local coordinates of the outline.
    pub fn to_local(&self, p: Point) -> Point {
        p - self.shift
    }

    pub fn bbox(&self) -> Rect {
        Rect::from_origin(0.0, 0.0, self.width, self.height)
    }

    pub fn relief_holes(&self) -> Vec<Hole> {
        self.valleys
            .iter()
            .map(|v| Hole {
                circle: Circle::new(*v, RELIEF_HOLE_RADIUS),
                kind: HoleKind::Relief,
            })
            .collect()
    }
}

/// Composes the four edges into a closed outline, grows it by half the kerf and moves it to the origin.
pub fn generate_panel(edges: &PanelEdges, params: &JointParams) -> PanelOutline {
    debug_assert!(edges.width() == edges.bottom.length && edges.height() == edges.left.length);

    let frames = edges.frames();
    let profiles: [EdgeProfile; 4] = edges.in_order().map(|spec| edge_profile(&spec, params));

    // a corner is set back along both meeting edges by their depth at that corner
    let corners: [Point; 4] = std::array::from_fn(|i| {
        let prev = (i + 3) % 4;
        frames[i].origin
            + frames[prev].inward.scale(profiles[prev].end_depth())
            + frames[i].inward.scale(profiles[i].start_depth())
    });

    let mut raw = vec![];
    for (i, (frame, profile)) in frames.iter().zip(profiles.iter()).enumerate() {
        raw.push(corners[i]);
        let inner = &profile.points[1..profile.points.len() - 1];
        raw.extend(inner.iter().map(|&(s, d)| frame.to_panel(s, d)));
    }
    let raw = dedup_closed(raw);

    let valleys = frames
        .iter()
        .zip(profiles.iter())
        .flat_map(|(frame, profile)| profile.valleys.iter().map(|&(s, d)| frame.to_panel(s, d)))
        .collect_vec();

    let grown = offset_contour(&raw, params.kerf / 2.0);

    let bbox = Rect::bounding_box(grown.iter().copied())
        .unwrap_or_else(|| Rect::from_origin(0.0, 0.0, edges.width(), edges.height()));
    let shift = Point(bbox.x_min, bbox.y_min);

    PanelOutline {
        contour: grown.into_iter().map(|p| p - shift).collect(),
        width: bbox.width(),
        height: bbox.height(),
        valleys: valleys.into_iter().map(|v| v - shift).collect(),
        shift,
    }
}

/// Drops consecutive duplicates, including a closing point equal to the first one.
fn dedup_closed(mut points: Vec<Point>) -> Vec<Point> {
    const EPS: f64 = 1e-12;
    points.dedup_by(|b, a| a.almost_eq(b, EPS));
    while points.len() > 1 && points[0].almost_eq(&points[points.len() - 1], EPS) {
        points.pop();
    }
    points
}

/// Moves every vertex of a closed contour outwards so that both adjacent sides shift by `distance`.
fn offset_contour(points: &[Point], distance: f64) -> Vec<Point> {
    if distance == 0.0 || points.len() < 3 {
        return points.to_vec();
    }
    let n = points.len();
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let curr = points[i];
            let next = points[(i + 1) % n];
            let n1 = outward_normal(curr - prev);
            let n2 = outward_normal(next - curr);
            let miter = match (n1, n2) {
                (Some(n1), Some(n2)) => {
                    let denom = 1.0 + n1.dot(&n2);
                    match denom < MITER_EPS {
                        true => n1,
                        false => (n1 + n2).scale(1.0 / denom),
                    }
                }
                (Some(n), None) | (None, Some(n)) => n,
                (None, None) => Point(0.0, 0.0),
            };
            curr + miter.scale(distance)
        })
        .collect()
}

/// Outward unit normal of a side running in direction `dir` along a clockwise (y down) contour
fn outward_normal(dir: Point) -> Option<Point> {
    dir.normalized().map(|Point(dx, dy)| Point(dy, -dx))
}
