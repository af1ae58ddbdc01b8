//! Contour of a single panel edge: a straight run or a finger joint of alternating tabs and notches.
//!
//! Edges are built in a local frame: `s` runs along the edge from `0` to its length, `d` is the depth
//! measured inwards from the nominal panel boundary. The baseline of every edge lies at depth `t`,
//! jointed segments are pushed outwards onto the boundary (`d = 0`) to form fingers. A protruding
//! and a recessed edge of equal length have complementary fingers.

use crate::geometry::primitives::Point;

/// Role of an edge in a finger joint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeRole {
    /// Fingers on the odd ("notch") segments
    Protruding,
    /// Fingers on the even ("tab") segments
    Recessed,
}

/// Outcome of a single segment of a jointed edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentCut {
    /// Segment stays on the baseline
    Flat,
    /// Segment is pushed out by the material thickness
    Jointed,
}

/// Decides whether segment `index` of an edge with `role` becomes a finger.
/// Segments inside a reserved strip are always flat.
pub fn segment_cut(role: EdgeRole, index: usize, reserved: bool) -> SegmentCut {
    let is_tab = index % 2 == 0;
    match (reserved, role, is_tab) {
        (true, _, _) => SegmentCut::Flat,
        (false, EdgeRole::Protruding, true) => SegmentCut::Flat,
        (false, EdgeRole::Protruding, false) => SegmentCut::Jointed,
        (false, EdgeRole::Recessed, true) => SegmentCut::Jointed,
        (false, EdgeRole::Recessed, false) => SegmentCut::Flat,
    }
}

/// Range `[start, end]` along an edge that is kept free of fingers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReservedStrip {
    pub start: f64,
    pub end: f64,
}

impl ReservedStrip {
    /// Strip of `width` at the start of an edge
    pub fn at_start(width: f64) -> Self {
        ReservedStrip {
            start: 0.0,
            end: width,
        }
    }

    /// Strip of `width` at the end of an edge of `length`
    pub fn at_end(length: f64, width: f64) -> Self {
        ReservedStrip {
            start: length - width,
            end: length,
        }
    }

    /// True if the segment `[s0, s1]` overlaps the strip
    pub fn overlaps(&self, s0: f64, s1: f64) -> bool {
        self.start < s1 && s0 < self.end
    }
}

/// Joint parameters shared by every edge of a case
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointParams {
    /// Material thickness, the depth of every finger
    pub thickness: f64,
    pub kerf: f64,
    /// Nominal tab width, raised to at least `4t`
    pub tab_width: f64,
    pub joint_clearance: f64,
    pub symmetric_ends: bool,
}

impl JointParams {
    /// Amount by which each side of a finger is pulled back from its segment boundary
    pub fn finger_offset(&self) -> f64 {
        self.kerf / 2.0 + self.joint_clearance
    }
}

/// Description of one edge of a panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSpec {
    pub length: f64,
    pub role: EdgeRole,
    /// A toothless edge runs straight along the baseline
    pub teeth: bool,
    pub reserved: Option<ReservedStrip>,
    /// The edge runs against the panel axis it lies on, segment parity is counted from its far end
    pub reversed: bool,
}

impl EdgeSpec {
    pub fn jointed(length: f64, role: EdgeRole) -> Self {
        EdgeSpec {
            length,
            role,
            teeth: true,
            reserved: None,
            reversed: false,
        }
    }

    pub fn straight(length: f64, role: EdgeRole) -> Self {
        EdgeSpec {
            teeth: false,
            ..EdgeSpec::jointed(length, role)
        }
    }

    pub fn with_reserved(self, reserved: Option<ReservedStrip>) -> Self {
        EdgeSpec { reserved, ..self }
    }

    pub fn reversed(self) -> Self {
        EdgeSpec {
            reversed: true,
            ..self
        }
    }
}

/// Number of segments of a jointed edge of `length`.
///
/// The nominal count is rounded from the nominal tab width and then forced odd (symmetric ends) or even.
/// Precondition: `length > 0`.
pub fn tab_count(length: f64, params: &JointParams) -> usize {
    debug_assert!(length > 0.0, "edge length must be positive: {length}");
    let nominal_width = params.tab_width.max(4.0 * params.thickness);
    let n = ((length / nominal_width).round() as usize).max(1);
    match (params.symmetric_ends, n % 2 == 0) {
        (true, true) | (false, false) => n + 1,
        _ => n,
    }
}

/// Where an edge sits on its panel: the nominal corner it starts from, its direction and the inward normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeFrame {
    pub origin: Point,
    pub direction: Point,
    pub inward: Point,
}

impl EdgeFrame {
    /// Maps local edge coordinates `(s, d)` onto the panel
    pub fn to_panel(&self, s: f64, d: f64) -> Point {
        self.origin + self.direction.scale(s) + self.inward.scale(d)
    }
}

/// Profile of one edge in local `(s, d)` coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeProfile {
    /// Ordered contour points, from `s = 0` to `s = length`
    pub points: Vec<(f64, f64)>,
    /// Root corners of every finger, anchors for relief holes
    pub valleys: Vec<(f64, f64)>,
}

impl EdgeProfile {
    pub fn start_depth(&self) -> f64 {
        self.points.first().map_or(0.0, |p| p.1)
    }

    pub fn end_depth(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.1)
    }
}

/// Builds the profile of an edge.
pub fn edge_profile(spec: &EdgeSpec, params: &JointParams) -> EdgeProfile {
    let t = params.thickness;
    let l = spec.length;

    if !spec.teeth {
        return EdgeProfile {
            points: vec![(0.0, t), (l, t)],
            valleys: vec![],
        };
    }

    let n = tab_count(l, params);
    if n == 1 {
        log::warn!(
            "[JOINT] edge of length {l:.3} only fits a single segment, it will not form a finger joint"
        );
    }
    let seg_width = l / n as f64;
    let offset = params.finger_offset();

    let mut points: Vec<(f64, f64)> = Vec::with_capacity(4 * n);
    let mut valleys = vec![];

    for i in 0..n {
        let s0 = i as f64 * seg_width;
        let s1 = if i == n - 1 { l } else { s0 + seg_width };
        let reserved = spec.reserved.is_some_and(|r| r.overlaps(s0, s1));

        // finger sides at the ends of the edge are not pulled back, corners stay square
        let a = if i == 0 { s0 } else { s0 + offset };
        let b = if i == n - 1 { s1 } else { s1 - offset };

        let phase = if spec.reversed { n - 1 - i } else { i };

        match segment_cut(spec.role, phase, reserved) {
            SegmentCut::Jointed if b - a > f64::EPSILON => {
                if i > 0 {
                    valleys.push((a, t));
                }
                if i < n - 1 {
                    valleys.push((b, t));
                }
                points.extend([(a, t), (a, 0.0), (b, 0.0), (b, t)]);
            }
            SegmentCut::Jointed => {
                log::warn!(
                    "[JOINT] finger {i} of a {l:.3} edge vanishes after a clearance of {offset:.4}"
                );
                points.extend([(s0, t), (s1, t)]);
            }
            SegmentCut::Flat => points.extend([(s0, t), (s1, t)]),
        }
    }

    EdgeProfile {
        points: simplify_profile(points, l),
        valleys,
    }
}

/// Removes repeated points and collapses the vertical steps at both ends of the edge,
/// so that the profile starts at `s = 0` and ends at `s = length` at a single depth.
fn simplify_profile(points: Vec<(f64, f64)>, length: f64) -> Vec<(f64, f64)> {
    const EPS: f64 = 1e-12;
    let same = |a: (f64, f64), b: (f64, f64)| (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS;

    let mut out: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    for p in points {
        if out.last().is_none_or(|last| !same(*last, p)) {
            out.push(p);
        }
    }
    while out.len() > 2 && out[0].0.abs() < EPS && out[1].0.abs() < EPS {
        out.remove(0);
    }
    while out.len() > 2
        && (out[out.len() - 1].0 - length).abs() < EPS
        && (out[out.len() - 2].0 - length).abs() < EPS
    {
        out.pop();
    }
    out
}
