use log::debug;

use crate::entities::{CaseSpec, Globals, Hole, HoleKind, PanelKind, Part};
use crate::geometry::primitives::{Circle, Point};
use crate::joinery::clearance::{ClearanceRules, settle_clearance};
use crate::joinery::edge::{EdgeRole, EdgeSpec, JointParams, ReservedStrip};
use crate::joinery::panel::{PanelEdges, PanelOutline, generate_panel};

use EdgeRole::{Protruding, Recessed};

/// Upper bound on the clearance passes spent on a single magnet hole
const MAX_CLEARANCE_PASSES: usize = 8;

/// Generates the six panels of a case. Part ids are `6 * job_id` up to `6 * job_id + 5`, in [`PanelKind::ALL`] order.
pub fn case_parts(job_id: usize, case: &CaseSpec, globals: &Globals) -> Vec<Part> {
    let params = joint_params(case, globals);
    let dims = PanelDims::of(case, globals.thickness);
    let tape = case.has_tape_hinge().then_some(case.tape_strip);
    let label = case.display_label(job_id);

    let parts: Vec<Part> = PanelKind::ALL
        .into_iter()
        .map(|kind| {
            let edges = panel_edges(kind, &dims, tape);
            let outline = generate_panel(&edges, &params);
            let mut holes = outline.relief_holes();
            if kind == PanelKind::Base {
                holes.extend(magnet_holes(case, globals, &outline));
            }
            let score_lines = match (kind, tape) {
                (PanelKind::Lid | PanelKind::Back, Some(tape)) => vec![score_line(&outline, tape)],
                _ => vec![],
            };
            let name = format!("{label} {kind}");
            debug!(
                "[FACTORY] {name}: {:.3} x {:.3}, {} holes",
                outline.width,
                outline.height,
                holes.len()
            );
            Part {
                id: job_id * PanelKind::ALL.len() + kind.ordinal(),
                job_id,
                name,
                kind,
                width: outline.width,
                height: outline.height,
                label_anchor: outline.bbox().centroid(),
                contour: outline.contour,
                holes,
                score_lines,
            }
        })
        .collect();

    parts
}

/// Nominal outer dimensions of the panels of a case
#[derive(Clone, Copy)]
struct PanelDims {
    width: f64,
    depth: f64,
    height: f64,
}

impl PanelDims {
    fn of(case: &CaseSpec, t: f64) -> Self {
        let internal = case.internal();
        PanelDims {
            width: internal.width + 2.0 * t,
            depth: internal.depth + 2.0 * t,
            height: case.wall_height(t),
        }
    }
}

fn joint_params(case: &CaseSpec, globals: &Globals) -> JointParams {
    JointParams {
        thickness: globals.thickness,
        kerf: globals.kerf,
        tab_width: case.tab_width,
        joint_clearance: case.joint_clearance,
        symmetric_ends: case.symmetric_ends,
    }
}

/// Edge roles of every panel.
/// The base and lid receive the walls, front and back push into everything around them,
/// left and right push into the base and lid and receive front and back.
///
/// Every panel is assembled with its local axes along the box axes: width along the front,
/// depth from the back towards the front, height from the lid down. The lid's top edge and the
/// top edges of the walls then lie along the lid, and the left edges of both side walls against the back.
/// With a tape hinge the lid and back meet along a straight edge, the walls keep a strip next to it free of fingers.
fn panel_edges(kind: PanelKind, dims: &PanelDims, tape: Option<f64>) -> PanelEdges {
    let PanelDims {
        width: w,
        depth: d,
        height: h,
    } = *dims;

    let box_edges = |w: f64, h: f64, horizontal: EdgeRole, vertical: EdgeRole| PanelEdges {
        top: EdgeSpec::jointed(w, horizontal),
        right: EdgeSpec::jointed(h, vertical),
        bottom: EdgeSpec::jointed(w, horizontal),
        left: EdgeSpec::jointed(h, vertical),
    };

    let edges = match kind {
        PanelKind::Base | PanelKind::Lid => box_edges(w, d, Recessed, Recessed),
        PanelKind::Front | PanelKind::Back => box_edges(w, h, Protruding, Protruding),
        PanelKind::Left | PanelKind::Right => box_edges(d, h, Protruding, Recessed),
    };
    let Some(tape) = tape else {
        return edges;
    };

    match kind {
        PanelKind::Lid | PanelKind::Back => {
            let l = edges.right.length;
            PanelEdges {
                top: EdgeSpec::straight(edges.top.length, edges.top.role),
                right: edges.right.with_reserved(Some(ReservedStrip::at_start(tape))),
                left: edges.left.with_reserved(Some(ReservedStrip::at_end(l, tape))),
                ..edges
            }
        }
        PanelKind::Left | PanelKind::Right => PanelEdges {
            top: edges.top.with_reserved(Some(ReservedStrip::at_start(tape))),
            left: edges.left.with_reserved(Some(ReservedStrip::at_end(edges.left.length, tape))),
            ..edges
        },
        PanelKind::Base | PanelKind::Front => edges,
    }
}

/// Fold guide for the tape, parallel to the top edge at the depth of the tape strip
fn score_line(outline: &PanelOutline, tape: f64) -> (Point, Point) {
    let y = outline.to_local(Point(0.0, tape)).1;
    (Point(0.0, y), Point(outline.width, y))
}

/// Magnet pockets in the base, symmetric about its center and kept clear of the edges and finger roots.
fn magnet_holes(case: &CaseSpec, globals: &Globals, outline: &PanelOutline) -> Vec<Hole> {
    let magnets = &case.magnets;
    let (w, h) = (outline.width, outline.height);
    let offset = magnets.edge_offset;
    let centers = match magnets.count {
        2 => vec![Point(offset, h / 2.0), Point(w - offset, h / 2.0)],
        4 => vec![
            Point(offset, offset),
            Point(w - offset, offset),
            Point(offset, h - offset),
            Point(w - offset, h - offset),
        ],
        _ => vec![],
    };
    let radius = magnets.hole_radius(globals.kerf);
    let rules = ClearanceRules::for_thickness(globals.thickness);

    centers
        .into_iter()
        .map(|c| Hole {
            circle: settle_clearance(
                Circle::new(c, radius),
                w,
                h,
                &outline.valleys,
                &rules,
                MAX_CLEARANCE_PASSES,
            ),
            kind: HoleKind::Magnet,
        })
        .collect()
}
