use std::borrow::Borrow;
use std::collections::HashSet;

use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::entities::{Globals, Part, PlacedPart};
use crate::geometry::primitives::Rect;

//Various checks to verify correctness of parts and layouts
//Used in debug_assert!() blocks and in tests

/// The reported dimensions of a part match the bounding box of its exact contour.
pub fn part_dims_match_contour(part: &Part, tolerance: f64) -> bool {
    let Some(bbox) = Rect::bounding_box(part.contour.iter().copied()) else {
        error!("[ASSERT] part {} has an empty contour", part.id);
        return false;
    };
    let matches = approx_eq!(f64, bbox.width(), part.width, epsilon = tolerance)
        && approx_eq!(f64, bbox.height(), part.height, epsilon = tolerance)
        && approx_eq!(f64, bbox.x_min, 0.0, epsilon = tolerance)
        && approx_eq!(f64, bbox.y_min, 0.0, epsilon = tolerance);
    if !matches {
        error!(
            "[ASSERT] part {} reports {} x {}, contour spans {:?}",
            part.id, part.width, part.height, bbox
        );
    }
    matches
}

/// No two parts on the same sheet come closer than `gap` to each other.
pub fn footprints_disjoint(placed: &[PlacedPart], gap: f64, tolerance: f64) -> bool {
    placed
        .iter()
        .filter(|p| p.is_placed())
        .tuple_combinations()
        .filter(|(a, b)| a.sheet == b.sheet)
        .all(|(a, b)| {
            let overlap = a.footprint(gap).overlaps(&b.footprint(gap), tolerance);
            if overlap {
                error!(
                    "[ASSERT] parts {} and {} overlap on sheet {:?}",
                    a.part.id, b.part.id, a.sheet
                );
            }
            !overlap
        })
}

/// Every placed part, including its holes, lies within the usable area of its sheet.
pub fn all_within_sheet(placed: &[PlacedPart], globals: &Globals, tolerance: f64) -> bool {
    let usable = globals.usable_area();
    placed.iter().filter(|p| p.is_placed()).all(|p| {
        let inside = p.sheet_extrema().all(|pt| usable.contains_point(&pt, tolerance));
        if !inside {
            error!(
                "[ASSERT] part {} exceeds the usable area of sheet {:?}",
                p.part.id, p.sheet
            );
        }
        inside
    })
}

/// Every generated part appears exactly once in the layout, either placed or flagged unplaced.
pub fn part_ids_conserved<P: Borrow<Part>>(parts: &[P], placed: &[PlacedPart]) -> bool {
    let expected: HashSet<usize> = parts.iter().map(|p| p.borrow().id).collect();
    let found = placed.iter().map(|p| p.part.id).collect_vec();
    let unique: HashSet<usize> = found.iter().copied().collect();

    let conserved = found.len() == parts.len() && unique == expected;
    if !conserved {
        error!(
            "[ASSERT] {} parts generated, {} in layout ({} unique)",
            parts.len(),
            found.len(),
            unique.len()
        );
    }
    conserved
}
