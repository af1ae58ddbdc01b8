use std::fmt::{Display, Formatter};

use boxjoint::entities::{Globals, PlacedPart, SheetSlot};
use boxjoint::geometry::primitives::Rect;

/// Why a placement proposed by the packer was not accepted
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RejectReason {
    /// The packer could not find room for the part
    Unplaced,
    /// The part has no geometry to check
    EmptyGeometry,
    /// The exact extent of the part leaves the usable area of its sheet
    OutOfBounds { extent: Rect, usable: Rect },
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::Unplaced => write!(f, "not placed by the packer"),
            RejectReason::EmptyGeometry => write!(f, "part has no contour"),
            RejectReason::OutOfBounds { extent, usable } => write!(
                f,
                "extent [{:.6}, {:.6}] x [{:.6}, {:.6}] exceeds usable area [{:.6}, {:.6}] x [{:.6}, {:.6}]",
                extent.x_min,
                extent.x_max,
                extent.y_min,
                extent.y_max,
                usable.x_min,
                usable.x_max,
                usable.y_min,
                usable.y_max
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlacementVerdict {
    Valid,
    Rejected(RejectReason),
}

impl PlacementVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, PlacementVerdict::Valid)
    }
}

/// Checks the exact sheet-space extent of a placement, its transformed contour and the extrema of every hole,
/// against the usable area of the sheet.
pub fn verify_placement(placed: &PlacedPart, globals: &Globals, tolerance: f64) -> PlacementVerdict {
    if placed.sheet == SheetSlot::Unplaced {
        return PlacementVerdict::Rejected(RejectReason::Unplaced);
    }
    let Some(extent) = placed.exact_bbox() else {
        return PlacementVerdict::Rejected(RejectReason::EmptyGeometry);
    };
    let usable = globals.usable_area();
    match usable.contains_rect(&extent, tolerance) {
        true => PlacementVerdict::Valid,
        false => PlacementVerdict::Rejected(RejectReason::OutOfBounds { extent, usable }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opt::maxrects::tests::square_part;
    use boxjoint::entities::{Hole, HoleKind, Part};
    use boxjoint::geometry::primitives::{Circle, Point};
    use std::sync::Arc;

    fn globals() -> Globals {
        Globals {
            sheet_width: 12.0,
            sheet_height: 12.0,
            margin: 1.0,
            part_gap: 0.0,
            allow_rotation: true,
            kerf: 0.0,
            thickness: 0.125,
        }
    }

    #[test]
    fn part_inside_usable_area_is_valid() {
        let placed = PlacedPart::new(square_part(0, 4.0, 2.0), SheetSlot::Sheet(0), 1.0, 1.0, false);
        assert!(verify_placement(&placed, &globals(), 1e-6).is_valid());

        let flush = PlacedPart::new(square_part(0, 4.0, 2.0), SheetSlot::Sheet(0), 9.0, 7.0, true);
        assert!(verify_placement(&flush, &globals(), 1e-6).is_valid());
    }

    #[test]
    fn rotated_part_is_checked_in_its_rotated_extent() {
        // 2 x 4 on the sheet once rotated, sticks out at the bottom
        let placed = PlacedPart::new(square_part(0, 4.0, 2.0), SheetSlot::Sheet(0), 1.0, 8.0, true);
        let verdict = verify_placement(&placed, &globals(), 1e-6);
        assert!(matches!(
            verdict,
            PlacementVerdict::Rejected(RejectReason::OutOfBounds { .. })
        ));
    }

    #[test]
    fn holes_count_towards_the_extent() {
        let base = square_part(0, 4.0, 2.0);
        let part = Part {
            holes: vec![Hole {
                circle: Circle::new(Point(4.0, 1.0), 0.5),
                kind: HoleKind::Magnet,
            }],
            ..(*base).clone()
        };
        let placed = PlacedPart::new(Arc::new(part), SheetSlot::Sheet(0), 7.0, 1.0, false);
        assert!(!verify_placement(&placed, &globals(), 1e-6).is_valid());
    }

    #[test]
    fn tolerance_absorbs_rounding() {
        let placed = PlacedPart::new(
            square_part(0, 4.0, 2.0),
            SheetSlot::Sheet(0),
            7.0 + 5e-7,
            1.0,
            false,
        );
        assert!(verify_placement(&placed, &globals(), 1e-6).is_valid());
        assert!(!verify_placement(&placed, &globals(), 1e-7).is_valid());
    }

    #[test]
    fn unplaced_part_is_rejected() {
        let placed = PlacedPart::unplaced(square_part(0, 4.0, 2.0));
        assert_eq!(
            verify_placement(&placed, &globals(), 1e-6),
            PlacementVerdict::Rejected(RejectReason::Unplaced)
        );
    }
}
