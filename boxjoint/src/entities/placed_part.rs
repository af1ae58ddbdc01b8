use std::sync::Arc;

use crate::entities::Part;
use crate::geometry::SheetTransform;
use crate::geometry::primitives::{Point, Rect};
use crate::util::Color;

/// Sheet a part was assigned to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SheetSlot {
    Sheet(usize),
    /// The part could not be placed on any sheet
    Unplaced,
}

impl SheetSlot {
    pub fn index(&self) -> Option<usize> {
        match self {
            SheetSlot::Sheet(i) => Some(*i),
            SheetSlot::Unplaced => None,
        }
    }

    /// External representation: the sheet index, or `-1` for [`SheetSlot::Unplaced`]
    pub fn as_signed(&self) -> i64 {
        match self {
            SheetSlot::Sheet(i) => *i as i64,
            SheetSlot::Unplaced => -1,
        }
    }
}

/// A [`Part`] together with where (and how) it ended up on a sheet.
/// The part itself is shared, never modified.
#[derive(Clone, Debug)]
pub struct PlacedPart {
    pub part: Arc<Part>,
    pub sheet: SheetSlot,
    /// Sheet coordinates of the top left corner of the part's footprint
    pub x: f64,
    pub y: f64,
    pub rotated: bool,
    pub color: Color,
    pub book_index: usize,
}

impl PlacedPart {
    pub fn new(part: Arc<Part>, sheet: SheetSlot, x: f64, y: f64, rotated: bool) -> Self {
        let book_index = part.job_id;
        PlacedPart {
            part,
            sheet,
            x,
            y,
            rotated,
            color: Color::default(),
            book_index,
        }
    }

    pub fn unplaced(part: Arc<Part>) -> Self {
        PlacedPart::new(part, SheetSlot::Unplaced, 0.0, 0.0, false)
    }

    pub fn with_color(self, color: Color) -> Self {
        PlacedPart { color, ..self }
    }

    pub fn is_placed(&self) -> bool {
        self.sheet != SheetSlot::Unplaced
    }

    pub fn transform(&self) -> SheetTransform {
        SheetTransform::for_placement(self.x, self.y, self.rotated, self.part.height)
    }

    /// Width and height the part occupies on the sheet
    pub fn footprint_dims(&self) -> (f64, f64) {
        match self.rotated {
            true => (self.part.height, self.part.width),
            false => (self.part.width, self.part.height),
        }
    }

    /// Axis-aligned footprint derived from the reported dimensions, optionally grown by `gap` towards the bottom right.
    pub fn footprint(&self, gap: f64) -> Rect {
        let (w, h) = self.footprint_dims();
        Rect::from_origin(self.x, self.y, w + gap, h + gap)
    }

    /// Every point that bounds the part on the sheet: its contour and the four extrema of every hole.
    pub fn sheet_extrema(&self) -> impl Iterator<Item = Point> + '_ {
        let t = self.transform();
        let contour = self.part.contour.iter().copied();
        let holes = self.part.holes.iter().flat_map(|h| h.circle.extrema());
        contour.chain(holes).map(move |p| t.apply(p))
    }

    /// Exact bounding box on the sheet, derived from the transformed geometry instead of the reported dimensions.
    pub fn exact_bbox(&self) -> Option<Rect> {
        Rect::bounding_box(self.sheet_extrema())
    }
}
