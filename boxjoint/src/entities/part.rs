use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use svg::node::element::path::Data;

use crate::geometry::SheetTransform;
use crate::geometry::primitives::{Circle, Point, Rect};
use crate::io::path_data;

/// The six panels every case is made of
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    Base,
    Lid,
    Front,
    Back,
    Left,
    Right,
}

impl PanelKind {
    pub const ALL: [PanelKind; 6] = [
        PanelKind::Base,
        PanelKind::Lid,
        PanelKind::Front,
        PanelKind::Back,
        PanelKind::Left,
        PanelKind::Right,
    ];

    /// Position of the panel within [`PanelKind::ALL`]
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

impl Display for PanelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PanelKind::Base => "base",
            PanelKind::Lid => "lid",
            PanelKind::Front => "front",
            PanelKind::Back => "back",
            PanelKind::Left => "left",
            PanelKind::Right => "right",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleKind {
    /// Stress relief at the root of a finger joint notch
    Relief,
    /// Pocket for a lid magnet
    Magnet,
}

/// Circular hole cut out of a panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hole {
    pub circle: Circle,
    pub kind: HoleKind,
}

/// A panel to be cut, in its own local coordinate system with the top left corner of its bounding box at the origin.
/// Immutable once created.
#[derive(Clone, Debug)]
pub struct Part {
    /// Unique over all jobs of a layout
    pub id: usize,
    /// Index of the case this panel belongs to
    pub job_id: usize,
    pub name: String,
    pub kind: PanelKind,
    /// Width of the kerf compensated outline
    pub width: f64,
    /// Height of the kerf compensated outline
    pub height: f64,
    /// Exact, kerf compensated outline; closed implicitly
    pub contour: Vec<Point>,
    pub holes: Vec<Hole>,
    pub score_lines: Vec<(Point, Point)>,
    pub label_anchor: Point,
}

impl Part {
    pub fn bbox(&self) -> Rect {
        Rect::from_origin(0.0, 0.0, self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The outer cut as a single closed path
    pub fn outer_cut(&self) -> Data {
        path_data::polygon_data(&self.contour, &SheetTransform::empty())
    }

    /// One closed path per hole
    pub fn inner_cuts(&self) -> Vec<Data> {
        self.holes
            .iter()
            .map(|h| path_data::circle_data(&h.circle, &SheetTransform::empty()))
            .collect()
    }

    pub fn score_paths(&self) -> Vec<Data> {
        self.score_lines
            .iter()
            .map(|&(a, b)| path_data::segment_data(a, b, &SheetTransform::empty()))
            .collect()
    }

    pub fn n_holes_of(&self, kind: HoleKind) -> usize {
        self.holes.iter().filter(|h| h.kind == kind).count()
    }
}
