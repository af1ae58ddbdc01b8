use serde::{Deserialize, Serialize};

use crate::entities::{HoleKind, PanelKind};
use crate::util::Color;

fn default_true() -> bool {
    true
}

/// External representation of a job: the shared [`Globals`](crate::entities::Globals) and one entry per case.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtJob {
    pub globals: ExtGlobals,
    pub cases: Vec<ExtCaseSpec>,
}

/// External representation of [`Globals`](crate::entities::Globals).
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtGlobals {
    pub sheet_width: f64,
    pub sheet_height: f64,
    #[serde(default)]
    pub margin: f64,
    #[serde(default)]
    pub part_gap: f64,
    #[serde(default = "default_true")]
    pub allow_rotation: bool,
    #[serde(default)]
    pub kerf: f64,
    pub thickness: f64,
}

/// Dimensions along the width, depth and height axes of a box
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct ExtBoxDims {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

/// External representation of a [`MagnetSpec`](crate::entities::MagnetSpec).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct ExtMagnets {
    pub count: usize,
    #[serde(default)]
    pub diameter: f64,
    #[serde(default)]
    pub clearance: f64,
    #[serde(default)]
    pub edge_offset: f64,
}

/// External representation of a [`CaseSpec`](crate::entities::CaseSpec).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCaseSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub external: ExtBoxDims,
    #[serde(default)]
    pub clearance: ExtBoxDims,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_height: Option<f64>,
    #[serde(default)]
    pub raise_gap: f64,
    pub tab_width: f64,
    #[serde(default)]
    pub joint_clearance: f64,
    #[serde(default = "default_true")]
    pub symmetric_ends: bool,
    #[serde(default)]
    pub tape_strip: f64,
    #[serde(default)]
    pub magnets: ExtMagnets,
}

/// External representation of a [`Hole`](crate::entities::Hole), in the part's local coordinates
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtHole {
    pub kind: HoleKind,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// External representation of a [`PlacedPart`](crate::entities::PlacedPart).
/// Carries everything a renderer needs without re-deriving geometry.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedPart {
    pub id: usize,
    pub job_id: usize,
    pub book_index: usize,
    pub name: String,
    pub kind: PanelKind,
    /// Index of the sheet, `-1` if the part could not be placed
    pub sheet: i64,
    pub x: f64,
    pub y: f64,
    pub rotated: bool,
    pub color: Color,
    pub width: f64,
    pub height: f64,
    /// Path data of the outer cut, in the part's local coordinates.
    /// Path coordinates are single precision, renderers that need more read `contour`.
    pub outer_cut: String,
    /// Exact vertices of the outer cut, in the part's local coordinates
    #[serde(default)]
    pub contour: Vec<(f64, f64)>,
    #[serde(default)]
    pub inner_cuts: Vec<String>,
    #[serde(default)]
    pub score_paths: Vec<String>,
    #[serde(default)]
    pub holes: Vec<ExtHole>,
    pub label_anchor: (f64, f64),
}
