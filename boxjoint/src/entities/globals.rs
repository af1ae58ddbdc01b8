use anyhow::{Result, ensure};

use crate::geometry::primitives::Rect;

/// Manufacturing parameters shared by every case of a job: the sheet stock and the cutting process.
/// All lengths are expressed in the same linear unit (e.g. inches).
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Globals {
    pub sheet_width: f64,
    pub sheet_height: f64,
    /// Border kept free of parts on every side of the sheet
    pub margin: f64,
    /// Minimum distance between two parts
    pub part_gap: f64,
    /// Whether parts may be turned by 90° on the sheet
    pub allow_rotation: bool,
    /// Width of material removed by the laser
    pub kerf: f64,
    /// Material thickness
    pub thickness: f64,
}

impl Globals {
    pub fn usable_width(&self) -> f64 {
        self.sheet_width - 2.0 * self.margin
    }

    pub fn usable_height(&self) -> f64 {
        self.sheet_height - 2.0 * self.margin
    }

    /// The region of a sheet in which parts may be placed, in sheet coordinates.
    pub fn usable_area(&self) -> Rect {
        Rect::from_origin(
            self.margin,
            self.margin,
            self.usable_width(),
            self.usable_height(),
        )
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.sheet_width > 0.0 && self.sheet_height > 0.0,
            "sheet dimensions must be positive, got {} x {}",
            self.sheet_width,
            self.sheet_height
        );
        ensure!(self.thickness > 0.0, "material thickness must be positive");
        ensure!(
            self.margin >= 0.0 && self.part_gap >= 0.0 && self.kerf >= 0.0,
            "margin ({}), part gap ({}) and kerf ({}) cannot be negative",
            self.margin,
            self.part_gap,
            self.kerf
        );
        ensure!(
            self.usable_width() > 0.0 && self.usable_height() > 0.0,
            "margin of {} leaves no usable area on a {} x {} sheet",
            self.margin,
            self.sheet_width,
            self.sheet_height
        );
        Ok(())
    }
}
