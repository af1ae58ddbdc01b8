use anyhow::{Result, ensure};

use crate::entities::Globals;

/// Dimensions of a box along its three axes
#[derive(Clone, Debug, PartialEq, Copy, Default)]
pub struct BoxDims {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

/// Magnets pressed into the base panel to hold a closed lid
#[derive(Clone, Debug, PartialEq, Copy, Default)]
pub struct MagnetSpec {
    /// Number of magnet holes: 0, 2 or 4
    pub count: usize,
    pub diameter: f64,
    /// Extra play added to the diameter
    pub clearance: f64,
    /// Nominal distance from the hole center to the panel edges
    pub edge_offset: f64,
}

impl MagnetSpec {
    pub fn hole_radius(&self, kerf: f64) -> f64 {
        (self.diameter + self.clearance + kerf) / 2.0
    }
}

/// Specification of a single case (a book box), from which its six panels are derived.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseSpec {
    pub label: Option<String>,
    /// Outer dimensions of the box
    pub external: BoxDims,
    /// Clearance on each side of every axis, subtracted twice from the external dimensions
    pub clearance: BoxDims,
    /// Height of the walls above the base, defaults to the internal height
    pub visible_height: Option<f64>,
    /// Additional headroom between the contents and the lid
    pub raise_gap: f64,
    /// Nominal tab width, never narrower than four times the material thickness
    pub tab_width: f64,
    /// Play between mating fingers
    pub joint_clearance: f64,
    /// Forces an odd number of segments per joint so that both ends of an edge are alike
    pub symmetric_ends: bool,
    /// Width of the strip kept free of fingers along the tape hinge, `0.0` disables the hinge
    pub tape_strip: f64,
    pub magnets: MagnetSpec,
}

impl CaseSpec {
    pub fn internal(&self) -> BoxDims {
        BoxDims {
            width: self.external.width - 2.0 * self.clearance.width,
            depth: self.external.depth - 2.0 * self.clearance.depth,
            height: self.external.height - 2.0 * self.clearance.height,
        }
    }

    pub fn wall_height(&self, thickness: f64) -> f64 {
        self.visible_height.unwrap_or(self.internal().height) + self.raise_gap + 2.0 * thickness
    }

    pub fn has_tape_hinge(&self) -> bool {
        self.tape_strip > 0.0
    }

    /// Label used to name the panels of this case, `job_id` is 0-based.
    pub fn display_label(&self, job_id: usize) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("Case {}", job_id + 1),
        }
    }

    pub fn validate(&self, globals: &Globals) -> Result<()> {
        let internal = self.internal();
        ensure!(
            internal.width > 0.0 && internal.depth > 0.0 && internal.height > 0.0,
            "clearances leave no internal volume: {internal:?}"
        );
        ensure!(
            self.clearance.width >= 0.0 && self.clearance.depth >= 0.0 && self.clearance.height >= 0.0,
            "clearances cannot be negative: {:?}",
            self.clearance
        );
        ensure!(self.tab_width > 0.0, "tab width must be positive");
        ensure!(
            self.joint_clearance >= 0.0 && self.raise_gap >= 0.0 && self.tape_strip >= 0.0,
            "joint clearance, raise gap and tape strip cannot be negative"
        );
        if let Some(vh) = self.visible_height {
            ensure!(vh > 0.0, "visible height must be positive, got {vh}");
        }
        ensure!(
            matches!(self.magnets.count, 0 | 2 | 4),
            "magnet count must be 0, 2 or 4, got {}",
            self.magnets.count
        );
        if self.magnets.count > 0 {
            ensure!(
                self.magnets.diameter > 0.0 && self.magnets.edge_offset > 0.0,
                "magnets need a positive diameter and edge offset"
            );
        }
        let min_tab_width = 4.0 * globals.thickness;
        if self.tab_width < min_tab_width {
            log::debug!(
                "[CASE] tab width {} is below 4t, {} will be used instead",
                self.tab_width,
                min_tab_width
            );
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_case() -> CaseSpec {
        CaseSpec {
            label: None,
            external: BoxDims {
                width: 6.5,
                depth: 9.0,
                height: 1.5,
            },
            clearance: BoxDims {
                width: 0.125,
                depth: 0.125,
                height: 0.0625,
            },
            visible_height: None,
            raise_gap: 0.0,
            tab_width: 0.75,
            joint_clearance: 0.004,
            symmetric_ends: true,
            tape_strip: 0.0,
            magnets: MagnetSpec::default(),
        }
    }

    pub(crate) fn sample_globals() -> Globals {
        Globals {
            sheet_width: 24.0,
            sheet_height: 18.0,
            margin: 0.25,
            part_gap: 0.125,
            allow_rotation: true,
            kerf: 0.008,
            thickness: 0.125,
        }
    }

    #[test]
    fn internal_dims_subtract_clearance_twice() {
        let internal = sample_case().internal();
        assert_eq!(internal.width, 6.25);
        assert_eq!(internal.depth, 8.75);
        assert_eq!(internal.height, 1.375);
    }

    #[test]
    fn wall_height_adds_joints_and_raise_gap() {
        let case = CaseSpec {
            visible_height: Some(1.0),
            raise_gap: 0.25,
            ..sample_case()
        };
        assert_eq!(case.wall_height(0.125), 1.5);
    }

    #[test]
    fn odd_magnet_count_is_rejected() {
        let case = CaseSpec {
            magnets: MagnetSpec {
                count: 3,
                diameter: 0.25,
                clearance: 0.01,
                edge_offset: 1.0,
            },
            ..sample_case()
        };
        assert!(case.validate(&sample_globals()).is_err());
        assert!(sample_case().validate(&sample_globals()).is_ok());
    }

    #[test]
    fn label_defaults_to_one_based_index() {
        assert_eq!(sample_case().display_label(2), "Case 3");
    }
}
