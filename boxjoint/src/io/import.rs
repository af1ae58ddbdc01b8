use anyhow::{Context, Result};
use itertools::Itertools;

use crate::entities::{BoxDims, CaseSpec, Globals, MagnetSpec};
use crate::io::ext_repr::{ExtBoxDims, ExtCaseSpec, ExtGlobals, ExtJob, ExtMagnets};

/// Converts and validates a complete job.
pub fn import_job(ext_job: &ExtJob) -> Result<(Globals, Vec<CaseSpec>)> {
    let globals = import_globals(&ext_job.globals);
    globals.validate().context("invalid globals")?;

    let cases = ext_job
        .cases
        .iter()
        .enumerate()
        .map(|(i, ext_case)| {
            let case = import_case(ext_case);
            case.validate(&globals)
                .with_context(|| format!("invalid case #{i} ({})", case.display_label(i)))?;
            Ok(case)
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "[IMPORT] job with {} case(s): {}",
        cases.len(),
        cases
            .iter()
            .enumerate()
            .map(|(i, c)| c.display_label(i))
            .join(", ")
    );

    Ok((globals, cases))
}

pub fn import_globals(ext: &ExtGlobals) -> Globals {
    Globals {
        sheet_width: ext.sheet_width,
        sheet_height: ext.sheet_height,
        margin: ext.margin,
        part_gap: ext.part_gap,
        allow_rotation: ext.allow_rotation,
        kerf: ext.kerf,
        thickness: ext.thickness,
    }
}

pub fn import_case(ext: &ExtCaseSpec) -> CaseSpec {
    CaseSpec {
        label: ext.label.clone(),
        external: import_dims(&ext.external),
        clearance: import_dims(&ext.clearance),
        visible_height: ext.visible_height,
        raise_gap: ext.raise_gap,
        tab_width: ext.tab_width,
        joint_clearance: ext.joint_clearance,
        symmetric_ends: ext.symmetric_ends,
        tape_strip: ext.tape_strip,
        magnets: import_magnets(&ext.magnets),
    }
}

fn import_dims(ext: &ExtBoxDims) -> BoxDims {
    BoxDims {
        width: ext.width,
        depth: ext.depth,
        height: ext.height,
    }
}

fn import_magnets(ext: &ExtMagnets) -> MagnetSpec {
    MagnetSpec {
        count: ext.count,
        diameter: ext.diameter,
        clearance: ext.clearance,
        edge_offset: ext.edge_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = r#"{
        "globals": { "sheet_width": 24, "sheet_height": 12, "margin": 0.25, "part_gap": 0.1, "kerf": 0.008, "thickness": 0.125 },
        "cases": [
            { "external": { "width": 6.5, "depth": 9.0, "height": 1.5 }, "tab_width": 0.75 },
            { "label": "Atlas", "external": { "width": 8, "depth": 11, "height": 2 }, "tab_width": 1.0,
              "symmetric_ends": false, "tape_strip": 0.5,
              "magnets": { "count": 2, "diameter": 0.25, "clearance": 0.01, "edge_offset": 1.0 } }
        ]
    }"#;

    #[test]
    fn defaults_are_filled_in() {
        let ext: ExtJob = serde_json::from_str(JOB).unwrap();
        let (globals, cases) = import_job(&ext).unwrap();

        assert!(globals.allow_rotation);
        assert_eq!(cases.len(), 2);
        assert!(cases[0].symmetric_ends);
        assert_eq!(cases[0].magnets.count, 0);
        assert_eq!(cases[0].internal().width, 6.5);
        assert!(!cases[1].symmetric_ends);
        assert_eq!(cases[1].display_label(1), "Atlas");
        assert_eq!(cases[1].magnets.count, 2);
    }

    #[test]
    fn invalid_case_is_reported_with_its_index() {
        let mut ext: ExtJob = serde_json::from_str(JOB).unwrap();
        ext.cases[1].magnets.count = 1;
        let err = import_job(&ext).unwrap_err();
        assert!(format!("{err:#}").contains("case #1"));
    }

    #[test]
    fn invalid_globals_are_rejected() {
        let mut ext: ExtJob = serde_json::from_str(JOB).unwrap();
        ext.globals.thickness = 0.0;
        assert!(import_job(&ext).is_err());
    }
}
