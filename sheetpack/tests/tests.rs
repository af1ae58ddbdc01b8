#[cfg(test)]
mod tests {
    use std::path::Path;

    use boxjoint::entities::{HoleKind, PanelKind, SheetSlot};
    use boxjoint::io::import::import_job;
    use boxjoint::util::assertions;
    use float_cmp::approx_eq;
    use itertools::Itertools;
    use sheetpack::config::PackConfig;
    use sheetpack::io;
    use sheetpack::io::output::export_layout;
    use sheetpack::io::path_groups::{CutLayer, group_paths};
    use sheetpack::{EPOCH, LayoutError, LayoutSolver};
    use test_case::test_case;

    const TOLERANCE: f64 = 1e-6;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn solver_for(job_path: &str, config: PackConfig) -> LayoutSolver {
        let ext_job = io::read_job(Path::new(job_path)).unwrap();
        let (globals, cases) = import_job(&ext_job).unwrap();
        LayoutSolver::new(globals, cases, config)
    }

    #[test_case("../assets/paperbacks.json"; "paperbacks")]
    #[test_case("../assets/atlas.json"; "atlas")]
    #[test_case("../assets/no_rotation.json"; "no_rotation")]
    fn test_job(job_path: &str) {
        init_logger();
        let solver = solver_for(job_path, PackConfig::default());
        let parts = solver.generate_parts();
        assert_eq!(parts.len(), 6 * solver.cases.len());

        let layout = solver.solve_parts(parts.clone()).unwrap();
        let placed = &layout.placed;

        assert!(assertions::part_ids_conserved(&parts, placed));
        assert!(placed.iter().all(|p| p.is_placed()));
        assert!(assertions::footprints_disjoint(
            placed,
            solver.globals.part_gap,
            TOLERANCE
        ));
        assert!(assertions::all_within_sheet(placed, &solver.globals, TOLERANCE));
        if !solver.globals.allow_rotation {
            assert!(placed.iter().all(|p| !p.rotated));
        }

        for part in &parts {
            assert!(assertions::part_dims_match_contour(part, TOLERANCE));
        }

        let n_parts: usize = layout.sheets.iter().map(|s| s.n_parts).sum();
        assert_eq!(n_parts, parts.len());
        assert!(layout.density > 0.0 && layout.density <= 1.0);
    }

    #[test_case("../assets/paperbacks.json"; "paperbacks")]
    #[test_case("../assets/atlas.json"; "atlas")]
    fn layout_is_deterministic(job_path: &str) {
        init_logger();
        let sequential = PackConfig {
            parallel_generation: false,
            ..PackConfig::default()
        };
        let a = solver_for(job_path, PackConfig::default()).solve().unwrap();
        let b = solver_for(job_path, sequential).solve().unwrap();

        let signature = |l: &sheetpack::Layout| {
            l.placed
                .iter()
                .map(|p| (p.part.id, p.sheet, p.x, p.y, p.rotated))
                .collect_vec()
        };
        assert_eq!(signature(&a), signature(&b));
    }

    #[test]
    fn oversized_case_is_fatal() {
        init_logger();
        let err = solver_for("../assets/oversized.json", PackConfig::default())
            .solve()
            .unwrap_err();
        let LayoutError::PartTooLarge {
            kind,
            name,
            width,
            height,
            ..
        } = &err;
        assert_eq!(*kind, PanelKind::Base);
        assert_eq!(name, "Folio base");
        assert!(*width > 11.5 && *height > 7.5);
        assert!(err.to_string().contains("Folio base"));
    }

    #[test]
    fn atlas_features_survive_the_layout() {
        init_logger();
        let layout = solver_for("../assets/atlas.json", PackConfig::default())
            .solve()
            .unwrap();

        let base = layout
            .placed
            .iter()
            .find(|p| p.part.name == "Atlas base")
            .unwrap();
        assert_eq!(base.part.n_holes_of(HoleKind::Magnet), 4);
        assert!(base.part.n_holes_of(HoleKind::Relief) > 0);

        let gazetteer_base = layout
            .placed
            .iter()
            .find(|p| p.part.name == "Gazetteer base")
            .unwrap();
        assert_eq!(gazetteer_base.part.n_holes_of(HoleKind::Magnet), 2);

        let scored = layout
            .placed
            .iter()
            .filter(|p| !p.part.score_lines.is_empty())
            .map(|p| p.part.name.as_str())
            .sorted()
            .collect_vec();
        assert_eq!(scored, vec!["Atlas back", "Atlas lid"]);

        // every case keeps its own color
        let colors = layout
            .placed
            .iter()
            .map(|p| (p.part.job_id, p.color))
            .into_group_map();
        assert!(colors.values().all(|c| c.iter().all_equal()));
        assert_ne!(colors[&0][0], colors[&1][0]);
    }

    #[test]
    fn path_groups_cover_every_part_on_a_sheet() {
        init_logger();
        let layout = solver_for("../assets/paperbacks.json", PackConfig::default())
            .solve()
            .unwrap();

        for sheet in 0..layout.n_sheets() {
            let groups = group_paths(&layout.placed, sheet);
            let n_outer: usize = groups
                .iter()
                .filter(|(k, _)| k.layer == CutLayer::OuterCut)
                .map(|(_, paths)| paths.len())
                .sum();
            assert_eq!(n_outer, layout.on_sheet(sheet).count());
        }
    }

    #[test]
    fn solution_export_round_trips_through_json() {
        init_logger();
        let layout = solver_for("../assets/paperbacks.json", PackConfig::default())
            .solve()
            .unwrap();
        let solution = export_layout(&layout, *EPOCH);
        assert_eq!(solution.placed_parts.len(), 18);
        assert!(solution.placed_parts.iter().all(|p| p.sheet >= 0));
        assert!(solution.placed_parts.iter().all(|p| p.outer_cut.starts_with('M')));

        let json = serde_json::to_string(&solution).unwrap();
        let parsed: sheetpack::io::output::ExtSolution = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.n_sheets, layout.n_sheets());
        assert!(approx_eq!(f64, parsed.density, layout.density, ulps = 2));
        assert_eq!(parsed.placed_parts[0].id, solution.placed_parts[0].id);
    }

    #[test]
    fn first_sheet_is_filled_before_the_next() {
        init_logger();
        let layout = solver_for("../assets/no_rotation.json", PackConfig::default())
            .solve()
            .unwrap();
        let sheets = layout.placed.iter().map(|p| p.sheet).dedup().collect_vec();
        assert!(sheets.is_sorted());
        assert_eq!(sheets[0], SheetSlot::Sheet(0));
    }
}
