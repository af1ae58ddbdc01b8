use std::sync::Arc;
use std::time::Instant;

use boxjoint::entities::{CaseSpec, Globals, PanelKind, Part, PlacedPart};
use boxjoint::joinery::case_parts;
use boxjoint::util::assertions;
use itertools::Itertools;
use log::{debug, error, info, warn};
use rayon::prelude::*;
use thiserror::Error;

use crate::config::PackConfig;
use crate::opt::maxrects::pack_sheets;
use crate::opt::stats::{SheetStats, overall_density, sheet_stats};
use crate::opt::verify::{PlacementVerdict, verify_placement};

/// The layout cannot make progress: a part does not fit even alone on an empty sheet.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error(
        "{name} ({kind}, {width:.3} x {height:.3}) does not fit on an empty sheet with a usable area of {usable_width:.3} x {usable_height:.3}"
    )]
    PartTooLarge {
        kind: PanelKind,
        name: String,
        width: f64,
        height: f64,
        usable_width: f64,
        usable_height: f64,
    },
}

/// A finished, verified layout
#[derive(Clone, Debug)]
pub struct Layout {
    /// Every part, in the order it was accepted
    pub placed: Vec<PlacedPart>,
    pub sheets: Vec<SheetStats>,
    pub density: f64,
}

impl Layout {
    pub fn n_sheets(&self) -> usize {
        self.sheets.len()
    }

    pub fn on_sheet(&self, sheet: usize) -> impl Iterator<Item = &PlacedPart> {
        self.placed
            .iter()
            .filter(move |p| p.sheet.index() == Some(sheet))
    }
}

/// Generates the panels of every case and lays them out over as many sheets as needed.
pub struct LayoutSolver {
    pub globals: Globals,
    pub cases: Vec<CaseSpec>,
    pub config: PackConfig,
}

impl LayoutSolver {
    pub fn new(globals: Globals, cases: Vec<CaseSpec>, config: PackConfig) -> Self {
        Self {
            globals,
            cases,
            config,
        }
    }

    /// All panels of all cases, ordered by case and panel kind.
    pub fn generate_parts(&self) -> Vec<Part> {
        let generate = |(job_id, case): (usize, &CaseSpec)| case_parts(job_id, case, &self.globals);
        match self.config.parallel_generation {
            true => self
                .cases
                .par_iter()
                .enumerate()
                .flat_map_iter(generate)
                .collect(),
            false => self.cases.iter().enumerate().flat_map(generate).collect(),
        }
    }

    pub fn solve(&self) -> Result<Layout, LayoutError> {
        let start = Instant::now();
        let parts = self.generate_parts();
        info!(
            "[ORCH] generated {} parts for {} cases in {:.3}ms",
            parts.len(),
            self.cases.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        self.solve_parts(parts)
    }

    /// Packs, verifies and repacks until every part has a verified place on a sheet.
    pub fn solve_parts(&self, parts: Vec<Part>) -> Result<Layout, LayoutError> {
        let start = Instant::now();
        let parts = parts.into_iter().map(Arc::new).collect_vec();

        let mut accepted: Vec<PlacedPart> = Vec::with_capacity(parts.len());
        let mut pending = parts.clone();
        let mut next_sheet = 0;

        while !pending.is_empty() {
            let batch_size = pending.len();
            let packed = pack_sheets(pending, next_sheet, &self.globals, &self.config);
            let last_sheet = packed.iter().filter_map(|p| p.sheet.index()).max();

            let mut overflow = vec![];
            for placed in packed {
                match verify_placement(&placed, &self.globals, self.config.verify_tolerance) {
                    PlacementVerdict::Valid => accepted.push(placed),
                    PlacementVerdict::Rejected(reason) => {
                        warn!(
                            "[VERIFY] {} at [{}] rejected: {}",
                            placed.part.name,
                            placed.transform(),
                            reason
                        );
                        overflow.push(placed.part);
                    }
                }
            }

            if overflow.len() == batch_size {
                let part = &overflow[0];
                let err = LayoutError::PartTooLarge {
                    kind: part.kind,
                    name: part.name.clone(),
                    width: part.width,
                    height: part.height,
                    usable_width: self.globals.usable_width(),
                    usable_height: self.globals.usable_height(),
                };
                error!("[ORCH] {err}");
                return Err(err);
            }

            info!(
                "[ORCH] batch of {} parts from sheet {}: {} accepted, {} to retry",
                batch_size,
                next_sheet,
                batch_size - overflow.len(),
                overflow.len()
            );
            next_sheet = last_sheet.map_or(next_sheet, |s| s + 1);
            pending = overflow;
        }

        let placed = accepted
            .into_iter()
            .map(|p| {
                let color = self.config.color_of(p.part.job_id);
                p.with_color(color)
            })
            .collect_vec();

        debug_assert!(assertions::part_ids_conserved(&parts, &placed));
        debug_assert!(assertions::footprints_disjoint(
            &placed,
            self.globals.part_gap,
            self.config.verify_tolerance
        ));
        debug_assert!(assertions::all_within_sheet(
            &placed,
            &self.globals,
            self.config.verify_tolerance
        ));

        let sheets = sheet_stats(&placed, &self.globals);
        let density = overall_density(&sheets, &self.globals);
        for s in &sheets {
            debug!(
                "[ORCH] sheet {}: {} parts, density {:.3}%",
                s.sheet,
                s.n_parts,
                s.density * 100.0
            );
        }
        info!(
            "[ORCH] layout finished in {:.3}ms: {} parts on {} sheets with a density of {:.3}%",
            start.elapsed().as_secs_f64() * 1000.0,
            placed.len(),
            sheets.len(),
            density * 100.0
        );

        Ok(Layout {
            placed,
            sheets,
            density,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opt::maxrects::tests::square_part;
    use boxjoint::entities::SheetSlot;

    fn globals(usable: f64) -> Globals {
        Globals {
            sheet_width: usable + 1.0,
            sheet_height: usable + 1.0,
            margin: 0.5,
            part_gap: 0.0,
            allow_rotation: true,
            kerf: 0.0,
            thickness: 0.125,
        }
    }

    fn solver(usable: f64) -> LayoutSolver {
        LayoutSolver::new(globals(usable), vec![], PackConfig::default())
    }

    fn owned(part: Arc<Part>) -> Part {
        (*part).clone()
    }

    #[test]
    fn two_squares_on_one_sheet() {
        let parts = vec![owned(square_part(0, 4.0, 4.0)), owned(square_part(1, 4.0, 4.0))];
        let layout = solver(10.0).solve_parts(parts).unwrap();
        assert_eq!(layout.n_sheets(), 1);
        let positions = layout.placed.iter().map(|p| (p.x, p.y)).collect_vec();
        assert_eq!(positions, vec![(0.5, 0.5), (4.5, 0.5)]);
    }

    #[test]
    fn part_larger_than_the_sheet_is_fatal() {
        let parts = vec![owned(square_part(0, 4.0, 4.0)), owned(square_part(7, 11.0, 12.0))];
        let err = solver(10.0).solve_parts(parts).unwrap_err();
        let LayoutError::PartTooLarge {
            name,
            width,
            height,
            ..
        } = err;
        assert_eq!(name, "part 7");
        assert_eq!((width, height), (11.0, 12.0));
    }

    #[test]
    fn parts_spill_over_onto_new_sheets() {
        let parts = (0..5).map(|i| owned(square_part(i, 6.0, 6.0))).collect_vec();
        let layout = solver(10.0).solve_parts(parts).unwrap();
        assert_eq!(layout.n_sheets(), 5);
        assert_eq!(layout.on_sheet(4).count(), 1);
        assert!(layout.placed.iter().all(|p| p.sheet != SheetSlot::Unplaced));
    }

    #[test]
    fn colors_follow_the_job() {
        let config = PackConfig::default();
        let mut a = owned(square_part(0, 2.0, 2.0));
        let mut b = owned(square_part(1, 2.0, 2.0));
        a.job_id = 0;
        b.job_id = 3;
        let layout = solver(10.0).solve_parts(vec![a, b]).unwrap();
        for p in &layout.placed {
            assert_eq!(p.color, config.color_of(p.part.job_id));
        }
    }

    #[test]
    fn empty_input_gives_an_empty_layout() {
        let layout = solver(10.0).solve_parts(vec![]).unwrap();
        assert!(layout.placed.is_empty());
        assert_eq!(layout.density, 0.0);
    }
}
