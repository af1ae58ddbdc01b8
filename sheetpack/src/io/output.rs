use std::time::Instant;

use boxjoint::io::export::export_placed_part;
use boxjoint::io::ext_repr::{ExtJob, ExtPlacedPart};
use serde::{Deserialize, Serialize};

use crate::config::PackConfig;
use crate::opt::orchestrator::Layout;
use crate::opt::stats::SheetStats;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JobOutput {
    #[serde(flatten)]
    pub job: ExtJob,
    pub solution: ExtSolution,
    pub config: PackConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub n_sheets: usize,
    pub density: f64,
    pub placed_parts: Vec<ExtPlacedPart>,
    pub sheets: Vec<SheetStats>,
    /// Seconds since the start of the process
    pub run_time_sec: f64,
}

pub fn export_layout(layout: &Layout, epoch: Instant) -> ExtSolution {
    ExtSolution {
        n_sheets: layout.n_sheets(),
        density: layout.density,
        placed_parts: layout.placed.iter().map(export_placed_part).collect(),
        sheets: layout.sheets.clone(),
        run_time_sec: epoch.elapsed().as_secs_f64(),
    }
}
