use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use boxjoint::io::import::import_job;
use clap::Parser as ClapParser;
use log::{info, warn};
use sheetpack::config::PackConfig;
use sheetpack::io::cli::Cli;
use sheetpack::io::output::{JobOutput, export_layout};
use sheetpack::{EPOCH, LayoutSolver, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PackConfig::default()
        }
        Some(config_file) => {
            io::read_json(&config_file).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed PackConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {}", args.input_file.display()))?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_job = io::read_job(args.input_file.as_path())?;
    let (globals, cases) = import_job(&ext_job)?;
    info!(
        "[MAIN] {} cases on {} x {} sheets",
        cases.len(),
        globals.sheet_width,
        globals.sheet_height
    );

    let solver = LayoutSolver::new(globals, cases, config.clone());
    let layout = solver.solve()?;

    let output = JobOutput {
        job: ext_job,
        solution: export_layout(&layout, *EPOCH),
        config,
    };
    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}
