use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Generates finger-jointed case panels and lays them out on sheets
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Job file with the sheet stock and the cases to build
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
