use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(short = 'v', long, value_enum)]
    pub solver: Option<SolverVariant>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SolverVariant {
    /// Full (n+1) x (W+1) table
    Tabulated,
    /// Single rolling array
    Optimized,
    /// Tabulated first, then optimized
    Both,
}

impl SolverVariant {
    pub fn runs_tabulated(&self) -> bool {
        matches!(self, SolverVariant::Tabulated | SolverVariant::Both)
    }

    pub fn runs_optimized(&self) -> bool {
        matches!(self, SolverVariant::Optimized | SolverVariant::Both)
    }
}
