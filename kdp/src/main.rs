use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use kdp::config::KdpConfig;
use kdp::io::cli::Cli;
use kdp::io::output::KdpOutput;
use kdp::{io, runner};
use knapsack_dp::io::import;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            KdpConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    if let Some(solver) = args.solver {
        config.solver = solver;
    }

    info!("[MAIN] Successfully parsed KdpConfig: {config:?}");

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = import::import(&ext_instance)
        .with_context(|| format!("invalid instance: {}", args.input_file.display()))?;

    let solutions = {
        let mut stdout = std::io::stdout().lock();
        let solutions = runner::solve_instance(&instance, &config, &mut stdout)?;
        stdout.flush()?;
        solutions
    };

    if let Some(solution_folder) = args.solution_folder {
        let input_stem = args
            .input_file
            .file_stem()
            .and_then(|s| s.to_str())
            .context("input file has no valid file stem")?;

        fs::create_dir_all(&solution_folder).with_context(|| {
            format!("could not create solution folder: {}", solution_folder.display())
        })?;

        let output = KdpOutput {
            instance: ext_instance,
            solutions,
            config,
        };
        let solution_path = solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    Ok(())
}
