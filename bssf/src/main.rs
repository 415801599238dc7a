use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bssf::config::BSSFConfig;
use bssf::io::cli::Cli;
use bssf::io::output::BSSFOutput;
use bssf::io::report::SolutionReport;
use bssf::opt::batch::solve_batch;
use bssf::{EPOCH, io};
use clap::Parser as ClapParser;
use itertools::Itertools;
use log::{info, warn};
use uld_rs::io::export;
use uld_rs::io::ext_repr::ExtInstance;
use uld_rs::io::import::Importer;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BSSFConfig::default()
        }
        Some(config_file) => io::read_json(config_file).context("incorrect config file format")?,
    };

    info!("[MAIN] Successfully parsed BSSFConfig: {config:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instances = args
        .input_file
        .iter()
        .map(|path| io::read_json_instance(path))
        .collect::<Result<Vec<ExtInstance>>>()?;

    let importer = Importer::new();
    let instances = ext_instances
        .iter()
        .map(|ext_instance| importer.import_instance(ext_instance))
        .collect_vec();

    let solutions = solve_batch(&instances, config)?;

    for (((input_file, ext_instance), instance), solution) in args
        .input_file
        .iter()
        .zip(ext_instances)
        .zip(&instances)
        .zip(&solutions)
    {
        let input_stem = input_stem(input_file)?;
        info!("[MAIN] {input_stem}: {} units", instance.total_unit_qty());
        SolutionReport::new(instance, solution, config.n_reported_spaces).log();

        let output = BSSFOutput {
            instance: ext_instance,
            solution: export::export_solution(solution, instance, *EPOCH),
            config,
        };
        let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    Ok(())
}

fn input_stem(path: &Path) -> Result<&str> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {}", path.display()))
}
