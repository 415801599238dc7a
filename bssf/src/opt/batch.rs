use anyhow::{Context, Result};
use log::info;
use rayon::prelude::*;
use uld_rs::entities::{Instance, LoadingSolution};

use crate::config::BSSFConfig;
use crate::opt::bssf_optimizer::BSSFOptimizer;
use crate::opt::validate_solution;

/// Solves every instance independently on a dedicated rayon pool.
/// Solutions are returned in the order of the instances.
pub fn solve_batch(instances: &[Instance], config: BSSFConfig) -> Result<Vec<LoadingSolution>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.n_threads.unwrap_or(0))
        .thread_name(|i| format!("bssf-{i}"))
        .build()
        .context("could not build thread pool")?;

    info!(
        "[BATCH] solving {} instances on {} threads",
        instances.len(),
        pool.current_num_threads()
    );

    pool.install(|| {
        instances
            .par_iter()
            .enumerate()
            .map(|(i, instance)| -> Result<LoadingSolution> {
                let solution = BSSFOptimizer::new(instance.clone(), config).solve();
                if config.validate_solution {
                    validate_solution(instance, &solution)
                        .with_context(|| format!("instance {i} produced an infeasible solution"))?;
                }
                Ok(solution)
            })
            .collect::<Result<Vec<LoadingSolution>>>()
    })
}
