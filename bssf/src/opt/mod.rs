use anyhow::{Result, ensure};
use uld_rs::entities::{Instance, LoadingSolution};
use uld_rs::util::assertions;

pub mod batch;
pub mod bssf_optimizer;
pub mod score;
pub mod search;

/// Fails if the solution violates any of the feasibility checks in [`assertions`].
/// The violation itself is logged at error level.
pub fn validate_solution(instance: &Instance, solution: &LoadingSolution) -> Result<()> {
    ensure!(
        assertions::solution_is_feasible(instance, solution),
        "infeasible solution: {} placed, {} unplaced, {} remaining weight",
        solution.n_placed(),
        solution.n_unplaced(),
        solution.remaining_weight
    );
    Ok(())
}
