use std::time::Instant;

use log::{debug, info, warn};
use thousands::Separable;
use uld_rs::entities::{
    CargoItem, Container, Instance, LoadingProblem, LoadingSolution, Placement, RejectionReason,
};

use crate::config::BSSFConfig;
use crate::opt::search::{search, unit_placement_order};

/// Best-Short-Side-Fit (BSSF) optimizer for loading a single container.
///
/// Units are considered one by one, largest first, and each is placed at the site that leaves the
/// smallest margin. A unit that cannot be placed is never reconsidered.
pub struct BSSFOptimizer {
    pub instance: Instance,
    pub problem: LoadingProblem,
    pub config: BSSFConfig,
}

impl BSSFOptimizer {
    pub fn new(instance: Instance, config: BSSFConfig) -> Self {
        let problem = LoadingProblem::new(instance.clone());
        Self {
            instance,
            problem,
            config,
        }
    }

    /// Computes a full loading from scratch. Repeated calls produce identical solutions.
    pub fn solve(&mut self) -> LoadingSolution {
        let start = Instant::now();
        self.problem = LoadingProblem::new(self.instance.clone());

        let units = unit_placement_order(&self.instance);
        let n_units = units.len();

        if self.instance.container.is_degenerate() {
            warn!(
                "[BSSF] degenerate container {}, none of the {} units can be placed",
                self.instance.container.dims,
                n_units.separate_with_commas()
            );
            for unit in units {
                self.problem.reject(unit, RejectionReason::NoFit);
            }
        } else {
            for unit in units {
                if !self.problem.weight.admits(unit.weight) {
                    debug!(
                        "[BSSF] unit {} ({} kg) exceeds the remaining weight capacity ({} kg)",
                        unit.id,
                        unit.weight,
                        self.problem.weight.remaining()
                    );
                    self.problem.reject(unit, RejectionReason::Overweight);
                    continue;
                }

                match search(&mut self.problem.layout, &unit) {
                    Some(fit) => {
                        let space = self.problem.layout.free_space().spaces()[fit.space_index];
                        self.problem.place(
                            &unit,
                            Placement {
                                space_index: fit.space_index,
                                rotation: fit.rotation,
                            },
                        );
                        debug!(
                            "[BSSF] placing unit {}/{} with id {} as {} in {} (score: {})",
                            self.problem.n_processed(),
                            n_units,
                            unit.id,
                            fit.rotation,
                            space,
                            fit.score
                        );
                    }
                    None => {
                        debug!(
                            "[BSSF] unit {} ({}) does not fit in any of the {} free spaces",
                            unit.id,
                            unit.dims,
                            self.problem.layout.free_space().len()
                        );
                        self.problem.reject(unit, RejectionReason::NoFit);
                    }
                }
            }
        }

        let solution = self.problem.save();

        info!(
            "[BSSF] optimization finished in {:.3}ms ({} units)",
            start.elapsed().as_secs_f64() * 1000.0,
            n_units.separate_with_commas()
        );
        info!(
            "[BSSF] solution contains {} placed and {} unplaced units with a density of {:.3}%",
            solution.n_placed().separate_with_commas(),
            solution.n_unplaced().separate_with_commas(),
            solution.density(&self.instance) * 100.0
        );

        solution
    }
}

/// Loads `items` into `container` with the default configuration.
pub fn pack(container: Container, items: Vec<CargoItem>) -> LoadingSolution {
    BSSFOptimizer::new(Instance::new(container, items), BSSFConfig::default()).solve()
}
