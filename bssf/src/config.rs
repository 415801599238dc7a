use serde::{Deserialize, Serialize};

/// Configuration for the BSSF optimizer.
/// None of the fields affect where units are placed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BSSFConfig {
    /// Runs the full suite of feasibility checks on every solution and fails the run on a violation
    pub validate_solution: bool,
    /// Number of threads used to solve multiple instances. If undefined, rayon decides
    pub n_threads: Option<usize>,
    /// Number of remaining free spaces listed in the summary report
    pub n_reported_spaces: usize,
}

impl Default for BSSFConfig {
    fn default() -> Self {
        Self {
            validate_solution: true,
            n_threads: None,
            n_reported_spaces: 10,
        }
    }
}
