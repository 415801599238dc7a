use serde::{Deserialize, Serialize};
use uld_rs::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::BSSFConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct BSSFOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: BSSFConfig,
}
