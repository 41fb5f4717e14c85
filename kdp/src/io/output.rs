use knapsack_dp::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::KdpConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KdpOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solutions: Vec<ExtSolution>,
    pub config: KdpConfig,
}
