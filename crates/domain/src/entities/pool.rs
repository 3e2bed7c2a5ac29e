use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A masterchef staking pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub id: String,
    /// Address of the liquidity pair staked in this pool.
    pub pair: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A snapshot of a masterchef pool at one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolHistory {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
