use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The staking bar (xSUSHI) from the bar subgraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A daily or hourly record of the staking bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarHistory {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
