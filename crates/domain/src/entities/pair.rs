use crate::numeric::Numeric;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A liquidity pair at the latest indexed block.
///
/// Counters keep the subgraph's text; absent counters stay absent when the
/// pair is written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub id: String,
    #[serde(rename = "volumeUSD", default, skip_serializing_if = "Option::is_none")]
    pub volume_usd: Option<Numeric>,
    #[serde(
        rename = "untrackedVolumeUSD",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub untracked_volume_usd: Option<Numeric>,
    #[serde(rename = "reserveUSD", default, skip_serializing_if = "Option::is_none")]
    pub reserve_usd: Option<Numeric>,
    #[serde(rename = "txCount", default, skip_serializing_if = "Option::is_none")]
    pub tx_count: Option<Numeric>,

    // token0, token1, reserve0, reserve1, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pair {
    /// Creates a pair with only its identifier set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            volume_usd: None,
            untracked_volume_usd: None,
            reserve_usd: None,
            tx_count: None,
            extra: Map::new(),
        }
    }
}

/// The cumulative counters of a pair at a historical block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairSnapshot {
    pub id: String,
    #[serde(rename = "volumeUSD", default)]
    pub volume_usd: Option<Numeric>,
    #[serde(rename = "untrackedVolumeUSD", default)]
    pub untracked_volume_usd: Option<Numeric>,
    #[serde(rename = "reserveUSD", default)]
    pub reserve_usd: Option<Numeric>,
    #[serde(rename = "txCount", default)]
    pub tx_count: Option<Numeric>,
}
