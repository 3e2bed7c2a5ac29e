use crate::numeric::lenient_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The exchange factory: protocol-wide cumulative counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factory {
    pub id: String,
    #[serde(rename = "volumeUSD", default, deserialize_with = "lenient_decimal")]
    pub volume_usd: Option<Decimal>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Holds the ETH/USD price the subgraph derives from stablecoin pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: String,
    #[serde(rename = "ethPrice", default, deserialize_with = "lenient_decimal")]
    pub eth_price: Option<Decimal>,
}

/// Protocol-wide aggregate for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayData {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
