use crate::numeric::lenient_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ERC-20 token tracked by the exchange subgraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Token price denominated in ETH.
    #[serde(rename = "derivedETH", default, deserialize_with = "lenient_decimal")]
    pub derived_eth: Option<Decimal>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
