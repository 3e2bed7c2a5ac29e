//! `data` shapes of the subgraph queries.

use dex_analytics_domain::entities::{
    Bar, BarHistory, Block, Bundle, DayData, Factory, Pair, PairSnapshot, Pool, PoolHistory, Token,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct BlocksResponse {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BarResponse {
    pub bar: Option<Bar>,
    #[serde(default)]
    pub histories: Vec<BarHistory>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FactoryResponse {
    pub factory: Option<Factory>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DayDatasResponse {
    #[serde(default)]
    pub day_datas: Vec<DayData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token: Option<Token>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BundlesResponse {
    #[serde(default)]
    pub bundles: Vec<Bundle>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PoolResponse {
    pub pool: Option<Pool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PoolHistoriesResponse {
    #[serde(default)]
    pub pool_histories: Vec<PoolHistory>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PairResponse {
    pub pair: Option<Pair>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PairSnapshotResponse {
    pub pair: Option<PairSnapshot>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PairsResponse {
    #[serde(default)]
    pub pairs: Vec<Pair>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PairSnapshotsResponse {
    #[serde(default)]
    pub pairs: Vec<PairSnapshot>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenPairsResponse {
    #[serde(default)]
    pub pairs0: Vec<Pair>,
    #[serde(default)]
    pub pairs1: Vec<Pair>,
}
