//! Pair detail and pair list pages.

use super::{id_variables, no_variables, pairs_at_block, read_back, without_derived};
use crate::blocks::block_variables;
use crate::client::{FetchPolicy, GraphClient};
use crate::error::DataError;
use crate::queries;
use crate::responses::{PairResponse, PairSnapshotResponse, PairsResponse};
use dex_analytics_domain::entities::{Pair, PairSnapshot};
use dex_analytics_domain::join::{SnapshotIndex, sorted_ids};
use dex_analytics_domain::metrics::WindowStats;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

const OVERVIEW_WINDOWS: [&str; 2] = ["oneDay", "twoDay"];
const LISTING_WINDOWS: [&str; 2] = ["oneDay", "sevenDay"];

/// A pair with its counters one and two days ago.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairOverview {
    #[serde(flatten)]
    pub pair: Pair,
    pub one_day: WindowStats,
    pub two_day: WindowStats,
}

/// Data rendered by the pair page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairPageData {
    pub pair: PairOverview,
}

/// A pair with its counters one and seven days ago.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairListing {
    #[serde(flatten)]
    pub pair: Pair,
    pub one_day: WindowStats,
    pub seven_day: WindowStats,
}

impl PairListing {
    fn new(
        pair: Pair,
        one_day: &SnapshotIndex<'_, PairSnapshot>,
        seven_day: &SnapshotIndex<'_, PairSnapshot>,
    ) -> Self {
        let one = WindowStats::from_snapshot(one_day.get(&pair.id));
        let seven = WindowStats::from_snapshot(seven_day.get(&pair.id));
        Self {
            pair: without_derived(pair, &LISTING_WINDOWS),
            one_day: one,
            seven_day: seven,
        }
    }
}

/// Data rendered by the pairs page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairsPageData {
    pub pairs: Vec<PairListing>,
}

/// Loads the page of pair `id`.
///
/// # Errors
/// Returns [`DataError::NotFound`] if the pair does not exist, or any
/// subgraph error.
pub async fn get_pair(client: &GraphClient, id: &str) -> Result<PairPageData, DataError> {
    let variables = id_variables(id);

    let PairResponse { pair } = client
        .query(&queries::PAIR, &variables, FetchPolicy::CacheFirst)
        .await?;
    let pair = pair.ok_or_else(|| DataError::NotFound {
        entity: "pair",
        id: id.to_string(),
    })?;

    let blocks = client.blocks();
    let one_day_block = blocks.one_day_block().await?;
    let two_day_block = blocks.two_day_block().await?;

    let one_day = pair_at_block(client, id, one_day_block).await?;
    let two_day = pair_at_block(client, id, two_day_block).await?;

    let page = PairPageData {
        pair: PairOverview {
            pair: without_derived(pair, &OVERVIEW_WINDOWS),
            one_day: WindowStats::from_snapshot(one_day.as_ref()),
            two_day: WindowStats::from_snapshot(two_day.as_ref()),
        },
    };

    client
        .cache()
        .write_query(&queries::PAIR, &variables, &page)?;

    info!(pair = id, "Pair page assembled");

    read_back(client, &queries::PAIR, &variables)
}

/// Loads the pairs page.
///
/// # Errors
/// Returns an error if any subgraph request fails.
pub async fn get_pairs(client: &GraphClient) -> Result<PairsPageData, DataError> {
    let variables = no_variables();

    let PairsResponse { pairs } = client
        .query(&queries::PAIRS, &variables, FetchPolicy::CacheFirst)
        .await?;

    let pair_addresses = sorted_ids(pairs.iter().map(|pair| pair.id.as_str()));

    let blocks = client.blocks();
    let one_day_block = blocks.one_day_block().await?;
    let seven_day_block = blocks.seven_day_block().await?;

    let one_day_pairs = pairs_at_block(client, &pair_addresses, one_day_block).await?;
    let seven_day_pairs = pairs_at_block(client, &pair_addresses, seven_day_block).await?;

    let one_day = SnapshotIndex::new(&one_day_pairs);
    let seven_day = SnapshotIndex::new(&seven_day_pairs);

    let page = PairsPageData {
        pairs: pairs
            .into_iter()
            .map(|pair| PairListing::new(pair, &one_day, &seven_day))
            .collect(),
    };

    client
        .cache()
        .write_query(&queries::PAIRS, &variables, &page)?;

    info!(
        pairs = page.pairs.len(),
        one_day_matches = one_day.len(),
        seven_day_matches = seven_day.len(),
        "Pairs page assembled"
    );

    read_back(client, &queries::PAIRS, &variables)
}

async fn pair_at_block(
    client: &GraphClient,
    id: &str,
    block: u64,
) -> Result<Option<PairSnapshot>, DataError> {
    let mut variables = block_variables(block);
    if let Value::Object(map) = &mut variables {
        map.insert("id".to_string(), Value::String(id.to_string()));
    }
    let PairSnapshotResponse { pair } = client
        .query(&queries::PAIR_TIME_TRAVEL, &variables, FetchPolicy::NoCache)
        .await?;
    Ok(pair)
}
