//! Top gainers and losers by day-over-day change.

use super::{no_variables, pairs_at_block, read_back, without_derived};
use crate::client::{FetchPolicy, GraphClient};
use crate::error::DataError;
use crate::queries::{self, Query};
use crate::responses::PairsResponse;
use dex_analytics_domain::entities::Pair;
use dex_analytics_domain::join::{SnapshotIndex, sorted_ids};
use dex_analytics_domain::metrics::{DailyChange, GainerPair, LoserPair};
use serde::{Deserialize, Serialize};
use tracing::info;

const GAINER_FIELDS: [&str; 6] = [
    "feesUSDGained",
    "feesUSDGainedYesterday",
    "reserveUSDGained",
    "reserveUSDGainedYesterday",
    "volumeUSDGained",
    "volumeUSDGainedYesterday",
];

const LOSER_FIELDS: [&str; 6] = [
    "feesUSDLost",
    "feesUSDLostYesterday",
    "volumeUSDLost",
    "volumeUSDLostYesterday",
    "reserveUSDLost",
    "reserveUSDLostYesterday",
];

/// Data rendered by the gainers list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainersPageData {
    pub pairs: Vec<GainerPair>,
}

/// Data rendered by the losers list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LosersPageData {
    pub pairs: Vec<LoserPair>,
}

/// Loads the gainers list.
///
/// # Errors
/// Returns an error if any subgraph request fails.
pub async fn get_gainers(client: &GraphClient) -> Result<GainersPageData, DataError> {
    let changes = daily_changes(client, &queries::GAINERS, &GAINER_FIELDS).await?;
    let page = GainersPageData {
        pairs: changes
            .into_iter()
            .map(|(pair, change)| GainerPair::new(pair, change))
            .collect(),
    };

    let variables = no_variables();
    client
        .cache()
        .write_query(&queries::GAINERS, &variables, &page)?;
    info!(pairs = page.pairs.len(), "Gainers assembled");

    read_back(client, &queries::GAINERS, &variables)
}

/// Loads the losers list.
///
/// # Errors
/// Returns an error if any subgraph request fails.
pub async fn get_losers(client: &GraphClient) -> Result<LosersPageData, DataError> {
    let changes = daily_changes(client, &queries::LOSERS, &LOSER_FIELDS).await?;
    let page = LosersPageData {
        pairs: changes
            .into_iter()
            .map(|(pair, change)| LoserPair::new(pair, change))
            .collect(),
    };

    let variables = no_variables();
    client
        .cache()
        .write_query(&queries::LOSERS, &variables, &page)?;
    info!(pairs = page.pairs.len(), "Losers assembled");

    read_back(client, &queries::LOSERS, &variables)
}

/// Fetches the pairs of `query` and their change over the last two days.
async fn daily_changes(
    client: &GraphClient,
    query: &Query,
    derived: &[&str],
) -> Result<Vec<(Pair, DailyChange)>, DataError> {
    let PairsResponse { pairs } = client
        .query(query, &no_variables(), FetchPolicy::CacheFirst)
        .await?;

    let pair_addresses = sorted_ids(pairs.iter().map(|pair| pair.id.as_str()));

    let blocks = client.blocks();
    let one_day_block = blocks.one_day_block().await?;
    let two_day_block = blocks.two_day_block().await?;

    let one_day_pairs = pairs_at_block(client, &pair_addresses, one_day_block).await?;
    let two_day_pairs = pairs_at_block(client, &pair_addresses, two_day_block).await?;

    let one_day = SnapshotIndex::new(&one_day_pairs);
    let two_day = SnapshotIndex::new(&two_day_pairs);

    Ok(pairs
        .into_iter()
        .map(|pair| {
            let change = DailyChange::compute(&pair, one_day.get(&pair.id), two_day.get(&pair.id));
            (without_derived(pair, derived), change)
        })
        .collect())
}
