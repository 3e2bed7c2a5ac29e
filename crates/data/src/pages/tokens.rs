//! Pairs of a single token.

use super::{id_variables, pairs_at_block, read_back, without_derived};
use crate::client::{FetchPolicy, GraphClient};
use crate::error::DataError;
use crate::queries;
use crate::responses::TokenPairsResponse;
use dex_analytics_domain::entities::{Pair, PairSnapshot};
use dex_analytics_domain::join::{SnapshotIndex, sorted_ids};
use dex_analytics_domain::metrics::VolumeReserve;
use serde::{Deserialize, Serialize};
use tracing::info;

const WINDOWS: [&str; 2] = ["oneDay", "sevenDay"];

/// A token pair with volume and reserve one and seven days ago.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairListing {
    #[serde(flatten)]
    pub pair: Pair,
    pub one_day: VolumeReserve,
    pub seven_day: VolumeReserve,
}

/// Pairs where the token is `token0` and where it is `token1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPairsPageData {
    pub pairs0: Vec<TokenPairListing>,
    pub pairs1: Vec<TokenPairListing>,
}

/// Loads the pairs of token `id`.
///
/// # Errors
/// Returns an error if any subgraph request fails.
pub async fn get_token_pairs(
    client: &GraphClient,
    id: &str,
) -> Result<TokenPairsPageData, DataError> {
    let variables = id_variables(id);

    let TokenPairsResponse { pairs0, pairs1 } = client
        .query(&queries::TOKEN_PAIRS, &variables, FetchPolicy::CacheFirst)
        .await?;

    let pair_addresses = sorted_ids(
        pairs0
            .iter()
            .chain(pairs1.iter())
            .map(|pair| pair.id.as_str()),
    );

    let blocks = client.blocks();
    let one_day_block = blocks.one_day_block().await?;
    let seven_day_block = blocks.seven_day_block().await?;

    let one_day_pairs = pairs_at_block(client, &pair_addresses, one_day_block).await?;
    let seven_day_pairs = pairs_at_block(client, &pair_addresses, seven_day_block).await?;

    let one_day = SnapshotIndex::new(&one_day_pairs);
    let seven_day = SnapshotIndex::new(&seven_day_pairs);
    let to_listing = |pair: Pair| listing(pair, &one_day, &seven_day);

    let page = TokenPairsPageData {
        pairs0: pairs0.into_iter().map(to_listing).collect(),
        pairs1: pairs1.into_iter().map(to_listing).collect(),
    };

    client
        .cache()
        .write_query(&queries::TOKEN_PAIRS, &variables, &page)?;

    info!(
        token = id,
        pairs0 = page.pairs0.len(),
        pairs1 = page.pairs1.len(),
        "Token pairs assembled"
    );

    read_back(client, &queries::TOKEN_PAIRS, &variables)
}

fn listing(
    pair: Pair,
    one_day: &SnapshotIndex<'_, PairSnapshot>,
    seven_day: &SnapshotIndex<'_, PairSnapshot>,
) -> TokenPairListing {
    let one = VolumeReserve::from_snapshot(one_day.get(&pair.id));
    let seven = VolumeReserve::from_snapshot(seven_day.get(&pair.id));
    TokenPairListing {
        pair: without_derived(pair, &WINDOWS),
        one_day: one,
        seven_day: seven,
    }
}
