//! Page data loaders.
//!
//! Every loader follows the same sequence: fetch the primary entities, fetch
//! their historical snapshots at resolved block heights, join by id, compute
//! the derived fields, write the result under the primary query and return
//! what the cache then holds.

mod bar;
mod movers;
mod pairs;
mod pools;
mod tokens;

pub use bar::{BarPageData, get_bar_page_data};
pub use movers::{GainersPageData, LosersPageData, get_gainers, get_losers};
pub use pairs::{
    PairListing, PairOverview, PairPageData, PairsPageData, get_pair, get_pairs,
};
pub use pools::{PoolPageData, PoolWithPair, get_pools_page_data};
pub use tokens::{TokenPairListing, TokenPairsPageData, get_token_pairs};

use crate::client::{FetchPolicy, GraphClient};
use crate::error::DataError;
use crate::queries::{self, Query};
use crate::responses::PairSnapshotsResponse;
use dex_analytics_domain::entities::{Pair, PairSnapshot};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Variables for queries that take none.
pub(crate) fn no_variables() -> Value {
    json!({})
}

/// Variables for queries keyed by a single id.
pub(crate) fn id_variables(id: &str) -> Value {
    json!({ "id": id })
}

/// Reads back the entry a loader has just written.
pub(crate) fn read_back<T: DeserializeOwned>(
    client: &GraphClient,
    query: &Query,
    variables: &Value,
) -> Result<T, DataError> {
    client
        .cache()
        .read_query(query, variables)?
        .ok_or(DataError::CacheMiss { query: query.name })
}

/// Fetches snapshots of the given pairs at a block, bypassing the cache.
pub(crate) async fn pairs_at_block(
    client: &GraphClient,
    pair_addresses: &[String],
    block: u64,
) -> Result<Vec<PairSnapshot>, DataError> {
    let variables = json!({
        "block": { "number": block },
        "pairAddresses": pair_addresses,
    });
    let PairSnapshotsResponse { pairs } = client
        .query(&queries::PAIRS_TIME_TRAVEL, &variables, FetchPolicy::NoCache)
        .await?;
    Ok(pairs)
}

/// Drops fields a previous page write merged into a cached pair.
pub(crate) fn without_derived(mut pair: Pair, keys: &[&str]) -> Pair {
    for key in keys {
        pair.extra.remove(*key);
    }
    pair
}
