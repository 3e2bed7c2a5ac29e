//! Masterchef pool page.

use super::{id_variables, no_variables, read_back};
use crate::client::{FetchPolicy, GraphClient};
use crate::error::DataError;
use crate::queries;
use crate::responses::{PairResponse, PoolHistoriesResponse, PoolResponse};
use dex_analytics_domain::entities::{Pair, Pool, PoolHistory};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A pool together with the liquidity pair it stakes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolWithPair {
    #[serde(flatten)]
    pub pool: Pool,
    pub liquidity_pair: Option<Pair>,
}

/// Data rendered by the pool page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolPageData {
    pub pool: PoolWithPair,
    pub pool_histories: Vec<PoolHistory>,
}

/// Loads the page of masterchef pool `id`. Every request bypasses the cache.
///
/// # Errors
/// Returns [`DataError::NotFound`] if the pool does not exist, or any
/// subgraph error.
pub async fn get_pools_page_data(client: &GraphClient, id: &str) -> Result<PoolPageData, DataError> {
    let PoolResponse { pool } = client
        .query(&queries::POOL, &id_variables(id), FetchPolicy::NetworkOnly)
        .await?;
    let pool = pool.ok_or_else(|| DataError::NotFound {
        entity: "pool",
        id: id.to_string(),
    })?;

    let PairResponse {
        pair: liquidity_pair,
    } = client
        .query(
            &queries::PAIR,
            &id_variables(&pool.pair),
            FetchPolicy::NetworkOnly,
        )
        .await?;

    let PoolHistoriesResponse { pool_histories } = client
        .query(
            &queries::POOL_HISTORY,
            &id_variables(id),
            FetchPolicy::NetworkOnly,
        )
        .await?;

    let page = PoolPageData {
        pool: PoolWithPair {
            pool,
            liquidity_pair,
        },
        pool_histories,
    };

    // The page is keyed by the page query alone, so the last loaded pool wins.
    let variables = no_variables();
    client
        .cache()
        .write_query(&queries::POOL_PAGE, &variables, &page)?;

    info!(
        pool = id,
        histories = page.pool_histories.len(),
        "Pool page assembled"
    );

    read_back(client, &queries::POOL_PAGE, &variables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SubgraphConfig;
    use crate::testing::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_pool_page() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(
            &queries::POOL,
            json!({ "pool": { "id": "12", "pair": "0xpair", "allocPoint": "100" } }),
        );
        mock.respond(
            &queries::PAIR,
            json!({ "pair": { "id": "0xpair", "reserveUSD": "1000000", "name": "WETH-USDC" } }),
        );
        mock.respond(
            &queries::POOL_HISTORY,
            json!({ "poolHistories": [{ "id": "12-1" }, { "id": "12-2" }] }),
        );
        let client = GraphClient::new(SubgraphConfig::default(), mock.clone());

        let page = get_pools_page_data(&client, "12").await.unwrap();

        assert_eq!(page.pool.pool.id, "12");
        assert_eq!(page.pool.pool.extra["allocPoint"], "100");
        let pair = page.pool.liquidity_pair.as_ref().unwrap();
        assert_eq!(pair.reserve_usd, Some("1000000".into()));
        assert_eq!(page.pool_histories.len(), 2);

        let calls = mock.calls();
        let masterchef = SubgraphConfig::default().masterchef_url;
        assert_eq!(calls[0].endpoint, masterchef);
        assert_eq!(calls[1].variables, json!({ "id": "0xpair" }));
        assert_eq!(calls[1].endpoint, SubgraphConfig::default().exchange_url);
        assert_eq!(calls[2].endpoint, masterchef);

        let cached = client
            .cache()
            .read_value(&queries::POOL_PAGE, &json!({}))
            .unwrap();
        assert_eq!(cached["pool"]["liquidityPair"]["name"], "WETH-USDC");
        assert_eq!(cached["pool"]["pair"], "0xpair");
    }

    #[tokio::test]
    async fn test_network_only_refetches() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(&queries::POOL, json!({ "pool": { "id": "1", "pair": "0xp" } }));
        mock.respond(&queries::PAIR, json!({ "pair": null }));
        mock.respond(&queries::POOL_HISTORY, json!({ "poolHistories": [] }));
        let client = GraphClient::new(SubgraphConfig::default(), mock.clone());

        get_pools_page_data(&client, "1").await.unwrap();
        let page = get_pools_page_data(&client, "1").await.unwrap();

        assert!(page.pool.liquidity_pair.is_none());
        assert_eq!(mock.calls_for(&queries::POOL), 2);
        assert_eq!(mock.calls_for(&queries::PAIR), 2);
    }

    #[tokio::test]
    async fn test_missing_pool() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(&queries::POOL, json!({ "pool": null }));
        let client = GraphClient::new(SubgraphConfig::default(), mock.clone());

        let result = get_pools_page_data(&client, "404").await;
        assert!(matches!(
            result,
            Err(DataError::NotFound { entity: "pool", .. })
        ));
    }
}
