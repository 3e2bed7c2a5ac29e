//! Staking bar page.

use super::{id_variables, no_variables, read_back};
use crate::blocks::block_variables;
use crate::client::{FetchPolicy, GraphClient};
use crate::error::DataError;
use crate::queries;
use crate::responses::{
    BarResponse, BundlesResponse, DayDatasResponse, FactoryResponse, TokenResponse,
};
use dex_analytics_domain::entities::{Bar, BarHistory, DayData};
use dex_analytics_domain::metrics::{change_since, token_price_usd};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Data rendered by the bar page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarPageData {
    pub bar: Option<Bar>,
    pub histories: Vec<BarHistory>,
    pub day_datas: Vec<DayData>,
    /// SUSHI price in USD.
    pub sushi_price: Option<Decimal>,
    /// Exchange volume over the last day in USD.
    pub one_day_volume: Option<Decimal>,
}

/// Loads the bar page.
///
/// # Errors
/// Returns an error if any subgraph request fails.
pub async fn get_bar_page_data(client: &GraphClient) -> Result<BarPageData, DataError> {
    let variables = no_variables();

    let BarResponse { bar, histories } = client
        .query(&queries::BAR_PAGE, &variables, FetchPolicy::CacheFirst)
        .await?;

    let FactoryResponse { factory } = client
        .query(&queries::FACTORY, &no_variables(), FetchPolicy::CacheFirst)
        .await?;

    let one_day_block = client.blocks().one_day_block().await?;
    let FactoryResponse { factory: one_day } = client
        .query(
            &queries::FACTORY_TIME_TRAVEL,
            &block_variables(one_day_block),
            FetchPolicy::CacheFirst,
        )
        .await?;

    let DayDatasResponse { day_datas } = client
        .query(&queries::DAY_DATAS, &no_variables(), FetchPolicy::CacheFirst)
        .await?;

    let TokenResponse { token } = client
        .query(
            &queries::TOKEN,
            &id_variables(&client.config().sushi_token),
            FetchPolicy::CacheFirst,
        )
        .await?;

    let BundlesResponse { bundles } = client
        .query(&queries::ETH_PRICE, &no_variables(), FetchPolicy::CacheFirst)
        .await?;

    let page = BarPageData {
        bar,
        histories,
        day_datas,
        sushi_price: token_price_usd(
            token.and_then(|t| t.derived_eth),
            bundles.first().and_then(|b| b.eth_price),
        ),
        one_day_volume: change_since(
            factory.and_then(|f| f.volume_usd),
            one_day.and_then(|f| f.volume_usd),
        ),
    };

    client
        .cache()
        .write_query(&queries::BAR_PAGE, &variables, &page)?;

    info!(
        histories = page.histories.len(),
        day_datas = page.day_datas.len(),
        "Bar page assembled"
    );

    read_back(client, &queries::BAR_PAGE, &variables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SubgraphConfig;
    use crate::testing::MockTransport;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use std::sync::Arc;

    fn mock_bar_subgraphs(mock: &MockTransport) {
        mock.respond(
            &queries::BAR_PAGE,
            json!({
                "bar": { "id": "0xbar", "ratio": "1.2", "totalSupply": "1000" },
                "histories": [{ "id": "h1", "date": 1700000000, "ratio": "1.1" }]
            }),
        );
        mock.respond(
            &queries::FACTORY,
            json!({ "factory": { "id": "0xfactory", "volumeUSD": "5000000", "pairCount": "100" } }),
        );
        mock.respond(
            &queries::BLOCKS,
            json!({ "blocks": [{ "id": "0xb", "number": "123", "timestamp": "0" }] }),
        );
        mock.respond(
            &queries::FACTORY_TIME_TRAVEL,
            json!({ "factory": { "id": "0xfactory", "volumeUSD": "4250000.5" } }),
        );
        mock.respond(
            &queries::DAY_DATAS,
            json!({ "dayDatas": [{ "id": "19000", "date": 1700000000, "volumeUSD": "1" }] }),
        );
        mock.respond(
            &queries::TOKEN,
            json!({ "token": { "id": "0x6b35", "symbol": "SUSHI", "derivedETH": "0.005" } }),
        );
        mock.respond(
            &queries::ETH_PRICE,
            json!({ "bundles": [{ "id": "1", "ethPrice": "2000" }] }),
        );
    }

    #[tokio::test]
    async fn test_bar_page() {
        let mock = Arc::new(MockTransport::new());
        mock_bar_subgraphs(&mock);
        let client = GraphClient::new(SubgraphConfig::default(), mock.clone());

        let page = get_bar_page_data(&client).await.unwrap();

        assert_eq!(page.sushi_price, Some(dec!(10)));
        assert_eq!(page.one_day_volume, Some(dec!(749999.5)));
        assert_eq!(page.bar.as_ref().unwrap().extra["ratio"], "1.2");
        assert_eq!(page.histories.len(), 1);
        assert_eq!(page.day_datas[0].id, "19000");

        let token_calls: Vec<_> = mock
            .calls()
            .into_iter()
            .filter(|c| c.operation == queries::TOKEN.name)
            .collect();
        assert_eq!(
            token_calls[0].variables,
            json!({ "id": SubgraphConfig::default().sushi_token })
        );
        assert_eq!(
            mock.calls()[0].endpoint,
            SubgraphConfig::default().bar_url
        );

        let cached = client
            .cache()
            .read_value(&queries::BAR_PAGE, &json!({}))
            .unwrap();
        assert_eq!(cached["sushiPrice"], "10.000");
        assert_eq!(cached["oneDayVolume"], "749999.5");
    }

    #[tokio::test]
    async fn test_bar_page_without_price_data() {
        let mock = Arc::new(MockTransport::new());
        mock_bar_subgraphs(&mock);
        mock.respond(&queries::ETH_PRICE, json!({ "bundles": [] }));
        let client = GraphClient::new(SubgraphConfig::default(), mock.clone());

        // The first queued bundle response is consumed before the empty one.
        let first = get_bar_page_data(&client).await.unwrap();
        assert_eq!(first.sushi_price, Some(dec!(10)));

        client.cache().clear();
        let second = get_bar_page_data(&client).await.unwrap();
        assert_eq!(second.sushi_price, None);
    }

    #[tokio::test]
    async fn test_bar_page_without_one_day_factory() {
        let mock = Arc::new(MockTransport::new());
        // Queued ahead of the default factory snapshot, so it is served first.
        mock.respond(&queries::FACTORY_TIME_TRAVEL, json!({ "factory": null }));
        mock_bar_subgraphs(&mock);
        let client = GraphClient::new(SubgraphConfig::default(), mock.clone());

        let page = get_bar_page_data(&client).await.unwrap();

        assert_eq!(page.one_day_volume, None);
        assert_eq!(page.sushi_price, Some(dec!(10)));

        let travel: Vec<_> = mock
            .calls()
            .into_iter()
            .filter(|c| c.operation == queries::FACTORY_TIME_TRAVEL.name)
            .collect();
        assert_eq!(travel.len(), 1);
        assert_eq!(travel[0].variables, json!({ "block": { "number": 123 } }));

        let cached = client
            .cache()
            .read_value(&queries::BAR_PAGE, &json!({}))
            .unwrap();
        assert!(cached["oneDayVolume"].is_null());
    }

    #[tokio::test]
    async fn test_bar_page_without_current_factory() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(&queries::FACTORY, json!({ "factory": null }));
        mock_bar_subgraphs(&mock);
        let client = GraphClient::new(SubgraphConfig::default(), mock.clone());

        let page = get_bar_page_data(&client).await.unwrap();

        assert_eq!(page.one_day_volume, None);
        assert_eq!(mock.calls_for(&queries::FACTORY_TIME_TRAVEL), 1);
    }
}
