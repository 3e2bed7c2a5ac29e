//! GraphQL client routing queries to their subgraph.

use crate::blocks::BlockResolver;
use crate::cache::QueryCache;
use crate::config::SubgraphConfig;
use crate::error::DataError;
use crate::graphql::{GraphQlRequest, GraphTransport, HttpTransport};
use crate::queries::Query;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// How a query interacts with the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Serve from the cache when possible, otherwise fetch and store.
    #[default]
    CacheFirst,
    /// Always fetch, then store.
    NetworkOnly,
    /// Always fetch, never store.
    NoCache,
}

/// Client for the exchange subgraphs.
#[derive(Clone)]
pub struct GraphClient {
    config: Arc<SubgraphConfig>,
    transport: Arc<dyn GraphTransport>,
    cache: QueryCache,
}

impl GraphClient {
    /// Creates a client over any transport.
    #[must_use]
    pub fn new(config: SubgraphConfig, transport: Arc<dyn GraphTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            cache: QueryCache::new(),
        }
    }

    /// Creates a client that talks HTTP.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn http(config: SubgraphConfig) -> Result<Self, DataError> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SubgraphConfig {
        &self.config
    }

    /// Returns the query cache.
    #[must_use]
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Returns a resolver for historical block numbers.
    #[must_use]
    pub fn blocks(&self) -> BlockResolver<'_> {
        BlockResolver::new(self)
    }

    /// Runs a query and decodes its `data` member.
    ///
    /// # Errors
    /// Returns an error if the request fails, the subgraph reports errors, or
    /// the result does not decode into `T`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &Query,
        variables: &Value,
        policy: FetchPolicy,
    ) -> Result<T, DataError> {
        if policy == FetchPolicy::CacheFirst {
            if let Some(cached) = self.cache.read_query(query, variables)? {
                debug!(query = query.name, "Cache hit");
                return Ok(cached);
            }
        }

        let endpoint = self.config.endpoint(query.client);
        let request = GraphQlRequest::new(query, variables.clone());
        debug!(query = query.name, endpoint = endpoint, policy = ?policy, "Fetching");

        let data = self.transport.execute(endpoint, &request).await?.into_data()?;

        if policy != FetchPolicy::NoCache {
            self.cache.write_value(query, variables, data.clone());
        }

        Ok(serde_json::from_value(data)?)
    }
}
