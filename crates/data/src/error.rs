use crate::graphql::GraphQlError;
use dex_analytics_domain::DomainError;
use thiserror::Error;

/// Errors raised while fetching or assembling page data.
#[derive(Debug, Error)]
pub enum DataError {
    /// The HTTP request failed.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The subgraph answered with a non-success status.
    #[error("subgraph returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        body: String,
    },
    /// The subgraph reported errors for the query.
    #[error("subgraph query failed: {}", join_messages(.0))]
    GraphQl(Vec<GraphQlError>),
    /// The response carried neither data nor errors.
    #[error("subgraph response has no data")]
    MissingData,
    /// A result could not be (de)serialized.
    #[error("failed to decode subgraph data: {0}")]
    Decode(#[from] serde_json::Error),
    /// A subgraph value could not be interpreted.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// No block was indexed in the window after a timestamp.
    #[error("no block found after timestamp {timestamp}")]
    BlockNotFound {
        /// Unix timestamp the lookup started from.
        timestamp: i64,
    },
    /// An entity a page depends on does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind.
        entity: &'static str,
        /// Requested identifier.
        id: String,
    },
    /// A page was written to the cache but could not be read back.
    #[error("no cached result for query {query}")]
    CacheMiss {
        /// Query name.
        query: &'static str,
    },
    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
