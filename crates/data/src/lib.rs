//! Subgraph access and page data assembly.
//!
//! This crate provides everything between the subgraph endpoints and the
//! dashboard pages:
//! - Endpoint configuration per subgraph
//! - GraphQL transport over HTTP
//! - Query documents and an in-process query cache
//! - Historical block resolution for time-travel queries
//! - Page loaders that join current and historical snapshots

/// Block resolution for time-travel queries.
pub mod blocks;
/// In-process query cache.
pub mod cache;
/// GraphQL client with fetch policies.
pub mod client;
/// Endpoint configuration.
pub mod config;
/// Error types.
pub mod error;
/// GraphQL request/response envelopes and transports.
pub mod graphql;
/// Page data loaders.
pub mod pages;
/// Query documents.
pub mod queries;

mod responses;

#[cfg(test)]
mod testing;

pub use blocks::BlockResolver;
pub use cache::QueryCache;
pub use client::{FetchPolicy, GraphClient};
pub use config::{ClientName, SubgraphConfig};
pub use error::DataError;
pub use graphql::{GraphQlRequest, GraphQlResponse, GraphTransport, HttpTransport};
pub use queries::Query;
