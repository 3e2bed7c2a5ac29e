//! Domain types for DEX subgraph analytics.
//!
//! This crate holds the entities read from the exchange subgraphs and the
//! arithmetic applied to them:
//! - Pairs, tokens, factories and their historical snapshots
//! - Masterchef pools and staking-bar entities
//! - Left joins between current and time-travel snapshots
//! - Daily volume, fee and reserve changes

/// Domain error types.
pub mod error;
/// Subgraph entities.
pub mod entities;
/// Joining snapshots by identifier.
pub mod join;
/// Derived metrics.
pub mod metrics;
/// Lenient numeric parsing for subgraph values.
pub mod numeric;

pub use error::DomainError;
pub use entities::Entity;
