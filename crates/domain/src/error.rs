use thiserror::Error;

/// Errors raised while interpreting subgraph values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A decimal string could not be parsed.
    #[error("invalid decimal value: {0}")]
    InvalidDecimal(String),
    /// A block number could not be parsed.
    #[error("invalid block number: {0}")]
    InvalidBlockNumber(String),
}
