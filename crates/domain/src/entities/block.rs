use crate::error::DomainError;
use crate::numeric::parse_block_number;
use serde::{Deserialize, Serialize};

/// A chain block as indexed by the blocks subgraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub number: String,
    pub timestamp: String,
}

impl Block {
    /// Returns the block height.
    ///
    /// # Errors
    /// Returns an error if the subgraph returned a non-numeric height.
    pub fn height(&self) -> Result<u64, DomainError> {
        parse_block_number(&self.number)
    }
}
