//! Historical block resolution for time-travel queries.

use crate::client::{FetchPolicy, GraphClient};
use crate::error::DataError;
use crate::queries;
use crate::responses::BlocksResponse;
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use tracing::debug;

/// Width of the window searched for the first block after a timestamp.
pub const BLOCK_SEARCH_WINDOW_SECS: i64 = 600;

/// Finds the block numbers time-travel queries are pinned to.
pub struct BlockResolver<'a> {
    client: &'a GraphClient,
}

impl<'a> BlockResolver<'a> {
    #[must_use]
    pub fn new(client: &'a GraphClient) -> Self {
        Self { client }
    }

    /// Block at the start of the minute one day ago.
    ///
    /// # Errors
    /// Returns an error if the blocks subgraph fails or has no block in the window.
    pub async fn one_day_block(&self) -> Result<u64, DataError> {
        self.days_ago(1).await
    }

    /// Block at the start of the minute two days ago.
    ///
    /// # Errors
    /// Returns an error if the blocks subgraph fails or has no block in the window.
    pub async fn two_day_block(&self) -> Result<u64, DataError> {
        self.days_ago(2).await
    }

    /// Block at the start of the minute seven days ago.
    ///
    /// # Errors
    /// Returns an error if the blocks subgraph fails or has no block in the window.
    pub async fn seven_day_block(&self) -> Result<u64, DataError> {
        self.days_ago(7).await
    }

    /// Block at the start of the minute `days` days ago.
    ///
    /// # Errors
    /// Returns an error if the blocks subgraph fails or has no block in the window.
    pub async fn days_ago(&self, days: i64) -> Result<u64, DataError> {
        let target = Utc::now() - Duration::days(days);
        self.block_at(start_of_minute(target.timestamp())).await
    }

    /// First block mined after `timestamp`, searching a ten minute window.
    ///
    /// # Errors
    /// Returns [`DataError::BlockNotFound`] if no block falls in the window.
    pub async fn block_at(&self, timestamp: i64) -> Result<u64, DataError> {
        let variables = json!({
            "start": timestamp,
            "end": timestamp + BLOCK_SEARCH_WINDOW_SECS,
        });

        let BlocksResponse { blocks } = self
            .client
            .query(&queries::BLOCKS, &variables, FetchPolicy::NoCache)
            .await?;

        let block = blocks
            .first()
            .ok_or(DataError::BlockNotFound { timestamp })?;
        let number = block.height()?;

        debug!(timestamp = timestamp, block = number, "Resolved block");
        Ok(number)
    }
}

/// Truncates a unix timestamp to the start of its minute.
#[must_use]
pub fn start_of_minute(timestamp: i64) -> i64 {
    timestamp - timestamp.rem_euclid(60)
}

/// Variables pinning a time-travel query to a block.
#[must_use]
pub fn block_variables(block: u64) -> Value {
    json!({ "block": { "number": block } })
}
