//! In-process query cache.
//!
//! Entries are keyed by query name and variables, and hold the JSON result
//! exactly as written. There is no per-entity normalization: writing a page
//! replaces whatever was stored under the same key.

use crate::error::DataError;
use crate::queries::Query;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    query: &'static str,
    variables: String,
}

impl CacheKey {
    fn new(query: &Query, variables: &Value) -> Self {
        // serde_json maps are ordered, so equal variables give equal keys.
        let variables = match variables {
            Value::Null => String::from("{}"),
            other => other.to_string(),
        };
        Self {
            query: query.name,
            variables,
        }
    }
}

/// Query results shared by every clone of a client.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: Arc<RwLock<HashMap<CacheKey, Value>>>,
}

impl QueryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under the query and variables.
    ///
    /// # Errors
    /// Returns an error if `data` cannot be serialized.
    pub fn write_query<T: Serialize>(
        &self,
        query: &Query,
        variables: &Value,
        data: &T,
    ) -> Result<(), DataError> {
        let value = serde_json::to_value(data)?;
        self.write_value(query, variables, value);
        Ok(())
    }

    /// Stores an already serialized result.
    pub fn write_value(&self, query: &Query, variables: &Value, value: Value) {
        let key = CacheKey::new(query, variables);
        debug!(query = query.name, variables = %key.variables, "Writing cache entry");
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value);
    }

    /// Reads the entry stored under the query and variables.
    ///
    /// # Errors
    /// Returns an error if the stored entry does not match `T`.
    pub fn read_query<T: DeserializeOwned>(
        &self,
        query: &Query,
        variables: &Value,
    ) -> Result<Option<T>, DataError> {
        match self.read_value(query, variables) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Returns a copy of the raw entry.
    #[must_use]
    pub fn read_value(&self, query: &Query, variables: &Value) -> Option<Value> {
        let key = CacheKey::new(query, variables);
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    /// Removes an entry, returning whether one existed.
    pub fn evict(&self, query: &Query, variables: &Value) -> bool {
        let key = CacheKey::new(query, variables);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key)
            .is_some()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of cached results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_write_then_read() {
        let cache = QueryCache::new();
        let variables = json!({ "id": "0xpair" });
        let data = Named {
            name: "WETH-USDC".to_string(),
        };

        cache.write_query(&queries::PAIR, &variables, &data).unwrap();

        let read: Option<Named> = cache.read_query(&queries::PAIR, &variables).unwrap();
        assert_eq!(read, Some(data));
    }

    #[test]
    fn test_keys_include_variables() {
        let cache = QueryCache::new();
        cache.write_value(&queries::PAIR, &json!({ "id": "0xa" }), json!({ "n": 1 }));
        cache.write_value(&queries::PAIR, &json!({ "id": "0xb" }), json!({ "n": 2 }));
        cache.write_value(&queries::PAIRS, &json!({ "id": "0xa" }), json!({ "n": 3 }));

        assert_eq!(cache.len(), 3);
        assert_eq!(
            cache.read_value(&queries::PAIR, &json!({ "id": "0xb" })),
            Some(json!({ "n": 2 }))
        );
        assert!(cache.read_value(&queries::PAIR, &json!({ "id": "0xc" })).is_none());
    }

    #[test]
    fn test_null_and_empty_variables_share_a_key() {
        let cache = QueryCache::new();
        cache.write_value(&queries::PAIRS, &Value::Null, json!({ "pairs": [] }));
        assert!(cache.read_value(&queries::PAIRS, &json!({})).is_some());
    }

    #[test]
    fn test_overwrite_evict_and_clear() {
        let cache = QueryCache::new();
        let clone = cache.clone();

        cache.write_value(&queries::PAIRS, &json!({}), json!({ "pairs": [1] }));
        clone.write_value(&queries::PAIRS, &json!({}), json!({ "pairs": [2] }));
        assert_eq!(
            cache.read_value(&queries::PAIRS, &json!({})),
            Some(json!({ "pairs": [2] }))
        );

        assert!(cache.evict(&queries::PAIRS, &json!({})));
        assert!(!cache.evict(&queries::PAIRS, &json!({})));

        clone.write_value(&queries::GAINERS, &json!({}), json!({}));
        cache.clear();
        assert!(clone.is_empty());
    }

    #[test]
    fn test_read_with_wrong_shape() {
        let cache = QueryCache::new();
        cache.write_value(&queries::PAIR, &json!({}), json!({ "other": true }));
        let result: Result<Option<Named>, _> = cache.read_query(&queries::PAIR, &json!({}));
        assert!(matches!(result, Err(DataError::Decode(_))));
    }
}
