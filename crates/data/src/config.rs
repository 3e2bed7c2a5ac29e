//! Subgraph endpoint configuration.

use crate::error::DataError;
use std::env;
use std::time::Duration;

/// Default exchange subgraph.
pub const DEFAULT_EXCHANGE_URL: &str =
    "https://api.thegraph.com/subgraphs/name/sushiswap/exchange";
/// Default staking bar subgraph.
pub const DEFAULT_BAR_URL: &str = "https://api.thegraph.com/subgraphs/name/matthewlilley/bar";
/// Default masterchef subgraph.
pub const DEFAULT_MASTERCHEF_URL: &str =
    "https://api.thegraph.com/subgraphs/name/sushiswap/master-chef";
/// Default blocks subgraph.
pub const DEFAULT_BLOCKS_URL: &str =
    "https://api.thegraph.com/subgraphs/name/blocklytics/ethereum-blocks";
/// SUSHI token address on mainnet.
pub const DEFAULT_SUSHI_TOKEN: &str = "0x6b3595068778dd592e39a122f4f5a5cf09c90fe2";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The subgraph a query is sent to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClientName {
    /// Pairs, tokens, factory and day data.
    #[default]
    Exchange,
    /// Staking bar.
    Bar,
    /// Masterchef pools.
    MasterChef,
    /// Block numbers by timestamp.
    Blocks,
}

/// Endpoints and request settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubgraphConfig {
    pub exchange_url: String,
    pub bar_url: String,
    pub masterchef_url: String,
    pub blocks_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Governance token priced on the bar page.
    pub sushi_token: String,
}

impl Default for SubgraphConfig {
    fn default() -> Self {
        Self {
            exchange_url: DEFAULT_EXCHANGE_URL.to_string(),
            bar_url: DEFAULT_BAR_URL.to_string(),
            masterchef_url: DEFAULT_MASTERCHEF_URL.to_string(),
            blocks_url: DEFAULT_BLOCKS_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            sushi_token: DEFAULT_SUSHI_TOKEN.to_string(),
        }
    }
}

impl SubgraphConfig {
    /// Reads the configuration from environment variables.
    ///
    /// Unset variables keep their default value.
    ///
    /// # Errors
    /// Returns an error if `SUBGRAPH_TIMEOUT_SECS` is not a positive integer.
    pub fn from_env() -> Result<Self, DataError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns an error if the timeout value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DataError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let timeout = match lookup("SUBGRAPH_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(DataError::Config(format!(
                        "SUBGRAPH_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                    )));
                }
            },
            None => defaults.timeout,
        };

        Ok(Self {
            exchange_url: lookup("EXCHANGE_SUBGRAPH_URL").unwrap_or(defaults.exchange_url),
            bar_url: lookup("BAR_SUBGRAPH_URL").unwrap_or(defaults.bar_url),
            masterchef_url: lookup("MASTERCHEF_SUBGRAPH_URL").unwrap_or(defaults.masterchef_url),
            blocks_url: lookup("BLOCKS_SUBGRAPH_URL").unwrap_or(defaults.blocks_url),
            timeout,
            sushi_token: lookup("SUSHI_TOKEN_ADDRESS")
                .map(|address| address.to_lowercase())
                .unwrap_or(defaults.sushi_token),
        })
    }

    /// Returns the endpoint for a subgraph.
    #[must_use]
    pub fn endpoint(&self, client: ClientName) -> &str {
        match client {
            ClientName::Exchange => &self.exchange_url,
            ClientName::Bar => &self.bar_url,
            ClientName::MasterChef => &self.masterchef_url,
            ClientName::Blocks => &self.blocks_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SubgraphConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SubgraphConfig::default());
        assert_eq!(config.endpoint(ClientName::Blocks), DEFAULT_BLOCKS_URL);
    }

    #[test]
    fn test_overrides() {
        let config = SubgraphConfig::from_lookup(lookup_from(&[
            ("EXCHANGE_SUBGRAPH_URL", "http://localhost:8000/exchange"),
            ("SUBGRAPH_TIMEOUT_SECS", "5"),
            ("SUSHI_TOKEN_ADDRESS", "0xABC"),
        ]))
        .unwrap();

        assert_eq!(
            config.endpoint(ClientName::Exchange),
            "http://localhost:8000/exchange"
        );
        assert_eq!(config.endpoint(ClientName::Bar), DEFAULT_BAR_URL);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.sushi_token, "0xabc");
    }

    #[test]
    fn test_invalid_timeout() {
        let result = SubgraphConfig::from_lookup(lookup_from(&[("SUBGRAPH_TIMEOUT_SECS", "0")]));
        assert!(matches!(result, Err(DataError::Config(_))));
    }
}
