//! GraphQL envelopes and the transport that carries them.

use crate::error::DataError;
use crate::queries::Query;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Body POSTed to a subgraph endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: Value,
    pub operation_name: String,
}

impl GraphQlRequest {
    /// Creates a request for a query document.
    #[must_use]
    pub fn new(query: &Query, variables: Value) -> Self {
        Self {
            query: query.document.to_string(),
            variables,
            operation_name: query.name.to_string(),
        }
    }
}

/// An error reported by the subgraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,
}

/// Response envelope returned by a subgraph.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// Wraps a successful result.
    #[must_use]
    pub fn ok(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Extracts the `data` member.
    ///
    /// # Errors
    /// Returns [`DataError::GraphQl`] if the subgraph reported errors, and
    /// [`DataError::MissingData`] if the response is empty.
    pub fn into_data(self) -> Result<Value, DataError> {
        if !self.errors.is_empty() {
            warn!(errors = self.errors.len(), "Subgraph returned errors");
            return Err(DataError::GraphQl(self.errors));
        }
        match self.data {
            Some(Value::Null) | None => Err(DataError::MissingData),
            Some(data) => Ok(data),
        }
    }
}

/// Sends GraphQL requests to an endpoint.
#[async_trait]
pub trait GraphTransport: Send + Sync {
    /// Executes a request against an endpoint.
    async fn execute(
        &self,
        endpoint: &str,
        request: &GraphQlRequest,
    ) -> Result<GraphQlResponse, DataError>;
}

/// HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with the given request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, DataError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl GraphTransport for HttpTransport {
    async fn execute(
        &self,
        endpoint: &str,
        request: &GraphQlRequest,
    ) -> Result<GraphQlResponse, DataError> {
        debug!(
            endpoint = endpoint,
            operation = %request.operation_name,
            "Posting subgraph query"
        );

        let response = self.client.post(endpoint).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<GraphQlResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries;
    use serde_json::json;

    #[test]
    fn test_request_body() {
        let request = GraphQlRequest::new(&queries::PAIR, json!({ "id": "0xpair" }));
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["operationName"], "pairQuery");
        assert_eq!(body["variables"]["id"], "0xpair");
        assert!(body["query"].as_str().unwrap().contains("pair(id: $id)"));
    }

    #[test]
    fn test_into_data() {
        let data = GraphQlResponse::ok(json!({ "pairs": [] })).into_data().unwrap();
        assert_eq!(data, json!({ "pairs": [] }));
    }

    #[test]
    fn test_into_data_errors() {
        let response: GraphQlResponse = serde_json::from_value(json!({
            "errors": [{ "message": "indexing error" }, { "message": "bad block" }]
        }))
        .unwrap();

        let err = response.into_data().unwrap_err();
        assert!(matches!(err, DataError::GraphQl(ref errors) if errors.len() == 2));
        assert_eq!(
            err.to_string(),
            "subgraph query failed: indexing error; bad block"
        );

        let empty: GraphQlResponse = serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(matches!(empty.into_data(), Err(DataError::MissingData)));
    }
}
