//! In-memory transport for tests.

use crate::error::DataError;
use crate::graphql::{GraphQlError, GraphQlRequest, GraphQlResponse, GraphTransport};
use crate::queries::Query;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: String,
    pub operation: String,
    pub variables: Value,
}

/// Answers each operation from a queue of canned responses.
///
/// Responses are consumed in order; the last one is repeated once the
/// queue is down to a single entry.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<&'static str, VecDeque<GraphQlResponse>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, query: &Query, data: Value) {
        self.push(query, GraphQlResponse::ok(data));
    }

    pub fn fail(&self, query: &Query, message: &str) {
        self.push(
            query,
            GraphQlResponse {
                data: None,
                errors: vec![GraphQlError {
                    message: message.to_string(),
                    path: None,
                }],
            },
        );
    }

    fn push(&self, query: &Query, response: GraphQlResponse) {
        self.responses
            .lock()
            .unwrap()
            .entry(query.name)
            .or_default()
            .push_back(response);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, query: &Query) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.operation == query.name)
            .count()
    }
}

#[async_trait]
impl GraphTransport for MockTransport {
    async fn execute(
        &self,
        endpoint: &str,
        request: &GraphQlRequest,
    ) -> Result<GraphQlResponse, DataError> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.to_string(),
            operation: request.operation_name.clone(),
            variables: request.variables.clone(),
        });

        let mut responses = self.responses.lock().unwrap();
        let queue = responses
            .get_mut(request.operation_name.as_str())
            .ok_or_else(|| {
                DataError::Config(format!("no mock response for {}", request.operation_name))
            })?;

        let response = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        response.ok_or_else(|| DataError::Config("empty mock queue".to_string()))
    }
}
