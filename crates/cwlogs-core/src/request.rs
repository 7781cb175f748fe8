use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifecycle operation requested by the orchestrating host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
}

/// One handler invocation as delivered by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHandlerRequest<M> {
    pub desired_resource_state: M,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_resource_state: Option<M>,
    /// Logical id of the resource in the template, used for name synthesis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_resource_identifier: Option<String>,
    /// Stable across retries of the same logical request.
    #[serde(default)]
    pub client_request_token: String,
    /// Pagination token for `List`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl<M> ResourceHandlerRequest<M> {
    pub fn new(desired_resource_state: M) -> Self {
        Self {
            desired_resource_state,
            previous_resource_state: None,
            logical_resource_identifier: None,
            client_request_token: String::new(),
            next_token: None,
        }
    }

    pub fn with_logical_id(mut self, logical_resource_identifier: impl Into<String>) -> Self {
        self.logical_resource_identifier = Some(logical_resource_identifier.into());
        self
    }

    pub fn with_client_request_token(mut self, token: impl Into<String>) -> Self {
        self.client_request_token = token.into();
        self
    }

    pub fn with_next_token(mut self, token: Option<String>) -> Self {
        self.next_token = token;
        self
    }
}

/// State threaded between invocation steps of one reconciliation attempt.
///
/// Opaque to the host. Every handler here completes synchronously, so the
/// handlers never hand one back; it exists so multi-step kinds can poll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallbackContext {
    values: Map<String, Value>,
}

impl CallbackContext {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
