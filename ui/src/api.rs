//! This module defines the `LocalApi` trait the views use to reach the local web API.
use futures::future::LocalBoxFuture;
use std::sync::Arc;

use crate::node::NodeData;

/// Path of the node-status endpoint, relative to the API base.
pub const NODE_DATA_PATH: &str = "/data";
/// Path of the logout endpoint, relative to the API base.
pub const LOGOUT_PATH: &str = "/local/v0/logout";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status
    #[error("{}", status_message(.status, .body))]
    Status { status: u16, body: String },

    /// The request never completed
    #[error("{0}")]
    Transport(String),

    /// The response body could not be decoded
    #[error("invalid response: {0}")]
    Decode(String),
}

fn status_message(status: &u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("{body} (HTTP {status})")
    }
}

/// Futures are local so that WASM implementations can hold `!Send` handles.
pub trait LocalApi: Send + Sync {
    fn node_data(&self) -> LocalBoxFuture<'_, Result<NodeData, ApiError>>;
    fn logout(&self) -> LocalBoxFuture<'_, Result<(), ApiError>>;
}

// An API provider context that wraps any platform implementation
#[derive(Clone)]
pub struct ApiProvider {
    inner: Arc<dyn LocalApi>,
}

impl ApiProvider {
    pub fn new<A: LocalApi + 'static>(api: A) -> Self {
        Self {
            inner: Arc::new(api),
        }
    }

    pub async fn node_data(&self) -> Result<NodeData, ApiError> {
        self.inner.node_data().await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.inner.logout().await
    }
}

/// Joins an API base and an endpoint path without doubling the slash.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
