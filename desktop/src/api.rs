//! Native local API over `reqwest`.
use crate::Error;
use futures::future::{FutureExt as _, LocalBoxFuture};
use reqwest::{Client, Response};
use std::time::Duration;
use ui::api::{endpoint, LOGOUT_PATH, NODE_DATA_PATH};
use ui::{ApiError, LocalApi, NodeData};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct DesktopApi {
    client: Client,
    /// Base URL of the local web API, e.g. `http://localhost:8088/api`
    base: String,
}

impl DesktopApi {
    /// Creates a client for the API rooted at `base`.
    pub fn new(base: impl Into<String>) -> Result<Self, Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base: base.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base, path)
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn check(resp: Response) -> Result<Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

impl LocalApi for DesktopApi {
    fn node_data(&self) -> LocalBoxFuture<'_, Result<NodeData, ApiError>> {
        async move {
            let resp = self
                .client
                .get(self.url(NODE_DATA_PATH))
                .send()
                .await
                .map_err(transport)?;
            check(resp)
                .await?
                .json::<NodeData>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        .boxed_local()
    }

    fn logout(&self) -> LocalBoxFuture<'_, Result<(), ApiError>> {
        async move {
            let resp = self
                .client
                .post(self.url(LOGOUT_PATH))
                .send()
                .await
                .map_err(transport)?;
            check(resp).await.map(|_| ())
        }
        .boxed_local()
    }
}
