//! Local API over the browser's fetch, against same-origin relative URLs.
use futures::future::{FutureExt as _, LocalBoxFuture};
use gloo_net::http::{Request, Response};
use ui::api::{endpoint, LOGOUT_PATH, NODE_DATA_PATH};
use ui::{ApiError, LocalApi, NodeData};

#[derive(Clone)]
pub struct WebApi {
    base: String,
}

impl WebApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

async fn check(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

impl LocalApi for WebApi {
    fn node_data(&self) -> LocalBoxFuture<'_, Result<NodeData, ApiError>> {
        async move {
            let resp = Request::get(&endpoint(&self.base, NODE_DATA_PATH))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
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
            let resp = Request::post(&endpoint(&self.base, LOGOUT_PATH))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            check(resp).await.map(|_| ())
        }
        .boxed_local()
    }
}
