//! HTTP transport and the remote service adapter.
//!
//! [`Api`] is the injected transport capability: `get`/`post` returning
//! parsed JSON or an [`HttpError`]. [`HttpApi`] is the `reqwest`-backed
//! implementation used by the binary; tests inject their own. [`ShopApi`]
//! translates storefront intents (fetch catalog, submit order) into calls on
//! the capability and announces outcomes on the event bus.

mod shop;

pub use shop::ShopApi;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Errors from backend calls.
///
/// These are the only recoverable errors in the application: they are
/// surfaced to the user as a form-level message and the flow halts at the
/// current step until the user retries.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request never completed (connection, DNS, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The HTTP capability consumed by [`ShopApi`].
///
/// `?Send` because the whole application is single-threaded; implementations
/// may capture `Rc` state.
#[async_trait(?Send)]
pub trait Api {
    /// GET `path` (relative to the API base) and parse the body as JSON.
    async fn get(&self, path: &str) -> Result<serde_json::Value, HttpError>;

    /// POST a JSON `body` to `path` and parse the response as JSON.
    async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, HttpError>;
}

/// `reqwest`-backed [`Api`] implementation.
pub struct HttpApi {
    client: reqwest::Client,
    base: String,
}

impl HttpApi {
    /// Create a client rooted at `base_url`; request paths are appended to
    /// it verbatim.
    #[must_use]
    pub fn new(base_url: &Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn into_json(response: reqwest::Response) -> Result<serde_json::Value, HttpError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %text.chars().take(500).collect::<String>(),
                "API returned non-success status"
            );
            return Err(HttpError::Status {
                status: status.as_u16(),
                body: text.chars().take(200).collect(),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait(?Send)]
impl Api for HttpApi {
    async fn get(&self, path: &str) -> Result<serde_json::Value, HttpError> {
        let response = self.client.get(self.endpoint(path)).send().await?;
        Self::into_json(response).await
    }

    async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, HttpError> {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(&body)
            .send()
            .await?;
        Self::into_json(response).await
    }
}
