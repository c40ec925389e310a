//! Policy source over the server's JSON API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the source reports itself unavailable, since the page
//! only loads policies once it is running in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures map onto `SourceError`; the
//! catalog wrapping this source turns any of them into an empty list.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use policies::{PolicyDocument, PolicySource, SourceError};

/// Listing endpoint served by the policies API.
pub const POLICIES_ENDPOINT: &str = "/api/policies";

/// Fetches already-normalized documents from the policies API.
#[derive(Clone, Debug)]
pub struct ApiPolicySource {
    endpoint: String,
}

impl Default for ApiPolicySource {
    fn default() -> Self {
        Self::new(POLICIES_ENDPOINT)
    }
}

impl ApiPolicySource {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Server-side cache reset, next to the listing endpoint.
    #[must_use]
    pub fn refresh_endpoint(&self) -> String {
        format!("{}/refresh", self.endpoint.trim_end_matches('/'))
    }

    /// Ask the server to drop its cached catalog.
    ///
    /// Run this before `ViewerController::refresh` so the client's reload
    /// reads fresh rows instead of the server's cached list.
    ///
    /// # Errors
    ///
    /// Transport and non-2xx failures map onto [`SourceError`]; outside the
    /// browser the call is [`SourceError::Unavailable`].
    pub async fn request_refresh(&self) -> Result<(), SourceError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.refresh_endpoint())
                .send()
                .await
                .map_err(|e| SourceError::Transport(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(SourceError::Status { status, body });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(SourceError::Unavailable)
        }
    }
}

impl PolicySource for ApiPolicySource {
    type Record = PolicyDocument;

    async fn fetch(&self) -> Result<Vec<PolicyDocument>, SourceError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .send()
                .await
                .map_err(|e| SourceError::Transport(e.to_string()))?;
            let ok = resp.ok();
            let status = resp.status();
            let body = resp.text().await.map_err(|e| SourceError::Transport(e.to_string()))?;
            if !ok {
                return Err(SourceError::Status { status, body });
            }
            parse_documents(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(SourceError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_documents(body: &str) -> Result<Vec<PolicyDocument>, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Decode(e.to_string()))
}
