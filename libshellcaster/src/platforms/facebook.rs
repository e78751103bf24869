//! Facebook platform implementation
//!
//! Publishes to a Page feed via the Graph API.

use async_trait::async_trait;
use serde::Deserialize;

use crate::env::FacebookCredentials;
use crate::error::{PlatformError, Result};
use crate::platforms::{http_client, status_error, transport_error, Platform};

pub const GRAPH_API_BASE: &str = "https://graph.facebook.com";

pub struct FacebookPlatform {
    creds: FacebookCredentials,
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct FeedResponse {
    id: Option<String>,
}

impl FacebookPlatform {
    pub fn new(creds: FacebookCredentials) -> Result<Self> {
        Ok(Self {
            creds,
            client: http_client()?,
            base_url: GRAPH_API_BASE.to_string(),
        })
    }

    /// Point the adapter at a different API host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Platform for FacebookPlatform {
    async fn post(&self, content: &str) -> Result<String> {
        let url = format!("{}/{}/feed", self.base_url, self.creds.page_id);
        // The Graph API takes the access token as a form field, so it never
        // appears in the URL.
        let params = [
            ("message", content),
            ("access_token", self.creds.access_token.as_str()),
        ];

        tracing::debug!(platform = "facebook", "posting {} characters", content.len());

        let resp = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| transport_error("facebook", &e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(platform = "facebook", status = status.as_u16(), "publish failed");
            return Err(status_error("facebook", status, &body).into());
        }

        let body: FeedResponse = resp.json().await.map_err(|e| {
            PlatformError::Posting(format!("facebook response could not be parsed: {}", e))
        })?;

        tracing::info!(platform = "facebook", "post published");
        Ok(match body.id {
            Some(id) => format!("Post successful (id: {})", id),
            None => "Post successful.".to_string(),
        })
    }

    fn name(&self) -> &str {
        "facebook"
    }
}
