//! LinkedIn platform implementation
//!
//! Publishes member posts through the v2 UGC posts endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::env::LinkedInCredentials;
use crate::error::Result;
use crate::platforms::{http_client, status_error, transport_error, Platform};

pub const LINKEDIN_API_BASE: &str = "https://api.linkedin.com";

pub struct LinkedInPlatform {
    creds: LinkedInCredentials,
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct UgcResponse {
    id: Option<String>,
}

impl LinkedInPlatform {
    pub fn new(creds: LinkedInCredentials) -> Result<Self> {
        Ok(Self {
            creds,
            client: http_client()?,
            base_url: LINKEDIN_API_BASE.to_string(),
        })
    }

    /// Point the adapter at a different API host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Author URNs may be given as a bare member id; normalize to the
    /// `urn:li:person:` form the API expects.
    fn author_urn(&self) -> String {
        let urn = &self.creds.author_urn;
        if urn.starts_with("urn:li:") {
            urn.clone()
        } else {
            format!("urn:li:person:{}", urn)
        }
    }
}

#[async_trait]
impl Platform for LinkedInPlatform {
    async fn post(&self, content: &str) -> Result<String> {
        let url = format!("{}/v2/ugcPosts", self.base_url);
        let payload = json!({
            "author": self.author_urn(),
            "lifecycleState": "PUBLISHED",
            "specificContent": {
                "com.linkedin.ugc.ShareContent": {
                    "shareCommentary": {
                        "text": content,
                        "attributes": []
                    },
                    "shareMediaCategory": "NONE"
                }
            },
            "visibility": {
                "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"
            }
        });

        tracing::debug!(platform = "linkedin", "posting {} characters", content.len());

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.creds.access_token)
            .header("X-Restli-Protocol-Version", "2.0.0")
            .header("LinkedIn-Version", "202402")
            .json(&payload)
            .send()
            .await
            .map_err(|e| transport_error("linkedin", &e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(platform = "linkedin", status = status.as_u16(), "publish failed");
            return Err(status_error("linkedin", status, &body).into());
        }

        // The UGC endpoint returns the new post URN in the body; older API
        // versions only set the X-RestLi-Id header.
        let header_id = resp
            .headers()
            .get("x-restli-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body: UgcResponse = resp.json().await.unwrap_or(UgcResponse { id: None });

        tracing::info!(platform = "linkedin", "post published");
        Ok(match body.id.or(header_id) {
            Some(id) => format!("Post successful (id: {})", id),
            None => "Post successful.".to_string(),
        })
    }

    fn name(&self) -> &str {
        "linkedin"
    }
}
