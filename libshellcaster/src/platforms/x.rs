//! X (Twitter) platform implementation
//!
//! Creates tweets through the v2 endpoint and exposes the v1.1 trends
//! lookup. Both use OAuth 1.0a user-context signing.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::env::XCredentials;
use crate::error::{PlatformError, Result};
use crate::platforms::{http_client, oauth1, status_error, transport_error, Platform};

pub const X_API_BASE: &str = "https://api.twitter.com";

/// Tweets are capped at 280 characters.
pub const TWEET_CHAR_LIMIT: usize = 280;

pub struct XPlatform {
    creds: XCredentials,
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct TweetResponse {
    data: Option<TweetData>,
}

#[derive(Debug, Deserialize)]
struct TweetData {
    id: String,
}

/// One trending topic from the v1.1 trends endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Trend {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tweet_volume: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct TrendsPlace {
    trends: Vec<Trend>,
}

// Longer content is cut rather than rejected, matching the posting
// behavior users expect from a broadcast tool.
fn truncate_chars(content: &str, limit: usize) -> &str {
    match content.char_indices().nth(limit) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}

impl XPlatform {
    pub fn new(creds: XCredentials) -> Result<Self> {
        Ok(Self {
            creds,
            client: http_client()?,
            base_url: X_API_BASE.to_string(),
        })
    }

    /// Point the adapter at a different API host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the top trending topics for a location (WOEID, 1 = worldwide).
    pub async fn fetch_trends(&self, woeid: u32) -> Result<Vec<Trend>> {
        let url = format!("{}/1.1/trends/place.json", self.base_url);
        let woeid_str = woeid.to_string();
        let auth = oauth1::authorization_header(
            "GET",
            &url,
            &self.creds,
            &[("id", woeid_str.as_str())],
        )?;

        let resp = self
            .client
            .get(&url)
            .query(&[("id", woeid_str.as_str())])
            .header(reqwest::header::AUTHORIZATION, auth)
            .send()
            .await
            .map_err(|e| transport_error("x", &e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(platform = "x", status = status.as_u16(), "trends fetch failed");
            return Err(status_error("x", status, &body).into());
        }

        let places: Vec<TrendsPlace> = resp.json().await.map_err(|e| {
            PlatformError::Posting(format!("x trends response could not be parsed: {}", e))
        })?;

        let trends = places
            .into_iter()
            .next()
            .map(|place| place.trends)
            .unwrap_or_default();
        Ok(trends.into_iter().take(10).collect())
    }
}

#[async_trait]
impl Platform for XPlatform {
    async fn post(&self, content: &str) -> Result<String> {
        let url = format!("{}/2/tweets", self.base_url);
        let text = truncate_chars(content, TWEET_CHAR_LIMIT);
        // The JSON body is not part of the OAuth signature.
        let auth = oauth1::authorization_header("POST", &url, &self.creds, &[])?;

        tracing::debug!(platform = "x", "posting {} characters", text.chars().count());

        let resp = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, auth)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|e| transport_error("x", &e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(platform = "x", status = status.as_u16(), "publish failed");
            return Err(status_error("x", status, &body).into());
        }

        let body: TweetResponse = resp.json().await.map_err(|e| {
            PlatformError::Posting(format!("x response could not be parsed: {}", e))
        })?;

        tracing::info!(platform = "x", "post published");
        Ok(match body.data {
            Some(tweet) => format!(
                "Post successful. https://twitter.com/user/status/{}",
                tweet.id
            ),
            None => "Post successful.".to_string(),
        })
    }

    fn name(&self) -> &str {
        "x"
    }

    fn character_limit(&self) -> Option<usize> {
        Some(TWEET_CHAR_LIMIT)
    }
}
