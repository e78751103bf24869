//! Blogger platform implementation
//!
//! Publishes through the Blogger API v3. The first content line becomes the
//! post title; the remainder is rendered from Markdown to HTML.

use async_trait::async_trait;
use pulldown_cmark::{html, Options, Parser};
use serde::Deserialize;
use serde_json::json;

use crate::env::BloggerCredentials;
use crate::error::{PlatformError, Result};
use crate::platforms::{http_client, status_error, transport_error, Platform};

pub const BLOGGER_API_BASE: &str = "https://www.googleapis.com";

// Blogger strips <head>, so post styling rides along inline.
const STYLE_BLOCK: &str = "<style>\
pre { background-color: #f5f5f5; padding: 1em; border-radius: 4px; overflow-x: auto; }\
code { font-family: monospace; }\
blockquote { border-left: 4px solid #ccc; margin: 1.5em 10px; padding: 0.5em 10px; color: #666; }\
table { border-collapse: collapse; width: 100%; margin: 1em 0; }\
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }\
th { background-color: #f2f2f2; }\
</style>\n";

pub struct BloggerPlatform {
    creds: BloggerCredentials,
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PostResponse {
    id: Option<String>,
}

/// Render Markdown to HTML with tables, strikethrough and smart punctuation
/// enabled, prefixed by the inline style block.
pub fn markdown_to_html(markdown: &str) -> String {
    if markdown.trim().is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(markdown, options);
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);

    format!("{}{}", STYLE_BLOCK, rendered)
}

/// Split content into a title (first line) and a Markdown body (the rest).
fn split_title(content: &str) -> (&str, String) {
    let mut lines = content.lines();
    let title = lines.next().unwrap_or("Post");
    let body = lines.collect::<Vec<_>>().join("\n");
    (if title.is_empty() { "Post" } else { title }, body)
}

impl BloggerPlatform {
    pub fn new(creds: BloggerCredentials) -> Result<Self> {
        Ok(Self {
            creds,
            client: http_client()?,
            base_url: BLOGGER_API_BASE.to_string(),
        })
    }

    /// Point the adapter at a different API host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Platform for BloggerPlatform {
    async fn post(&self, content: &str) -> Result<String> {
        let url = format!(
            "{}/blogger/v3/blogs/{}/posts/",
            self.base_url, self.creds.blog_id
        );
        let (title, body) = split_title(content);
        let payload = json!({
            "kind": "blogger#post",
            "blog": { "id": self.creds.blog_id },
            "title": title,
            "content": markdown_to_html(&body),
        });

        tracing::debug!(platform = "blogger", "posting {} characters", content.len());

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.creds.access_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| transport_error("blogger", &e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(platform = "blogger", status = status.as_u16(), "publish failed");
            return Err(status_error("blogger", status, &body).into());
        }

        let body: PostResponse = resp.json().await.map_err(|e| {
            PlatformError::Posting(format!("blogger response could not be parsed: {}", e))
        })?;

        tracing::info!(platform = "blogger", "post published");
        Ok(match body.id {
            Some(id) => format!("Post successful (id: {})", id),
            None => "Post successful.".to_string(),
        })
    }

    fn name(&self) -> &str {
        "blogger"
    }
}
