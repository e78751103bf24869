//! Platform adapters
//!
//! One module per social platform. Each adapter wraps exactly one publish
//! endpoint: it owns its HTTP client, builds the platform-specific request,
//! and maps the response onto the shared error taxonomy. Adapters never
//! panic on network or API failures and never log credential values.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{PlatformError, Result};

pub mod blogger;
pub mod facebook;
pub mod linkedin;
pub mod oauth1;
pub mod x;

// Mock platform is available for all builds (not just tests) to support
// integration tests
pub mod mock;

/// Unified interface for posting a message to a social platform.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Publish `content` and return a human-readable success message,
    /// including the platform-assigned post id when the API returns one.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Network` on transport failures and an
    /// `Authentication`/`RateLimit`/`Posting` variant for non-2xx responses.
    async fn post(&self, content: &str) -> Result<String>;

    /// Lowercase platform identifier (e.g. "facebook").
    fn name(&self) -> &str;

    /// Maximum post length, if the platform enforces one.
    fn character_limit(&self) -> Option<usize> {
        None
    }
}

/// Build the per-adapter HTTP client with the standard request timeout.
pub(crate) fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| PlatformError::Network(format!("Failed to build HTTP client: {}", e)).into())
}

/// Map a non-success HTTP status to a platform error.
pub(crate) fn status_error(platform: &str, status: reqwest::StatusCode, body: &str) -> PlatformError {
    let detail = format!(
        "{} returned HTTP {}: {}",
        platform,
        status.as_u16(),
        excerpt(body)
    );
    match status.as_u16() {
        401 | 403 => PlatformError::Authentication(detail),
        429 => PlatformError::RateLimit(detail),
        _ => PlatformError::Posting(detail),
    }
}

/// Map a transport-level failure to a platform error.
pub(crate) fn transport_error(platform: &str, err: &reqwest::Error) -> PlatformError {
    PlatformError::Network(format!("{} request failed: {}", platform, err))
}

// Error bodies can be arbitrarily large; keep diagnostics readable.
fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= 200 {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(200).collect();
        format!("{}...", cut)
    }
}
