//! Environment-based credential loading
//!
//! Credentials follow a fixed `<PLATFORM>_<FIELD>` naming convention and are
//! read from the process environment after a one-time `.env` discovery pass.
//! Each platform gets an owned credentials struct that is immutable after
//! load; adapters receive it by value and never look up the environment
//! themselves.

use std::sync::Once;

use crate::error::{ConfigError, Result};

static ENV_LOADED: Once = Once::new();

/// Load the nearest `.env` file once per process.
///
/// Walks from the current directory upward and stops at the first `.env`
/// found. Values in the file override already-set variables. A missing
/// `.env` is not an error.
pub fn ensure_env_loaded() {
    ENV_LOADED.call_once(|| {
        let Ok(cwd) = std::env::current_dir() else {
            return;
        };
        for dir in cwd.ancestors() {
            let candidate = dir.join(".env");
            if candidate.exists() {
                if let Err(e) = dotenvy::from_path_override(&candidate) {
                    tracing::warn!("Failed to load {}: {}", candidate.display(), e);
                }
                return;
            }
        }
    });
}

/// Read a credential variable.
///
/// Empty values and `your_...` placeholders (as shipped in sample `.env`
/// files) count as unset.
pub fn get_env(name: &str) -> Option<String> {
    ensure_env_loaded();
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() && !value.contains("your_") => Some(value),
        _ => None,
    }
}

fn require_env(name: &str) -> Result<String> {
    get_env(name).ok_or_else(|| ConfigError::MissingVar(name.to_string()).into())
}

/// Facebook Graph API credentials (Page feed publishing).
#[derive(Debug, Clone)]
pub struct FacebookCredentials {
    pub page_id: String,
    pub access_token: String,
}

impl FacebookCredentials {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            page_id: require_env("FACEBOOK_PAGE_ID")?,
            access_token: require_env("FACEBOOK_ACCESS_TOKEN")?,
        })
    }
}

/// LinkedIn UGC posts credentials.
#[derive(Debug, Clone)]
pub struct LinkedInCredentials {
    pub access_token: String,
    pub author_urn: String,
}

impl LinkedInCredentials {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            access_token: require_env("LINKEDIN_ACCESS_TOKEN")?,
            author_urn: require_env("LINKEDIN_AUTHOR_URN")?,
        })
    }
}

/// X (Twitter) OAuth 1.0a credentials.
#[derive(Debug, Clone)]
pub struct XCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl XCredentials {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            consumer_key: require_env("X_CONSUMER_KEY")?,
            consumer_secret: require_env("X_CONSUMER_SECRET")?,
            access_token: require_env("X_ACCESS_TOKEN")?,
            access_token_secret: require_env("X_ACCESS_TOKEN_SECRET")?,
        })
    }
}

/// Blogger API v3 credentials.
#[derive(Debug, Clone)]
pub struct BloggerCredentials {
    pub access_token: String,
    pub blog_id: String,
}

impl BloggerCredentials {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            access_token: require_env("BLOGGER_ACCESS_TOKEN")?,
            blog_id: require_env("BLOGGER_BLOG_ID")?,
        })
    }
}
