//! Platform registry and dispatch
//!
//! Maps platform identifiers to adapters and fans a message out to the
//! requested set, collecting one result per platform. Adapter calls run
//! sequentially in request order; one failure never stops the rest.

use tracing::{info, warn};

use crate::env::{
    BloggerCredentials, FacebookCredentials, LinkedInCredentials, XCredentials,
};
use crate::error::Result;
use crate::platforms::{
    blogger::BloggerPlatform, facebook::FacebookPlatform, linkedin::LinkedInPlatform,
    x::XPlatform, Platform,
};

/// Builtin platform identifiers, in registration order.
pub const BUILTIN_PLATFORMS: &[&str] = &["facebook", "linkedin", "x", "blogger"];

/// Outcome of one adapter invocation.
#[derive(Debug, Clone)]
pub struct PlatformResult {
    /// Platform identifier (e.g. "facebook")
    pub platform: String,
    /// Whether the post was published
    pub success: bool,
    /// Success message (including the post id) or diagnostic text
    pub message: String,
}

enum Entry {
    /// Credentials resolved; adapter ready to post.
    Ready(Box<dyn Platform>),
    /// Credentials missing; the reason is reported instead of posting.
    Unconfigured(String),
}

pub struct Dispatcher {
    entries: Vec<(String, Entry)>,
}

impl Dispatcher {
    /// Build the builtin registry.
    ///
    /// Credentials are resolved here, once per platform. A platform with
    /// missing credentials stays registered but is reported as a
    /// configuration failure when requested, without any network call.
    pub fn from_env() -> Self {
        let entries = BUILTIN_PLATFORMS
            .iter()
            .map(|&name| {
                let entry = match build_platform(name) {
                    Ok(platform) => Entry::Ready(platform),
                    Err(e) => {
                        warn!(platform = name, "not configured: {}", e);
                        Entry::Unconfigured(e.to_string())
                    }
                };
                (name.to_string(), entry)
            })
            .collect();
        Self { entries }
    }

    /// Build a dispatcher from explicit platform instances.
    ///
    /// Registration order follows the vector order. Used by tests and by
    /// anything embedding the library with custom adapters.
    pub fn new(platforms: Vec<Box<dyn Platform>>) -> Self {
        Self {
            entries: platforms
                .into_iter()
                .map(|p| (p.name().to_string(), Entry::Ready(p)))
                .collect(),
        }
    }

    /// Registered identifiers in registration order.
    pub fn registered(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Post `content` to the requested platforms.
    ///
    /// `None` expands to every registered platform in registration order;
    /// an explicit list is processed in the order given. Unknown
    /// identifiers produce a failure result without touching any adapter.
    pub async fn dispatch(
        &self,
        content: &str,
        requested: Option<&[String]>,
    ) -> Vec<PlatformResult> {
        let targets: Vec<String> = match requested {
            Some(list) => list.to_vec(),
            None => self.entries.iter().map(|(name, _)| name.clone()).collect(),
        };

        let mut results = Vec::with_capacity(targets.len());
        for name in &targets {
            results.push(self.dispatch_one(name, content).await);
        }
        results
    }

    async fn dispatch_one(&self, name: &str, content: &str) -> PlatformResult {
        let entry = self
            .entries
            .iter()
            .find(|(registered, _)| registered.as_str() == name)
            .map(|(_, entry)| entry);

        match entry {
            None => {
                warn!(platform = name, "unknown platform requested");
                PlatformResult {
                    platform: name.to_string(),
                    success: false,
                    message: format!("Unsupported platform: {}", name),
                }
            }
            Some(Entry::Unconfigured(reason)) => {
                warn!(platform = name, "skipping unconfigured platform");
                PlatformResult {
                    platform: name.to_string(),
                    success: false,
                    message: format!("Skipped: {}", reason),
                }
            }
            Some(Entry::Ready(platform)) => {
                info!(platform = name, "posting");
                match platform.post(content).await {
                    Ok(message) => PlatformResult {
                        platform: name.to_string(),
                        success: true,
                        message,
                    },
                    Err(e) => {
                        warn!(platform = name, "post failed: {}", e);
                        PlatformResult {
                            platform: name.to_string(),
                            success: false,
                            message: e.to_string(),
                        }
                    }
                }
            }
        }
    }
}

/// Split a `--platform` argument into identifiers: comma-separated,
/// trimmed, lower-cased, empty pieces dropped.
pub fn parse_platform_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|piece| piece.trim().to_lowercase())
        .filter(|piece| !piece.is_empty())
        .collect()
}

fn build_platform(name: &str) -> Result<Box<dyn Platform>> {
    match name {
        "facebook" => Ok(Box::new(FacebookPlatform::new(
            FacebookCredentials::from_env()?,
        )?)),
        "linkedin" => Ok(Box::new(LinkedInPlatform::new(
            LinkedInCredentials::from_env()?,
        )?)),
        "x" => Ok(Box::new(XPlatform::new(XCredentials::from_env()?)?)),
        "blogger" => Ok(Box::new(BloggerPlatform::new(
            BloggerCredentials::from_env()?,
        )?)),
        other => Err(crate::error::ShellcasterError::InvalidInput(format!(
            "unknown builtin platform: {}",
            other
        ))),
    }
}
