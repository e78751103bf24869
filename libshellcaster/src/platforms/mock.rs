//! Mock platform implementation for testing
//!
//! A configurable platform that records every call, so dispatch logic can be
//! verified without credentials or network access.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{PlatformError, Result};
use crate::platforms::Platform;

pub struct MockPlatform {
    name: String,
    post_succeeds: bool,
    post_error: Option<String>,
    character_limit: Option<usize>,
    post_call_count: Arc<Mutex<usize>>,
    posted_content: Arc<Mutex<Vec<String>>>,
}

impl MockPlatform {
    /// Create a mock platform that always succeeds.
    pub fn success(name: &str) -> Self {
        Self {
            name: name.to_string(),
            post_succeeds: true,
            post_error: None,
            character_limit: None,
            post_call_count: Arc::new(Mutex::new(0)),
            posted_content: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock platform that fails posting with the given error text.
    pub fn post_failure(name: &str, error: &str) -> Self {
        Self {
            post_succeeds: false,
            post_error: Some(error.to_string()),
            ..Self::success(name)
        }
    }

    /// Create a mock platform with a character limit.
    pub fn with_limit(name: &str, limit: usize) -> Self {
        Self {
            character_limit: Some(limit),
            ..Self::success(name)
        }
    }

    /// Handles for asserting on calls after the platform has been boxed.
    pub fn probes(&self) -> (Arc<Mutex<usize>>, Arc<Mutex<Vec<String>>>) {
        (self.post_call_count.clone(), self.posted_content.clone())
    }

    pub fn post_call_count(&self) -> usize {
        *self.post_call_count.lock().unwrap()
    }

    pub fn posted_content(&self) -> Vec<String> {
        self.posted_content.lock().unwrap().clone()
    }
}

#[async_trait]
impl Platform for MockPlatform {
    async fn post(&self, content: &str) -> Result<String> {
        *self.post_call_count.lock().unwrap() += 1;

        if self.post_succeeds {
            self.posted_content
                .lock()
                .unwrap()
                .push(content.to_string());
            let post_id = format!("{}:mock-{}", self.name, uuid::Uuid::new_v4());
            Ok(post_id)
        } else {
            let error_msg = self
                .post_error
                .clone()
                .unwrap_or_else(|| "Mock posting failed".to_string());
            Err(PlatformError::Posting(error_msg).into())
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn character_limit(&self) -> Option<usize> {
        self.character_limit
    }
}
