/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Client configuration loaded from environment variables.

use std::env;

use reqwest::Url;

use crate::error::ApiError;
use crate::ChatApiClient;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Configuration for the MovieBot client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the MovieBot backend (e.g. "http://localhost:8000").
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// # Optional
    /// - `MOVIEBOT_API_URL` (default: `"http://localhost:8000"`)
    pub fn from_env() -> Result<Self, ApiError> {
        let api_base_url = env::var("MOVIEBOT_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Self::with_base_url(api_base_url.as_deref().unwrap_or(DEFAULT_API_URL))
    }

    /// Build a configuration for an explicit base URL.
    ///
    /// The URL must be absolute `http` or `https`.
    pub fn with_base_url(api_base_url: &str) -> Result<Self, ApiError> {
        let api_base_url = api_base_url.trim();
        let url = Url::parse(api_base_url)
            .map_err(|e| ApiError::Config(format!("invalid API URL '{api_base_url}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "API URL must use http or https, got '{}'",
                url.scheme()
            )));
        }
        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn client(&self) -> Result<ChatApiClient, ApiError> {
        ChatApiClient::new(&self.api_base_url)
    }
}
