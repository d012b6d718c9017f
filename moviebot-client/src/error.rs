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

//! Error types for the MovieBot client.

use moviebot_types::ValidationError;
use thiserror::Error;

/// Errors surfaced by [`ChatApiClient`](crate::ChatApiClient) requests and
/// the flows built on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The session cookie is missing, expired, or invalid (HTTP 401).
    #[error("Not authenticated. Please log in.")]
    NotAuthenticated,

    /// The server answered with a non-2xx status other than 401.
    #[error("Request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// The request never produced a readable response.
    #[error("Network error: {0}")]
    Transport(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("Failed to serialize request: {0}")]
    Encode(String),

    /// Input rejected before any request was made.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// A configuration error (e.g. malformed base URL).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}
