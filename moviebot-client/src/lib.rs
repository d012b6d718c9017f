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

//! Cross-platform, session-gated client for the MovieBot chat API.
//!
//! Works on WASM (browser) and native targets via [`reqwest`]. The session
//! is an opaque cookie: the browser attaches it through `fetch` credentials,
//! native builds keep it in reqwest's cookie store.
//!
//! The crate is split along the three moving parts of the chat UI:
//!
//! * [`SessionGate`] issues a request and classifies the response into a
//!   [`SessionOutcome`]: `Ok`, `Unauthorized` or `Failure`.
//! * [`ChatDispatcher`] runs one send-message cycle with an optimistic
//!   render of the user's message.
//! * [`HistoryView`] loads the stored transcript and renders it as
//!   conversation groups.
//!
//! All rendering goes through a caller-supplied [`RenderSurface`].
//!
//! # Example
//!
//! ```no_run
//! use moviebot_client::{ChatApiClient, ChatDispatcher, RenderSurface, Route};
//! use moviebot_client::moviebot_types::{ConversationGroup, Role};
//!
//! struct Console;
//!
//! impl RenderSurface for Console {
//!     fn append_message(&self, role: Role, text: &str) {
//!         println!("{role}: {text}");
//!     }
//!     fn render_conversation_groups(&self, _groups: &[ConversationGroup]) {}
//!     fn show_notice(&self, text: &str) {
//!         eprintln!("{text}");
//!     }
//!     fn navigate(&self, route: Route) {
//!         eprintln!("-> {}", route.path());
//!     }
//! }
//!
//! # async fn example() -> Result<(), moviebot_client::ApiError> {
//! let client = ChatApiClient::new("http://localhost:8000")?;
//! let dispatcher = ChatDispatcher::new(client, Console);
//! dispatcher.send("Recommend a movie like Heat").await;
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod auth;
pub mod chat;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod gate;
pub mod history;
pub mod surface;

pub use account::AccountFlow;
pub use auth::AccountEndpoints;
pub use chat::ChatEndpoints;
pub use config::ClientConfig;
pub use dispatcher::{ChatDispatcher, SendState, FALLBACK_NOTICE};
pub use error::ApiError;
pub use gate::{SessionGate, SessionOutcome};
pub use history::{HistoryView, HISTORY_UNAVAILABLE};
pub use moviebot_types;
pub use reqwest::Method;
pub use surface::{RenderSurface, Route};

use moviebot_types::ErrorBody;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Detail reported for a rejected request whose body carries no usable
/// `detail` field.
pub const GENERIC_FAILURE: &str = "Request failed";

/// A typed REST client for the MovieBot API.
///
/// Cloning is cheap and clones share the same connection pool and, on
/// native targets, the same cookie jar.
#[derive(Debug, Clone)]
pub struct ChatApiClient {
    base_url: String,
    http: Client,
}

impl ChatApiClient {
    /// Create a new client pointing at the given API base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"http://localhost:8000"`
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: build_http_client()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request with the session applied.
    pub(crate) fn request_builder(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.apply_session(self.http.request(method, self.url(path)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_session(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        {
            builder.fetch_credentials_include()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> Result<Client, ApiError> {
    Client::builder()
        .cookie_store(true)
        .build()
        .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> Result<Client, ApiError> {
    Ok(Client::new())
}

/// Classify a response into a [`SessionOutcome`].
///
/// 401 is always `Unauthorized`, whatever the body says. Other non-2xx
/// statuses become [`ApiError::Rejected`] carrying the body's `detail`
/// string when there is one.
pub(crate) async fn classify_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> SessionOutcome<T> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return SessionOutcome::Unauthorized;
    }

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => return SessionOutcome::Failure(e.into()),
    };

    if status.is_success() {
        return match serde_json::from_slice::<T>(&body) {
            Ok(payload) => SessionOutcome::Ok(payload),
            Err(e) => SessionOutcome::Failure(ApiError::Decode(e.to_string())),
        };
    }

    let detail = serde_json::from_slice::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message().map(str::to_string))
        .unwrap_or_else(|| GENERIC_FAILURE.to_string());
    SessionOutcome::Failure(ApiError::Rejected {
        status: status.as_u16(),
        detail,
    })
}
