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

//! The session gate: every outbound request goes through here.

use std::future::Future;
use std::rc::Rc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::{classify_response, ChatApiClient};

/// Result of one gated request. Exactly one variant per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome<T> {
    /// 2xx with a body that parsed as `T`.
    Ok(T),
    /// HTTP 401. The body is ignored.
    Unauthorized,
    /// Anything else: transport error, undecodable body, or another
    /// non-2xx status.
    Failure(ApiError),
}

impl<T> SessionOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SessionOutcome<U> {
        match self {
            SessionOutcome::Ok(payload) => SessionOutcome::Ok(f(payload)),
            SessionOutcome::Unauthorized => SessionOutcome::Unauthorized,
            SessionOutcome::Failure(e) => SessionOutcome::Failure(e),
        }
    }

    /// Fold `Unauthorized` into [`ApiError::NotAuthenticated`].
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            SessionOutcome::Ok(payload) => Ok(payload),
            SessionOutcome::Unauthorized => Err(ApiError::NotAuthenticated),
            SessionOutcome::Failure(e) => Err(e),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, SessionOutcome::Unauthorized)
    }
}

/// Performs a request carrying the caller's session and classifies the
/// response.
///
/// Implementations never panic or return transport errors directly; every
/// failure is folded into [`SessionOutcome::Failure`]. They have no side
/// effects beyond the network call. The returned futures are not `Send` so
/// the trait can be implemented on top of browser `fetch`.
pub trait SessionGate {
    fn request<T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> impl Future<Output = SessionOutcome<T>>
    where
        T: DeserializeOwned;
}

impl SessionGate for ChatApiClient {
    async fn request<T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> SessionOutcome<T>
    where
        T: DeserializeOwned,
    {
        log::debug!("{method} {endpoint}");
        let mut builder = self.request_builder(method.clone(), endpoint);
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let outcome = match builder.send().await {
            Ok(response) => classify_response(response).await,
            Err(e) => SessionOutcome::Failure(e.into()),
        };
        match &outcome {
            SessionOutcome::Ok(_) => log::debug!("{method} {endpoint}: ok"),
            SessionOutcome::Unauthorized => log::info!("{method} {endpoint}: not authenticated"),
            SessionOutcome::Failure(e) => log::warn!("{method} {endpoint}: {e}"),
        }
        outcome
    }
}

impl<G: SessionGate + ?Sized> SessionGate for &G {
    fn request<T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> impl Future<Output = SessionOutcome<T>>
    where
        T: DeserializeOwned,
    {
        (**self).request(method, endpoint, body)
    }
}

impl<G: SessionGate + ?Sized> SessionGate for Rc<G> {
    fn request<T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> impl Future<Output = SessionOutcome<T>>
    where
        T: DeserializeOwned,
    {
        (**self).request(method, endpoint, body)
    }
}

/// Serialize `body` and send it through `gate`.
///
/// An encoding problem surfaces as a `Failure` without touching the network.
pub(crate) async fn request_json<G, B, T>(
    gate: &G,
    method: Method,
    endpoint: &str,
    body: B,
) -> SessionOutcome<T>
where
    G: SessionGate + ?Sized,
    B: Serialize,
    T: DeserializeOwned,
{
    match serde_json::to_value(&body) {
        Ok(body) => gate.request(method, endpoint, Some(body)).await,
        Err(e) => SessionOutcome::Failure(ApiError::Encode(e.to_string())),
    }
}
