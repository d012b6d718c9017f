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

//! Authentication and session endpoints: `/login`, `/register`, `/me`,
//! `/logout`.

use std::future::Future;

use moviebot_types::requests::Credentials;
use moviebot_types::responses::{AuthResponse, UserResponse};
use reqwest::Method;
use serde::de::IgnoredAny;

use crate::gate::{request_json, SessionGate, SessionOutcome};

/// Typed account calls, available on every [`SessionGate`].
pub trait AccountEndpoints: SessionGate {
    /// Log in. On success the server sets the session cookie.
    ///
    /// Calls `POST /login`. Bad credentials come back as 401, i.e.
    /// [`SessionOutcome::Unauthorized`].
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = SessionOutcome<AuthResponse>> {
        request_json(self, Method::POST, "/login", credentials.clone())
    }

    /// Create an account.
    ///
    /// Calls `POST /register`. A taken username is a 400 with a `detail`.
    fn register(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = SessionOutcome<AuthResponse>> {
        request_json(self, Method::POST, "/register", credentials.clone())
    }

    /// Get the user bound to the current session.
    ///
    /// Calls `GET /me`.
    fn current_user(&self) -> impl Future<Output = SessionOutcome<UserResponse>> {
        self.request(Method::GET, "/me", None)
    }

    /// Drop the session on the server. The response body is not inspected.
    ///
    /// Calls `POST /logout`.
    fn logout(&self) -> impl Future<Output = SessionOutcome<IgnoredAny>> {
        self.request(Method::POST, "/logout", None)
    }
}

impl<G: SessionGate + ?Sized> AccountEndpoints for G {}
