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

//! Login, registration and logout flows.
//!
//! Unlike the chat flow, these surface the server's `detail` to the user
//! verbatim, since it describes what was wrong with their input.

use moviebot_types::requests::Credentials;
use moviebot_types::responses::UserResponse;
use moviebot_types::ValidationError;

use crate::auth::AccountEndpoints;
use crate::error::ApiError;
use crate::gate::{SessionGate, SessionOutcome};
use crate::surface::{RenderSurface, Route};

pub const LOGIN_FIELDS_REQUIRED: &str = "Please enter your username and password.";
pub const REGISTER_FIELDS_REQUIRED: &str = "Please fill in every field.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";
pub const LOGIN_FAILED: &str = "Login failed.";
pub const REGISTER_FAILED: &str = "Registration failed.";
pub const REGISTERED: &str = "Registration complete. Please log in.";
pub const SERVER_ERROR: &str = "A server error occurred.";

/// Drives the login and registration pages.
pub struct AccountFlow<G, R> {
    gate: G,
    surface: R,
}

impl<G, R> AccountFlow<G, R>
where
    G: SessionGate,
    R: RenderSurface,
{
    pub fn new(gate: G, surface: R) -> Self {
        Self { gate, surface }
    }

    /// Log in and move to the chat page.
    ///
    /// Blank fields are rejected without a request.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserResponse, ApiError> {
        let credentials = match Credentials::new(username, password) {
            Ok(credentials) => credentials,
            Err(e) => return Err(self.reject(e, LOGIN_FIELDS_REQUIRED)),
        };

        match self.gate.login(&credentials).await {
            SessionOutcome::Ok(resp) => {
                log::info!("logged in as {}", resp.user.username);
                self.surface.navigate(Route::Chat);
                Ok(resp.user)
            }
            SessionOutcome::Unauthorized => {
                self.surface.show_notice(INVALID_CREDENTIALS);
                Err(ApiError::NotAuthenticated)
            }
            SessionOutcome::Failure(e) => Err(self.server_failure(e, LOGIN_FAILED)),
        }
    }

    /// Create an account and move to the login page.
    ///
    /// All three fields are required and the passwords must match; either
    /// problem is reported without a request.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        confirm: &str,
    ) -> Result<UserResponse, ApiError> {
        let credentials = match Credentials::for_registration(username, password, confirm) {
            Ok(credentials) => credentials,
            Err(e @ ValidationError::PasswordMismatch) => {
                return Err(self.reject(e, PASSWORD_MISMATCH))
            }
            Err(e) => return Err(self.reject(e, REGISTER_FIELDS_REQUIRED)),
        };

        match self.gate.register(&credentials).await {
            SessionOutcome::Ok(resp) => {
                log::info!("registered {}", resp.user.username);
                self.surface.show_notice(REGISTERED);
                self.surface.navigate(Route::Login);
                Ok(resp.user)
            }
            SessionOutcome::Unauthorized => {
                self.surface.show_notice(REGISTER_FAILED);
                Err(ApiError::NotAuthenticated)
            }
            SessionOutcome::Failure(e) => Err(self.server_failure(e, REGISTER_FAILED)),
        }
    }

    /// End the session and go back to the login page, whatever the server
    /// answers.
    pub async fn logout(&self) {
        if let SessionOutcome::Failure(e) = self.gate.logout().await {
            log::warn!("logout request failed: {e}");
        }
        self.surface.navigate(Route::Login);
    }

    fn reject(&self, e: ValidationError, notice: &str) -> ApiError {
        self.surface.show_notice(notice);
        e.into()
    }

    fn server_failure(&self, e: ApiError, fallback: &str) -> ApiError {
        match &e {
            ApiError::Rejected { detail, .. } if detail != crate::GENERIC_FAILURE => {
                self.surface.show_notice(detail)
            }
            ApiError::Rejected { .. } => self.surface.show_notice(fallback),
            _ => {
                log::error!("account request failed: {e}");
                self.surface.show_notice(SERVER_ERROR)
            }
        }
        e
    }
}
