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

//! Request types for the MovieBot REST API.
//!
//! These types define the shape of request bodies. They are used by both
//! the server (for deserialization) and clients (for serialization).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::message::Message;

/// Request body for `POST /chat`: the ordered messages to send.
///
/// The client sends a single-element list holding the new user message.
pub type ChatRequest = Vec<Message>;

/// Request body for `POST /login` and `POST /register`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Trim both fields and reject blanks.
    pub fn new(username: &str, password: &str) -> Result<Self, ValidationError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() {
            return Err(ValidationError::MissingField("username"));
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Like [`Credentials::new`], additionally requiring the confirmation
    /// to be present and equal to the password.
    pub fn for_registration(
        username: &str,
        password: &str,
        confirm: &str,
    ) -> Result<Self, ValidationError> {
        let credentials = Self::new(username, password)?;
        let confirm = confirm.trim();
        if confirm.is_empty() {
            return Err(ValidationError::MissingField("password confirmation"));
        }
        if confirm != credentials.password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_trimmed() {
        let c = Credentials::new(" alice ", " hunter2 ").unwrap();
        assert_eq!(c.username, "alice");
        assert_eq!(c.password, "hunter2");
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(
            Credentials::new("", "pw"),
            Err(ValidationError::MissingField("username"))
        );
        assert_eq!(
            Credentials::new("alice", "  "),
            Err(ValidationError::MissingField("password"))
        );
    }

    #[test]
    fn registration_requires_matching_confirmation() {
        assert!(Credentials::for_registration("alice", "pw", "pw").is_ok());
        assert_eq!(
            Credentials::for_registration("alice", "pw", "other"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            Credentials::for_registration("alice", "pw", ""),
            Err(ValidationError::MissingField("password confirmation"))
        );
    }

    #[test]
    fn chat_request_shape() {
        let body: ChatRequest = vec![Message::user_input("hi").unwrap()];
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!([{"role": "user", "content": "hi"}])
        );
    }
}
