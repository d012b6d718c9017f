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

//! Response types for the MovieBot REST API.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::message::{Message, Role};

/// Response payload for `POST /chat`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatReply {
    /// The assistant's reply to the submitted message.
    pub assistant_reply: String,

    /// The submitted messages followed by the reply, as stored server-side.
    #[serde(default)]
    pub updated_messages: Vec<HistoryEntry>,
}

/// Response payload for `GET /chat/history`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct HistoryResponse {
    /// The full flat transcript, oldest first.
    pub history: Vec<HistoryEntry>,
}

/// A transcript entry as it arrives on the wire, before validation.
///
/// The role is kept as an optional string so an entry without one can be
/// reported with its position instead of failing the whole decode.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    #[serde(default)]
    pub role: Option<String>,
    pub content: String,
}

impl HistoryEntry {
    /// Validate the entry found at `index` into a [`Message`].
    ///
    /// Only a missing or blank role is rejected; any other role is kept.
    pub fn into_message(self, index: usize) -> Result<Message, ValidationError> {
        let name = self
            .role
            .filter(|r| !r.trim().is_empty())
            .ok_or(ValidationError::MissingRole { index })?;
        Ok(Message::new(Role::from(name), self.content))
    }
}

impl From<Message> for HistoryEntry {
    fn from(message: Message) -> Self {
        Self {
            role: Some(message.role().as_str().to_string()),
            content: message.content().to_string(),
        }
    }
}

/// Public user record returned by `GET /me` and embedded in auth responses.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

/// Response payload for `POST /login` and `POST /register`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserResponse,
}
