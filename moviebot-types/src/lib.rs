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

//! Shared API types for the MovieBot chat client.
//!
//! This crate defines the contract between the MovieBot backend and its
//! clients: request and response bodies, the role-tagged [`Message`], and
//! the pure [`transcript`] grouping used by the history view.
//! It has no HTTP or runtime dependencies so it builds unchanged for
//! `wasm32` and native targets.

pub mod error;
pub mod message;
pub mod requests;
pub mod responses;
pub mod transcript;

pub use error::{ErrorBody, ValidationError};
pub use message::{Message, Role};
pub use responses::HistoryEntry;
pub use transcript::ConversationGroup;
