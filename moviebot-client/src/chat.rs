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

//! Chat endpoints: `/chat` and `/chat/history`.

use std::future::Future;

use moviebot_types::requests::ChatRequest;
use moviebot_types::responses::{ChatReply, HistoryResponse};
use moviebot_types::Message;
use reqwest::Method;

use crate::gate::{request_json, SessionGate, SessionOutcome};

/// Typed chat calls, available on every [`SessionGate`].
pub trait ChatEndpoints: SessionGate {
    /// Send one user message and wait for the assistant's reply.
    ///
    /// Calls `POST /chat` with a single-element message list.
    fn post_chat(&self, message: &Message) -> impl Future<Output = SessionOutcome<ChatReply>> {
        let body: ChatRequest = vec![message.clone()];
        request_json(self, Method::POST, "/chat", body)
    }

    /// Fetch the full stored transcript, oldest first.
    ///
    /// Calls `GET /chat/history`.
    fn chat_history(&self) -> impl Future<Output = SessionOutcome<HistoryResponse>> {
        self.request(Method::GET, "/chat/history", None)
    }
}

impl<G: SessionGate + ?Sized> ChatEndpoints for G {}
