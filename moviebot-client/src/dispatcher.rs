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

//! One send-message cycle, end to end.
//!
//! ```text
//! Idle -> Sent (optimistic user bubble) -> Replied | Failed | Unauthorized
//! ```
//!
//! Every terminal state is final. Nothing is retried; the user sends again
//! or logs in again.

use moviebot_types::{Message, Role};

use crate::chat::ChatEndpoints;
use crate::gate::{SessionGate, SessionOutcome};
use crate::surface::RenderSurface;

/// Shown in place of a reply when the chat request fails. The underlying
/// error only goes to the log.
pub const FALLBACK_NOTICE: &str = "⚠️ A server error occurred. Please try again.";

/// How a [`ChatDispatcher::send`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendState {
    /// Blank input. Nothing was rendered or sent.
    Skipped,
    /// The assistant's reply was rendered.
    Replied,
    /// The request failed and the fallback notice was rendered.
    Failed,
    /// The session is gone and re-authentication was requested.
    Unauthorized,
}

/// Sends user messages and renders the outcome.
///
/// Sends are independent: two calls in flight at once each render their own
/// result in whichever order the responses arrive.
pub struct ChatDispatcher<G, R> {
    gate: G,
    surface: R,
}

impl<G, R> ChatDispatcher<G, R>
where
    G: SessionGate,
    R: RenderSurface,
{
    pub fn new(gate: G, surface: R) -> Self {
        Self { gate, surface }
    }

    pub fn gate(&self) -> &G {
        &self.gate
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// Run one send cycle for `raw_text`.
    ///
    /// The user's message is rendered and the input cleared before the
    /// request is issued, and the bubble stays even if the request fails.
    /// At most one further render follows: the reply, the fallback notice,
    /// or nothing when re-authentication is required.
    pub async fn send(&self, raw_text: &str) -> SendState {
        let message = match Message::user_input(raw_text) {
            Ok(message) => message,
            Err(_) => return SendState::Skipped,
        };

        self.surface.append_message(Role::User, message.content());
        self.surface.clear_input();

        match self.gate.post_chat(&message).await {
            SessionOutcome::Ok(reply) => {
                self.surface
                    .append_message(Role::Assistant, &reply.assistant_reply);
                SendState::Replied
            }
            SessionOutcome::Unauthorized => {
                log::info!("chat session expired, requesting re-authentication");
                self.surface.require_reauthentication();
                SendState::Unauthorized
            }
            SessionOutcome::Failure(e) => {
                log::error!("chat request failed: {e}");
                self.surface.append_message(Role::Assistant, FALLBACK_NOTICE);
                SendState::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;
    use tokio::sync::oneshot;

    use super::*;
    use crate::error::ApiError;
    use crate::gate::scripted::{Reply, ScriptedGate};
    use crate::surface::recording::{RecordingSurface, Render};

    fn reply(text: &str) -> Reply {
        Reply::Json(json!({ "assistant_reply": text }))
    }

    #[tokio::test]
    async fn renders_user_then_reply() {
        let gate = ScriptedGate::with([reply("Try Heat (1995).")]);
        let surface = RecordingSurface::default();
        let dispatcher = ChatDispatcher::new(&gate, &surface);

        let state = dispatcher.send("  something like Ronin?  ").await;

        assert_eq!(state, SendState::Replied);
        assert_eq!(
            surface.renders(),
            vec![
                Render::Append(Role::User, "something like Ronin?".to_string()),
                Render::ClearInput,
                Render::Append(Role::Assistant, "Try Heat (1995).".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn posts_single_trimmed_user_message() {
        let gate = ScriptedGate::with([reply("ok")]);
        let surface = RecordingSurface::default();
        ChatDispatcher::new(&gate, &surface).send(" hi ").await;

        let calls = gate.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::POST);
        assert_eq!(calls[0].endpoint, "/chat");
        assert_eq!(
            calls[0].body,
            Some(json!([{ "role": "user", "content": "hi" }]))
        );
    }

    #[tokio::test]
    async fn blank_input_is_a_no_op() {
        let gate = ScriptedGate::default();
        let surface = RecordingSurface::default();
        let dispatcher = ChatDispatcher::new(&gate, &surface);

        assert_eq!(dispatcher.send("   ").await, SendState::Skipped);
        assert_eq!(dispatcher.send("").await, SendState::Skipped);
        assert!(surface.renders().is_empty());
        assert!(gate.calls().is_empty());
    }

    #[tokio::test]
    async fn user_bubble_is_rendered_before_the_response() {
        let (tx, rx) = oneshot::channel();
        let gate = ScriptedGate::with([Reply::Deferred(rx)]);
        let surface = RecordingSurface::default();
        let dispatcher = ChatDispatcher::new(&gate, &surface);

        let (state, ()) = tokio::join!(dispatcher.send("hello"), async {
            assert_eq!(surface.appends(), vec![(Role::User, "hello".to_string())]);
            assert_eq!(surface.len(), 2);
            let _ = tx.send(reply("hi there"));
        });

        assert_eq!(state, SendState::Replied);
        assert_eq!(surface.appends().len(), 2);
    }

    #[tokio::test]
    async fn unauthorized_requests_reauthentication_only() {
        let gate = ScriptedGate::with([Reply::Unauthorized]);
        let surface = RecordingSurface::default();

        let state = ChatDispatcher::new(&gate, &surface).send("hello").await;

        assert_eq!(state, SendState::Unauthorized);
        let renders = surface.renders();
        assert_eq!(
            renders.iter().filter(|r| **r == Render::Reauthenticate).count(),
            1
        );
        assert!(!surface
            .appends()
            .iter()
            .any(|(role, _)| *role == Role::Assistant));
    }

    #[tokio::test]
    async fn transport_failure_renders_fallback_not_raw_error() {
        let gate = ScriptedGate::with([Reply::Failure(ApiError::Transport(
            "connection refused (os error 111)".to_string(),
        ))]);
        let surface = RecordingSurface::default();

        let state = ChatDispatcher::new(&gate, &surface).send("hello").await;

        assert_eq!(state, SendState::Failed);
        assert_eq!(
            surface.appends(),
            vec![
                (Role::User, "hello".to_string()),
                (Role::Assistant, FALLBACK_NOTICE.to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn server_rejection_detail_is_not_leaked() {
        let gate = ScriptedGate::with([Reply::Failure(ApiError::Rejected {
            status: 500,
            detail: "openai: invalid api key".to_string(),
        })]);
        let surface = RecordingSurface::default();

        ChatDispatcher::new(&gate, &surface).send("hello").await;

        let appends = surface.appends();
        assert_eq!(appends[1], (Role::Assistant, FALLBACK_NOTICE.to_string()));
        assert!(appends.iter().all(|(_, text)| !text.contains("api key")));
    }

    #[tokio::test]
    async fn malformed_reply_counts_as_failure() {
        let gate = ScriptedGate::with([Reply::Json(json!({ "reply": "wrong field" }))]);
        let surface = RecordingSurface::default();

        let state = ChatDispatcher::new(&gate, &surface).send("hello").await;

        assert_eq!(state, SendState::Failed);
        assert_eq!(
            surface.appends().last(),
            Some(&(Role::Assistant, FALLBACK_NOTICE.to_string()))
        );
    }

    #[tokio::test]
    async fn concurrent_sends_render_in_completion_order() {
        let (tx_first, rx_first) = oneshot::channel();
        let (tx_second, rx_second) = oneshot::channel();
        let gate = ScriptedGate::with([Reply::Deferred(rx_first), Reply::Deferred(rx_second)]);
        let surface = RecordingSurface::default();
        let dispatcher = ChatDispatcher::new(&gate, &surface);

        let (first, second, ()) = tokio::join!(
            dispatcher.send("first"),
            dispatcher.send("second"),
            async {
                let _ = tx_second.send(reply("answer to second"));
                tokio::task::yield_now().await;
                let _ = tx_first.send(reply("answer to first"));
            }
        );

        assert_eq!((first, second), (SendState::Replied, SendState::Replied));
        assert_eq!(
            surface.appends(),
            vec![
                (Role::User, "first".to_string()),
                (Role::User, "second".to_string()),
                (Role::Assistant, "answer to second".to_string()),
                (Role::Assistant, "answer to first".to_string()),
            ]
        );
    }
}
