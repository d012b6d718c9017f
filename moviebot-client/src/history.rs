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

//! The history page: fetch the stored transcript and show it grouped.

use moviebot_types::transcript::{self, ConversationGroup};

use crate::chat::ChatEndpoints;
use crate::error::ApiError;
use crate::gate::{SessionGate, SessionOutcome};
use crate::surface::RenderSurface;

/// The single notice shown when history cannot be displayed.
pub const HISTORY_UNAVAILABLE: &str = "Unable to load chat history.";

/// Loads `/chat/history` and renders it as conversation groups.
pub struct HistoryView<G, R> {
    gate: G,
    surface: R,
}

impl<G, R> HistoryView<G, R>
where
    G: SessionGate,
    R: RenderSurface,
{
    pub fn new(gate: G, surface: R) -> Self {
        Self { gate, surface }
    }

    /// Fetch, validate, group and render the transcript.
    ///
    /// On success the groups are rendered and returned. Any failure,
    /// including an expired session or a malformed entry, renders exactly
    /// one [`HISTORY_UNAVAILABLE`] notice and nothing else. There is no
    /// retry.
    pub async fn load(&self) -> Result<Vec<ConversationGroup>, ApiError> {
        match self.fetch().await {
            Ok(groups) => {
                log::debug!("rendering {} conversation groups", groups.len());
                self.surface.render_conversation_groups(&groups);
                Ok(groups)
            }
            Err(e) => {
                log::warn!("chat history unavailable: {e}");
                self.surface.show_notice(HISTORY_UNAVAILABLE);
                Err(e)
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<ConversationGroup>, ApiError> {
        let history = match self.gate.chat_history().await {
            SessionOutcome::Ok(history) => history,
            other => return other.map(|_| Vec::new()).into_result(),
        };
        Ok(transcript::group_entries(history.history)?)
    }
}
