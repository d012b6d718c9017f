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

//! Rebuilds conversation turns from a flat transcript.
//!
//! The history endpoint returns every message in order with no grouping.
//! [`group`] splits that list into [`ConversationGroup`]s: each `user`
//! message opens a new group and every message after it, whatever its
//! role, joins that group until the next `user` message.
//!
//! Messages before the first `user` message cannot be attributed to any
//! exchange and are dropped. Apart from that prefix, flattening the groups
//! yields the input unchanged.

use serde::Serialize;

use crate::error::ValidationError;
use crate::message::{Message, Role};
use crate::responses::HistoryEntry;

/// One exchange: a `user` message followed by zero or more replies.
///
/// Never empty, and the first message is always from the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConversationGroup {
    messages: Vec<Message>,
}

impl ConversationGroup {
    fn open(opener: Message) -> Self {
        debug_assert_eq!(opener.role(), &Role::User);
        Self {
            messages: vec![opener],
        }
    }

    /// The `user` message that started this exchange.
    pub fn opener(&self) -> &Message {
        &self.messages[0]
    }

    /// Everything after the opener.
    pub fn replies(&self) -> &[Message] {
        &self.messages[1..]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always `false`: a group holds at least its opener.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

impl<'a> IntoIterator for &'a ConversationGroup {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

/// Split an ordered transcript into conversation groups.
pub fn group<I>(transcript: I) -> Vec<ConversationGroup>
where
    I: IntoIterator<Item = Message>,
{
    let mut groups: Vec<ConversationGroup> = Vec::new();
    for message in transcript {
        match (message.role(), groups.last_mut()) {
            (Role::User, _) => groups.push(ConversationGroup::open(message)),
            (_, Some(current)) => current.messages.push(message),
            // Leading reply with no user message to attach to.
            (_, None) => {}
        }
    }
    groups
}

/// Validate raw history entries, then group them.
///
/// A single malformed entry rejects the whole transcript; nothing is coerced.
pub fn group_entries(entries: Vec<HistoryEntry>) -> Result<Vec<ConversationGroup>, ValidationError> {
    let messages = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_message(index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(group(messages))
}

/// Concatenate groups back into a flat transcript.
pub fn flatten(groups: &[ConversationGroup]) -> Vec<Message> {
    groups
        .iter()
        .flat_map(|g| g.messages.iter().cloned())
        .collect()
}
