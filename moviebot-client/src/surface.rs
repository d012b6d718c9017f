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

//! The rendering collaborator.
//!
//! The client never owns UI state. It issues append-only render commands
//! and navigation requests against a [`RenderSurface`], which a browser
//! front end maps to DOM updates and a terminal front end maps to prints.

use std::rc::Rc;

use moviebot_types::{ConversationGroup, Role};

/// Pages of the chat application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Chat,
    History,
}

impl Route {
    /// Location of the page as served by the backend.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/static/login.html",
            Route::Register => "/static/register.html",
            Route::Chat => "/static/chat.html",
            Route::History => "/static/history.html",
        }
    }
}

/// Render commands issued by the dispatcher and the history/account flows.
///
/// Methods take `&self`: several send cycles may be in flight at once on a
/// single thread, so implementations use interior mutability for whatever
/// they record.
pub trait RenderSurface {
    /// Append one message bubble to the live transcript.
    fn append_message(&self, role: Role, text: &str);

    /// Clear the chat input box.
    fn clear_input(&self) {}

    /// The session is gone; the user has to log in again.
    fn require_reauthentication(&self) {
        self.show_notice("Please log in again.");
        self.navigate(Route::Login);
    }

    /// Replace the history view with `groups`.
    fn render_conversation_groups(&self, groups: &[ConversationGroup]);

    /// A user-visible alert.
    fn show_notice(&self, text: &str);

    fn navigate(&self, route: Route);
}

impl<R: RenderSurface + ?Sized> RenderSurface for &R {
    fn append_message(&self, role: Role, text: &str) {
        (**self).append_message(role, text)
    }

    fn clear_input(&self) {
        (**self).clear_input()
    }

    fn require_reauthentication(&self) {
        (**self).require_reauthentication()
    }

    fn render_conversation_groups(&self, groups: &[ConversationGroup]) {
        (**self).render_conversation_groups(groups)
    }

    fn show_notice(&self, text: &str) {
        (**self).show_notice(text)
    }

    fn navigate(&self, route: Route) {
        (**self).navigate(route)
    }
}

impl<R: RenderSurface + ?Sized> RenderSurface for Rc<R> {
    fn append_message(&self, role: Role, text: &str) {
        (**self).append_message(role, text)
    }

    fn clear_input(&self) {
        (**self).clear_input()
    }

    fn require_reauthentication(&self) {
        (**self).require_reauthentication()
    }

    fn render_conversation_groups(&self, groups: &[ConversationGroup]) {
        (**self).render_conversation_groups(groups)
    }

    fn show_notice(&self, text: &str) {
        (**self).show_notice(text)
    }

    fn navigate(&self, route: Route) {
        (**self).navigate(route)
    }
}
