//! A [`RenderSurface`] that prints to the terminal.

use std::cell::Cell;
use std::fmt::Write;

use moviebot_client::moviebot_types::{ConversationGroup, Role};
use moviebot_client::{RenderSurface, Route};

/// Prints chat bubbles to stdout and notices to stderr.
///
/// Navigation has no terminal counterpart and is only logged.
#[derive(Default)]
pub struct TerminalSurface {
    session_lost: Cell<bool>,
}

impl TerminalSurface {
    /// Whether the server reported the session as gone.
    pub fn session_lost(&self) -> bool {
        self.session_lost.get()
    }
}

fn speaker(role: &Role) -> &str {
    match role {
        Role::User => "you",
        Role::Assistant => "moviebot",
        Role::Other(name) => name,
    }
}

pub fn format_message(role: &Role, text: &str) -> String {
    format!("[{}] {}", speaker(role), text)
}

pub fn format_groups(groups: &[ConversationGroup]) -> String {
    if groups.is_empty() {
        return "No conversations yet.\n".to_string();
    }
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        let _ = writeln!(out, "--- conversation {} ---", i + 1);
        for message in group {
            let _ = writeln!(out, "{}", format_message(message.role(), message.content()));
        }
    }
    out
}

impl RenderSurface for TerminalSurface {
    fn append_message(&self, role: Role, text: &str) {
        // The user's own line is already on screen.
        if role == Role::Assistant {
            println!("{}", format_message(&role, text));
        }
    }

    fn require_reauthentication(&self) {
        self.session_lost.set(true);
        self.show_notice("Your session has expired. Please log in again.");
        self.navigate(Route::Login);
    }

    fn render_conversation_groups(&self, groups: &[ConversationGroup]) {
        print!("{}", format_groups(groups));
    }

    fn show_notice(&self, text: &str) {
        eprintln!("! {text}");
    }

    fn navigate(&self, route: Route) {
        tracing::debug!(route = route.path(), "navigate");
    }
}
