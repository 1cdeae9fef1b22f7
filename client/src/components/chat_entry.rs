//! One transcript line: sender label, locale time and message bubble.
//!
//! Rendering is split into a pure view model (`ChatEntryView`) and a thin
//! component so the labeling rules can be tested without a DOM.

#[cfg(test)]
#[path = "chat_entry_test.rs"]
mod chat_entry_test;

use leptos::prelude::*;

use crate::state::chat::MessageOrigin;
use crate::util::time_format::{TimeStyle, format_time};

pub const LOCAL_SENDER_LABEL: &str = "You";
pub const REMOTE_SENDER_LABEL: &str = "AgentX Barista";

/// Display-ready representation of a chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntryView {
    /// Full locale time, used as the accessible title.
    pub title: String,
    /// Short locale time shown next to the sender.
    pub time_label: String,
    pub sender_label: &'static str,
    pub edited_marker: &'static str,
    /// Local messages are laid out right-to-left.
    pub reversed: bool,
    pub origin: MessageOrigin,
    /// Sender name as reported by the session. Labels stay fixed per origin;
    /// the name is only exposed as a data attribute.
    pub name: Option<String>,
    pub message: String,
}

impl ChatEntryView {
    #[must_use]
    pub fn new(
        locale: &str,
        timestamp_ms: i64,
        message: &str,
        origin: MessageOrigin,
        name: Option<&str>,
        has_been_edited: bool,
    ) -> Self {
        let local = origin == MessageOrigin::Local;
        Self {
            title: format_time(locale, timestamp_ms, TimeStyle::Full),
            time_label: format_time(locale, timestamp_ms, TimeStyle::Short),
            sender_label: if local { LOCAL_SENDER_LABEL } else { REMOTE_SENDER_LABEL },
            edited_marker: if has_been_edited { "*" } else { "" },
            reversed: local,
            origin,
            name: name.map(str::to_owned),
            message: message.to_owned(),
        }
    }

    fn icon(&self) -> &'static str {
        if self.reversed { "👤" } else { "☕" }
    }
}

#[component]
pub fn ChatEntry(
    locale: String,
    timestamp_ms: i64,
    message: String,
    origin: MessageOrigin,
    #[prop(default = None)] name: Option<String>,
    #[prop(optional)] has_been_edited: bool,
) -> impl IntoView {
    let entry = ChatEntryView::new(&locale, timestamp_ms, &message, origin, name.as_deref(), has_been_edited);
    let icon = entry.icon();

    view! {
        <li
            class="chat-entry"
            class:chat-entry--local=entry.reversed
            title=entry.title
            data-message-origin=entry.origin.as_str()
            data-name=entry.name
        >
            <header class="chat-entry__header" class:chat-entry__header--reversed=entry.reversed>
                <span class="chat-entry__sender">{icon}" "{entry.sender_label}</span>
                <span class="chat-entry__time">{entry.edited_marker}{entry.time_label}</span>
            </header>
            <div class="chat-entry__bubble">
                <span class="chat-entry__text">{entry.message}</span>
            </div>
        </li>
    }
}
