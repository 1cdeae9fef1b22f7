#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Which side of the session authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageOrigin {
    Local,
    Remote,
}

impl MessageOrigin {
    /// Attribute spelling used on rendered chat entries.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

/// A single transcript message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub origin: MessageOrigin,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    pub text: String,
    pub name: Option<String>,
    pub edited: bool,
}

/// Transcript shown next to the control bar while a session is active.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    /// Append a message typed by the local user.
    pub fn push_local(&mut self, id: String, text: String, timestamp_ms: i64) {
        self.messages.push(ChatMessage {
            id,
            origin: MessageOrigin::Local,
            timestamp_ms,
            text,
            name: None,
            edited: false,
        });
    }

    /// Insert a message, or replace the text of a known one.
    ///
    /// Replacing keeps the original position and timestamp and marks the
    /// message edited when the text changed.
    pub fn upsert(&mut self, message: ChatMessage) {
        match self.messages.iter_mut().find(|m| m.id == message.id) {
            Some(existing) => {
                if existing.text != message.text {
                    existing.text = message.text;
                    existing.edited = true;
                }
                existing.edited |= message.edited;
            }
            None => self.messages.push(message),
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
