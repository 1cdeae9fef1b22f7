//! Session handle shared by the storefront components.
//!
//! DESIGN
//! ======
//! `SessionHandle` is a `Copy` bundle of signals created once by the
//! storefront page and passed explicitly to every component that reads
//! session state or issues commands. It is the only place that talks to the
//! binding; components never see the command channel.
//!
//! Each started session gets a fresh epoch. Events are folded in only while
//! their epoch is current, so a binding that outlives its session (late
//! socket frames, loopback replies to `Disconnect`) cannot touch the next one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::data_channel::DataChannelHub;
use crate::net::session_client::{self, SessionLink};
use crate::net::types::{DeviceKind, SessionCommand, SessionEvent, TrackSource};
use crate::state::chat::{ChatMessage, ChatState, MessageOrigin};
use crate::state::session::SessionState;
use crate::util::user_choices;

#[derive(Clone, Copy)]
pub struct SessionHandle {
    pub state: RwSignal<SessionState>,
    pub chat: RwSignal<ChatState>,
    link: RwSignal<SessionLink>,
    channels: StoredValue<DataChannelHub>,
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionHandle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            chat: RwSignal::new(ChatState::default()),
            link: RwSignal::new(SessionLink::default()),
            channels: StoredValue::new(DataChannelHub::new()),
        }
    }

    /// Reactive: whether a session is currently active.
    pub fn is_active(&self) -> bool {
        self.state.with(|s| s.active)
    }

    /// Reactive: whether an agent participant is present.
    pub fn is_agent_available(&self) -> bool {
        self.state.with(SessionState::is_agent_available)
    }

    /// Data-channel hub fed by this session's `Data` events.
    pub fn channels(&self) -> DataChannelHub {
        self.channels.get_value()
    }

    /// Start a session against the configured binding.
    ///
    /// Returns `false` if a session is already active.
    pub fn start(&self, config: &AppConfig) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let handle = *self;
            let session_url = config.session_url.clone();
            self.start_with(config, move |epoch| {
                session_client::spawn_binding(session_url, move |event| handle.apply_event_from(epoch, event))
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.start_with(config, |_| SessionLink::default())
        }
    }

    fn start_with<F>(&self, config: &AppConfig, open: F) -> bool
    where
        F: FnOnce(u64) -> SessionLink,
    {
        let Some(epoch) = self.state.try_update(SessionState::begin).flatten() else {
            return false;
        };
        self.chat.update(ChatState::clear);

        let link = open(epoch);
        for command in session_client::start_commands(config, &user_choices::load()) {
            link.send(command);
        }
        self.link.set(link);
        true
    }

    /// End the active session. Returns `false` when nothing was active, so a
    /// repeated disconnect is a no-op.
    pub fn end(&self) -> bool {
        let ended = self.state.try_update(SessionState::end).unwrap_or(false);
        if ended {
            self.link.update(|link| {
                link.send(SessionCommand::Disconnect);
                link.close();
            });
        }
        ended
    }

    /// Fold an event into the current session.
    pub fn apply_event(&self, event: SessionEvent) {
        let epoch = self.state.with_untracked(|s| s.epoch);
        self.apply_event_from(epoch, event);
    }

    /// Fold an event produced by the binding of session `epoch`. Events from
    /// an ended or superseded session are dropped.
    pub fn apply_event_from(&self, epoch: u64, event: SessionEvent) {
        let current = self.state.with_untracked(|s| s.active && s.epoch == epoch);
        if !current {
            return;
        }

        match event {
            SessionEvent::Data { topic, payload } => {
                let delivered = self.channels.with_value(|hub| hub.deliver(&topic, &payload));
                if delivered == 0 {
                    leptos::logging::log!("data on '{topic}' had no listener");
                }
            }
            SessionEvent::ChatMessage { id, from, name, text, timestamp, edit_timestamp } => {
                let local = self.state.with_untracked(|s| s.is_local_sender(from.as_deref()));
                let message = ChatMessage {
                    id,
                    origin: if local { MessageOrigin::Local } else { MessageOrigin::Remote },
                    timestamp_ms: timestamp,
                    text,
                    name,
                    edited: edit_timestamp.is_some(),
                };
                self.chat.update(|c| c.upsert(message));
            }
            SessionEvent::Disconnected { reason } => {
                if let Some(reason) = reason.as_deref() {
                    leptos::logging::warn!("session disconnected: {reason}");
                }
                self.state.update(|s| s.apply_event(&SessionEvent::Disconnected { reason }));
                self.link.update(SessionLink::close);
            }
            other => self.state.update(|s| s.apply_event(&other)),
        }
    }

    /// Send a chat message and echo it into the transcript.
    ///
    /// Blank input and inactive sessions are ignored.
    pub fn send_chat(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || !self.state.with_untracked(|s| s.active) {
            return false;
        }
        let id = uuid::Uuid::new_v4().to_string();
        let now_ms = chrono::Utc::now().timestamp_millis();
        self.chat.update(|c| c.push_local(id, text.to_owned(), now_ms));
        self.link.with_untracked(|link| link.send(SessionCommand::SendChat { text: text.to_owned() }));
        true
    }

    /// Ask the binding to flip `source`. The toggle stays pending until the
    /// binding reports the resulting `TrackChanged` or a device error.
    pub fn toggle_track(&self, source: TrackSource) -> bool {
        let Some(enabled) = self.state.try_update(|s| s.request_toggle(source)).flatten() else {
            return false;
        };
        self.link.with_untracked(|link| link.send(SessionCommand::SetTrackEnabled { source, enabled }))
    }

    /// Switch the active device of `kind`, optionally remembering it for the
    /// next session.
    pub fn select_device(&self, kind: DeviceKind, device_id: &str, save: bool) -> bool {
        if save {
            user_choices::remember(kind, device_id);
        }
        if !self.state.with_untracked(|s| s.active) {
            return false;
        }
        self.link.with_untracked(|link| {
            link.send(SessionCommand::SelectDevice { kind, device_id: device_id.to_owned() })
        })
    }
}
