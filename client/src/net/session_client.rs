//! Browser binding between the session seam and the real-time gateway.
//!
//! The binding owns the outbound command channel and a local async task that
//! turns commands into events. Two bindings exist:
//!
//! - **gateway**: one JSON object per WebSocket text message, both ways.
//! - **loopback**: no gateway configured; commands are answered locally so the
//!   storefront can be exercised end to end without a media backend.
//!
//! All socket and task logic is gated behind `#[cfg(feature = "hydrate")]`
//! since it requires a browser environment. Message encoding, decoding and
//! the loopback answers are plain functions so they can be unit tested.
//!
//! ERROR HANDLING
//! ==============
//! Malformed gateway messages are logged and skipped. A socket that fails to
//! open or closes underneath the session is reported as a `Disconnected`
//! event so the UI returns to the welcome view.

#[cfg(test)]
#[path = "session_client_test.rs"]
mod session_client_test;

use futures::channel::mpsc::UnboundedSender;

use crate::config::AppConfig;
use crate::net::types::{
    DeviceKind, ParticipantGrants, RemoteParticipant, SessionCommand, SessionEvent, TrackSource,
};
use crate::util::user_choices::UserChoices;

/// Identity the loopback binding assigns to the local participant.
pub const LOOPBACK_LOCAL_IDENTITY: &str = "local-user";

/// Identity of the simulated agent when no agent name is configured.
pub const LOOPBACK_AGENT_IDENTITY: &str = "agent";

/// Outbound half of an open binding.
///
/// A closed link silently drops commands; `send` reports whether the command
/// was queued.
#[derive(Clone, Debug, Default)]
pub struct SessionLink {
    tx: Option<UnboundedSender<SessionCommand>>,
}

impl SessionLink {
    #[must_use]
    pub fn new(tx: UnboundedSender<SessionCommand>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Queue `command` for the binding. Returns `false` if the link is closed.
    pub fn send(&self, command: SessionCommand) -> bool {
        self.tx.as_ref().is_some_and(|tx| tx.unbounded_send(command).is_ok())
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.tx.as_ref().is_some_and(|tx| !tx.is_closed())
    }

    /// Close the outbound channel. Already queued commands are still flushed
    /// by the binding before its task exits.
    pub fn close(&mut self) {
        if let Some(tx) = self.tx.take() {
            tx.close_channel();
        }
    }
}

/// Commands sent when a session starts: `Connect`, then any persisted device
/// choices.
#[must_use]
pub fn start_commands(config: &AppConfig, choices: &UserChoices) -> Vec<SessionCommand> {
    let mut commands = vec![SessionCommand::Connect {
        agent_name: config.agent_name.clone(),
        sandbox_id: config.sandbox_id.clone(),
        pre_connect_buffer: config.is_pre_connect_buffer_enabled,
    }];
    for kind in [DeviceKind::AudioInput, DeviceKind::VideoInput] {
        if let Some(device_id) = choices.get(kind) {
            commands.push(SessionCommand::SelectDevice { kind, device_id: device_id.to_owned() });
        }
    }
    commands
}

/// Encode one command as a gateway text message.
///
/// # Errors
///
/// Returns the serializer error; in practice every command serializes.
pub fn encode_command(command: &SessionCommand) -> Result<String, serde_json::Error> {
    serde_json::to_string(command)
}

/// Decode one gateway text message. Unknown or malformed messages are logged
/// and yield `None`.
#[must_use]
pub fn decode_gateway_message(text: &str) -> Option<SessionEvent> {
    match serde_json::from_str::<SessionEvent>(text) {
        Ok(event) => Some(event),
        Err(e) => {
            leptos::logging::warn!("dropping gateway message: {e}");
            None
        }
    }
}

/// Events the loopback binding answers `command` with.
#[must_use]
pub fn loopback_response(command: &SessionCommand) -> Vec<SessionEvent> {
    match command {
        SessionCommand::Connect { agent_name, pre_connect_buffer, .. } => {
            let agent_identity = agent_name.clone().unwrap_or_else(|| LOOPBACK_AGENT_IDENTITY.to_owned());
            vec![
                SessionEvent::Connected { local_identity: LOOPBACK_LOCAL_IDENTITY.to_owned() },
                SessionEvent::PermissionsChanged { grants: ParticipantGrants::full() },
                SessionEvent::TrackChanged { source: TrackSource::Microphone, enabled: *pre_connect_buffer },
                SessionEvent::ParticipantJoined {
                    participant: RemoteParticipant { identity: agent_identity, name: agent_name.clone(), is_agent: true },
                },
            ]
        }
        SessionCommand::SendChat { .. } => Vec::new(),
        SessionCommand::SetTrackEnabled { source, enabled } => {
            vec![SessionEvent::TrackChanged { source: *source, enabled: *enabled }]
        }
        SessionCommand::SelectDevice { kind, device_id } => {
            vec![SessionEvent::ActiveDeviceChanged { kind: *kind, device_id: device_id.clone() }]
        }
        SessionCommand::Disconnect => vec![SessionEvent::Disconnected { reason: None }],
    }
}

/// Spawn the binding for one session as a local async task.
///
/// `sink` receives every inbound event; the caller scopes it to the session
/// that opened the binding. The task ends once the returned link is closed
/// and its queued commands are flushed, or when the gateway hangs up.
#[cfg(feature = "hydrate")]
pub fn spawn_binding<F>(session_url: Option<String>, sink: F) -> SessionLink
where
    F: Fn(SessionEvent) + 'static,
{
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<SessionCommand>();
    match session_url.filter(|url| !url.trim().is_empty()) {
        Some(url) => leptos::task::spawn_local(gateway_loop(url, rx, sink)),
        None => leptos::task::spawn_local(loopback_loop(rx, sink)),
    }
    SessionLink::new(tx)
}

#[cfg(feature = "hydrate")]
async fn loopback_loop<F>(mut rx: futures::channel::mpsc::UnboundedReceiver<SessionCommand>, sink: F)
where
    F: Fn(SessionEvent),
{
    use futures::StreamExt;

    leptos::logging::log!("session: loopback binding (no gateway configured)");
    while let Some(command) = rx.next().await {
        // Yield so responses land after the caller finishes its own update.
        gloo_timers::future::sleep(std::time::Duration::from_millis(0)).await;
        for event in loopback_response(&command) {
            sink(event);
        }
    }
}

#[cfg(feature = "hydrate")]
async fn gateway_loop<F>(url: String, rx: futures::channel::mpsc::UnboundedReceiver<SessionCommand>, sink: F)
where
    F: Fn(SessionEvent),
{
    let reason = match connect_and_run(&url, rx, &sink).await {
        Ok(()) => {
            leptos::logging::log!("session: gateway closed");
            None
        }
        Err(e) => {
            leptos::logging::warn!("session: gateway error: {e}");
            Some(e)
        }
    };
    sink(SessionEvent::Disconnected { reason });
}

/// Connect to the gateway and pump messages until either side finishes.
#[cfg(feature = "hydrate")]
async fn connect_and_run<F>(
    url: &str,
    mut rx: futures::channel::mpsc::UnboundedReceiver<SessionCommand>,
    sink: &F,
) -> Result<(), String>
where
    F: Fn(SessionEvent),
{
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    let send_task = async {
        use futures::SinkExt;
        while let Some(command) = rx.next().await {
            let Ok(text) = encode_command(&command) else {
                continue;
            };
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
        let _ = ws_write.close().await;
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Some(event) = decode_gateway_message(&text) {
                        sink(event);
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("session: gateway recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    Ok(())
}
