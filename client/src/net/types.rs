//! Session event/command schema shared with the session gateway.
//!
//! DESIGN
//! ======
//! The gateway owns the real-time session (tracks, data channels, chat). The
//! browser only sees it through these two enums: `SessionEvent` flows in,
//! `SessionCommand` flows out. Both serialize as JSON objects tagged by
//! `"type"` so the websocket binding can stay schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A publishable media source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackSource {
    Microphone,
    Camera,
    ScreenShare,
}

impl TrackSource {
    /// Device kind backing this source, if the source is device-selectable.
    #[must_use]
    pub fn device_kind(self) -> Option<DeviceKind> {
        match self {
            Self::Microphone => Some(DeviceKind::AudioInput),
            Self::Camera => Some(DeviceKind::VideoInput),
            Self::ScreenShare => None,
        }
    }
}

/// Media input device class, mirroring `MediaDeviceInfo.kind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    #[serde(rename = "audioinput")]
    AudioInput,
    #[serde(rename = "videoinput")]
    VideoInput,
}

/// A selectable media input device.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDevice {
    pub kind: DeviceKind,
    pub device_id: String,
    #[serde(default)]
    pub label: String,
}

/// Publish grants of the local participant as reported by the gateway.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantGrants {
    #[serde(default)]
    pub can_publish: bool,
    #[serde(default)]
    pub can_publish_data: bool,
    /// Sources the participant may publish. Empty means "any source".
    #[serde(default)]
    pub can_publish_sources: Vec<TrackSource>,
}

impl ParticipantGrants {
    /// Grants allowing every source and data publishing.
    #[must_use]
    pub fn full() -> Self {
        Self { can_publish: true, can_publish_data: true, can_publish_sources: Vec::new() }
    }
}

/// A participant other than the local user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteParticipant {
    pub identity: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Set when the participant is an agent worker rather than a human.
    #[serde(default)]
    pub is_agent: bool,
}

/// A device failure reported for one of the local sources.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceError {
    pub source: TrackSource,
    pub message: String,
}

/// Inbound notification from the session gateway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    Connected {
        local_identity: String,
    },
    Disconnected {
        #[serde(default)]
        reason: Option<String>,
    },
    ParticipantJoined {
        participant: RemoteParticipant,
    },
    ParticipantLeft {
        identity: String,
    },
    PermissionsChanged {
        grants: ParticipantGrants,
    },
    TrackChanged {
        source: TrackSource,
        enabled: bool,
    },
    DevicesChanged {
        devices: Vec<MediaDevice>,
    },
    ActiveDeviceChanged {
        kind: DeviceKind,
        device_id: String,
    },
    DeviceError {
        error: DeviceError,
    },
    ChatMessage {
        id: String,
        /// Sender identity; `None` or the local identity marks a local message.
        #[serde(default)]
        from: Option<String>,
        #[serde(default)]
        name: Option<String>,
        text: String,
        /// Milliseconds since the Unix epoch.
        timestamp: i64,
        #[serde(default)]
        edit_timestamp: Option<i64>,
    },
    /// Application payload received on a named data channel.
    Data {
        topic: String,
        payload: Vec<u8>,
    },
}

/// Outbound request to the session gateway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionCommand {
    Connect {
        agent_name: Option<String>,
        sandbox_id: Option<String>,
        /// Buffer microphone audio before the agent joins.
        pre_connect_buffer: bool,
    },
    SendChat {
        text: String,
    },
    SetTrackEnabled {
        source: TrackSource,
        enabled: bool,
    },
    SelectDevice {
        kind: DeviceKind,
        device_id: String,
    },
    Disconnect,
}
