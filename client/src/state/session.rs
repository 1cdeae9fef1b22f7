//! Session state as reported by the gateway.
//!
//! DESIGN
//! ======
//! `SessionState` is plain data folded from `SessionEvent`s. Chat and data
//! events are routed elsewhere by the session handle; everything else lands
//! here. `epoch` survives resets so events from a binding that belonged to an
//! earlier session can be recognised and dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{DeviceError, DeviceKind, MediaDevice, ParticipantGrants, RemoteParticipant, SessionEvent, TrackSource};
use crate::state::controls::PublishPermissions;

/// Connection phase of the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Toggle state of one local track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackToggleState {
    pub enabled: bool,
    /// A toggle was requested and the gateway has not confirmed it yet.
    pub pending: bool,
}

/// Toggle state of every local source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackStates {
    pub microphone: TrackToggleState,
    pub camera: TrackToggleState,
    pub screen_share: TrackToggleState,
}

impl TrackStates {
    #[must_use]
    pub fn get(&self, source: TrackSource) -> TrackToggleState {
        match source {
            TrackSource::Microphone => self.microphone,
            TrackSource::Camera => self.camera,
            TrackSource::ScreenShare => self.screen_share,
        }
    }

    fn get_mut(&mut self, source: TrackSource) -> &mut TrackToggleState {
        match source {
            TrackSource::Microphone => &mut self.microphone,
            TrackSource::Camera => &mut self.camera,
            TrackSource::ScreenShare => &mut self.screen_share,
        }
    }
}

/// Currently selected input device per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveDevices {
    pub audio_input: Option<String>,
    pub video_input: Option<String>,
}

impl ActiveDevices {
    #[must_use]
    pub fn get(&self, kind: DeviceKind) -> Option<&str> {
        match kind {
            DeviceKind::AudioInput => self.audio_input.as_deref(),
            DeviceKind::VideoInput => self.video_input.as_deref(),
        }
    }

    fn set(&mut self, kind: DeviceKind, device_id: String) {
        match kind {
            DeviceKind::AudioInput => self.audio_input = Some(device_id),
            DeviceKind::VideoInput => self.video_input = Some(device_id),
        }
    }
}

/// Everything the UI knows about the running session.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub active: bool,
    pub connection: ConnectionState,
    pub epoch: u64,
    pub local_identity: Option<String>,
    pub participants: Vec<RemoteParticipant>,
    pub grants: ParticipantGrants,
    pub tracks: TrackStates,
    pub devices: Vec<MediaDevice>,
    pub active_devices: ActiveDevices,
    pub last_error: Option<DeviceError>,
    /// Bumped on every device error so observers can react to repeats.
    pub device_error_seq: u64,
}

impl SessionState {
    /// Begin a new session. Returns the new epoch, or `None` when a session
    /// is already active.
    pub fn begin(&mut self) -> Option<u64> {
        if self.active {
            return None;
        }
        let epoch = self.epoch + 1;
        *self = Self { active: true, connection: ConnectionState::Connecting, epoch, ..Self::default() };
        Some(epoch)
    }

    /// End the session. Returns `false` when nothing was active, so a second
    /// disconnect is a no-op.
    pub fn end(&mut self) -> bool {
        if !self.active {
            return false;
        }
        let epoch = self.epoch;
        *self = Self { epoch, ..Self::default() };
        true
    }

    /// Whether any remote participant is an agent.
    #[must_use]
    pub fn is_agent_available(&self) -> bool {
        self.participants.iter().any(|p| p.is_agent)
    }

    #[must_use]
    pub fn publish_permissions(&self) -> PublishPermissions {
        PublishPermissions::from_grants(&self.grants)
    }

    /// Mark `source` as pending a toggle and return the state to request.
    ///
    /// Returns `None` while a previous toggle of the same source is still
    /// unconfirmed or no session is active.
    pub fn request_toggle(&mut self, source: TrackSource) -> Option<bool> {
        if !self.active {
            return None;
        }
        let track = self.tracks.get_mut(source);
        if track.pending {
            return None;
        }
        track.pending = true;
        Some(!track.enabled)
    }

    /// Fold a gateway event into the session. Chat and data events are not
    /// session state and are ignored here.
    pub fn apply_event(&mut self, event: &SessionEvent) {
        if !self.active {
            return;
        }
        match event {
            SessionEvent::Connected { local_identity } => {
                self.connection = ConnectionState::Connected;
                self.local_identity = Some(local_identity.clone());
            }
            SessionEvent::Disconnected { .. } => {
                self.end();
            }
            SessionEvent::ParticipantJoined { participant } => {
                match self.participants.iter_mut().find(|p| p.identity == participant.identity) {
                    Some(existing) => *existing = participant.clone(),
                    None => self.participants.push(participant.clone()),
                }
            }
            SessionEvent::ParticipantLeft { identity } => {
                self.participants.retain(|p| &p.identity != identity);
            }
            SessionEvent::PermissionsChanged { grants } => {
                self.grants = grants.clone();
            }
            SessionEvent::TrackChanged { source, enabled } => {
                *self.tracks.get_mut(*source) = TrackToggleState { enabled: *enabled, pending: false };
            }
            SessionEvent::DevicesChanged { devices } => {
                self.devices = devices.clone();
            }
            SessionEvent::ActiveDeviceChanged { kind, device_id } => {
                self.active_devices.set(*kind, device_id.clone());
            }
            SessionEvent::DeviceError { error } => {
                self.tracks.get_mut(error.source).pending = false;
                self.last_error = Some(error.clone());
                self.device_error_seq += 1;
            }
            SessionEvent::ChatMessage { .. } | SessionEvent::Data { .. } => {}
        }
    }

    /// Whether a chat message from `from` was sent by the local participant.
    ///
    /// Unattributed messages count as remote; local echoes never come
    /// through the gateway.
    #[must_use]
    pub fn is_local_sender(&self, from: Option<&str>) -> bool {
        from.is_some_and(|identity| self.local_identity.as_deref() == Some(identity))
    }

    /// Devices of one kind, in gateway order.
    #[must_use]
    pub fn devices_of(&self, kind: DeviceKind) -> Vec<MediaDevice> {
        self.devices.iter().filter(|d| d.kind == kind).cloned().collect()
    }
}
