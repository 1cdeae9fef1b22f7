use super::*;

fn active() -> SessionState {
    let mut state = SessionState::default();
    state.begin();
    state
}

fn agent(identity: &str) -> RemoteParticipant {
    RemoteParticipant { identity: identity.to_owned(), name: Some("Barista".to_owned()), is_agent: true }
}

fn human(identity: &str) -> RemoteParticipant {
    RemoteParticipant { identity: identity.to_owned(), name: None, is_agent: false }
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn default_session_is_inactive() {
    let state = SessionState::default();
    assert!(!state.active);
    assert_eq!(state.connection, ConnectionState::Disconnected);
}

#[test]
fn begin_activates_and_advances_epoch() {
    let mut state = SessionState::default();
    assert_eq!(state.begin(), Some(1));
    assert!(state.active);
    assert_eq!(state.connection, ConnectionState::Connecting);
}

#[test]
fn begin_while_active_is_rejected() {
    let mut state = active();
    assert_eq!(state.begin(), None);
    assert_eq!(state.epoch, 1);
}

#[test]
fn end_runs_exactly_once() {
    let mut state = active();
    assert!(state.end());
    assert!(!state.active);
    assert!(!state.end());
}

#[test]
fn end_keeps_epoch_so_next_session_is_distinct() {
    let mut state = active();
    state.end();
    assert_eq!(state.epoch, 1);
    assert_eq!(state.begin(), Some(2));
}

#[test]
fn end_clears_participants_and_grants() {
    let mut state = active();
    state.apply_event(&SessionEvent::ParticipantJoined { participant: agent("a") });
    state.apply_event(&SessionEvent::PermissionsChanged { grants: ParticipantGrants::full() });
    state.end();
    assert!(state.participants.is_empty());
    assert_eq!(state.grants, ParticipantGrants::default());
}

// =============================================================
// Events
// =============================================================

#[test]
fn connected_event_records_identity() {
    let mut state = active();
    state.apply_event(&SessionEvent::Connected { local_identity: "user-1".to_owned() });
    assert_eq!(state.connection, ConnectionState::Connected);
    assert_eq!(state.local_identity.as_deref(), Some("user-1"));
}

#[test]
fn events_are_ignored_while_inactive() {
    let mut state = SessionState::default();
    state.apply_event(&SessionEvent::ParticipantJoined { participant: agent("a") });
    assert!(state.participants.is_empty());
}

#[test]
fn remote_disconnect_ends_session() {
    let mut state = active();
    state.apply_event(&SessionEvent::Disconnected { reason: Some("room closed".to_owned()) });
    assert!(!state.active);
}

#[test]
fn participant_join_is_idempotent_per_identity() {
    let mut state = active();
    state.apply_event(&SessionEvent::ParticipantJoined { participant: human("a") });
    state.apply_event(&SessionEvent::ParticipantJoined { participant: agent("a") });
    assert_eq!(state.participants.len(), 1);
    assert!(state.participants[0].is_agent);
}

#[test]
fn agent_availability_tracks_agent_participants() {
    let mut state = active();
    assert!(!state.is_agent_available());

    state.apply_event(&SessionEvent::ParticipantJoined { participant: human("guest") });
    assert!(!state.is_agent_available());

    state.apply_event(&SessionEvent::ParticipantJoined { participant: agent("barista") });
    assert!(state.is_agent_available());

    state.apply_event(&SessionEvent::ParticipantLeft { identity: "barista".to_owned() });
    assert!(!state.is_agent_available());
}

#[test]
fn permissions_follow_grants() {
    let mut state = active();
    assert!(!state.publish_permissions().microphone);
    state.apply_event(&SessionEvent::PermissionsChanged { grants: ParticipantGrants::full() });
    assert!(state.publish_permissions().microphone);
}

#[test]
fn active_device_change_is_recorded_per_kind() {
    let mut state = active();
    state.apply_event(&SessionEvent::ActiveDeviceChanged {
        kind: DeviceKind::VideoInput,
        device_id: "cam-1".to_owned(),
    });
    assert_eq!(state.active_devices.get(DeviceKind::VideoInput), Some("cam-1"));
    assert_eq!(state.active_devices.get(DeviceKind::AudioInput), None);
}

#[test]
fn devices_of_filters_by_kind() {
    let mut state = active();
    state.apply_event(&SessionEvent::DevicesChanged {
        devices: vec![
            MediaDevice { kind: DeviceKind::AudioInput, device_id: "mic".to_owned(), label: "Mic".to_owned() },
            MediaDevice { kind: DeviceKind::VideoInput, device_id: "cam".to_owned(), label: "Cam".to_owned() },
        ],
    });
    let mics = state.devices_of(DeviceKind::AudioInput);
    assert_eq!(mics.len(), 1);
    assert_eq!(mics[0].device_id, "mic");
}

// =============================================================
// Track toggles
// =============================================================

#[test]
fn toggle_request_marks_pending_until_confirmed() {
    let mut state = active();
    assert_eq!(state.request_toggle(TrackSource::Microphone), Some(true));
    assert!(state.tracks.microphone.pending);
    assert_eq!(state.request_toggle(TrackSource::Microphone), None);

    state.apply_event(&SessionEvent::TrackChanged { source: TrackSource::Microphone, enabled: true });
    assert_eq!(state.tracks.get(TrackSource::Microphone), TrackToggleState { enabled: true, pending: false });
    assert_eq!(state.request_toggle(TrackSource::Microphone), Some(false));
}

#[test]
fn toggle_request_without_session_is_rejected() {
    let mut state = SessionState::default();
    assert_eq!(state.request_toggle(TrackSource::Camera), None);
}

#[test]
fn device_error_clears_pending_and_bumps_sequence() {
    let mut state = active();
    state.request_toggle(TrackSource::Camera);
    state.apply_event(&SessionEvent::DeviceError {
        error: DeviceError { source: TrackSource::Camera, message: "NotAllowedError".to_owned() },
    });
    assert!(!state.tracks.camera.pending);
    assert_eq!(state.device_error_seq, 1);
    assert_eq!(state.last_error.as_ref().map(|e| e.message.as_str()), Some("NotAllowedError"));
}

// =============================================================
// Chat origin
// =============================================================

#[test]
fn local_sender_detection_uses_identity() {
    let mut state = active();
    state.apply_event(&SessionEvent::Connected { local_identity: "me".to_owned() });
    assert!(state.is_local_sender(Some("me")));
    assert!(!state.is_local_sender(Some("agent")));
}

#[test]
fn unattributed_chat_message_is_remote() {
    let mut state = active();
    state.apply_event(&SessionEvent::Connected { local_identity: "me".to_owned() });
    assert!(!state.is_local_sender(None));
    assert!(!SessionState::default().is_local_sender(None));
}
