use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_transcript_closed() {
    let state = UiState::default();
    assert!(!state.transcript_open);
}

#[test]
fn view_mode_default_is_welcome() {
    assert_eq!(ViewMode::default(), ViewMode::Welcome);
}

#[test]
fn view_mode_follows_session_activity() {
    assert_eq!(ViewMode::for_session(false), ViewMode::Welcome);
    assert_eq!(ViewMode::for_session(true), ViewMode::Session);
}
