//! Local UI chrome state (theme, transcript panel).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session state so controls
//! can evolve independently of what the gateway reports.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which top-level view the storefront shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Landing screen with the start button.
    #[default]
    Welcome,
    /// Live session: transcript, overlays and the control bar.
    Session,
}

impl ViewMode {
    #[must_use]
    pub fn for_session(active: bool) -> Self {
        if active { Self::Session } else { Self::Welcome }
    }
}

/// UI state provided via context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Whether the transcript panel is open. Mirrors the control bar toggle.
    pub transcript_open: bool,
}
