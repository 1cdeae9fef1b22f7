//! Control bar visibility resolution.
//!
//! Each control is shown according to an explicit override when the caller
//! provides one, otherwise according to what the local participant may
//! publish.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use crate::config::AppConfig;
use crate::net::types::{ParticipantGrants, TrackSource};

/// What the local participant may publish right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PublishPermissions {
    pub camera: bool,
    pub microphone: bool,
    pub screen_share: bool,
    pub data: bool,
}

impl PublishPermissions {
    /// Derive permissions from gateway grants.
    ///
    /// A media source is publishable when publishing is granted and the
    /// source allow-list is empty or names it.
    #[must_use]
    pub fn from_grants(grants: &ParticipantGrants) -> Self {
        let can = |source: TrackSource| {
            grants.can_publish
                && (grants.can_publish_sources.is_empty() || grants.can_publish_sources.contains(&source))
        };
        Self {
            camera: can(TrackSource::Camera),
            microphone: can(TrackSource::Microphone),
            screen_share: can(TrackSource::ScreenShare),
            data: grants.can_publish_data,
        }
    }
}

/// Caller overrides for control visibility. `None` defers to permissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlBarControls {
    pub leave: Option<bool>,
    pub camera: Option<bool>,
    pub microphone: Option<bool>,
    pub screen_share: Option<bool>,
    pub chat: Option<bool>,
}

impl ControlBarControls {
    /// Overrides implied by the storefront feature flags.
    ///
    /// Leave and microphone stay permission-driven; the other three follow
    /// the corresponding `supports*` flag.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            leave: None,
            microphone: None,
            chat: Some(config.supports_chat_input),
            camera: Some(config.supports_video_input),
            screen_share: Some(config.supports_screen_share),
        }
    }
}

/// Final visibility of each control bar control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleControls {
    pub leave: bool,
    pub camera: bool,
    pub microphone: bool,
    pub screen_share: bool,
    pub chat: bool,
}

impl VisibleControls {
    #[must_use]
    pub fn resolve(overrides: &ControlBarControls, permissions: &PublishPermissions) -> Self {
        Self {
            leave: overrides.leave.unwrap_or(true),
            microphone: overrides.microphone.unwrap_or(permissions.microphone),
            screen_share: overrides.screen_share.unwrap_or(permissions.screen_share),
            camera: overrides.camera.unwrap_or(permissions.camera),
            chat: overrides.chat.unwrap_or(permissions.data),
        }
    }
}
