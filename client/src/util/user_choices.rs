//! Persisted media device choices.
//!
//! The control bar's device selectors remember the last microphone and camera
//! in `localStorage` so the next session starts on the same devices. Storage
//! is best-effort browser-only behavior; SSR paths no-op.

#[cfg(test)]
#[path = "user_choices_test.rs"]
mod user_choices_test;

use serde::{Deserialize, Serialize};

use crate::net::types::DeviceKind;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "barista_user_choices";

/// Preferred device id per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserChoices {
    pub audio_input: Option<String>,
    pub video_input: Option<String>,
}

impl UserChoices {
    #[must_use]
    pub fn get(&self, kind: DeviceKind) -> Option<&str> {
        match kind {
            DeviceKind::AudioInput => self.audio_input.as_deref(),
            DeviceKind::VideoInput => self.video_input.as_deref(),
        }
    }

    /// Record `device_id` for `kind`. Empty ids clear the choice.
    pub fn set(&mut self, kind: DeviceKind, device_id: &str) {
        let value = (!device_id.is_empty()).then(|| device_id.to_owned());
        match kind {
            DeviceKind::AudioInput => self.audio_input = value,
            DeviceKind::VideoInput => self.video_input = value,
        }
    }
}

/// Load saved choices; missing or unreadable storage yields no choices.
pub fn load() -> UserChoices {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        UserChoices::default()
    }
}

/// Persist `device_id` as the preferred device for `kind` and return the
/// updated choices.
pub fn remember(kind: DeviceKind, device_id: &str) -> UserChoices {
    let mut choices = load();
    choices.set(kind, device_id);
    #[cfg(feature = "hydrate")]
    {
        if let (Some(storage), Ok(raw)) = (
            web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
            serde_json::to_string(&choices),
        ) {
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
    }
    choices
}
