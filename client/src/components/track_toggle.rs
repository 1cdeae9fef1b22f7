//! Media track toggles and device selectors for the control bar.

use leptos::prelude::*;

use crate::net::session::SessionHandle;
use crate::net::types::{DeviceError, DeviceKind, TrackSource};

fn source_icon(source: TrackSource, enabled: bool) -> &'static str {
    match (source, enabled) {
        (TrackSource::Microphone, true) => "🎙️",
        (TrackSource::Microphone, false) => "🔇",
        (TrackSource::Camera, true) => "📹",
        (TrackSource::Camera, false) => "📷",
        (TrackSource::ScreenShare, _) => "🖥️",
    }
}

/// Pressed-state button for one track source. Disabled while a toggle is
/// waiting for the session to confirm.
#[component]
pub fn TrackToggle(session: SessionHandle, source: TrackSource, aria_label: &'static str) -> impl IntoView {
    let track = move || session.state.with(|s| s.tracks.get(source));
    let on_click = move |_| {
        session.toggle_track(source);
    };

    view! {
        <button
            class="control-bar__toggle"
            class:control-bar__toggle--on=move || track().enabled
            class:control-bar__toggle--pending=move || track().pending
            aria-label=aria_label
            aria-pressed=move || if track().enabled { "true" } else { "false" }
            disabled=move || track().pending
            on:click=on_click
        >
            {move || source_icon(source, track().enabled)}
        </button>
    }
}

/// Track toggle paired with a device picker for its input kind.
#[component]
pub fn TrackSelector(
    session: SessionHandle,
    kind: DeviceKind,
    source: TrackSource,
    aria_label: &'static str,
    #[prop(optional)] save_user_choices: bool,
    #[prop(default = None)] on_device_error: Option<Callback<DeviceError>>,
) -> impl IntoView {
    let devices = move || session.state.with(|s| s.devices_of(kind));
    let active = move || session.state.with(|s| s.active_devices.get(kind).map(str::to_owned));

    let on_change = move |ev| {
        let device_id = event_target_value(&ev);
        if !session.select_device(kind, &device_id, save_user_choices)
            && let Some(cb) = on_device_error
        {
            cb.run(DeviceError { source, message: format!("could not switch to device '{device_id}'") });
        }
    };

    view! {
        <div class="control-bar__selector">
            <TrackToggle session=session source=source aria_label=aria_label />
            <Show when=move || !devices().is_empty()>
                <select
                    class="control-bar__devices"
                    aria-label=format!("{aria_label} device")
                    on:change=on_change
                >
                    <For
                        each=devices
                        key=|d| d.device_id.clone()
                        children=move |d| {
                            let selected_id = d.device_id.clone();
                            let label = if d.label.is_empty() { d.device_id.clone() } else { d.label.clone() };
                            view! {
                                <option
                                    value=d.device_id
                                    selected=move || active().as_deref() == Some(selected_id.as_str())
                                >
                                    {label}
                                </option>
                            }
                        }
                    />
                </select>
            </Show>
        </div>
    }
}
