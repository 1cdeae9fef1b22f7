//! Control bar for the voice session: chat input, track toggles, transcript
//! toggle and the end-call button.
//!
//! DESIGN
//! ======
//! Which controls appear is resolved once per render from explicit
//! overrides and the participant's publish permissions
//! (`VisibleControls::resolve`). The bar owns only the transcript open flag;
//! everything else is read from and written to the session handle.

#[cfg(test)]
#[path = "agent_control_bar_test.rs"]
mod agent_control_bar_test;

use leptos::prelude::*;

use crate::components::chat_input::ChatInput;
use crate::components::track_toggle::{TrackSelector, TrackToggle};
use crate::net::session::SessionHandle;
use crate::net::types::{DeviceError, DeviceKind, TrackSource};
use crate::state::controls::{ControlBarControls, VisibleControls};

/// End the active session, then notify `on_disconnect`.
///
/// Returns `false` without side effects when no session is active, which is
/// also when the button is disabled.
pub fn disconnect(session: SessionHandle, on_disconnect: Option<Callback<()>>) -> bool {
    if !session.end() {
        return false;
    }
    if let Some(cb) = on_disconnect {
        cb.run(());
    }
    true
}

#[component]
pub fn AgentControlBar(
    session: SessionHandle,
    #[prop(optional)] controls: ControlBarControls,
    #[prop(default = true)] save_user_choices: bool,
    #[prop(optional)] on_disconnect: Option<Callback<()>>,
    #[prop(optional)] on_chat_open_change: Option<Callback<bool>>,
    #[prop(optional)] on_device_error: Option<Callback<DeviceError>>,
) -> impl IntoView {
    let chat_open = RwSignal::new(false);

    let visible = Memo::new(move |_| {
        let permissions = session.state.with(|s| s.publish_permissions());
        VisibleControls::resolve(&controls, &permissions)
    });
    let is_active = move || session.is_active();
    let is_agent_available = Signal::derive(move || session.is_agent_available());

    // Surface device errors reported by the session; no local recovery.
    Effect::new(move |prev: Option<u64>| {
        let seq = session.state.with(|s| s.device_error_seq);
        if prev.is_some_and(|p| p != seq)
            && seq > 0
            && let Some(cb) = on_device_error
            && let Some(error) = session.state.with_untracked(|s| s.last_error.clone())
        {
            cb.run(error);
        }
        seq
    });

    let on_send = Callback::new(move |text: String| {
        session.send_chat(&text);
    });

    let on_toggle_transcript = move |_| {
        let open = !chat_open.get_untracked();
        chat_open.set(open);
        if let Some(cb) = on_chat_open_change {
            cb.run(open);
        }
    };

    let on_disconnect_click = move |_| {
        disconnect(session, on_disconnect);
    };

    view! {
        <div class="control-bar" aria-label="Voice assistant controls">
            <Show when=move || visible.get().chat>
                <ChatInput chat_open=chat_open is_agent_available=is_agent_available on_send=on_send />
            </Show>

            <div class="control-bar__row">
                <div class="control-bar__group">
                    <Show when=move || visible.get().microphone>
                        <TrackSelector
                            session=session
                            kind=DeviceKind::AudioInput
                            source=TrackSource::Microphone
                            aria_label="Toggle microphone"
                            save_user_choices=save_user_choices
                            on_device_error=on_device_error
                        />
                    </Show>

                    <Show when=move || visible.get().camera>
                        <TrackSelector
                            session=session
                            kind=DeviceKind::VideoInput
                            source=TrackSource::Camera
                            aria_label="Toggle camera"
                            save_user_choices=save_user_choices
                            on_device_error=on_device_error
                        />
                    </Show>

                    <Show when=move || visible.get().screen_share>
                        <TrackToggle session=session source=TrackSource::ScreenShare aria_label="Toggle screen share" />
                    </Show>

                    <button
                        class="control-bar__toggle control-bar__toggle--transcript"
                        class:control-bar__toggle--on=move || chat_open.get()
                        aria-label="Toggle transcript"
                        aria-pressed=move || if chat_open.get() { "true" } else { "false" }
                        on:click=on_toggle_transcript
                    >
                        "💬"
                    </button>
                </div>

                <Show when=move || visible.get().leave>
                    <button
                        class="btn btn--danger control-bar__leave"
                        disabled=move || !is_active()
                        on:click=on_disconnect_click
                    >
                        <span class="control-bar__leave-long">"END CALL"</span>
                        <span class="control-bar__leave-short">"END"</span>
                    </button>
                </Show>
            </div>
        </div>
    }
}
