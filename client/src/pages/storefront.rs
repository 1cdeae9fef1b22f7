//! Storefront page: welcome screen, then the live ordering session.
//!
//! ARCHITECTURE
//! ============
//! The page owns the `SessionHandle` and the local UI chrome state, and
//! passes both down explicitly. While no session is active the welcome view
//! is shown; starting one swaps in the transcript, both agent overlays and
//! the control bar. Ending the session (locally or from the gateway) swaps
//! back.

use leptos::prelude::*;

use crate::components::agent_control_bar::AgentControlBar;
use crate::components::chat_transcript::ChatTranscript;
use crate::components::drink_visualization::DrinkVisualization;
use crate::components::order_receipt::OrderReceipt;
use crate::components::welcome_view::WelcomeView;
use crate::config::AppConfig;
use crate::net::session::SessionHandle;
use crate::net::types::DeviceError;
use crate::state::controls::ControlBarControls;
use crate::state::ui::{UiState, ViewMode};
use crate::util::theme;

#[component]
pub fn StorefrontPage(config: AppConfig) -> impl IntoView {
    let session = SessionHandle::new();
    let ui = RwSignal::new(UiState::default());
    let controls = ControlBarControls::from_config(&config);
    let html_policy = config.html_policy;
    let timer_policy = config.receipt_timer;
    let company_name = config.company_name.clone();
    let start_button_text = config.start_button_text.clone();
    let config = StoredValue::new(config);

    // Theme preference lives in the browser; SSR always renders light.
    Effect::new(move || {
        let dark = theme::read_preference();
        theme::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    let view_mode = Memo::new(move |_| ViewMode::for_session(session.is_active()));
    let logo = Signal::derive(move || {
        let dark = ui.with(|u| u.dark_mode);
        config.with_value(|c| theme::logo_for(c, dark).to_owned())
    });

    let on_start = Callback::new(move |()| {
        ui.update(|u| u.transcript_open = false);
        if !config.with_value(|c| session.start(c)) {
            leptos::logging::warn!("start ignored: session already active");
        }
    });
    let on_chat_open_change = Callback::new(move |open: bool| ui.update(|u| u.transcript_open = open));
    let on_device_error = Callback::new(move |error: DeviceError| {
        leptos::logging::warn!("device error on {:?}: {}", error.source, error.message);
    });
    let on_toggle_theme = move |_| ui.update(|u| u.dark_mode = theme::toggle(u.dark_mode));

    view! {
        <main class="storefront">
            <Show
                when=move || view_mode.get() == ViewMode::Session
                fallback=move || {
                    view! {
                        <WelcomeView
                            company_name=company_name.clone()
                            start_button_text=start_button_text.clone()
                            logo=logo
                            on_start_call=on_start
                        />
                    }
                }
            >
                <div class="session-view">
                    <Show when=move || ui.with(|u| u.transcript_open)>
                        <ChatTranscript chat=session.chat locale=config.with_value(AppConfig::resolved_locale) />
                    </Show>
                    <DrinkVisualization session=session html_policy=html_policy />
                    <OrderReceipt session=session html_policy=html_policy timer_policy=timer_policy />
                    <AgentControlBar
                        session=session
                        controls=controls
                        on_chat_open_change=on_chat_open_change
                        on_device_error=on_device_error
                    />
                </div>
            </Show>

            <button
                class="theme-toggle"
                aria-label="Toggle dark mode"
                on:click=on_toggle_theme
            >
                {move || if ui.with(|u| u.dark_mode) { "☀️" } else { "🌙" }}
            </button>
        </main>
    }
}
