//! Overlay showing the agent's rendering of the drink being ordered.
//!
//! Listens on the `drink_visualization` data channel. Each message replaces
//! the fragment wholesale and stays up until the next one arrives.

#[cfg(test)]
#[path = "drink_visualization_test.rs"]
mod drink_visualization_test;

use leptos::prelude::*;

use crate::config::HtmlPolicy;
use crate::net::data_channel::{DRINK_VISUALIZATION_TOPIC, DataChannelHub, Subscription};
use crate::net::session::SessionHandle;
use crate::state::visualization::VisualizationState;
use crate::util::payload::render_payload;

/// Route `drink_visualization` packets from `hub` into `state`.
pub fn listen(hub: &DataChannelHub, state: RwSignal<VisualizationState>, policy: HtmlPolicy) -> Subscription {
    hub.on_message(DRINK_VISUALIZATION_TOPIC, move |bytes| {
        let html = render_payload(bytes, policy);
        state.try_update(|s| s.receive(html));
    })
}

#[component]
pub fn DrinkVisualization(session: SessionHandle, #[prop(optional)] html_policy: HtmlPolicy) -> impl IntoView {
    let state = RwSignal::new(VisualizationState::default());
    let subscription = listen(&session.channels(), state, html_policy);
    on_cleanup(move || subscription.cancel());

    view! {
        // Keyed on the render key: each message mounts a new element so the
        // entry animation replays.
        <For
            each=move || state.with(VisualizationState::rendered_entry)
            key=|(key, _)| *key
            children=move |(key, html)| {
                view! {
                    <div class="drink-visualization" data-render-key=key.to_string() inner_html=html></div>
                }
            }
        />
    }
}
