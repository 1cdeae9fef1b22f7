//! Modal order receipt pushed by the agent once an order is placed.
//!
//! Listens on the `order_receipt` data channel. Every message shows the
//! receipt and schedules a hide after `RECEIPT_AUTO_HIDE`; whether a given
//! elapsed timer may hide the receipt is decided by `ReceiptState` according
//! to the configured timer policy. The backdrop and the close button hide it
//! immediately.

#[cfg(test)]
#[path = "order_receipt_test.rs"]
mod order_receipt_test;

use leptos::prelude::*;

use crate::config::{HtmlPolicy, ReceiptTimerPolicy};
use crate::net::data_channel::{DataChannelHub, ORDER_RECEIPT_TOPIC, Subscription};
use crate::net::session::SessionHandle;
use crate::state::visualization::{HideTimer, ReceiptState};
use crate::util::payload::render_payload;

/// Route `order_receipt` packets from `hub` into `state`, handing each new
/// receipt's hide timer to `schedule`.
pub fn listen<S>(hub: &DataChannelHub, state: RwSignal<ReceiptState>, policy: HtmlPolicy, schedule: S) -> Subscription
where
    S: Fn(HideTimer) + Send + Sync + 'static,
{
    hub.on_message(ORDER_RECEIPT_TOPIC, move |bytes| {
        let html = render_payload(bytes, policy);
        if let Some(timer) = state.try_update(|s| s.receive(html)) {
            schedule(timer);
        }
    })
}

/// Sleep for the auto-hide delay, then offer `timer` to the receipt. A timer
/// that outlives the component finds the signal disposed and does nothing.
fn schedule_auto_hide(state: RwSignal<ReceiptState>, timer: HideTimer) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::visualization::RECEIPT_AUTO_HIDE;

        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(RECEIPT_AUTO_HIDE).await;
            state.try_update(|s| s.expire(timer));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, timer);
    }
}

#[component]
pub fn OrderReceipt(
    session: SessionHandle,
    #[prop(optional)] html_policy: HtmlPolicy,
    #[prop(optional)] timer_policy: ReceiptTimerPolicy,
) -> impl IntoView {
    let state = RwSignal::new(ReceiptState::new(timer_policy));
    let subscription = listen(&session.channels(), state, html_policy, move |timer| {
        schedule_auto_hide(state, timer);
    });
    on_cleanup(move || subscription.cancel());

    let dismiss = move |_| {
        state.update(|s| {
            s.dismiss();
        });
    };

    view! {
        <Show when=move || state.with(ReceiptState::is_rendered)>
            <div class="order-receipt__backdrop" on:click=dismiss></div>
            <div class="order-receipt">
                <div class="order-receipt__body" inner_html=move || state.with(|s| s.html().to_owned())></div>
                <button class="order-receipt__close" aria-label="Close receipt" on:click=dismiss>
                    "×"
                </button>
            </div>
        </Show>
    }
}
