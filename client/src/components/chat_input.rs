//! Text input for typed orders, shown inside the control bar.

use leptos::prelude::*;

#[component]
pub fn ChatInput(
    /// Whether the transcript panel is open; the input expands with it.
    #[prop(into)]
    chat_open: Signal<bool>,
    /// Passed through to the placeholder only; sending is never blocked.
    #[prop(into)]
    is_agent_available: Signal<bool>,
    on_send: Callback<String>,
) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        if chat_open.get() {
            #[cfg(feature = "hydrate")]
            {
                if let Some(input_el) = input_ref.get() {
                    let _ = input_el.focus();
                }
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        on_send.run(text);
        input.set(String::new());
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let placeholder = move || {
        if is_agent_available.get() { "Type your order..." } else { "Waiting for the barista..." }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-input" class:chat-input--open=move || chat_open.get()>
            <input
                class="chat-input__field"
                type="text"
                node_ref=input_ref
                placeholder=placeholder
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="btn btn--primary chat-input__send" on:click=on_click disabled=move || !can_send()>
                "Send"
            </button>
        </div>
    }
}
