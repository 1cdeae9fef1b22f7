//! Scrolling transcript of the session's chat messages.

use leptos::prelude::*;

use crate::components::chat_entry::ChatEntry;
use crate::state::chat::ChatState;

#[component]
pub fn ChatTranscript(chat: RwSignal<ChatState>, locale: String) -> impl IntoView {
    let list_ref = NodeRef::<leptos::html::Ul>::new();
    let locale = StoredValue::new(locale);

    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = list_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <ul class="chat-transcript" node_ref=list_ref>
            <For
                each=move || chat.get().messages
                key=|msg| (msg.id.clone(), msg.text.clone(), msg.edited)
                children=move |msg| {
                    view! {
                        <ChatEntry
                            locale=locale.get_value()
                            timestamp_ms=msg.timestamp_ms
                            message=msg.text
                            origin=msg.origin
                            name=msg.name
                            has_been_edited=msg.edited
                        />
                    }
                }
            />
        </ul>
    }
}
