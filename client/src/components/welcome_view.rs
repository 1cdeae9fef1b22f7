//! Landing screen shown before a session starts.

use leptos::prelude::*;

const FEATURES: [(&str, &str); 4] = [
    ("🎙️", "Voice Powered"),
    ("⚡", "Lightning Fast"),
    ("🤖", "AI Powered"),
    ("☕", "Perfect Orders"),
];

#[component]
pub fn WelcomeView(
    company_name: String,
    start_button_text: String,
    /// Logo for the active theme; empty shows the cup icon instead.
    #[prop(into)]
    logo: Signal<String>,
    on_start_call: Callback<()>,
) -> impl IntoView {
    let on_click = move |_| on_start_call.run(());

    view! {
        <div class="welcome">
            <div class="welcome__floaters" aria-hidden="true">
                <span class="welcome__floater welcome__floater--1">"☕"</span>
                <span class="welcome__floater welcome__floater--2">"🥐"</span>
                <span class="welcome__floater welcome__floater--3">"🍰"</span>
                <span class="welcome__floater welcome__floater--4">"🧁"</span>
            </div>

            <section class="welcome__content">
                <Show
                    when=move || !logo.with(String::is_empty)
                    fallback=|| view! { <div class="welcome__icon">"☕"</div> }
                >
                    <img class="welcome__logo" src=move || logo.get() alt="" />
                </Show>

                <h1 class="welcome__title">{company_name}</h1>
                <p class="welcome__tagline">"Your AI Barista is Ready to Take Your Order"</p>
                <p class="welcome__description">
                    "Experience the future of coffee ordering with our intelligent voice assistant"
                </p>

                <button class="btn btn--primary welcome__start" on:click=on_click>
                    "🎤 "{start_button_text}
                </button>

                <ul class="welcome__features">
                    {FEATURES
                        .iter()
                        .map(|(icon, label)| {
                            view! {
                                <li class="welcome__feature">
                                    <span class="welcome__feature-icon">{*icon}</span>
                                    <span>{*label}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        </div>
    }
}
