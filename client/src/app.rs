//! Root application component, SSR shell and routing.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{AppConfig, CONFIG_SCRIPT_ID};
use crate::pages::storefront::StorefrontPage;
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The config is embedded as JSON so hydration reads exactly what the
/// server rendered with.
pub fn shell(options: LeptosOptions, config: AppConfig) -> impl IntoView {
    let embedded = config.to_embedded_json();
    let accent = theme::accent_css(&config);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <style id="app-accent" inner_html=accent></style>
                <script id=CONFIG_SCRIPT_ID type="application/json" inner_html=embedded></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config=config/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let title = config.page_title.clone();
    let description = config.page_description.clone();

    view! {
        <Stylesheet id="leptos" href="/pkg/barista.css"/>
        <Title text=title/>
        <Meta name="description" content=description/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <StorefrontPage config=config.clone()/> }/>
            </Routes>
        </Router>
    }
}
