//! Storefront theming.
//!
//! Covers the light/dark switch, the brand accent and the logo variant. The
//! dark flag is stored under `barista_dark` and mirrored onto `<html>` as
//! `data-theme`; with nothing stored the system color scheme decides. The
//! accent colors become `--accent` / `--accent-dark` custom properties in
//! the SSR shell, and `logo_for` picks the dark logo when one is configured.
//!
//! TRADE-OFFS
//! ==========
//! Server rendering always assumes light mode. The stored preference is
//! applied after hydration, so a dark-mode user may see a brief light frame.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::AppConfig;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "barista_dark";

/// Read the dark mode preference from localStorage.
///
/// Returns `true` if the user previously enabled dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage()
            && let Ok(Some(val)) = storage.get_item(STORAGE_KEY)
        {
            return val == "true";
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}

/// `:root` rule carrying the accent colors as `--accent` and
/// `--accent-dark`. Unset or unsafe values leave the stylesheet defaults.
#[must_use]
pub fn accent_css(config: &AppConfig) -> String {
    let mut decls = String::new();
    for (name, value) in [("--accent", &config.accent), ("--accent-dark", &config.accent_dark)] {
        if let Some(value) = value.as_deref().map(str::trim).filter(|v| is_safe_css_color(v)) {
            decls.push_str(name);
            decls.push_str(": ");
            decls.push_str(value);
            decls.push(';');
        }
    }
    if decls.is_empty() { String::new() } else { format!(":root {{ {decls} }}") }
}

/// Accept hex colors and simple functional/named colors; reject anything that
/// could end the declaration or the `<style>` element.
fn is_safe_css_color(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 64
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-'))
}

/// Logo for the active theme. An empty dark logo falls back to the light one.
#[must_use]
pub fn logo_for(config: &AppConfig, dark: bool) -> &str {
    if dark
        && let Some(logo) = config.logo_dark.as_deref().filter(|l| !l.is_empty())
    {
        return logo;
    }
    &config.logo
}
