//! Static storefront configuration.
//!
//! DESIGN
//! ======
//! `AppConfig` is built once by the host at startup, serialized into the SSR
//! document, and read back exactly once during hydration. Nothing mutates it
//! afterwards; components receive it (or pieces of it) as props.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// DOM id of the `<script type="application/json">` element carrying the
/// serialized config.
pub const CONFIG_SCRIPT_ID: &str = "app-config";

/// Locale used when neither the config nor the browser provides one.
pub const FALLBACK_LOCALE: &str = "en-US";

/// How agent-supplied HTML fragments are treated before injection.
///
/// The agent is a trusted peer by contract, so fragments are injected
/// verbatim unless the deployment opts into sanitizing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HtmlPolicy {
    #[default]
    Trusted,
    Sanitized,
}

impl HtmlPolicy {
    /// Parse the configuration spelling (`trusted` / `sanitized`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "trusted" => Some(Self::Trusted),
            "sanitized" | "sanitize" => Some(Self::Sanitized),
            _ => None,
        }
    }
}

/// Scheduling behavior of the order receipt auto-hide timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptTimerPolicy {
    /// Every receipt schedules its own timer and none are cancelled; the
    /// first timer to fire hides whatever receipt is showing.
    #[default]
    Stacked,
    /// Only the timer scheduled by the most recent receipt may hide it.
    Reset,
}

impl ReceiptTimerPolicy {
    /// Parse the configuration spelling (`stacked` / `reset`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "stacked" => Some(Self::Stacked),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

/// Storefront display strings, feature flags, theme and session settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub page_title: String,
    pub page_description: String,
    pub company_name: String,

    pub supports_chat_input: bool,
    pub supports_video_input: bool,
    pub supports_screen_share: bool,
    pub is_pre_connect_buffer_enabled: bool,

    pub logo: String,
    pub start_button_text: String,
    pub accent: Option<String>,
    pub logo_dark: Option<String>,
    pub accent_dark: Option<String>,

    /// Sandbox identifier forwarded to the gateway on connect.
    pub sandbox_id: Option<String>,
    /// Agent to dispatch into the session, when the gateway supports naming one.
    pub agent_name: Option<String>,

    /// WebSocket URL of the session gateway. `None` runs a loopback session.
    pub session_url: Option<String>,
    /// Locale for chat timestamps. `None` uses the browser language.
    pub locale: Option<String>,
    pub html_policy: HtmlPolicy,
    pub receipt_timer: ReceiptTimerPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_title: "AgentX Coffee Shop - AI Voice Barista".to_owned(),
            page_description: "Order your favorite coffee with our AI voice barista".to_owned(),
            company_name: "AgentX Coffee Shop".to_owned(),

            supports_chat_input: true,
            supports_video_input: true,
            supports_screen_share: true,
            is_pre_connect_buffer_enabled: true,

            logo: String::new(),
            start_button_text: "Start Ordering".to_owned(),
            accent: Some("#7c3aed".to_owned()),
            logo_dark: Some(String::new()),
            accent_dark: Some("#a78bfa".to_owned()),

            sandbox_id: None,
            agent_name: None,

            session_url: None,
            locale: None,
            html_policy: HtmlPolicy::Trusted,
            receipt_timer: ReceiptTimerPolicy::Stacked,
        }
    }
}

impl AppConfig {
    /// Serialize for embedding inside a `<script>` element.
    ///
    /// `</` is escaped so string values can never close the element early.
    #[must_use]
    pub fn to_embedded_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace("</", "<\\/")
    }

    /// Parse an embedded config, falling back to defaults on malformed input.
    #[must_use]
    pub fn from_embedded_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("embedded app config unreadable, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Locale for timestamp formatting: configured value, else the browser
    /// language, else [`FALLBACK_LOCALE`].
    #[must_use]
    pub fn resolved_locale(&self) -> String {
        self.locale
            .as_deref()
            .and_then(normalize_locale)
            .or_else(|| browser_language().as_deref().and_then(normalize_locale))
            .unwrap_or_else(|| FALLBACK_LOCALE.to_owned())
    }
}

/// Turn a locale setting into a well-formed Unicode locale identifier.
///
/// POSIX spellings are accepted (`en_US.UTF-8` becomes `en-US`). Returns
/// `None` for anything `Intl` would reject with a `RangeError`.
#[must_use]
pub fn normalize_locale(raw: &str) -> Option<String> {
    let tag = raw.trim().split(['.', '@']).next().unwrap_or_default();
    let mut subtags = tag.split(['-', '_']).peekable();
    let mut out = Vec::new();

    let language = subtags.next()?;
    if !(matches!(language.len(), 2 | 3 | 5..=8) && is_alpha(language)) {
        return None;
    }
    out.push(language.to_ascii_lowercase());

    if let Some(script) = subtags.next_if(|s| s.len() == 4 && is_alpha(s)) {
        out.push(script[..1].to_ascii_uppercase() + &script[1..].to_ascii_lowercase());
    }
    if let Some(region) =
        subtags.next_if(|s| (s.len() == 2 && is_alpha(s)) || (s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit())))
    {
        out.push(region.to_ascii_uppercase());
    }
    while let Some(variant) = subtags.next_if(|s| is_variant(s)) {
        out.push(variant.to_ascii_lowercase());
    }

    // Extensions: a singleton followed by at least one subtag.
    while let Some(singleton) = subtags.next() {
        if singleton.len() != 1 || !is_alnum(singleton) {
            return None;
        }
        let min = if singleton.eq_ignore_ascii_case("x") { 1 } else { 2 };
        let mut any = false;
        while let Some(sub) = subtags.next_if(|s| s.len() >= min && s.len() <= 8 && is_alnum(s)) {
            if !any {
                out.push(singleton.to_ascii_lowercase());
                any = true;
            }
            out.push(sub.to_ascii_lowercase());
        }
        if !any {
            return None;
        }
    }
    Some(out.join("-"))
}

fn is_alpha(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_alnum(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_variant(s: &str) -> bool {
    is_alnum(s) && (matches!(s.len(), 5..=8) || (s.len() == 4 && s.as_bytes()[0].is_ascii_digit()))
}

fn browser_language() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.navigator().language())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the config the host embedded into the document.
///
/// Outside the browser there is no document, so defaults are returned.
pub fn read_embedded() -> AppConfig {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_SCRIPT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) => AppConfig::from_embedded_json(&raw),
            None => AppConfig::default(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        AppConfig::default()
    }
}
