//! Locale-aware time labels for chat entries.
//!
//! In the browser this delegates to `Date.prototype.toLocaleTimeString` with
//! an `Intl` `timeStyle`, so labels match what the platform renders for the
//! user's locale and time zone. Without a browser (SSR, tests) a fixed UTC
//! rendering is produced instead.

#[cfg(test)]
#[path = "time_format_test.rs"]
mod time_format_test;

/// `Intl.DateTimeFormat` `timeStyle` values used by the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeStyle {
    Short,
    Full,
}

impl TimeStyle {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Full => "full",
        }
    }
}

/// Format `timestamp_ms` (Unix epoch milliseconds) for `locale`.
pub fn format_time(locale: &str, timestamp_ms: i64, style: TimeStyle) -> String {
    #[cfg(feature = "hydrate")]
    {
        format_with_intl(locale, timestamp_ms, style)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        format_utc(locale, timestamp_ms, style)
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_precision_loss)]
fn format_with_intl(locale: &str, timestamp_ms: i64, style: TimeStyle) -> String {
    use wasm_bindgen::JsValue;

    let locale = supported_locale(locale);
    let date = js_sys::Date::new(&JsValue::from_f64(timestamp_ms as f64));
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &JsValue::from_str("timeStyle"), &JsValue::from_str(style.as_str()));
    date.to_locale_time_string_with_options(&locale, &options).into()
}

/// `locale` when `Intl` can format it, else the fallback. The Intl bindings
/// throw on malformed tags, so those never reach them.
#[cfg(feature = "hydrate")]
fn supported_locale(locale: &str) -> String {
    use crate::config::{FALLBACK_LOCALE, normalize_locale};

    normalize_locale(locale)
        .filter(|tag| {
            let requested = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(tag));
            js_sys::Intl::DateTimeFormat::supported_locales_of(&requested, &js_sys::Object::new()).length() > 0
        })
        .unwrap_or_else(|| FALLBACK_LOCALE.to_owned())
}

/// Deterministic UTC rendering approximating `Intl` output.
#[cfg(any(test, not(feature = "hydrate")))]
fn format_utc(locale: &str, timestamp_ms: i64, style: TimeStyle) -> String {
    let Some(time) = chrono::DateTime::from_timestamp_millis(timestamp_ms) else {
        return String::new();
    };
    let pattern = match (uses_twelve_hour_clock(locale), style) {
        (true, TimeStyle::Short) => "%-I:%M %p",
        (true, TimeStyle::Full) => "%-I:%M:%S %p Coordinated Universal Time",
        (false, TimeStyle::Short) => "%H:%M",
        (false, TimeStyle::Full) => "%H:%M:%S Coordinated Universal Time",
    };
    time.format(pattern).to_string()
}

/// Whether `locale` conventionally writes times on a 12-hour clock.
#[cfg(any(test, not(feature = "hydrate")))]
fn uses_twelve_hour_clock(locale: &str) -> bool {
    let mut parts = locale.split(['-', '_']);
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let region = parts
        .find(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_ascii_uppercase);

    match language.as_str() {
        "en" => matches!(region.as_deref(), None | Some("US" | "CA" | "AU" | "NZ" | "IN" | "PH")),
        "hi" | "bn" | "ur" | "ko" => true,
        _ => false,
    }
}
