//! Decoding of agent-pushed HTML fragments.
//!
//! Data-channel payloads are raw bytes. They are decoded as UTF-8 without
//! ever failing (invalid sequences become U+FFFD) and then passed through the
//! configured [`HtmlPolicy`] before the overlays inject them as live markup.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use crate::config::HtmlPolicy;

/// Decode `bytes` as UTF-8, replacing invalid sequences.
#[must_use]
pub fn decode_payload(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Apply `policy` to a decoded fragment.
///
/// `Trusted` returns the fragment verbatim. `Sanitized` strips scripts,
/// event handlers and unknown tags but keeps inline `style` and `class`,
/// which agent-drawn visualizations rely on.
#[must_use]
pub fn apply_policy(html: String, policy: HtmlPolicy) -> String {
    match policy {
        HtmlPolicy::Trusted => html,
        HtmlPolicy::Sanitized => ammonia::Builder::default()
            .add_generic_attributes(["style", "class"])
            .clean(&html)
            .to_string(),
    }
}

/// Decode and apply `policy` in one step.
#[must_use]
pub fn render_payload(bytes: &[u8], policy: HtmlPolicy) -> String {
    apply_policy(decode_payload(bytes), policy)
}
