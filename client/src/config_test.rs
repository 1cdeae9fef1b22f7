use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_display_strings_match_storefront_branding() {
    let config = AppConfig::default();
    assert_eq!(config.company_name, "AgentX Coffee Shop");
    assert_eq!(config.page_title, "AgentX Coffee Shop - AI Voice Barista");
    assert_eq!(config.page_description, "Order your favorite coffee with our AI voice barista");
    assert_eq!(config.start_button_text, "Start Ordering");
}

#[test]
fn default_feature_flags_are_all_enabled() {
    let config = AppConfig::default();
    assert!(config.supports_chat_input);
    assert!(config.supports_video_input);
    assert!(config.supports_screen_share);
    assert!(config.is_pre_connect_buffer_enabled);
}

#[test]
fn default_theme_and_session_settings() {
    let config = AppConfig::default();
    assert_eq!(config.accent.as_deref(), Some("#7c3aed"));
    assert_eq!(config.accent_dark.as_deref(), Some("#a78bfa"));
    assert!(config.sandbox_id.is_none());
    assert!(config.agent_name.is_none());
    assert!(config.session_url.is_none());
    assert_eq!(config.html_policy, HtmlPolicy::Trusted);
    assert_eq!(config.receipt_timer, ReceiptTimerPolicy::Stacked);
}

// =============================================================
// Policy parsing
// =============================================================

#[test]
fn html_policy_parse_accepts_known_spellings() {
    assert_eq!(HtmlPolicy::parse("trusted"), Some(HtmlPolicy::Trusted));
    assert_eq!(HtmlPolicy::parse(" Sanitized "), Some(HtmlPolicy::Sanitized));
    assert_eq!(HtmlPolicy::parse("sanitize"), Some(HtmlPolicy::Sanitized));
    assert_eq!(HtmlPolicy::parse("escape"), None);
}

#[test]
fn receipt_timer_policy_parse_accepts_known_spellings() {
    assert_eq!(ReceiptTimerPolicy::parse("stacked"), Some(ReceiptTimerPolicy::Stacked));
    assert_eq!(ReceiptTimerPolicy::parse("RESET"), Some(ReceiptTimerPolicy::Reset));
    assert_eq!(ReceiptTimerPolicy::parse("cancel"), None);
}

// =============================================================
// Embedding
// =============================================================

#[test]
fn embedded_json_uses_camel_case_keys() {
    let json = AppConfig::default().to_embedded_json();
    assert!(json.contains("\"supportsChatInput\":true"));
    assert!(json.contains("\"isPreConnectBufferEnabled\":true"));
    assert!(json.contains("\"htmlPolicy\":\"trusted\""));
}

#[test]
fn embedded_json_cannot_close_script_element() {
    let config = AppConfig { company_name: "</script><b>x</b>".to_owned(), ..AppConfig::default() };
    let json = config.to_embedded_json();
    assert!(!json.contains("</"));

    let restored = AppConfig::from_embedded_json(&json);
    assert_eq!(restored.company_name, "</script><b>x</b>");
}

#[test]
fn embedded_json_fills_missing_fields_with_defaults() {
    let restored = AppConfig::from_embedded_json(r#"{"companyName":"Bean There","receiptTimer":"reset"}"#);
    assert_eq!(restored.company_name, "Bean There");
    assert_eq!(restored.receipt_timer, ReceiptTimerPolicy::Reset);
    assert_eq!(restored.start_button_text, "Start Ordering");
}

#[test]
fn malformed_embedded_json_falls_back_to_defaults() {
    assert_eq!(AppConfig::from_embedded_json("{not json"), AppConfig::default());
}

// =============================================================
// Locale
// =============================================================

#[test]
fn resolved_locale_prefers_configured_value() {
    let config = AppConfig { locale: Some("de-DE".to_owned()), ..AppConfig::default() };
    assert_eq!(config.resolved_locale(), "de-DE");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn resolved_locale_falls_back_outside_browser() {
    let blank = AppConfig { locale: Some("  ".to_owned()), ..AppConfig::default() };
    assert_eq!(blank.resolved_locale(), FALLBACK_LOCALE);
    assert_eq!(AppConfig::default().resolved_locale(), FALLBACK_LOCALE);
}

#[test]
fn resolved_locale_normalizes_posix_spelling() {
    let config = AppConfig { locale: Some("en_US".to_owned()), ..AppConfig::default() };
    assert_eq!(config.resolved_locale(), "en-US");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn resolved_locale_skips_malformed_value() {
    let config = AppConfig { locale: Some("not a locale".to_owned()), ..AppConfig::default() };
    assert_eq!(config.resolved_locale(), FALLBACK_LOCALE);
}

#[test]
fn normalize_locale_accepts_bcp47_and_posix_forms() {
    assert_eq!(normalize_locale("en-US").as_deref(), Some("en-US"));
    assert_eq!(normalize_locale("en_US").as_deref(), Some("en-US"));
    assert_eq!(normalize_locale("en_us.UTF-8").as_deref(), Some("en-US"));
    assert_eq!(normalize_locale("de_DE@euro").as_deref(), Some("de-DE"));
    assert_eq!(normalize_locale("zh_hant_tw").as_deref(), Some("zh-Hant-TW"));
    assert_eq!(normalize_locale("es-419").as_deref(), Some("es-419"));
    assert_eq!(normalize_locale("en-US-u-hc-h23").as_deref(), Some("en-US-u-hc-h23"));
    assert_eq!(normalize_locale(" fr ").as_deref(), Some("fr"));
}

#[test]
fn normalize_locale_rejects_malformed_tags() {
    for raw in ["", "C", "e", "en-abc", "en-u-a", "en--US", "en-", "en US", "en-US-u", "1234", "en-toolongsubtag"] {
        assert_eq!(normalize_locale(raw), None, "{raw:?} should be rejected");
    }
}
