use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn default_accents_render_root_rule() {
    assert_eq!(
        accent_css(&AppConfig::default()),
        ":root { --accent: #7c3aed;--accent-dark: #a78bfa; }"
    );
}

#[test]
fn missing_accents_render_nothing() {
    let config = AppConfig { accent: None, accent_dark: None, ..AppConfig::default() };
    assert_eq!(accent_css(&config), "");
}

#[test]
fn unsafe_accent_is_skipped() {
    let config = AppConfig {
        accent: Some("red;}</style><script>".into()),
        accent_dark: Some("rgb(10, 20, 30)".into()),
        ..AppConfig::default()
    };
    assert_eq!(accent_css(&config), ":root { --accent-dark: rgb(10, 20, 30); }");
}

#[test]
fn dark_logo_falls_back_to_light_logo() {
    let config = AppConfig { logo: "/logo.svg".into(), logo_dark: Some(String::new()), ..AppConfig::default() };
    assert_eq!(logo_for(&config, true), "/logo.svg");

    let config = AppConfig { logo_dark: Some("/logo-dark.svg".into()), ..config };
    assert_eq!(logo_for(&config, true), "/logo-dark.svg");
    assert_eq!(logo_for(&config, false), "/logo.svg");
}
