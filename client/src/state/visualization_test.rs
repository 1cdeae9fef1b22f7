use super::*;

// =============================================================
// VisualizationState
// =============================================================

#[test]
fn visualization_renders_nothing_before_first_message() {
    let state = VisualizationState::default();
    assert!(!state.is_rendered());
    assert_eq!(state.render_key(), 0);
}

#[test]
fn visualization_shows_exact_payload() {
    let mut state = VisualizationState::default();
    state.receive("<div>Medium latte · oat milk</div>".to_owned());
    assert!(state.is_rendered());
    assert_eq!(state.html(), "<div>Medium latte · oat milk</div>");
}

#[test]
fn identical_payload_still_bumps_render_key() {
    let mut state = VisualizationState::default();
    state.receive("<p>same</p>".to_owned());
    let first = state.render_key();
    state.receive("<p>same</p>".to_owned());
    assert_eq!(state.render_key(), first + 1);
    assert!(state.is_rendered());
}

#[test]
fn rendered_entry_is_keyed_per_message() {
    let mut state = VisualizationState::default();
    assert_eq!(state.rendered_entry(), None);

    state.receive("<p>same</p>".to_owned());
    let first = state.rendered_entry().unwrap();
    state.receive("<p>same</p>".to_owned());
    let second = state.rendered_entry().unwrap();

    assert_eq!(first.1, second.1);
    assert_ne!(first.0, second.0);
}

#[test]
fn empty_payload_has_no_rendered_entry() {
    let mut state = VisualizationState::default();
    state.receive(String::new());
    assert_eq!(state.rendered_entry(), None);
}

#[test]
fn empty_payload_is_not_rendered() {
    let mut state = VisualizationState::default();
    state.receive(String::new());
    assert!(!state.is_rendered());
}

#[test]
fn newer_payload_replaces_older_wholesale() {
    let mut state = VisualizationState::default();
    state.receive("<p>latte</p>".to_owned());
    state.receive("<p>mocha</p>".to_owned());
    assert_eq!(state.html(), "<p>mocha</p>");
}

// =============================================================
// ReceiptState: stacked timers
// =============================================================

#[test]
fn receipt_shows_on_receive() {
    let mut receipt = ReceiptState::default();
    receipt.receive("<div>ORDER CONFIRMED</div>".to_owned());
    assert!(receipt.is_rendered());
    assert_eq!(receipt.html(), "<div>ORDER CONFIRMED</div>");
}

#[test]
fn receipt_timer_hides() {
    let mut receipt = ReceiptState::default();
    let timer = receipt.receive("<div>r</div>".to_owned());
    assert!(receipt.expire(timer));
    assert!(!receipt.is_rendered());
}

#[test]
fn stale_timer_hides_newer_receipt_under_stacked_policy() {
    let mut receipt = ReceiptState::new(ReceiptTimerPolicy::Stacked);
    let first = receipt.receive("<div>one</div>".to_owned());
    let second = receipt.receive("<div>two</div>".to_owned());
    assert!(receipt.is_rendered());

    assert!(receipt.expire(first));
    assert!(!receipt.is_rendered());
    assert!(!receipt.expire(second));
}

#[test]
fn second_receipt_after_auto_hide_shows_again() {
    let mut receipt = ReceiptState::default();
    let first = receipt.receive("<div>one</div>".to_owned());
    receipt.expire(first);
    receipt.receive("<div>two</div>".to_owned());
    assert!(receipt.is_rendered());
    assert_eq!(receipt.html(), "<div>two</div>");
}

// =============================================================
// ReceiptState: reset timers
// =============================================================

#[test]
fn stale_timer_is_ignored_under_reset_policy() {
    let mut receipt = ReceiptState::new(ReceiptTimerPolicy::Reset);
    let first = receipt.receive("<div>one</div>".to_owned());
    let second = receipt.receive("<div>two</div>".to_owned());

    assert!(!receipt.expire(first));
    assert!(receipt.is_rendered());
    assert!(receipt.expire(second));
    assert!(!receipt.is_rendered());
}

// =============================================================
// ReceiptState: dismissal
// =============================================================

#[test]
fn dismiss_hides_regardless_of_pending_timer() {
    let mut receipt = ReceiptState::default();
    let timer = receipt.receive("<div>r</div>".to_owned());
    assert!(receipt.dismiss());
    assert!(!receipt.is_rendered());
    assert!(!receipt.expire(timer));
}

#[test]
fn dismiss_is_idempotent() {
    let mut receipt = ReceiptState::default();
    receipt.receive("<div>r</div>".to_owned());
    assert!(receipt.dismiss());
    let after_first = receipt.clone();
    assert!(!receipt.dismiss());
    assert_eq!(receipt, after_first);
}

#[test]
fn dismiss_before_any_receipt_is_noop() {
    let mut receipt = ReceiptState::default();
    assert!(!receipt.dismiss());
    assert!(!receipt.is_rendered());
}

#[test]
fn auto_hide_delay_is_fifteen_seconds() {
    assert_eq!(RECEIPT_AUTO_HIDE, Duration::from_secs(15));
}
