use super::*;

// 2023-11-14T22:13:20Z
const TS: i64 = 1_700_000_000_000;

#[test]
fn local_entries_are_labeled_you_and_reversed() {
    let entry = ChatEntryView::new("en-US", TS, "One latte please", MessageOrigin::Local, None, false);
    assert_eq!(entry.sender_label, "You");
    assert!(entry.reversed);
    assert_eq!(entry.origin.as_str(), "local");
}

#[test]
fn remote_entries_are_labeled_barista_and_not_reversed() {
    let entry = ChatEntryView::new("en-US", TS, "Coming right up", MessageOrigin::Remote, Some("agent-7"), false);
    assert_eq!(entry.sender_label, "AgentX Barista");
    assert!(!entry.reversed);
    assert_eq!(entry.origin.as_str(), "remote");
}

#[test]
fn sender_label_ignores_reported_name() {
    let entry = ChatEntryView::new("en-US", TS, "hi", MessageOrigin::Remote, Some("Someone Else"), false);
    assert_eq!(entry.sender_label, REMOTE_SENDER_LABEL);
    assert_eq!(entry.name.as_deref(), Some("Someone Else"));
}

#[test]
fn edited_marker_only_when_edited() {
    let plain = ChatEntryView::new("en-US", TS, "hi", MessageOrigin::Remote, None, false);
    let edited = ChatEntryView::new("en-US", TS, "hi", MessageOrigin::Remote, None, true);
    assert_eq!(plain.edited_marker, "");
    assert_eq!(edited.edited_marker, "*");
}

#[test]
fn message_text_is_kept_verbatim() {
    let text = "  two shots\nno foam <b>please</b> ";
    let entry = ChatEntryView::new("en-US", TS, text, MessageOrigin::Local, None, false);
    assert_eq!(entry.message, text);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn labels_use_short_and_full_time_styles() {
    let entry = ChatEntryView::new("en-US", TS, "hi", MessageOrigin::Local, None, false);
    assert_eq!(entry.time_label, "10:13 PM");
    assert_eq!(entry.title, "10:13:20 PM Coordinated Universal Time");

    let entry = ChatEntryView::new("de-DE", TS, "hi", MessageOrigin::Local, None, false);
    assert_eq!(entry.time_label, "22:13");
}
