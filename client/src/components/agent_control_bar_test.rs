#![cfg(not(feature = "hydrate"))]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::config::AppConfig;

fn counting_callback() -> (Callback<()>, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let cb = Callback::new(move |()| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    (cb, count)
}

#[test]
fn disconnect_without_session_is_a_noop() {
    let session = SessionHandle::new();
    let (cb, count) = counting_callback();

    assert!(!disconnect(session, Some(cb)));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn disconnect_ends_session_once_then_notifies() {
    let session = SessionHandle::new();
    assert!(session.start(&AppConfig::default()));
    let (cb, count) = counting_callback();

    assert!(disconnect(session, Some(cb)));
    assert!(!session.state.with_untracked(|s| s.active));
    assert_eq!(count.load(Ordering::SeqCst), 1);

    // Button is disabled now; a stray second invocation changes nothing.
    assert!(!disconnect(session, Some(cb)));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn disconnect_without_callback_still_ends_session() {
    let session = SessionHandle::new();
    assert!(session.start(&AppConfig::default()));
    assert!(disconnect(session, None));
    assert!(!session.state.with_untracked(|s| s.active));
}
