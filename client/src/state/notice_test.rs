use super::*;

#[test]
fn slot_starts_empty() {
    assert!(NoticeSlot::default().current().is_none());
}

#[test]
fn show_replaces_previous_notice() {
    let mut slot = NoticeSlot::default();
    let first = slot.show("first", Severity::Error);
    let second = slot.show("second", Severity::Success);
    assert_ne!(first, second);
    let current = slot.current().unwrap();
    assert_eq!(current.id, second);
    assert_eq!(current.message, "second");
    assert_eq!(current.severity, Severity::Success);
}

#[test]
fn stale_timer_does_not_dismiss_newer_notice() {
    let mut slot = NoticeSlot::default();
    let first = slot.show("first", Severity::Error);
    let second = slot.show("second", Severity::Error);
    assert!(!slot.expire(first));
    assert_eq!(slot.current().map(|n| n.id), Some(second));
    assert!(slot.expire(second));
    assert!(slot.current().is_none());
}

#[test]
fn expire_after_manual_clear_is_noop() {
    let mut slot = NoticeSlot::default();
    let id = slot.show("gone", Severity::Success);
    slot.clear();
    assert!(!slot.expire(id));
}

#[test]
fn severity_styles() {
    assert_eq!(Severity::Error.css_class(), "alert-danger");
    assert_eq!(Severity::Success.css_class(), "alert-success");
    assert_eq!(Severity::Error.icon_class(), "bi-exclamation-triangle-fill");
    assert_eq!(Severity::Success.icon_class(), "bi-check-circle-fill");
}

#[test]
fn auto_dismiss_is_five_seconds() {
    assert_eq!(AUTO_DISMISS, Duration::from_secs(5));
}
