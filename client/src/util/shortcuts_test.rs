use super::*;

#[test]
fn ctrl_or_meta_enter_submits() {
    assert_eq!(match_shortcut("Enter", true, false), Some(Shortcut::Submit));
    assert_eq!(match_shortcut("Enter", false, true), Some(Shortcut::Submit));
}

#[test]
fn ctrl_or_meta_d_toggles_theme() {
    assert_eq!(match_shortcut("d", true, false), Some(Shortcut::ToggleTheme));
    assert_eq!(match_shortcut("D", false, true), Some(Shortcut::ToggleTheme));
}

#[test]
fn unmodified_keys_are_ignored() {
    assert_eq!(match_shortcut("Enter", false, false), None);
    assert_eq!(match_shortcut("d", false, false), None);
}

#[test]
fn other_chords_are_ignored() {
    assert_eq!(match_shortcut("s", true, false), None);
    assert_eq!(match_shortcut("Escape", false, true), None);
}
