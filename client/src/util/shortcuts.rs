//! Global keyboard shortcuts for the prediction page.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

/// Action bound to a key chord.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd + Enter.
    Submit,
    /// Ctrl/Cmd + D.
    ToggleTheme,
}

/// Map a keydown to a shortcut. Both chords require Ctrl or Cmd (meta).
pub fn match_shortcut(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
    if !(ctrl || meta) {
        return None;
    }
    if key == "Enter" {
        Some(Shortcut::Submit)
    } else if key.eq_ignore_ascii_case("d") {
        Some(Shortcut::ToggleTheme)
    } else {
        None
    }
}
