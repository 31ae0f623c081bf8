//! Single-slot notification banner state.
//!
//! DESIGN
//! ======
//! Every notice gets a fresh id. Auto-dismiss timers carry the id they were
//! started for and only clear the slot if it still holds that notice, so a
//! replacement survives its predecessor's timer.

use std::time::Duration;

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Delay before a notice dismisses itself.
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Notice styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

impl Severity {
    /// Alert modifier class.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Error => "alert-danger",
            Self::Success => "alert-success",
        }
    }

    /// Bootstrap icon class shown before the message.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Error => "bi-exclamation-triangle-fill",
            Self::Success => "bi-check-circle-fill",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Holds at most one notice.
#[derive(Clone, Debug, Default)]
pub struct NoticeSlot {
    current: Option<Notice>,
    last_id: u64,
}

impl NoticeSlot {
    /// Replace whatever is showing with a new notice and return its id.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.last_id += 1;
        self.current = Some(Notice { id: self.last_id, message: message.into(), severity });
        self.last_id
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Timer callback: dismiss only if notice `id` is still the one showing.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
