//! Number formatting for the results panel and chart axis.
//!
//! Dollar amounts come from `wire::format` so the CLI prints the same text.

pub use wire::format::{format_currency, format_whole_dollars};

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a number the way a browser stringifies it: integral values lose
/// their fractional part, everything else uses the shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}
