//! Dollar formatting shared by the web UI and the CLI.
//!
//! Output mirrors `en-US` locale conventions: comma thousands separators, a
//! leading `$`, and half-cent ties rounded away from zero.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format `amount` as US dollars with exactly two decimals.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let fixed = format!("{rounded:.2}");
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Format `amount` as whole US dollars, for axis tick labels.
#[must_use]
pub fn format_whole_dollars(amount: f64) -> String {
    let fixed = format!("{:.0}", amount.abs().round());
    let sign = if amount < 0.0 && fixed != "0" { "-" } else { "" };
    format!("{sign}${}", group_thousands(&fixed))
}

/// Insert a comma every three digits from the right of an ASCII digit string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
