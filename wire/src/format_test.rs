use super::*;

#[test]
fn format_currency_groups_thousands_and_keeps_two_decimals() {
    assert_eq!(format_currency(75_000.5), "$75,000.50");
    assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
    assert_eq!(format_currency(999.0), "$999.00");
    assert_eq!(format_currency(0.0), "$0.00");
}

#[test]
fn format_currency_rounds_into_next_thousand() {
    assert_eq!(format_currency(999.999), "$1,000.00");
}

#[test]
fn format_currency_rounds_half_cents_up() {
    assert_eq!(format_currency(75_000.125), "$75,000.13");
    assert_eq!(format_currency(0.5), "$0.50");
    assert_eq!(format_currency(-2.125), "-$2.13");
}

#[test]
fn format_currency_negative_amounts_carry_sign() {
    assert_eq!(format_currency(-1500.25), "-$1,500.25");
    assert_eq!(format_currency(-0.001), "$0.00");
}

#[test]
fn format_whole_dollars_drops_cents() {
    assert_eq!(format_whole_dollars(80_000.0), "$80,000");
    assert_eq!(format_whole_dollars(0.0), "$0");
    assert_eq!(format_whole_dollars(1_000_000.0), "$1,000,000");
    assert_eq!(format_whole_dollars(2.5), "$3");
}

#[test]
fn group_thousands_handles_short_inputs() {
    assert_eq!(group_thousands("7"), "7");
    assert_eq!(group_thousands("123"), "123");
    assert_eq!(group_thousands("1234"), "1,234");
    assert_eq!(group_thousands("123456"), "123,456");
}
