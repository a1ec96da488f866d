//! Keystroke filters and display formatters for form fields.
//!
//! These are pure functions: the screen states call them on every edit and
//! store only what they return.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{ACCOUNT_NUMBER_LENGTH, PHONE_MAX_DIGITS};

/// Unsigned decimal: digits with at most one decimal point.
static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("amount pattern is valid"));

/// Loose `local@domain.tld` shape.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Separator placed between phone digit groups.
pub const PHONE_SEPARATOR: &str = " - ";

/// Returns `true` when `value` may be stored in an amount field.
#[must_use]
pub fn is_valid_amount(value: &str) -> bool {
    value.is_empty() || AMOUNT_PATTERN.is_match(value)
}

/// Applies an edit to an amount field.
///
/// Returns the candidate when it is a valid amount, otherwise `None` and the
/// caller keeps its previous value.
#[must_use]
pub fn filter_amount(candidate: &str) -> Option<String> {
    is_valid_amount(candidate).then(|| candidate.to_string())
}

/// Drops every character that is not an ASCII digit.
#[must_use]
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalizes account number input: digits only, at most ten of them.
#[must_use]
pub fn sanitize_account_number(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(ACCOUNT_NUMBER_LENGTH)
        .collect()
}

/// Re-derives the phone display string from raw input.
///
/// Digits are grouped 3-3-5 and anything past the eleventh digit is dropped.
#[must_use]
pub fn format_phone_number(raw: &str) -> String {
    let digits = strip_non_digits(raw);
    let len = digits.len();

    if len <= 3 {
        digits
    } else if len <= 6 {
        format!("{}{PHONE_SEPARATOR}{}", &digits[..3], &digits[3..])
    } else {
        let end = len.min(PHONE_MAX_DIGITS);
        format!(
            "{}{PHONE_SEPARATOR}{}{PHONE_SEPARATOR}{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..end]
        )
    }
}

/// Returns `true` when `email` has a plausible `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("0", true)]
    #[case("1.00", true)]
    #[case(".5", true)]
    #[case("12.", true)]
    #[case(".", true)]
    #[case("1.2.3", false)]
    #[case("-1", false)]
    #[case("1e5", false)]
    #[case("1,000", false)]
    #[case(" 1", false)]
    #[case("١٢", false)]
    fn test_amount_acceptance(#[case] value: &str, #[case] accepted: bool) {
        assert_eq!(is_valid_amount(value), accepted, "{value:?}");
        assert_eq!(filter_amount(value).is_some(), accepted, "{value:?}");
    }

    #[rstest]
    #[case("", "")]
    #[case("8", "8")]
    #[case("803", "803")]
    #[case("8031", "803 - 1")]
    #[case("803123", "803 - 123")]
    #[case("8031234", "803 - 123 - 4")]
    #[case("80312345678", "803 - 123 - 45678")]
    #[case("803123456789", "803 - 123 - 45678")]
    #[case("(803) 123-4567", "803 - 123 - 4567")]
    #[case("803 - 123 - 4", "803 - 123 - 4")]
    #[case("abc", "")]
    fn test_format_phone_number(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_phone_number(raw), expected);
    }

    #[test]
    fn test_format_phone_number_is_idempotent() {
        let once = format_phone_number("0803-555-12345");
        assert_eq!(format_phone_number(&once), once);
    }

    #[test]
    fn test_backspacing_over_separator_collapses_group() {
        // Deleting the trailing digit of "803 - 1" leaves "803 - ".
        assert_eq!(format_phone_number("803 - "), "803");
    }

    #[rstest]
    #[case("0123456789", "0123456789")]
    #[case("01234567890123", "0123456789")]
    #[case("01-23 45x678", "012345678")]
    #[case("abc", "")]
    fn test_sanitize_account_number(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(sanitize_account_number(raw), expected);
    }

    #[rstest]
    #[case("ada@example.com", true)]
    #[case("a.b+c@mail.co.uk", true)]
    #[case("", false)]
    #[case("ada@example", false)]
    #[case("ada example@x.com", false)]
    #[case("@example.com", false)]
    #[case("ada@@example.com", false)]
    fn test_email_shape(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(email), valid, "{email:?}");
    }
}
