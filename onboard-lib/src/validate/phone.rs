//! Masked phone number input normalization

/// Returns only the ASCII digits of the input.
pub fn digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Reformats a raw phone edit into the masked display form `(XXX) XXX-XXXX`.
///
/// `previous` is the field's value before the edit. Formatting punctuation is
/// only inserted while the digit count is increasing; when the user deletes,
/// the raw truncated text is returned unchanged so backspacing does not fight
/// the mask:
///
/// - empty input clears the field,
/// - a non-increasing digit count passes the input through untouched,
/// - otherwise the digits are re-masked: up to 3 digits as-is, 4-6 as
///   `(XXX) XXX`, 7 or more as `(XXX) XXX-XXXX` with digits past the tenth
///   dropped.
pub fn normalize_phone(value: &str, previous: &str) -> String {
    if value.is_empty() {
        return value.to_string();
    }
    if !previous.is_empty() && digits(previous).len() >= digits(value).len() {
        return value.to_string();
    }

    let current = digits(value);
    match current.len() {
        0..=3 => current,
        4..=6 => format!("({}) {}", &current[..3], &current[3..]),
        len => format!(
            "({}) {}-{}",
            &current[..3],
            &current[3..6],
            &current[6..len.min(10)]
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_grouping() {
        assert_eq!(normalize_phone("1", ""), "1");
        assert_eq!(normalize_phone("123", ""), "123");
        assert_eq!(normalize_phone("1234", "123"), "(123) 4");
        assert_eq!(normalize_phone("123456", "(123) 45"), "(123) 456");
        assert_eq!(normalize_phone("1234567", "(123) 456"), "(123) 456-7");
        assert_eq!(normalize_phone("1234567890", ""), "(123) 456-7890");
    }

    #[test]
    fn test_excess_digits_dropped() {
        assert_eq!(normalize_phone("123456789012", ""), "(123) 456-7890");
    }

    #[test]
    fn test_punctuation_stripped_before_masking() {
        assert_eq!(normalize_phone("555-123-4567", ""), "(555) 123-4567");
    }

    #[test]
    fn test_idempotent_at_same_digit_count() {
        let formatted = normalize_phone("1234567890", "");
        assert_eq!(formatted, "(123) 456-7890");
        // Re-running the transform with itself as the previous value leaves
        // it unchanged: the digit count did not increase.
        assert_eq!(normalize_phone(&formatted, &formatted), formatted);
    }

    #[test]
    fn test_deletion_passes_through_unmodified() {
        assert_eq!(
            normalize_phone("(123) 456-789", "(123) 456-7890"),
            "(123) 456-789"
        );
        assert_eq!(normalize_phone("(123) 456-", "(123) 456-7"), "(123) 456-");
    }

    #[test]
    fn test_empty_input_clears_field() {
        assert_eq!(normalize_phone("", "(123) 456-7890"), "");
    }
}
