//! Email address pattern check

use std::sync::LazyLock;

use regex::Regex;

/// RFC-lite email pattern: printable local part, `@`, dot-separated
/// alphanumeric/hyphen labels.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
        .expect("email pattern is valid")
});

/// Returns `true` if the address matches the accepted pattern.
pub fn is_valid_email(address: &str) -> bool {
    EMAIL.is_match(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.com"));
        assert!(is_valid_email("first-last@host"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("user@example..com"));
    }
}
