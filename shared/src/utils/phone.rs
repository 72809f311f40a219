//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// 7-15 digits after formatting is stripped (international length range)
static PHONE_DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{7,15}$").unwrap());

/// Strip common formatting characters from a phone number.
///
/// Removes whitespace, hyphens and parentheses anywhere in the string and
/// a single leading `+`. The result is what validation operates on.
pub fn normalize_phone_number(phone: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    match cleaned.strip_prefix('+') {
        Some(rest) => rest.to_string(),
        None => cleaned,
    }
}

/// Check if a phone number is valid: 7-15 ASCII digits once formatting
/// characters are stripped.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_DIGITS_REGEX.is_match(&normalize_phone_number(phone))
}

/// Mask a phone number for logging (show only the last 4 digits).
///
/// Masking runs on unvalidated input, so only ASCII digits are kept
/// before slicing; anything else in the string is masked away entirely.
pub fn mask_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() >= 7 {
        format!("***{}", &digits[digits.len() - 4..])
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("555-123-4567"), "5551234567");
        assert_eq!(normalize_phone_number("+1 (555) 123-4567"), "15551234567");
        assert_eq!(normalize_phone_number("  +44 20 7183 8750"), "442071838750");
    }

    #[test]
    fn test_is_valid_phone_accepts_formatted_numbers() {
        assert!(is_valid_phone("5551234"));
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("442071838750"));
        assert!(is_valid_phone("123456789012345")); // 15 digits
    }

    #[test]
    fn test_is_valid_phone_rejects_bad_lengths() {
        assert!(!is_valid_phone("123456")); // 6 digits, too short
        assert!(!is_valid_phone("1234567890123456")); // 16 digits, too long
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_is_valid_phone_rejects_non_digits() {
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("+"));
        assert!(!is_valid_phone("55 512 34+67")); // plus not in leading position
    }

    #[test]
    fn test_is_valid_phone_is_repeatable() {
        let input = "+1 (555) 123-4567";
        assert_eq!(is_valid_phone(input), is_valid_phone(input));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("5551234567"), "***4567");
        assert_eq!(mask_phone_number("+1 (555) 123-4567"), "***4567");
        assert_eq!(mask_phone_number("12345"), "****");
    }

    #[test]
    fn test_mask_phone_number_handles_non_ascii_input() {
        // Masking sees caller input before validation; multi-byte
        // characters must not trip the slice.
        assert_eq!(mask_phone_number("€€€€€€€"), "****");
        assert_eq!(mask_phone_number("☎ 5551234567"), "***4567");
        assert_eq!(mask_phone_number("５５５１２３４５６７"), "****"); // fullwidth digits
    }
}
