//! OTP extraction from free-form SMS text
//!
//! Senders format verification messages in every imaginable way: labeled
//! ("Your code: 4821"), trailing-labeled ("4821 is your code"), spelled
//! out ("Three-Five-Eight-..."), or bare digits. Extraction normalizes
//! the text first, then tries an ordered list of independent matchers so
//! each rule stays individually testable:
//!
//! 1. spelled-out digit words become numerals (whole words only);
//! 2. digit runs separated only by whitespace/hyphens are collapsed;
//! 3. matchers run in priority order: labeled, trailing label, bare.
//!
//! Extraction is pure: same input, same output, no side effects.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::domain::{OTP_MAX_LEN, OTP_MIN_LEN};

// Spelled-out digit words, whole-word matches only
static DIGIT_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(zero|one|two|three|four|five|six|seven|eight|nine)\b").unwrap()
});

// A pair of digits separated only by whitespace and/or hyphens
static DIGIT_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)[\s\-]+(\d)").unwrap());

// Keyword, optional colon/hyphen and whitespace, then the OTP digits
static LABELED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:code|otp|pin|verification)\s*[:\-]?\s*(\d{4,8})\b").unwrap()
});

// OTP digits first, keyword after ("4821 is your code")
static TRAILING_LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{4,8})\b(?:\s+(?:is|as|for)\s+your)?\s+(?:code|otp|pin)\b").unwrap()
});

// Any standalone digit run of plausible OTP length
static BARE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4,8})\b").unwrap());

/// Extract an OTP (4-8 digit run) from a message, or `None` if the text
/// contains nothing that looks like one.
pub fn extract_otp(message: &str) -> Option<String> {
    let normalized = normalize_digit_words(message);
    let collapsed = collapse_digit_runs(&normalized);

    let matchers: [&Regex; 3] = [&LABELED_PATTERN, &TRAILING_LABEL_PATTERN, &BARE_PATTERN];
    for pattern in matchers {
        if let Some(caps) = pattern.captures(&collapsed) {
            let digits = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            // Re-check the length constraint on the capture itself
            if (OTP_MIN_LEN..=OTP_MAX_LEN).contains(&digits.len()) {
                return Some(digits.to_string());
            }
        }
    }

    None
}

/// Replace spelled-out digit words with their numeral equivalents,
/// preserving all surrounding text
fn normalize_digit_words(text: &str) -> String {
    DIGIT_WORDS
        .replace_all(text, |caps: &Captures| -> &'static str {
            match caps[1].to_ascii_lowercase().as_str() {
                "zero" => "0",
                "one" => "1",
                "two" => "2",
                "three" => "3",
                "four" => "4",
                "five" => "5",
                "six" => "6",
                "seven" => "7",
                "eight" => "8",
                "nine" => "9",
                _ => "",
            }
        })
        .into_owned()
}

/// Merge digit runs separated only by whitespace or hyphens into a single
/// contiguous run ("3-5-8 1 1 4" becomes "358114").
///
/// Replacement pairs can overlap across passes, so iterate to a fixed
/// point; each pass at least halves the remaining separators.
fn collapse_digit_runs(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = DIGIT_SEPARATOR.replace_all(&current, "$1$2").into_owned();
        if next == current {
            return next;
        }
        current = next;
    }
}
