//! Pattern bodies shared by the rule families
//!
//! Regular expressions are compiled once on first use and cached.

use std::sync::OnceLock;

use regex::Regex;

macro_rules! cached_regex {
    ($(#[$doc:meta])* $name:ident => $pattern:literal) => {
        $(#[$doc])*
        pub(crate) fn $name() -> &'static Regex {
            static CELL: OnceLock<Regex> = OnceLock::new();
            CELL.get_or_init(|| {
                Regex::new($pattern).expect(concat!("`", stringify!($name), "` pattern is valid"))
            })
        }
    };
}

cached_regex! {
    /// Local part, `@`, dotted domain, alphabetic TLD of two or more letters.
    email => r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"
}

cached_regex! {
    /// E.164: optional `+`, no leading zero, at most 15 digits.
    phone_number => r"^\+?[1-9][0-9]{1,14}$"
}

cached_regex! {
    url => r"^(?:https?://)?[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)+(?:/[A-Za-z0-9_-]*)*/?$"
}

cached_regex! {
    uuid => r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
}

cached_regex! {
    /// Optional root (`/`, `~/`, `./`, `../`, `C:\`), then non-empty segments.
    file_path => r"^(?:[A-Za-z]:[\\/]|~?/|\.{1,2}/)?(?:[\w .-]+[\\/])*[\w .-]+$"
}

cached_regex! {
    alphanumeric => r"^[a-zA-Z0-9]+$"
}

cached_regex! {
    /// Three base64url segments separated by dots (JWT compact form).
    token => r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$"
}

cached_regex! {
    hexadecimal => r"^(?:0[xX])?[0-9a-fA-F]+$"
}

cached_regex! {
    /// Visa, Mastercard, American Express, Discover, Diners Club, JCB.
    card_issuer => r"^(?:4[0-9]{12}(?:[0-9]{3}){0,2}|(?:5[1-5][0-9]{2}|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}|3[47][0-9]{13}|6(?:011|5[0-9]{2})[0-9]{12}|3(?:0[0-5]|[68][0-9])[0-9]{11}|(?:2131|1800|35[0-9]{3})[0-9]{11})$"
}

cached_regex! {
    date_format => r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$"
}

pub(crate) const DAYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

pub(crate) const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

pub(crate) const PROGRAMMING_LANGUAGES: &[&str] = &[
    "ada", "assembly", "bash", "c", "c#", "c++", "clojure", "cobol", "crystal", "dart", "elixir",
    "elm", "erlang", "f#", "fortran", "go", "groovy", "haskell", "java", "javascript", "julia",
    "kotlin", "lisp", "lua", "matlab", "nim", "objective-c", "ocaml", "pascal", "perl", "php",
    "powershell", "prolog", "python", "r", "ruby", "rust", "scala", "scheme", "shell", "sql",
    "swift", "typescript", "v", "zig",
];

/// Case-insensitive membership in a lowercase name list.
pub(crate) fn contains_ignore_case(names: &[&str], value: &str) -> bool {
    let value = value.to_lowercase();
    names.iter().any(|name| *name == value)
}

/// Luhn checksum over a string of ASCII digits.
///
/// Walks right to left, doubles every second digit (subtracting 9 when the
/// product exceeds 9) and accepts when the sum is divisible by 10. Empty input
/// and non-digits are rejected.
pub(crate) fn luhn(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }
    let mut sum = 0;
    for (i, c) in digits.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

/// Card number with spaces and dashes removed; `None` if anything else but digits remains.
pub(crate) fn card_digits(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(|c| *c != ' ' && *c != '-').collect();
    digits
        .chars()
        .all(|c| c.is_ascii_digit())
        .then_some(digits)
}

/// Gregorian leap year.
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
