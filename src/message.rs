//! Message keys and categories
//!
//! Every failure a rule can report is identified by a [`MessageKey`]. Keys are
//! stable, locale-independent identifiers; the rendered text comes from the
//! [`Catalog`](crate::Catalog) for the validator's language.
//!
//! Keys are partitioned by [`Category`], which also selects the catalog table
//! a [`Translator`](crate::Translator) reads from.
//!
//! # Example
//!
//! ```rust
//! use rulechain::{Category, MessageKey};
//!
//! assert_eq!(MessageKey::InvalidEmail.as_str(), "INVALID_EMAIL");
//! assert_eq!(MessageKey::InvalidEmail.category(), Category::String);
//! assert_eq!("INVALID_EMAIL".parse::<MessageKey>(), Ok(MessageKey::InvalidEmail));
//! ```

use std::fmt;
use std::str::FromStr;

/// The value category a validator family checks.
///
/// Categories partition both the validator families and the message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// String values
    String,
    /// Numeric values
    Number,
    /// Boolean values
    Boolean,
    /// `YYYY-MM-DD` date strings
    Date,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Category; 4] = [
        Category::String,
        Category::Number,
        Category::Boolean,
        Category::Date,
    ];

    /// Lowercase name used as the catalog table key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::String => "string",
            Category::Number => "number",
            Category::Boolean => "boolean",
            Category::Date => "date",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// A name that matched no [`Category`] or [`MessageKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName(pub String);

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown name `{}`", self.0)
    }
}

impl std::error::Error for UnknownName {}

macro_rules! message_keys {
    ($(
        $(#[$doc:meta])*
        $variant:ident => $name:literal, $category:ident;
    )*) => {
        /// Stable identifier for a specific failure condition.
        ///
        /// The set is closed: every rule in this crate reports one of these
        /// keys, and each key belongs to exactly one [`Category`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageKey {
            $(
                $(#[$doc])*
                $variant,
            )*
        }

        impl MessageKey {
            /// Every key, grouped by category.
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant),*];

            /// The SCREAMING_SNAKE identifier used in catalogs and outcomes.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $name,)*
                }
            }

            /// The category whose catalog table holds this key.
            pub const fn category(self) -> Category {
                match self {
                    $(MessageKey::$variant => Category::$category,)*
                }
            }
        }
    };
}

message_keys! {
    /// Value is not a string
    InvalidString => "INVALID_STRING", String;
    /// Not an email address
    InvalidEmail => "INVALID_EMAIL", String;
    /// Not an E.164 phone number
    InvalidPhoneNumber => "INVALID_PHONE_NUMBER", String;
    /// Not a URL
    InvalidUrl => "INVALID_URL", String;
    /// Shorter than `min` or longer than `max`
    InvalidValueLength => "INVALID_VALUE_LENGTH", String;
    /// Does not parse as JSON
    InvalidJson => "INVALID_JSON", String;
    /// Not a UUID
    InvalidUuid => "INVALID_UUID", String;
    /// Not a file path
    InvalidFilePath => "INVALID_FILE_PATH", String;
    /// Not a known programming language
    InvalidProgrammingLanguage => "INVALID_PROGRAMMING_LANGUAGE", String;
    /// Not a day name
    InvalidDay => "INVALID_DAY", String;
    /// Not a month name
    InvalidMonth => "INVALID_MONTH", String;
    /// Not a credit card number
    InvalidCreditCard => "INVALID_CREDIT_CARD", String;
    /// Contains characters other than letters and digits
    InvalidAlphanum => "INVALID_ALPHANUM", String;
    /// Not a token
    InvalidToken => "INVALID_TOKEN", String;
    /// Not a hexadecimal value
    InvalidHexadecimal => "INVALID_HEXADECIMAL", String;
    /// Not an IP address of the requested version
    InvalidIpAddress => "INVALID_IP_ADDRESS", String;
    /// CIDR suffix required but missing
    InvalidIpCidrRequired => "INVALID_IP_CIDR_REQUIRED", String;
    /// CIDR suffix present but forbidden
    InvalidIpCidrForbidden => "INVALID_IP_CIDR_FORBIDDEN", String;

    /// Value is not a number
    InvalidNumber => "INVALID_NUMBER", Number;
    /// Number is below zero
    InvalidPositive => "INVALID_POSITIVE", Number;
    /// Number is above zero
    InvalidNegative => "INVALID_NEGATIVE", Number;
    /// Number is not zero
    InvalidZero => "INVALID_ZERO", Number;
    /// Number is not odd
    InvalidOddNumber => "INVALID_ODD_NUMBER", Number;
    /// Number is not even
    InvalidEvenNumber => "INVALID_EVEN_NUMBER", Number;
    /// Number is not less than the bound
    InvalidLess => "INVALID_LESS", Number;
    /// Number is not greater than the bound
    InvalidGreater => "INVALID_GREATER", Number;
    /// Number does not equal the expected value
    InvalidEqual => "INVALID_EQUAL", Number;
    /// Number is not a multiple of the divisor
    InvalidMultiple => "INVALID_MULTIPLE", Number;
    /// Number has a fractional part
    NotAnInteger => "NOT_AN_INTEGER", Number;

    /// Value is not a boolean
    InvalidBoolean => "INVALID_BOOLEAN", Boolean;
    /// Boolean is not `true`
    NotTrue => "NOT_TRUE", Boolean;
    /// Boolean is not `false`
    NotFalse => "NOT_FALSE", Boolean;
    /// Boolean differs from the expected value
    DoesNotEqual => "DOES_NOT_EQUAL", Boolean;

    /// Not a calendar date (or not a string at all)
    InvalidDate => "INVALID_DATE", Date;
    /// Not shaped `YYYY-MM-DD`
    InvalidDateFormat => "INVALID_DATE_FORMAT", Date;
    /// Date is not before now
    InvalidPastDate => "INVALID_PAST_DATE", Date;
    /// Date is not after now
    InvalidFutureDate => "INVALID_FUTURE_DATE", Date;
    /// Date falls outside the range
    InvalidDateRange => "INVALID_DATE_RANGE", Date;
    /// Date is not a Saturday or Sunday
    InvalidNotWeekend => "INVALID_NOT_WEEKEND", Date;
    /// Year is not a leap year
    NotALeapYear => "NOT_A_LEAP_YEAR", Date;
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MessageKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MessageKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_names_are_unique() {
        let names: HashSet<_> = MessageKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), MessageKey::ALL.len());
    }

    #[test]
    fn test_key_round_trips_through_name() {
        for key in MessageKey::ALL {
            assert_eq!(key.as_str().parse::<MessageKey>(), Ok(*key));
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = "INVALID_CURRENCY".parse::<MessageKey>().unwrap_err();
        assert_eq!(err.to_string(), "unknown name `INVALID_CURRENCY`");
    }

    #[test]
    fn test_key_categories() {
        assert_eq!(MessageKey::InvalidIpCidrRequired.category(), Category::String);
        assert_eq!(MessageKey::NotAnInteger.category(), Category::Number);
        assert_eq!(MessageKey::DoesNotEqual.category(), Category::Boolean);
        assert_eq!(MessageKey::NotALeapYear.category(), Category::Date);
    }

    #[test]
    fn test_category_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert!("time".parse::<Category>().is_err());
        assert_eq!(Category::Boolean.to_string(), "boolean");
    }
}
