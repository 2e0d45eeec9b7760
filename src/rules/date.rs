//! Date rules
//!
//! Dates arrive as `YYYY-MM-DD` strings. Non-strings fail the type check with
//! `INVALID_DATE`. A string that does not name a real calendar day fails
//! whichever rule tried to read it, with that rule's own key.
//!
//! Comparisons against "now" treat the date as midnight UTC and read the
//! clock on every `validate` call.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc, Weekday};
use serde_json::Value;

use super::patterns;
use crate::chain::RuleChain;
use crate::config::Config;
use crate::error::ConfigError;
use crate::message::{Category, MessageKey};
use crate::outcome::{ensure, Violation};

/// Chainable checks for `YYYY-MM-DD` date strings.
///
/// # Example
///
/// ```rust
/// use rulechain::{is_date, MessageKey};
/// use serde_json::json;
///
/// let checkin = is_date()
///     .is_valid_format()
///     .is_valid_date()
///     .is_within_range("2024-01-01", "2024-12-31");
///
/// assert!(checkin.validate(&json!("2024-02-29"), "checkin").is_valid());
/// assert_eq!(
///     checkin.validate(&json!("2024-02-30"), "checkin").message_key(),
///     Some(MessageKey::InvalidDate)
/// );
/// assert_eq!(
///     checkin.validate(&json!("2025-01-01"), "checkin").message_key(),
///     Some(MessageKey::InvalidDateRange)
/// );
/// ```
#[derive(Debug)]
pub struct DateValidator {
    chain: RuleChain,
}

validator_family!(DateValidator);

impl DateValidator {
    pub(crate) fn new(config: &Config) -> Self {
        let mut chain = RuleChain::new(config.translator(Category::Date));
        chain.add_rule(|value: &Value, _: &str| {
            ensure(value.is_string(), MessageKey::InvalidDate)
        });
        Self { chain }
    }

    fn push<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> Result<(), Violation> + Send + Sync + 'static,
    {
        self.chain.add_rule(move |value: &Value, _: &str| match value {
            Value::String(s) => check(s),
            _ => Ok(()),
        });
        self
    }

    /// Parse `s` and require `accept` to hold, failing with `key` otherwise.
    fn push_parsed<F>(self, key: MessageKey, accept: F) -> Self
    where
        F: Fn(NaiveDate) -> bool + Send + Sync + 'static,
    {
        self.push(move |s| ensure(parse_date(s).is_some_and(&accept), key))
    }

    /// Four-digit year, two-digit month and day, separated by dashes.
    ///
    /// Only the shape is checked; `2024-13-45` passes.
    pub fn is_valid_format(self) -> Self {
        self.push(|s| {
            ensure(
                patterns::date_format().is_match(s),
                MessageKey::InvalidDateFormat,
            )
        })
    }

    /// Three numeric components that form a real Gregorian day.
    ///
    /// Month and day ranges are checked, including February 29 on leap
    /// years only. Unpadded components such as `2024-2-9` are accepted.
    pub fn is_valid_date(self) -> Self {
        self.push_parsed(MessageKey::InvalidDate, |_| true)
    }

    /// Strictly before the current instant.
    pub fn is_in_the_past(self) -> Self {
        self.push_parsed(MessageKey::InvalidPastDate, |date| {
            utc_midnight(date).is_some_and(|at| at < Utc::now())
        })
    }

    /// Strictly after the current instant.
    pub fn is_in_the_future(self) -> Self {
        self.push_parsed(MessageKey::InvalidFutureDate, |date| {
            utc_midnight(date).is_some_and(|at| at > Utc::now())
        })
    }

    /// Between `start` and `end`, both inclusive.
    ///
    /// The bounds are parsed here, once, not on every `validate` call.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDateBound`] naming the first bound that is
    /// not a calendar date.
    pub fn try_is_within_range(self, start: &str, end: &str) -> Result<Self, ConfigError> {
        let start_date = parse_date(start).ok_or_else(|| ConfigError::InvalidDateBound(start.to_string()))?;
        let end_date = parse_date(end).ok_or_else(|| ConfigError::InvalidDateBound(end.to_string()))?;

        #[cfg(feature = "tracing")]
        if start_date > end_date {
            tracing::warn!(%start_date, %end_date, "date range is empty, every date will fail");
        }

        Ok(self.push_parsed(MessageKey::InvalidDateRange, move |date| {
            start_date <= date && date <= end_date
        }))
    }

    /// Between `start` and `end`, both inclusive.
    ///
    /// # Panics
    ///
    /// Panics while the validator is being built if either bound is not a
    /// `YYYY-MM-DD` calendar date. This is a programming error, unlike an
    /// input outside the range, which is reported as an invalid
    /// [`Outcome`](crate::Outcome) by `validate`. Use
    /// [`try_is_within_range`](Self::try_is_within_range) to handle bad bounds.
    pub fn is_within_range(self, start: &str, end: &str) -> Self {
        match self.try_is_within_range(start, end) {
            Ok(validator) => validator,
            Err(err) => panic!("{err}"),
        }
    }

    /// The year is a Gregorian leap year.
    pub fn is_leap_year(self) -> Self {
        self.push_parsed(MessageKey::NotALeapYear, |date| {
            patterns::is_leap_year(date.year())
        })
    }

    /// Falls on Saturday or Sunday.
    pub fn is_weekend(self) -> Self {
        self.push_parsed(MessageKey::InvalidNotWeekend, |date| {
            matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
        })
    }
}

/// `YYYY-MM-DD` as exactly three dash-separated runs of ASCII digits.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    if ![year, month, day]
        .iter()
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn utc_midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
}
