//! Number rules
//!
//! Any JSON number is accepted by the type check. Integers (anything that fits
//! `i64` or `u64`) are checked with exact integer arithmetic; other numbers are
//! compared as `f64`.

use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::chain::RuleChain;
use crate::config::Config;
use crate::error::ConfigError;
use crate::message::{Category, MessageKey};
use crate::outcome::{ensure, Violation};

/// Largest magnitude for which an `f64` still converts to `i128` without saturating.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// A JSON number with integers kept exact.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Num {
    Int(i128),
    Float(f64),
}

impl Num {
    fn from_json(number: &Number) -> Option<Self> {
        if let Some(i) = number.as_i64() {
            Some(Num::Int(i.into()))
        } else if let Some(u) = number.as_u64() {
            Some(Num::Int(u.into()))
        } else {
            number.as_f64().map(Num::Float)
        }
    }

    /// Order against an `f64` operand; `None` only for NaN.
    fn cmp_f64(self, other: f64) -> Option<Ordering> {
        match self {
            Num::Float(f) => f.partial_cmp(&other),
            Num::Int(i) => cmp_int(i, other),
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Num::Int(i) => i == 0,
            Num::Float(f) => f == 0.0,
        }
    }

    fn is_integer(self) -> bool {
        match self {
            Num::Int(_) => true,
            Num::Float(f) => f.fract() == 0.0,
        }
    }

    fn is_multiple_of(self, divisor: f64) -> bool {
        match (self, whole(divisor)) {
            (Num::Int(i), Some(d)) => i % d == 0,
            (Num::Int(i), None) => (i as f64) % divisor == 0.0,
            (Num::Float(f), _) => f % divisor == 0.0,
        }
    }
}

/// `f` as an `i128` if it is a whole number in range.
fn whole(f: f64) -> Option<i128> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < I128_LIMIT).then_some(f as i128)
}

fn cmp_int(i: i128, other: f64) -> Option<Ordering> {
    if other.is_nan() {
        return None;
    }
    let floor = other.floor();
    if floor >= I128_LIMIT {
        return Some(Ordering::Less);
    }
    if floor < -I128_LIMIT {
        return Some(Ordering::Greater);
    }
    match i.cmp(&(floor as i128)) {
        // i == floor(other) but other has a fractional part above it
        Ordering::Equal if other.fract() != 0.0 => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

/// Chainable checks for numeric values.
///
/// # Example
///
/// ```rust
/// use rulechain::{is_number, MessageKey};
/// use serde_json::json;
///
/// let quantity = is_number().is_integer().is_greater_than(0).is_multiple_of(6);
///
/// assert!(quantity.validate(&json!(12), "quantity").is_valid());
/// assert_eq!(
///     quantity.validate(&json!(8), "quantity").message_key(),
///     Some(MessageKey::InvalidMultiple)
/// );
/// ```
#[derive(Debug)]
pub struct NumberValidator {
    chain: RuleChain,
}

validator_family!(NumberValidator);

impl NumberValidator {
    pub(crate) fn new(config: &Config) -> Self {
        let mut chain = RuleChain::new(config.translator(Category::Number));
        chain.add_rule(|value: &Value, _: &str| {
            ensure(value.is_number(), MessageKey::InvalidNumber)
        });
        Self { chain }
    }

    fn push<F>(mut self, check: F) -> Self
    where
        F: Fn(Num) -> Result<(), Violation> + Send + Sync + 'static,
    {
        self.chain.add_rule(move |value: &Value, _: &str| {
            match value {
                Value::Number(number) => Num::from_json(number).map_or(Ok(()), &check),
                _ => Ok(()),
            }
        });
        self
    }

    fn push_cmp(self, bound: f64, accept: fn(Ordering) -> bool, key: MessageKey) -> Self {
        self.push(move |n| ensure(n.cmp_f64(bound).is_some_and(accept), key))
    }

    /// Zero or greater.
    pub fn is_positive(self) -> Self {
        self.push_cmp(0.0, Ordering::is_ge, MessageKey::InvalidPositive)
    }

    /// Zero or less.
    pub fn is_negative(self) -> Self {
        self.push_cmp(0.0, Ordering::is_le, MessageKey::InvalidNegative)
    }

    /// Exactly zero.
    pub fn is_zero(self) -> Self {
        self.push(|n| ensure(n.is_zero(), MessageKey::InvalidZero))
    }

    /// Non-zero remainder when divided by two. Fractions such as `2.5` count as odd.
    pub fn is_odd(self) -> Self {
        self.push(|n| ensure(!n.is_multiple_of(2.0), MessageKey::InvalidOddNumber))
    }

    /// Zero remainder when divided by two.
    pub fn is_even(self) -> Self {
        self.push(|n| ensure(n.is_multiple_of(2.0), MessageKey::InvalidEvenNumber))
    }

    /// No fractional part. `3.0` written as a float still counts.
    pub fn is_integer(self) -> Self {
        self.push(|n| ensure(n.is_integer(), MessageKey::NotAnInteger))
    }

    /// Strictly less than `bound`.
    pub fn is_less_than(self, bound: impl Into<f64>) -> Self {
        self.push_cmp(bound.into(), Ordering::is_lt, MessageKey::InvalidLess)
    }

    /// Strictly greater than `bound`.
    pub fn is_greater_than(self, bound: impl Into<f64>) -> Self {
        self.push_cmp(bound.into(), Ordering::is_gt, MessageKey::InvalidGreater)
    }

    /// Equal to `expected`.
    pub fn is_equal_to(self, expected: impl Into<f64>) -> Self {
        self.push_cmp(expected.into(), Ordering::is_eq, MessageKey::InvalidEqual)
    }

    /// Divisible by `divisor` with no remainder.
    ///
    /// The divisor is exposed to the message as `{divisor}`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDivisor`] if `divisor` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rulechain::{is_number, ConfigError};
    /// use serde_json::json;
    ///
    /// let thirds = is_number().try_is_multiple_of(3).unwrap();
    /// assert!(thirds.validate(&json!(9), "n").is_valid());
    ///
    /// assert_eq!(
    ///     is_number().try_is_multiple_of(0).unwrap_err(),
    ///     ConfigError::ZeroDivisor
    /// );
    /// ```
    pub fn try_is_multiple_of(self, divisor: impl Into<f64>) -> Result<Self, ConfigError> {
        let divisor = divisor.into();
        if divisor == 0.0 {
            return Err(ConfigError::ZeroDivisor);
        }
        Ok(self.push(move |n| {
            if n.is_multiple_of(divisor) {
                Ok(())
            } else {
                Err(Violation::new(MessageKey::InvalidMultiple).with_attribute("divisor", divisor))
            }
        }))
    }

    /// Divisible by `divisor` with no remainder.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero. Use [`try_is_multiple_of`](Self::try_is_multiple_of)
    /// to handle that case.
    pub fn is_multiple_of(self, divisor: impl Into<f64>) -> Self {
        match self.try_is_multiple_of(divisor) {
            Ok(validator) => validator,
            Err(err) => panic!("{err}"),
        }
    }
}
