//! Testing utilities and helpers for rulechain
//!
//! Assertion macros for [`Outcome`](crate::Outcome) values and, with the
//! `proptest` feature, an `Arbitrary` implementation for generating them.
//!
//! # Examples
//!
//! ```rust
//! use rulechain::{assert_invalid, assert_valid, is_string, MessageKey};
//! use serde_json::json;
//!
//! let name = is_string().min(2);
//! assert_valid!(name.validate(&json!("Ada"), "name"));
//! assert_invalid!(name.validate(&json!("A"), "name"));
//! assert_invalid!(name.validate(&json!(7), "name"), MessageKey::InvalidString);
//! ```

/// Assert that an outcome is valid.
///
/// This macro will panic with the rendered message if the outcome is
/// `Invalid`.
///
/// # Example
///
/// ```rust
/// use rulechain::{assert_valid, Outcome};
///
/// assert_valid!(Outcome::Valid);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Valid => {}
            $crate::Outcome::Invalid(invalid) => {
                panic!(
                    "Expected Valid, got Invalid({}): {}",
                    invalid.message_key, invalid.message
                );
            }
        }
    };
}

/// Assert that an outcome is invalid, optionally with a specific key.
///
/// # Example
///
/// ```rust
/// use rulechain::{assert_invalid, MessageKey, Outcome};
///
/// let outcome = Outcome::invalid(MessageKey::InvalidEmail, "bad email");
/// assert_invalid!(outcome.clone());
/// assert_invalid!(outcome, MessageKey::InvalidEmail);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Invalid(_) => {}
            $crate::Outcome::Valid => {
                panic!("Expected Invalid, got Valid");
            }
        }
    };
    ($outcome:expr, $key:expr) => {
        match $outcome {
            $crate::Outcome::Invalid(invalid) => {
                assert_eq!(
                    invalid.message_key, $key,
                    "unexpected message key (message: {})",
                    invalid.message
                );
            }
            $crate::Outcome::Valid => {
                panic!("Expected Invalid with key {}, got Valid", $key);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::MessageKey {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(crate::MessageKey::ALL).boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Outcome {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(crate::Outcome::Valid),
            (any::<crate::MessageKey>(), ".*")
                .prop_map(|(key, message)| crate::Outcome::invalid(key, message)),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{MessageKey, Outcome};

    #[test]
    fn assert_valid_macro() {
        assert_valid!(Outcome::Valid);
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(Outcome::invalid(MessageKey::InvalidDay, "no"));
    }

    #[test]
    fn assert_invalid_with_key_macro() {
        assert_invalid!(
            Outcome::invalid(MessageKey::InvalidDay, "no"),
            MessageKey::InvalidDay
        );
    }

    #[test]
    #[should_panic(expected = "Expected Valid, got Invalid(INVALID_DAY): no")]
    fn assert_valid_panics_on_invalid() {
        assert_valid!(Outcome::invalid(MessageKey::InvalidDay, "no"));
    }

    #[test]
    #[should_panic(expected = "Expected Invalid, got Valid")]
    fn assert_invalid_panics_on_valid() {
        assert_invalid!(Outcome::Valid);
    }

    #[test]
    #[should_panic(expected = "Expected Invalid with key INVALID_MONTH, got Valid")]
    fn assert_invalid_with_key_panics_on_valid() {
        assert_invalid!(Outcome::Valid, MessageKey::InvalidMonth);
    }

    #[test]
    #[should_panic(expected = "unexpected message key")]
    fn assert_invalid_with_key_panics_on_other_key() {
        assert_invalid!(
            Outcome::invalid(MessageKey::InvalidDay, "no"),
            MessageKey::InvalidMonth
        );
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn outcome_arbitrary_generates_consistent_instances(outcome in any::<Outcome>()) {
                match &outcome {
                    Outcome::Valid => prop_assert!(outcome.message_key().is_none()),
                    Outcome::Invalid(invalid) => {
                        prop_assert_eq!(outcome.message_key(), Some(invalid.message_key));
                    }
                }
            }
        }
    }
}
