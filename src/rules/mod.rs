//! Typed validator families
//!
//! Each family owns a [`RuleChain`](crate::RuleChain) whose first rule checks the value's
//! shape for the family's category. Builder methods append one rule each and
//! return the validator, so checks read left to right in the order they run.
//!
//! | Factory | Family | Type check |
//! |---|---|---|
//! | [`is_string`] | [`StringValidator`] | `INVALID_STRING` |
//! | [`is_number`] | [`NumberValidator`] | `INVALID_NUMBER` |
//! | [`is_boolean`] | [`BooleanValidator`] | `INVALID_BOOLEAN` |
//! | [`is_date`] | [`DateValidator`] | `INVALID_DATE` |
//!
//! # Example
//!
//! ```rust
//! use rulechain::{is_string, MessageKey};
//! use serde_json::json;
//!
//! let email = is_string().min(6).is_email();
//!
//! assert!(email.validate(&json!("ada@example.com"), "email").is_valid());
//! assert_eq!(
//!     email.validate(&json!(42), "email").message_key(),
//!     Some(MessageKey::InvalidString)
//! );
//! assert_eq!(
//!     email.validate(&json!("a@b"), "email").message_key(),
//!     Some(MessageKey::InvalidValueLength)
//! );
//! ```

use crate::config::Config;

/// Implements the shared surface of a validator family around its `chain` field.
macro_rules! validator_family {
    ($family:ident) => {
        impl $family {
            /// Run the chain against `value`, reporting failures under `field_name`.
            pub fn validate(
                &self,
                value: &serde_json::Value,
                field_name: &str,
            ) -> $crate::outcome::Outcome {
                self.chain.validate(value, field_name)
            }

            /// Number of rules, including the type check.
            pub fn len(&self) -> usize {
                self.chain.len()
            }

            /// Always `false`: the type check is installed at construction.
            pub fn is_empty(&self) -> bool {
                self.chain.is_empty()
            }

            /// Give up the typed builder and keep the chain.
            pub fn into_chain(self) -> $crate::chain::RuleChain {
                self.chain
            }
        }

        impl $crate::chain::Validator for $family {
            fn chain(&self) -> &$crate::chain::RuleChain {
                &self.chain
            }
        }
    };
}

mod boolean;
mod date;
mod number;
pub(crate) mod patterns;
mod string;

pub use boolean::BooleanValidator;
pub use date::DateValidator;
pub use number::NumberValidator;
pub use string::{CidrPolicy, IpVersion, StringValidator};

/// A string validator with the default configuration.
pub fn is_string() -> StringValidator {
    StringValidator::new(&Config::default())
}

/// A string validator with an explicit configuration.
pub fn is_string_with(config: Config) -> StringValidator {
    StringValidator::new(&config)
}

/// A number validator with the default configuration.
pub fn is_number() -> NumberValidator {
    NumberValidator::new(&Config::default())
}

/// A number validator with an explicit configuration.
pub fn is_number_with(config: Config) -> NumberValidator {
    NumberValidator::new(&config)
}

/// A boolean validator with the default configuration.
pub fn is_boolean() -> BooleanValidator {
    BooleanValidator::new(&Config::default())
}

/// A boolean validator with an explicit configuration.
pub fn is_boolean_with(config: Config) -> BooleanValidator {
    BooleanValidator::new(&config)
}

/// A date validator with the default configuration.
pub fn is_date() -> DateValidator {
    DateValidator::new(&Config::default())
}

/// A date validator with an explicit configuration.
pub fn is_date_with(config: Config) -> DateValidator {
    DateValidator::new(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Validator;
    use crate::message::Category;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_validators_are_send_sync() {
        assert_send_sync::<StringValidator>();
        assert_send_sync::<NumberValidator>();
        assert_send_sync::<BooleanValidator>();
        assert_send_sync::<DateValidator>();
    }

    #[test]
    fn test_factories_install_type_check() {
        assert_eq!(is_string().len(), 1);
        assert_eq!(is_number().len(), 1);
        assert_eq!(is_boolean().len(), 1);
        assert_eq!(is_date().len(), 1);
        assert!(!is_string().is_empty());
    }

    #[test]
    fn test_factories_bind_category() {
        assert_eq!(is_string().chain().category(), Category::String);
        assert_eq!(is_number().chain().category(), Category::Number);
        assert_eq!(is_boolean().chain().category(), Category::Boolean);
        assert_eq!(is_date().chain().category(), Category::Date);
    }

    #[test]
    fn test_factories_resolve_language() {
        assert_eq!(is_string().chain().language(), "en");
        assert_eq!(is_date_with(Config::new("ar")).chain().language(), "ar");
    }

    #[test]
    fn test_each_factory_call_is_independent() {
        let first = is_number().is_even();
        let second = is_number();
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_into_chain_keeps_rules() {
        let chain = is_string().is_uuid().is_json().into_chain();
        assert_eq!(chain.len(), 3);
    }
}
