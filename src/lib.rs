//! # rulechain
//!
//! Declarative, chainable validation of single values with localized
//! failure messages.
//!
//! A validator is created from one of four factories ([`is_string`],
//! [`is_number`], [`is_boolean`], [`is_date`]), extended with builder methods,
//! and run with `validate(value, field_name)`. Rules run in the order they
//! were added and the first failure wins; the result is an [`Outcome`] whose
//! message is rendered in the configured language.
//!
//! ## Quick Example
//!
//! ```rust
//! use rulechain::{is_number, is_string, MessageKey, Outcome};
//! use serde_json::json;
//!
//! let email = is_string().is_email();
//! assert_eq!(email.validate(&json!("ada@example.com"), "email"), Outcome::Valid);
//!
//! let outcome = email.validate(&json!(42), "email");
//! assert_eq!(outcome.message_key(), Some(MessageKey::InvalidString));
//! assert_eq!(outcome.message(), Some("The input email is not a valid string."));
//!
//! // First failure wins: -3 is reported as not positive, never as odd
//! let count = is_number().is_positive().is_even();
//! assert_eq!(
//!     count.validate(&json!(-3), "count").message_key(),
//!     Some(MessageKey::InvalidPositive)
//! );
//! ```
//!
//! ## Localization
//!
//! Messages come from a [`Catalog`] of templates keyed by language,
//! [`Category`] and [`MessageKey`]. English and Arabic are built in; pass a
//! [`Config`] to the `*_with` factories to pick another language or catalog.
//!
//! ```rust
//! use rulechain::{is_boolean_with, Catalog, Category, Config};
//! use serde_json::json;
//!
//! let catalog = Catalog::new().with_table(
//!     "fr",
//!     Category::Boolean,
//!     [("INVALID_BOOLEAN", "{keyName} doit être un booléen.")],
//! );
//! let config = Config::new("fr").with_catalog(catalog);
//!
//! let outcome = is_boolean_with(config).validate(&json!("oui"), "actif");
//! assert_eq!(outcome.message(), Some("actif doit être un booléen."));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod chain;
pub mod config;
pub mod error;
pub mod message;
pub mod outcome;
pub mod rules;
pub mod testing;
pub mod translator;

// Re-exports
pub use catalog::Catalog;
pub use chain::{Rule, RuleChain, Validator};
pub use config::{Config, DEFAULT_LANGUAGE};
pub use error::ConfigError;
pub use message::{Category, MessageKey, UnknownName};
pub use outcome::{Invalid, Outcome, Violation};
pub use rules::{
    is_boolean, is_boolean_with, is_date, is_date_with, is_number, is_number_with, is_string,
    is_string_with, BooleanValidator, CidrPolicy, DateValidator, IpVersion, NumberValidator,
    StringValidator,
};
pub use translator::{AttributeValue, Attributes, Translator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::chain::Validator;
    pub use crate::config::Config;
    pub use crate::error::ConfigError;
    pub use crate::message::MessageKey;
    pub use crate::outcome::Outcome;
    pub use crate::rules::{
        is_boolean, is_boolean_with, is_date, is_date_with, is_number, is_number_with, is_string,
        is_string_with, CidrPolicy, IpVersion,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use serde_json::json;

    #[test]
    fn test_prelude_covers_common_use() {
        let validators: Vec<Box<dyn Validator>> = vec![
            Box::new(is_string_with(Config::new("ar")).is_ip_address(IpVersion::V4, CidrPolicy::Forbidden)),
            Box::new(is_number().is_multiple_of(2)),
        ];
        let keys: Vec<Option<MessageKey>> = validators
            .iter()
            .map(|v| v.validate(&json!(3), "x").message_key())
            .collect();
        assert_eq!(keys, vec![Some(MessageKey::InvalidString), Some(MessageKey::InvalidMultiple)]);
        assert_eq!(validators[0].validate(&json!("10.0.0.1"), "x"), Outcome::Valid);

        let err: ConfigError = is_date().try_is_within_range("a", "b").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDateBound(_)));
        assert!(is_boolean().validate(&json!(true), "b").is_valid());
    }
}
