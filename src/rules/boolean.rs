//! Boolean rules

use serde_json::Value;

use crate::chain::RuleChain;
use crate::config::Config;
use crate::message::{Category, MessageKey};
use crate::outcome::{ensure, Violation};

/// Chainable checks for boolean values.
///
/// Only JSON `true` and `false` pass the type check; `"true"`, `1` and
/// `null` are rejected with `INVALID_BOOLEAN`.
///
/// ```rust
/// use rulechain::{is_boolean, MessageKey};
/// use serde_json::json;
///
/// let accepted = is_boolean().equals_to(true);
/// assert!(accepted.validate(&json!(true), "terms").is_valid());
/// assert_eq!(
///     accepted.validate(&json!("true"), "terms").message_key(),
///     Some(MessageKey::InvalidBoolean)
/// );
/// ```
#[derive(Debug)]
pub struct BooleanValidator {
    chain: RuleChain,
}

validator_family!(BooleanValidator);

impl BooleanValidator {
    pub(crate) fn new(config: &Config) -> Self {
        let mut chain = RuleChain::new(config.translator(Category::Boolean));
        chain.add_rule(|value: &Value, _: &str| {
            ensure(value.is_boolean(), MessageKey::InvalidBoolean)
        });
        Self { chain }
    }

    fn push<F>(mut self, check: F) -> Self
    where
        F: Fn(bool) -> Result<(), Violation> + Send + Sync + 'static,
    {
        self.chain.add_rule(move |value: &Value, _: &str| match value.as_bool() {
            Some(b) => check(b),
            None => Ok(()),
        });
        self
    }

    /// Equal to `expected`, exposed to the message as `{expected}`.
    pub fn equals_to(self, expected: bool) -> Self {
        self.push(move |b| {
            if b == expected {
                Ok(())
            } else {
                Err(Violation::new(MessageKey::DoesNotEqual).with_attribute("expected", expected))
            }
        })
    }

    /// Is `true`.
    pub fn is_true(self) -> Self {
        self.push(|b| ensure(b, MessageKey::NotTrue))
    }

    /// Is `false`.
    pub fn is_false(self) -> Self {
        self.push(|b| ensure(!b, MessageKey::NotFalse))
    }
}
