//! Rule chain execution
//!
//! A [`RuleChain`] is an ordered, append-only list of [`Rule`]s bound to a
//! [`Translator`]. [`RuleChain::validate`] runs the rules in insertion order
//! and stops at the first failure, so a rule never sees a value an earlier
//! rule rejected.
//!
//! Chains are not built directly; the validator families in
//! [`rules`](crate::rules) own one each and append to it from their builder
//! methods.

use std::fmt;

use serde_json::Value;

use crate::message::Category;
use crate::outcome::{Outcome, Violation};
use crate::translator::Translator;

/// A single check appended to a chain.
///
/// Rules receive the raw input and the field name and report either success
/// or an unrendered [`Violation`]. Closures with the matching signature are
/// rules.
///
/// The trait is public so a check can be run on its own through
/// [`Rule::check`]. Chains only grow through the builder methods of the
/// validator families; there is no public way to append an arbitrary rule.
///
/// # Example
///
/// ```rust
/// use rulechain::{MessageKey, Rule, Violation};
/// use serde_json::{json, Value};
///
/// let not_null = |value: &Value, _field: &str| {
///     if value.is_null() {
///         Err(Violation::new(MessageKey::InvalidString))
///     } else {
///         Ok(())
///     }
/// };
///
/// assert!(not_null.check(&json!("x"), "name").is_ok());
/// assert!(not_null.check(&Value::Null, "name").is_err());
/// ```
pub trait Rule<T: ?Sized>: Send + Sync {
    /// Check `value`, reported under `field_name`.
    fn check(&self, value: &T, field_name: &str) -> Result<(), Violation>;
}

impl<T: ?Sized, F> Rule<T> for F
where
    F: Fn(&T, &str) -> Result<(), Violation> + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T, field_name: &str) -> Result<(), Violation> {
        self(value, field_name)
    }
}

/// Ordered rules plus the translator that renders their failures.
pub struct RuleChain {
    translator: Translator,
    rules: Vec<Box<dyn Rule<Value>>>,
}

impl RuleChain {
    pub(crate) fn new(translator: Translator) -> Self {
        Self {
            translator,
            rules: Vec::new(),
        }
    }

    pub(crate) fn add_rule<R>(&mut self, rule: R)
    where
        R: Rule<Value> + 'static,
    {
        self.rules.push(Box::new(rule));
    }

    /// Run every rule in order and return the first failure.
    ///
    /// The chain is not modified, so repeated calls with the same input give
    /// the same outcome.
    pub fn validate(&self, value: &Value, field_name: &str) -> Outcome {
        for (position, rule) in self.rules.iter().enumerate() {
            let Err(violation) = rule.check(value, field_name) else {
                continue;
            };

            self.trace_failure(field_name, position, &violation);

            let message = self.translator.translate(
                violation.key().as_str(),
                field_name,
                violation.attributes(),
            );
            return Outcome::invalid(violation.key(), message);
        }
        Outcome::Valid
    }

    #[cfg(feature = "tracing")]
    fn trace_failure(&self, field_name: &str, position: usize, violation: &Violation) {
        tracing::debug!(
            field = field_name,
            category = %self.translator.category(),
            position,
            key = %violation.key(),
            "validation failed"
        );
    }

    #[cfg(not(feature = "tracing"))]
    #[inline]
    fn trace_failure(&self, _field_name: &str, _position: usize, _violation: &Violation) {}

    /// Number of rules, including the type check.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the chain has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The category failures are rendered from.
    pub fn category(&self) -> Category {
        self.translator.category()
    }

    /// The language failures are rendered in.
    pub fn language(&self) -> &str {
        self.translator.language()
    }

    /// The translator bound to this chain.
    pub fn translator(&self) -> &Translator {
        &self.translator
    }
}

impl fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleChain")
            .field("translator", &self.translator)
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Common surface of the typed validator families.
///
/// Lets code accept any family, e.g. to run a list of heterogeneous
/// validators against the same field.
///
/// ```rust
/// use rulechain::{is_number, is_string, Validator};
/// use serde_json::json;
///
/// let validators: Vec<Box<dyn Validator>> = vec![
///     Box::new(is_string().max(3)),
///     Box::new(is_number().is_positive()),
/// ];
/// let failed = validators
///     .iter()
///     .filter(|v| v.validate(&json!("abcd"), "code").is_invalid())
///     .count();
/// assert_eq!(failed, 2);
/// ```
pub trait Validator: Send + Sync {
    /// The underlying chain.
    fn chain(&self) -> &RuleChain;

    /// Run the chain against `value`.
    fn validate(&self, value: &Value, field_name: &str) -> Outcome {
        self.chain().validate(value, field_name)
    }
}

impl Validator for RuleChain {
    fn chain(&self) -> &RuleChain {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::message::MessageKey;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn chain() -> RuleChain {
        RuleChain::new(Translator::new("en", Category::Number, Catalog::builtin()))
    }

    fn pass(_: &Value, _: &str) -> Result<(), Violation> {
        Ok(())
    }

    fn fail(key: MessageKey) -> impl Fn(&Value, &str) -> Result<(), Violation> + Send + Sync {
        move |_, _| Err(Violation::new(key))
    }

    #[test]
    fn test_empty_chain_is_valid() {
        let chain = chain();
        assert!(chain.is_empty());
        assert_eq!(chain.validate(&json!(null), "x"), Outcome::Valid);
    }

    #[test]
    fn test_first_failure_wins() {
        let mut chain = chain();
        chain.add_rule(pass);
        chain.add_rule(fail(MessageKey::InvalidPositive));
        chain.add_rule(fail(MessageKey::InvalidEvenNumber));

        let outcome = chain.validate(&json!(-3), "n");
        assert_eq!(outcome.message_key(), Some(MessageKey::InvalidPositive));
        assert_eq!(outcome.message(), Some("The number n must be positive."));
    }

    #[test]
    fn test_rules_after_failure_do_not_run() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut chain = chain();
        chain.add_rule(fail(MessageKey::InvalidNumber));
        chain.add_rule(move |_: &Value, _: &str| -> Result<(), Violation> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        assert!(chain.validate(&json!("nope"), "n").is_invalid());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_rules_run_in_insertion_order() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut chain = chain();
        for i in 0..4 {
            let order = Arc::clone(&order);
            chain.add_rule(move |_: &Value, _: &str| -> Result<(), Violation> {
                order.lock().unwrap().push(i);
                Ok(())
            });
        }

        assert!(chain.validate(&json!(1), "n").is_valid());
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(chain.len(), 4);
    }

    #[test]
    fn test_field_name_reaches_rule() {
        let mut chain = chain();
        chain.add_rule(|_: &Value, field: &str| -> Result<(), Violation> {
            if field == "age" {
                Ok(())
            } else {
                Err(Violation::new(MessageKey::InvalidNumber))
            }
        });
        assert!(chain.validate(&json!(1), "age").is_valid());
        assert!(chain.validate(&json!(1), "size").is_invalid());
    }

    #[test]
    fn test_attributes_reach_translator() {
        let catalog = Catalog::new().with_table(
            "en",
            Category::Number,
            [("INVALID_MULTIPLE", "not a multiple of {divisor}")],
        );
        let mut chain = RuleChain::new(Translator::new("en", Category::Number, Arc::new(catalog)));
        chain.add_rule(|_: &Value, _: &str| -> Result<(), Violation> {
            Err(Violation::new(MessageKey::InvalidMultiple).with_attribute("divisor", 7))
        });

        // The field name itself is a placeholder, so the attribute pass fills it.
        let outcome = chain.validate(&json!(1), "{divisor}");
        assert_eq!(outcome.message(), Some("not a multiple of 7"));
    }

    #[test]
    fn test_accessors_and_debug() {
        let chain = chain();
        assert_eq!(chain.category(), Category::Number);
        assert_eq!(chain.language(), "en");
        assert!(format!("{chain:?}").contains("rules: 0"));
    }

    #[test]
    fn test_rule_checks_standalone() {
        let rule = fail(MessageKey::InvalidZero);
        let violation = rule.check(&json!(1), "n").unwrap_err();
        assert_eq!(violation.key(), MessageKey::InvalidZero);
        assert!(Rule::<Value>::check(&pass, &json!(1), "n").is_ok());
    }
}
