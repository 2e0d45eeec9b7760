//! Validation outcomes
//!
//! [`Outcome`] is what a chain's `validate` returns: either [`Outcome::Valid`]
//! or [`Outcome::Invalid`] carrying the first failure. Failures are ordinary
//! values, never errors or panics.
//!
//! Rules themselves report an unrendered [`Violation`] (a key plus optional
//! attributes); the chain renders the first one through its translator.
//!
//! # Example
//!
//! ```rust
//! use rulechain::{is_number, MessageKey, Outcome};
//! use serde_json::json;
//!
//! let outcome = is_number().is_even().validate(&json!(3), "count");
//! assert!(outcome.is_invalid());
//! assert_eq!(outcome.message_key(), Some(MessageKey::InvalidEvenNumber));
//! assert_eq!(outcome.message(), Some("The number count must be even."));
//!
//! // Convert to Result for `?`
//! let result = outcome.into_result();
//! assert!(result.is_err());
//! ```

use crate::message::MessageKey;
use crate::translator::{AttributeValue, Attributes};

/// A rendered validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Invalid {
    /// Locale-rendered message
    pub message: String,
    /// Locale-independent identifier of the failed condition
    pub message_key: MessageKey,
}

/// Result of running a rule chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every rule passed
    Valid,
    /// The first failing rule
    Invalid(Invalid),
}

impl Outcome {
    /// Create an invalid outcome.
    #[inline]
    pub fn invalid(message_key: MessageKey, message: impl Into<String>) -> Self {
        Outcome::Invalid(Invalid {
            message: message.into(),
            message_key,
        })
    }

    /// Check if every rule passed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// Check if a rule failed.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Outcome::Invalid(_))
    }

    /// The rendered message of the failure, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Valid => None,
            Outcome::Invalid(invalid) => Some(&invalid.message),
        }
    }

    /// The key of the failure, if any.
    pub fn message_key(&self) -> Option<MessageKey> {
        match self {
            Outcome::Valid => None,
            Outcome::Invalid(invalid) => Some(invalid.message_key),
        }
    }

    /// Convert to a `Result`, with the failure as the error.
    ///
    /// ```rust
    /// use rulechain::is_boolean;
    /// use serde_json::json;
    ///
    /// fn check(flag: &serde_json::Value) -> Result<(), rulechain::Invalid> {
    ///     is_boolean().is_true().validate(flag, "accepted").into_result()?;
    ///     Ok(())
    /// }
    ///
    /// assert!(check(&json!(true)).is_ok());
    /// assert_eq!(
    ///     check(&json!(false)).unwrap_err().to_string(),
    ///     "The input accepted is not true."
    /// );
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<(), Invalid> {
        match self {
            Outcome::Valid => Ok(()),
            Outcome::Invalid(invalid) => Err(invalid),
        }
    }
}

impl From<Outcome> for Result<(), Invalid> {
    fn from(outcome: Outcome) -> Self {
        outcome.into_result()
    }
}

impl From<Result<(), Invalid>> for Outcome {
    fn from(result: Result<(), Invalid>) -> Self {
        match result {
            Ok(()) => Outcome::Valid,
            Err(invalid) => Outcome::Invalid(invalid),
        }
    }
}

/// An unrendered failure reported by a single rule.
///
/// The chain turns it into [`Outcome::Invalid`] by translating the key with
/// the field name and the attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    key: MessageKey,
    attributes: Option<Attributes>,
}

impl Violation {
    /// A violation with no attributes.
    pub fn new(key: MessageKey) -> Self {
        Self {
            key,
            attributes: None,
        }
    }

    /// Attach a named placeholder value.
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        let attributes = self.attributes.take().unwrap_or_default();
        self.attributes = Some(attributes.with(name, value));
        self
    }

    /// The failed condition.
    pub fn key(&self) -> MessageKey {
        self.key
    }

    /// Attributes for the second rendering pass, if any were attached.
    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }
}

impl From<MessageKey> for Violation {
    fn from(key: MessageKey) -> Self {
        Violation::new(key)
    }
}

/// `Ok(())` when `condition` holds, otherwise a violation of `key`.
#[inline]
pub(crate) fn ensure(condition: bool, key: MessageKey) -> Result<(), Violation> {
    if condition {
        Ok(())
    } else {
        Err(Violation::new(key))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Invalid, Outcome};
    use crate::message::MessageKey;

    impl Serialize for Outcome {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Outcome::Valid => {
                    let mut state = serializer.serialize_struct("Outcome", 1)?;
                    state.serialize_field("valid", &true)?;
                    state.end()
                }
                Outcome::Invalid(invalid) => {
                    let mut state = serializer.serialize_struct("Outcome", 3)?;
                    state.serialize_field("valid", &false)?;
                    state.serialize_field("message", &invalid.message)?;
                    state.serialize_field("messageKey", &invalid.message_key)?;
                    state.end()
                }
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Wire {
        valid: bool,
        message: Option<String>,
        message_key: Option<MessageKey>,
    }

    impl<'de> Deserialize<'de> for Outcome {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let wire = Wire::deserialize(deserializer)?;
            match (wire.valid, wire.message, wire.message_key) {
                (true, _, _) => Ok(Outcome::Valid),
                (false, Some(message), Some(message_key)) => {
                    Ok(Outcome::Invalid(Invalid {
                        message,
                        message_key,
                    }))
                }
                (false, _, _) => Err(serde::de::Error::custom(
                    "invalid outcome requires `message` and `messageKey`",
                )),
            }
        }
    }
}
