//! Message rendering
//!
//! A [`Translator`] is bound to one language and one [`Category`]. It turns a
//! message key, the field name, and optional [`Attributes`] into the final
//! human-readable message.
//!
//! Rendering happens in two passes over `{placeholder}` occurrences:
//!
//! 1. Every placeholder is replaced by the field name, whatever it is called.
//! 2. If attributes are supplied, any placeholder still present is replaced by
//!    the attribute of the same name, or left verbatim when no such attribute
//!    exists.
//!
//! A key with no template renders as the key itself. Translation never fails.
//!
//! # Example
//!
//! ```rust
//! use rulechain::{Catalog, Category, Translator};
//!
//! let translator = Translator::new("en", Category::String, Catalog::builtin());
//! assert_eq!(
//!     translator.translate("INVALID_EMAIL", "email", None),
//!     "The input email is not a valid email address."
//! );
//! assert_eq!(translator.translate("NO_SUCH_KEY", "email", None), "NO_SUCH_KEY");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use regex::{Captures, NoExpand, Regex};

use crate::catalog::Catalog;
use crate::message::Category;

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER
        .get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid"))
}

/// A value substituted into a named placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Rendered as-is
    Text(String),
    /// Rendered with `f64`'s `Display`, so `5.0` becomes `5`
    Number(f64),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(text) => f.write_str(text),
            AttributeValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value as f64)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Number(f64::from(value))
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Number(f64::from(value))
    }
}

impl From<usize> for AttributeValue {
    fn from(value: usize) -> Self {
        AttributeValue::Number(value as f64)
    }
}

/// Named placeholder values for the second rendering pass.
///
/// # Example
///
/// ```rust
/// use rulechain::Attributes;
///
/// let attrs = Attributes::new().with("divisor", 5).with("type", "IPv4");
/// assert_eq!(attrs.get("divisor").map(ToString::to_string), Some("5".to_string()));
/// assert!(attrs.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(BTreeMap<String, AttributeValue>);

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an attribute.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Look up an attribute by placeholder name.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attributes(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Renders message keys for one language and category.
#[derive(Debug, Clone)]
pub struct Translator {
    language: String,
    category: Category,
    catalog: Arc<Catalog>,
}

impl Translator {
    /// Bind a translator to `(language, category)` in `catalog`.
    pub fn new(language: impl Into<String>, category: Category, catalog: Arc<Catalog>) -> Self {
        Self {
            language: language.into(),
            category,
            catalog,
        }
    }

    /// The bound language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The bound category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Render `key` with `primary_value` (the field name) and optional attributes.
    ///
    /// The field-name pass runs first over every placeholder; the attribute
    /// pass then fills whatever placeholders remain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rulechain::{Attributes, Catalog, Category, Translator};
    ///
    /// let catalog = Catalog::new().with_table(
    ///     "en",
    ///     Category::Number,
    ///     [("INVALID_MULTIPLE", "{keyName} must be a multiple of {divisor}")],
    /// );
    /// let translator = Translator::new("en", Category::Number, catalog.into());
    ///
    /// // The field-name pass claims every placeholder.
    /// assert_eq!(
    ///     translator.translate("INVALID_MULTIPLE", "qty", Some(&Attributes::new().with("divisor", 5))),
    ///     "qty must be a multiple of qty"
    /// );
    /// ```
    pub fn translate(
        &self,
        key: &str,
        primary_value: &str,
        attributes: Option<&Attributes>,
    ) -> String {
        let template = match self.catalog.lookup(&self.language, self.category, key) {
            Some(template) => template,
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    language = %self.language,
                    category = %self.category,
                    key,
                    "no template found, rendering raw key"
                );
                key
            }
        };

        let message = placeholder_regex()
            .replace_all(template, NoExpand(primary_value))
            .into_owned();

        match attributes {
            Some(attrs) => placeholder_regex()
                .replace_all(&message, |caps: &Captures<'_>| match attrs.get(&caps[1]) {
                    Some(value) => value.to_string(),
                    None => caps[0].to_string(),
                })
                .into_owned(),
            None => message,
        }
    }
}
