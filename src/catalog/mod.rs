//! Message catalog
//!
//! A [`Catalog`] maps `(language, category, key)` to a message template. It is
//! plain data: built once, then shared read-only behind an [`Arc`] by every
//! [`Translator`](crate::Translator) that needs it.
//!
//! The crate ships English (`en`) and Arabic (`ar`) tables for every
//! [`MessageKey`], available through [`Catalog::builtin`]. Custom catalogs can
//! be assembled with [`Catalog::with_table`] and handed to validators through
//! [`Config::with_catalog`](crate::Config::with_catalog).
//!
//! # Example
//!
//! ```rust
//! use rulechain::{Catalog, Category};
//!
//! let catalog = Catalog::new().with_table(
//!     "fr",
//!     Category::String,
//!     [("INVALID_EMAIL", "L'entrée {keyName} n'est pas un e-mail valide.")],
//! );
//!
//! assert!(catalog.lookup("fr", Category::String, "INVALID_EMAIL").is_some());
//! assert!(catalog.lookup("fr", Category::String, "INVALID_URL").is_none());
//! ```

mod ar;
mod en;

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::message::{Category, MessageKey};

type Table = HashMap<String, String>;

/// Read-only lookup table of message templates.
///
/// Missing entries are legal: the translator falls back to the raw key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog {
    tables: HashMap<String, HashMap<Category, Table>>,
}

static BUILTIN: OnceLock<Arc<Catalog>> = OnceLock::new();

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the crate (`en` and `ar`).
    ///
    /// Built on first use and shared afterwards.
    pub fn builtin() -> Arc<Catalog> {
        BUILTIN
            .get_or_init(|| {
                let mut catalog = Catalog::new();
                catalog.extend_builtin("en", en::TEMPLATES);
                catalog.extend_builtin("ar", ar::TEMPLATES);
                Arc::new(catalog)
            })
            .clone()
    }

    fn extend_builtin(&mut self, language: &str, templates: &[(MessageKey, &str)]) {
        for (key, template) in templates {
            self.insert(language, key.category(), key.as_str(), *template);
        }
    }

    /// Add or replace a single template.
    pub fn insert(
        &mut self,
        language: impl Into<String>,
        category: Category,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.tables
            .entry(language.into())
            .or_default()
            .entry(category)
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Add a batch of templates for one language and category.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rulechain::{Catalog, Category};
    ///
    /// let catalog = Catalog::new().with_table(
    ///     "en",
    ///     Category::Number,
    ///     [
    ///         ("INVALID_NUMBER", "{keyName} must be a number"),
    ///         ("INVALID_POSITIVE", "{keyName} must be positive"),
    ///     ],
    /// );
    /// assert_eq!(
    ///     catalog.lookup("en", Category::Number, "INVALID_POSITIVE"),
    ///     Some("{keyName} must be positive")
    /// );
    /// ```
    pub fn with_table<L, K, V, I>(mut self, language: L, category: Category, entries: I) -> Self
    where
        L: Into<String>,
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let table = self
            .tables
            .entry(language.into())
            .or_default()
            .entry(category)
            .or_default();
        table.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Find the template for `key` in the `(language, category)` table.
    pub fn lookup(&self, language: &str, category: Category, key: &str) -> Option<&str> {
        self.tables
            .get(language)?
            .get(&category)?
            .get(key)
            .map(String::as_str)
    }

    /// Languages with at least one table, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Whether any table exists for `language`.
    pub fn supports(&self, language: &str) -> bool {
        self.tables.contains_key(language)
    }

    /// Parse a catalog from its JSON form: `language -> category -> key -> template`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rulechain::{Catalog, Category};
    ///
    /// let catalog = Catalog::from_json(
    ///     r#"{ "en": { "boolean": { "INVALID_BOOLEAN": "{keyName} must be a boolean" } } }"#,
    /// )
    /// .unwrap();
    /// assert!(catalog.lookup("en", Category::Boolean, "INVALID_BOOLEAN").is_some());
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_key() {
        let catalog = Catalog::builtin();
        for language in ["en", "ar"] {
            for key in MessageKey::ALL {
                assert!(
                    catalog
                        .lookup(language, key.category(), key.as_str())
                        .is_some(),
                    "{language} is missing {key}"
                );
            }
        }
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(Arc::ptr_eq(&Catalog::builtin(), &Catalog::builtin()));
    }

    #[test]
    fn test_builtin_languages() {
        assert_eq!(Catalog::builtin().languages(), vec!["ar", "en"]);
        assert!(Catalog::builtin().supports("en"));
        assert!(!Catalog::builtin().supports("fr"));
    }

    #[test]
    fn test_lookup_respects_category() {
        let catalog = Catalog::builtin();
        assert!(catalog
            .lookup("en", Category::Number, "INVALID_EMAIL")
            .is_none());
        assert_eq!(
            catalog.lookup("en", Category::Number, "INVALID_MULTIPLE"),
            Some("The input {keyName} is not a multiple of {divisor}.")
        );
    }

    #[test]
    fn test_insert_replaces_template() {
        let mut catalog = Catalog::new();
        catalog.insert("en", Category::Date, "INVALID_DATE", "first");
        catalog.insert("en", Category::Date, "INVALID_DATE", "second");
        assert_eq!(
            catalog.lookup("en", Category::Date, "INVALID_DATE"),
            Some("second")
        );
    }

    #[test]
    fn test_with_table_merges() {
        let catalog = Catalog::new()
            .with_table("en", Category::String, [("A", "a")])
            .with_table("en", Category::String, [("B", "b")]);
        assert_eq!(catalog.lookup("en", Category::String, "A"), Some("a"));
        assert_eq!(catalog.lookup("en", Category::String, "B"), Some("b"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let source = Catalog::new().with_table("en", Category::Date, [("INVALID_DATE", "bad")]);
        let json = serde_json::to_string(&source).unwrap();
        assert_eq!(json, r#"{"en":{"date":{"INVALID_DATE":"bad"}}}"#);
        assert_eq!(Catalog::from_json(&json).unwrap(), source);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_rejects_unknown_category() {
        assert!(Catalog::from_json(r#"{"en":{"time":{}}}"#).is_err());
    }
}
