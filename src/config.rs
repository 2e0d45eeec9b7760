//! Validator configuration
//!
//! [`Config`] selects the language messages are rendered in and the catalog
//! they come from. It is resolved once when a validator is created.
//!
//! # Example
//!
//! ```rust
//! use rulechain::{is_string_with, Config};
//! use serde_json::json;
//!
//! let outcome = is_string_with(Config::new("ar"))
//!     .is_email()
//!     .validate(&json!("nope"), "email");
//! assert_eq!(
//!     outcome.message(),
//!     Some("الإدخال email ليس بريدًا إلكترونيًا صالحًا.")
//! );
//! ```

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::message::Category;
use crate::translator::Translator;

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Settings shared by all validator factories.
#[derive(Debug, Clone)]
pub struct Config {
    language: String,
    catalog: Arc<Catalog>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            catalog: Catalog::builtin(),
        }
    }
}

impl Config {
    /// Built-in catalog with the given language.
    pub fn new(language: impl Into<String>) -> Self {
        Self::default().with_language(language)
    }

    /// Set the language code (`"en"`, `"ar"`, ...).
    ///
    /// Languages missing from the catalog are accepted; their messages render
    /// as raw keys.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Replace the message catalog.
    pub fn with_catalog(mut self, catalog: impl Into<Arc<Catalog>>) -> Self {
        self.catalog = catalog.into();
        self
    }

    /// The configured language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The configured catalog.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub(crate) fn translator(&self, category: Category) -> Translator {
        Translator::new(self.language.clone(), category, Arc::clone(&self.catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english_builtin() {
        let config = Config::default();
        assert_eq!(config.language(), "en");
        assert!(Arc::ptr_eq(config.catalog(), &Catalog::builtin()));
    }

    #[test]
    fn test_with_language() {
        assert_eq!(Config::new("ar").language(), "ar");
        assert_eq!(Config::default().with_language("fr").language(), "fr");
    }

    #[test]
    fn test_with_catalog() {
        let config = Config::default().with_catalog(Catalog::new());
        assert!(config.catalog().languages().is_empty());
    }

    #[test]
    fn test_translator_binding() {
        let translator = Config::new("ar").translator(Category::Date);
        assert_eq!(translator.language(), "ar");
        assert_eq!(translator.category(), Category::Date);
    }
}
