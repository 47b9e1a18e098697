//! The translation dictionary: per-locale message trees.

mod loader;
mod tree;

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

pub use loader::load_catalog;

use crate::locale::Locale;

/// Errors that may occur while building a catalog from files.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A catalog file could not be read.
    #[error("Failed to read catalog file '{path}': {source}")]
    Io {
        /// The offending file path.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A `.json` catalog file did not parse.
    #[error("Failed to parse catalog file '{path}': {source}")]
    Parse {
        /// The offending file path.
        path: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// A `.jsonc` catalog file did not parse.
    #[error("Failed to parse catalog file '{path}': {message}")]
    ParseJsonc {
        /// The offending file path.
        path: String,
        /// The parser's diagnostic text.
        message: String,
    },

    /// The configured file pattern is not a valid glob.
    #[error("Invalid catalog file pattern: {0}")]
    Pattern(#[from] globset::Error),

    /// A message tree's root was not a JSON object.
    #[error("Catalog file '{path}' must contain a top-level object")]
    NotAnObject {
        /// The offending file path.
        path: String,
    },
}

/// All message trees for all supported locales.
///
/// Built once at startup (from files or embedded strings) and read-only
/// afterwards. A key missing under a locale is not an error here; the
/// resolver handles misses at lookup time.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Locale → message tree root (always a JSON object).
    trees: HashMap<Locale, Value>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a message tree into a locale, optionally mounted under a
    /// namespace key (used for per-namespace catalog files such as
    /// `locales/en/common.json`).
    pub fn merge_tree(&mut self, locale: Locale, namespace: Option<&str>, incoming: Value) {
        let incoming = match namespace {
            Some(ns) => Value::Object([(ns.to_string(), incoming)].into_iter().collect()),
            None => incoming,
        };

        let root = self.trees.entry(locale).or_insert_with(|| Value::Object(serde_json::Map::new()));
        tree::merge(root, incoming);
    }

    /// Build a single-locale catalog from an embedded JSON string
    /// (`include_str!` style).
    ///
    /// # Errors
    /// Parse failure or a non-object root.
    pub fn from_json_str(locale: Locale, json: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|source| CatalogError::Parse { path: "<embedded>".to_string(), source })?;
        Self::from_value(locale, value)
    }

    /// Build a single-locale catalog from an embedded JSONC string.
    ///
    /// # Errors
    /// Parse failure or a non-object root.
    pub fn from_jsonc_str(locale: Locale, jsonc: &str) -> Result<Self, CatalogError> {
        let value = parse_jsonc(jsonc, "<embedded>")?;
        Self::from_value(locale, value)
    }

    /// Build a single-locale catalog from an already-parsed tree.
    ///
    /// # Errors
    /// A non-object root.
    pub fn from_value(locale: Locale, value: Value) -> Result<Self, CatalogError> {
        if !value.is_object() {
            return Err(CatalogError::NotAnObject { path: "<embedded>".to_string() });
        }
        let mut catalog = Self::new();
        catalog.merge_tree(locale, None, value);
        Ok(catalog)
    }

    /// Resolve a key path to a leaf template under `locale`.
    #[must_use]
    pub fn lookup(&self, locale: Locale, key: &str, separator: &str) -> Option<&str> {
        tree::lookup(self.trees.get(&locale)?, key, separator)
    }

    /// Flattened dotted-key view of a locale's tree, for coverage reporting.
    #[must_use]
    pub fn flattened(&self, locale: Locale, separator: &str) -> HashMap<String, String> {
        self.trees.get(&locale).map(|root| tree::flatten(root, separator)).unwrap_or_default()
    }

    /// Locales that have at least one tree loaded.
    #[must_use]
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        Locale::ALL.into_iter().filter(|locale| self.trees.contains_key(locale))
    }

    /// True if no tree has been loaded for any locale.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

/// Parse JSONC text into a `serde_json::Value`, treating an empty document
/// as an error.
fn parse_jsonc(text: &str, path: &str) -> Result<Value, CatalogError> {
    match jsonc_parser::parse_to_serde_value(text, &jsonc_parser::ParseOptions::default()) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(CatalogError::ParseJsonc {
            path: path.to_string(),
            message: "empty document".to_string(),
        }),
        Err(e) => Err(CatalogError::ParseJsonc { path: path.to_string(), message: e.to_string() }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;

    #[googletest::test]
    fn from_json_str_builds_a_lookupable_tree() {
        let catalog =
            Catalog::from_json_str(Locale::En, r#"{"nav": {"search": "Search"}}"#).unwrap();

        expect_that!(catalog.lookup(Locale::En, "nav.search", "."), some(eq("Search")));
        expect_that!(catalog.lookup(Locale::Ja, "nav.search", "."), none());
    }

    #[googletest::test]
    fn from_jsonc_str_accepts_comments_and_trailing_commas() {
        let text = r#"{
  // Shared vocabulary
  "common": {
    "loading": "Loading...",
  },
}"#;

        let catalog = Catalog::from_jsonc_str(Locale::En, text).unwrap();

        expect_that!(catalog.lookup(Locale::En, "common.loading", "."), some(eq("Loading...")));
    }

    #[googletest::test]
    fn non_object_root_is_rejected() {
        let result = Catalog::from_json_str(Locale::En, r#"["a", "b"]"#);

        expect_that!(
            result,
            err(displays_as(contains_substring("top-level object")))
        );
    }

    #[googletest::test]
    fn merge_tree_mounts_namespace_under_its_key() {
        let mut catalog = Catalog::new();
        catalog.merge_tree(Locale::Ja, Some("rfq"), json!({ "title": "見積依頼" }));

        expect_that!(catalog.lookup(Locale::Ja, "rfq.title", "."), some(eq("見積依頼")));
    }

    #[googletest::test]
    fn merge_tree_accumulates_multiple_files_per_locale() {
        let mut catalog = Catalog::new();
        catalog.merge_tree(Locale::En, None, json!({ "nav": { "search": "Search" } }));
        catalog.merge_tree(Locale::En, Some("rfq"), json!({ "title": "RFQs" }));

        expect_that!(catalog.lookup(Locale::En, "nav.search", "."), some(eq("Search")));
        expect_that!(catalog.lookup(Locale::En, "rfq.title", "."), some(eq("RFQs")));
        expect_that!(catalog.locales().collect::<Vec<_>>(), elements_are![eq(&Locale::En)]);
    }

    #[googletest::test]
    fn flattened_is_empty_for_unloaded_locale() {
        let catalog = Catalog::new();

        expect_that!(catalog.flattened(Locale::Ja, "."), is_empty());
        expect_that!(catalog.is_empty(), eq(true));
    }
}
