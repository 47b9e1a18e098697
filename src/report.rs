//! Catalog coverage reporting.
//!
//! The runtime deliberately tolerates asymmetric catalogs (a key present
//! under one locale and absent under another resolves to the echoed key).
//! This module makes the asymmetry visible at development time without
//! changing runtime behavior.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::locale::Locale;

/// A key that exists under some locales but not others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKey {
    /// The dotted key path.
    pub key: String,
    /// The locale the key is missing from.
    pub locale: Locale,
    /// Locales that do carry the key.
    pub present_in: Vec<Locale>,
}

/// Coverage summary over all loaded locales.
#[derive(Debug, Clone, Default)]
pub struct CoverageReport {
    /// Keys missing from at least one loaded locale, sorted by key then
    /// locale.
    pub missing: Vec<MissingKey>,
    /// Number of resolvable string leaves per loaded locale.
    pub key_counts: Vec<(Locale, usize)>,
}

impl CoverageReport {
    /// True when every key resolves under every loaded locale.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compare the flattened key sets of all loaded locales.
///
/// Only locales present in the catalog participate; a single-locale catalog
/// reports complete coverage by definition.
#[must_use]
pub fn coverage_report(catalog: &Catalog, separator: &str) -> CoverageReport {
    let locales: Vec<Locale> = catalog.locales().collect();
    let flattened: Vec<(Locale, BTreeSet<String>)> = locales
        .iter()
        .map(|&locale| {
            (locale, catalog.flattened(locale, separator).into_keys().collect::<BTreeSet<_>>())
        })
        .collect();

    let all_keys: BTreeSet<&String> = flattened.iter().flat_map(|(_, keys)| keys).collect();

    let mut missing = Vec::new();
    for key in all_keys {
        let present_in: Vec<Locale> = flattened
            .iter()
            .filter(|(_, keys)| keys.contains(key))
            .map(|&(locale, _)| locale)
            .collect();

        for &(locale, _) in &flattened {
            if !present_in.contains(&locale) {
                missing.push(MissingKey {
                    key: key.clone(),
                    locale,
                    present_in: present_in.clone(),
                });
            }
        }
    }

    let key_counts = flattened.iter().map(|(locale, keys)| (*locale, keys.len())).collect();

    CoverageReport { missing, key_counts }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;

    /// Build a bilingual catalog from two trees.
    fn catalog(en: serde_json::Value, ja: serde_json::Value) -> Catalog {
        let mut catalog = Catalog::new();
        catalog.merge_tree(Locale::En, None, en);
        catalog.merge_tree(Locale::Ja, None, ja);
        catalog
    }

    #[googletest::test]
    fn symmetric_catalogs_are_complete() {
        let catalog = catalog(
            json!({ "nav": { "search": "Search" } }),
            json!({ "nav": { "search": "検索" } }),
        );

        let report = coverage_report(&catalog, ".");

        expect_that!(report.is_complete(), eq(true));
        expect_that!(
            report.key_counts,
            unordered_elements_are![eq(&(Locale::En, 1)), eq(&(Locale::Ja, 1))]
        );
    }

    #[googletest::test]
    fn japanese_only_keys_are_reported_against_english() {
        let catalog = catalog(
            json!({ "reasoning": { "eolRisk": "EOL risk" } }),
            json!({
                "reasoning": {
                    "eolRisk": "生産終了リスク",
                    "longLeadTime": "納期が長期化しています"
                }
            }),
        );

        let report = coverage_report(&catalog, ".");

        expect_that!(
            report.missing,
            elements_are![all![
                field!(MissingKey.key, eq("reasoning.longLeadTime")),
                field!(MissingKey.locale, eq(&Locale::En)),
                field!(MissingKey.present_in, elements_are![eq(&Locale::Ja)])
            ]]
        );
    }

    #[googletest::test]
    fn missing_keys_are_sorted_by_key() {
        let catalog = catalog(
            json!({ "b": "B", "a": "A" }),
            json!({}),
        );

        let report = coverage_report(&catalog, ".");

        expect_that!(
            report.missing,
            elements_are![
                field!(MissingKey.key, eq("a")),
                field!(MissingKey.key, eq("b"))
            ]
        );
    }

    #[googletest::test]
    fn single_locale_catalog_is_complete() {
        let mut catalog = Catalog::new();
        catalog.merge_tree(Locale::Ja, None, json!({ "nav": { "search": "検索" } }));

        let report = coverage_report(&catalog, ".");

        expect_that!(report.is_complete(), eq(true));
        expect_that!(report.key_counts, elements_are![eq(&(Locale::Ja, 1))]);
    }
}
