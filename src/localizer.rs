//! The resolve surface handed to view code.
//!
//! A [`Localizer`] bundles the read-only [`Catalog`] with the session's
//! active [`Locale`]. It is an explicit context object created at
//! application start and injected into consumers; there is no ambient
//! global locale.

use crate::catalog::Catalog;
use crate::config::I18nSettings;
use crate::interpolate::{
    Params,
    interpolate,
};
use crate::locale::Locale;

/// Single source of truth for "which locale is active right now", plus the
/// catalog resolved against.
///
/// Resolution is total: a key that does not reach a string leaf comes back
/// verbatim, so untranslated keys are visible in the rendered UI instead of
/// raising errors.
#[derive(Debug, Clone)]
pub struct Localizer {
    /// Message trees for all loaded locales.
    catalog: Catalog,
    /// Separator between key-path segments.
    key_separator: String,
    /// Locale consulted when the active locale misses, if configured.
    fallback_locale: Option<Locale>,
    /// The currently active locale.
    locale: Locale,
}

impl Localizer {
    /// Create a localizer over `catalog`, starting at the configured
    /// default locale.
    #[must_use]
    pub fn new(catalog: Catalog, settings: &I18nSettings) -> Self {
        Self {
            catalog,
            key_separator: settings.key_separator.clone(),
            fallback_locale: settings.fallback_locale,
            locale: settings.default_locale,
        }
    }

    /// The currently active locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Replace the active locale.
    ///
    /// Takes effect for all subsequent resolutions; already-rendered output
    /// is the consumer's concern.
    pub fn set_locale(&mut self, locale: Locale) {
        tracing::debug!(from = %self.locale, to = %locale, "Switching locale");
        self.locale = locale;
    }

    /// The catalog being resolved against.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve a dotted key under the active locale.
    ///
    /// Returns the translated string, or the key itself when the path does
    /// not resolve to a string leaf.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        self.template(key).map_or_else(|| key.to_string(), ToString::to_string)
    }

    /// Resolve a dotted key and substitute `{placeholder}` tokens from
    /// `params`.
    ///
    /// An unresolved key is echoed back uninterpolated, matching the
    /// plain-key diagnostic behavior of [`resolve`](Self::resolve).
    #[must_use]
    pub fn resolve_with(&self, key: &str, params: &Params) -> String {
        self.template(key).map_or_else(|| key.to_string(), |t| interpolate(t, params))
    }

    /// Look up the raw template for a key, trying the active locale and
    /// then the configured fallback. Logs misses at debug level.
    fn template(&self, key: &str) -> Option<&str> {
        if let Some(template) = self.catalog.lookup(self.locale, key, &self.key_separator) {
            return Some(template);
        }

        if let Some(fallback) = self.fallback_locale
            && let Some(template) = self.catalog.lookup(fallback, key, &self.key_separator)
        {
            tracing::debug!(%key, locale = %self.locale, %fallback, "Key resolved via fallback locale");
            return Some(template);
        }

        tracing::debug!(%key, locale = %self.locale, "Translation key not resolved");
        None
    }
}
