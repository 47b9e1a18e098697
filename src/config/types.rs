//! Settings types and validation.

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::locale::Locale;

/// A single settings field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "catalogFiles.filePattern")
    pub field_path: String,
    /// Human-readable explanation.
    pub message: String,
}

impl ValidationError {
    /// Build a validation error for one field.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Errors from loading or validating settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more fields failed validation.
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The settings file could not be read.
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The settings file did not parse.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Render the list of validation errors as a numbered block.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Localization runtime settings.
///
/// Deserialized from `.bom-i18n.json`; every field has a default so a
/// partial (or absent) file is fine.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Locale active at session start.
    pub default_locale: Locale,

    /// Locale consulted when a key misses under the active locale.
    ///
    /// Off by default: a miss then echoes the key. Catalogs in this
    /// application are deliberately asymmetric (some Japanese-only risk
    /// descriptions have no English counterpart), so fallback is opt-in.
    pub fallback_locale: Option<Locale>,

    /// Separator between key-path segments.
    pub key_separator: String,

    /// Where catalog files live and how they are named.
    pub catalog_files: CatalogFilesConfig,

    /// Coverage-report behavior.
    pub report: ReportConfig,
}

/// Catalog file discovery settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogFilesConfig {
    /// Glob matched against paths relative to the catalog root.
    pub file_pattern: String,
}

impl Default for CatalogFilesConfig {
    fn default() -> Self {
        Self { file_pattern: "**/{locales,messages,i18n}/**/*.{json,jsonc}".to_string() }
    }
}

/// Coverage-report settings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportConfig {
    /// Whether keys missing from some locale fail the `bom-i18n` check.
    pub missing_keys: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { missing_keys: true }
    }
}

impl I18nSettings {
    /// # Errors
    /// - Empty key separator
    /// - Empty or invalid catalog file pattern
    /// - Fallback locale equal to the default locale
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.catalog_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "catalogFiles.filePattern",
                "The pattern cannot be empty. Example: \"**/locales/**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.catalog_files.file_pattern) {
            errors.push(ValidationError::new(
                "catalogFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.catalog_files.file_pattern),
            ));
        }

        if self.fallback_locale == Some(self.default_locale) {
            errors.push(ValidationError::new(
                "fallbackLocale",
                "The fallback locale must differ from 'defaultLocale'. Remove this field to disable fallback",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_locale: Locale::En,
            fallback_locale: None,
            key_separator: ".".to_string(),
            catalog_files: CatalogFilesConfig::default(),
            report: ReportConfig::default(),
        }
    }
}
