//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    I18nSettings,
};

/// File name looked up in the application root.
const CONFIG_FILE_NAME: &str = ".bom-i18n.json";

/// Load settings from an application root.
///
/// Looks for `.bom-i18n.json` in `root`.
///
/// # Returns
/// - `Ok(Some(settings))`: file found and parsed
/// - `Ok(None)`: no settings file present
/// - `Err(ConfigError)`: read or parse failure
///
/// # Errors
/// - File read error
/// - JSON parse error
pub(super) fn load_from_root(root: &Path) -> Result<Option<I18nSettings>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: I18nSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

/// Load settings from a root, falling back to defaults when no file exists,
/// and validate the result.
///
/// # Errors
/// - File read or parse error
/// - Validation error
pub fn load_settings(root: &Path) -> Result<I18nSettings, ConfigError> {
    let settings = load_from_root(root)?.unwrap_or_default();
    settings.validate().map_err(ConfigError::ValidationErrors)?;
    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::locale::Locale;

    #[rstest]
    fn test_load_from_root_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"defaultLocale": "ja", "keySeparator": "-"}"#;
        fs::write(temp_dir.path().join(".bom-i18n.json"), config_content).unwrap();

        let result = load_from_root(temp_dir.path());

        assert!(result.is_ok());
        let settings = result.unwrap();
        assert!(settings.is_some());
        let settings = settings.unwrap();
        assert_eq!(settings.default_locale, Locale::Ja);
        assert_eq!(settings.key_separator, "-");
    }

    #[rstest]
    fn test_load_from_root_no_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_root(temp_dir.path());

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[rstest]
    fn test_load_from_root_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".bom-i18n.json"), "invalid json").unwrap();

        let result = load_from_root(temp_dir.path());

        assert!(result.is_err());
    }

    #[rstest]
    fn test_load_settings_defaults_when_absent() {
        let temp_dir = TempDir::new().unwrap();

        let settings = load_settings(temp_dir.path()).unwrap();

        assert_eq!(settings.default_locale, Locale::En);
        assert_eq!(settings.key_separator, ".");
    }

    #[rstest]
    fn test_load_settings_rejects_invalid_settings() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".bom-i18n.json"), r#"{"keySeparator": ""}"#).unwrap();

        let result = load_settings(temp_dir.path());

        assert!(result.is_err());
    }
}
