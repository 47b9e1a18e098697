//! Settings for the localization runtime.

mod loader;
mod types;

pub use loader::load_settings;
pub use types::{
    CatalogFilesConfig,
    ConfigError,
    I18nSettings,
    ReportConfig,
    ValidationError,
};
