//! bom-i18n
//!
//! Localization runtime for the BOM intelligence application: per-locale
//! message catalogs, dotted key-path resolution with echo-the-key fallback,
//! and `{placeholder}` interpolation.

pub mod catalog;
pub mod config;
pub mod interpolate;
pub mod locale;
pub mod localizer;
pub mod report;

pub use catalog::{
    Catalog,
    CatalogError,
    load_catalog,
};
pub use config::I18nSettings;
pub use interpolate::{
    ParamValue,
    Params,
};
pub use locale::Locale;
pub use localizer::Localizer;
