//! Catalog checker binary.
//!
//! Loads the catalog under a root directory (first argument, defaults to
//! the current directory), logs coverage, and exits nonzero when the
//! missing-key report is enabled and non-empty.

use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use bom_i18n::config::load_settings;
use bom_i18n::report::coverage_report;
use bom_i18n::{
    Catalog,
    I18nSettings,
    load_catalog,
};

/// Load settings and catalog for `root`.
fn load(root: &Path) -> Result<(I18nSettings, Catalog), Box<dyn std::error::Error>> {
    let settings = load_settings(root)?;
    let catalog = load_catalog(root, &settings)?;
    Ok((settings, catalog))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().init();

    let root = std::env::args().nth(1).map_or_else(
        || std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        PathBuf::from,
    );

    let (settings, catalog) = match load(&root) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let report = coverage_report(&catalog, &settings.key_separator);

    for (locale, count) in &report.key_counts {
        tracing::info!(%locale, keys = count, "Catalog loaded");
    }
    for missing in &report.missing {
        let present_in: Vec<&str> =
            missing.present_in.iter().map(|locale| locale.as_str()).collect();
        tracing::warn!(
            key = %missing.key,
            locale = %missing.locale,
            present_in = present_in.join(", "),
            "Key missing from locale"
        );
    }

    if settings.report.missing_keys && !report.is_complete() {
        tracing::error!(count = report.missing.len(), "Catalog has missing keys");
        return ExitCode::FAILURE;
    }

    tracing::info!("Catalog check passed");
    ExitCode::SUCCESS
}
