//! Catalog file discovery and loading.
//!
//! Catalogs ship as JSON/JSONC files under a locales directory. Supported
//! layouts:
//!
//! - `locales/en.json` -> one file per locale
//! - `locales/en/common.json` -> per-namespace files (file stem is the
//!   namespace)
//! - `locales/common/en.json` -> per-namespace directories
//!
//! Multiple files for one locale deep-merge into a single tree.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;

use super::{
    Catalog,
    CatalogError,
};
use crate::config::I18nSettings;
use crate::locale::Locale;

/// Directory names that hold catalogs without being namespaces themselves.
const COMMON_PARENTS: [&str; 6] = ["locales", "messages", "translations", "i18n", "lang", "langs"];

/// Detect the locale of a catalog file from its path.
///
/// Splits the path on `/` and `.` and scans the parts backwards for one
/// that parses as a supported locale tag, so `locales/en/common.json`,
/// `locales/sub/ja.json` and `messages/en-US.json` all resolve.
fn detect_locale_from_path(file_path: &Path) -> Option<Locale> {
    let path_str = file_path.to_string_lossy();
    path_str.split(['/', '.']).rev().find_map(Locale::from_tag)
}

/// Detect the namespace of a catalog file from its path.
///
/// The file stem is the namespace unless it is a locale tag; otherwise the
/// parent directory is, unless it is a locale tag or a conventional catalog
/// container such as `locales`.
fn detect_namespace_from_path(file_path: &Path) -> Option<String> {
    let file_stem = file_path.file_stem()?.to_string_lossy().to_string();
    if Locale::from_tag(&file_stem).is_none() {
        return Some(file_stem);
    }

    let parent_name = file_path.parent()?.file_name()?.to_string_lossy().to_string();
    if Locale::from_tag(&parent_name).is_none()
        && !COMMON_PARENTS.contains(&parent_name.to_lowercase().as_str())
    {
        return Some(parent_name);
    }

    None
}

/// Find catalog files under `root` matching the configured pattern.
fn find_catalog_files(root: &Path, pattern_set: &GlobSet) -> Vec<PathBuf> {
    let mut found_files = Vec::new();

    for result in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();

        let Ok(relative_path) = path.strip_prefix(root) else {
            continue;
        };
        if !pattern_set.is_match(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    // Deterministic merge order regardless of walk order.
    found_files.sort();
    found_files
}

/// Parse one catalog file into a message tree.
fn parse_catalog_file(path: &Path) -> Result<serde_json::Value, CatalogError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| CatalogError::Io { path: path.display().to_string(), source })?;

    let is_jsonc = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("jsonc"));
    let value = if is_jsonc {
        super::parse_jsonc(&content, &path.display().to_string())?
    } else {
        serde_json::from_str(&content)
            .map_err(|source| CatalogError::Parse { path: path.display().to_string(), source })?
    };

    if !value.is_object() {
        return Err(CatalogError::NotAnObject { path: path.display().to_string() });
    }

    Ok(value)
}

/// Load all catalog files under `root` into a [`Catalog`].
///
/// Files whose locale cannot be determined from the path are skipped with a
/// warning; unreadable or malformed files abort the load, since catalogs
/// are static startup input and a broken one should not fail silently.
///
/// # Errors
/// - Invalid file pattern in the settings
/// - File read or parse failure
/// - A catalog file whose root is not an object
pub fn load_catalog(root: &Path, settings: &I18nSettings) -> Result<Catalog, CatalogError> {
    tracing::debug!(root = %root.display(), "Loading catalog");

    let glob = Glob::new(&settings.catalog_files.file_pattern)?;
    let pattern_set = GlobSetBuilder::new().add(glob).build()?;

    let mut catalog = Catalog::new();

    for path in find_catalog_files(root, &pattern_set) {
        let Some(locale) = detect_locale_from_path(&path) else {
            tracing::warn!(path = %path.display(), "Skipping catalog file with unrecognized locale");
            continue;
        };

        let namespace = detect_namespace_from_path(&path);
        let value = parse_catalog_file(&path)?;

        tracing::debug!(
            path = %path.display(),
            %locale,
            namespace = namespace.as_deref().unwrap_or("-"),
            "Merging catalog file"
        );
        catalog.merge_tree(locale, namespace.as_deref(), value);
    }

    if catalog.is_empty() {
        tracing::warn!(root = %root.display(), "No catalog files found");
    }

    Ok(catalog)
}
