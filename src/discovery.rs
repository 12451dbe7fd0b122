// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locating installed catalogs.
//!
//! Catalogs live in a `Languages` directory next to the executable. A
//! missing directory simply means no translations are installed.

use crate::backend::CatalogBackend;
use crate::registry::LangId;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LANGUAGE_DIR_NAME: &str = "Languages";

/// A catalog file together with the language it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredCatalog {
    pub id: LangId,
    pub path: PathBuf,
}

pub fn language_dir(executable: &Path) -> PathBuf {
    executable
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(LANGUAGE_DIR_NAME)
}

/// Regular files in `dir` whose extension matches `extension`, ignoring
/// case, sorted by file name.
pub fn list_catalog_files(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(dir = %dir.display(), error = %err, "language directory unavailable");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(extension))
                .unwrap_or(false)
        })
        .collect();

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    files
}

pub fn langs_installed(dir: &Path, extension: &str) -> bool {
    !list_catalog_files(dir, extension).is_empty()
}

/// Every catalog in `dir` that declares a known language. Files whose
/// language cannot be determined are skipped.
pub fn available_languages<B>(dir: &Path, backend: &B) -> Vec<DiscoveredCatalog>
where
    B: CatalogBackend + ?Sized,
{
    list_catalog_files(dir, backend.extension())
        .into_iter()
        .filter_map(|path| match backend.probe(&path) {
            Some(id) => Some(DiscoveredCatalog { id, path }),
            None => {
                debug!(path = %path.display(), "no language declaration");
                None
            }
        })
        .collect()
}

/// First catalog in `dir` declaring exactly `id`.
pub fn find_catalog<B>(dir: &Path, backend: &B, id: LangId) -> Option<PathBuf>
where
    B: CatalogBackend + ?Sized,
{
    list_catalog_files(dir, backend.extension())
        .into_iter()
        .find(|path| backend.probe(path) == Some(id))
}
