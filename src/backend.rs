// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog backends.
//!
//! The application is shipped either with text catalogs (`.po`) parsed at
//! switch time, or with precompiled language modules (`.lang`) produced
//! from those catalogs ahead of time. Both answer the same two questions:
//! which language does a file hold, and what is its line → string table.
//! The backend is picked once from configuration and never changes while
//! the process runs.

use crate::catalog::{self, Catalog, SourceIndex};
use crate::codepage;
use crate::error::LangError;
use crate::registry::LangId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const MODULE_SCHEMA: &str = "langsel.module";
const MODULE_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    #[default]
    Po,
    Lang,
}

impl CatalogFormat {
    pub fn extension(self) -> &'static str {
        match self {
            CatalogFormat::Po => "po",
            CatalogFormat::Lang => "lang",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "po" | "text" => Some(CatalogFormat::Po),
            "lang" | "module" => Some(CatalogFormat::Lang),
            _ => None,
        }
    }
}

/// A language file that has been fully read and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedModule {
    pub path: PathBuf,
    pub catalog: Catalog,
}

pub trait CatalogBackend {
    fn format(&self) -> CatalogFormat;

    /// Language declared by `path`, without loading the whole file.
    fn probe(&self, path: &Path) -> Option<LangId>;

    /// Read and validate `path`. Nothing is retained on failure.
    fn load(&self, path: &Path) -> Result<LoadedModule, LangError>;

    fn extension(&self) -> &'static str {
        self.format().extension()
    }
}

impl<B: CatalogBackend + ?Sized> CatalogBackend for Box<B> {
    fn format(&self) -> CatalogFormat {
        (**self).format()
    }

    fn probe(&self, path: &Path) -> Option<LangId> {
        (**self).probe(path)
    }

    fn load(&self, path: &Path) -> Result<LoadedModule, LangError> {
        (**self).load(path)
    }
}

/// Text catalogs, optionally checked against the template they were
/// generated from.
#[derive(Debug, Clone, Default)]
pub struct PoBackend {
    template: Option<SourceIndex>,
}

impl PoBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(template: SourceIndex) -> Self {
        Self {
            template: Some(template),
        }
    }

    pub fn from_template_file(path: &Path) -> Result<Self, LangError> {
        let bytes = fs::read(path).map_err(|err| LangError::io(path, err))?;
        Ok(Self::with_template(SourceIndex::parse(&bytes)))
    }
}

impl CatalogBackend for PoBackend {
    fn format(&self) -> CatalogFormat {
        CatalogFormat::Po
    }

    fn probe(&self, path: &Path) -> Option<LangId> {
        catalog::probe_language(path)
    }

    fn load(&self, path: &Path) -> Result<LoadedModule, LangError> {
        info!(path = %path.display(), "loading catalog");
        let bytes = fs::read(path).map_err(|err| LangError::io(path, err))?;
        let parsed = match &self.template {
            Some(template) => Catalog::parse_with_template(&bytes, template),
            None => Catalog::parse(&bytes),
        };
        let catalog = parsed.map_err(|reason| {
            warn!(path = %path.display(), %reason, "catalog rejected");
            LangError::CatalogMalformed {
                path: path.to_path_buf(),
                reason,
            }
        })?;
        Ok(LoadedModule {
            path: path.to_path_buf(),
            catalog,
        })
    }
}

/// Precompiled language module: a catalog widened to Unicode and stamped
/// with the host version it was built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleBundle {
    pub schema: String,
    pub version: u32,
    pub host_version: String,
    pub language: LangId,
    /// Codepage of the catalog the module was compiled from.
    pub codepage: u32,
    pub strings: BTreeMap<u32, String>,
}

#[derive(Deserialize)]
struct ModuleHeader {
    schema: String,
    language: LangId,
}

impl ModuleBundle {
    pub fn compile(
        catalog: &Catalog,
        language: LangId,
        host_version: &str,
        ansi_codepage: u32,
    ) -> Self {
        let strings = catalog
            .lines()
            .map(|(line, bytes)| {
                let text = codepage::decode(catalog.codepage(), ansi_codepage, bytes);
                (line, text)
            })
            .collect();
        Self {
            schema: MODULE_SCHEMA.to_string(),
            version: MODULE_VERSION,
            host_version: host_version.to_string(),
            language,
            codepage: catalog.codepage(),
            strings,
        }
    }

    pub fn write(&self, path: &Path) -> Result<(), LangError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| LangError::io(parent, err))?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            LangError::ModuleLoadFailed {
                path: path.to_path_buf(),
                reason: format!("serializing module: {err}"),
            }
        })?;
        fs::write(path, json).map_err(|err| LangError::io(path, err))
    }

    /// The module's strings as a catalog. Text is stored as UTF-8.
    pub fn into_catalog(self) -> Catalog {
        let strings = self
            .strings
            .into_iter()
            .map(|(line, text)| (line, text.into_bytes()))
            .collect();
        Catalog::from_parts(strings, codepage::CP_UTF8)
    }
}

#[derive(Debug, Clone)]
pub struct LangBackend {
    host_version: String,
}

impl LangBackend {
    pub fn new(host_version: impl Into<String>) -> Self {
        Self {
            host_version: host_version.into(),
        }
    }

    fn read_bundle(&self, path: &Path) -> Result<ModuleBundle, LangError> {
        let failed = |reason: String| LangError::ModuleLoadFailed {
            path: path.to_path_buf(),
            reason,
        };
        let raw = fs::read_to_string(path).map_err(|err| LangError::io(path, err))?;
        let bundle: ModuleBundle =
            serde_json::from_str(&raw).map_err(|err| failed(format!("invalid module: {err}")))?;
        if bundle.schema != MODULE_SCHEMA || bundle.version != MODULE_VERSION {
            return Err(failed(format!(
                "unsupported module format {} v{}",
                bundle.schema, bundle.version
            )));
        }
        if bundle.host_version != self.host_version {
            return Err(failed(format!(
                "version mismatch: module built for {}, host is {}",
                bundle.host_version, self.host_version
            )));
        }
        Ok(bundle)
    }
}

impl CatalogBackend for LangBackend {
    fn format(&self) -> CatalogFormat {
        CatalogFormat::Lang
    }

    fn probe(&self, path: &Path) -> Option<LangId> {
        let raw = fs::read_to_string(path).ok()?;
        let header: ModuleHeader = serde_json::from_str(&raw).ok()?;
        (header.schema == MODULE_SCHEMA).then_some(header.language)
    }

    fn load(&self, path: &Path) -> Result<LoadedModule, LangError> {
        info!(path = %path.display(), "loading language module");
        let bundle = self.read_bundle(path).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "language module rejected");
        })?;
        Ok(LoadedModule {
            path: path.to_path_buf(),
            catalog: bundle.into_catalog(),
        })
    }
}
