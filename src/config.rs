// SPDX-License-Identifier: PMPL-1.0-or-later

//! Host configuration for language handling.

use crate::backend::{CatalogBackend, CatalogFormat, LangBackend, PoBackend};
use crate::codepage;
use crate::discovery;
use crate::select::SelectorOptions;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_dir: Option<PathBuf>,
    pub format: CatalogFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_path: Option<PathBuf>,
    /// Template the catalogs were generated from; enables strict reference checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,
    pub ansi_codepage: u32,
    /// Version `.lang` modules must have been compiled for.
    pub host_version: String,
    pub reload_menu: bool,
    pub update_title: bool,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            language_dir: None,
            format: CatalogFormat::Po,
            settings_path: None,
            template_path: None,
            ansi_codepage: codepage::CP_DEFAULT_ANSI,
            host_version: env!("CARGO_PKG_VERSION").to_string(),
            reload_menu: true,
            update_title: true,
        }
    }
}

impl LanguageConfig {
    /// Read a JSON or YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "config {} must be json/yaml/yml",
                    path.to_string_lossy()
                ));
            }
        };
        Ok(config)
    }

    /// Defaults for an application installed at `executable`.
    pub fn for_executable(executable: &Path) -> Self {
        let mut config = Self::default();
        config.fill_paths(executable);
        config
    }

    /// Derive any unset directory from the executable location.
    pub fn fill_paths(&mut self, executable: &Path) {
        if self.language_dir.is_none() {
            self.language_dir = Some(discovery::language_dir(executable));
        }
        if self.settings_path.is_none() {
            let base = executable.parent().unwrap_or_else(|| Path::new("."));
            self.settings_path = Some(base.join(SETTINGS_FILE_NAME));
        }
    }

    pub fn language_dir(&self) -> PathBuf {
        self.language_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(discovery::LANGUAGE_DIR_NAME))
    }

    pub fn settings_path(&self) -> PathBuf {
        self.settings_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME))
    }

    pub fn selector_options(&self) -> SelectorOptions {
        SelectorOptions {
            reload_menu: self.reload_menu,
            update_title: self.update_title,
            ansi_codepage: self.ansi_codepage,
        }
    }

    pub fn backend(&self) -> Result<Box<dyn CatalogBackend>> {
        match self.format {
            CatalogFormat::Po => {
                let backend = match &self.template_path {
                    Some(template) => PoBackend::from_template_file(template)
                        .with_context(|| format!("loading template {}", template.display()))?,
                    None => PoBackend::new(),
                };
                Ok(Box::new(backend))
            }
            CatalogFormat::Lang => Ok(Box::new(LangBackend::new(self.host_version.clone()))),
        }
    }
}
