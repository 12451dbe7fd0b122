// SPDX-License-Identifier: PMPL-1.0-or-later

//! langsel: runtime language selection for a desktop diff/merge host.
//!
//! The host ships its UI strings in English and addresses every
//! translatable string by its line in the resource script. Translations
//! are installed as catalogs in a `Languages` directory beside the
//! executable.
//!
//! COMPONENTS:
//! 1. **Catalog**: parses `.po` catalogs into line-keyed string tables and
//!    rejects catalogs whose references disagree.
//! 2. **Registry**: the fixed table of supported languages, keyed by
//!    numeric id and searchable by symbol or locale tag.
//! 3. **Discovery**: finds installed catalogs and the language each declares.
//! 4. **Select**: the current-language state machine. It swaps in a fully
//!    loaded catalog, then tells the host to refresh.

pub mod backend;
pub mod catalog;
pub mod codepage;
pub mod config;
pub mod discovery;
pub mod error;
pub mod registry;
pub mod select;
pub mod settings;
pub mod translate;

pub use backend::{CatalogBackend, CatalogFormat, LangBackend, LoadedModule, PoBackend};
pub use catalog::Catalog;
pub use error::{CatalogError, LangError};
pub use registry::{LangId, LanguageDescriptor};
pub use select::{HostHooks, LanguageSelector, LanguageState, SelectOutcome, SelectorOptions};
pub use settings::{JsonSettings, SettingsStore};
pub use translate::{Translate, Translator};
