// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalogs keyed by resource-script line number.
//!
//! Every translatable string in the host's resource script is replaced by
//! a placeholder naming its own line (`Merge.rc:123`). A catalog maps those
//! line numbers to the translated text for one language.
//!
//! ## Format
//!
//! Catalogs are gettext `.po` files as produced by the host's extraction
//! tooling:
//!
//! ```text
//! #. Codepage
//! #: Merge.rc:20
//! msgid "1252"
//! msgstr "1252"
//!
//! #: Merge.rc:10
//! #: Merge.rc:512
//! msgid "&Open..."
//! msgstr "&Ouvrir..."
//! ```
//!
//! Strings are kept as narrow bytes in the catalog's declared codepage and
//! only widened on lookup.

mod lexer;
mod parser;
mod probe;
mod unslash;

pub use parser::{parse_catalog, CatalogEntry, SourceIndex};
pub use probe::{probe_bytes, probe_language, SENTINEL_LANG, SENTINEL_SUBLANG};
pub use unslash::unslash;

use crate::codepage;
use crate::error::CatalogError;
use std::collections::BTreeMap;

/// A fully validated line → string mapping plus its codepage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    strings: BTreeMap<u32, Vec<u8>>,
    codepage: u32,
}

impl Catalog {
    /// Parse catalog text, validating references against each other.
    pub fn parse(bytes: &[u8]) -> Result<Self, CatalogError> {
        parse_catalog(bytes, None)
    }

    /// Parse catalog text, validating references against a template index.
    pub fn parse_with_template(bytes: &[u8], template: &SourceIndex) -> Result<Self, CatalogError> {
        parse_catalog(bytes, Some(template))
    }

    pub fn from_parts(strings: BTreeMap<u32, Vec<u8>>, codepage: u32) -> Self {
        Self { strings, codepage }
    }

    pub fn codepage(&self) -> u32 {
        self.codepage
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Narrow bytes for `line`. Line 0 never addresses a string.
    pub fn get(&self, line: u32) -> Option<&[u8]> {
        if line == 0 {
            return None;
        }
        self.strings.get(&line).map(Vec::as_slice)
    }

    /// Widened text for `line`, or `None` when absent or empty.
    ///
    /// `ansi_codepage` is used when the catalog did not declare one.
    pub fn text(&self, line: u32, ansi_codepage: u32) -> Option<String> {
        let bytes = self.get(line)?;
        if bytes.is_empty() {
            return None;
        }
        Some(codepage::decode(self.codepage, ansi_codepage, bytes))
    }

    pub fn lines(&self) -> impl Iterator<Item = (u32, &[u8])> + '_ {
        self.strings
            .iter()
            .map(|(line, bytes)| (*line, bytes.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_zero_is_never_translated() {
        let mut strings = BTreeMap::new();
        strings.insert(0, b"zero".to_vec());
        strings.insert(1, b"one".to_vec());
        let catalog = Catalog::from_parts(strings, 0);
        assert_eq!(catalog.get(0), None);
        assert_eq!(catalog.get(1), Some(&b"one"[..]));
    }

    #[test]
    fn empty_strings_do_not_widen() {
        let mut strings = BTreeMap::new();
        strings.insert(5, Vec::new());
        let catalog = Catalog::from_parts(strings, 1252);
        assert_eq!(catalog.get(5), Some(&b""[..]));
        assert_eq!(catalog.text(5, 1252), None);
    }

    #[test]
    fn text_uses_declared_codepage() {
        let mut strings = BTreeMap::new();
        strings.insert(3, b"\xCF\xF0\xE8\xE2\xE5\xF2".to_vec());
        let catalog = Catalog::from_parts(strings, 1251);
        assert_eq!(catalog.text(3, 1252).as_deref(), Some("Привет"));
    }
}
