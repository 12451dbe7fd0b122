// SPDX-License-Identifier: PMPL-1.0-or-later

//! Cheap language detection for catalog files.
//!
//! Every catalog translates the host's own language declaration,
//! `LANG_ENGLISH, SUBLANG_ENGLISH_US`, into the pair naming its language.
//! Reading that one record is enough to tell which language a file holds.

use super::lexer;
use crate::registry::{self, LangId};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub const SENTINEL_LANG: &str = "LANG_ENGLISH";
pub const SENTINEL_SUBLANG: &str = "SUBLANG_ENGLISH_US";

fn sentinel() -> &'static Regex {
    static SENTINEL: OnceLock<Regex> = OnceLock::new();
    SENTINEL.get_or_init(|| {
        let pattern =
            format!(r#"^msgid\s*"\s*{SENTINEL_LANG}\s*,\s*{SENTINEL_SUBLANG}\s*"\s*$"#);
        Regex::new(&pattern).expect("sentinel pattern is valid")
    })
}

/// Language declared by the catalog at `path`. `None` when the file cannot
/// be read or declares nothing this registry knows.
pub fn probe_language(path: &Path) -> Option<LangId> {
    let bytes = fs::read(path).ok()?;
    probe_bytes(&bytes)
}

pub fn probe_bytes(bytes: &[u8]) -> Option<LangId> {
    let mut lines = lexer::split_lines(bytes).map(|(_, line)| line);
    while let Some(line) = lines.next() {
        if sentinel().is_match(&String::from_utf8_lossy(line)) {
            let declaration = String::from_utf8_lossy(lines.next()?).into_owned();
            return declared_language(&declaration);
        }
    }
    None
}

fn declared_language(line: &str) -> Option<LangId> {
    let lang = symbol_at(line, line.find("LANG_")?);
    let sublang = symbol_at(line, line.find("SUBLANG_")?);
    let index = registry::lookup_by_names(lang, sublang)?;
    registry::descriptor(index).map(|desc| desc.id)
}

fn symbol_at(line: &str, start: usize) -> &str {
    let rest = &line[start..];
    let end = rest
        .find(|ch: char| matches!(ch, ',' | '"' | ' ' | '\t' | '\r' | '\n'))
        .unwrap_or(rest.len());
    &rest[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_declared_language() {
        let text = b"msgid \"\"\nmsgstr \"\"\n\n#: Merge.rc:1\nmsgid \"LANG_ENGLISH, SUBLANG_ENGLISH_US\"\nmsgstr \"LANG_FRENCH, SUBLANG_FRENCH\"\n";
        assert_eq!(probe_bytes(text), Some(LangId::new(0x0c, 0x01)));
    }

    #[test]
    fn sentinel_tolerates_spacing() {
        let text = b"msgid \" LANG_ENGLISH ,SUBLANG_ENGLISH_US \"  \r\nmsgstr \"LANG_GERMAN , SUBLANG_GERMAN\"\r\n";
        assert_eq!(probe_bytes(text), Some(LangId::new(0x07, 0x01)));
    }

    #[test]
    fn sentinel_must_be_whole_literal() {
        let text = b"msgid \"LANG_ENGLISH, SUBLANG_ENGLISH_US and more\"\nmsgstr \"LANG_FRENCH, SUBLANG_FRENCH\"\n";
        assert_eq!(probe_bytes(text), None);
    }

    #[test]
    fn unknown_pair_is_not_found() {
        let text = b"msgid \"LANG_ENGLISH, SUBLANG_ENGLISH_US\"\nmsgstr \"LANG_KLINGON, SUBLANG_DEFAULT\"\n";
        assert_eq!(probe_bytes(text), None);
    }

    #[test]
    fn missing_declaration_line_is_not_found() {
        assert_eq!(probe_bytes(b"msgid \"LANG_ENGLISH, SUBLANG_ENGLISH_US\""), None);
        assert_eq!(probe_bytes(b"#: Merge.rc:5\nmsgid \"Open\"\nmsgstr \"Ouvrir\"\n"), None);
    }

    #[test]
    fn serbian_variants_are_distinguished() {
        let text = b"msgid \"LANG_ENGLISH, SUBLANG_ENGLISH_US\"\nmsgstr \"LANG_SERBIAN, SUBLANG_SERBIAN_CYRILLIC\"\n";
        assert_eq!(probe_bytes(text), Some(LangId::from_raw(0x0c1a)));
    }

    #[test]
    fn unreadable_file_is_not_found() {
        assert_eq!(probe_language(Path::new("/nonexistent/Languages/French.po")), None);
    }
}
