// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language registry.
//!
//! A fixed table of the languages the application can display, keyed by a
//! compact [`LangId`]. Catalog files declare their language symbolically
//! (`LANG_FRENCH, SUBLANG_FRENCH`), the OS reports it as a locale tag
//! (`fr-FR`), and settings persist it as the numeric id; this module maps
//! between all three.
//!
//! Lookups are linear scans. The table has a few dozen rows and is only
//! consulted when the language dialog opens or a language is switched.

mod table;

use crate::codepage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary language in the low 10 bits, sub-language in the high 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LangId(u16);

impl LangId {
    /// English (US), the language compiled into the host binary.
    pub const SOURCE: LangId = LangId::new(0x09, 0x01);

    pub const fn new(primary: u16, sub: u16) -> Self {
        LangId((sub << 10) | (primary & 0x3ff))
    }

    pub const fn from_raw(raw: u16) -> Self {
        LangId(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn primary(self) -> u16 {
        self.0 & 0x3ff
    }

    pub const fn sub(self) -> u16 {
        self.0 >> 10
    }

    pub fn is_source(self) -> bool {
        self == LangId::SOURCE
    }
}

impl Default for LangId {
    fn default() -> Self {
        LangId::SOURCE
    }
}

impl fmt::Display for LangId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

/// One row of the language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    /// String-table id of the language name in the current UI language.
    pub name_id: u32,
    /// Name used when the host has no string table entry for `name_id`.
    pub english_name: &'static str,
    /// Name in the language itself; may need glyphs the ANSI codepage lacks.
    pub native_name: &'static str,
    pub ascii_name: &'static str,
    pub id: LangId,
    /// Symbolic primary name as written in catalogs, e.g. `LANG_FRENCH`.
    pub lang: &'static str,
    /// Symbolic sub-language name, e.g. `SUBLANG_FRENCH`.
    pub sublang: &'static str,
    /// C runtime locale name to install on switch; empty means leave it alone.
    pub locale: &'static str,
    /// BCP 47 style tag matched against OS locales.
    pub tag: &'static str,
}

/// All known languages in table order.
pub fn languages() -> &'static [LanguageDescriptor] {
    table::LANGUAGES
}

/// Row at `index`, as returned by [`lookup_by_names`].
pub fn descriptor(index: usize) -> Option<&'static LanguageDescriptor> {
    table::LANGUAGES.get(index)
}

pub fn lookup_by_id(id: LangId) -> Option<&'static LanguageDescriptor> {
    table::LANGUAGES.iter().find(|desc| desc.id == id)
}

/// Index of the row declared as `lang, sublang` (e.g. `LANG_GERMAN`, `SUBLANG_GERMAN`).
pub fn lookup_by_names(lang: &str, sublang: &str) -> Option<usize> {
    table::LANGUAGES
        .iter()
        .position(|desc| desc.lang == lang && desc.sublang == sublang)
}

/// Tag prefixes whose row the primary subtag alone would pick wrongly.
/// Script subtags come first so `zh-Hans-HK` stays Simplified.
const TAG_ALIASES: &[(&str, &str)] = &[
    ("zh-hans", "zh-CN"),
    ("zh-hant", "zh-TW"),
    ("zh-sg", "zh-CN"),
    ("zh-hk", "zh-TW"),
    ("zh-mo", "zh-TW"),
    ("sr-cyrl", "sr-Cyrl"),
    ("sr-latn", "sr-Latn"),
    ("no", "nb"),
];

/// Map an OS locale string (`fr_FR.UTF-8`, `zh-Hans-CN`, `pt`) to a table row.
///
/// An exact tag match wins, then a known script or region alias; otherwise
/// the first row sharing the primary subtag is used.
pub fn lookup_by_tag(tag: &str) -> Option<&'static LanguageDescriptor> {
    let wanted = normalize_tag(tag)?;
    if let Some(desc) = find_tag(&wanted) {
        return Some(desc);
    }
    if let Some(&(_, target)) = TAG_ALIASES
        .iter()
        .find(|(prefix, _)| has_subtag_prefix(&wanted, prefix))
    {
        return find_tag(target);
    }
    let primary = primary_subtag(&wanted);
    table::LANGUAGES
        .iter()
        .find(|desc| primary_subtag(&desc.tag.to_ascii_lowercase()) == primary)
}

/// Dialog label: localized name, a dash, then the native name.
///
/// The native name is only shown when `ansi_codepage` can represent it;
/// otherwise the ASCII transliteration is used so the label stays legible
/// in fonts that lack the script.
pub fn display_name<F>(desc: &LanguageDescriptor, localized: F, ansi_codepage: u32) -> String
where
    F: Fn(u32) -> Option<String>,
{
    let name = localized(desc.name_id).unwrap_or_else(|| desc.english_name.to_string());
    format!("{} - {}", name, native_label(desc, ansi_codepage))
}

fn native_label(desc: &LanguageDescriptor, ansi_codepage: u32) -> &'static str {
    if !desc.native_name.is_empty() && codepage::can_represent(ansi_codepage, desc.native_name) {
        desc.native_name
    } else {
        desc.ascii_name
    }
}

fn normalize_tag(tag: &str) -> Option<String> {
    // POSIX locales carry encoding and modifier suffixes: ll_CC.charset@mod
    let base = tag.split(&['.', '@'][..]).next().unwrap_or("").trim();
    if base.is_empty() || base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix") {
        return None;
    }
    let normalized = base.replace('_', "-").to_ascii_lowercase();
    let primary = primary_subtag(&normalized);
    if (2..=3).contains(&primary.len()) && primary.chars().all(|ch| ch.is_ascii_alphabetic()) {
        Some(normalized)
    } else {
        None
    }
}

fn find_tag(tag: &str) -> Option<&'static LanguageDescriptor> {
    table::LANGUAGES
        .iter()
        .find(|desc| desc.tag.eq_ignore_ascii_case(tag))
}

fn has_subtag_prefix(tag: &str, prefix: &str) -> bool {
    match tag.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('-'),
        None => false,
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}
