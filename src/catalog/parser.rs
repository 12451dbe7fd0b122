// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog parser.
//!
//! Walks the catalog one physical line at a time, collecting a record's
//! references and literals until a line without quotes closes it.
//! Each closed record is decoded and written to every line key it
//! references. The whole catalog is validated before anything is handed
//! back, so callers never see a partially applied catalog.

use super::lexer::{self, LineKind, Quoted};
use super::unslash::unslash;
use super::Catalog;
use crate::error::CatalogError;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

const CODEPAGE_DIRECTIVE: &[u8] = b"Codepage";

/// One record as read from the catalog, before decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogEntry {
    pub references: Vec<u32>,
    pub flags: Vec<u8>,
    pub directive: Vec<u8>,
    pub msgid: Vec<u8>,
    pub msgstr: Vec<u8>,
}

/// Source strings by line key, read from the template the catalogs were
/// generated from. Only the first pass over the template populates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceIndex {
    sources: BTreeMap<u32, Vec<u8>>,
}

impl SourceIndex {
    pub fn parse(bytes: &[u8]) -> Self {
        let mut index = Self::default();
        let mut lines = Vec::new();
        let mut msgid = Vec::new();
        let mut open = false;

        for (_, line) in lexer::split_lines(bytes) {
            let kind = lexer::classify(line);
            if open && kind != LineKind::Other {
                index.record(&mut lines, &mut msgid);
                open = false;
            }
            match kind {
                LineKind::References(rest) => lines.extend(lexer::references(rest)),
                LineKind::Msgid => open = true,
                _ => {}
            }
            if !open {
                continue;
            }
            match lexer::quoted(line) {
                Quoted::Text(text) => msgid.extend_from_slice(text),
                Quoted::Missing | Quoted::Unterminated => {
                    index.record(&mut lines, &mut msgid);
                    open = false;
                }
            }
        }
        if open {
            index.record(&mut lines, &mut msgid);
        }
        index
    }

    fn record(&mut self, lines: &mut Vec<u32>, msgid: &mut Vec<u8>) {
        for line in lines.drain(..) {
            self.sources.insert(line, msgid.clone());
        }
        msgid.clear();
    }

    pub fn get(&self, line: u32) -> Option<&[u8]> {
        self.sources.get(&line).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Msgid,
    Msgstr,
}

enum Index<'t> {
    Template(&'t SourceIndex),
    FirstRead(BTreeMap<u32, Vec<u8>>),
}

impl Index<'_> {
    /// Whether `line` may carry `msgid`; the first sighting of a line claims it.
    fn admits(&mut self, line: u32, msgid: &[u8]) -> bool {
        match self {
            Index::Template(template) => template.get(line) == Some(msgid),
            Index::FirstRead(seen) => match seen.entry(line) {
                Entry::Vacant(slot) => {
                    slot.insert(msgid.to_vec());
                    true
                }
                Entry::Occupied(slot) => slot.get().as_slice() == msgid,
            },
        }
    }
}

struct Parser<'t> {
    index: Index<'t>,
    strings: BTreeMap<u32, Vec<u8>>,
    codepage: u32,
    mismatches: BTreeSet<u32>,
    entry: CatalogEntry,
    open: Option<Field>,
}

/// Parse a catalog. Without a template, the first record to reference a
/// line defines that line's source string.
pub fn parse_catalog(
    bytes: &[u8],
    template: Option<&SourceIndex>,
) -> Result<Catalog, CatalogError> {
    let index = match template {
        Some(template) => Index::Template(template),
        None => Index::FirstRead(BTreeMap::new()),
    };
    let mut parser = Parser {
        index,
        strings: BTreeMap::new(),
        codepage: crate::codepage::CP_UNSPECIFIED,
        mismatches: BTreeSet::new(),
        entry: CatalogEntry::default(),
        open: None,
    };
    for (number, line) in lexer::split_lines(bytes) {
        parser.feed(number, line)?;
    }
    parser.finish()
}

impl Parser<'_> {
    fn feed(&mut self, number: usize, line: &[u8]) -> Result<(), CatalogError> {
        let kind = lexer::classify(line);
        match kind {
            LineKind::References(rest) => {
                self.close();
                self.entry.references.extend(lexer::references(rest));
                return Ok(());
            }
            LineKind::Flags(flags) => {
                self.close();
                self.entry.flags = flags.to_vec();
                return Ok(());
            }
            LineKind::Directive(directive) => {
                self.close();
                self.entry.directive = directive.to_vec();
                return Ok(());
            }
            LineKind::Comment => {
                self.close();
                return Ok(());
            }
            LineKind::Msgid => {
                self.close();
                self.open = Some(Field::Msgid);
            }
            LineKind::Msgstr => self.open = Some(Field::Msgstr),
            LineKind::Other => {}
        }

        let Some(field) = self.open else {
            return Ok(());
        };
        match lexer::quoted(line) {
            Quoted::Text(text) => {
                let target = match field {
                    Field::Msgid => &mut self.entry.msgid,
                    Field::Msgstr => &mut self.entry.msgstr,
                };
                target.extend_from_slice(text);
                Ok(())
            }
            Quoted::Missing if kind == LineKind::Other => {
                self.close();
                Ok(())
            }
            Quoted::Missing | Quoted::Unterminated => {
                Err(CatalogError::TruncatedLiteral { line: number })
            }
        }
    }

    /// Complete the open record, if any.
    fn close(&mut self) {
        if self.open.take().is_none() {
            return;
        }
        let entry = std::mem::take(&mut self.entry);
        let source = if entry.msgstr.is_empty() {
            &entry.msgid
        } else {
            &entry.msgstr
        };
        let decoded = unslash(self.codepage, source);

        for &line in &entry.references {
            if !self.index.admits(line, &entry.msgid) {
                self.mismatches.insert(line);
            }
            self.strings.insert(line, decoded.clone());
        }

        if entry.directive == CODEPAGE_DIRECTIVE {
            self.codepage = lexer::leading_number(&decoded).unwrap_or(0);
        }
    }

    fn finish(mut self) -> Result<Catalog, CatalogError> {
        self.close();
        if !self.mismatches.is_empty() {
            return Err(CatalogError::MismatchedReferences {
                lines: self.mismatches.into_iter().collect(),
            });
        }
        Ok(Catalog::from_parts(self.strings, self.codepage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "msgid \"\"\n\
msgstr \"\"\n\
\"Project-Id-Version: Merge\\n\"\n\
\"Content-Type: text/plain; charset=CP1252\\n\"\n\
\n\
#. Codepage\n\
#: Merge.rc:20\n\
msgid \"1252\"\n\
msgstr \"1252\"\n\
\n";

    fn catalog(text: &str) -> Catalog {
        Catalog::parse(text.as_bytes()).expect("catalog should parse")
    }

    #[test]
    fn parses_simple_entry() {
        let cat = catalog("#: Merge.rc:10\nmsgid \"Hello\"\nmsgstr \"Bonjour\"\n");
        assert_eq!(cat.get(10), Some(&b"Bonjour"[..]));
        assert_eq!(cat.len(), 1);
    }

    #[test]
    fn repeated_identical_block_is_accepted() {
        let text = "#: file:10\nmsgid \"Hello\"\nmsgstr \"Bonjour\"\n\n\
                    #: file:10\nmsgid \"Hello\"\nmsgstr \"Bonjour\"\n";
        let cat = catalog(text);
        assert_eq!(cat.len(), 1);
        assert_eq!(cat.get(10), Some(&b"Bonjour"[..]));
    }

    #[test]
    fn conflicting_source_rejects_whole_catalog() {
        let text = "#: file:5\nmsgid \"Open\"\nmsgstr \"Ouvrir\"\n\n\
                    #: file:10\nmsgid \"Hello\"\nmsgstr \"Bonjour\"\n\n\
                    #: file:10\nmsgid \"Hi\"\nmsgstr \"Bonjour\"\n";
        let err = Catalog::parse(text.as_bytes()).expect_err("must reject");
        assert_eq!(err, CatalogError::MismatchedReferences { lines: vec![10] });
    }

    #[test]
    fn empty_translation_falls_back_to_source() {
        let cat = catalog("#: Merge.rc:7\nmsgid \"Cancel\"\nmsgstr \"\"\n\n");
        assert_eq!(cat.get(7), Some(&b"Cancel"[..]));
    }

    #[test]
    fn multiline_literals_concatenate() {
        let text = "#: Merge.rc:30\nmsgid \"\"\n\"Line one \"\n\"line two\"\nmsgstr \"\"\n\"Ligne un \"\n\"ligne deux\"\n\n";
        let cat = catalog(text);
        assert_eq!(cat.get(30), Some(&b"Ligne un ligne deux"[..]));
    }

    #[test]
    fn one_record_feeds_many_lines() {
        let text = "#: Merge.rc:10\n#: Merge.rc:11 Merge.rc:12\nmsgid \"&File\"\nmsgstr \"&Fichier\"\n";
        let cat = catalog(text);
        for line in [10, 11, 12] {
            assert_eq!(cat.get(line), Some(&b"&Fichier"[..]));
        }
    }

    #[test]
    fn translation_is_unslashed() {
        let cat = catalog("#: Merge.rc:3\nmsgid \"a\\tb\"\nmsgstr \"x\\n\\ty\"\n");
        assert_eq!(cat.get(3), Some(&b"x\n\ty"[..]));
    }

    #[test]
    fn codepage_directive_sets_codepage() {
        let text = format!("{HEADER}#: Merge.rc:40\nmsgid \"Yes\"\nmsgstr \"Oui\"\n");
        let cat = catalog(&text);
        assert_eq!(cat.codepage(), 1252);
        assert_eq!(cat.get(20), Some(&b"1252"[..]));
        assert_eq!(cat.get(40), Some(&b"Oui"[..]));
    }

    #[test]
    fn directive_applies_to_one_record_only() {
        let text = "#. Codepage\n#: Merge.rc:20\nmsgid \"932\"\nmsgstr \"932\"\n\n\
                    #: Merge.rc:21\nmsgid \"Other\"\nmsgstr \"Autre\"\n";
        assert_eq!(catalog(text).codepage(), 932);
    }

    #[test]
    fn codepage_governs_later_escapes() {
        // 0x82 0x5C is a Shift_JIS character whose trail byte is a backslash.
        let mut text = b"#. Codepage\n#: Merge.rc:20\nmsgid \"932\"\nmsgstr \"932\"\n\n".to_vec();
        text.extend_from_slice(b"#: Merge.rc:21\nmsgid \"Table\"\nmsgstr \"\x82\x5Cn\"\n");
        let cat = Catalog::parse(&text).expect("parse");
        assert_eq!(cat.get(21), Some(&b"\x82\x5Cn"[..]));
    }

    #[test]
    fn header_without_references_is_ignored() {
        let cat = catalog(HEADER);
        assert_eq!(cat.len(), 1);
    }

    #[test]
    fn last_record_without_trailing_blank_line_is_kept() {
        let cat = catalog("#: Merge.rc:9\nmsgid \"Save\"\nmsgstr \"Enregistrer\"");
        assert_eq!(cat.get(9), Some(&b"Enregistrer"[..]));
    }

    #[test]
    fn unterminated_literal_is_malformed() {
        let err = Catalog::parse(b"#: Merge.rc:9\nmsgid \"Save\"\nmsgstr \"Enregistrer\n")
            .expect_err("must reject");
        assert_eq!(err, CatalogError::TruncatedLiteral { line: 3 });
    }

    #[test]
    fn parsing_is_deterministic() {
        let text = format!("{HEADER}#: Merge.rc:40\nmsgid \"Yes\"\nmsgstr \"Oui\"\n");
        assert_eq!(catalog(&text), catalog(&text));
    }

    #[test]
    fn template_index_validates_references() {
        let template = SourceIndex::parse(
            b"#: Merge.rc:10\nmsgid \"Hello\"\nmsgstr \"\"\n\n#: Merge.rc:11\nmsgid \"Bye\"\nmsgstr \"\"\n",
        );
        assert_eq!(template.len(), 2);
        assert_eq!(template.get(11), Some(&b"Bye"[..]));

        let ok = Catalog::parse_with_template(
            b"#: Merge.rc:10\nmsgid \"Hello\"\nmsgstr \"Salut\"\n",
            &template,
        )
        .expect("matches template");
        assert_eq!(ok.get(10), Some(&b"Salut"[..]));

        let err = Catalog::parse_with_template(
            b"#: Merge.rc:11\nmsgid \"Hello\"\nmsgstr \"Salut\"\n\n#: Merge.rc:99\nmsgid \"New\"\nmsgstr \"Neu\"\n",
            &template,
        )
        .expect_err("stale catalog");
        assert_eq!(err, CatalogError::MismatchedReferences { lines: vec![11, 99] });
    }
}
