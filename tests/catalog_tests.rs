// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog parsing against realistic catalog files

use langsel::catalog::{self, Catalog, SourceIndex};
use langsel::error::CatalogError;
use langsel::registry::LangId;
use langsel::translate::{translate_menu, MenuItem, Translate, Translator};

const TEMPLATE: &str = r#"# Template for translations
msgid ""
msgstr ""
"Content-Type: text/plain; charset=CP1252\n"

#: Merge.rc:1
msgid "LANG_ENGLISH, SUBLANG_ENGLISH_US"
msgstr ""

#. Codepage
#: Merge.rc:2
msgid "1252"
msgstr ""

#: Merge.rc:10
#: Merge.rc:44
msgid "&File"
msgstr ""

#: Merge.rc:11
msgid "&Open...\tCtrl+O"
msgstr ""

#: Merge.rc:12
msgid "Compare"
msgstr ""
"#;

const GERMAN: &str = r#"# German translation
msgid ""
msgstr ""
"Content-Type: text/plain; charset=CP1252\n"

#: Merge.rc:1
msgid "LANG_ENGLISH, SUBLANG_ENGLISH_US"
msgstr "LANG_GERMAN, SUBLANG_GERMAN"

#. Codepage
#: Merge.rc:2
msgid "1252"
msgstr "1252"

#: Merge.rc:10
#: Merge.rc:44
msgid "&File"
msgstr "&Datei"

#: Merge.rc:11
msgid "&Open...\tCtrl+O"
msgstr "\326&ffnen...\tStrg+O"

#, fuzzy
#: Merge.rc:12
msgid "Compare"
msgstr ""
"#;

#[test]
fn test_parsing_is_deterministic() {
    let first = Catalog::parse(GERMAN.as_bytes()).expect("catalog should parse");
    let second = Catalog::parse(GERMAN.as_bytes()).expect("catalog should parse");
    assert_eq!(first, second);
}

#[test]
fn test_german_catalog_contents() {
    let catalog = Catalog::parse(GERMAN.as_bytes()).unwrap();
    assert_eq!(catalog.codepage(), 1252);
    assert_eq!(catalog.text(10, 1252).as_deref(), Some("&Datei"));
    assert_eq!(catalog.text(44, 1252).as_deref(), Some("&Datei"));
    assert_eq!(catalog.text(11, 1252).as_deref(), Some("\u{d6}&ffnen...\tStrg+O"));
    // Untranslated entries fall back to the source text.
    assert_eq!(catalog.text(12, 1252).as_deref(), Some("Compare"));
}

#[test]
fn test_catalog_validates_against_template() {
    let template = SourceIndex::parse(TEMPLATE.as_bytes());
    let catalog = Catalog::parse_with_template(GERMAN.as_bytes(), &template).unwrap();
    assert_eq!(catalog.text(10, 1252).as_deref(), Some("&Datei"));
}

#[test]
fn test_stale_catalog_is_rejected_by_template() {
    let template = SourceIndex::parse(TEMPLATE.as_bytes());
    let stale = GERMAN.replace("msgid \"Compare\"", "msgid \"Compare files\"");
    let err = Catalog::parse_with_template(stale.as_bytes(), &template).unwrap_err();
    assert_eq!(err, CatalogError::MismatchedReferences { lines: vec![12] });
}

#[test]
fn test_duplicate_identical_reference_is_accepted() {
    let text = "#: file:10\nmsgid \"Hello\"\nmsgstr \"Bonjour\"\n\n#: file:10\nmsgid \"Hello\"\nmsgstr \"Bonjour\"\n";
    let catalog = Catalog::parse(text.as_bytes()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(10), Some(&b"Bonjour"[..]));
}

#[test]
fn test_conflicting_reference_rejects_whole_catalog() {
    let text = "#: file:9\nmsgid \"Bye\"\nmsgstr \"Salut\"\n\n#: file:10\nmsgid \"Hello\"\nmsgstr \"Bonjour\"\n\n#: file:10\nmsgid \"Hi\"\nmsgstr \"Bonjour\"\n";
    let err = Catalog::parse(text.as_bytes()).unwrap_err();
    assert_eq!(err, CatalogError::MismatchedReferences { lines: vec![10] });
}

#[test]
fn test_probe_reads_declared_language() {
    assert_eq!(
        catalog::probe_bytes(GERMAN.as_bytes()),
        Some(LangId::new(0x07, 0x01))
    );
    assert_eq!(catalog::probe_bytes(TEMPLATE.as_bytes()), None);
}

#[test]
fn test_escape_sequences() {
    assert_eq!(catalog::unslash(0, b"\\n\\tX"), vec![b'\n', b'\t', b'X']);
    assert_eq!(catalog::unslash(1252, b"\\x41\\102"), b"AB");
}

#[test]
fn test_menu_translation_with_parsed_catalog() {
    let catalog = Catalog::parse(GERMAN.as_bytes()).unwrap();
    let translator = Translator::new(Some(&catalog), 1252);
    let mut menu = vec![MenuItem::with_children(
        "Merge.rc:10",
        vec![MenuItem::new("Merge.rc:11"), MenuItem::new("Merge.rc:999")],
    )];
    translate_menu(&translator, &mut menu);

    assert_eq!(menu[0].text, "&Datei");
    assert_eq!(menu[0].children[0].text, "\u{d6}&ffnen...\tStrg+O");
    assert_eq!(menu[0].children[1].text, "Merge.rc:999");
    assert_eq!(translator.load_string("Merge.rc:44"), "&Datei");
}
