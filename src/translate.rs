// SPDX-License-Identifier: PMPL-1.0-or-later

//! Applying a catalog to UI text.
//!
//! Resource strings in the host are compiled with placeholders of the form
//! `Merge.rc:<line>`. Anything that is not a placeholder, or whose line has
//! no translation, is shown as-is.

use crate::catalog::Catalog;

pub const PLACEHOLDER_PREFIX: &str = "Merge.rc:";

/// Line number named by a placeholder, ignoring anything after the digits.
pub fn placeholder_line(text: &str) -> Option<u32> {
    let rest = text.strip_prefix(PLACEHOLDER_PREFIX)?.trim_start();
    let end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok().filter(|line| *line > 0)
}

pub trait Translate {
    /// Translated text for a resource-script line, if the catalog has one.
    fn translate_line(&self, line: u32) -> Option<String>;

    fn translate_text(&self, text: &str) -> Option<String> {
        self.translate_line(placeholder_line(text)?)
    }

    /// Resource string as it should be displayed.
    fn load_string(&self, text: &str) -> String {
        self.translate_text(text).unwrap_or_else(|| text.to_string())
    }
}

/// Lookup view over the active catalog; with no catalog nothing translates.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: Option<&'a Catalog>,
    ansi_codepage: u32,
}

impl<'a> Translator<'a> {
    pub fn new(catalog: Option<&'a Catalog>, ansi_codepage: u32) -> Self {
        Self {
            catalog,
            ansi_codepage,
        }
    }

    pub fn is_active(&self) -> bool {
        self.catalog.is_some()
    }
}

impl Translate for Translator<'_> {
    fn translate_line(&self, line: u32) -> Option<String> {
        self.catalog?.text(line, self.ansi_codepage)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuItem {
    pub text: String,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(text: impl Into<String>, children: Vec<MenuItem>) -> Self {
        Self {
            text: text.into(),
            children,
        }
    }
}

/// Translate a menu tree in place, submenus included.
pub fn translate_menu<T: Translate + ?Sized>(translator: &T, items: &mut [MenuItem]) {
    for item in items {
        translate_menu(translator, &mut item.children);
        if let Some(text) = translator.translate_text(&item.text) {
            item.text = text;
        }
    }
}

/// Translate a dialog's caption and control texts in place.
pub fn translate_dialog<'t, T, I>(translator: &T, texts: I)
where
    T: Translate + ?Sized,
    I: IntoIterator<Item = &'t mut String>,
{
    for text in texts {
        if let Some(translated) = translator.translate_text(text) {
            *text = translated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn french() -> Catalog {
        let mut strings = BTreeMap::new();
        strings.insert(10, b"&Fichier".to_vec());
        strings.insert(11, b"&Ouvrir...".to_vec());
        strings.insert(12, b"Pr\xE9f\xE9rences".to_vec());
        strings.insert(13, Vec::new());
        Catalog::from_parts(strings, 1252)
    }

    #[test]
    fn placeholder_parsing() {
        assert_eq!(placeholder_line("Merge.rc:12"), Some(12));
        assert_eq!(placeholder_line("Merge.rc: 7 trailing"), Some(7));
        assert_eq!(placeholder_line("Merge.rc:0"), None);
        assert_eq!(placeholder_line("Merge.rc:"), None);
        assert_eq!(placeholder_line("merge.rc:12"), None);
        assert_eq!(placeholder_line("&Open"), None);
    }

    #[test]
    fn load_string_falls_back_to_original() {
        let catalog = french();
        let tr = Translator::new(Some(&catalog), 1252);
        assert_eq!(tr.load_string("Merge.rc:12"), "Pr\u{e9}f\u{e9}rences");
        assert_eq!(tr.load_string("Merge.rc:13"), "Merge.rc:13");
        assert_eq!(tr.load_string("Merge.rc:99"), "Merge.rc:99");
        assert_eq!(tr.load_string("Plain"), "Plain");
    }

    #[test]
    fn inactive_translator_changes_nothing() {
        let tr = Translator::new(None, 1252);
        assert!(!tr.is_active());
        assert_eq!(tr.load_string("Merge.rc:10"), "Merge.rc:10");
    }

    #[test]
    fn menus_are_translated_recursively() {
        let catalog = french();
        let tr = Translator::new(Some(&catalog), 1252);
        let mut menu = vec![MenuItem::with_children(
            "Merge.rc:10",
            vec![MenuItem::new("Merge.rc:11"), MenuItem::new("-")],
        )];
        translate_menu(&tr, &mut menu);
        assert_eq!(menu[0].text, "&Fichier");
        assert_eq!(menu[0].children[0].text, "&Ouvrir...");
        assert_eq!(menu[0].children[1].text, "-");
    }

    #[test]
    fn dialog_texts_are_translated() {
        let catalog = french();
        let tr = Translator::new(Some(&catalog), 1252);
        let mut texts = vec!["Merge.rc:12".to_string(), "OK".to_string()];
        translate_dialog(&tr, texts.iter_mut());
        assert_eq!(texts, vec!["Pr\u{e9}f\u{e9}rences".to_string(), "OK".to_string()]);
    }
}
