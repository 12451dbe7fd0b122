// SPDX-License-Identifier: PMPL-1.0-or-later

//! The compiled-in language table.
//!
//! One row per `(lang, sublang)` pair the application ships a catalog for.
//! Ids follow the Windows `MAKELANGID` layout so catalogs produced for the
//! Windows build probe to the same values here.
//!
//! ## Adding a language
//!
//! 1. Add a row below with the primary/sub ids and their symbolic names
//! 2. Give it a string-table id for its localized name
//! 3. Fill `native_name` only if it differs from `ascii_name` in more than
//!    accents that every ANSI codepage carries

use super::{LangId, LanguageDescriptor};

const fn row(
    name_id: u32,
    english_name: &'static str,
    native_name: &'static str,
    ascii_name: &'static str,
    primary: u16,
    sub: u16,
    lang: &'static str,
    sublang: &'static str,
    locale: &'static str,
    tag: &'static str,
) -> LanguageDescriptor {
    LanguageDescriptor {
        name_id,
        english_name,
        native_name,
        ascii_name,
        id: LangId::new(primary, sub),
        lang,
        sublang,
        locale,
        tag,
    }
}

#[rustfmt::skip]
pub(super) static LANGUAGES: &[LanguageDescriptor] = &[
    row(33101, "Albanian", "Shqip", "Shqip", 0x1c, 0x01, "LANG_ALBANIAN", "SUBLANG_DEFAULT", "", "sq"),
    row(33102, "Arabic (Egypt)", "\u{0627}\u{0644}\u{0639}\u{0631}\u{0628}\u{064A}\u{0629}", "Al Arabiya", 0x01, 0x03, "LANG_ARABIC", "SUBLANG_ARABIC_EGYPT", "", "ar-EG"),
    row(33103, "Armenian", "\u{0540}\u{0561}\u{0575}\u{0565}\u{0580}\u{0567}\u{0576}", "Hayeren", 0x2b, 0x01, "LANG_ARMENIAN", "SUBLANG_DEFAULT", "", "hy"),
    row(33104, "Basque", "Euskara", "Euskara", 0x2d, 0x01, "LANG_BASQUE", "SUBLANG_DEFAULT", "", "eu"),
    row(33105, "Belarusian", "\u{0411}\u{0435}\u{043B}\u{0430}\u{0440}\u{0443}\u{0441}\u{043A}\u{0430}\u{044F}", "Belaruski", 0x23, 0x01, "LANG_BELARUSIAN", "SUBLANG_DEFAULT", "", "be"),
    row(33106, "Bulgarian", "\u{0411}\u{044A}\u{043B}\u{0433}\u{0430}\u{0440}\u{0441}\u{043A}\u{0438}", "Bulgarian*", 0x02, 0x01, "LANG_BULGARIAN", "SUBLANG_DEFAULT", "", "bg"),
    row(33107, "Catalan", "Catal\u{E0}", "Catala", 0x03, 0x01, "LANG_CATALAN", "SUBLANG_DEFAULT", "", "ca"),
    row(33108, "Chinese (Traditional)", "\u{4E2D}\u{6587} (\u{7E41}\u{9AD4})", "Zhongwen*", 0x04, 0x01, "LANG_CHINESE", "SUBLANG_CHINESE_TRADITIONAL", "cht", "zh-TW"),
    row(33109, "Chinese (Simplified)", "\u{4E2D}\u{6587} (\u{7B80}\u{4F53})", "Zhongwen*", 0x04, 0x02, "LANG_CHINESE", "SUBLANG_CHINESE_SIMPLIFIED", "chs", "zh-CN"),
    row(33110, "Croatian", "Hrvatski", "Hrvatski", 0x1a, 0x01, "LANG_CROATIAN", "SUBLANG_DEFAULT", "", "hr"),
    row(33111, "Czech", "\u{010C}esk\u{FD}", "Cesko", 0x05, 0x01, "LANG_CZECH", "SUBLANG_DEFAULT", "czech", "cs"),
    row(33112, "Danish", "Dansk", "Dansk", 0x06, 0x01, "LANG_DANISH", "SUBLANG_DEFAULT", "danish", "da"),
    row(33113, "Dutch", "Nederlands", "Nederlands", 0x13, 0x01, "LANG_DUTCH", "SUBLANG_DUTCH", "dutch", "nl"),
    row(33114, "English (US)", "English", "English", 0x09, 0x01, "LANG_ENGLISH", "SUBLANG_ENGLISH_US", "american", "en-US"),
    row(33115, "Estonian", "Eesti", "Eesti", 0x25, 0x01, "LANG_ESTONIAN", "SUBLANG_DEFAULT", "", "et"),
    row(33116, "Faeroese", "F\u{F8}royskt", "Foroyskt", 0x38, 0x01, "LANG_FAEROESE", "SUBLANG_DEFAULT", "", "fo"),
    row(33117, "Farsi", "\u{0641}\u{0627}\u{0631}\u{0633}", "Farsi", 0x29, 0x01, "LANG_FARSI", "SUBLANG_DEFAULT", "", "fa"),
    row(33118, "Finnish", "Suomi", "Suomi", 0x0b, 0x01, "LANG_FINNISH", "SUBLANG_DEFAULT", "fin", "fi"),
    row(33119, "French", "Fran\u{E7}ais", "Francais", 0x0c, 0x01, "LANG_FRENCH", "SUBLANG_FRENCH", "fra", "fr"),
    row(33120, "Georgian", "\u{10E5}\u{10D0}\u{10E0}\u{10D7}\u{10E3}\u{10DA}\u{10D8}", "Kartuli", 0x37, 0x01, "LANG_GEORGIAN", "SUBLANG_DEFAULT", "", "ka"),
    row(33121, "German", "Deutsch", "Deutsch", 0x07, 0x01, "LANG_GERMAN", "SUBLANG_GERMAN", "deu", "de"),
    row(33122, "Greek", "\u{0395}\u{03BB}\u{03BB}\u{03B7}\u{03BD}\u{03B9}\u{03BA}\u{03AC}", "Ellenika", 0x08, 0x01, "LANG_GREEK", "SUBLANG_DEFAULT", "greek", "el"),
    row(33123, "Hungarian", "Magyar", "Magyar", 0x0e, 0x01, "LANG_HUNGARIAN", "SUBLANG_DEFAULT", "hun", "hu"),
    row(33124, "Italian", "Italiano", "Italiano", 0x10, 0x01, "LANG_ITALIAN", "SUBLANG_ITALIAN", "ita", "it"),
    row(33125, "Japanese", "\u{65E5}\u{672C}\u{8A9E}", "Nihongo", 0x11, 0x01, "LANG_JAPANESE", "SUBLANG_DEFAULT", "jpn", "ja"),
    row(33126, "Korean", "\u{D55C}\u{AD6D}\u{C5B4}", "Hangul*", 0x12, 0x01, "LANG_KOREAN", "SUBLANG_KOREAN", "kor", "ko"),
    row(33127, "Norwegian (Bokmal)", "Norsk (Bokm\u{E5}l)", "Norsk (Bokmo)*", 0x14, 0x01, "LANG_NORWEGIAN", "SUBLANG_NORWEGIAN_BOKMAL", "nor", "nb"),
    row(33128, "Polish", "Polski", "Polski", 0x15, 0x01, "LANG_POLISH", "SUBLANG_DEFAULT", "plk", "pl"),
    row(33129, "Portuguese", "Portugu\u{EA}s", "Portugues*", 0x16, 0x02, "LANG_PORTUGUESE", "SUBLANG_PORTUGUESE", "ptg", "pt-PT"),
    row(33130, "Portuguese (Brazil)", "Portugu\u{EA}s brasileiro", "Portugues brasileiro*", 0x16, 0x01, "LANG_PORTUGUESE", "SUBLANG_PORTUGUESE_BRAZILIAN", "ptb", "pt-BR"),
    row(33131, "Russian", "\u{0440}\u{0443}\u{0441}\u{0441}\u{043A}\u{0438}\u{0439}", "Ruskiyi*", 0x19, 0x01, "LANG_RUSSIAN", "SUBLANG_DEFAULT", "rus", "ru"),
    row(33132, "Serbian (Latin)", "Srpski", "Srpski", 0x1a, 0x02, "LANG_SERBIAN", "SUBLANG_SERBIAN_LATIN", "", "sr-Latn"),
    row(33133, "Serbian (Cyrillic)", "\u{0421}\u{0440}\u{043F}\u{0441}\u{043A}\u{0438}", "srpski", 0x1a, 0x03, "LANG_SERBIAN", "SUBLANG_SERBIAN_CYRILLIC", "", "sr-Cyrl"),
    row(33134, "Slovak", "Sloven\u{010D}ina", "Slovencina*", 0x1b, 0x01, "LANG_SLOVAK", "SUBLANG_DEFAULT", "sky", "sk"),
    row(33135, "Slovenian", "Sloven\u{0161}\u{010D}ina", "Slovenscina*", 0x24, 0x01, "LANG_SLOVENIAN", "SUBLANG_DEFAULT", "", "sl"),
    row(33136, "Spanish (Modern)", "Espa\u{F1}ol (moderno)", "Espanol (moderno)", 0x0a, 0x03, "LANG_SPANISH", "SUBLANG_SPANISH_MODERN", "esn", "es"),
    row(33137, "Swedish", "Svenska", "Svenska", 0x1d, 0x01, "LANG_SWEDISH", "SUBLANG_SWEDISH", "sve", "sv"),
    row(33138, "Turkish", "T\u{FC}rk\u{E7}e", "Turkce", 0x1f, 0x01, "LANG_TURKISH", "SUBLANG_DEFAULT", "trk", "tr"),
    row(33139, "Urdu (Pakistan)", "\u{0627}\u{0631}\u{062F}\u{0648}", "Urdu (Pakistan)", 0x20, 0x01, "LANG_URDU", "SUBLANG_URDU_PAKISTAN", "", "ur-PK"),
    row(33140, "Urdu (India)", "\u{0627}\u{0631}\u{062F}\u{0648}", "Urdu (India)", 0x20, 0x02, "LANG_URDU", "SUBLANG_URDU_INDIA", "", "ur-IN"),
];
