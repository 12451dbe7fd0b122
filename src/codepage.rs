// SPDX-License-Identifier: PMPL-1.0-or-later

//! Windows codepage numbers mapped onto `encoding_rs` encodings.
//!
//! Catalogs store narrow strings in whatever codepage their `Codepage`
//! record declares. The parser needs to know which bytes start a
//! double-byte character, and the translator needs to widen the stored
//! bytes into Rust strings.

use encoding_rs::Encoding;

/// Codepage value meaning "not declared by the catalog".
pub const CP_UNSPECIFIED: u32 = 0;

/// Codepage used when nothing better is known.
pub const CP_DEFAULT_ANSI: u32 = 1252;

pub const CP_UTF8: u32 = 65001;

/// Resolve a Windows codepage number to an encoding.
pub fn encoding_for(codepage: u32) -> Option<&'static Encoding> {
    let encoding = match codepage {
        866 => encoding_rs::IBM866,
        874 => encoding_rs::WINDOWS_874,
        932 => encoding_rs::SHIFT_JIS,
        936 => encoding_rs::GBK,
        949 => encoding_rs::EUC_KR,
        950 => encoding_rs::BIG5,
        1250 => encoding_rs::WINDOWS_1250,
        1251 => encoding_rs::WINDOWS_1251,
        1252 => encoding_rs::WINDOWS_1252,
        1253 => encoding_rs::WINDOWS_1253,
        1254 => encoding_rs::WINDOWS_1254,
        1255 => encoding_rs::WINDOWS_1255,
        1256 => encoding_rs::WINDOWS_1256,
        1257 => encoding_rs::WINDOWS_1257,
        1258 => encoding_rs::WINDOWS_1258,
        10000 => encoding_rs::MACINTOSH,
        20866 => encoding_rs::KOI8_R,
        21866 => encoding_rs::KOI8_U,
        // ISO-8859-1 is decoded as its windows-1252 superset, as browsers do.
        28591 => encoding_rs::WINDOWS_1252,
        28592 => encoding_rs::ISO_8859_2,
        28593 => encoding_rs::ISO_8859_3,
        28594 => encoding_rs::ISO_8859_4,
        28595 => encoding_rs::ISO_8859_5,
        28596 => encoding_rs::ISO_8859_6,
        28597 => encoding_rs::ISO_8859_7,
        28598 => encoding_rs::ISO_8859_8,
        28603 => encoding_rs::ISO_8859_13,
        28605 => encoding_rs::ISO_8859_15,
        54936 => encoding_rs::GB18030,
        CP_UTF8 => encoding_rs::UTF_8,
        _ => return None,
    };
    Some(encoding)
}

/// True when `byte` opens a two-byte character in `codepage`.
///
/// Only the East Asian double-byte codepages have lead bytes; every other
/// codepage (including UTF-8 and "unspecified") answers `false`.
pub fn is_lead_byte(codepage: u32, byte: u8) -> bool {
    match codepage {
        932 => matches!(byte, 0x81..=0x9F | 0xE0..=0xFC),
        936 | 949 | 950 => matches!(byte, 0x81..=0xFE),
        1361 => matches!(byte, 0x84..=0xD3 | 0xD8..=0xDE | 0xE0..=0xF9),
        _ => false,
    }
}

/// Widen narrow catalog bytes. Unknown codepages fall back to `fallback`,
/// and then to windows-1252.
pub fn decode(codepage: u32, fallback: u32, bytes: &[u8]) -> String {
    let encoding = encoding_for(codepage)
        .or_else(|| encoding_for(fallback))
        .unwrap_or(encoding_rs::WINDOWS_1252);
    let (text, _had_errors) = encoding.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Narrow `text` into `codepage`; `None` if any character has no mapping.
pub fn encode(codepage: u32, text: &str) -> Option<Vec<u8>> {
    let encoding = encoding_for(codepage)?;
    let (bytes, _, unmappable) = encoding.encode(text);
    if unmappable {
        None
    } else {
        Some(bytes.into_owned())
    }
}

/// Whether every character of `text` has a representation in `codepage`.
pub fn can_represent(codepage: u32, text: &str) -> bool {
    encode(codepage, text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_jis_lead_bytes() {
        assert!(is_lead_byte(932, 0x82));
        assert!(is_lead_byte(932, 0xE0));
        assert!(!is_lead_byte(932, 0xA1)); // half-width katakana
        assert!(!is_lead_byte(932, b'\\'));
    }

    #[test]
    fn single_byte_codepages_have_no_lead_bytes() {
        for byte in 0x80..=0xFFu8 {
            assert!(!is_lead_byte(1252, byte));
            assert!(!is_lead_byte(CP_UNSPECIFIED, byte));
        }
    }

    #[test]
    fn decode_windows_1252() {
        assert_eq!(decode(1252, 0, b"Fran\xE7ais"), "Français");
    }

    #[test]
    fn decode_unknown_codepage_uses_fallback() {
        assert_eq!(decode(4242, 1251, b"\xC4\xE0"), "Да");
    }

    #[test]
    fn decode_shift_jis() {
        // "日本" in Shift_JIS
        assert_eq!(decode(932, 0, b"\x93\xFA\x96\x7B"), "日本");
    }

    #[test]
    fn representability() {
        assert!(can_represent(1252, "Français"));
        assert!(!can_represent(1252, "日本語"));
        assert!(can_represent(932, "日本語"));
        assert!(!can_represent(31337, "plain"));
    }
}
