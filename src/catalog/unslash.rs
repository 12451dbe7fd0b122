// SPDX-License-Identifier: PMPL-1.0-or-later

//! C-style escape decoding for catalog literals.

use crate::codepage;

/// Convert `\n`, `\t`, `\x41`, `\101` and friends into the bytes they name.
///
/// Raw bytes that lead a double-byte character in `codepage` take their
/// trail byte along verbatim, so a trail byte of `0x5C` is never mistaken
/// for the start of an escape.
pub fn unslash(codepage: u32, input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut pos = 0;

    while pos < input.len() {
        let byte = input[pos];
        pos += 1;

        if byte != b'\\' || pos == input.len() {
            pos = push_char(codepage, input, pos, byte, &mut out);
            continue;
        }

        let escape = input[pos];
        pos += 1;
        match escape {
            b'a' => out.push(0x07),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0C),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'v' => out.push(0x0B),
            b'x' => match number(&input[pos..], 16, usize::MAX) {
                Some((value, used)) => {
                    out.push(value);
                    pos += used;
                }
                None => out.push(b'x'),
            },
            b'0'..=b'7' => {
                // The escape byte itself is the first octal digit.
                if let Some((value, used)) = number(&input[pos - 1..], 8, 3) {
                    out.push(value);
                    pos += used - 1;
                }
            }
            other => pos = push_char(codepage, input, pos, other, &mut out),
        }
    }
    out
}

/// Push one decoded byte, plus its trail byte when it leads a DBCS character.
fn push_char(codepage: u32, input: &[u8], pos: usize, byte: u8, out: &mut Vec<u8>) -> usize {
    out.push(byte);
    if byte & 0x80 != 0 && codepage::is_lead_byte(codepage, byte) && pos < input.len() {
        out.push(input[pos]);
        return pos + 1;
    }
    pos
}

/// Digits of `radix` at the start of `bytes`, at most `max_digits` of them.
/// The value wraps to a byte, as a C `char` would.
fn number(bytes: &[u8], radix: u32, max_digits: usize) -> Option<(u8, usize)> {
    let mut value: u32 = 0;
    let mut used = 0;
    for &byte in bytes.iter().take(max_digits) {
        let Some(digit) = (byte as char).to_digit(radix) else {
            break;
        };
        value = value.wrapping_mul(radix).wrapping_add(digit);
        used += 1;
    }
    if used == 0 {
        None
    } else {
        Some(((value & 0xFF) as u8, used))
    }
}
