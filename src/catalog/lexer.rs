// SPDX-License-Identifier: PMPL-1.0-or-later

//! Line classification shared by the catalog parser, the template index
//! and the language probe.

/// What a physical catalog line introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// `#:` followed by `file:line` tokens.
    References(&'a [u8]),
    /// `#,` followed by comma separated flags.
    Flags(&'a [u8]),
    /// `#.` followed by an extracted comment such as `Codepage`.
    Directive(&'a [u8]),
    /// Any other `#` comment.
    Comment,
    Msgid,
    Msgstr,
    /// Continuation literal, blank line, anything else.
    Other,
}

/// Quoted content of a line: between its first and last `"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Quoted<'a> {
    Text(&'a [u8]),
    Missing,
    Unterminated,
}

pub(crate) fn split_lines(bytes: &[u8]) -> impl Iterator<Item = (usize, &[u8])> {
    let trimmed = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let empty = trimmed.is_empty() && bytes.is_empty();
    trimmed
        .split(|byte| *byte == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(move |_| !empty)
}

pub(crate) fn classify(line: &[u8]) -> LineKind<'_> {
    if let Some(rest) = eat_prefix(line, b"#:") {
        LineKind::References(rest)
    } else if let Some(rest) = eat_prefix(line, b"#,") {
        LineKind::Flags(trim(rest))
    } else if let Some(rest) = eat_prefix(line, b"#.") {
        LineKind::Directive(trim(rest))
    } else if line.first() == Some(&b'#') {
        LineKind::Comment
    } else if eat_prefix(line, b"msgid ").is_some() {
        LineKind::Msgid
    } else if eat_prefix(line, b"msgstr ").is_some() {
        LineKind::Msgstr
    } else {
        LineKind::Other
    }
}

pub(crate) fn quoted(line: &[u8]) -> Quoted<'_> {
    let first = line.iter().position(|byte| *byte == b'"');
    let last = line.iter().rposition(|byte| *byte == b'"');
    match (first, last) {
        (Some(open), Some(close)) if close > open => Quoted::Text(&line[open + 1..close]),
        (Some(_), Some(_)) => Quoted::Unterminated,
        _ => Quoted::Missing,
    }
}

/// Line keys named by a `#:` directive: the number after the first `:` of
/// each whitespace separated token.
pub(crate) fn references(rest: &[u8]) -> Vec<u32> {
    rest.split(|byte| byte.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let colon = token.iter().position(|byte| *byte == b':')?;
            leading_number(&token[colon + 1..])
        })
        .collect()
}

/// Decimal number at the start of `bytes`, after optional blanks.
pub(crate) fn leading_number(bytes: &[u8]) -> Option<u32> {
    let digits: Vec<u8> = bytes
        .iter()
        .skip_while(|byte| **byte == b' ' || **byte == b'\t')
        .take_while(|byte| byte.is_ascii_digit())
        .copied()
        .collect();
    std::str::from_utf8(&digits).ok()?.parse().ok()
}

fn eat_prefix<'a>(text: &'a [u8], prefix: &[u8]) -> Option<&'a [u8]> {
    if text.len() >= prefix.len() && text[..prefix.len()].eq_ignore_ascii_case(prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}

fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|byte| !byte.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|byte| !byte.is_ascii_whitespace())
        .map_or(start, |pos| pos + 1);
    &bytes[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_directives_case_insensitively() {
        assert_eq!(classify(b"#: Merge.rc:10"), LineKind::References(b" Merge.rc:10"));
        assert_eq!(classify(b"#, c-format "), LineKind::Flags(b"c-format"));
        assert_eq!(classify(b"#.  Codepage\t"), LineKind::Directive(b"Codepage"));
        assert_eq!(classify(b"# translator note"), LineKind::Comment);
        assert_eq!(classify(b"MSGID \"x\""), LineKind::Msgid);
        assert_eq!(classify(b"msgstr \"y\""), LineKind::Msgstr);
        assert_eq!(classify(b"\"continued\""), LineKind::Other);
        assert_eq!(classify(b"msgid_plural \"z\""), LineKind::Other);
    }

    #[test]
    fn quoted_takes_outermost_quotes() {
        assert_eq!(quoted(b"msgid \"a \\\"b\\\" c\""), Quoted::Text(b"a \\\"b\\\" c"));
        assert_eq!(quoted(b"msgstr \"\""), Quoted::Text(b""));
        assert_eq!(quoted(b""), Quoted::Missing);
        assert_eq!(quoted(b"\"open"), Quoted::Unterminated);
    }

    #[test]
    fn references_parse_every_token() {
        assert_eq!(references(b" Merge.rc:10"), vec![10]);
        assert_eq!(references(b" Merge.rc:10 Merge.rc:20\tother.c:7:3"), vec![10, 20, 7]);
        assert_eq!(references(b" noline Merge.rc:"), Vec::<u32>::new());
    }

    #[test]
    fn split_lines_strips_carriage_returns() {
        let lines: Vec<_> = split_lines(b"a\r\nb\n\nc").collect();
        assert_eq!(lines, vec![(1, &b"a"[..]), (2, &b"b"[..]), (3, &b""[..]), (4, &b"c"[..])]);
        assert_eq!(split_lines(b"").count(), 0);
        assert_eq!(split_lines(b"x\n").count(), 1);
    }

    #[test]
    fn leading_number_skips_blanks() {
        assert_eq!(leading_number(b" 932"), Some(932));
        assert_eq!(leading_number(b"1252 (Latin)"), Some(1252));
        assert_eq!(leading_number(b"none"), None);
    }
}
