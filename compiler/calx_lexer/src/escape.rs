//! String literal scanning and escape processing.

use calx_diagnostic::ParseErrorKind;

use crate::cursor::Cursor;

/// Scan a double-quoted string starting at the opening quote.
///
/// On success the cursor sits after the closing quote and the unescaped
/// content is returned. On failure the cursor sits after the offending
/// character (or at EOF).
pub(crate) fn scan_string(cursor: &mut Cursor<'_>) -> Result<String, ParseErrorKind> {
    debug_assert_eq!(cursor.current(), Some('"'));
    cursor.advance();

    let mut content = String::new();
    loop {
        let Some(c) = cursor.current() else {
            return Err(ParseErrorKind::UnterminatedString);
        };
        cursor.advance();
        match c {
            '"' => return Ok(content),
            '\\' => {
                let Some(escaped) = cursor.current() else {
                    return Err(ParseErrorKind::UnterminatedString);
                };
                cursor.advance();
                content.push(unescape(escaped)?);
            }
            _ => content.push(c),
        }
    }
}

/// The character an escape sequence `\c` stands for.
pub(crate) fn unescape(c: char) -> Result<char, ParseErrorKind> {
    match c {
        '\\' => Ok('\\'),
        '"' => Ok('"'),
        '\'' => Ok('\''),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        't' => Ok('\t'),
        'b' => Ok('\u{8}'),
        'f' => Ok('\u{c}'),
        other => Err(ParseErrorKind::UnknownEscape(other)),
    }
}

/// Quote and escape `content` so that scanning it yields `content` again.
pub fn quote(content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 2);
    out.push('"');
    for c in content.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}
