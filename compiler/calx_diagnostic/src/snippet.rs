//! Caret-annotated source snippets.
//!
//! ```text
//! error[E0004]: undefined operator `$`
//!   |
//! 1 | a $ b
//!   |   ^
//! ```

use std::fmt::Write as _;

use calx_ir::Span;

use crate::ErrorCode;

/// 1-based line and column (in chars) of a byte offset.
///
/// Offsets past the end clamp to the end of the source.
pub fn line_col(source: &str, offset: u32) -> (usize, usize) {
    let offset = floor_char_boundary(source, offset as usize);
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = source[line_start..offset].chars().count() + 1;
    (line, col)
}

/// Render `message` with a caret line under `span`.
///
/// Spans that cross a line break are underlined up to the end of their
/// first line. An empty span gets a single caret.
pub fn render(code: ErrorCode, message: &str, source: &str, span: Span) -> String {
    let start = floor_char_boundary(source, span.start as usize);
    let end = floor_char_boundary(source, span.end as usize).max(start);

    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[start..]
        .find('\n')
        .map_or(source.len(), |i| start + i);
    let line_text = &source[line_start..line_end];

    let (line, _) = line_col(source, span.start);
    let gutter = line.to_string();
    let pad = " ".repeat(gutter.len());

    let lead = source[line_start..start].chars().count();
    let width = source[start..end.min(line_end)].chars().count().max(1);

    let mut out = String::new();
    let _ = writeln!(out, "error[{code}]: {message}");
    let _ = writeln!(out, "{pad} |");
    let _ = writeln!(out, "{gutter} | {line_text}");
    let _ = write!(out, "{pad} | {}{}", " ".repeat(lead), "^".repeat(width));
    out
}

fn floor_char_boundary(source: &str, mut offset: usize) -> usize {
    if offset >= source.len() {
        return source.len();
    }
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
