//! Character cursor over expression source.
//!
//! The cursor walks the source one `char` at a time and tracks a byte
//! offset. It is [`Copy`], so callers snapshot it for lookahead instead of
//! keeping a peek buffer.

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: u32,
}

impl<'a> Cursor<'a> {
    /// Sources longer than `u32::MAX` bytes are rejected by the tokenizer
    /// before a cursor is built.
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.pos as usize..]
    }

    /// The character at the current position, `None` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after the current one.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance past the current character. No-op at EOF.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if let Some(c) = self.current() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "char width is at most 4 bytes"
            )]
            let width = c.len_utf8() as u32;
            self.pos += width;
        }
    }

    /// Advance while `pred` holds for the current character.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Advance if the current character is `expected`.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// The first non-whitespace character at or after the current position.
    pub(crate) fn next_non_blank(&self) -> Option<char> {
        self.rest().chars().find(|c| !c.is_whitespace())
    }

    pub(crate) fn slice(&self, start: u32, end: u32) -> &'a str {
        &self.source[start as usize..end as usize]
    }

    pub(crate) fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }
}

#[cfg(test)]
mod tests;
