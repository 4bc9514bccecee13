//! Numeric literal scanning.
//!
//! Two shapes are recognized:
//!
//! - hexadecimal: `0x` / `0X` followed by at least one hex digit
//! - decimal: digits with at most one `.`, optionally followed by one
//!   exponent `e`/`E`, an optional sign and at least one digit
//!
//! A literal may start with `.` when a digit follows (`.5`). Converting the
//! literal text to a value is left to the caller's literal parser.

use calx_diagnostic::ParseErrorKind;

use crate::cursor::Cursor;

/// Consume one numeric literal starting at the cursor.
pub(crate) fn scan_number(cursor: &mut Cursor<'_>) -> Result<(), ParseErrorKind> {
    if cursor.current() == Some('0') && matches!(cursor.peek(), Some('x' | 'X')) {
        cursor.advance();
        cursor.advance();
        return scan_hex_digits(cursor);
    }
    scan_decimal(cursor)
}

fn scan_hex_digits(cursor: &mut Cursor<'_>) -> Result<(), ParseErrorKind> {
    let start = cursor.pos();
    cursor.eat_while(|c| c.is_ascii_hexdigit());
    if cursor.pos() == start {
        return Err(ParseErrorKind::IllegalHexFormat);
    }
    Ok(())
}

fn scan_decimal(cursor: &mut Cursor<'_>) -> Result<(), ParseErrorKind> {
    cursor.eat_while(|c| c.is_ascii_digit());

    if cursor.eat('.') {
        cursor.eat_while(|c| c.is_ascii_digit());
        if cursor.current() == Some('.') && !cursor.peek().is_some_and(char::is_alphabetic) {
            cursor.advance();
            return Err(ParseErrorKind::RepeatedDecimalPoint);
        }
    }

    if matches!(cursor.current(), Some('e' | 'E')) {
        cursor.advance();
        if matches!(cursor.current(), Some('+' | '-')) {
            cursor.advance();
        }
        let digits = cursor.pos();
        cursor.eat_while(|c| c.is_ascii_digit());
        if cursor.pos() == digits {
            return Err(ParseErrorKind::IllegalScientificFormat);
        }
        if cursor.current() == Some('.') && cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            cursor.advance();
            return Err(ParseErrorKind::IllegalScientificFormat);
        }
    }
    Ok(())
}
