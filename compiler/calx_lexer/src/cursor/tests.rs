use super::*;

#[test]
fn current_and_peek() {
    let cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.peek(), Some('b'));
}

#[test]
fn advance_through_multibyte() {
    let mut cursor = Cursor::new("é1");
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), Some('1'));
    cursor.advance();
    assert_eq!(cursor.current(), None);
    cursor.advance();
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_while_and_slice() {
    let mut cursor = Cursor::new("abc12+");
    cursor.eat_while(char::is_alphabetic);
    assert_eq!(cursor.slice_from(0), "abc");
    cursor.eat_while(|c| c.is_ascii_digit());
    assert_eq!(cursor.slice(3, cursor.pos()), "12");
    assert!(cursor.eat('+'));
    assert!(!cursor.eat('+'));
}

#[test]
fn next_non_blank_does_not_move() {
    let cursor = Cursor::new("  \t(");
    assert_eq!(cursor.next_non_blank(), Some('('));
    assert_eq!(cursor.pos(), 0);
    assert_eq!(Cursor::new("   ").next_non_blank(), None);
}

#[test]
fn snapshot_is_independent() {
    let mut cursor = Cursor::new("xy");
    let snapshot = cursor;
    cursor.advance();
    assert_eq!(snapshot.current(), Some('x'));
    assert_eq!(cursor.current(), Some('y'));
}
