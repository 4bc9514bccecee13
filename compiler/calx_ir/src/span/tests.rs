use super::*;

#[test]
fn test_point_is_zero_width() {
    let span = Span::point(7);
    assert_eq!(span, Span::new(7, 7));
}

#[test]
fn test_merge_covers_both() {
    let a = Span::new(2, 4);
    let b = Span::new(8, 11);
    assert_eq!(a.merge(b), Span::new(2, 11));
    assert_eq!(b.merge(a), Span::new(2, 11));
}

#[test]
fn test_merge_with_point_inside_is_unchanged() {
    let span = Span::new(3, 9);
    assert_eq!(span.merge(Span::point(5)), span);
}

#[test]
fn test_debug_and_display_format() {
    assert_eq!(format!("{:?}", Span::new(0, 3)), "0..3");
    assert_eq!(Span::new(4, 6).to_string(), "4..6");
}
