use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn test_span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_span_point() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.start, 7);
}

#[test]
fn test_try_from_range_rejects_oversized() {
    let too_big = (u32::MAX as usize) + 1;
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError::EndTooLarge(too_big))
    );
    assert_eq!(
        Span::try_from_range(too_big..too_big),
        Err(SpanError::StartTooLarge(too_big))
    );
}

#[test]
fn test_line_in() {
    let source = "puts 1\nputs 2\n\nputs 3";
    assert_eq!(Span::point(0).line_in(source), 1);
    assert_eq!(Span::point(7).line_in(source), 2);
    assert_eq!(Span::point(16).line_in(source), 4);
    // Offsets past the end clamp to the last line
    assert_eq!(Span::point(500).line_in(source), 4);
}
