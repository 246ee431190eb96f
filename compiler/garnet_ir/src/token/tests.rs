use super::*;
use pretty_assertions::assert_eq;

#[test]
fn float_tokens_compare_by_bits() {
    assert_eq!(TokenKind::float(1.5), TokenKind::float(1.5));
    assert_ne!(TokenKind::float(1.5), TokenKind::float(2.5));
}

#[test]
fn terminators() {
    assert!(TokenKind::Newline.is_terminator());
    assert!(TokenKind::Semicolon.is_terminator());
    assert!(!TokenKind::End.is_terminator());
}

#[test]
fn debug_output_is_compact() {
    assert_eq!(format!("{:?}", TokenKind::Ident("puts".into())), "Ident(puts)");
    assert_eq!(format!("{:?}", TokenKind::End), "end");
    assert_eq!(format!("{:?}", TokenKind::float(0.5)), "Float(0.5)");
}

#[test]
fn token_list_push_and_index() {
    let mut list = TokenList::new();
    assert!(list.is_empty());
    list.push(Token::new(TokenKind::Int(1), Span::new(0, 1)));
    list.push(Token::dummy(TokenKind::Eof));
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].span, Span::new(0, 1));
    assert_eq!(list.kinds(), vec![TokenKind::Int(1), TokenKind::Eof]);
    assert!(list.get(2).is_none());
}
