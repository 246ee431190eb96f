use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).kinds()
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        kinds("def ending end"),
        vec![
            TokenKind::Def,
            TokenKind::Ident("ending".into()),
            TokenKind::End,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn predicate_and_bang_method_names() {
    assert_eq!(
        kinds("include? upcase!"),
        vec![
            TokenKind::Ident("include?".into()),
            TokenKind::Ident("upcase!".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn constants_and_file_constant() {
    assert_eq!(
        kinds("File __FILE__"),
        vec![
            TokenKind::Constant("File".into()),
            TokenKind::FileConst,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn numbers() {
    assert_eq!(
        kinds("42 1_000 -7 2.5 1.to_s"),
        vec![
            TokenKind::Int(42),
            TokenKind::Int(1000),
            TokenKind::Int(-7),
            TokenKind::float(2.5),
            TokenKind::Int(1),
            TokenKind::Dot,
            TokenKind::Ident("to_s".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn integer_overflow_is_an_error_token() {
    assert_eq!(
        kinds("99999999999999999999"),
        vec![TokenKind::Error, TokenKind::Eof]
    );
}

#[test]
fn strings_are_cooked() {
    assert_eq!(
        kinds(r#"'a\nb' "a\nb" 'it\'s'"#),
        vec![
            TokenKind::String("a\\nb".into()),
            TokenKind::InterpolatedString("a\nb".into()),
            TokenKind::String("it's".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn interpolation_markers_are_kept_verbatim() {
    assert_eq!(
        kinds(r#""hi #{name}""#),
        vec![
            TokenKind::InterpolatedString("hi #{name}".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn symbols_and_globals() {
    assert_eq!(
        kinds(r#":foo :ok? $LOAD_PATH $: $" $0"#),
        vec![
            TokenKind::Symbol("foo".into()),
            TokenKind::Symbol("ok?".into()),
            TokenKind::GlobalVar("LOAD_PATH".into()),
            TokenKind::GlobalVar(":".into()),
            TokenKind::GlobalVar("\"".into()),
            TokenKind::GlobalVar("0".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comments_are_skipped_but_newlines_kept() {
    assert_eq!(
        kinds("x = 1 # set x\ny"),
        vec![
            TokenKind::Ident("x".into()),
            TokenKind::Eq,
            TokenKind::Int(1),
            TokenKind::Newline,
            TokenKind::Ident("y".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn line_continuation_joins_lines() {
    assert_eq!(
        kinds("puts \\\n  1"),
        vec![
            TokenKind::Ident("puts".into()),
            TokenKind::Int(1),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn shift_and_less_than() {
    assert_eq!(
        kinds("$: << dir; class A < B"),
        vec![
            TokenKind::GlobalVar(":".into()),
            TokenKind::Shl,
            TokenKind::Ident("dir".into()),
            TokenKind::Semicolon,
            TokenKind::Class,
            TokenKind::Constant("A".into()),
            TokenKind::Lt,
            TokenKind::Constant("B".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unknown_characters_become_error_tokens() {
    let tokens = lex("x @ y");
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].span, Span::new(2, 3));
}

#[test]
fn eof_span_points_past_the_end() {
    let tokens = lex("nil");
    assert_eq!(tokens[tokens.len() - 1].span, Span::point(3));
}

#[test]
fn escape_helpers() {
    assert_eq!(cook_double_quoted(r"tab\there \q"), "tab\there q");
    assert_eq!(cook_single_quoted(r"C:\dir \\ \'"), r"C:\dir \ '");
}
