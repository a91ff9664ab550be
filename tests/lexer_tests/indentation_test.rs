use pretty_assertions::assert_eq;
use steps_lexer::{tokenize, LexError, ScanConfig, Scanner, TokenKind};

use super::{expected, significant_kinds};

const NESTED: &str = "\
fn outer(x)
    if x
        emit x
    # trailing comment at a shallower column

    return x
fn next()
";

#[test]
fn test_nested_blocks() {
    assert_eq!(
        significant_kinds(NESTED),
        expected(
            "KW_FN IDENTIFIER LEFT_PARENTHESIS IDENTIFIER RIGHT_PARENTHESIS \
             INDENT KW_IF IDENTIFIER \
             INDENT KW_EMIT IDENTIFIER \
             DEDENT KW_RETURN IDENTIFIER \
             DEDENT KW_FN IDENTIFIER OP_PARENTHESES EOF"
        )
    );
}

#[test]
fn test_synthetic_tokens_precede_leading_white_space() {
    let tokens: Vec<_> = tokenize("a\n  b\nc").collect();
    let kinds: Vec<_> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::LowerIdentifier,
            TokenKind::LineFeed,
            TokenKind::Indent,
            TokenKind::WhiteSpace,
            TokenKind::LowerIdentifier,
            TokenKind::LineFeed,
            TokenKind::Dedent,
            TokenKind::LowerIdentifier,
            TokenKind::EndOfFile,
        ]
    );
    let dedent = tokens[6];
    assert_eq!((dedent.span.start_line, dedent.span.start_column), (3, 1));
    assert_eq!(dedent.span.start_offset, 6);
    assert!(dedent.span.is_empty());
}

#[test]
fn test_tabs_advance_to_tab_stops() {
    // a tab and eight spaces are the same width with the default tab width
    assert_eq!(
        significant_kinds("a\n\tb\n        c\nd"),
        expected("IDENTIFIER INDENT IDENTIFIER IDENTIFIER DEDENT IDENTIFIER EOF")
    );

    let config = ScanConfig {
        tab_width: 2,
        skip_trivia: true,
        ..ScanConfig::default()
    };
    let kinds: Vec<_> = Scanner::new("a\n \tb\n  c")
        .with_config(config)
        .map(|token| token.kind.to_string())
        .collect();
    assert_eq!(kinds, expected("IDENTIFIER INDENT IDENTIFIER IDENTIFIER DEDENT EOF"));
}

#[test]
fn test_inconsistent_dedent_keeps_pairing() {
    let source = "a\n    b\n        c\n  d\ne";
    assert_eq!(
        significant_kinds(source),
        expected(
            "IDENTIFIER INDENT IDENTIFIER INDENT IDENTIFIER \
             DEDENT DEDENT ERR_INDENTATION IDENTIFIER IDENTIFIER EOF"
        )
    );

    let mut scanner = tokenize(source).with_origin("layout.steps");
    scanner.by_ref().for_each(drop);
    let diagnostics = scanner.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    match &diagnostics[0].error {
        LexError::InconsistentIndentation {
            width,
            enclosing,
            span,
        } => {
            assert_eq!((*width, *enclosing), (2, 0));
            assert_eq!((span.start_line, span.start_column), (4, 1));
        }
        other => panic!("unexpected diagnostic {other}"),
    }
}

#[test]
fn test_indent_from_resynchronized_level() {
    // after resynchronizing on width 2, width 4 opens a real block that must be closed
    assert_eq!(
        significant_kinds("a\n    b\n  c\n    d\n"),
        expected(
            "IDENTIFIER INDENT IDENTIFIER DEDENT ERR_INDENTATION IDENTIFIER \
             INDENT IDENTIFIER DEDENT EOF"
        )
    );
}

#[test]
fn test_verbatim_line_breaks_are_not_line_boundaries() {
    let source = "x = \"\"\"first\n        second\"\"\"\ny";
    assert_eq!(
        significant_kinds(source),
        expected("IDENTIFIER OP_EQ VERBATIM_STRING_LITERAL IDENTIFIER EOF")
    );
}

#[test]
fn test_crlf_and_cr_line_breaks() {
    assert_eq!(
        significant_kinds("a\r\n  b\r  c\rd"),
        expected("IDENTIFIER INDENT IDENTIFIER IDENTIFIER DEDENT IDENTIFIER EOF")
    );
}
