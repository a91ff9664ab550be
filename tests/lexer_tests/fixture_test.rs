use pretty_assertions::assert_eq;
use steps_lexer::{tokenize, Diagnostic, LexError, ScanConfig, TokenKind, TokenizedBuffer};

use super::{all_kinds, expected, significant_kinds};

#[test]
fn test_identifier_classification() {
    let cases = [
        ("x_1", "IDENTIFIER EOF"),
        ("x__1", "ERR_IDENTIFIER EOF"),
        ("__1", "ERR_IDENTIFIER EOF"),
        ("x_", "ERR_IDENTIFIER EOF"),
        ("_dummy", "DUMMY_IDENTIFIER EOF"),
        ("_", "DUMMY_IDENTIFIER EOF"),
        ("_1", "DUMMY_IDENTIFIER EOF"),
        ("Point", "UPPER_IDENTIFIER EOF"),
        ("ärger", "IDENTIFIER EOF"),
        ("Ärger", "UPPER_IDENTIFIER EOF"),
        ("e\u{301}te\u{301}", "IDENTIFIER EOF"),
        ("\u{301}", "ERR_CHARACTER EOF"),
        ("\u{0663}", "ERR_CHARACTER EOF"),
    ];
    for (source, names) in cases {
        assert_eq!(all_kinds(source), expected(names), "{source:?}");
    }
}

#[test]
fn test_scenarios() {
    assert_eq!(significant_kinds("if x"), expected("KW_IF IDENTIFIER EOF"));
    assert_eq!(all_kinds(""), expected("EOF"));
    assert_eq!(all_kinds("\u{feff}"), all_kinds(""));
    assert_eq!(all_kinds("fn"), expected("KW_FN EOF"));
}

#[test]
fn test_keywords_against_identifiers() {
    assert_eq!(
        significant_kinds("fn fnord iffy if_then xor_ while"),
        expected("KW_FN IDENTIFIER IDENTIFIER IDENTIFIER ERR_IDENTIFIER KW_WHILE EOF")
    );
}

#[test]
fn test_operators_and_punctuation() {
    let cases = [
        ("a (*) b", "IDENTIFIER OP_CIRCLED_MULTIPLY IDENTIFIER EOF"),
        ("a * -b", "IDENTIFIER OP_MULTIPLY OP_MINUS IDENTIFIER EOF"),
        (
            "f(x, y)",
            "IDENTIFIER LEFT_PARENTHESIS IDENTIFIER COMMA IDENTIFIER RIGHT_PARENTHESIS EOF",
        ),
        ("f()", "IDENTIFIER OP_PARENTHESES EOF"),
        (
            "x := y [<=] 3",
            "IDENTIFIER OP_ASSIGN IDENTIFIER OP_BOXED_LEQ INTEGER_LITERAL EOF",
        ),
        ("a..b...c", "IDENTIFIER DOTDOT IDENTIFIER ELLIPSIS IDENTIFIER EOF"),
        ("x -> y", "IDENTIFIER RIGHT_ARROW IDENTIFIER EOF"),
        ("a <> b >< c", "IDENTIFIER OP_NEQ IDENTIFIER OP_CROSS IDENTIFIER EOF"),
        (
            "@x; $y",
            "RESERVED_COMMERCIAL_AT IDENTIFIER RESERVED_SEMICOLON RESERVED_DOLLAR IDENTIFIER EOF",
        ),
    ];
    for (source, names) in cases {
        assert_eq!(significant_kinds(source), expected(names), "{source:?}");
    }
}

#[test]
fn test_literals() {
    let source = r#"'\n' "tab\there" """raw "quoted" text""" '\{#263A}' "\{LATIN SMALL LETTER A}""#;
    assert_eq!(
        significant_kinds(source),
        expected(
            "CHARACTER_LITERAL STRING_LITERAL VERBATIM_STRING_LITERAL CHARACTER_LITERAL \
             STRING_LITERAL EOF"
        )
    );
}

#[test]
fn test_numbers() {
    assert_eq!(
        significant_kinds("1_000 2r1010 16rCAFE 10r7 1.5e-3 4k 2.5u 3n 6.0M"),
        expected(
            "INTEGER_LITERAL INTEGER_LITERAL INTEGER_LITERAL INTEGER_LITERAL FLOAT_LITERAL \
             INTEGER_LITERAL FLOAT_LITERAL FLOAT_LITERAL FLOAT_LITERAL EOF"
        )
    );
    assert_eq!(
        significant_kinds("2r102 33r1 1__0 7_ 16r42k"),
        expected("ERR_NUMBER ERR_NUMBER ERR_NUMBER ERR_NUMBER ERR_NUMBER EOF")
    );
}

#[test]
fn test_trivia_is_kept() {
    assert_eq!(
        all_kinds("x # note\r\ny"),
        expected("IDENTIFIER WHITE_SPACE COMMENT END_OF_LINE IDENTIFIER EOF")
    );
}

#[test]
fn test_error_recovery_resumes() {
    let source = "a ? \"open\nb 'xy' c";
    assert_eq!(
        significant_kinds(source),
        expected("IDENTIFIER ERR_CHARACTER ERR_LITERAL IDENTIFIER ERR_LITERAL IDENTIFIER EOF")
    );

    let buffer = TokenizedBuffer::tokenize(source, Some("broken.steps"), &ScanConfig::default());
    let messages: Vec<String> = buffer.diagnostics().iter().map(Diagnostic::to_string).collect();
    assert_eq!(
        messages,
        [
            "broken.steps:1:3: invalid character '?'",
            "broken.steps:1:5: unterminated string literal",
            "broken.steps:2:3: character literal `'xy'` must hold exactly one character",
        ]
    );
    assert_eq!(buffer.reconstruct(), source);
}

#[test]
fn test_escape_diagnostics() {
    let mut scanner = tokenize(r#""ok \q and \{#12345} end""#);
    let kinds: Vec<_> = scanner.by_ref().map(|token| token.kind).collect();
    assert_eq!(kinds, [TokenKind::ErrorLiteral, TokenKind::EndOfFile]);
    let sequences: Vec<_> = scanner
        .diagnostics()
        .iter()
        .map(|diagnostic| match &diagnostic.error {
            LexError::InvalidEscapeSequence { sequence, span } => {
                (sequence.clone(), span.start_column)
            }
            other => panic!("unexpected diagnostic {other}"),
        })
        .collect();
    assert_eq!(
        sequences,
        [("\\q".to_string(), 5), ("\\{#12345}".to_string(), 12)]
    );
}

#[test]
fn test_tokens_serialize_with_kind_names() {
    let tokens: Vec<_> = tokenize("fn x").collect();
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(json[0]["kind"], "KW_FN");
    assert_eq!(json[2]["kind"], "IDENTIFIER");
    assert_eq!(json[2]["span"]["start_column"], 4);
    assert_eq!(json[3]["kind"], "EOF");
    assert_eq!(json[3]["lexeme"], "");
}

#[test]
fn test_config_from_file() {
    let path =
        std::env::temp_dir().join(format!("steps-lexer-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"tab_width": 4, "skip_trivia": true}"#).unwrap();
    let config = ScanConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.tab_width, 4);
    let buffer = TokenizedBuffer::tokenize("if\n\tx", None, &config);
    let kinds: Vec<_> = buffer.kinds().map(|kind| kind.to_string()).collect();
    assert_eq!(kinds, expected("KW_IF INDENT IDENTIFIER DEDENT EOF"));
}
