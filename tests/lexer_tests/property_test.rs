//! Property-based tests for the scanner.

use proptest::prelude::*;
use steps_lexer::{
    tokenize,
    tokenizer::{lexicon::pattern_for, number::is_radix_digit},
    TokenKind,
};

/// Source-like text: identifiers, numbers, quotes, operators, comments and line breaks.
fn source_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9_ \t\r\n#'\"\\\\(){}\\[\\]<>=+*/.,:;@!-]{0,80}",
        any::<String>(),
        "\u{feff}[a-z \n]{0,20}",
    ]
}

/// Lines of mixed indentation, each holding a word or a comment.
fn layout_strategy() -> impl Strategy<Value = String> {
    let body = prop_oneof![
        "[a-z]{1,4}",
        Just("# c".to_string()),
        Just(String::new()),
    ];
    prop::collection::vec(("[ \t]{0,12}", body), 0..24)
        .prop_map(|lines| {
            lines
                .into_iter()
                .map(|(indent, body)| format!("{indent}{body}"))
                .collect::<Vec<_>>()
                .join("\n")
        })
}

fn digit_char(value: u32, upper: bool) -> char {
    let c = std::char::from_digit(value, 36).unwrap_or('0');
    if upper {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

proptest! {
    #[test]
    fn test_scan_is_total(source in source_strategy()) {
        let tokens: Vec<_> = tokenize(&source).collect();
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::EndOfFile).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
    }

    #[test]
    fn test_lexemes_reconstruct_source(source in source_strategy()) {
        let text: String = tokenize(&source).map(|t| t.lexeme).collect();
        let expected = source.strip_prefix('\u{feff}').unwrap_or(&source);
        prop_assert_eq!(text.as_str(), expected);
    }

    #[test]
    fn test_spans_are_contiguous(source in source_strategy()) {
        let mut offset = 0;
        for token in tokenize(&source) {
            prop_assert_eq!(token.span.start_offset, offset);
            prop_assert_eq!(token.span.len(), token.lexeme.len());
            offset = token.span.end_offset;
        }
    }

    #[test]
    fn test_lexemes_match_their_pattern(source in source_strategy()) {
        for token in tokenize(&source) {
            if token.kind.is_synthetic() {
                prop_assert_eq!(token.lexeme, "");
            } else if token.kind.is_error() {
                prop_assert!(!token.lexeme.is_empty());
            } else {
                let pattern = pattern_for(token.kind).unwrap();
                prop_assert!(pattern.is_match(token.lexeme), "{} {:?}", token.kind, token.lexeme);
            }
        }
    }

    #[test]
    fn test_indents_pair_with_dedents(source in prop_oneof![layout_strategy(), source_strategy()]) {
        let mut open: i64 = 0;
        for token in tokenize(&source) {
            match token.kind {
                TokenKind::Indent => open += 1,
                TokenKind::Dedent => open -= 1,
                _ => {}
            }
            prop_assert!(open >= 0);
        }
        prop_assert_eq!(open, 0);
    }

    #[test]
    fn test_every_radix_digit_is_accepted(
        radix in 1u32..=32,
        seed in prop::collection::vec(any::<u32>(), 1..6),
        upper in any::<bool>(),
    ) {
        let digits: String = seed.iter().map(|d| digit_char(d % radix, upper)).collect();
        let source = format!("{radix}r{digits}");
        let kinds: Vec<_> = tokenize(&source).map(|t| t.kind).collect();
        prop_assert_eq!(kinds, vec![TokenKind::IntegerLiteral, TokenKind::EndOfFile]);
    }

    #[test]
    fn test_out_of_range_digit_is_rejected(
        radix in 1u32..=32,
        prefix in prop::collection::vec(any::<u32>(), 0..4),
        bad in 0u32..36,
    ) {
        let bad = radix + bad % (36 - radix);
        prop_assert!(!is_radix_digit(digit_char(bad, false), radix));
        // `k` after base-10 digits is a magnitude suffix, not a digit
        prop_assume!(!(radix == 10 && digit_char(bad, false) == 'k' && !prefix.is_empty()));
        let mut digits: String = prefix.iter().map(|d| digit_char(d % radix, false)).collect();
        digits.push(digit_char(bad, false));
        let source = format!("{radix}r{digits}");
        let tokens: Vec<_> = tokenize(&source).collect();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::ErrorNumber);
        prop_assert_eq!(tokens[0].lexeme, source.as_str());
    }
}
