use steps_lexer::{tokenize, ScanConfig, Scanner, TokenKind};

pub mod fixture_test;
pub mod indentation_test;
pub mod property_test;

/// Kind names of every token, trivia included.
fn all_kinds(source: &str) -> Vec<String> {
    tokenize(source).map(|token| token.kind.to_string()).collect()
}

/// Kind names of the non-trivia tokens.
fn significant_kinds(source: &str) -> Vec<String> {
    let config = ScanConfig {
        skip_trivia: true,
        ..ScanConfig::default()
    };
    Scanner::new(source)
        .with_config(config)
        .map(|token| token.kind.to_string())
        .collect()
}

/// Parses a space separated list of kind names, e.g. `"KW_IF IDENTIFIER EOF"`.
fn expected(names: &str) -> Vec<String> {
    names
        .split_whitespace()
        .map(|name| {
            let kind: TokenKind = name.parse().unwrap();
            kind.to_string()
        })
        .collect()
}
