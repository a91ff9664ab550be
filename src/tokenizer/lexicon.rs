//! # Lexicon
//!
//! The lexicon maps every matchable [`TokenKind`] to the pattern that accepts its lexemes, and
//! picks the winning pattern at a cursor position.
//!
//! ## Selection
//!
//! Every pattern is tried at the cursor and the longest match wins. Patterns are stored in
//! declaration priority order and a later pattern only replaces the current winner when it
//! matches strictly more text, so ties go to the earlier declaration:
//!
//! 1. character, string and verbatim string literals
//! 2. integer and float literals
//! 3. keywords
//! 4. lower, upper and dummy identifiers
//! 5. white space, line feeds and comments
//! 6. punctuation and operators
//!
//! This is what makes `fn` a keyword rather than an identifier, while `fnord` stays an
//! identifier.
//!
//! Synthetic and recovery kinds have no pattern; [`pattern_for`] returns `None` for them.

use lazy_static::lazy_static;
use strum::IntoEnumIterator;

use super::{
    comment::comment,
    identifier::{dummy_identifier, lower_identifier, upper_identifier},
    keyword::Keyword,
    literal::{character_literal, string_literal, verbatim_string_literal},
    number::{float_literal, integer_literal},
    symbol::Symbol,
    token::{ParserResult, TokenKind},
    whitespace::{line_feed, whitespace},
};

type Rule = for<'a> fn(&'a str) -> ParserResult<'a, &'a str>;

#[derive(Clone, Copy)]
enum Matcher {
    /// The lexeme is exactly this text.
    Exact(&'static str),
    Rule(Rule),
}

/// The accepted lexeme language of one token kind.
#[derive(Clone, Copy)]
pub struct Pattern {
    kind: TokenKind,
    matcher: Matcher,
}

impl Pattern {
    fn exact(kind: TokenKind, text: &'static str) -> Self {
        Self {
            kind,
            matcher: Matcher::Exact(text),
        }
    }

    fn rule(kind: TokenKind, rule: Rule) -> Self {
        Self {
            kind,
            matcher: Matcher::Rule(rule),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte length of the longest prefix of `input` this pattern accepts.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        match self.matcher {
            Matcher::Exact(text) => input.starts_with(text).then_some(text.len()),
            Matcher::Rule(rule) => rule(input)
                .ok()
                .map(|(rest, _)| input.len() - rest.len()),
        }
    }

    /// Whether `lexeme` as a whole belongs to this pattern's language.
    pub fn is_match(&self, lexeme: &str) -> bool {
        self.match_len(lexeme) == Some(lexeme.len())
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.matcher {
            Matcher::Exact(text) => write!(f, "Pattern({} = {:?})", self.kind, text),
            Matcher::Rule(_) => write!(f, "Pattern({})", self.kind),
        }
    }
}

lazy_static! {
    static ref LEXICON: Vec<Pattern> = {
        let mut patterns = vec![
            Pattern::rule(TokenKind::CharacterLiteral, character_literal),
            Pattern::rule(TokenKind::StringLiteral, string_literal),
            Pattern::rule(TokenKind::VerbatimStringLiteral, verbatim_string_literal),
            Pattern::rule(TokenKind::IntegerLiteral, integer_literal),
            Pattern::rule(TokenKind::FloatLiteral, float_literal),
        ];
        patterns.extend(
            Keyword::iter().map(|kw| Pattern::exact(TokenKind::Keyword(kw), kw.text())),
        );
        patterns.extend([
            Pattern::rule(TokenKind::LowerIdentifier, lower_identifier),
            Pattern::rule(TokenKind::UpperIdentifier, upper_identifier),
            Pattern::rule(TokenKind::DummyIdentifier, dummy_identifier),
            Pattern::rule(TokenKind::WhiteSpace, whitespace),
            Pattern::rule(TokenKind::LineFeed, line_feed),
            Pattern::rule(TokenKind::Comment, comment),
        ]);
        patterns.extend(
            Symbol::iter().map(|symbol| Pattern::exact(TokenKind::Symbol(symbol), symbol.text())),
        );
        patterns
    };
}

/// All patterns, in declaration priority order.
pub fn patterns() -> &'static [Pattern] {
    &LEXICON
}

/// The pattern of `kind`, or `None` when the kind is synthetic or a recovery kind.
pub fn pattern_for(kind: TokenKind) -> Option<&'static Pattern> {
    LEXICON.iter().find(|pattern| pattern.kind == kind)
}

/// Longest match at the start of `input`, ties broken by declaration priority.
#[tracing::instrument(level = "trace", skip(input), ret)]
pub fn longest_match(input: &str) -> Option<(TokenKind, usize)> {
    let mut best: Option<(TokenKind, usize)> = None;
    for pattern in LEXICON.iter() {
        let Some(len) = pattern.match_len(input) else {
            continue;
        };
        if len > 0 && best.map_or(true, |(_, best_len)| len > best_len) {
            best = Some((pattern.kind, len));
        }
    }
    best
}
