use std::fmt;

use thiserror::Error;

use crate::tokenizer::token::Span;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Unknown token kind: {0}")]
    UnknownTokenKind(String),
    // first diagnostic of a strict scan
    #[error("Lex error: {0}")]
    Lex(Diagnostic),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Which delimited literal a recovery diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LiteralKind {
    Character,
    String,
    #[strum(serialize = "verbatim string")]
    VerbatimString,
}

/// Recoverable lexical errors.
///
/// None of these stop the scan: each one is reported next to the error token (or synthetic
/// token) the scanner emitted in its place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("malformed identifier `{lexeme}`")]
    MalformedIdentifier { lexeme: String, span: Span },
    #[error("invalid character {character:?}")]
    InvalidCharacter { character: char, span: Span },
    #[error("malformed number literal `{lexeme}`")]
    MalformedNumber { lexeme: String, span: Span },
    #[error("unterminated {literal} literal")]
    UnterminatedLiteral { literal: LiteralKind, span: Span },
    #[error("invalid escape sequence `{sequence}`")]
    InvalidEscapeSequence { sequence: String, span: Span },
    #[error("character literal `{lexeme}` must hold exactly one character")]
    MalformedCharacterLiteral { lexeme: String, span: Span },
    #[error("inconsistent indentation: width {width} does not match an enclosing block (nearest is {enclosing})")]
    InconsistentIndentation {
        width: usize,
        enclosing: usize,
        span: Span,
    },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::MalformedIdentifier { span, .. }
            | LexError::InvalidCharacter { span, .. }
            | LexError::MalformedNumber { span, .. }
            | LexError::UnterminatedLiteral { span, .. }
            | LexError::InvalidEscapeSequence { span, .. }
            | LexError::MalformedCharacterLiteral { span, .. }
            | LexError::InconsistentIndentation { span, .. } => *span,
        }
    }
}

/// A [`LexError`] tagged with the origin label of the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub origin: Option<String>,
    pub error: LexError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.error.span();
        match &self.origin {
            Some(origin) => write!(f, "{}:{}: {}", origin, span, self.error),
            None => write!(f, "{}: {}", span, self.error),
        }
    }
}
