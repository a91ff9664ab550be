use std::{borrow::Cow, fmt, str::FromStr};

use nom::{error::VerboseError, IResult};
use serde::{ser::SerializeStruct, Serialize, Serializer};

use super::{keyword::Keyword, symbol::Symbol};
use crate::error::Error;

/// Classification of a [`Token`].
///
/// The set is closed. Literal, identifier and trivia kinds are matched against the source by
/// the lexicon; [`TokenKind::Indent`], [`TokenKind::Dedent`] and [`TokenKind::EndOfFile`] are
/// synthetic and only ever produced by the scanner's control logic. The `Error*` kinds are
/// recovery kinds: their lexeme is whatever malformed run the scanner consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    CharacterLiteral,
    StringLiteral,
    VerbatimStringLiteral,
    IntegerLiteral,
    FloatLiteral,
    // Identifiers
    LowerIdentifier,
    UpperIdentifier,
    DummyIdentifier,
    // Trivia
    WhiteSpace,
    LineFeed,
    Comment,
    // Reserved words and punctuation
    Keyword(Keyword),
    Symbol(Symbol),
    // Synthetic
    Indent,
    Dedent,
    EndOfFile,
    // Recovery
    ErrorIdentifier,
    ErrorCharacter,
    ErrorLiteral,
    ErrorNumber,
    ErrorIndentation,
}

impl TokenKind {
    /// Stable name used by conformance fixtures (`KW_FN`, `IDENTIFIER`, `OP_MULTIPLY`, ...).
    pub fn name(&self) -> Cow<'static, str> {
        let name = match self {
            TokenKind::CharacterLiteral => "CHARACTER_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::VerbatimStringLiteral => "VERBATIM_STRING_LITERAL",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::LowerIdentifier => "IDENTIFIER",
            TokenKind::UpperIdentifier => "UPPER_IDENTIFIER",
            TokenKind::DummyIdentifier => "DUMMY_IDENTIFIER",
            TokenKind::WhiteSpace => "WHITE_SPACE",
            TokenKind::LineFeed => "END_OF_LINE",
            TokenKind::Comment => "COMMENT",
            TokenKind::Keyword(kw) => return Cow::Owned(kw.name()),
            TokenKind::Symbol(symbol) => symbol.name(),
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::EndOfFile => "EOF",
            TokenKind::ErrorIdentifier => "ERR_IDENTIFIER",
            TokenKind::ErrorCharacter => "ERR_CHARACTER",
            TokenKind::ErrorLiteral => "ERR_LITERAL",
            TokenKind::ErrorNumber => "ERR_NUMBER",
            TokenKind::ErrorIndentation => "ERR_INDENTATION",
        };
        Cow::Borrowed(name)
    }

    /// Synthetic kinds carry an empty lexeme and have no lexicon pattern.
    pub fn is_synthetic(&self) -> bool {
        matches!(
            self,
            TokenKind::Indent
                | TokenKind::Dedent
                | TokenKind::EndOfFile
                | TokenKind::ErrorIndentation
        )
    }

    /// Whitespace, comments and line breaks: no syntactic meaning, kept for round trips.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::WhiteSpace | TokenKind::LineFeed | TokenKind::Comment
        )
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            TokenKind::ErrorIdentifier
                | TokenKind::ErrorCharacter
                | TokenKind::ErrorLiteral
                | TokenKind::ErrorNumber
                | TokenKind::ErrorIndentation
        )
    }

    /// Kinds whose lexeme must end on an identifier word boundary.
    pub(crate) fn is_word(&self) -> bool {
        matches!(
            self,
            TokenKind::Keyword(_)
                | TokenKind::LowerIdentifier
                | TokenKind::UpperIdentifier
                | TokenKind::DummyIdentifier
        )
    }

    pub(crate) fn is_number(&self) -> bool {
        matches!(self, TokenKind::IntegerLiteral | TokenKind::FloatLiteral)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for TokenKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let kind = match name {
            "CHARACTER_LITERAL" => TokenKind::CharacterLiteral,
            "STRING_LITERAL" => TokenKind::StringLiteral,
            "VERBATIM_STRING_LITERAL" => TokenKind::VerbatimStringLiteral,
            "INTEGER_LITERAL" => TokenKind::IntegerLiteral,
            "FLOAT_LITERAL" => TokenKind::FloatLiteral,
            "IDENTIFIER" => TokenKind::LowerIdentifier,
            "UPPER_IDENTIFIER" => TokenKind::UpperIdentifier,
            "DUMMY_IDENTIFIER" => TokenKind::DummyIdentifier,
            "WHITE_SPACE" => TokenKind::WhiteSpace,
            "END_OF_LINE" => TokenKind::LineFeed,
            "COMMENT" => TokenKind::Comment,
            "INDENT" => TokenKind::Indent,
            "DEDENT" => TokenKind::Dedent,
            "EOF" => TokenKind::EndOfFile,
            "ERR_IDENTIFIER" => TokenKind::ErrorIdentifier,
            "ERR_CHARACTER" => TokenKind::ErrorCharacter,
            "ERR_LITERAL" => TokenKind::ErrorLiteral,
            "ERR_NUMBER" => TokenKind::ErrorNumber,
            "ERR_INDENTATION" => TokenKind::ErrorIndentation,
            other => {
                return Keyword::from_name(other)
                    .map(TokenKind::Keyword)
                    .or_else(|| Symbol::from_name(other).map(TokenKind::Symbol))
                    .ok_or_else(|| Error::UnknownTokenKind(other.to_string()))
            }
        };
        Ok(kind)
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

/// Source location of a token.
///
/// Lines and columns are 1-based, columns count characters. Offsets are byte offsets into the
/// scanned text (after a leading byte-order mark has been dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start_line: usize,
    pub start_column: usize,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_column)
    }
}

/// A classified lexeme borrowed from the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub lexeme: &'s str,
    pub span: Span,
}

impl<'s> Token<'s> {
    pub fn new(kind: TokenKind, lexeme: &'s str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }
}

impl Serialize for Token<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 3)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("lexeme", self.lexeme)?;
        state.serialize_field("span", &self.span)?;
        state.end()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.span, self.kind, self.lexeme)
    }
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;
