//! # Scanner
//!
//! The scanner walks the source once, front to back, and yields [`Token`]s lazily.
//!
//! At each cursor position it asks the [lexicon](super::lexicon) for the longest match. When
//! the winner does not sit on a clean boundary, or nothing matches at all, the scanner recovers
//! by emitting one error token over the malformed run and records a [`Diagnostic`]:
//!
//! * an identifier or keyword that stops inside a letter/digit/underscore run becomes
//!   `ERR_IDENTIFIER` over the whole run (`x__1`, `x_`, `__1`)
//! * a number directly followed by letters, digits or underscores becomes `ERR_NUMBER`
//!   (`2r102`, `1.5e`)
//! * a quote that does not open a well-formed literal becomes `ERR_LITERAL`, ending at the
//!   closing quote or the end of the line, or at the end of input for `"""`
//! * any other character becomes a one-character `ERR_CHARACTER`
//!
//! ## Indentation
//!
//! At the start of input and after each line feed the scanner measures the leading white space
//! of the line and runs it through the [`IndentStack`]. Blank and comment-only lines are
//! ignored. The resulting `INDENT` / `DEDENT` (and `ERR_INDENTATION`) tokens are zero-width and
//! come before the line's first token. At the end of input every open block is closed and a
//! single `EOF` token ends the stream.
//!
//! A leading byte-order mark is dropped before scanning; offsets count from the text after it.

use std::{collections::VecDeque, iter::FusedIterator};

use super::{
    identifier::word_run_len,
    indent::{IndentStack, Transition},
    lexicon,
    literal::{scan_quoted, VERBATIM_QUOTE},
    token::{Span, Token, TokenKind},
    whitespace::{indentation_width, is_horizontal_space},
};
use crate::{
    config::ScanConfig,
    error::{Diagnostic, LexError, LiteralKind},
};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Scans `source` with the default configuration.
///
/// # Examples
///
/// ```
/// use steps_lexer::tokenize;
///
/// let kinds: Vec<String> = tokenize("if x")
///     .filter(|token| !token.kind.is_trivia())
///     .map(|token| token.kind.to_string())
///     .collect();
/// assert_eq!(kinds, ["KW_IF", "IDENTIFIER", "EOF"]);
/// ```
pub fn tokenize(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}

/// Lazy, single-pass token iterator over one source text.
///
/// The iterator always ends with exactly one [`TokenKind::EndOfFile`] token and then returns
/// `None`. Use [`Iterator::by_ref`] to keep the scanner around for its [`diagnostics`].
///
/// [`diagnostics`]: Scanner::diagnostics
#[derive(Debug)]
pub struct Scanner<'s> {
    source: &'s str,
    origin: Option<String>,
    config: ScanConfig,
    current_position: usize,
    current_line: usize,
    current_column: usize,
    at_line_start: bool,
    indents: IndentStack,
    pending: VecDeque<Token<'s>>,
    diagnostics: Vec<Diagnostic>,
    finished: bool,
}

impl<'s> Scanner<'s> {
    pub fn new(source: &'s str) -> Self {
        let source = source.strip_prefix(BYTE_ORDER_MARK).unwrap_or(source);
        Self {
            source,
            origin: None,
            config: ScanConfig::default(),
            current_position: 0,
            current_line: 1,   // 1-based
            current_column: 1, // 1-based
            at_line_start: true,
            indents: IndentStack::new(),
            pending: VecDeque::new(),
            diagnostics: Vec::new(),
            finished: false,
        }
    }

    /// Label (usually a file name) prefixed to every diagnostic.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// The scanned text, without a leading byte-order mark.
    pub fn source(&self) -> &'s str {
        self.source
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Diagnostics reported for the tokens yielded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn rest(&self) -> &'s str {
        let source = self.source;
        &source[self.current_position..]
    }

    fn step(&mut self) {
        if self.at_line_start {
            self.at_line_start = false;
            if self.config.track_indentation {
                self.measure_line();
            }
        }

        let Some(first) = self.rest().chars().next() else {
            self.finish();
            return;
        };

        let token = self.scan_token(first);
        if token.kind == TokenKind::LineFeed {
            self.at_line_start = true;
        }
        self.pending.push_back(token);
    }

    fn scan_token(&mut self, first: char) -> Token<'s> {
        let rest = self.rest();
        let winner = lexicon::longest_match(rest);

        if let Some(literal) = literal_opener(rest) {
            return match winner {
                Some((kind, len)) if kind == literal_token_kind(literal) => self.emit(kind, len),
                _ => self.recover_literal(literal),
            };
        }

        match winner {
            Some((kind, len)) if kind.is_word() => {
                let run = word_run_len(rest);
                if len < run {
                    self.recover_identifier(run)
                } else {
                    self.emit(kind, len)
                }
            }
            Some((kind, len)) if kind.is_number() => {
                let run = word_run_len(&rest[len..]);
                if run > 0 {
                    let token = self.emit(TokenKind::ErrorNumber, len + run);
                    self.report(LexError::MalformedNumber {
                        lexeme: token.lexeme.to_string(),
                        span: token.span,
                    });
                    token
                } else {
                    self.emit(kind, len)
                }
            }
            Some((kind, len)) => self.emit(kind, len),
            None => {
                if first.is_alphabetic() || first == '_' {
                    return self.recover_identifier(word_run_len(rest));
                }
                let token = self.emit(TokenKind::ErrorCharacter, first.len_utf8());
                self.report(LexError::InvalidCharacter {
                    character: first,
                    span: token.span,
                });
                token
            }
        }
    }

    fn recover_identifier(&mut self, run: usize) -> Token<'s> {
        let token = self.emit(TokenKind::ErrorIdentifier, run);
        self.report(LexError::MalformedIdentifier {
            lexeme: token.lexeme.to_string(),
            span: token.span,
        });
        token
    }

    fn recover_literal(&mut self, literal: LiteralKind) -> Token<'s> {
        let rest = self.rest();
        let quote = match literal {
            LiteralKind::VerbatimString => {
                let token = self.emit(TokenKind::ErrorLiteral, rest.len());
                self.report(LexError::UnterminatedLiteral {
                    literal,
                    span: token.span,
                });
                return token;
            }
            LiteralKind::String => '"',
            LiteralKind::Character => '\'',
        };

        let scan = scan_quoted(rest, quote);
        for &(from, to) in &scan.invalid_escapes {
            let span = self.span_ahead(from, to);
            self.report(LexError::InvalidEscapeSequence {
                sequence: rest[from..to].to_string(),
                span,
            });
        }

        let token = self.emit(TokenKind::ErrorLiteral, scan.len);
        if !scan.terminated {
            self.report(LexError::UnterminatedLiteral {
                literal,
                span: token.span,
            });
        } else if literal == LiteralKind::Character && scan.units != 1 {
            self.report(LexError::MalformedCharacterLiteral {
                lexeme: token.lexeme.to_string(),
                span: token.span,
            });
        }
        token
    }

    fn measure_line(&mut self) {
        let rest = self.rest();
        let indent = rest.len() - rest.trim_start_matches(is_horizontal_space).len();
        if matches!(rest[indent..].chars().next(), None | Some('\r' | '\n' | '#')) {
            return;
        }

        let width = indentation_width(&rest[..indent], self.config.tab_width);
        match self.indents.transition(width) {
            Transition::Same => {}
            Transition::Indent => self.push_synthetic(TokenKind::Indent),
            Transition::Dedent(dedents) => {
                for _ in 0..dedents {
                    self.push_synthetic(TokenKind::Dedent);
                }
            }
            Transition::Inconsistent { dedents, enclosing } => {
                for _ in 0..dedents {
                    self.push_synthetic(TokenKind::Dedent);
                }
                let token = self.emit(TokenKind::ErrorIndentation, 0);
                self.pending.push_back(token);
                self.report(LexError::InconsistentIndentation {
                    width,
                    enclosing,
                    span: token.span,
                });
            }
        }
    }

    fn finish(&mut self) {
        if self.config.track_indentation {
            for _ in 0..self.indents.close() {
                self.push_synthetic(TokenKind::Dedent);
            }
        }
        self.push_synthetic(TokenKind::EndOfFile);
        self.finished = true;
        tracing::debug!(
            origin = self.origin.as_deref(),
            bytes = self.source.len(),
            diagnostics = self.diagnostics.len(),
            "scan finished"
        );
    }

    fn push_synthetic(&mut self, kind: TokenKind) {
        let token = self.emit(kind, 0);
        self.pending.push_back(token);
    }

    /// Builds the token for the next `len` bytes and moves the cursor past them.
    fn emit(&mut self, kind: TokenKind, len: usize) -> Token<'s> {
        let source = self.source;
        let start = self.current_position;
        let lexeme = &source[start..start + len];
        let span = Span {
            start_line: self.current_line,
            start_column: self.current_column,
            start_offset: start,
            end_offset: start + len,
        };
        self.update_position(lexeme);
        Token::new(kind, lexeme, span)
    }

    // Span of `from..to` relative to the cursor, which must not cross a line break.
    fn span_ahead(&self, from: usize, to: usize) -> Span {
        let rest = self.rest();
        Span {
            start_line: self.current_line,
            start_column: self.current_column + rest[..from].chars().count(),
            start_offset: self.current_position + from,
            end_offset: self.current_position + to,
        }
    }

    fn update_position(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            self.current_position += c.len_utf8();
            match c {
                '\r' if chars.peek() == Some(&'\n') => {}
                '\r' | '\n' => {
                    self.current_line += 1;
                    self.current_column = 1;
                }
                _ => self.current_column += 1,
            }
        }
    }

    fn report(&mut self, error: LexError) {
        let diagnostic = Diagnostic {
            origin: self.origin.clone(),
            error,
        };
        tracing::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

impl<'s> Iterator for Scanner<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                if self.config.skip_trivia && token.kind.is_trivia() {
                    continue;
                }
                return Some(token);
            }
            if self.finished {
                return None;
            }
            self.step();
        }
    }
}

impl FusedIterator for Scanner<'_> {}

fn literal_opener(rest: &str) -> Option<LiteralKind> {
    if rest.starts_with(VERBATIM_QUOTE) {
        Some(LiteralKind::VerbatimString)
    } else if rest.starts_with('"') {
        Some(LiteralKind::String)
    } else if rest.starts_with('\'') {
        Some(LiteralKind::Character)
    } else {
        None
    }
}

fn literal_token_kind(literal: LiteralKind) -> TokenKind {
    match literal {
        LiteralKind::Character => TokenKind::CharacterLiteral,
        LiteralKind::String => TokenKind::StringLiteral,
        LiteralKind::VerbatimString => TokenKind::VerbatimStringLiteral,
    }
}
