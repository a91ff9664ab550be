//! # Tokenizer Component
//!
//! The tokenizer turns STEPS source text into an ordered stream of classified tokens for the
//! parser.
//!
//! ## Design Principles
//!
//! * **Lossless Output**: White space, comments and line feeds are kept as trivia tokens, so
//!   the concatenated lexemes reproduce the source exactly.
//! * **Longest Match**: Every rule is tried at the cursor and the longest lexeme wins; ties go
//!   to declaration priority (see [`lexicon`]).
//! * **Error Recovery**: Malformed input never stops the scan. It becomes an error token plus a
//!   [`Diagnostic`](crate::error::Diagnostic), and the stream always ends with `EOF`.
//! * **Layout**: Indentation changes are reported as synthetic `INDENT` / `DEDENT` tokens.
//!
//! ## Component Structure
//!
//! * [`token`]: token kinds, spans and the token record
//! * [`keyword`], [`symbol`]: exact-text reserved words and punctuation
//! * [`literal`], [`number`], [`identifier`], [`whitespace`], [`comment`]: lexeme rules
//! * [`lexicon`]: pattern table and longest-match selection
//! * [`indent`]: indentation stack
//! * [`scanner`]: the lazy scanning engine
//! * [`buffer`]: an eagerly collected scan
//!
//! ## Usage Example
//!
//! ```rust
//! use steps_lexer::tokenizer::{buffer::TokenizedBuffer, token::TokenKind};
//! use steps_lexer::ScanConfig;
//!
//! let source = "fn twice(x)\n    x * 2\n";
//! let buffer = TokenizedBuffer::tokenize(source, Some("twice.steps"), &ScanConfig::default());
//! assert!(!buffer.has_errors());
//! assert_eq!(buffer.reconstruct(), source);
//! assert_eq!(buffer.kinds().filter(|k| *k == TokenKind::Indent).count(), 1);
//! ```

pub mod buffer;
pub mod comment;
pub mod identifier;
pub mod indent;
pub mod keyword;
pub mod lexicon;
pub mod literal;
pub mod number;
pub mod scanner;
pub mod symbol;
pub mod token;
pub mod whitespace;
