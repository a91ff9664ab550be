//! # Whitespace Token Handling
//!
//! This module provides the trivia rules for horizontal white space and line breaks.
//!
//! ## Whitespace Preservation
//!
//! White space is kept as tokens so the token stream reproduces the source exactly, and so the
//! scanner can measure indentation from the leading white space of each line.
//!
//! ## Token Types
//!
//! * [`TokenKind::WhiteSpace`](super::token::TokenKind::WhiteSpace): runs of spaces and tabs,
//!   never crossing a line boundary
//! * [`TokenKind::LineFeed`](super::token::TokenKind::LineFeed): exactly one of `\r\n`, `\r`
//!   or `\n`

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    error::context,
};

use super::token::ParserResult;

pub fn is_horizontal_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub fn is_line_break(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// Parses a run of spaces and tabs.
///
/// # Examples
///
/// ```
/// # use steps_lexer::tokenizer::whitespace::whitespace;
/// let (rest, ws) = whitespace(" \t hello").unwrap();
/// assert_eq!(ws, " \t ");
/// assert_eq!(rest, "hello");
/// ```
#[tracing::instrument(level = "trace", skip(input))]
pub fn whitespace(input: &str) -> ParserResult<&str> {
    context("whitespace", take_while1(is_horizontal_space))(input)
}

/// Parses a single line break: `\r\n` counts once, as do lone `\r` and `\n`.
///
/// # Examples
///
/// ```
/// # use steps_lexer::tokenizer::whitespace::line_feed;
/// assert_eq!(line_feed("\r\nnext").unwrap(), ("next", "\r\n"));
/// assert_eq!(line_feed("\n\n").unwrap(), ("\n", "\n"));
/// ```
#[tracing::instrument(level = "trace", skip(input))]
pub fn line_feed(input: &str) -> ParserResult<&str> {
    context("line feed", alt((tag("\r\n"), tag("\r"), tag("\n"))))(input)
}

/// Indentation width of a run of horizontal white space.
///
/// A space adds one column; a tab moves to the next multiple of `tab_width`.
pub fn indentation_width(run: &str, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    run.chars().fold(0, |width, c| match c {
        '\t' => (width / tab_width + 1) * tab_width,
        _ => width + 1,
    })
}
