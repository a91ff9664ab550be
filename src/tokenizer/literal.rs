//! # Character and String Literals
//!
//! Recognizers for the quoted literal forms and their shared escape-sequence grammar:
//!
//! * character literal: `'a'`, `'\n'`, `'\{#20AC}'`
//! * string literal: `"..."` on a single line, with escapes
//! * verbatim string literal: `"""..."""`, any content except `"""`, may span lines
//!
//! An escape is `\` followed by one of the fixed characters in [`SINGLE_CHAR_ESCAPES`] or by a
//! braced character code: `#` with exactly 2, 4 or 6 hex digits, or a Unicode character name
//! such as `LATIN SMALL LETTER A` or `HYPHEN-MINUS`.
//!
//! The recognizers only accept well-formed literals. When one fails at an opening delimiter the
//! scanner falls back to [`scan_quoted`], which finds where the broken literal ends and which
//! escapes were invalid.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while1, take_while_m_n},
    character::complete::{char, none_of, one_of, satisfy},
    combinator::recognize,
    error::context,
    multi::many0,
    sequence::{delimited, pair, preceded, terminated, tuple},
};

use super::token::ParserResult;

/// Characters allowed directly after `\`.
pub const SINGLE_CHAR_ESCAPES: &str = "btnfre\\\"'`0";

/// Hex digit counts accepted in a `\{#...}` character code, longest first.
pub const CHARACTER_CODE_WIDTHS: [usize; 3] = [6, 4, 2];

pub const VERBATIM_QUOTE: &str = "\"\"\"";

fn hex_code<'a>(width: usize) -> impl FnMut(&'a str) -> ParserResult<'a, &'a str> {
    terminated(
        recognize(pair(
            char('#'),
            take_while_m_n(width, width, |c: char| c.is_ascii_hexdigit()),
        )),
        char('}'),
    )
}

fn name_part(input: &str) -> ParserResult<&str> {
    take_while1(|c: char| c.is_alphanumeric())(input)
}

/// A Unicode character name: a letter, then letter/digit runs joined by single separators.
#[tracing::instrument(level = "trace", skip(input))]
fn character_name(input: &str) -> ParserResult<&str> {
    context(
        "character name",
        recognize(pair(
            satisfy(|c: char| c.is_alphabetic()),
            many0(alt((
                name_part,
                recognize(pair(
                    alt((tag(" -"), tag("-"), tag("_"), tag(" "))),
                    name_part,
                )),
            ))),
        )),
    )(input)
}

fn character_code(input: &str) -> ParserResult<&str> {
    context(
        "character code",
        recognize(preceded(
            char('{'),
            alt((
                hex_code(CHARACTER_CODE_WIDTHS[0]),
                hex_code(CHARACTER_CODE_WIDTHS[1]),
                hex_code(CHARACTER_CODE_WIDTHS[2]),
                terminated(character_name, char('}')),
            )),
        )),
    )(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn escape_sequence(input: &str) -> ParserResult<&str> {
    context(
        "escape sequence",
        recognize(preceded(
            char('\\'),
            alt((recognize(one_of(SINGLE_CHAR_ESCAPES)), character_code)),
        )),
    )(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn character_literal(input: &str) -> ParserResult<&str> {
    context(
        "character literal",
        recognize(delimited(
            char('\''),
            alt((escape_sequence, recognize(none_of("\\'\r\n")))),
            char('\''),
        )),
    )(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn string_literal(input: &str) -> ParserResult<&str> {
    context(
        "string literal",
        recognize(delimited(
            char('"'),
            many0(alt((
                escape_sequence,
                take_while1(|c: char| !matches!(c, '"' | '\\' | '\r' | '\n')),
            ))),
            char('"'),
        )),
    )(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn verbatim_string_literal(input: &str) -> ParserResult<&str> {
    context(
        "verbatim string literal",
        recognize(tuple((
            tag(VERBATIM_QUOTE),
            take_until(VERBATIM_QUOTE),
            tag(VERBATIM_QUOTE),
        ))),
    )(input)
}

/// Outcome of re-scanning a single-line quoted literal that failed its pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuotedScan {
    /// Bytes consumed, including the closing quote when there is one.
    pub len: usize,
    pub terminated: bool,
    /// Number of characters and escapes between the quotes.
    pub units: usize,
    /// Byte ranges of invalid escapes, relative to the opening quote.
    pub invalid_escapes: Vec<(usize, usize)>,
}

/// Walks a `'` or `"` literal up to its closing quote or the end of the line.
pub(crate) fn scan_quoted(input: &str, quote: char) -> QuotedScan {
    let mut pos = quote.len_utf8();
    let mut units = 0;
    let mut invalid_escapes = Vec::new();
    let mut terminated = false;

    while let Some(c) = input[pos..].chars().next() {
        match c {
            '\r' | '\n' => break,
            c if c == quote => {
                pos += c.len_utf8();
                terminated = true;
                break;
            }
            '\\' => {
                let rest = &input[pos..];
                let len = match escape_sequence(rest) {
                    Ok((after, _)) => rest.len() - after.len(),
                    Err(_) => {
                        let len = invalid_escape_len(rest, quote);
                        invalid_escapes.push((pos, pos + len));
                        len
                    }
                };
                pos += len;
                units += 1;
            }
            c => {
                pos += c.len_utf8();
                units += 1;
            }
        }
    }

    QuotedScan {
        len: pos,
        terminated,
        units,
        invalid_escapes,
    }
}

// `\` plus the character after it, or through a `}` when a braced code is on the same line.
fn invalid_escape_len(rest: &str, quote: char) -> usize {
    let mut chars = rest.char_indices().skip(1);
    match chars.next() {
        None => 1,
        Some((_, '\r' | '\n')) => 1,
        Some((i, '{')) => {
            for (j, c) in chars {
                match c {
                    '}' => return j + 1,
                    '\r' | '\n' => break,
                    c if c == quote => break,
                    _ => {}
                }
            }
            i + 1
        }
        Some((i, c)) => i + c.len_utf8(),
    }
}
