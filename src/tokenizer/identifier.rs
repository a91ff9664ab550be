//! # Identifier Token Handling
//!
//! Three identifier shapes are recognized:
//!
//! * lower identifiers (`count`, `x_1`): a non-uppercase letter first
//! * upper identifiers (`Point`, `Map_2`): an uppercase letter first
//! * dummy identifiers (`_`, `_1`, `_unused_arg`): a bare underscore, or one or more groups of
//!   an underscore followed by letters/digits
//!
//! After the first letter come runs of letters, digits and combining marks (so a decomposed
//! `e\u{301}` stays one identifier). A single underscore may join two
//! non-empty runs; a doubled or trailing underscore is not part of any identifier. Such input is
//! not split at the bad underscore: the scanner reads the whole letter/digit/underscore run as
//! one error identifier (see [`word_run_len`]).

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, satisfy},
    combinator::recognize,
    error::context,
    multi::{many0, many1},
    sequence::{pair, tuple},
};

use unicode_ident::is_xid_continue;

use super::token::ParserResult;

// Connector punctuation (`Pc`) is in XID_Continue but joins runs only as `_`.
const CONNECTOR_PUNCTUATION: &str =
    "_\u{203F}\u{2040}\u{2054}\u{FE33}\u{FE34}\u{FE4D}\u{FE4E}\u{FE4F}\u{FF3F}";

pub fn is_upper_start(c: char) -> bool {
    c.is_uppercase()
}

pub fn is_lower_start(c: char) -> bool {
    c.is_alphabetic() && !c.is_uppercase()
}

/// A nonspacing or spacing combining mark (`Mn`, `Mc`).
pub fn is_combining_mark(c: char) -> bool {
    !c.is_alphanumeric() && is_xid_continue(c) && !CONNECTOR_PUNCTUATION.contains(c)
}

/// Letters, digits and combining marks; anything after an identifier's first letter.
pub fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || is_combining_mark(c)
}

/// Characters of the maximal run read for identifier error recovery.
pub fn is_word_char(c: char) -> bool {
    is_identifier_continue(c) || c == '_'
}

/// Byte length of the letter/digit/underscore run at the start of `input`.
pub fn word_run_len(input: &str) -> usize {
    input
        .char_indices()
        .find(|(_, c)| !is_word_char(*c))
        .map_or(input.len(), |(i, _)| i)
}

fn alphanumeric0(input: &str) -> ParserResult<&str> {
    take_while(is_identifier_continue)(input)
}

fn alphanumeric1(input: &str) -> ParserResult<&str> {
    take_while1(is_identifier_continue)(input)
}

// `("_" alnum+)*`
fn joined_runs(input: &str) -> ParserResult<&str> {
    recognize(many0(pair(char('_'), alphanumeric1)))(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn lower_identifier(input: &str) -> ParserResult<&str> {
    context(
        "lower identifier",
        recognize(tuple((satisfy(is_lower_start), alphanumeric0, joined_runs))),
    )(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn upper_identifier(input: &str) -> ParserResult<&str> {
    context(
        "upper identifier",
        recognize(tuple((satisfy(is_upper_start), alphanumeric0, joined_runs))),
    )(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn dummy_identifier(input: &str) -> ParserResult<&str> {
    context(
        "dummy identifier",
        alt((recognize(many1(pair(char('_'), alphanumeric1))), tag("_"))),
    )(input)
}
