use nom::{
    bytes::complete::take_while, character::complete::char, combinator::recognize,
    error::context, sequence::pair,
};

use super::{token::ParserResult, whitespace::is_line_break};

/// A `#` line comment. The line break that ends it is not part of the comment.
#[tracing::instrument(level = "trace", skip(input))]
pub fn comment(input: &str) -> ParserResult<&str> {
    context(
        "comment",
        recognize(pair(char('#'), take_while(|c: char| !is_line_break(c)))),
    )(input)
}
