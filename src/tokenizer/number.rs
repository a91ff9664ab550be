//! # Numeric Literals
//!
//! Integers come in any radix from [`MIN_RADIX`] to [`MAX_RADIX`]. A radix other than 10 is
//! written as a decimal prefix followed by `r` (`2r1010`, `16rFF`, `32rVV`); base 10 may use
//! `10r` or no prefix at all. Digits past 9 are letters, in either case. Digit groups may be
//! separated by single underscores (`1_000_000`), never doubled and never at either end.
//! Base-10 integers may end with a magnitude suffix from [`MAGNITUDES`] (`4k`, `2M`).
//!
//! Floats are decimal only: `digits.digits`, optionally followed by exactly one of an exponent
//! (`1.5e-3`), a magnitude suffix (`1.5k`) or a fractional magnitude suffix from
//! [`FRACTIONAL_MAGNITUDES`] (`2.5m`). The shortcut `digits` + fractional suffix (`3u`) is a
//! float as well. A bare digit run is always an integer.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit1, one_of},
    combinator::{map_res, opt, recognize},
    error::{context, ErrorKind, ParseError, VerboseError},
    multi::many0,
    sequence::{pair, terminated, tuple},
};

use super::token::ParserResult;

pub const MIN_RADIX: u32 = 1;
pub const MAX_RADIX: u32 = 32;

pub const MAGNITUDES: &str = "kMGTP";
pub const FRACTIONAL_MAGNITUDES: &str = "munpfa";

/// Whether `c` is a digit of `radix`: `0..=9`, then `a`/`A` for ten and onwards.
pub fn is_radix_digit(c: char, radix: u32) -> bool {
    matches!(c.to_digit(36), Some(value) if value < radix)
}

fn digit_groups<'a, P>(is_digit: P) -> impl FnMut(&'a str) -> ParserResult<'a, &'a str>
where
    P: Fn(char) -> bool + Copy,
{
    recognize(pair(
        take_while1(is_digit),
        many0(pair(char('_'), take_while1(is_digit))),
    ))
}

fn decimal_digits(input: &str) -> ParserResult<&str> {
    digit_groups(|c: char| c.is_ascii_digit())(input)
}

fn radix_integer(input: &str) -> ParserResult<&str> {
    let (rest, radix) =
        terminated(map_res(digit1, |s: &str| s.parse::<u32>()), char('r'))(input)?;
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(nom::Err::Error(VerboseError::from_error_kind(
            input,
            ErrorKind::Verify,
        )));
    }
    let (rest, _) = digit_groups(move |c: char| is_radix_digit(c, radix))(rest)?;
    let (rest, _) = if radix == 10 {
        opt(one_of(MAGNITUDES))(rest)?
    } else {
        (rest, None)
    };
    Ok((rest, &input[..input.len() - rest.len()]))
}

fn decimal_integer(input: &str) -> ParserResult<&str> {
    recognize(pair(decimal_digits, opt(one_of(MAGNITUDES))))(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn integer_literal(input: &str) -> ParserResult<&str> {
    context("integer literal", alt((radix_integer, decimal_integer)))(input)
}

fn exponent(input: &str) -> ParserResult<&str> {
    recognize(tuple((one_of("Ee"), opt(one_of("+-")), digit1)))(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn float_literal(input: &str) -> ParserResult<&str> {
    context(
        "float literal",
        alt((
            recognize(tuple((
                decimal_digits,
                char('.'),
                decimal_digits,
                opt(alt((
                    exponent,
                    recognize(one_of(MAGNITUDES)),
                    recognize(one_of(FRACTIONAL_MAGNITUDES)),
                ))),
            ))),
            recognize(pair(decimal_digits, one_of(FRACTIONAL_MAGNITUDES))),
        )),
    )(input)
}
