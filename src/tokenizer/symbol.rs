//! # Punctuation and Operator Tokens
//!
//! This module defines the punctuation, reserved characters and operators of the language.
//! Every symbol is an exact lexeme; the lexicon matches all of them at the cursor and the
//! scanner keeps the longest, so `(*)` is read as [`Symbol::OpCircledMultiply`] rather than
//! `(`, `*`, `)`.
//!
//! ## Symbol Groups
//!
//! * Delimiters: parentheses, brackets, braces, `,`, `:`, dots and `->`
//! * Reserved characters: `;`, `@`, `!`, `&`, `%`, `$` (recognized, given no meaning yet)
//! * Operators: comparison, arithmetic and assignment forms
//! * Circled (`(+)`) and boxed (`[+]`) operator variants
//! * Empty pairs `()`, `[]` and `{}`

use strum::{EnumProperty, IntoEnumIterator};
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// A punctuation or operator lexeme.
///
/// The strum serialization is the source text; the `name` property is the conformance name
/// reported for the token kind.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
    strum_macros::EnumProperty,
)]
pub enum Symbol {
    #[strum(serialize = "(", props(name = "LEFT_PARENTHESIS"))]
    LeftParenthesis,
    #[strum(serialize = ")", props(name = "RIGHT_PARENTHESIS"))]
    RightParenthesis,
    #[strum(serialize = "[", props(name = "LEFT_BRACKET"))]
    LeftBracket,
    #[strum(serialize = "]", props(name = "RIGHT_BRACKET"))]
    RightBracket,
    #[strum(serialize = "{", props(name = "LEFT_BRACE"))]
    LeftBrace,
    #[strum(serialize = "}", props(name = "RIGHT_BRACE"))]
    RightBrace,
    #[strum(serialize = ",", props(name = "COMMA"))]
    Comma,
    #[strum(serialize = ":", props(name = "COLON"))]
    Colon,
    #[strum(serialize = ".", props(name = "DOT"))]
    Dot,
    #[strum(serialize = "..", props(name = "DOTDOT"))]
    DotDot,
    #[strum(serialize = "...", props(name = "ELLIPSIS"))]
    Ellipsis,
    #[strum(serialize = "->", props(name = "RIGHT_ARROW"))]
    RightArrow,

    #[strum(serialize = ";", props(name = "RESERVED_SEMICOLON"))]
    ReservedSemicolon,
    #[strum(serialize = "@", props(name = "RESERVED_COMMERCIAL_AT"))]
    ReservedCommercialAt,
    #[strum(serialize = "!", props(name = "RESERVED_EXCLAMATION_MARK"))]
    ReservedExclamationMark,
    #[strum(serialize = "&", props(name = "RESERVED_AMPERSAND"))]
    ReservedAmpersand,
    #[strum(serialize = "%", props(name = "RESERVED_PERCENT"))]
    ReservedPercent,
    #[strum(serialize = "$", props(name = "RESERVED_DOLLAR"))]
    ReservedDollar,

    #[strum(serialize = "=", props(name = "OP_EQ"))]
    OpEq,
    #[strum(serialize = "<", props(name = "OP_LT"))]
    OpLt,
    #[strum(serialize = ">", props(name = "OP_GT"))]
    OpGt,
    #[strum(serialize = "<=", props(name = "OP_LEQ"))]
    OpLeq,
    #[strum(serialize = ">=", props(name = "OP_GEQ"))]
    OpGeq,
    #[strum(serialize = "<>", props(name = "OP_NEQ"))]
    OpNeq,
    #[strum(serialize = ":=", props(name = "OP_ASSIGN"))]
    OpAssign,
    #[strum(serialize = "><", props(name = "OP_CROSS"))]
    OpCross,
    #[strum(serialize = "+", props(name = "OP_PLUS"))]
    OpPlus,
    #[strum(serialize = "-", props(name = "OP_MINUS"))]
    OpMinus,
    #[strum(serialize = "*", props(name = "OP_MULTIPLY"))]
    OpMultiply,
    #[strum(serialize = "/", props(name = "OP_DIVIDE"))]
    OpDivide,
    #[strum(serialize = "+=", props(name = "OP_PLUS_ASSIGN"))]
    OpPlusAssign,
    #[strum(serialize = "-=", props(name = "OP_MINUS_ASSIGN"))]
    OpMinusAssign,
    #[strum(serialize = "*=", props(name = "OP_MULTIPLY_ASSIGN"))]
    OpMultiplyAssign,
    #[strum(serialize = "/=", props(name = "OP_DIVIDE_ASSIGN"))]
    OpDivideAssign,
    #[strum(serialize = "^", props(name = "OP_EXPONENT"))]
    OpExponent,

    #[strum(serialize = "(=)", props(name = "OP_CIRCLED_EQ"))]
    OpCircledEq,
    #[strum(serialize = "(<)", props(name = "OP_CIRCLED_LT"))]
    OpCircledLt,
    #[strum(serialize = "(>)", props(name = "OP_CIRCLED_GT"))]
    OpCircledGt,
    #[strum(serialize = "(<=)", props(name = "OP_CIRCLED_LEQ"))]
    OpCircledLeq,
    #[strum(serialize = "(>=)", props(name = "OP_CIRCLED_GEQ"))]
    OpCircledGeq,
    #[strum(serialize = "(<>)", props(name = "OP_CIRCLED_NEQ"))]
    OpCircledNeq,
    #[strum(serialize = "(><)", props(name = "OP_CIRCLED_CROSS"))]
    OpCircledCross,
    #[strum(serialize = "(+)", props(name = "OP_CIRCLED_PLUS"))]
    OpCircledPlus,
    #[strum(serialize = "(-)", props(name = "OP_CIRCLED_MINUS"))]
    OpCircledMinus,
    #[strum(serialize = "(*)", props(name = "OP_CIRCLED_MULTIPLY"))]
    OpCircledMultiply,
    #[strum(serialize = "(/)", props(name = "OP_CIRCLED_DIVIDE"))]
    OpCircledDivide,
    #[strum(serialize = "(.)", props(name = "OP_CIRCLED_DOT"))]
    OpCircledDot,

    #[strum(serialize = "[=]", props(name = "OP_BOXED_EQ"))]
    OpBoxedEq,
    #[strum(serialize = "[<]", props(name = "OP_BOXED_LT"))]
    OpBoxedLt,
    #[strum(serialize = "[>]", props(name = "OP_BOXED_GT"))]
    OpBoxedGt,
    #[strum(serialize = "[<=]", props(name = "OP_BOXED_LEQ"))]
    OpBoxedLeq,
    #[strum(serialize = "[>=]", props(name = "OP_BOXED_GEQ"))]
    OpBoxedGeq,
    #[strum(serialize = "[<>]", props(name = "OP_BOXED_NEQ"))]
    OpBoxedNeq,
    #[strum(serialize = "[><]", props(name = "OP_BOXED_CROSS"))]
    OpBoxedCross,
    #[strum(serialize = "[+]", props(name = "OP_BOXED_PLUS"))]
    OpBoxedPlus,
    #[strum(serialize = "[-]", props(name = "OP_BOXED_MINUS"))]
    OpBoxedMinus,
    #[strum(serialize = "[*]", props(name = "OP_BOXED_MULTIPLY"))]
    OpBoxedMultiply,
    #[strum(serialize = "[/]", props(name = "OP_BOXED_DIVIDE"))]
    OpBoxedDivide,
    #[strum(serialize = "[.]", props(name = "OP_BOXED_DOT"))]
    OpBoxedDot,

    #[strum(serialize = "()", props(name = "OP_PARENTHESES"))]
    OpParentheses,
    #[strum(serialize = "[]", props(name = "OP_BRACKETS"))]
    OpBrackets,
    #[strum(serialize = "{}", props(name = "OP_BRACES"))]
    OpBraces,
}

impl Symbol {
    /// Source text of the symbol.
    pub fn text(self) -> &'static str {
        self.into()
    }

    /// Conformance name, e.g. `OP_MULTIPLY` for `*`.
    pub fn name(self) -> &'static str {
        self.get_str("name").unwrap_or("SYMBOL")
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Symbol::iter().find(|symbol| symbol.name() == name)
    }
}
