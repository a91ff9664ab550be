use strum::IntoEnumIterator;

/// Reserved words of the language.
///
/// Each keyword is matched as its exact text. On a length tie a keyword outranks a lower
/// identifier, so `fn` is always [`Keyword::Fn`]; a longer identifier such as `fnord` still
/// wins by maximal munch.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    And,
    As,
    Assert,
    Axiom,
    Case,
    Div,
    Else,
    Emit,
    Enum,
    Extends,
    Finally,
    Fn,
    Forward,
    Forwarder,
    From,
    Given,
    If,
    Import,
    In,
    Inv,
    Initially,
    Lemma,
    Let,
    Mod,
    New,
    Not,
    Of,
    Op,
    Or,
    Proc,
    Pure,
    Return,
    Spawn,
    Switch,
    Theorem,
    Then,
    Type,
    Var,
    Variant,
    Where,
    While,
    Xor,
}

impl Keyword {
    /// Conformance name, `KW_FN` for `fn`.
    pub fn name(self) -> String {
        format!("KW_{}", self.as_ref().to_uppercase())
    }

    /// Parses a conformance name such as `KW_IF`.
    pub fn from_name(name: &str) -> Option<Self> {
        let text = name.strip_prefix("KW_")?;
        Keyword::iter().find(|kw| kw.as_ref().eq_ignore_ascii_case(text))
    }

    pub fn text(self) -> &'static str {
        self.into()
    }
}
