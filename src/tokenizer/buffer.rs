use super::{
    scanner::Scanner,
    token::{Token, TokenKind},
};
use crate::{
    config::ScanConfig,
    error::{Diagnostic, Error},
    Result,
};

/// A fully drained scan: every token of one source text together with its diagnostics.
#[derive(Debug, Clone)]
pub struct TokenizedBuffer<'s> {
    origin: Option<String>,
    tokens: Vec<Token<'s>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'s> TokenizedBuffer<'s> {
    #[tracing::instrument(level = "debug", skip(source, config))]
    pub fn tokenize(source: &'s str, origin: Option<&str>, config: &ScanConfig) -> Self {
        let mut scanner = Scanner::new(source).with_config(config.clone());
        if let Some(origin) = origin {
            scanner = scanner.with_origin(origin);
        }
        let tokens: Vec<_> = scanner.by_ref().collect();
        tracing::debug!(tokens = tokens.len(), "tokenized");
        Self {
            origin: origin.map(str::to_string),
            tokens,
            diagnostics: scanner.into_diagnostics(),
        }
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn tokens(&self) -> &[Token<'s>] {
        &self.tokens
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn token_at(&self, index: usize) -> Option<&Token<'s>> {
        self.tokens.get(index)
    }

    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|token| token.kind)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Never true in practice: a scan always ends with `EOF`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Concatenated lexemes, i.e. the source text minus a leading byte-order mark.
    pub fn reconstruct(&self) -> String {
        self.tokens.iter().map(|token| token.lexeme).collect()
    }

    /// The tokens, or the first diagnostic as [`Error::Lex`].
    pub fn into_result(self) -> Result<Vec<Token<'s>>> {
        match self.diagnostics.into_iter().next() {
            Some(diagnostic) => Err(Error::Lex(diagnostic)),
            None => Ok(self.tokens),
        }
    }
}

impl<'s> IntoIterator for TokenizedBuffer<'s> {
    type Item = Token<'s>;
    type IntoIter = std::vec::IntoIter<Token<'s>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
