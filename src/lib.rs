pub mod config;
pub mod error;
pub mod tokenizer;

// Re-exports
pub use config::ScanConfig;
pub use error::{Diagnostic, Error, LexError, LiteralKind, Result};
pub use tokenizer::buffer::TokenizedBuffer;
pub use tokenizer::scanner::{tokenize, Scanner};
pub use tokenizer::token::{Span, Token, TokenKind};
