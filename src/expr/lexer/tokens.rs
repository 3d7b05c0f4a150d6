//! Token definitions for the expression grammar
//!
//! The terminal alphabet is `+ * ( ) id`. The tokens are defined using the logos
//! derive macro; spaces are skipped, every other character outside the alphabet is
//! a lexer error.
use logos::Logos;
use serde::{Serialize, Serializer};
use std::fmt;

/// All terminal symbols of the grammar
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(skip r" ")]
pub enum Token {
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("id")]
    Id,
}

impl Token {
    /// The literal text of the token, as it appears in the grammar
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Plus => "+",
            Token::Star => "*",
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::Id => "id",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
