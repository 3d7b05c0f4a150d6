//! Lexer module for arithmetic expressions
//!
//! Tokenization is a single logos pass over the trimmed input. Interior spaces are
//! skipped by the lexer itself, so the token stream handed to the parser never carries
//! whitespace. Offsets reported in [`LexError`] are character offsets into the
//! trimmed string, not into the raw input.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans, LexError};
pub use tokens::Token;

/// Join tokens back into their source text, one space between tokens.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detokenize() {
        let tokens = tokenize("(id+id)*id").unwrap();
        assert_eq!(detokenize(&tokens), "( id + id ) * id");
    }

    #[test]
    fn test_detokenize_empty() {
        assert_eq!(detokenize(&[]), "");
    }
}
