//! Error taxonomy for rejected inputs
//!
//! Every variant is an ordinary outcome of parsing, carried inside
//! [`ParseResult::Failure`](crate::expr::parser::ParseResult::Failure).

use crate::expr::lexer::{LexError, Token};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ParseError {
    /// A character does not start any token. `offset` is relative to the trimmed input.
    #[error("Invalid character at position {offset}: '{found}'")]
    Lexical { offset: usize, found: char },

    #[error("Empty input string")]
    EmptyInput,

    /// The current token cannot continue the rule in progress
    #[error("Unexpected token '{token}' at position {index}")]
    UnexpectedToken { token: Token, index: usize },

    /// Tokens ran out before the rule in progress could complete
    #[error("Incomplete parse")]
    IncompleteParse,

    /// A complete `E` was matched but tokens remain
    #[error("Unexpected token '{token}' at position {index} after a complete expression")]
    TrailingInput { token: Token, index: usize },
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lexical {
            offset: err.offset,
            found: err.found,
        }
    }
}
