//! Implementation of the expression lexer
//!
//! This module provides convenience functions for tokenizing expression text.
//! The actual tokenization is handled entirely by logos; this layer trims the input
//! and converts logos byte spans into character offsets.

use crate::expr::lexer::tokens::Token;
use logos::Logos;
use serde::Serialize;
use std::ops::Range;
use thiserror::Error;

/// A character that does not start any token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[error("Invalid character at position {offset}: '{found}'")]
pub struct LexError {
    /// 0-based character offset into the trimmed input
    pub offset: usize,
    pub found: char,
}

/// Tokenize a string, stopping at the first invalid character
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

/// Tokenize a string and collect tokens with their character spans in the trimmed input
pub fn tokenize_with_spans(source: &str) -> Result<Vec<(Token, Range<usize>)>, LexError> {
    let source = source.trim();
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let start = char_offset(source, span.start);
        match result {
            Ok(token) => tokens.push((token, start..char_offset(source, span.end))),
            Err(()) => {
                let found = source[span.start..].chars().next().unwrap_or_default();
                log::trace!("lex error at {}: {:?}", start, found);
                return Err(LexError {
                    offset: start,
                    found,
                });
            }
        }
    }

    Ok(tokens)
}

fn char_offset(source: &str, byte_offset: usize) -> usize {
    source[..byte_offset].chars().count()
}
