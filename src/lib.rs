//! # cfg-explorer
//!
//! A recursive-descent parser for the classic expression grammar
//!
//! ```text
//! E → E + T | T
//! T → T * F | F
//! F → ( E ) | id
//! ```
//!
//! The parser builds a parse tree and a derivation trace for every input, and reports
//! rejected inputs with positional diagnostics. See [`expr`] for the pipeline
//! (lexer → parser → report / formats).

pub mod expr;

pub use expr::parser::{parse, parse_with_options, ParseOptions, ParseResult};
