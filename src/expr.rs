//! Main module for expression parsing functionality
//!
//! The pipeline is split the same way every stage is consumed:
//!
//! - [`lexer`] turns the raw string into [`Token`]s.
//! - [`parser`] runs the recursive descent and produces a [`ParseResult`].
//! - [`report`] adapts a result for a display shell.
//! - [`formats`] and [`processor`] render results as text, json or yaml.

pub mod derivation;
pub mod formats;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod report;
pub mod samples;
pub mod tree;

pub use grammar::{NonTerminal, Rule};
pub use lexer::{LexError, Token};
pub use parser::{parse, parse_tokens, DerivationStep, ParseError, ParseResult};
pub use report::ParseReport;
pub use tree::{NodeId, ParseNode, ParseTree};
