//! Parser module for arithmetic expressions
//!
//! This module drives the recursive descent over a token stream and packages the
//! outcome as a [`ParseResult`]. Rejections are values, never panics: a failed parse
//! still carries the first few derivation steps so a caller can show how far the
//! parser got.
//!
//! `E` and `T` are expanded right-recursively (`E → T + E`, `T → F * T`), so
//! `id + id + id` nests to the right. Precedence of `*` over `+` is structural: every
//! product is a `T` subtree below an `E`.

mod error;
mod state;

pub use error::ParseError;

use crate::expr::grammar::Rule;
use crate::expr::lexer::{tokenize, Token};
use crate::expr::tree::ParseTree;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use state::ParserState;
use std::fmt;
use std::sync::Arc;

/// Number of derivation steps kept on a failed parse
pub const DEFAULT_FAILURE_STEP_LIMIT: usize = 5;

/// Knobs for a parse call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Maximum number of derivation steps returned with a failure
    pub failure_step_limit: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            failure_step_limit: DEFAULT_FAILURE_STEP_LIMIT,
        }
    }
}

/// One entry of the derivation trace
///
/// Every step of one parse shares the same detokenized input; a step only stores
/// where its snapshot starts, so a trace costs memory linear in the input.
#[derive(Clone)]
pub struct DerivationStep {
    text: Arc<str>,
    start: usize,
    pub rule: Rule,
    /// False only for the alternatives entry recorded on entering `E`
    pub applied: bool,
}

impl DerivationStep {
    /// A step whose snapshot is `text[start..]`
    pub(crate) fn new(text: Arc<str>, start: usize, rule: Rule, applied: bool) -> Self {
        Self {
            text,
            start,
            rule,
            applied,
        }
    }

    /// Unconsumed tokens when the decision was recorded, space separated
    pub fn snapshot(&self) -> &str {
        &self.text[self.start..]
    }
}

impl PartialEq for DerivationStep {
    fn eq(&self, other: &Self) -> bool {
        self.rule == other.rule
            && self.applied == other.applied
            && self.snapshot() == other.snapshot()
    }
}

impl Eq for DerivationStep {}

impl fmt::Debug for DerivationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivationStep")
            .field("snapshot", &self.snapshot())
            .field("rule", &self.rule)
            .field("applied", &self.applied)
            .finish()
    }
}

impl Serialize for DerivationStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DerivationStep", 3)?;
        state.serialize_field("snapshot", self.snapshot())?;
        state.serialize_field("rule", &self.rule)?;
        state.serialize_field("applied", &self.applied)?;
        state.end()
    }
}

/// Outcome of parsing one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ParseResult {
    Success {
        tree: ParseTree,
        steps: Vec<DerivationStep>,
    },
    Failure {
        error: ParseError,
        steps: Vec<DerivationStep>,
    },
}

impl ParseResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn tree(&self) -> Option<&ParseTree> {
        match self {
            ParseResult::Success { tree, .. } => Some(tree),
            ParseResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ParseError> {
        match self {
            ParseResult::Success { .. } => None,
            ParseResult::Failure { error, .. } => Some(error),
        }
    }

    pub fn steps(&self) -> &[DerivationStep] {
        match self {
            ParseResult::Success { steps, .. } | ParseResult::Failure { steps, .. } => steps,
        }
    }

    /// Human-readable failure reason, if the input was rejected
    pub fn reason(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    /// Drop the trace and convert into a standard `Result`
    pub fn into_result(self) -> Result<ParseTree, ParseError> {
        match self {
            ParseResult::Success { tree, .. } => Ok(tree),
            ParseResult::Failure { error, .. } => Err(error),
        }
    }
}

/// Main parser function: tokenize and parse `input` with default options
pub fn parse(input: &str) -> ParseResult {
    parse_with_options(input, ParseOptions::default())
}

pub fn parse_with_options(input: &str, options: ParseOptions) -> ParseResult {
    match tokenize(input) {
        Ok(tokens) => parse_tokens_with_options(&tokens, options),
        Err(err) => {
            log::debug!("rejected {:?}: {}", input, err);
            ParseResult::Failure {
                error: err.into(),
                steps: Vec::new(),
            }
        }
    }
}

/// Parse an already tokenized input with default options
pub fn parse_tokens(tokens: &[Token]) -> ParseResult {
    parse_tokens_with_options(tokens, ParseOptions::default())
}

pub fn parse_tokens_with_options(tokens: &[Token], options: ParseOptions) -> ParseResult {
    if tokens.is_empty() {
        return ParseResult::Failure {
            error: ParseError::EmptyInput,
            steps: Vec::new(),
        };
    }

    let mut state = ParserState::new(tokens);
    let outcome = state.parse_e();
    let (pos, nodes, mut steps) = state.finish();

    let outcome = outcome.and_then(|()| match tokens.get(pos) {
        Some(&token) => Err(ParseError::TrailingInput { token, index: pos }),
        None => Ok(()),
    });

    match outcome {
        Ok(()) => {
            log::debug!("accepted {} tokens, {} nodes", tokens.len(), nodes.len());
            ParseResult::Success {
                tree: ParseTree::new(nodes),
                steps,
            }
        }
        Err(error) => {
            log::debug!("rejected after {} steps: {}", steps.len(), error);
            steps.truncate(options.failure_step_limit);
            ParseResult::Failure { error, steps }
        }
    }
}
