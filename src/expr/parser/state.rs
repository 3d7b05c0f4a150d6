//! Recursive-descent parser state
//!
//! One procedure per non-terminal, run on an explicit task stack instead of the call
//! stack. Each procedure is split at the point where it would call another one: the
//! callee is pushed as a task above a continuation that finishes the caller, so input
//! of any length or nesting depth parses without growing the native stack.
//!
//! The cursor, the node arena, the derivation log and the snapshot text live in
//! [`ParserState`], which is owned by a single top-level parse call. The cursor only
//! moves when a terminal is consumed, so after a failure it still points at the token
//! that could not be matched.

use crate::expr::grammar::{NonTerminal, Rule};
use crate::expr::lexer::{detokenize, Token};
use crate::expr::parser::{DerivationStep, ParseError};
use crate::expr::tree::{NodeId, ParseNode};
use std::sync::Arc;

/// Pending work on the task stack
#[derive(Debug, Clone, Copy)]
enum Task {
    /// Enter `E → T + E | T`
    Expr(Option<NodeId>),
    /// `E` after its `T`: either `+ E` or done
    ExprRest(NodeId),
    /// Enter `T → F * T | F`
    Term(Option<NodeId>),
    /// `T` after its `F`: either `* T` or done
    TermRest(NodeId),
    /// Enter `F → ( E ) | id`
    Factor(Option<NodeId>),
    /// `F → ( E )` after the inner `E`: require `)`
    GroupClose(NodeId),
}

pub(crate) struct ParserState<'t> {
    tokens: &'t [Token],
    pos: usize,
    nodes: Vec<ParseNode>,
    steps: Vec<DerivationStep>,
    /// The detokenized input, shared by every snapshot
    text: Arc<str>,
    /// Byte offset in `text` where token `i` starts; one extra entry for the end
    offsets: Vec<usize>,
}

impl<'t> ParserState<'t> {
    pub(crate) fn new(tokens: &'t [Token]) -> Self {
        let text: Arc<str> = detokenize(tokens).into();
        let mut offsets = Vec::with_capacity(tokens.len() + 1);
        let mut offset = 0;
        for token in tokens {
            offsets.push(offset);
            offset += token.as_str().len() + 1;
        }
        offsets.push(text.len());

        Self {
            tokens,
            pos: 0,
            nodes: Vec::new(),
            steps: Vec::new(),
            text,
            offsets,
        }
    }

    /// Consume the state, returning the cursor, the node arena and the trace
    pub(crate) fn finish(self) -> (usize, Vec<ParseNode>, Vec<DerivationStep>) {
        (self.pos, self.nodes, self.steps)
    }

    /// Parse one `E` starting at the cursor
    pub(crate) fn parse_e(&mut self) -> Result<(), ParseError> {
        let mut tasks = vec![Task::Expr(None)];

        while let Some(task) = tasks.pop() {
            match task {
                Task::Expr(parent) => {
                    let id = self.open(NonTerminal::E, parent);
                    self.record(Rule::ExprAlternatives, false);
                    tasks.push(Task::ExprRest(id));
                    tasks.push(Task::Term(Some(id)));
                }
                Task::ExprRest(id) => {
                    if self.peek() == Some(Token::Plus) {
                        self.terminal(Token::Plus, id);
                        self.record(Rule::ExprSum, true);
                        self.advance();
                        tasks.push(Task::Expr(Some(id)));
                    } else {
                        self.record(Rule::ExprTerm, true);
                    }
                }
                Task::Term(parent) => {
                    let id = self.open(NonTerminal::T, parent);
                    tasks.push(Task::TermRest(id));
                    tasks.push(Task::Factor(Some(id)));
                }
                Task::TermRest(id) => {
                    if self.peek() == Some(Token::Star) {
                        self.terminal(Token::Star, id);
                        self.record(Rule::TermProduct, true);
                        self.advance();
                        tasks.push(Task::Term(Some(id)));
                    } else {
                        self.record(Rule::TermFactor, true);
                    }
                }
                Task::Factor(parent) => {
                    let id = self.open(NonTerminal::F, parent);
                    match self.peek() {
                        Some(Token::OpenParen) => {
                            self.terminal(Token::OpenParen, id);
                            self.record(Rule::FactorGroup, true);
                            self.advance();
                            tasks.push(Task::GroupClose(id));
                            tasks.push(Task::Expr(Some(id)));
                        }
                        Some(Token::Id) => {
                            self.terminal(Token::Id, id);
                            self.record(Rule::FactorId, true);
                            self.advance();
                        }
                        _ => return Err(self.stall()),
                    }
                }
                Task::GroupClose(id) => {
                    if self.peek() != Some(Token::CloseParen) {
                        return Err(self.stall());
                    }
                    self.terminal(Token::CloseParen, id);
                    self.advance();
                }
            }
        }

        Ok(())
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Create a node and attach it as the last child of `parent`
    fn push_node(
        &mut self,
        parent: Option<NodeId>,
        make: impl FnOnce(NodeId) -> ParseNode,
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(make(id));
        if let Some(ParseNode::NonTerminal { children, .. }) =
            parent.and_then(|parent| self.nodes.get_mut(parent))
        {
            children.push(id);
        }
        id
    }

    fn open(&mut self, symbol: NonTerminal, parent: Option<NodeId>) -> NodeId {
        self.push_node(parent, |id| ParseNode::NonTerminal {
            id,
            parent,
            symbol,
            children: Vec::new(),
        })
    }

    /// Create a terminal node for the token under the cursor. Does not consume it.
    fn terminal(&mut self, token: Token, parent: NodeId) -> NodeId {
        self.push_node(Some(parent), |id| ParseNode::Terminal {
            id,
            parent: Some(parent),
            token,
        })
    }

    fn record(&mut self, rule: Rule, applied: bool) {
        let start = self.offsets[self.pos];
        let step = DerivationStep::new(Arc::clone(&self.text), start, rule, applied);
        log::trace!("[{}] {} | {}", self.pos, rule, step.snapshot());
        self.steps.push(step);
    }

    /// The error for a rule that cannot continue at the cursor
    fn stall(&self) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                token,
                index: self.pos,
            },
            None => ParseError::IncompleteParse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::lexer::tokenize;

    #[test]
    fn test_single_id() {
        let tokens = tokenize("id").unwrap();
        let mut state = ParserState::new(&tokens);
        state.parse_e().unwrap();
        let (pos, nodes, steps) = state.finish();

        assert_eq!(pos, 1);
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0].children(), &[1]);
        assert_eq!(nodes[3].symbol(), "id");
        let rules: Vec<Rule> = steps.iter().map(|s| s.rule).collect();
        assert_eq!(
            rules,
            vec![
                Rule::ExprAlternatives,
                Rule::FactorId,
                Rule::TermFactor,
                Rule::ExprTerm
            ]
        );
    }

    #[test]
    fn test_snapshot_offsets() {
        let tokens = tokenize("(id+id)*id").unwrap();
        let state = ParserState::new(&tokens);
        assert_eq!(&*state.text, "( id + id ) * id");
        assert_eq!(state.offsets, vec![0, 2, 5, 7, 10, 12, 14, 16]);
    }

    #[test]
    fn test_cursor_stays_on_failing_token() {
        let tokens = tokenize("( id id )").unwrap();
        let mut state = ParserState::new(&tokens);
        let err = state.parse_e().unwrap_err();
        let (pos, _, _) = state.finish();

        assert_eq!(pos, 2);
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                token: Token::Id,
                index: 2
            }
        );
    }

    #[test]
    fn test_missing_operand_is_incomplete() {
        let tokens = tokenize("id *").unwrap();
        let mut state = ParserState::new(&tokens);
        assert_eq!(state.parse_e(), Err(ParseError::IncompleteParse));
    }

    #[test]
    fn test_stops_before_trailing_tokens() {
        let tokens = tokenize("id )").unwrap();
        let mut state = ParserState::new(&tokens);
        assert!(state.parse_e().is_ok());
        let (pos, _, _) = state.finish();
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_deep_nesting_does_not_use_the_call_stack() {
        let depth = 100_000;
        let input = format!("{}id{}", "(".repeat(depth), ")".repeat(depth));
        let tokens = tokenize(&input).unwrap();
        let mut state = ParserState::new(&tokens);
        assert!(state.parse_e().is_ok());
        let (pos, nodes, _) = state.finish();
        assert_eq!(pos, tokens.len());
        assert_eq!(nodes.len(), 5 * depth + 4);
    }
}
