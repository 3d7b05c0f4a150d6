//! The fixed expression grammar
//!
//! The grammar is shown to readers in its textbook left-recursive form, but the
//! parser expands `E` and `T` right-recursively (`E → T + E | T`, `T → F * T | F`).
//! Derivation traces and tree shapes follow the right-recursive productions.

use serde::{Serialize, Serializer};
use std::fmt;

/// The grammar as it is displayed.
pub const DISPLAYED_GRAMMAR: &[&str] = &["E → E + T | T", "T → T * F | F", "F → ( E ) | id"];

/// The productions the parser actually expands.
pub const IMPLEMENTED_GRAMMAR: &[&str] = &["E → T + E | T", "T → F * T | F", "F → ( E ) | id"];

/// Non-terminal symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NonTerminal {
    /// Expression
    E,
    /// Term
    T,
    /// Factor
    F,
}

impl NonTerminal {
    pub fn as_str(&self) -> &'static str {
        match self {
            NonTerminal::E => "E",
            NonTerminal::T => "T",
            NonTerminal::F => "F",
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule label recorded in the derivation trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Recorded on entering `E`, before the alternative is known
    ExprAlternatives,
    ExprSum,
    ExprTerm,
    TermProduct,
    TermFactor,
    FactorGroup,
    FactorId,
}

impl Rule {
    pub fn label(&self) -> &'static str {
        match self {
            Rule::ExprAlternatives => "E → T + E | T",
            Rule::ExprSum => "E → T + E",
            Rule::ExprTerm => "E → T",
            Rule::TermProduct => "T → F * T",
            Rule::TermFactor => "T → F",
            Rule::FactorGroup => "F → ( E )",
            Rule::FactorId => "F → id",
        }
    }

}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
