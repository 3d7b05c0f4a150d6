//! Display-ready view of a parse result
//!
//! [`ParseReport`] is what a shell shows the user: a verdict, a one-line message,
//! the derivation trace and, for accepted inputs, the tree.

use crate::expr::parser::{DerivationStep, ParseResult};
use crate::expr::tree::ParseTree;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub input: String,
    pub accepted: bool,
    pub message: String,
    pub steps: Vec<DerivationStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<ParseTree>,
}

impl ParseReport {
    pub fn from_result(input: &str, result: &ParseResult) -> Self {
        let message = match result {
            ParseResult::Success { .. } => {
                format!("The string \"{}\" is accepted by the grammar.", input)
            }
            ParseResult::Failure { error, .. } => error.to_string(),
        };

        Self {
            input: input.to_string(),
            accepted: result.is_success(),
            message,
            steps: result.steps().to_vec(),
            tree: result.tree().cloned(),
        }
    }

    /// Short verdict headline
    pub fn headline(&self) -> &'static str {
        if self.accepted {
            "Valid String!"
        } else {
            "Invalid String"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parser::parse;

    #[test]
    fn test_accepted_report() {
        let input = "id + id";
        let report = ParseReport::from_result(input, &parse(input));
        assert!(report.accepted);
        assert_eq!(report.headline(), "Valid String!");
        assert_eq!(
            report.message,
            "The string \"id + id\" is accepted by the grammar."
        );
        assert_eq!(report.steps.len(), 8);
        assert!(report.tree.is_some());
    }

    #[test]
    fn test_rejected_report() {
        let input = "id + id )";
        let report = ParseReport::from_result(input, &parse(input));
        assert!(!report.accepted);
        assert_eq!(report.headline(), "Invalid String");
        assert_eq!(
            report.message,
            "Unexpected token ')' at position 3 after a complete expression"
        );
        assert_eq!(report.steps.len(), 5);
        assert!(report.tree.is_none());
    }

    #[test]
    fn test_json_omits_missing_tree() {
        let report = ParseReport::from_result("", &parse(""));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["accepted"], false);
        assert_eq!(json["message"], "Empty input string");
        assert!(json.get("tree").is_none());
    }
}
