//! Plain-text renderings of the derivation trace and the leftmost derivation

use crate::expr::derivation::leftmost_derivation;
use crate::expr::parser::DerivationStep;
use crate::expr::tree::ParseTree;

/// One numbered line per step. Applied rules are marked `[x]`, the alternatives
/// entry recorded on entering `E` is marked `[ ]`.
pub fn trace_str(steps: &[DerivationStep]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let mark = if step.applied { 'x' } else { ' ' };
            let remaining = match step.snapshot() {
                "" => "(end)",
                snapshot => snapshot,
            };
            format!("{:>2}. [{}] {:<13}  {}", i + 1, mark, step.rule.label(), remaining)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sentential forms, one per line, each after the first prefixed with `⇒`
pub fn derivation_str(tree: &ParseTree) -> String {
    leftmost_derivation(tree)
        .iter()
        .enumerate()
        .map(|(i, form)| {
            if i == 0 {
                form.clone()
            } else {
                format!("⇒ {}", form)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parser::parse;

    #[test]
    fn test_trace_lines() {
        let result = parse("id");
        let trace = trace_str(result.steps());
        let lines: Vec<&str> = trace.lines().collect();
        assert_eq!(
            lines,
            vec![
                " 1. [ ] E → T + E | T  id",
                " 2. [x] F → id         id",
                " 3. [x] T → F          (end)",
                " 4. [x] E → T          (end)",
            ]
        );
    }

    #[test]
    fn test_empty_trace() {
        assert_eq!(trace_str(&[]), "");
    }

    #[test]
    fn test_derivation_str() {
        let result = parse("id");
        assert_eq!(
            derivation_str(result.tree().unwrap()),
            "E\n⇒ T\n⇒ F\n⇒ id"
        );
    }
}
