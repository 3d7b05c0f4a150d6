//! Leftmost derivation replay
//!
//! Rebuilds the sequence of sentential forms a parse tree encodes, from the start
//! symbol down to the terminal string, expanding the leftmost non-terminal at every
//! step. Forms are rendered with one space between symbols.

use crate::expr::tree::{ParseNode, ParseTree};

/// Sentential forms from `E` to the derived string
pub fn leftmost_derivation(tree: &ParseTree) -> Vec<String> {
    let mut form: Vec<&ParseNode> = vec![tree.root()];
    let mut forms = vec![render(&form)];

    while let Some(index) = form.iter().position(|node| !node.is_terminal()) {
        let node = form[index];
        form.splice(index..=index, tree.children(node));
        forms.push(render(&form));
    }

    forms
}

fn render(form: &[&ParseNode]) -> String {
    form.iter()
        .map(|node| node.symbol())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parser::parse;

    #[test]
    fn test_single_id() {
        let result = parse("id");
        let forms = leftmost_derivation(result.tree().unwrap());
        assert_eq!(forms, vec!["E", "T", "F", "id"]);
    }

    #[test]
    fn test_sum() {
        let result = parse("id + id");
        let forms = leftmost_derivation(result.tree().unwrap());
        assert_eq!(
            forms,
            vec![
                "E",
                "T + E",
                "F + E",
                "id + E",
                "id + T",
                "id + F",
                "id + id"
            ]
        );
    }

    #[test]
    fn test_one_form_per_non_terminal() {
        let result = parse("( id + id ) * id");
        let tree = result.tree().unwrap();
        let forms = leftmost_derivation(tree);
        let non_terminals = tree.nodes().filter(|n| !n.is_terminal()).count();

        assert_eq!(forms.len(), non_terminals + 1);
        assert_eq!(forms.last().unwrap(), &tree.yield_string());
    }
}
