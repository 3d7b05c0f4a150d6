//! Treeviz formatter for parse trees

use crate::expr::tree::{ParseNode, ParseTree};

/// Render the tree with box-drawing connectors. Every line is `<symbol> #<id>`.
pub fn to_treeviz_str(tree: &ParseTree) -> String {
    let root = tree.root();
    let mut result = format!("{}\n", label(root));

    // (node, prefix of its line, is last sibling)
    let mut stack: Vec<(&ParseNode, String, bool)> = Vec::new();
    push_children(&mut stack, tree, root, "");

    while let Some((node, prefix, is_last)) = stack.pop() {
        let connector = if is_last { "└─" } else { "├─" };
        result.push_str(&format!("{}{} {}\n", prefix, connector, label(node)));

        let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        push_children(&mut stack, tree, node, &new_prefix);
    }

    result
}

fn label(node: &ParseNode) -> String {
    format!("{} #{}", node.symbol(), node.id())
}

/// Push children in reverse so the first child is popped first
fn push_children<'a>(
    stack: &mut Vec<(&'a ParseNode, String, bool)>,
    tree: &'a ParseTree,
    node: &'a ParseNode,
    prefix: &str,
) {
    let count = node.children().len();
    let children: Vec<&ParseNode> = tree.children(node).collect();
    for (i, child) in children.into_iter().enumerate().rev() {
        stack.push((child, prefix.to_string(), i + 1 == count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parser::parse;

    #[test]
    fn test_single_id() {
        let result = parse("id");
        assert_eq!(
            to_treeviz_str(result.tree().unwrap()),
            "E #0\n└─ T #1\n  └─ F #2\n    └─ id #3\n"
        );
    }

    #[test]
    fn test_one_line_per_node() {
        let result = parse("id * ( id + id )");
        let tree = result.tree().unwrap();
        assert_eq!(to_treeviz_str(tree).lines().count(), tree.len());
    }

    #[test]
    fn test_sibling_prefixes() {
        let result = parse("id + id");
        let output = to_treeviz_str(result.tree().unwrap());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "E #0",
                "├─ T #1",
                "│ └─ F #2",
                "│   └─ id #3",
                "├─ + #4",
                "└─ E #5",
                "  └─ T #6",
                "    └─ F #7",
                "      └─ id #8",
            ]
        );
    }

    #[test]
    fn test_nested_groups_render_without_recursion() {
        let depth = 1_000;
        let input = format!("{}id{}", "(".repeat(depth), ")".repeat(depth));
        let result = parse(&input);
        let tree = result.tree().unwrap();
        assert_eq!(to_treeviz_str(tree).lines().count(), tree.len());
    }
}
