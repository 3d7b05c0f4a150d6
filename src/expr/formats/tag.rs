//! XML-like tag serialization of parse trees
//!
//! ## Format
//!
//! - Non-terminal → tag named after the symbol, children nested inside
//! - Terminal → `<token>` element holding the escaped token text
//!
//! ```text
//! <E>
//!   <T>
//!     <F>
//!       <token>id</token>
//!     </F>
//!   </T>
//! </E>
//! ```

use crate::expr::tree::{ParseNode, ParseTree};

/// Serialize a tree to tag format
pub fn serialize_tree_tag(tree: &ParseTree) -> String {
    let mut result = String::new();
    let mut stack = vec![Visit::Open(tree.root(), 0)];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Open(node, indent_level) => {
                let indent = "  ".repeat(indent_level);
                match node {
                    ParseNode::Terminal { token, .. } => {
                        result.push_str(&format!(
                            "{}<token>{}</token>\n",
                            indent,
                            escape_xml(token.as_str())
                        ));
                    }
                    ParseNode::NonTerminal { symbol, .. } => {
                        result.push_str(&format!("{}<{}>\n", indent, symbol));
                        stack.push(Visit::Close(node, indent_level));
                        let children: Vec<&ParseNode> = tree.children(node).collect();
                        stack.extend(
                            children
                                .into_iter()
                                .rev()
                                .map(|child| Visit::Open(child, indent_level + 1)),
                        );
                    }
                }
            }
            Visit::Close(node, indent_level) => {
                result.push_str(&format!(
                    "{}</{}>\n",
                    "  ".repeat(indent_level),
                    node.symbol()
                ));
            }
        }
    }

    result.pop();
    result
}

/// Pending output: a node's opening line (and its subtree), or a closing tag
enum Visit<'a> {
    Open(&'a ParseNode, usize),
    Close(&'a ParseNode, usize),
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parser::parse;

    #[test]
    fn test_serialize_single_id() {
        let result = parse("id");
        assert_eq!(
            serialize_tree_tag(result.tree().unwrap()),
            "<E>\n  <T>\n    <F>\n      <token>id</token>\n    </F>\n  </T>\n</E>"
        );
    }

    #[test]
    fn test_tags_are_balanced() {
        let result = parse("( id + id ) * id");
        let output = serialize_tree_tag(result.tree().unwrap());
        for symbol in ["E", "T", "F"] {
            assert_eq!(
                output.matches(&format!("<{}>", symbol)).count(),
                output.matches(&format!("</{}>", symbol)).count()
            );
        }
        assert_eq!(output.matches("<token>").count(), 7);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&'\""), "a&lt;b&gt;&amp;&apos;&quot;");
    }

    #[test]
    fn test_nested_groups_render_without_recursion() {
        let depth = 1_000;
        let input = format!("{}id{}", "(".repeat(depth), ")".repeat(depth));
        let result = parse(&input);
        let output = serialize_tree_tag(result.tree().unwrap());
        assert_eq!(output.matches("<token>(</token>").count(), depth);
        assert!(output.ends_with("</E>"));
    }
}
