//! Parse tree data model
//!
//! Nodes live in a flat arena indexed by their id. A non-terminal lists the ids of its
//! children and every node keeps its parent's id, so no operation on a tree (drop,
//! clone, comparison, serialization, traversal) recurses, however deep the tree is.
//!
//! Ids are handed out in creation order during parsing: a non-terminal before its
//! children, children left to right. Pre-order traversal therefore visits ids in
//! ascending order, and the arena order is the pre-order.

use crate::expr::grammar::NonTerminal;
use crate::expr::lexer::Token;
use serde::Serialize;

/// Identifier of a node, unique within one tree and equal to its arena index
pub type NodeId = usize;

/// One grammar-symbol instance in a derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ParseNode {
    NonTerminal {
        id: NodeId,
        parent: Option<NodeId>,
        symbol: NonTerminal,
        children: Vec<NodeId>,
    },
    Terminal {
        id: NodeId,
        parent: Option<NodeId>,
        token: Token,
    },
}

impl ParseNode {
    pub fn id(&self) -> NodeId {
        match self {
            ParseNode::NonTerminal { id, .. } | ParseNode::Terminal { id, .. } => *id,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        match self {
            ParseNode::NonTerminal { parent, .. } | ParseNode::Terminal { parent, .. } => *parent,
        }
    }

    /// The grammar symbol this node stands for (`E`, `T`, `F`, or a terminal's text)
    pub fn symbol(&self) -> &'static str {
        match self {
            ParseNode::NonTerminal { symbol, .. } => symbol.as_str(),
            ParseNode::Terminal { token, .. } => token.as_str(),
        }
    }

    /// Ids of the children, left to right
    pub fn children(&self) -> &[NodeId] {
        match self {
            ParseNode::NonTerminal { children, .. } => children,
            ParseNode::Terminal { .. } => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ParseNode::Terminal { .. })
    }
}

/// A complete parse tree rooted at `E`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseTree {
    nodes: Vec<ParseNode>,
}

impl ParseTree {
    /// Wrap an arena whose first node is the root and whose nodes sit at `nodes[id]`
    pub(crate) fn new(nodes: Vec<ParseNode>) -> Self {
        debug_assert!(!nodes.is_empty());
        debug_assert!(nodes.iter().enumerate().all(|(i, n)| n.id() == i));
        Self { nodes }
    }

    pub fn root(&self) -> &ParseNode {
        &self.nodes[0]
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in id order
    pub fn nodes(&self) -> std::slice::Iter<'_, ParseNode> {
        self.nodes.iter()
    }

    /// Walk the subtree below `node` in pre-order
    pub fn preorder<'a>(&'a self, node: &'a ParseNode) -> Preorder<'a> {
        Preorder {
            tree: self,
            stack: vec![node],
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&ParseNode> {
        self.nodes.get(id)
    }

    pub fn parent(&self, id: NodeId) -> Option<&ParseNode> {
        self.get(id)?.parent().and_then(|parent| self.get(parent))
    }

    /// Children of `node`, left to right
    pub fn children<'a>(&'a self, node: &'a ParseNode) -> impl Iterator<Item = &'a ParseNode> {
        node.children().iter().filter_map(move |&id| self.get(id))
    }

    pub fn child(&self, node: &ParseNode, index: usize) -> Option<&ParseNode> {
        node.children().get(index).and_then(|&id| self.get(id))
    }

    /// Terminal tokens, left to right
    pub fn leaves(&self) -> Vec<Token> {
        self.preorder(self.root())
            .filter_map(|node| match node {
                ParseNode::Terminal { token, .. } => Some(*token),
                ParseNode::NonTerminal { .. } => None,
            })
            .collect()
    }

    /// The derived string: leaf symbols joined by single spaces
    pub fn yield_string(&self) -> String {
        crate::expr::lexer::detokenize(&self.leaves())
    }

    /// Number of levels, counting the root as one
    pub fn depth(&self) -> usize {
        // A parent always has a smaller id than its children
        let mut depths = vec![0usize; self.nodes.len()];
        for node in &self.nodes {
            let depth = node.parent().map_or(1, |parent| depths[parent] + 1);
            depths[node.id()] = depth;
        }
        depths.into_iter().max().unwrap_or(0)
    }
}

/// Pre-order iterator over a subtree
pub struct Preorder<'a> {
    tree: &'a ParseTree,
    stack: Vec<&'a ParseNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a ParseNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let tree = self.tree;
        self.stack.extend(
            node.children()
                .iter()
                .rev()
                .filter_map(|&id| tree.get(id)),
        );
        Some(node)
    }
}
