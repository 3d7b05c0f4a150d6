//! Text renderings of parse results
//!
//! - [`treeviz`]: box-drawing tree, one node per line
//! - [`tag`]: XML-like nesting that mirrors the tree
//! - [`trace`]: the derivation trace and the leftmost derivation
//!
//! Structured output (json, yaml) goes through serde in the
//! [processor](crate::expr::processor).

pub mod tag;
pub mod trace;
pub mod treeviz;

pub use tag::serialize_tree_tag;
pub use trace::{derivation_str, trace_str};
pub use treeviz::to_treeviz_str;
