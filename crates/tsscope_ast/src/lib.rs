//! tsscope_ast: the syntax tree consumed by the scope analyzer.
//!
//! Nodes are arena-allocated and reference their children through `&'a`
//! borrows. Every node carries a [`NodeData`] with its kind tag, source range,
//! flags and a unique [`NodeId`]. The tree is produced by an external parser
//! (or by `tsscope_nodebuilder`) and is never mutated by the analyzer.

pub mod node;
pub mod syntax_kind;
pub mod types;
pub mod visitor;

pub use node::*;
pub use syntax_kind::SyntaxKind;
pub use types::*;
