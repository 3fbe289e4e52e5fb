//! tsscope_core: shared primitives for the scope analyzer.
//!
//! Provides string interning and source text ranges used by the syntax tree,
//! the analyzer, and the diagnostics it produces.

pub mod intern;
pub mod text;

pub use intern::{DisplayInterned, InternedString, StringInterner};
pub use text::{TextPos, TextRange, TextSpan};
