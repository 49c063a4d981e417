//! # Fluent AST Crate
//!
//! Typed Abstract Syntax Tree for Fluent localization resources, together
//! with a visitor engine for walking it.
//!
//! ## Architecture
//!
//! ```text
//! Fluent Source → fluent-syntax (parser) → fluent-ast (owned AST) → Visitor
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::convert::Infallible;
//! use fluent_ast::{parse, TextElement, Visitor};
//!
//! #[derive(Default)]
//! struct TextRuns(usize);
//!
//! impl Visitor for TextRuns {
//!     type Error = Infallible;
//!
//!     fn visit_text_element(&mut self, _node: &TextElement) -> Result<(), Infallible> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! let resource = parse("a = one\nb = two { $n } three\n");
//! let mut runs = TextRuns::default();
//! runs.visit(&resource).unwrap();
//! assert_eq!(runs.0, 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Typed AST**: All nodes are strongly typed Rust structs and enums
//! - **Static Schema**: Each variant declares its child fields once, in
//!   [`SyntaxNode::fields`]; traversal is derived from that
//! - **Pre-order Visits**: Handlers run before their subtree and choose
//!   whether to recurse
//! - **No Evaluation**: Pure syntax, no message formatting

pub mod ast;
pub mod error;
pub mod node;
#[cfg(feature = "fluent-parser")]
pub mod parser;
pub mod span;
pub mod visitor;

// Re-exports for convenience
pub use ast::*;
pub use error::ParseError;
pub use node::{Child, Field, Node, NodeKind, SyntaxNode};
#[cfg(feature = "fluent-parser")]
pub use parser::{parse, parse_strict};
pub use span::Span;
pub use visitor::{dispatch, walk, Visitor};

#[cfg(test)]
mod tests;
