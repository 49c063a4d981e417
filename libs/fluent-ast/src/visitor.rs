//! # AST Visitor
//!
//! [`Visitor::visit`] selects a handler by the node's [`NodeKind`] and
//! nothing else. Every handler defaults to [`Visitor::generic_visit`], which
//! visits the node's children in declaration order. An overriding handler
//! decides for itself whether to recurse: the engine never descends through a
//! specialized handler on its own.
//!
//! Traversal is pre-order and stops at the first handler error, which is
//! returned unchanged to the caller of `visit`.
//!
//! ## Usage
//!
//! ```rust
//! use std::convert::Infallible;
//! use fluent_ast::{Identifier, Message, Pattern, Resource, TextElement, TopLevel, Visitor};
//!
//! #[derive(Default)]
//! struct Texts(Vec<String>);
//!
//! impl Visitor for Texts {
//!     type Error = Infallible;
//!
//!     fn visit_text_element(&mut self, node: &TextElement) -> Result<(), Infallible> {
//!         self.0.push(node.value.clone());
//!         Ok(())
//!     }
//! }
//!
//! let message = Message::new(Identifier::new("hello"), Some(Pattern::text("Hi")), vec![]);
//! let resource = Resource::new(vec![TopLevel::Message(message)]);
//!
//! let mut texts = Texts::default();
//! texts.visit(&resource).unwrap();
//! assert_eq!(texts.0, ["Hi"]);
//! ```

use config::constants::StackConfig;
use log::trace;

use crate::ast::*;
use crate::node::{Child, Node, NodeKind};
use crate::span::Span;

/// Visitor over the Fluent AST.
///
/// Implement `visit_<variant>` for the variants you care about; everything
/// else recurses through [`generic_visit`](Visitor::generic_visit).
pub trait Visitor {
    /// Error a handler may abort traversal with. Use
    /// [`Infallible`](std::convert::Infallible) when handlers cannot fail.
    type Error;

    /// Entry point: dispatches `node` to the handler for its variant.
    fn visit<'a>(&mut self, node: impl Into<Node<'a>>) -> Result<(), Self::Error> {
        dispatch(self, node.into())
    }

    /// Visits every child of `node`. Call this from a handler to continue
    /// into the subtree.
    fn generic_visit<'a>(&mut self, node: impl Into<Node<'a>>) -> Result<(), Self::Error> {
        walk(self, node.into())
    }

    /// Stack growth settings used while dispatching.
    fn stack_config(&self) -> StackConfig {
        StackConfig::default()
    }

    fn visit_resource(&mut self, node: &Resource) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_message(&mut self, node: &Message) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_term(&mut self, node: &Term) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_pattern(&mut self, node: &Pattern) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_text_element(&mut self, node: &TextElement) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_placeable(&mut self, node: &Placeable) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_string_literal(&mut self, node: &StringLiteral) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_number_literal(&mut self, node: &NumberLiteral) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_message_reference(&mut self, node: &MessageReference) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_term_reference(&mut self, node: &TermReference) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_variable_reference(&mut self, node: &VariableReference) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_function_reference(&mut self, node: &FunctionReference) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_select_expression(&mut self, node: &SelectExpression) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_call_arguments(&mut self, node: &CallArguments) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_attribute(&mut self, node: &Attribute) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_variant(&mut self, node: &Variant) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_named_argument(&mut self, node: &NamedArgument) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_identifier(&mut self, node: &Identifier) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_comment(&mut self, node: &Comment) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_group_comment(&mut self, node: &GroupComment) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_resource_comment(&mut self, node: &ResourceComment) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_junk(&mut self, node: &Junk) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_annotation(&mut self, node: &Annotation) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }

    fn visit_span(&mut self, node: &Span) -> Result<(), Self::Error> {
        self.generic_visit(node)
    }
}

/// Calls the handler registered for the variant of `node`.
///
/// Runs on a grown stack segment when less than the visitor's red zone is
/// left, so recursion depth is bounded by memory, not by the thread stack.
pub fn dispatch<V: Visitor + ?Sized>(visitor: &mut V, node: Node<'_>) -> Result<(), V::Error> {
    let stack = visitor.stack_config();
    let kind: NodeKind = node.kind();
    trace!("visit {}", kind);

    stacker::maybe_grow(stack.red_zone, stack.stack_size, || match node {
        Node::Resource(n) => visitor.visit_resource(n),
        Node::Message(n) => visitor.visit_message(n),
        Node::Term(n) => visitor.visit_term(n),
        Node::Pattern(n) => visitor.visit_pattern(n),
        Node::TextElement(n) => visitor.visit_text_element(n),
        Node::Placeable(n) => visitor.visit_placeable(n),
        Node::StringLiteral(n) => visitor.visit_string_literal(n),
        Node::NumberLiteral(n) => visitor.visit_number_literal(n),
        Node::MessageReference(n) => visitor.visit_message_reference(n),
        Node::TermReference(n) => visitor.visit_term_reference(n),
        Node::VariableReference(n) => visitor.visit_variable_reference(n),
        Node::FunctionReference(n) => visitor.visit_function_reference(n),
        Node::SelectExpression(n) => visitor.visit_select_expression(n),
        Node::CallArguments(n) => visitor.visit_call_arguments(n),
        Node::Attribute(n) => visitor.visit_attribute(n),
        Node::Variant(n) => visitor.visit_variant(n),
        Node::NamedArgument(n) => visitor.visit_named_argument(n),
        Node::Identifier(n) => visitor.visit_identifier(n),
        Node::Comment(n) => visitor.visit_comment(n),
        Node::GroupComment(n) => visitor.visit_group_comment(n),
        Node::ResourceComment(n) => visitor.visit_resource_comment(n),
        Node::Junk(n) => visitor.visit_junk(n),
        Node::Annotation(n) => visitor.visit_annotation(n),
        Node::Span(n) => visitor.visit_span(n),
    })
}

/// Visits the children of `node`: absent optional fields are skipped,
/// single children visited, sequences visited in index order.
pub fn walk<V: Visitor + ?Sized>(visitor: &mut V, node: Node<'_>) -> Result<(), V::Error> {
    for field in node.fields() {
        match field.child {
            Child::Absent => {}
            Child::Single(child) => visitor.visit(child)?,
            Child::Sequence(children) => {
                for child in children {
                    visitor.visit(child)?;
                }
            }
        }
    }
    Ok(())
}
