//! # Node Views
//!
//! Uniform, borrowed access to every node variant of the AST.
//!
//! - [`NodeKind`] is the variant tag.
//! - [`Node`] is a copyable reference to a node of any variant.
//! - [`SyntaxNode`] is the per-variant schema: each node struct lists its
//!   child-bearing fields, in declaration order, as [`Field`]s.
//!
//! The visitor engine only ever talks to this module, so a new node variant
//! needs a `SyntaxNode` impl and an entry in `node_kinds!`, never a change to
//! the traversal itself.
//!
//! ```rust
//! use fluent_ast::{Identifier, Message, Node, NodeKind, Pattern};
//!
//! let message = Message::new(Identifier::new("hello"), Some(Pattern::text("Hi")), vec![]);
//! let node = Node::from(&message);
//! assert_eq!(node.kind(), NodeKind::Message);
//! assert_eq!(node.children().len(), 2);
//! ```

use std::fmt;

use crate::ast::*;
use crate::span::Span;

macro_rules! node_kinds {
    ($($variant:ident),* $(,)?) => {
        /// Tag identifying the variant of a node.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum NodeKind {
            $($variant,)*
        }

        impl NodeKind {
            /// Every tag, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant,)*];

            /// The tag as written in Fluent's AST, e.g. `"TextElement"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => stringify!($variant),)*
                }
            }
        }

        /// A borrowed node of any variant.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[non_exhaustive]
        pub enum Node<'a> {
            $($variant(&'a $variant),)*
        }

        impl<'a> Node<'a> {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$variant(_) => NodeKind::$variant,)*
                }
            }

            /// Child-bearing fields of the node, in declaration order.
            pub fn fields(&self) -> Vec<Field<'a>> {
                match *self {
                    $(Node::$variant(node) => node.fields(),)*
                }
            }
        }

        $(
            impl<'a> From<&'a $variant> for Node<'a> {
                fn from(node: &'a $variant) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

node_kinds! {
    Resource,
    Message,
    Term,
    Pattern,
    TextElement,
    Placeable,
    StringLiteral,
    NumberLiteral,
    MessageReference,
    TermReference,
    VariableReference,
    FunctionReference,
    SelectExpression,
    CallArguments,
    Attribute,
    Variant,
    NamedArgument,
    Identifier,
    Comment,
    GroupComment,
    ResourceComment,
    Junk,
    Annotation,
    Span,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'a> Node<'a> {
    /// Child nodes in traversal order, with sequences flattened.
    pub fn children(&self) -> Vec<Node<'a>> {
        let mut children = Vec::new();
        for field in self.fields() {
            match field.child {
                Child::Absent => {}
                Child::Single(node) => children.push(node),
                Child::Sequence(nodes) => children.extend(nodes),
            }
        }
        children
    }
}

/// Contents of one child-bearing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child<'a> {
    /// An optional child that is not present.
    Absent,
    Single(Node<'a>),
    Sequence(Vec<Node<'a>>),
}

impl<'a> Child<'a> {
    pub fn single(node: impl Into<Node<'a>>) -> Self {
        Child::Single(node.into())
    }

    pub fn optional<T>(node: Option<&'a T>) -> Self
    where
        &'a T: Into<Node<'a>>,
    {
        match node {
            Some(node) => Child::Single(node.into()),
            None => Child::Absent,
        }
    }

    pub fn sequence<T>(nodes: &'a [T]) -> Self
    where
        &'a T: Into<Node<'a>>,
    {
        Child::Sequence(nodes.iter().map(Into::into).collect())
    }
}

/// A named child-bearing field of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: &'static str,
    pub child: Child<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, child: Child<'a>) -> Self {
        Self { name, child }
    }
}

/// Schema of a node variant.
///
/// `fields` lists child-bearing fields only; leaf values such as
/// [`TextElement::value`] are read through the struct itself.
pub trait SyntaxNode {
    const KIND: NodeKind;

    fn fields(&self) -> Vec<Field<'_>>;
}

impl SyntaxNode for Resource {
    const KIND: NodeKind = NodeKind::Resource;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("body", Child::sequence(&self.body))]
    }
}

impl SyntaxNode for Message {
    const KIND: NodeKind = NodeKind::Message;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("id", Child::single(&self.id)),
            Field::new("value", Child::optional(self.value.as_ref())),
            Field::new("attributes", Child::sequence(&self.attributes)),
            Field::new("comment", Child::optional(self.comment.as_ref())),
        ]
    }
}

impl SyntaxNode for Term {
    const KIND: NodeKind = NodeKind::Term;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("id", Child::single(&self.id)),
            Field::new("value", Child::single(&self.value)),
            Field::new("attributes", Child::sequence(&self.attributes)),
            Field::new("comment", Child::optional(self.comment.as_ref())),
        ]
    }
}

impl SyntaxNode for Pattern {
    const KIND: NodeKind = NodeKind::Pattern;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("elements", Child::sequence(&self.elements))]
    }
}

impl SyntaxNode for TextElement {
    const KIND: NodeKind = NodeKind::TextElement;

    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }
}

impl SyntaxNode for Placeable {
    const KIND: NodeKind = NodeKind::Placeable;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("expression", Child::single(self.expression.as_ref()))]
    }
}

impl SyntaxNode for StringLiteral {
    const KIND: NodeKind = NodeKind::StringLiteral;

    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }
}

impl SyntaxNode for NumberLiteral {
    const KIND: NodeKind = NodeKind::NumberLiteral;

    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }
}

impl SyntaxNode for MessageReference {
    const KIND: NodeKind = NodeKind::MessageReference;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("id", Child::single(&self.id)),
            Field::new("attribute", Child::optional(self.attribute.as_ref())),
        ]
    }
}

impl SyntaxNode for TermReference {
    const KIND: NodeKind = NodeKind::TermReference;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("id", Child::single(&self.id)),
            Field::new("attribute", Child::optional(self.attribute.as_ref())),
            Field::new("arguments", Child::optional(self.arguments.as_ref())),
        ]
    }
}

impl SyntaxNode for VariableReference {
    const KIND: NodeKind = NodeKind::VariableReference;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("id", Child::single(&self.id))]
    }
}

impl SyntaxNode for FunctionReference {
    const KIND: NodeKind = NodeKind::FunctionReference;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("id", Child::single(&self.id)),
            Field::new("arguments", Child::single(&self.arguments)),
        ]
    }
}

impl SyntaxNode for SelectExpression {
    const KIND: NodeKind = NodeKind::SelectExpression;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("selector", Child::single(self.selector.as_ref())),
            Field::new("variants", Child::sequence(&self.variants)),
        ]
    }
}

impl SyntaxNode for CallArguments {
    const KIND: NodeKind = NodeKind::CallArguments;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("positional", Child::sequence(&self.positional)),
            Field::new("named", Child::sequence(&self.named)),
        ]
    }
}

impl SyntaxNode for Attribute {
    const KIND: NodeKind = NodeKind::Attribute;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("id", Child::single(&self.id)),
            Field::new("value", Child::single(&self.value)),
        ]
    }
}

impl SyntaxNode for Variant {
    const KIND: NodeKind = NodeKind::Variant;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("key", Child::single(&self.key)),
            Field::new("value", Child::single(&self.value)),
        ]
    }
}

impl SyntaxNode for NamedArgument {
    const KIND: NodeKind = NodeKind::NamedArgument;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("name", Child::single(&self.name)),
            Field::new("value", Child::single(&self.value)),
        ]
    }
}

impl SyntaxNode for Identifier {
    const KIND: NodeKind = NodeKind::Identifier;

    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }
}

impl SyntaxNode for Comment {
    const KIND: NodeKind = NodeKind::Comment;

    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }
}

impl SyntaxNode for GroupComment {
    const KIND: NodeKind = NodeKind::GroupComment;

    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }
}

impl SyntaxNode for ResourceComment {
    const KIND: NodeKind = NodeKind::ResourceComment;

    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }
}

impl SyntaxNode for Junk {
    const KIND: NodeKind = NodeKind::Junk;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("annotations", Child::sequence(&self.annotations)),
            Field::new("span", Child::single(&self.span)),
        ]
    }
}

impl SyntaxNode for Annotation {
    const KIND: NodeKind = NodeKind::Annotation;

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("span", Child::single(&self.span))]
    }
}

impl SyntaxNode for Span {
    const KIND: NodeKind = NodeKind::Span;

    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }
}

// Sum types resolve to the node they wrap.

impl<'a> From<&'a TopLevel> for Node<'a> {
    fn from(entry: &'a TopLevel) -> Self {
        match entry {
            TopLevel::Message(node) => Node::Message(node),
            TopLevel::Term(node) => Node::Term(node),
            TopLevel::Comment(node) => Node::Comment(node),
            TopLevel::GroupComment(node) => Node::GroupComment(node),
            TopLevel::ResourceComment(node) => Node::ResourceComment(node),
            TopLevel::Junk(node) => Node::Junk(node),
        }
    }
}

impl<'a> From<&'a PatternElement> for Node<'a> {
    fn from(element: &'a PatternElement) -> Self {
        match element {
            PatternElement::TextElement(node) => Node::TextElement(node),
            PatternElement::Placeable(node) => Node::Placeable(node),
        }
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expression: &'a Expression) -> Self {
        match expression {
            Expression::StringLiteral(node) => Node::StringLiteral(node),
            Expression::NumberLiteral(node) => Node::NumberLiteral(node),
            Expression::MessageReference(node) => Node::MessageReference(node),
            Expression::TermReference(node) => Node::TermReference(node),
            Expression::VariableReference(node) => Node::VariableReference(node),
            Expression::FunctionReference(node) => Node::FunctionReference(node),
            Expression::SelectExpression(node) => Node::SelectExpression(node),
            Expression::Placeable(node) => Node::Placeable(node),
        }
    }
}

impl<'a> From<&'a VariantKey> for Node<'a> {
    fn from(key: &'a VariantKey) -> Self {
        match key {
            VariantKey::Identifier(node) => Node::Identifier(node),
            VariantKey::NumberLiteral(node) => Node::NumberLiteral(node),
        }
    }
}
