//! Owned Fluent syntax tree.
//!
//! Every struct in this module is a node variant with a stable tag (its type
//! name, see [`NodeKind`](crate::NodeKind)). The enums [`TopLevel`],
//! [`PatternElement`], [`Expression`] and [`VariantKey`] are not nodes of
//! their own: they only say which node variants may appear in a slot.
//!
//! Field order matters. The visitor engine walks child-bearing fields in the
//! order they are declared here.

use crate::span::Span;

/// A parsed Fluent file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resource {
    pub body: Vec<TopLevel>,
}

impl Resource {
    pub fn new(body: Vec<TopLevel>) -> Self {
        Self { body }
    }

    /// Iterates over the messages of the resource, skipping other entries.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.body.iter().filter_map(|entry| match entry {
            TopLevel::Message(message) => Some(message),
            _ => None,
        })
    }

    /// Iterates over the terms of the resource, skipping other entries.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.body.iter().filter_map(|entry| match entry {
            TopLevel::Term(term) => Some(term),
            _ => None,
        })
    }

    /// Iterates over junk entries left behind by syntax errors.
    pub fn junk(&self) -> impl Iterator<Item = &Junk> {
        self.body.iter().filter_map(|entry| match entry {
            TopLevel::Junk(junk) => Some(junk),
            _ => None,
        })
    }
}

/// Entries allowed in [`Resource::body`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevel {
    Message(Message),
    Term(Term),
    Comment(Comment),
    GroupComment(GroupComment),
    ResourceComment(ResourceComment),
    Junk(Junk),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Identifier,
    pub value: Option<Pattern>,
    pub attributes: Vec<Attribute>,
    pub comment: Option<Comment>,
}

impl Message {
    pub fn new(id: Identifier, value: Option<Pattern>, attributes: Vec<Attribute>) -> Self {
        Self {
            id,
            value,
            attributes,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub id: Identifier,
    pub value: Pattern,
    pub attributes: Vec<Attribute>,
    pub comment: Option<Comment>,
}

impl Term {
    pub fn new(id: Identifier, value: Pattern, attributes: Vec<Attribute>) -> Self {
        Self {
            id,
            value,
            attributes,
            comment: None,
        }
    }
}

/// Text and placeables making up a translation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    pub elements: Vec<PatternElement>,
}

impl Pattern {
    pub fn new(elements: Vec<PatternElement>) -> Self {
        Self { elements }
    }

    /// A pattern made of a single text run.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(vec![PatternElement::TextElement(TextElement::new(value))])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternElement {
    TextElement(TextElement),
    Placeable(Placeable),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextElement {
    pub value: String,
}

impl TextElement {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// An interpolation slot, `{ ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeable {
    pub expression: Box<Expression>,
}

impl Placeable {
    pub fn new(expression: Expression) -> Self {
        Self {
            expression: Box::new(expression),
        }
    }
}

/// Anything that can sit inside a placeable, a selector or a call argument.
///
/// `Placeable` appears here for nested placeables such as `{ { $x } }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
    MessageReference(MessageReference),
    TermReference(TermReference),
    VariableReference(VariableReference),
    FunctionReference(FunctionReference),
    SelectExpression(SelectExpression),
    Placeable(Placeable),
}

/// A quoted literal. `value` holds the raw text between the quotes,
/// escape sequences included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A number literal, kept as written (`-1.50` stays `-1.50`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    pub value: String,
}

impl NumberLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReference {
    pub id: Identifier,
    pub attribute: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermReference {
    pub id: Identifier,
    pub attribute: Option<Identifier>,
    pub arguments: Option<CallArguments>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    pub id: Identifier,
}

impl VariableReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Identifier::new(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionReference {
    pub id: Identifier,
    pub arguments: CallArguments,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectExpression {
    pub selector: Box<Expression>,
    pub variants: Vec<Variant>,
}

impl SelectExpression {
    pub fn new(selector: Expression, variants: Vec<Variant>) -> Self {
        Self {
            selector: Box::new(selector),
            variants,
        }
    }

    /// The variant marked with `*`, if any.
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants.iter().find(|variant| variant.default)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallArguments {
    pub positional: Vec<Expression>,
    pub named: Vec<NamedArgument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub id: Identifier,
    pub value: Pattern,
}

impl Attribute {
    pub fn new(id: Identifier, value: Pattern) -> Self {
        Self { id, value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub key: VariantKey,
    pub value: Pattern,
    pub default: bool,
}

impl Variant {
    pub fn new(key: VariantKey, value: Pattern, default: bool) -> Self {
        Self {
            key,
            value,
            default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantKey {
    Identifier(Identifier),
    NumberLiteral(NumberLiteral),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedArgument {
    pub name: Identifier,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// `#` comment. Lines are joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub content: String,
}

impl Comment {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// `##` comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupComment {
    pub content: String,
}

/// `###` comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceComment {
    pub content: String,
}

/// Source text the parser could not make sense of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Junk {
    pub content: String,
    pub annotations: Vec<Annotation>,
    pub span: Span,
}

/// A syntax error attached to a [`Junk`] entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Name of the error kind, e.g. `ExpectedToken`.
    pub code: String,
    pub message: String,
    pub span: Span,
}

impl Annotation {
    pub fn new(code: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            span,
        }
    }
}
