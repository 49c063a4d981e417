//! Tests for lowering `fluent-syntax` trees into the owned AST.

use super::*;
use crate::ast::*;
use crate::span::Span;

fn only_message(resource: &Resource) -> &Message {
    let mut messages = resource.messages();
    let message = messages.next().expect("one message");
    assert!(messages.next().is_none(), "expected a single message");
    message
}

#[test]
fn test_parse_simple_message() {
    let resource = parse("msg = value with words");
    let message = only_message(&resource);
    assert_eq!(message.id.name, "msg");
    assert_eq!(message.value, Some(Pattern::text("value with words")));
    assert!(message.attributes.is_empty());
}

#[test]
fn test_parse_message_with_attributes_and_comment() {
    let source = "# Greets the user\nhello = Hi\n    .title = Greeting\n";
    let resource = parse(source);
    let message = only_message(&resource);
    assert_eq!(message.comment, Some(Comment::new("Greets the user")));
    assert_eq!(message.attributes.len(), 1);
    assert_eq!(message.attributes[0].id.name, "title");
    assert_eq!(message.attributes[0].value, Pattern::text("Greeting"));
}

#[test]
fn test_parse_term_with_reference_arguments() {
    let source = "-brand = Firefox\nabout = About { -brand(case: \"genitive\") }\n";
    let resource = parse(source);
    assert_eq!(resource.terms().count(), 1);

    let message = only_message(&resource);
    let elements = &message.value.as_ref().unwrap().elements;
    let PatternElement::Placeable(placeable) = &elements[1] else {
        panic!("expected placeable, got {:?}", elements[1]);
    };
    let Expression::TermReference(reference) = placeable.expression.as_ref() else {
        panic!("expected term reference");
    };
    assert_eq!(reference.id.name, "brand");
    let arguments = reference.arguments.as_ref().unwrap();
    assert_eq!(arguments.named[0].name.name, "case");
    assert_eq!(
        arguments.named[0].value,
        Expression::StringLiteral(StringLiteral::new("genitive"))
    );
}

#[test]
fn test_parse_select_expression() {
    let source = "emails = { $count ->\n    [one] One email\n   *[other] { $count } emails\n}\n";
    let resource = parse(source);
    let message = only_message(&resource);
    let elements = &message.value.as_ref().unwrap().elements;
    let PatternElement::Placeable(placeable) = &elements[0] else {
        panic!("expected placeable");
    };
    let Expression::SelectExpression(select) = placeable.expression.as_ref() else {
        panic!("expected select expression");
    };
    assert_eq!(
        *select.selector,
        Expression::VariableReference(VariableReference::new("count"))
    );
    assert_eq!(select.variants.len(), 2);
    let default = select.default_variant().unwrap();
    assert_eq!(default.key, VariantKey::Identifier(Identifier::new("other")));
}

#[test]
fn test_parse_comment_kinds() {
    let resource = parse("### Resource\n\n## Group\n\n# Standalone\n\nkey = value\n");
    assert!(matches!(&resource.body[0], TopLevel::ResourceComment(c) if c.content == "Resource"));
    assert!(matches!(&resource.body[1], TopLevel::GroupComment(c) if c.content == "Group"));
    assert!(matches!(&resource.body[2], TopLevel::Comment(c) if c.content == "Standalone"));
}

#[test]
fn test_multiline_comment_joined_with_newline() {
    let resource = parse("# first\n# second\n\nkey = value\n");
    assert!(matches!(&resource.body[0], TopLevel::Comment(c) if c.content == "first\nsecond"));
}

#[test]
fn test_junk_carries_annotation_and_span() {
    let source = "good = fine\nbad\nlater = ok\n";
    let resource = parse(source);
    assert_eq!(resource.messages().count(), 2);

    let junk = resource.junk().next().expect("junk entry");
    assert_eq!(junk.span.slice(source), Some(junk.content.as_str()));
    assert_eq!(junk.content, "bad\n");
    assert_eq!(junk.span, Span::new(12, 16));
    assert!(!junk.annotations.is_empty());
    for annotation in &junk.annotations {
        assert!(!annotation.code.is_empty());
        assert!(!annotation.message.is_empty());
        assert!(annotation.span.start() >= junk.span.start());
    }
}

#[test]
fn test_parse_strict_rejects_junk() {
    let err = parse_strict("msg = { oops").unwrap_err();
    assert!(!err.annotations().is_empty());
    assert!(err.to_string().contains("syntax error"));
}

#[test]
fn test_parse_strict_accepts_valid_resource() {
    let resource = parse_strict("a = one\nb = two\n").unwrap();
    assert_eq!(resource.messages().count(), 2);
}

#[test]
fn test_error_code_strips_payload() {
    let resource = parse("key = { $var\n");
    let junk = resource.junk().next().expect("junk entry");
    for annotation in &junk.annotations {
        assert!(annotation
            .code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }
}
