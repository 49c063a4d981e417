//! # AST Tests
//!
//! Unit tests for the node schema and the visitor engine over hand-built
//! trees. Parser-backed tests live in `parser/tests.rs` and `tests/`.

use std::convert::Infallible;

use crate::*;

/// `greeting = Hello, { $name }` with a `.title = Hi` attribute and a comment.
fn greeting() -> Resource {
    let value = Pattern::new(vec![
        PatternElement::TextElement(TextElement::new("Hello, ")),
        PatternElement::Placeable(Placeable::new(Expression::VariableReference(
            VariableReference::new("name"),
        ))),
    ]);
    let title = Attribute::new(Identifier::new("title"), Pattern::text("Hi"));
    let message = Message::new(Identifier::new("greeting"), Some(value), vec![title])
        .with_comment(Comment::new("Shown on the start page"));
    Resource::new(vec![TopLevel::Message(message)])
}

/// Records the tag of every node it is dispatched, then recurses.
#[derive(Default)]
struct KindLog(Vec<NodeKind>);

impl KindLog {
    fn record(&mut self, node: Node<'_>) -> Result<(), Infallible> {
        self.0.push(node.kind());
        self.generic_visit(node)
    }
}

impl Visitor for KindLog {
    type Error = Infallible;

    fn visit_resource(&mut self, node: &Resource) -> Result<(), Infallible> {
        self.record(node.into())
    }
    fn visit_message(&mut self, node: &Message) -> Result<(), Infallible> {
        self.record(node.into())
    }
    fn visit_identifier(&mut self, node: &Identifier) -> Result<(), Infallible> {
        self.record(node.into())
    }
    fn visit_pattern(&mut self, node: &Pattern) -> Result<(), Infallible> {
        self.record(node.into())
    }
    fn visit_text_element(&mut self, node: &TextElement) -> Result<(), Infallible> {
        self.record(node.into())
    }
    fn visit_placeable(&mut self, node: &Placeable) -> Result<(), Infallible> {
        self.record(node.into())
    }
    fn visit_variable_reference(&mut self, node: &VariableReference) -> Result<(), Infallible> {
        self.record(node.into())
    }
    fn visit_attribute(&mut self, node: &Attribute) -> Result<(), Infallible> {
        self.record(node.into())
    }
    fn visit_comment(&mut self, node: &Comment) -> Result<(), Infallible> {
        self.record(node.into())
    }
}

/// Collects text values only.
#[derive(Default)]
struct Texts(Vec<String>);

impl Visitor for Texts {
    type Error = Infallible;

    fn visit_text_element(&mut self, node: &TextElement) -> Result<(), Infallible> {
        self.0.push(node.value.clone());
        Ok(())
    }
}

// =============================================================================
// NODE SCHEMA
// =============================================================================

#[test]
fn test_node_kind_names_match_variants() {
    assert_eq!(NodeKind::TextElement.name(), "TextElement");
    assert_eq!(NodeKind::Resource.to_string(), "Resource");
    assert_eq!(NodeKind::ALL.len(), 24);
}

#[test]
fn test_message_fields_in_declaration_order() {
    let resource = greeting();
    let message = resource.messages().next().unwrap();
    let names: Vec<_> = message.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["id", "value", "attributes", "comment"]);
}

#[test]
fn test_absent_optional_child_is_reported() {
    let message = Message::new(Identifier::new("empty"), None, vec![]);
    let fields = message.fields();
    assert_eq!(fields[1].child, Child::Absent);
    assert_eq!(fields[3].child, Child::Absent);
    assert_eq!(Node::from(&message).children().len(), 1);
}

#[test]
fn test_leaf_variants_have_no_fields() {
    assert!(TextElement::new("x").fields().is_empty());
    assert!(Identifier::new("x").fields().is_empty());
    assert!(Span::new(0, 1).fields().is_empty());
}

#[test]
fn test_sum_types_resolve_to_wrapped_node() {
    let key = VariantKey::NumberLiteral(NumberLiteral::new("1"));
    assert_eq!(Node::from(&key).kind(), NodeKind::NumberLiteral);

    let element = PatternElement::TextElement(TextElement::new("x"));
    assert_eq!(Node::from(&element).kind(), NodeKind::TextElement);
}

#[test]
fn test_structural_equality() {
    let localized = Message::new(Identifier::new("test-id"), Some(Pattern::text("localized")), vec![]);
    let same = Message::new(Identifier::new("test-id"), Some(Pattern::text("localized")), vec![]);
    let different = Message::new(Identifier::new("test-id"), Some(Pattern::text("different")), vec![]);
    assert_eq!(localized, same);
    assert_ne!(localized, different);
}

// =============================================================================
// VISITOR ENGINE
// =============================================================================

#[test]
fn test_visits_in_pre_order_declaration_order() {
    let resource = greeting();
    let mut log = KindLog::default();
    log.visit(&resource).unwrap();

    assert_eq!(
        log.0,
        [
            NodeKind::Resource,
            NodeKind::Message,
            NodeKind::Identifier,
            NodeKind::Pattern,
            NodeKind::TextElement,
            NodeKind::Placeable,
            NodeKind::VariableReference,
            NodeKind::Identifier,
            NodeKind::Attribute,
            NodeKind::Identifier,
            NodeKind::Pattern,
            NodeKind::TextElement,
            NodeKind::Comment,
        ]
    );
}

#[test]
fn test_default_visitor_reaches_every_text() {
    let resource = greeting();
    let mut texts = Texts::default();
    texts.visit(&resource).unwrap();
    assert_eq!(texts.0, ["Hello, ", "Hi"]);
}

#[test]
fn test_override_without_generic_visit_stops_recursion() {
    struct StopAtMessage(Texts);

    impl Visitor for StopAtMessage {
        type Error = Infallible;

        fn visit_message(&mut self, _node: &Message) -> Result<(), Infallible> {
            Ok(())
        }
        fn visit_text_element(&mut self, node: &TextElement) -> Result<(), Infallible> {
            self.0.visit_text_element(node)
        }
    }

    let mut visitor = StopAtMessage(Texts::default());
    visitor.visit(&greeting()).unwrap();
    assert!(visitor.0 .0.is_empty());
}

#[test]
fn test_generic_visit_only_visits_direct_children() {
    let resource = greeting();
    let message = resource.messages().next().unwrap();

    let mut log = KindLog::default();
    walk(&mut log, Node::from(message)).unwrap();
    // The message itself is not logged; its subtree is.
    assert_eq!(log.0.first(), Some(&NodeKind::Identifier));
    assert!(!log.0.contains(&NodeKind::Message));
}

#[test]
fn test_handler_error_aborts_traversal() {
    struct FailOn(&'static str, Vec<String>);

    impl Visitor for FailOn {
        type Error = String;

        fn visit_text_element(&mut self, node: &TextElement) -> Result<(), String> {
            if node.value == self.0 {
                return Err(format!("refusing {:?}", node.value));
            }
            self.1.push(node.value.clone());
            Ok(())
        }
    }

    let mut visitor = FailOn("Hello, ", Vec::new());
    let err = visitor.visit(&greeting()).unwrap_err();
    assert_eq!(err, "refusing \"Hello, \"");
    // "Hi" comes after the failing text and is never reached.
    assert!(visitor.1.is_empty());
}

#[test]
fn test_junk_annotations_and_spans_are_visited() {
    let junk = Junk {
        content: "oops = {\n".to_string(),
        annotations: vec![Annotation::new("ExpectedToken", "expected }", Span::new(8, 9))],
        span: Span::new(0, 9),
    };
    let resource = Resource::new(vec![TopLevel::Junk(junk)]);

    #[derive(Default)]
    struct Spans(Vec<Span>);
    impl Visitor for Spans {
        type Error = Infallible;
        fn visit_span(&mut self, node: &Span) -> Result<(), Infallible> {
            self.0.push(*node);
            Ok(())
        }
    }

    let mut spans = Spans::default();
    spans.visit(&resource).unwrap();
    assert_eq!(spans.0, [Span::new(8, 9), Span::new(0, 9)]);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    const DEPTH: usize = 10_000;

    #[derive(Default)]
    struct Placeables(usize);
    impl Visitor for Placeables {
        type Error = Infallible;
        fn visit_placeable(&mut self, node: &Placeable) -> Result<(), Infallible> {
            self.0 += 1;
            self.generic_visit(node)
        }
    }

    let handle = std::thread::Builder::new()
        .stack_size(512 * 1024)
        .spawn(|| {
            let mut expression = Expression::VariableReference(VariableReference::new("x"));
            for _ in 0..DEPTH {
                expression = Expression::Placeable(Placeable::new(expression));
            }

            let mut counter = Placeables::default();
            counter.visit(&expression).unwrap();

            // Tear the chain down iteratively; the derived drop would recurse.
            while let Expression::Placeable(placeable) = expression {
                expression = *placeable.expression;
            }
            counter.0
        })
        .unwrap();

    assert_eq!(handle.join().unwrap(), DEPTH);
}
