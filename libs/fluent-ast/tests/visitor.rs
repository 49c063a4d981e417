use std::convert::Infallible;

use fluent_ast::{parse, Node, NodeKind, Pattern, Resource, TextElement, Variant, Visitor};

/// Logs every dispatched tag by overriding `visit` itself.
#[derive(Default)]
struct Trace(Vec<NodeKind>);

impl Visitor for Trace {
    type Error = Infallible;

    fn visit<'a>(&mut self, node: impl Into<Node<'a>>) -> Result<(), Infallible> {
        let node = node.into();
        self.0.push(node.kind());
        fluent_ast::dispatch(self, node)
    }
}

#[test]
fn parsed_message_is_visited_in_pre_order() {
    let resource = parse("msg = Hi { $user }\n");
    let mut trace = Trace::default();
    trace.visit(&resource).unwrap();
    assert_eq!(
        trace.0,
        [
            NodeKind::Resource,
            NodeKind::Message,
            NodeKind::Identifier,
            NodeKind::Pattern,
            NodeKind::TextElement,
            NodeKind::Placeable,
            NodeKind::VariableReference,
            NodeKind::Identifier,
        ]
    );
}

#[test]
fn select_variants_are_visited_in_index_order() {
    #[derive(Default)]
    struct Keys(Vec<String>);

    impl Visitor for Keys {
        type Error = Infallible;

        fn visit_variant(&mut self, node: &Variant) -> Result<(), Infallible> {
            match Node::from(&node.key) {
                Node::Identifier(id) => self.0.push(id.name.clone()),
                Node::NumberLiteral(number) => self.0.push(number.value.clone()),
                _ => unreachable!("variant keys are identifiers or numbers"),
            }
            self.generic_visit(node)
        }
    }

    let resource = parse("n = { $n ->\n    [0] none\n    [one] one\n   *[other] many\n}\n");
    let mut keys = Keys::default();
    keys.visit(&resource).unwrap();
    assert_eq!(keys.0, ["0", "one", "other"]);
}

#[test]
fn resource_override_controls_recursion() {
    struct Gate {
        open: bool,
        texts: usize,
    }

    impl Visitor for Gate {
        type Error = Infallible;

        fn visit_resource(&mut self, node: &Resource) -> Result<(), Infallible> {
            if self.open {
                self.generic_visit(node)?;
            }
            Ok(())
        }

        fn visit_text_element(&mut self, _node: &TextElement) -> Result<(), Infallible> {
            self.texts += 1;
            Ok(())
        }
    }

    let resource = parse("a = one two\nb = three four five\n");

    let mut closed = Gate { open: false, texts: 0 };
    closed.visit(&resource).unwrap();
    assert_eq!(closed.texts, 0);

    let mut open = Gate { open: true, texts: 0 };
    open.visit(&resource).unwrap();
    assert_eq!(open.texts, 2);
}

#[test]
fn patterns_can_be_visited_directly() {
    #[derive(Default)]
    struct Count(usize);

    impl Visitor for Count {
        type Error = Infallible;

        fn visit_text_element(&mut self, _node: &TextElement) -> Result<(), Infallible> {
            self.0 += 1;
            Ok(())
        }
    }

    let mut count = Count::default();
    count.visit(&Pattern::text("standalone")).unwrap();
    assert_eq!(count.0, 1);
}
