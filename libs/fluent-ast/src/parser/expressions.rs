//! Lowering of patterns and expressions.

use fluent_syntax::ast as syntax;

use crate::ast::*;

pub(super) fn identifier(id: syntax::Identifier<&str>) -> Identifier {
    Identifier::new(id.name)
}

pub(super) fn pattern(pattern: syntax::Pattern<&str>) -> Pattern {
    Pattern::new(pattern.elements.into_iter().map(pattern_element).collect())
}

fn pattern_element(element: syntax::PatternElement<&str>) -> PatternElement {
    match element {
        syntax::PatternElement::TextElement { value } => {
            PatternElement::TextElement(TextElement::new(value))
        }
        syntax::PatternElement::Placeable { expression } => {
            PatternElement::Placeable(Placeable::new(self::expression(expression)))
        }
    }
}

fn expression(expression: syntax::Expression<&str>) -> Expression {
    match expression {
        syntax::Expression::Inline(inline) => inline_expression(inline),
        syntax::Expression::Select { selector, variants } => {
            Expression::SelectExpression(SelectExpression::new(
                inline_expression(selector),
                variants.into_iter().map(variant).collect(),
            ))
        }
    }
}

fn inline_expression(expression: syntax::InlineExpression<&str>) -> Expression {
    match expression {
        syntax::InlineExpression::StringLiteral { value } => {
            Expression::StringLiteral(StringLiteral::new(value))
        }
        syntax::InlineExpression::NumberLiteral { value } => {
            Expression::NumberLiteral(NumberLiteral::new(value))
        }
        syntax::InlineExpression::FunctionReference { id, arguments } => {
            Expression::FunctionReference(FunctionReference {
                id: identifier(id),
                arguments: call_arguments(arguments),
            })
        }
        syntax::InlineExpression::MessageReference { id, attribute } => {
            Expression::MessageReference(MessageReference {
                id: identifier(id),
                attribute: attribute.map(identifier),
            })
        }
        syntax::InlineExpression::TermReference {
            id,
            attribute,
            arguments,
        } => Expression::TermReference(TermReference {
            id: identifier(id),
            attribute: attribute.map(identifier),
            arguments: arguments.map(call_arguments),
        }),
        syntax::InlineExpression::VariableReference { id } => {
            Expression::VariableReference(VariableReference { id: identifier(id) })
        }
        syntax::InlineExpression::Placeable { expression } => {
            Expression::Placeable(Placeable::new(self::expression(*expression)))
        }
    }
}

fn call_arguments(arguments: syntax::CallArguments<&str>) -> CallArguments {
    CallArguments {
        positional: arguments
            .positional
            .into_iter()
            .map(inline_expression)
            .collect(),
        named: arguments
            .named
            .into_iter()
            .map(|argument| NamedArgument {
                name: identifier(argument.name),
                value: inline_expression(argument.value),
            })
            .collect(),
    }
}

fn variant(variant: syntax::Variant<&str>) -> Variant {
    let key = match variant.key {
        syntax::VariantKey::Identifier { name } => VariantKey::Identifier(Identifier::new(name)),
        syntax::VariantKey::NumberLiteral { value } => {
            VariantKey::NumberLiteral(NumberLiteral::new(value))
        }
    };
    Variant::new(key, pattern(variant.value), variant.default)
}
