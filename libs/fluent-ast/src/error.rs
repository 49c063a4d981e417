use thiserror::Error;

use crate::ast::Annotation;

/// Error returned by [`parse_strict`](crate::parse_strict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{} syntax error(s), first: {}", .annotations.len(), first_message(.annotations))]
    Syntax { annotations: Vec<Annotation> },
}

impl ParseError {
    /// Annotations describing every syntax error, in source order.
    pub fn annotations(&self) -> &[Annotation] {
        match self {
            ParseError::Syntax { annotations } => annotations,
        }
    }
}

fn first_message(annotations: &[Annotation]) -> String {
    match annotations.first() {
        Some(annotation) => format!(
            "{} at {}..{}",
            annotation.message,
            annotation.span.start(),
            annotation.span.end()
        ),
        None => "unknown".to_string(),
    }
}
