//! Lowering of resource entries.

use fluent_syntax::ast as syntax;
use fluent_syntax::parser::ParserError;

use super::annotate;
use super::expressions::{identifier, pattern};
use crate::ast::*;
use crate::span::Span;

/// Lowering state for one resource: the source text and the parser errors
/// not yet attached to a junk entry.
pub(super) struct Lowering<'s> {
    source: &'s str,
    pending: Vec<Option<ParserError>>,
}

impl<'s> Lowering<'s> {
    pub(super) fn new(source: &'s str, errors: Vec<ParserError>) -> Self {
        Self {
            source,
            pending: errors.into_iter().map(Some).collect(),
        }
    }

    pub(super) fn resource(&mut self, resource: syntax::Resource<&'s str>) -> Resource {
        let body = resource
            .body
            .into_iter()
            .map(|entry| self.entry(entry))
            .collect();
        Resource::new(body)
    }

    /// Number of errors left without a junk entry.
    pub(super) fn finish(self) -> usize {
        self.pending.iter().flatten().count()
    }

    fn entry(&mut self, entry: syntax::Entry<&'s str>) -> TopLevel {
        match entry {
            syntax::Entry::Message(message) => TopLevel::Message(Message {
                id: identifier(message.id),
                value: message.value.map(pattern),
                attributes: message.attributes.into_iter().map(attribute).collect(),
                comment: message.comment.map(comment),
            }),
            syntax::Entry::Term(term) => TopLevel::Term(Term {
                id: identifier(term.id),
                value: pattern(term.value),
                attributes: term.attributes.into_iter().map(attribute).collect(),
                comment: term.comment.map(comment),
            }),
            syntax::Entry::Comment(c) => TopLevel::Comment(comment(c)),
            syntax::Entry::GroupComment(c) => TopLevel::GroupComment(GroupComment {
                content: comment_content(c),
            }),
            syntax::Entry::ResourceComment(c) => TopLevel::ResourceComment(ResourceComment {
                content: comment_content(c),
            }),
            syntax::Entry::Junk { content } => TopLevel::Junk(self.junk(content)),
        }
    }

    fn junk(&mut self, content: &'s str) -> Junk {
        let start = offset_in(self.source, content);
        let span = Span::new(start, start + content.len());
        Junk {
            content: content.to_string(),
            annotations: self.claim(span),
            span,
        }
    }

    /// Takes the pending errors reported for the junk at `span`.
    fn claim(&mut self, span: Span) -> Vec<Annotation> {
        let mut annotations = Vec::new();
        for slot in self.pending.iter_mut() {
            let belongs = match slot {
                Some(error) => match &error.slice {
                    Some(slice) => slice.start == span.start() && slice.end == span.end(),
                    None => span.start() <= error.pos.start && error.pos.start <= span.end(),
                },
                None => false,
            };
            if belongs {
                if let Some(error) = slot.take() {
                    annotations.push(annotate(&error));
                }
            }
        }
        annotations
    }
}

/// Byte offset of `slice` within `source`.
///
/// Junk content is always borrowed from the parsed source; the text search
/// only runs if that ever stops being true.
fn offset_in(source: &str, slice: &str) -> usize {
    let base = source.as_ptr() as usize;
    let ptr = slice.as_ptr() as usize;
    match ptr.checked_sub(base) {
        Some(offset) if offset + slice.len() <= source.len() => offset,
        _ => source.find(slice).unwrap_or(0),
    }
}

fn attribute(attribute: syntax::Attribute<&str>) -> Attribute {
    Attribute::new(identifier(attribute.id), pattern(attribute.value))
}

fn comment(comment: syntax::Comment<&str>) -> Comment {
    Comment::new(comment_content(comment))
}

fn comment_content(comment: syntax::Comment<&str>) -> String {
    comment.content.join("\n")
}
