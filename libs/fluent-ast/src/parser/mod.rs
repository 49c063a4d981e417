//! Fluent source → typed AST.
//!
//! The grammar is implemented by the `fluent-syntax` crate. This module only
//! lowers its borrowed tree into the owned AST of this crate:
//!
//! - **`entries.rs`**: resource body, messages, terms, comments, attributes
//! - **`expressions.rs`**: patterns, placeables, expressions, variants
//!
//! Syntax errors never abort [`parse`]. The offending entry becomes a
//! [`Junk`] whose annotations describe what went wrong, mirroring how
//! Fluent tooling keeps working on partially broken files. [`parse_strict`]
//! turns any error into a [`ParseError`] instead.
//!
//! # Examples
//!
//! ```
//! use fluent_ast::{parse, TopLevel};
//!
//! let resource = parse("hello = Hello, world!\n");
//! assert!(matches!(resource.body[0], TopLevel::Message(_)));
//! ```

use fluent_syntax::parser::{self as syntax_parser, ParserError};
use log::{debug, warn};

use crate::ast::{Annotation, Resource};
use crate::error::ParseError;
use crate::span::Span;

mod entries;
mod expressions;

#[cfg(test)]
mod tests;

/// Parses Fluent source into a [`Resource`].
///
/// Entries that fail to parse are kept as [`Junk`](crate::Junk) carrying one
/// [`Annotation`] per syntax error.
///
/// # Examples
///
/// ```
/// use fluent_ast::parse;
///
/// let resource = parse("msg = value with words");
/// assert_eq!(resource.messages().count(), 1);
///
/// let broken = parse("msg =\n");
/// assert_eq!(broken.junk().count(), 1);
/// ```
pub fn parse(source: &str) -> Resource {
    let (resource, errors) = match syntax_parser::parse(source) {
        Ok(resource) => (resource, Vec::new()),
        Err((resource, errors)) => (resource, errors),
    };

    let mut lowering = entries::Lowering::new(source, errors);
    let resource = lowering.resource(resource);

    let junk = resource.junk().count();
    if junk > 0 {
        debug!("parsed {} entries, {} of them junk", resource.body.len(), junk);
    }
    let unclaimed = lowering.finish();
    if unclaimed > 0 {
        warn!("{} syntax error(s) did not match any junk entry", unclaimed);
    }
    resource
}

/// Parses Fluent source, failing on the first resource with syntax errors.
///
/// # Examples
///
/// ```
/// use fluent_ast::{parse_strict, ParseError};
///
/// assert!(parse_strict("msg = fine").is_ok());
///
/// let err = parse_strict("msg = { oops").unwrap_err();
/// assert!(matches!(err, ParseError::Syntax { .. }));
/// ```
pub fn parse_strict(source: &str) -> Result<Resource, ParseError> {
    match syntax_parser::parse(source) {
        Ok(resource) => Ok(entries::Lowering::new(source, Vec::new()).resource(resource)),
        Err((_, errors)) => Err(ParseError::Syntax {
            annotations: errors.iter().map(annotate).collect(),
        }),
    }
}

/// Describes a parser error as an AST annotation.
pub(crate) fn annotate(error: &ParserError) -> Annotation {
    Annotation::new(
        error_code(error),
        error.kind.to_string(),
        Span::from(error.pos.clone()),
    )
}

/// Name of the error kind without its payload: `ExpectedToken('}')` gives
/// `ExpectedToken`.
fn error_code(error: &ParserError) -> String {
    let debug = format!("{:?}", error.kind);
    match debug.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_')) {
        Some(end) => debug[..end].to_string(),
        None => debug,
    }
}
