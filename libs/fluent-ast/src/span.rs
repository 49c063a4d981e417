//! # Source Span
//!
//! Represents a byte range in the source text. Spans are attached to junk
//! entries and their annotations so syntax errors can be reported against
//! the parsed resource.
//!
//! ## Usage
//!
//! ```rust
//! use fluent_ast::Span;
//!
//! let span = Span::new(0, 10);
//! assert_eq!(span.start(), 0);
//! assert_eq!(span.end(), 10);
//! assert_eq!(span.len(), 10);
//! ```

use std::ops::Range;

/// A range in the source text, represented as byte offsets.
///
/// `Span` is itself a leaf node of the AST: visitors reach it through the
/// `span` attribute of [`Junk`](crate::Junk) and
/// [`Annotation`](crate::Annotation).
///
/// # Fields
///
/// - `start`: Starting byte offset (inclusive)
/// - `end`: Ending byte offset (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Starting byte offset (inclusive)
    start: usize,
    /// Ending byte offset (exclusive)
    end: usize,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_ast::Span;
    ///
    /// let span = Span::new(5, 15);
    /// assert_eq!(span.start(), 5);
    /// assert_eq!(span.end(), 15);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the starting byte offset.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the ending byte offset.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Checks if this span contains a byte offset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_ast::Span;
    ///
    /// let span = Span::new(5, 10);
    /// assert!(span.contains(7));
    /// assert!(!span.contains(10)); // end is exclusive
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Returns the spanned slice of `source`, if the span lies inside it.
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20);
        assert_eq!(span.start(), 10);
        assert_eq!(span.end(), 20);
    }

    #[test]
    fn test_span_is_empty() {
        assert!(Span::new(5, 5).is_empty());
        assert!(Span::new(10, 5).is_empty());
        assert!(!Span::new(0, 1).is_empty());
    }

    #[test]
    fn test_span_from_range() {
        assert_eq!(Span::from(3..8), Span::new(3, 8));
    }

    #[test]
    fn test_span_slice() {
        let source = "key = value";
        assert_eq!(Span::new(6, 11).slice(source), Some("value"));
        assert_eq!(Span::new(6, 40).slice(source), None);
    }
}
