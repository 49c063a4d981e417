//! Word counting over text elements.

use std::convert::Infallible;

use config::constants::WORD_BOUNDARY_PATTERN;
use fluent_ast::{Node, TextElement, Visitor};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

lazy_static! {
    static ref WORD_BOUNDARY: Regex =
        Regex::new(WORD_BOUNDARY_PATTERN).expect("word boundary pattern is valid");
}

/// Counts the fragments of `text` between word boundaries.
///
/// Splitting follows the classic regex split contract: text without any
/// boundary is a single fragment (so `""` counts as one), trailing empty
/// fragments are dropped, and a leading boundary yields an empty fragment
/// that is still counted.
///
/// # Examples
/// ```
/// use fluent_stats::count_words;
///
/// assert_eq!(count_words("value with words"), 3);
/// assert_eq!(count_words(""), 1);
/// assert_eq!(count_words(" leading"), 2);
/// assert_eq!(count_words("trailing "), 1);
/// ```
pub fn count_words(text: &str) -> usize {
    let mut fragments: Vec<&str> = WORD_BOUNDARY.split(text).collect();
    if fragments.len() == 1 {
        return 1;
    }
    while fragments.last().is_some_and(|fragment| fragment.is_empty()) {
        fragments.pop();
    }
    fragments.len()
}

/// Counts words across every [`TextElement`] of a tree.
///
/// Only `TextElement` is handled here; messages, patterns, placeables and
/// select variants are reached through the default recursion.
#[derive(Debug, Default, Clone)]
pub struct WordCounter {
    words: usize,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Words counted so far.
    pub fn words(&self) -> usize {
        self.words
    }

    /// Counts the words below `node` with a fresh counter.
    pub fn count<'a>(node: impl Into<Node<'a>>) -> usize {
        let mut counter = Self::new();
        match counter.visit(node) {
            Ok(()) => counter.words,
            Err(never) => match never {},
        }
    }
}

impl Visitor for WordCounter {
    type Error = Infallible;

    fn visit_text_element(&mut self, node: &TextElement) -> Result<(), Infallible> {
        let words = count_words(&node.value);
        trace!("{:?}: {} word(s)", node.value, words);
        self.words += words;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_runs_of_non_word_characters() {
        assert_eq!(count_words("one, two;  three"), 3);
    }

    #[test]
    fn empty_text_is_one_fragment() {
        assert_eq!(count_words(""), 1);
    }

    #[test]
    fn text_without_boundary_is_one_fragment() {
        assert_eq!(count_words("word"), 1);
    }

    #[test]
    fn leading_boundary_counts_empty_fragment() {
        assert_eq!(count_words(" baz"), 2);
    }

    #[test]
    fn trailing_boundaries_are_dropped() {
        assert_eq!(count_words("foo "), 1);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn non_ascii_letters_are_boundaries() {
        assert_eq!(count_words("déjà vu"), 3);
    }

    #[test]
    fn underscores_and_digits_are_word_characters() {
        assert_eq!(count_words("snake_case 42"), 2);
    }
}
