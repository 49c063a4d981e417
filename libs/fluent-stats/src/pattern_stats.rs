//! Pattern, variant and word statistics.

use std::convert::Infallible;

use config::constants::WORD_PATTERN;
use fluent_ast::{Node, Pattern, TextElement, Variant, Visitor};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(WORD_PATTERN).expect("word pattern is valid");
}

/// Counts patterns, select variants and words in a tree.
///
/// Unlike [`WordCounter`](crate::WordCounter), words are counted as matches
/// of one or more word characters, so empty or blank text contributes
/// nothing.
///
/// # Examples
/// ```
/// use fluent_ast::parse;
/// use fluent_stats::PatternStats;
///
/// let resource = parse("msg = foo { $var ->\n   *[other] bar\n } baz\n");
/// let stats = PatternStats::collect(&resource);
/// assert_eq!(stats.words(), 3);
/// assert_eq!(stats.patterns(), 2);
/// assert_eq!(stats.variants(), 1);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PatternStats {
    patterns: usize,
    variants: usize,
    words: usize,
}

impl PatternStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects statistics for the tree below `node`.
    pub fn collect<'a>(node: impl Into<Node<'a>>) -> Self {
        let mut stats = Self::new();
        match stats.visit(node) {
            Ok(()) => stats,
            Err(never) => match never {},
        }
    }

    pub fn patterns(&self) -> usize {
        self.patterns
    }

    pub fn variants(&self) -> usize {
        self.variants
    }

    pub fn words(&self) -> usize {
        self.words
    }
}

impl Visitor for PatternStats {
    type Error = Infallible;

    fn visit_pattern(&mut self, node: &Pattern) -> Result<(), Infallible> {
        self.patterns += 1;
        self.generic_visit(node)
    }

    fn visit_variant(&mut self, node: &Variant) -> Result<(), Infallible> {
        self.variants += 1;
        self.generic_visit(node)
    }

    fn visit_text_element(&mut self, node: &TextElement) -> Result<(), Infallible> {
        self.words += WORD.find_iter(&node.value).count();
        Ok(())
    }
}
