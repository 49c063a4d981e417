//! # Fluent Stats
//!
//! Visitors that measure the text of a Fluent resource.
//!
//! - [`WordCounter`]: counts words in every text run of the tree
//! - [`PatternStats`]: counts patterns, select variants and words
//!
//! ```rust
//! use fluent_ast::parse;
//! use fluent_stats::WordCounter;
//!
//! let resource = parse("msg = value with words");
//! assert_eq!(WordCounter::count(&resource), 3);
//! ```

mod pattern_stats;
mod word_counter;

pub use pattern_stats::PatternStats;
pub use word_counter::{count_words, WordCounter};
