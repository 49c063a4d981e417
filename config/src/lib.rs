//! # Config Crate
//!
//! Centralized configuration constants for the Fluent AST workspace.
//! Tunable traversal limits and the word-boundary pattern used by the
//! statistics visitors are defined here so every crate agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{StackConfig, STACKER_RED_ZONE_BYTES};
//!
//! let stack = StackConfig::default();
//! assert_eq!(stack.red_zone, STACKER_RED_ZONE_BYTES);
//! assert!(stack.stack_size > stack.red_zone);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values, usable from any crate in the workspace
//! - **Validated Settings**: Runtime overrides go through checked constructors

pub mod constants;
