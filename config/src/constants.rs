//! # Configuration Constants
//!
//! Centralized values shared across the Fluent AST workspace.
//!
//! ## Categories
//!
//! - **Traversal**: Stack growth thresholds for deep AST recursion
//! - **Text**: Patterns used when measuring text content

use std::fmt;

// =============================================================================
// TRAVERSAL CONSTANTS
// =============================================================================

/// Remaining stack, in bytes, below which visitor dispatch switches to a
/// freshly allocated stack segment.
///
/// Visitor recursion depth equals AST depth, so nested placeables such as
/// `{{{{ $x }}}}` grow the native stack one frame group per level. The
/// `stacker` crate checks this red zone before every dispatch.
///
/// # Example
///
/// ```rust
/// use config::constants::STACKER_RED_ZONE_BYTES;
/// assert!(STACKER_RED_ZONE_BYTES >= 32 * 1024);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Bytes of stack allocated for each new segment when the red zone is hit.
///
/// # Example
///
/// ```rust
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 1024 * 1024;

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Delimiter used by the word counter: one or more non-word characters.
///
/// Equivalent to `\W+` with ASCII word characters (`[0-9A-Za-z_]`), so
/// accented letters act as delimiters just like in the reference counter.
///
/// # Example
///
/// ```rust
/// use config::constants::WORD_BOUNDARY_PATTERN;
/// assert!(WORD_BOUNDARY_PATTERN.ends_with('+'));
/// ```
pub const WORD_BOUNDARY_PATTERN: &str = "[^0-9A-Za-z_]+";

/// Pattern matching a single word: one or more word characters.
///
/// # Example
///
/// ```rust
/// use config::constants::WORD_PATTERN;
/// assert_eq!(WORD_PATTERN, "[0-9A-Za-z_]+");
/// ```
pub const WORD_PATTERN: &str = "[0-9A-Za-z_]+";

// =============================================================================
// STACK CONFIGURATION
// =============================================================================

/// Stack growth settings consulted by visitor dispatch.
///
/// # Examples
/// ```
/// use config::constants::StackConfig;
/// let stack = StackConfig::default();
/// assert!(stack.stack_size > stack.red_zone);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackConfig {
    /// Remaining stack that triggers growth.
    pub red_zone: usize,
    /// Size of each newly allocated stack segment.
    pub stack_size: usize,
}

impl StackConfig {
    /// Builds a stack configuration, rejecting settings that could never
    /// make progress.
    ///
    /// # Examples
    /// ```
    /// use config::constants::StackConfig;
    /// let stack = StackConfig::new(32 * 1024, 256 * 1024).expect("valid config");
    /// assert_eq!(stack.red_zone, 32 * 1024);
    /// assert!(StackConfig::new(0, 1024).is_err());
    /// ```
    pub fn new(red_zone: usize, stack_size: usize) -> Result<Self, ConfigError> {
        if red_zone == 0 {
            return Err(ConfigError::InvalidRedZone(red_zone));
        }
        if stack_size <= red_zone {
            return Err(ConfigError::InvalidStackSize {
                red_zone,
                stack_size,
            });
        }
        Ok(Self {
            red_zone,
            stack_size,
        })
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            red_zone: STACKER_RED_ZONE_BYTES,
            stack_size: STACKER_STACK_SIZE_BYTES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the red zone is zero.
    InvalidRedZone(usize),
    /// Raised when a new segment would not be larger than the red zone.
    InvalidStackSize { red_zone: usize, stack_size: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRedZone(value) => {
                write!(f, "red_zone must be positive: {value}")
            }
            ConfigError::InvalidStackSize {
                red_zone,
                stack_size,
            } => {
                write!(
                    f,
                    "stack_size must exceed red_zone ({red_zone}): {stack_size}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
