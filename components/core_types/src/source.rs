//! Source position tracking for error reporting.

use std::fmt;

/// Represents a position in source text.
///
/// `offset` is the absolute character index from the start of the input.
/// `line` and `column` are 1-based and exist for human-readable diagnostics.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition {
///     line: 10,
///     column: 5,
///     offset: 150,
/// };
///
/// assert_eq!(pos.line, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed)
    pub column: u32,
    /// Character offset from the start of the input
    pub offset: usize,
}

impl SourcePosition {
    /// Creates a position from its parts.
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// The position of the first character of any input.
    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (line {}, column {})",
            self.offset, self.line, self.column
        )
    }
}
