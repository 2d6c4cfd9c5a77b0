//! Source locations.

use std::fmt;

/// Where a node or type came from.
///
/// Builtin types carry `Builtin`; synthesized nodes that never had a
/// source position carry `Empty`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Location {
    /// Compiler-provided item (primitive types, lang items).
    Builtin,
    /// No location available.
    #[default]
    Empty,
    /// A position in a source file.
    Source {
        /// Index into the session's file table.
        file: u32,
        /// 1-based line.
        line: u32,
        /// 1-based column.
        column: u32,
    },
}

impl Location {
    /// Create a source location.
    #[inline]
    pub const fn source(file: u32, line: u32, column: u32) -> Self {
        Location::Source { file, line, column }
    }

    /// Check if this location points into a source file.
    #[inline]
    pub const fn is_source(self) -> bool {
        matches!(self, Location::Source { .. })
    }

    /// Line and column, or `(1, 1)` when there is no source position.
    pub const fn line_col(self) -> (u32, u32) {
        match self {
            Location::Source { line, column, .. } => (line, column),
            Location::Builtin | Location::Empty => (1, 1),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Builtin => write!(f, "<builtin>"),
            Location::Empty => write!(f, "<unknown>"),
            Location::Source { file, line, column } => write!(f, "{file}:{line}:{column}"),
        }
    }
}
