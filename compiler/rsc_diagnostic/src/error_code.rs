use std::fmt;

/// Error codes for semantic-core diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E2xxx: Type errors
/// - E9xxx: Internal compiler errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Type Errors (E2xxx)
    /// Type resolution exceeded the recursion limit
    E2001,
    /// Placeholder used before its associated type was known
    E2002,

    // Internal Errors (E9xxx)
    /// Internal compiler error (invariant violated)
    E9001,
    /// Internal compiler error (unimplemented path reached)
    E9002,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E2001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Check if this is an internal compiler error code (E9xxx range).
    pub fn is_internal(&self) -> bool {
        matches!(self, ErrorCode::E9001 | ErrorCode::E9002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
