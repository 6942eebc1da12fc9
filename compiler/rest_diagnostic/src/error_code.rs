use std::fmt;

/// Error codes for request-file diagnostics.
///
/// Format: E#### where the first digit indicates the area:
/// - E00xx: request-file syntax and references
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    /// Unknown HTTP method
    E0001,
    /// Invalid request target
    E0002,
    /// Unsupported or misplaced HTTP version
    E0003,
    /// Invalid header name
    E0004,
    /// Header line without `:`
    E0005,
    /// Invalid variable name
    E0006,
    /// Variable definition without `=`
    E0007,
    /// Unterminated variable reference
    E0008,
    /// Undefined variable
    E0009,
    /// Unknown system variable
    E0010,
    /// Empty variable reference
    E0011,
    /// Invalid byte in request file
    E0012,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 12] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E0008,
        ErrorCode::E0009,
        ErrorCode::E0010,
        ErrorCode::E0011,
        ErrorCode::E0012,
    ];

    /// Get the code as a string (e.g., "E0001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E0009 => "E0009",
            ErrorCode::E0010 => "E0010",
            ErrorCode::E0011 => "E0011",
            ErrorCode::E0012 => "E0012",
        }
    }

    /// Parse a code such as `E0001` (case-insensitive).
    pub fn parse(code: &str) -> Option<ErrorCode> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code.trim()))
    }

    /// Check if this code concerns a `{{...}}` reference.
    pub fn is_reference_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0008 | ErrorCode::E0009 | ErrorCode::E0010 | ErrorCode::E0011
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
