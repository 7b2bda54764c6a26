//! Error codes for all generator diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the error family. Used for `explain` lookups and documentation.

use std::fmt;

/// Error codes for all generator diagnostics.
///
/// Format: E#### where first digit indicates family:
/// - E1xxx: Configuration errors (annotations, scope providers, signatures)
/// - E2xxx: Structural errors (inheritance graph)
/// - E3xxx: Input/output errors (model loading, file emission)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Configuration Errors (E1xxx)
    /// Scope provider lacks the scope capability
    E1001,
    /// `launchOnScope` names an unregistered scope provider
    E1002,
    /// Stream type without an extractable element type
    E1003,
    /// Private or protected top-level declaration marked for wrapping
    E1004,
    /// Scope provider cannot be default-constructed
    E1005,
    /// Same output generated twice
    E1006,
    /// Same declaration appears twice in one batch
    E1007,

    // Structural Errors (E2xxx)
    /// Cyclic inheritance among annotated declarations
    E2001,

    // Input/Output Errors (E3xxx)
    /// Writing generated sources failed
    E3001,
    /// Loading the declaration model failed
    E3002,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive (Rust match enforces it).
    pub const ALL: &[ErrorCode] = &[
        // Configuration
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        // Structural
        ErrorCode::E2001,
        // Input/Output
        ErrorCode::E3001,
        ErrorCode::E3002,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
        }
    }

    /// Check if this is a configuration error (E1xxx range).
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
                | ErrorCode::E1007
        )
    }

    /// Check if this is a structural error (E2xxx range).
    pub fn is_structural_error(&self) -> bool {
        matches!(self, ErrorCode::E2001)
    }

    /// Check if this is an input/output error (E3xxx range).
    pub fn is_io_error(&self) -> bool {
        matches!(self, ErrorCode::E3001 | ErrorCode::E3002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
