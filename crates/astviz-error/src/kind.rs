//! Error kinds for astviz operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on ErrorKind to decide how to report a failure, and the CLI
/// maps kinds onto its exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    // =========================================================================
    // Configuration errors
    // =========================================================================
    /// Config store exists but cannot be read or parsed
    ConfigInvalid,

    /// Config store is missing and cannot be created
    ConfigUnwritable,

    // =========================================================================
    // Input validation errors
    // =========================================================================
    /// Invalid argument passed on the command line or to a function
    InvalidArgument,

    /// A path argument does not point at a usable file or directory
    InvalidPath,

    // =========================================================================
    // Parse errors
    // =========================================================================
    /// Failed to parse source code
    ParseFailed,

    /// Tree-sitter grammar could not be loaded
    GrammarError,

    /// Encoding error (invalid UTF-8, etc.)
    EncodingError,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Directory traversal failed
    TraversalFailed,

    // =========================================================================
    // Rendering errors
    // =========================================================================
    /// The external graph renderer failed
    RenderFailed,

    // =========================================================================
    // Serialization errors
    // =========================================================================
    /// Serialization failed
    SerializationFailed,

    /// Deserialization failed
    DeserializationFailed,

    // =========================================================================
    // Validation errors
    // =========================================================================
    /// Invariant violation
    InvariantViolation,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this error kind stops the whole run by default
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ErrorKind::ConfigInvalid
                | ErrorKind::ConfigUnwritable
                | ErrorKind::InvalidArgument
                | ErrorKind::InvalidPath
                | ErrorKind::TraversalFailed
                | ErrorKind::InvariantViolation
        )
    }
}
