//! Error scope for batch handling

use std::fmt;

/// How far an error reaches.
///
/// The CLI processes input files one at a time. This decides whether a failure
/// stops everything or only the file it happened on:
/// - `Process`: fatal, the process exits before (or instead of) traversal
/// - `File`: reported for the failing file, the batch moves on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorScope {
    /// Error stops the whole run.
    ///
    /// Examples: ConfigInvalid, ConfigUnwritable, InvalidArgument, TraversalFailed
    Process,

    /// Error only affects the input file being processed.
    ///
    /// Examples: ParseFailed, RenderFailed, IoFailed
    #[default]
    File,
}

impl ErrorScope {
    /// Check if the run must stop
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorScope::Process)
    }

    /// Get scope as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorScope::Process => "process",
            ErrorScope::File => "file",
        }
    }
}

impl fmt::Display for ErrorScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
