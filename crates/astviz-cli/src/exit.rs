//! Process exit statuses.

use std::process::ExitCode;

use astviz_error::{Error, ErrorKind};

use crate::options::INPUT_RULE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Normal completion, or help/version shown.
    Success,
    MissingInput,
    ConflictingInput,
    InvalidPath,
    ArgumentParse,
    Invariant,
    WalkFailed,
    ConfigFailed,
}

impl ExitStatus {
    pub fn code(&self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::MissingInput => 1,
            ExitStatus::ConflictingInput => 2,
            ExitStatus::InvalidPath => 3,
            ExitStatus::ArgumentParse => 4,
            ExitStatus::Invariant => 5,
            ExitStatus::WalkFailed => 6,
            ExitStatus::ConfigFailed => 7,
        }
    }

    /// Status for an error that stopped the run.
    pub fn from_error(err: &Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidPath | ErrorKind::FileNotFound => ExitStatus::InvalidPath,
            ErrorKind::InvalidArgument => match err.context_value(INPUT_RULE) {
                Some("missing") => ExitStatus::MissingInput,
                Some("conflicting") => ExitStatus::ConflictingInput,
                _ => ExitStatus::ArgumentParse,
            },
            ErrorKind::TraversalFailed => ExitStatus::WalkFailed,
            ErrorKind::ConfigInvalid | ErrorKind::ConfigUnwritable => ExitStatus::ConfigFailed,
            _ => ExitStatus::Invariant,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
