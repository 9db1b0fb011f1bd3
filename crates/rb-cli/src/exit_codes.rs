//! Exit codes for the rbundle CLI.
//!
//! Exit code ranges:
//! - 0: Success
//! - 10-19: User/input errors (recoverable by fixing the input)
//! - 20-29: Internal errors

use rb_bundle::Error;

/// Exit codes for rbundle operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Clean = 0,

    /// Invalid arguments
    ArgsError = 10,

    /// Input file missing or unreadable, output not writable
    IoError = 11,

    /// Corrupt archive or document
    FormatError = 12,

    /// Two bundles with the same language and locale
    DuplicateError = 13,

    /// Internal error (bug - please report)
    InternalError = 20,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the error code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::IoError => "ERR_IO",
            ExitCode::FormatError => "ERR_FORMAT",
            ExitCode::DuplicateError => "ERR_DUPLICATE",
            ExitCode::InternalError => "ERR_INTERNAL",
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        if err.is_format_error() {
            return ExitCode::FormatError;
        }
        match err {
            Error::DuplicateBundle { .. } => ExitCode::DuplicateError,
            Error::Io(_) | Error::Zip(_) => ExitCode::IoError,
            Error::MissingDefault | Error::BundleNotFound { .. } => ExitCode::ArgsError,
            _ => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
