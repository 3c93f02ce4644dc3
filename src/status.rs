//! Exit status codes for the CLI
//!
//! - 0: Success (text printed, help or version shown)
//! - 1: Runtime failure (e.g. stdout could not be written)
//! - 2: Usage error (unknown flag, missing value, conflicting flags)

use std::process::{ExitCode, Termination};

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Successful execution
    Success = 0,
    /// Any runtime error
    Error = 1,
    /// Malformed or conflicting command-line arguments
    Usage = 2,
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}
