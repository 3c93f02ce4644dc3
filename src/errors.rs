//! Error types for the command processor

use thiserror::Error;

use crate::status::ExitStatus;

/// Main error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Exit status reported to the shell for this error
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            AppError::Usage(_) => ExitStatus::Usage,
            AppError::Io(_) => ExitStatus::Error,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_usage_error_exits_with_two() {
        let err = clap::Error::new(clap::error::ErrorKind::UnknownArgument);
        assert_eq!(AppError::from(err).exit_status(), ExitStatus::Usage);
    }

    #[test]
    fn test_io_error_exits_with_one() {
        let err = AppError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.exit_status(), ExitStatus::Error);
        assert_eq!(err.to_string(), "IO error: closed");
    }
}
