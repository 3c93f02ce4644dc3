//! Environment struct (program name, terminal detection)

use std::ffi::OsStr;
use std::path::Path;

use crate::settings::PROGRAM_NAME;

/// Execution environment
#[derive(Debug, Clone)]
pub struct Environment {
    pub stderr_isatty: bool,
    pub program_name: String,
}

impl Environment {
    /// Take the displayed program name from the file name of argv[0]
    pub fn set_program_name_from(&mut self, arg0: &OsStr) {
        if let Some(basename) = Path::new(arg0).file_name() {
            let basename = basename.to_string_lossy();
            if !basename.is_empty() {
                self.program_name = basename.into_owned();
            }
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            stderr_isatty: atty::is(atty::Stream::Stderr),
            program_name: PROGRAM_NAME.to_string(),
        }
    }
}
