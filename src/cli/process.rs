//! Parsing entry points built on top of [`Args`]

use clap::{CommandFactory, Parser};

use crate::cli::args::Args;
use crate::errors::Result;

/// Parse a full argument vector (including argv[0]).
///
/// Unknown flags, missing values and conflicting flags all surface as
/// [`crate::errors::AppError::Usage`].
pub fn parse_args<I, T>(argv: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Ok(Args::try_parse_from(argv)?)
}

/// Usage text shown for `-h/--help`
pub fn render_help(program_name: &str) -> String {
    let mut cmd = Args::command().bin_name(program_name.to_string());
    cmd.render_help().to_string()
}
