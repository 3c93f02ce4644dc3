//! CLI argument definitions using clap
//!
//! `--text`, `--version` and `-h/--help` form one mutually exclusive group.
//! Help and version are plain flags rather than clap's built-in actions so
//! that a conflict is reported no matter where on the command line it occurs.

use clap::{ArgAction, ArgGroup, Parser};

use crate::settings::PROGRAM_NAME;

const HELP_TEMPLATE: &str = "usage: {usage}\n\n{about-with-newline}\n{all-args}{after-help}";

/// Echo text back to the terminal
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = PROGRAM_NAME, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(infer_long_args = true)]
#[command(help_template = HELP_TEMPLATE)]
#[command(group(
    ArgGroup::new("action")
        .args(["text", "version", "help"])
        .multiple(false)
        .required(false)
))]
pub struct Args {
    /// Increase verbosity level, repeatable (default: 0)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Text to process and display
    #[arg(long = "text", value_name = "TEXT")]
    pub text: Option<String>,

    /// Show program's version number and exit
    #[arg(long = "version", action = ArgAction::SetTrue)]
    pub version: bool,

    /// Show this help message and exit
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,
}
