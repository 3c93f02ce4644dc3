//! CLI argument parsing and processing

pub mod args;
pub mod process;

// Re-exports
pub use args::Args;
pub use process::{parse_args, render_help};
