//! domoticarte-youtube-manager library interface
//!
//! A small command processor: parse flags, pick a log verbosity, echo text.
//!
//! # Module Organization
//!
//! - [`cli`] - Argument definitions and parsing (Args, parse_args)
//! - [`logging`] - Severity arithmetic and the Logger handle
//! - [`text`] - Text transformation
//! - [`version`] - Build-time version resolution
//! - [`errors`] - Error types (AppError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main execution logic

pub mod cli;
pub mod context;
pub mod core;
pub mod errors;
pub mod logging;
pub mod settings;
pub mod status;
pub mod text;
pub mod version;
