use std::ffi::OsString;
use std::io::{self, Write};

use tracing::debug;

use crate::cli::{parse_args, render_help, Args};
use crate::context::Environment;
use crate::errors::{AppError, Result};
use crate::logging::Logger;
use crate::status::ExitStatus;
use crate::text::process_text;
use crate::version::version_line;

/// Main entry point for the CLI.
///
/// Parses `args` (argv[0] included), configures logging and prints the
/// processed text to stdout.
pub fn run(args: Vec<OsString>, env: Environment) -> ExitStatus {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(args, env, &mut out)
}

/// Same as [`run`] but writes results to `out`.
pub fn execute<W: Write>(args: Vec<OsString>, mut env: Environment, out: &mut W) -> ExitStatus {
    if let Some(name) = args.first() {
        env.set_program_name_from(name);
    }

    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => return handle_error(e),
    };

    let outcome = if parsed.help {
        write_line(out, render_help(&env.program_name).trim_end())
    } else if parsed.version {
        write_line(out, &version_line(&env.program_name))
    } else {
        let logger = Logger::configure(parsed.verbose, &env);
        logger.in_scope(|| program(&parsed, &logger, out))
    };

    match outcome {
        Ok(status) => status,
        Err(e) => handle_error(e),
    }
}

/// Transform and print the text for an already-parsed command line.
pub fn program<W: Write>(args: &Args, logger: &Logger, out: &mut W) -> Result<ExitStatus> {
    debug!(?args, severity = %logger.severity(), "Parsed arguments");

    let result = process_text(args.text.as_deref());
    write_line(out, result)
}

fn write_line<W: Write>(out: &mut W, line: &str) -> Result<ExitStatus> {
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(ExitStatus::Success)
}

fn handle_error(error: AppError) -> ExitStatus {
    match &error {
        AppError::Usage(e) => {
            e.print().ok();
        }
        AppError::Io(e) => eprintln!("Error: {}", e),
    }
    error.exit_status()
}
