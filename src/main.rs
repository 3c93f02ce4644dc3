use std::ffi::OsString;

use domoticarte_youtube_manager::context::Environment;
use domoticarte_youtube_manager::core;
use domoticarte_youtube_manager::status::ExitStatus;

/// Entry point - collects argv and hands off to core::run()
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    let args: Vec<OsString> = std::env::args_os().collect();
    let env = Environment::default();

    core::run(args, env)
}
