//! Compile-time settings

use crate::logging::Severity;

/// Name shown in usage and version output when argv[0] is unavailable
pub const PROGRAM_NAME: &str = "domoticarte-youtube-manager";

/// Severity emitted when no `-v` flag is given
pub const LOGGING_DEFAULT_LEVEL: Severity = Severity::Warning;

/// Numeric distance between adjacent severities; one `-v` moves one step
pub const LOGGING_LEVEL_STEP: u8 = 10;

/// Printed when no text (or an empty one) is supplied
pub const DEFAULT_TEXT: &str = "No text provided.";

/// Reported by `--version` when no valid build version is available
pub const FALLBACK_VERSION: &str = "0.0.0";
