//! Program version, injected at build time

use semver::Version;

use crate::settings::FALLBACK_VERSION;

/// Version baked in by cargo, or the fallback when missing or not semver
pub fn resolve() -> String {
    resolve_from(option_env!("CARGO_PKG_VERSION"))
}

pub fn resolve_from(candidate: Option<&str>) -> String {
    candidate
        .and_then(|raw| Version::parse(raw.trim()).ok())
        .map(|version| version.to_string())
        .unwrap_or_else(|| FALLBACK_VERSION.to_string())
}

/// `<prog> <version>` as printed by `--version`
pub fn version_line(program_name: &str) -> String {
    format!("{} {}", program_name, resolve())
}
