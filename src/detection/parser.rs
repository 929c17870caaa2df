//! Version output parsing with regex extraction.

use regex::Regex;
use std::sync::OnceLock;

/// First dotted `major.minor.patch` token, with an optional `-prerelease` suffix.
const VERSION_PATTERN: &str = r"(\d+\.\d+\.\d+(?:-[a-zA-Z0-9]+)?)";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("Invalid regex pattern"))
}

/// Extract the version token from CLI output.
///
/// - `elide 1.0.0-beta10` -> `1.0.0-beta10`
/// - `1.0.0` -> `1.0.0`
/// - `version 1.2` -> `None`
pub(crate) fn parse_version(output: &str) -> Option<&str> {
    version_regex()
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
