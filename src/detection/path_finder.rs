//! PATH-based executable lookup.

use std::path::{Path, PathBuf};

/// Find an executable by name or path.
///
/// `which` resolves bare names against PATH and validates explicit paths.
/// Nothing outside PATH is searched.
pub(crate) fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Guess how the executable was installed from its location.
pub(crate) fn detect_install_method(path: &Path) -> Option<&'static str> {
    let path_str = path.to_string_lossy();

    if path_str.contains(".npm") || path_str.contains("node_modules") {
        Some("npm")
    } else if path_str.contains(".cargo") {
        Some("cargo")
    } else if path_str.contains("homebrew") || path_str.contains("linuxbrew") {
        Some("brew")
    } else if path_str.contains("mise") {
        Some("mise")
    } else if path_str.contains("/elide/") {
        Some("installer")
    } else {
        None
    }
}
