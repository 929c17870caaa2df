//! Hook configuration.
//!
//! This module provides the [`HookOptions`] struct shared by all three hooks.
//! Hooks never read command-line arguments; overrides come from the process
//! environment via [`HookOptions::from_env`].

use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Environment variable overriding the runtime executable.
pub const ENV_EXECUTABLE: &str = "ELIDE_HOOKS_ELIDE_BIN";

/// Environment variable overriding the cache file location.
pub const ENV_CACHE_FILE: &str = "ELIDE_HOOKS_CACHE_FILE";

/// Environment variable setting a version query timeout in milliseconds.
pub const ENV_VERSION_TIMEOUT_MS: &str = "ELIDE_HOOKS_VERSION_TIMEOUT_MS";

/// Directory under `~/.cache` that holds the version record.
const CACHE_DIR_NAME: &str = "elide-claude-plugin";

/// File name of the version record.
const CACHE_FILE_NAME: &str = "version.json";

/// Configuration options for the hooks.
///
/// # Default Behavior
///
/// - `executable`: `elide`, looked up on `PATH`
/// - `cache_file`: `~/.cache/elide-claude-plugin/version.json`
/// - `version_timeout`: none, the version query runs until the command exits
/// - `scan_depth`: 3 directory levels below the working directory
/// - `scan_file_limit`: 10 files per source scan
///
/// # Example
///
/// ```rust
/// use elide_hooks::HookOptions;
///
/// let opts = HookOptions {
///     scan_file_limit: 25,
///     ..Default::default()
/// };
/// assert_eq!(opts.scan_depth, 3);
/// ```
#[derive(Debug, Clone)]
pub struct HookOptions {
    /// Name or path of the runtime executable.
    pub executable: String,

    /// Location of the persisted version record.
    pub cache_file: PathBuf,

    /// Upper bound on the version query. `None` waits for the command to exit.
    pub version_timeout: Option<Duration>,

    /// Maximum directory depth searched by the source scans.
    pub scan_depth: usize,

    /// Maximum number of files read by one source scan.
    pub scan_file_limit: usize,
}

impl Default for HookOptions {
    fn default() -> Self {
        Self {
            executable: "elide".to_string(),
            cache_file: default_cache_file(),
            version_timeout: None,
            scan_depth: 3,
            scan_file_limit: 10,
        }
    }
}

impl HookOptions {
    /// Build options from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build options from an arbitrary key lookup.
    ///
    /// Unset or empty keys keep their defaults. A timeout that does not parse
    /// as milliseconds is ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(executable) = get(ENV_EXECUTABLE) {
            opts.executable = executable;
        }
        if let Some(cache_file) = get(ENV_CACHE_FILE) {
            opts.cache_file = PathBuf::from(cache_file);
        }
        if let Some(raw) = get(ENV_VERSION_TIMEOUT_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => opts.version_timeout = Some(Duration::from_millis(ms)),
                Err(_) => warn!(value = %raw, "ignoring invalid {}", ENV_VERSION_TIMEOUT_MS),
            }
        }
        opts
    }
}

/// The per-user cache file, rooted at `/tmp` when no home directory resolves.
pub fn default_cache_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(".cache")
        .join(CACHE_DIR_NAME)
        .join(CACHE_FILE_NAME)
}
