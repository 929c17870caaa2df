//! Error types shared by the hooks.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised inside a hook.
///
/// Most of these never reach the user: the project detector treats them as a
/// negative heuristic and the docs redirector turns them into `allow`. Only
/// cache write failures in the version cache escape to the process exit code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HookError {
    /// Filesystem access failed.
    #[error("{context} {}: {source}", .path.display())]
    Io {
        /// What was being attempted (e.g. "reading").
        context: &'static str,
        /// The path involved.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed or serialized.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The temporary cache file could not be moved into place.
    #[error("failed to replace cache file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// The request payload has no usable `url` field.
    #[error("request payload has no url field")]
    MissingUrl,
}

impl HookError {
    /// An I/O error with what was being attempted and on which path.
    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }
}

/// Typed failure of the runtime version query.
///
/// Every variant is a normal, handled condition: the version cache reacts to
/// any of them by printing the install hint and leaving the cache untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DetectionError {
    /// The executable is not on `PATH`.
    NotFound,

    /// The configured version timeout elapsed.
    Timeout,

    /// Permission denied running the executable.
    PermissionDenied,

    /// The command ran but exited unsuccessfully.
    NonZeroExit,

    /// Spawning or reading from the command failed.
    IoError,
}

impl DetectionError {
    /// Human-readable description of the error.
    ///
    /// ```rust
    /// use elide_hooks::DetectionError;
    ///
    /// assert_eq!(DetectionError::NotFound.description(), "Executable not found");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::NotFound => "Executable not found",
            Self::Timeout => "Version query timed out",
            Self::PermissionDenied => "Permission denied",
            Self::NonZeroExit => "Version query exited unsuccessfully",
            Self::IoError => "I/O error during version query",
        }
    }
}
