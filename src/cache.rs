//! The persisted version record shared between hooks.
//!
//! There is a single global slot per cache file. The version cache hook
//! overwrites it on every successful detection; every other hook only reads
//! it. Reads tolerate a missing or corrupt file and writes replace the file
//! atomically, so a reader never sees a half-written record.

use crate::error::HookError;
use chrono::{DateTime, Utc};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Version recorded when the runtime answered but no version token was found.
pub const UNKNOWN_VERSION: &str = "unknown";

/// A cached runtime version fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Dotted version string (e.g. `1.0.0-beta10`) or [`UNKNOWN_VERSION`].
    pub version: String,

    /// When the version was detected.
    #[serde(rename = "detectedAt")]
    pub detected_at: DateTime<Utc>,

    /// Working directory of the detecting process.
    pub cwd: PathBuf,
}

impl CacheRecord {
    /// Create a record stamped with the current time.
    pub fn new(version: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            version: version.into(),
            detected_at: Utc::now(),
            cwd: cwd.into(),
        }
    }

    /// Whether the runtime reported a usable version.
    pub fn is_known(&self) -> bool {
        self.version != UNKNOWN_VERSION
    }

    /// The version as semver, or `None` for the sentinel or a non-semver token.
    ///
    /// ```rust
    /// use elide_hooks::CacheRecord;
    ///
    /// let record = CacheRecord::new("1.0.0-beta10", "/work");
    /// let v = record.semver().unwrap();
    /// assert_eq!((v.major, v.minor, v.patch), (1, 0, 0));
    /// assert_eq!(v.pre.as_str(), "beta10");
    /// ```
    pub fn semver(&self) -> Option<Version> {
        if !self.is_known() {
            return None;
        }
        Version::parse(&self.version).ok()
    }
}

/// Access to the persisted version record.
pub trait VersionStore {
    /// Read the current record. Absence and corruption both yield `None`.
    fn load(&self) -> Option<CacheRecord>;

    /// Replace the current record.
    fn store(&self, record: &CacheRecord) -> Result<(), HookError>;
}

/// A [`VersionStore`] backed by a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct FileVersionStore {
    path: PathBuf,
}

impl FileVersionStore {
    /// Store at the given file path. Nothing is touched until a read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<CacheRecord, HookError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| HookError::io("reading", &self.path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl VersionStore for FileVersionStore {
    fn load(&self) -> Option<CacheRecord> {
        match self.read() {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("no usable version record: {}", e);
                None
            }
        }
    }

    fn store(&self, record: &CacheRecord) -> Result<(), HookError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| HookError::io("creating", dir, e))?;

        let json = serde_json::to_string_pretty(record)?;

        // Write next to the target so the rename stays on one filesystem.
        let mut tmp =
            NamedTempFile::new_in(dir).map_err(|e| HookError::io("creating temp file in", dir, e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| HookError::io("writing", tmp.path().to_path_buf(), e))?;
        tmp.persist(&self.path)?;

        debug!(path = %self.path.display(), version = %record.version, "stored version record");
        Ok(())
    }
}
