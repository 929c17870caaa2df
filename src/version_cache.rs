//! Version cache hook.
//!
//! Detects the installed Elide version and persists it as a [`CacheRecord`]
//! for the other hooks. A missing runtime is a normal outcome: the hook
//! prints an install hint and leaves any previous record alone.

use crate::cache::{CacheRecord, VersionStore, UNKNOWN_VERSION};
use crate::detection::{check_version, detect_install_method, find_executable, parse_version};
use crate::{DetectionError, HookError, HookOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Printed when the runtime cannot be queried.
pub const INSTALL_HINT: &str =
    "Elide not detected. Install with: curl -fsSL https://dl.elide.dev/cli/install.sh | bash";

/// Result of one version cache run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCacheOutcome {
    /// The runtime answered and this record was stored.
    Cached(CacheRecord),

    /// The runtime could not be queried; nothing was stored.
    NotDetected(DetectionError),
}

/// Query the runtime for its raw `--version` output.
///
/// # Detection Process
///
/// 1. Locate the executable on PATH
/// 2. Run `{executable} --version`, discarding stderr
/// 3. Return stdout for parsing
pub async fn query_version(options: &HookOptions) -> Result<String, DetectionError> {
    let path = find_executable(&options.executable).ok_or(DetectionError::NotFound)?;
    debug!(
        path = %path.display(),
        install_method = detect_install_method(&path).unwrap_or("unknown"),
        "found runtime executable"
    );
    check_version(&path, options.version_timeout).await
}

/// Build a record from raw version output.
///
/// Output without a version token is recorded as [`UNKNOWN_VERSION`].
///
/// ```rust
/// use elide_hooks::record_from_output;
/// use std::path::Path;
///
/// let cwd = Path::new("/work");
/// assert_eq!(record_from_output("elide 1.0.0-beta10", cwd).version, "1.0.0-beta10");
/// assert_eq!(record_from_output("elide dev build", cwd).version, "unknown");
/// ```
pub fn record_from_output(output: &str, cwd: &Path) -> CacheRecord {
    let version = parse_version(output.trim()).unwrap_or(UNKNOWN_VERSION);
    CacheRecord::new(version, cwd)
}

/// Persist the outcome of a version query and report it on `out`.
///
/// Query failures print [`INSTALL_HINT`] and touch nothing. Store failures
/// propagate.
pub fn apply_query_result<S, W>(
    result: Result<String, DetectionError>,
    store: &S,
    cwd: &Path,
    out: &mut W,
) -> Result<VersionCacheOutcome, HookError>
where
    S: VersionStore + ?Sized,
    W: Write,
{
    let output = match result {
        Ok(output) => output,
        Err(e) => {
            debug!("version query failed: {}", e.description());
            write_line(out, INSTALL_HINT)?;
            return Ok(VersionCacheOutcome::NotDetected(e));
        }
    };

    let record = record_from_output(&output, cwd);
    store.store(&record)?;
    write_line(
        out,
        &format!("Elide version {} detected and cached.", record.version),
    )?;
    Ok(VersionCacheOutcome::Cached(record))
}

/// Run the whole hook: query, persist, report.
///
/// # Example
///
/// ```rust,no_run
/// use elide_hooks::{run_version_cache, FileVersionStore, HookOptions};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), elide_hooks::HookError> {
///     let options = HookOptions::from_env();
///     let store = FileVersionStore::new(&options.cache_file);
///     let cwd = std::env::current_dir().unwrap();
///     run_version_cache(&options, &store, &cwd, &mut std::io::stdout()).await?;
///     Ok(())
/// }
/// ```
pub async fn run_version_cache<S, W>(
    options: &HookOptions,
    store: &S,
    cwd: &Path,
    out: &mut W,
) -> Result<VersionCacheOutcome, HookError>
where
    S: VersionStore + ?Sized,
    W: Write,
{
    let result = query_version(options).await;
    apply_query_result(result, store, cwd, out)
}

fn write_line<W: Write>(out: &mut W, line: &str) -> Result<(), HookError> {
    writeln!(out, "{}", line).map_err(|e| HookError::io("writing", "<stdout>", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileVersionStore;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// In-memory store recording every write.
    #[derive(Default)]
    struct MemoryStore {
        writes: RefCell<Vec<CacheRecord>>,
    }

    impl VersionStore for MemoryStore {
        fn load(&self) -> Option<CacheRecord> {
            self.writes.borrow().last().cloned()
        }

        fn store(&self, record: &CacheRecord) -> Result<(), HookError> {
            self.writes.borrow_mut().push(record.clone());
            Ok(())
        }
    }

    fn run(result: Result<String, DetectionError>, store: &MemoryStore) -> (VersionCacheOutcome, String) {
        let mut out = Vec::new();
        let outcome = apply_query_result(result, store, Path::new("/work/app"), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prerelease_version_is_cached() {
        let store = MemoryStore::default();
        let (outcome, out) = run(Ok("tool 1.0.0-beta10\n".to_string()), &store);

        let record = store.load().unwrap();
        assert_eq!(record.version, "1.0.0-beta10");
        assert_eq!(record.cwd, PathBuf::from("/work/app"));
        assert_eq!(outcome, VersionCacheOutcome::Cached(record));
        assert_eq!(out, "Elide version 1.0.0-beta10 detected and cached.\n");
    }

    #[test]
    fn test_output_without_version_records_unknown() {
        let store = MemoryStore::default();
        let (_, out) = run(Ok("elide (development build)".to_string()), &store);

        assert_eq!(store.load().unwrap().version, UNKNOWN_VERSION);
        assert_eq!(out, "Elide version unknown detected and cached.\n");
    }

    #[test]
    fn test_query_failure_prints_hint_and_stores_nothing() {
        let store = MemoryStore::default();
        let (outcome, out) = run(Err(DetectionError::NotFound), &store);

        assert!(store.writes.borrow().is_empty());
        assert_eq!(outcome, VersionCacheOutcome::NotDetected(DetectionError::NotFound));
        assert_eq!(out, format!("{}\n", INSTALL_HINT));
    }

    #[test]
    fn test_query_failure_keeps_stale_record() {
        let temp = tempdir().unwrap();
        let store = FileVersionStore::new(temp.path().join("version.json"));
        store.store(&CacheRecord::new("0.9.0", "/old")).unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        let mut out = Vec::new();
        apply_query_result(Err(DetectionError::NonZeroExit), &store, Path::new("/new"), &mut out)
            .unwrap();

        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_rerun_keeps_version() {
        let store = MemoryStore::default();
        run(Ok("elide 1.0.0".to_string()), &store);
        run(Ok("elide 1.0.0".to_string()), &store);

        let writes = store.writes.borrow();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].version, writes[1].version);
        assert!(writes[1].detected_at >= writes[0].detected_at);
    }

    #[test]
    fn test_store_failure_propagates() {
        let temp = tempdir().unwrap();
        // A regular file where the cache directory should be.
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let store = FileVersionStore::new(blocker.join("version.json"));

        let mut out = Vec::new();
        let result = apply_query_result(Ok("1.0.0".to_string()), &store, Path::new("/w"), &mut out);
        assert!(matches!(result, Err(HookError::Io { .. })));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_run_with_missing_executable() {
        let temp = tempdir().unwrap();
        let options = HookOptions {
            executable: "definitely_not_elide_xyz123".to_string(),
            cache_file: temp.path().join("version.json"),
            ..Default::default()
        };
        let store = FileVersionStore::new(&options.cache_file);

        let mut out = Vec::new();
        let outcome = run_version_cache(&options, &store, temp.path(), &mut out)
            .await
            .unwrap();

        assert_eq!(outcome, VersionCacheOutcome::NotDetected(DetectionError::NotFound));
        assert!(!options.cache_file.exists());
        assert!(String::from_utf8(out).unwrap().contains("Install with"));
    }
}
