//! Version query execution.

use crate::DetectionError;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Run `<path> --version` and return its standard output.
///
/// The error stream is discarded. With `limit` set to `None` the call waits
/// for the command to exit; otherwise it is killed once `limit` elapses.
///
/// # Returns
///
/// `Ok(String)` with stdout (lossily decoded), or a `DetectionError`:
/// - `Timeout` if `limit` elapsed
/// - `PermissionDenied` if the executable cannot be run due to permissions
/// - `NotFound` if the path does not exist
/// - `NonZeroExit` if the command exited unsuccessfully
/// - `IoError` for other I/O failures
pub(crate) async fn check_version(
    path: &Path,
    limit: Option<Duration>,
) -> Result<String, DetectionError> {
    let mut cmd = Command::new(path);
    cmd.arg("--version")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    let output = match limit {
        Some(limit) => timeout(limit, cmd.output())
            .await
            .map_err(|_| DetectionError::Timeout)?,
        None => cmd.output().await,
    }
    .map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => DetectionError::PermissionDenied,
        std::io::ErrorKind::NotFound => DetectionError::NotFound,
        _ => DetectionError::IoError,
    })?;

    if !output.status.success() {
        return Err(DetectionError::NonZeroExit);
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_check_version_nonexistent() {
        let path = PathBuf::from("/nonexistent/path/to/elide");
        let result = check_version(&path, None).await;
        assert!(matches!(result, Err(DetectionError::NotFound)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_check_version_non_zero_exit() {
        let path = PathBuf::from("/bin/false");
        if path.exists() {
            let result = check_version(&path, None).await;
            assert!(matches!(result, Err(DetectionError::NonZeroExit)));
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_check_version_reads_stdout() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let script = temp.path().join("elide");
        std::fs::write(&script, "#!/bin/sh\necho \"elide 1.0.0-beta10\"\necho noise >&2\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let out = check_version(&script, Some(Duration::from_secs(5))).await.unwrap();
        assert_eq!(out.trim(), "elide 1.0.0-beta10");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_check_version_timeout() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let script = temp.path().join("elide");
        std::fs::write(&script, "#!/bin/sh\nsleep 5\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let result = check_version(&script, Some(Duration::from_millis(100))).await;
        assert!(matches!(result, Err(DetectionError::Timeout)));
    }
}
