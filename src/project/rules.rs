//! Heuristic rules deciding whether a directory is an Elide project.

use super::scan::find_files;
use crate::{HookError, SourceLanguage};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Manifest inspected for a runtime mention.
pub const MANIFEST_FILE: &str = "package.json";

/// One independent relevance heuristic.
///
/// Rules must only answer `true` on an exact textual match; an `Err` is
/// treated by the caller as a negative answer for this rule alone.
pub trait DetectorRule {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Evaluate the rule against a project directory.
    fn evaluate(&self, root: &Path) -> Result<bool, HookError>;
}

/// Scans source files of one language for imports of another language.
#[derive(Debug, Clone)]
pub struct ForeignImportRule {
    language: SourceLanguage,
    max_depth: usize,
    file_limit: usize,
}

impl ForeignImportRule {
    /// A rule scanning `language` sources, bounded by depth and file count.
    pub fn new(language: SourceLanguage, max_depth: usize, file_limit: usize) -> Self {
        Self {
            language,
            max_depth,
            file_limit,
        }
    }
}

impl DetectorRule for ForeignImportRule {
    fn name(&self) -> &'static str {
        match self.language {
            SourceLanguage::JavaScript => "javascript-foreign-import",
            SourceLanguage::Python => "python-foreign-import",
        }
    }

    fn evaluate(&self, root: &Path) -> Result<bool, HookError> {
        let files = find_files(
            root,
            self.language.extensions(),
            self.max_depth,
            self.file_limit,
        );
        debug!(
            language = self.language.display_name(),
            files = files.len(),
            "scanning sources"
        );
        for file in files {
            let content = read_source(&file)?;
            if self.language.has_foreign_import(&content) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Read a source file, decoding invalid UTF-8 lossily.
///
/// Only I/O failures are errors; a stray latin-1 byte must not hide a marker.
fn read_source(path: &Path) -> Result<String, HookError> {
    let bytes = fs::read(path).map_err(|e| HookError::io("reading", path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Looks for the runtime's name anywhere in the root manifest.
#[derive(Debug, Clone)]
pub struct ManifestMentionRule {
    manifest: &'static str,
    needle: &'static str,
}

impl ManifestMentionRule {
    /// A rule testing `manifest` for `needle`, case-insensitively.
    pub fn new(manifest: &'static str, needle: &'static str) -> Self {
        Self { manifest, needle }
    }
}

impl Default for ManifestMentionRule {
    fn default() -> Self {
        Self::new(MANIFEST_FILE, "elide")
    }
}

impl DetectorRule for ManifestMentionRule {
    fn name(&self) -> &'static str {
        "manifest-mention"
    }

    fn evaluate(&self, root: &Path) -> Result<bool, HookError> {
        let path = root.join(self.manifest);
        if !path.is_file() {
            return Ok(false);
        }
        let raw = fs::read_to_string(&path).map_err(|e| HookError::io("reading", &path, e))?;
        // Parse first so a malformed manifest is an error, not a text match.
        let manifest: serde_json::Value = serde_json::from_str(&raw)?;
        Ok(manifest
            .to_string()
            .to_lowercase()
            .contains(&self.needle.to_lowercase()))
    }
}
