//! Source languages scanned for cross-language imports.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A source language whose files may import modules written in another
/// language through the Elide runtime.
///
/// The variant order is the order the project detector scans them in.
///
/// # Example
///
/// ```rust
/// use elide_hooks::SourceLanguage;
///
/// for lang in SourceLanguage::all() {
///     println!("{}: {:?}", lang.display_name(), lang.extensions());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[non_exhaustive]
pub enum SourceLanguage {
    /// JavaScript and TypeScript sources.
    JavaScript,
    /// Python sources.
    Python,
}

impl SourceLanguage {
    /// File extensions (with leading dot) belonging to this language.
    ///
    /// ```rust
    /// use elide_hooks::SourceLanguage;
    ///
    /// assert_eq!(SourceLanguage::Python.extensions(), &[".py"]);
    /// ```
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::JavaScript => &[".ts", ".js"],
            Self::Python => &[".py"],
        }
    }

    /// Literal text that marks an import of a foreign-language module.
    ///
    /// A JavaScript file importing Python reads `import py from "./x.py"`;
    /// a Python file importing TypeScript reads `import ts from ...`.
    pub fn foreign_import_markers(&self) -> &'static [&'static str] {
        match self {
            Self::JavaScript => &["import py from", "import rb from"],
            Self::Python => &["import js from", "import ts from"],
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript/TypeScript",
            Self::Python => "Python",
        }
    }

    /// Whether source text contains a foreign import marker.
    pub fn has_foreign_import(&self, source: &str) -> bool {
        self.foreign_import_markers()
            .iter()
            .any(|marker| source.contains(marker))
    }

    /// Iterator over all scanned languages, in scan order.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
