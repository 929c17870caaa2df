//! # elide-hooks
//!
//! Assistant hooks that make a coding assistant aware of Elide polyglot
//! projects.
//!
//! Three independent hooks, each shipped as its own binary and run as a
//! short-lived process by the host:
//!
//! - **check-elide-init** ([`ProjectDetector`]): detects an Elide project
//!   and suggests `/elide:init` when onboarding knowledge is missing
//! - **elide-version-cache** ([`run_version_cache`]): queries
//!   `elide --version` and persists a [`CacheRecord`]
//! - **elide-docs-redirect** ([`DocsRedirector`]): rewrites Elide
//!   documentation fetches to their `llms.txt` variants
//!
//! The hooks share nothing at runtime except the cache file behind
//! [`FileVersionStore`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use elide_hooks::{DocsRedirector, FileVersionStore, HookOptions, ProjectDetector};
//!
//! let options = HookOptions::from_env();
//! let cwd = std::env::current_dir().unwrap();
//!
//! if let Some(advisory) = ProjectDetector::standard(&options).advisory(&cwd) {
//!     println!("{}", advisory);
//! }
//!
//! let redirector = DocsRedirector::new(FileVersionStore::new(&options.cache_file));
//! let decision = redirector.decide_payload(Some(r#"{"url":"https://docs.elide.dev/"}"#));
//! println!("{}", decision.to_json());
//! ```

mod cache;
mod detection;
mod error;
mod language;
pub mod logging;
mod options;
mod project;
mod redirect;
mod version_cache;

pub use cache::{CacheRecord, FileVersionStore, VersionStore, UNKNOWN_VERSION};
pub use error::{DetectionError, HookError};
pub use language::SourceLanguage;
pub use options::{default_cache_file, HookOptions};
pub use project::{
    find_files, DetectorRule, ForeignImportRule, KnowledgeState, ManifestMentionRule,
    ProjectDetector, ADVISORY, KNOWLEDGE_FILE, MANIFEST_FILE, NOTES_FILE,
};
pub use redirect::{
    extract_url, llm_friendly_url, DocMapping, DocsRedirector, Modifications, RedirectDecision,
    DOC_MAPPINGS, ENV_TOOL_INPUT, LATEST_VERSION,
};
pub use version_cache::{
    apply_query_result, query_version, record_from_output, run_version_cache, VersionCacheOutcome,
    INSTALL_HINT,
};
