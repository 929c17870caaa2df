//! Documentation redirector hook.
//!
//! Intercepts a pending documentation fetch and, for Elide documentation
//! URLs, substitutes the plain-text `llms.txt` variant. The redirector fails
//! open: whatever goes wrong, the answer is [`RedirectDecision::Allow`].

use crate::cache::VersionStore;
use crate::HookError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Environment variable carrying the pending tool input.
pub const ENV_TOOL_INPUT: &str = "CLAUDE_TOOL_INPUT";

/// Version used when no record is cached.
pub const LATEST_VERSION: &str = "latest";

/// Main site root, redirected unconditionally.
const SITE_ROOTS: &[&str] = &["https://elide.dev", "https://elide.dev/"];

/// Target for the main site root.
const SITE_LLMS_URL: &str = "https://elide.dev/llms.txt";

/// A documentation domain and its LLM-friendly counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocMapping {
    /// Substring identifying the domain anywhere in a URL.
    pub pattern: &'static str,
    /// Replacement URL.
    pub target: &'static str,
}

/// Known documentation domains, checked in order.
pub const DOC_MAPPINGS: &[DocMapping] = &[
    DocMapping {
        pattern: "docs.elide.dev",
        target: "https://docs.elide.dev/llms.txt",
    },
    DocMapping {
        pattern: "elide.dev/docs",
        target: "https://elide.dev/llms.txt",
    },
];

/// URL replacement carried by a `modify` decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifications {
    /// The URL to fetch instead.
    pub url: String,
}

/// The redirector's entire output for one request.
///
/// Serializes as `{"decision":"allow"}` or
/// `{"decision":"modify","modifications":{"url":...},"message":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum RedirectDecision {
    /// Let the fetch proceed unchanged.
    Allow,

    /// Fetch a different URL.
    Modify {
        /// The substitute URL.
        modifications: Modifications,
        /// Why the URL was substituted.
        message: String,
    },
}

impl RedirectDecision {
    /// A `modify` decision pointing at `url`.
    pub fn modify(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Modify {
            modifications: Modifications { url: url.into() },
            message: message.into(),
        }
    }

    /// The substitute URL, if this is a `modify` decision.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Modify { modifications, .. } => Some(&modifications.url),
        }
    }

    /// The JSON line written to stdout.
    pub fn to_json(&self) -> String {
        // Neither variant holds anything serde_json can refuse.
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"decision":"allow"}"#.to_string())
    }
}

/// Decides redirects, reading the cached version through a [`VersionStore`].
pub struct DocsRedirector<S> {
    store: S,
}

impl<S: VersionStore> DocsRedirector<S> {
    /// A redirector reading versions from `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Decide for a raw payload, mapping every failure to `allow`.
    ///
    /// ```rust
    /// use elide_hooks::{DocsRedirector, FileVersionStore, RedirectDecision};
    ///
    /// let redirector = DocsRedirector::new(FileVersionStore::new("/nonexistent/version.json"));
    /// assert_eq!(redirector.decide_payload(None), RedirectDecision::Allow);
    /// assert_eq!(redirector.decide_payload(Some("not json")), RedirectDecision::Allow);
    ///
    /// let decision = redirector.decide_payload(Some(r#"{"url":"https://elide.dev/"}"#));
    /// assert_eq!(decision.url(), Some("https://elide.dev/llms.txt"));
    /// ```
    pub fn decide_payload(&self, payload: Option<&str>) -> RedirectDecision {
        let Some(payload) = payload else {
            debug!("no tool input, allowing");
            return RedirectDecision::Allow;
        };
        match extract_url(payload).and_then(|url| self.decide(&url)) {
            Ok(decision) => decision,
            Err(e) => {
                debug!("redirect failed open: {}", e);
                RedirectDecision::Allow
            }
        }
    }

    /// Decide for a single URL.
    pub fn decide(&self, url: &str) -> Result<RedirectDecision, HookError> {
        if SITE_ROOTS.contains(&url) {
            return Ok(RedirectDecision::modify(
                SITE_LLMS_URL,
                "Redirecting to LLM-optimized documentation at elide.dev/llms.txt",
            ));
        }

        if !DOC_MAPPINGS.iter().any(|m| url.contains(m.pattern)) {
            return Ok(RedirectDecision::Allow);
        }

        let version = self.doc_version();
        match llm_friendly_url(url, &version) {
            Some(target) if target != url => Ok(RedirectDecision::modify(
                target,
                format!("Redirecting to LLM-optimized documentation: {}", target),
            )),
            _ => Ok(RedirectDecision::Allow),
        }
    }

    /// The cached runtime version, or [`LATEST_VERSION`].
    pub fn doc_version(&self) -> String {
        self.store
            .load()
            .map(|record| record.version)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| LATEST_VERSION.to_string())
    }
}

/// Map a documentation URL to its LLM-friendly variant.
///
/// Every mapping currently targets a single unversioned `llms.txt`; the
/// version is accepted so version-specific targets can key off it.
pub fn llm_friendly_url(url: &str, version: &str) -> Option<&'static str> {
    let mapping = DOC_MAPPINGS.iter().find(|m| url.contains(m.pattern))?;
    debug!(pattern = mapping.pattern, version, "matched documentation domain");
    Some(mapping.target)
}

/// Pull the requested URL out of a payload.
///
/// Accepts a bare tool input (`{"url": ...}`) or a hook envelope
/// (`{"tool_input": {"url": ...}}`).
pub fn extract_url(payload: &str) -> Result<String, HookError> {
    let value: Value = serde_json::from_str(payload)?;
    value
        .get("url")
        .or_else(|| value.get("tool_input").and_then(|input| input.get("url")))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(HookError::MissingUrl)
}
