//! Project detector hook.
//!
//! Decides whether the working directory is an Elide project and, if the
//! onboarding knowledge has not been imported yet, produces a one-time
//! advisory recommending `/elide:init`.

mod rules;
mod scan;

pub use rules::{DetectorRule, ForeignImportRule, ManifestMentionRule, MANIFEST_FILE};
pub use scan::find_files;

use crate::{HookOptions, SourceLanguage};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Onboarding artifact, relative to the project root.
pub const KNOWLEDGE_FILE: &str = ".claude/elide/knowledge/general-elide-knowledge.md";

/// Project notes file that may mention the runtime.
pub const NOTES_FILE: &str = "CLAUDE.md";

/// Advisory printed for an Elide project without imported knowledge.
pub const ADVISORY: &str = "
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
⚡️ ELIDE PROJECT DETECTED
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

This appears to be an Elide polyglot project, but the Elide
plugin hasn't been initialized yet.

Run /elide:init to:
• Import Elide knowledge into your CLAUDE.md
• Enable polyglot development features
• Get cross-language interop guidance

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
";

/// What onboarding has already left behind in a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KnowledgeState {
    /// The onboarding knowledge file exists.
    pub has_knowledge: bool,

    /// The project notes file mentions Elide by name.
    pub notes_mention_runtime: bool,
}

impl KnowledgeState {
    /// Inspect `root`. Missing or unreadable files read as absent.
    pub fn inspect(root: &Path) -> Self {
        let has_knowledge = root.join(KNOWLEDGE_FILE).is_file();
        let notes_mention_runtime = fs::read_to_string(root.join(NOTES_FILE))
            .map(|notes| notes.contains("elide") || notes.contains("Elide"))
            .unwrap_or(false);

        Self {
            has_knowledge,
            notes_mention_runtime,
        }
    }
}

/// Ordered set of relevance rules combined with short-circuit OR.
pub struct ProjectDetector {
    rules: Vec<Box<dyn DetectorRule>>,
}

impl ProjectDetector {
    /// A detector over an explicit rule list, evaluated in order.
    pub fn new(rules: Vec<Box<dyn DetectorRule>>) -> Self {
        Self { rules }
    }

    /// The standard rules: a foreign-import scan per [`SourceLanguage`],
    /// then the manifest mention check.
    pub fn standard(options: &HookOptions) -> Self {
        let mut rules: Vec<Box<dyn DetectorRule>> = SourceLanguage::all()
            .map(|language| {
                Box::new(ForeignImportRule::new(
                    language,
                    options.scan_depth,
                    options.scan_file_limit,
                )) as Box<dyn DetectorRule>
            })
            .collect();
        rules.push(Box::new(ManifestMentionRule::default()));
        Self::new(rules)
    }

    /// Whether any rule recognises `root` as an Elide project.
    ///
    /// A rule that fails counts as a negative answer and evaluation moves on
    /// to the next rule.
    pub fn is_relevant(&self, root: &Path) -> bool {
        self.rules.iter().any(|rule| match rule.evaluate(root) {
            Ok(hit) => {
                debug!(rule = rule.name(), hit, "evaluated rule");
                hit
            }
            Err(e) => {
                debug!(rule = rule.name(), "rule failed, treating as negative: {}", e);
                false
            }
        })
    }

    /// The advisory to print for `root`, if any.
    pub fn advisory(&self, root: &Path) -> Option<&'static str> {
        let knowledge = KnowledgeState::inspect(root);
        debug!(?knowledge, root = %root.display(), "inspected knowledge state");
        if knowledge.has_knowledge {
            return None;
        }
        self.is_relevant(root).then_some(ADVISORY)
    }
}
