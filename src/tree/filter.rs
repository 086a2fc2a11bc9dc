//! Entry filtering shared by the hierarchy builder and metadata extraction.

use std::path::{Component, Path};

/// Substring exclude list matched against `/`-separated relative paths.
///
/// A pattern may match partway through a path segment: `draft` excludes both
/// `02_draft_notes.md` and `drafts/topic.md`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludePatterns {
    patterns: Vec<String>,
}

impl ExcludePatterns {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// True when any pattern occurs in `rel_path`.
    pub fn matches(&self, rel_path: &str) -> bool {
        self.patterns.iter().any(|p| rel_path.contains(p.as_str()))
    }
}

/// Dot-prefixed names are hidden.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// `path` relative to `root`, joined with `/` regardless of platform.
///
/// Returns an empty string for `root` itself or for paths outside it.
pub fn relative_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(Path::new(""));
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
