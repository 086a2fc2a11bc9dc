//! Metadata record types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Relative path (`/`-separated) → extracted record, ordered for stable JSON.
pub type MetadataMap = BTreeMap<String, MetadataRecord>;

/// Fields extracted from one Markdown file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Front-matter `type` (lesson, homework, exam, project, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub draft: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ComponentRef>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Container block kinds recognized in Markdown bodies (`:::homework ...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Homework,
    Exercise,
    Prompt,
    Example,
    Exam,
    Project,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::Homework,
        ComponentKind::Exercise,
        ComponentKind::Prompt,
        ComponentKind::Example,
        ComponentKind::Exam,
        ComponentKind::Project,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Homework => "homework",
            ComponentKind::Exercise => "exercise",
            ComponentKind::Prompt => "prompt",
            ComponentKind::Example => "example",
            ComponentKind::Exam => "exam",
            ComponentKind::Project => "project",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == raw)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `:::kind attr="value"` block opening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRef {
    pub kind: ComponentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    /// 1-based line of the opening marker in the source file.
    pub line: usize,
}
