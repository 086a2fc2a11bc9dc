//! Hierarchy node types

use super::sort_key::SortKey;
use serde::{Deserialize, Serialize};

/// Node classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Root,
    Directory,
    File,
    Code,
}

/// One node of the content hierarchy.
///
/// Field presence follows the node type: the root has no `order` or
/// `has_index`; files always carry `summary` (possibly null); code items carry
/// neither `summary` nor `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    /// Path relative to the content root, `/`-separated; empty for the root.
    pub path: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_index: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    #[serde(default, skip_serializing_if = "Summary::is_absent")]
    pub summary: Summary,
}

/// File summary slot: absent for non-files, present-but-maybe-null for files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Summary {
    #[default]
    Absent,
    Present(Option<String>),
}

impl Summary {
    pub fn is_absent(&self) -> bool {
        matches!(self, Summary::Absent)
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Summary::Present(Some(text)) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl Serialize for Summary {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Summary::Present(Some(text)) => serializer.serialize_str(text),
            _ => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Summary {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Summary::Present(Option::<String>::deserialize(deserializer)?))
    }
}

impl TreeNode {
    /// Root node with the given display name, title and children.
    pub fn root(name: String, title: String, children: Vec<TreeNode>) -> Self {
        Self {
            name,
            path: String::new(),
            node_type: NodeType::Root,
            title,
            order: None,
            has_index: None,
            children: Some(children),
            summary: Summary::Absent,
        }
    }

    pub fn directory(
        name: String,
        path: String,
        title: String,
        has_index: bool,
        children: Vec<TreeNode>,
    ) -> Self {
        let order = SortKey::from_name(&name);
        Self {
            name,
            path,
            node_type: NodeType::Directory,
            title,
            order: Some(order),
            has_index: Some(has_index),
            children: Some(children),
            summary: Summary::Absent,
        }
    }

    pub fn file(name: String, path: String, title: String, summary: Option<String>) -> Self {
        let order = SortKey::from_name(&name);
        Self {
            name,
            path,
            node_type: NodeType::File,
            title,
            order: Some(order),
            has_index: None,
            children: None,
            summary: Summary::Present(summary),
        }
    }

    /// Code item, titled with its raw filename.
    pub fn code(name: String, path: String) -> Self {
        let order = SortKey::from_name(&name);
        Self {
            title: name.clone(),
            name,
            path,
            node_type: NodeType::Code,
            order: Some(order),
            has_index: None,
            children: None,
            summary: Summary::Absent,
        }
    }

    /// Children in presentation order (empty for leaves).
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Walk the subtree depth-first, self included.
    pub fn descendants(&self) -> Vec<&TreeNode> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.descendants());
        }
        out
    }

    /// Find a node by its relative path.
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        self.descendants().into_iter().find(|n| n.path == path)
    }
}
