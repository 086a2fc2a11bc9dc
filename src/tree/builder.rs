//! Recursive hierarchy construction from the content directory.

use super::filter::{is_hidden, relative_path, ExcludePatterns};
use super::node::TreeNode;
use super::sort_key::SortKey;
use super::title::{title_from_dirname, title_from_filename};
use crate::error::ContentError;
use crate::metadata::MetadataMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default name of the per-directory index file.
pub const DEFAULT_INDEX_FILE: &str = "00_index.md";

/// Default root title.
pub const DEFAULT_ROOT_TITLE: &str = "Contenido";

/// Naming knobs for the hierarchy builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyOptions {
    /// File supplying a directory's title; never listed as a child.
    pub index_file: String,
    /// Extensions (without dot) surfaced as code items.
    pub code_extensions: Vec<String>,
    /// Title given to the root node.
    pub root_title: String,
}

impl Default for HierarchyOptions {
    fn default() -> Self {
        Self {
            index_file: DEFAULT_INDEX_FILE.to_string(),
            code_extensions: vec!["py".to_string()],
            root_title: DEFAULT_ROOT_TITLE.to_string(),
        }
    }
}

/// One listed directory entry that survived hidden/exclude filtering.
struct Entry {
    name: String,
    path: PathBuf,
    rel_path: String,
    is_dir: bool,
    key: SortKey,
}

/// Builds the presentation tree for a content root.
///
/// Each build is a pure function of the metadata map, the exclude list, the
/// options and the filesystem contents.
pub struct HierarchyBuilder<'a> {
    metadata: &'a MetadataMap,
    exclude: &'a ExcludePatterns,
    options: HierarchyOptions,
}

impl<'a> HierarchyBuilder<'a> {
    pub fn new(metadata: &'a MetadataMap, exclude: &'a ExcludePatterns) -> Self {
        Self {
            metadata,
            exclude,
            options: HierarchyOptions::default(),
        }
    }

    pub fn with_options(mut self, options: HierarchyOptions) -> Self {
        self.options = options;
        self
    }

    /// Assemble the root node.
    ///
    /// A missing content root yields a root with no children. Only directories
    /// are descended at the top level; files directly under the root are not
    /// surfaced.
    pub fn generate(&self, content_root: &Path) -> Result<TreeNode, ContentError> {
        let root_name = content_root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !content_root.exists() {
            info!(
                content_root = %content_root.display(),
                "Content root does not exist, producing empty hierarchy"
            );
            return Ok(TreeNode::root(
                root_name,
                self.options.root_title.clone(),
                Vec::new(),
            ));
        }

        let mut children = Vec::new();
        for entry in self.list_entries(content_root, content_root)? {
            if !entry.is_dir {
                continue;
            }
            if let Some(child) = self.build_dir(&entry.path, content_root)? {
                info!(section = %entry.name, "Added top-level section");
                children.push(child);
            }
        }
        sort_children(&mut children);

        Ok(TreeNode::root(
            root_name,
            self.options.root_title.clone(),
            children,
        ))
    }

    /// Build the node for `dir`, or `None` when its relative path is excluded.
    pub fn build_dir(&self, dir: &Path, root: &Path) -> Result<Option<TreeNode>, ContentError> {
        let rel_path = relative_path(dir, root);
        if self.exclude.matches(&rel_path) {
            debug!(path = %rel_path, "Excluded directory");
            return Ok(None);
        }

        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let rel_index = join_rel(&rel_path, &self.options.index_file);
        let index_record = if dir.join(&self.options.index_file).is_file() {
            self.metadata.get(&rel_index)
        } else {
            None
        };
        let has_index = index_record.is_some();
        // An untitled index still gets the humanized name, never the raw one.
        let title = index_record
            .and_then(|record| record.title.clone())
            .unwrap_or_else(|| title_from_dirname(&name));

        let mut children = Vec::new();
        for entry in self.list_entries(dir, root)? {
            if entry.is_dir {
                if let Some(child) = self.build_dir(&entry.path, root)? {
                    children.push(child);
                }
            } else if has_extension(&entry.name, "md") {
                if entry.name == self.options.index_file {
                    continue;
                }
                children.push(self.file_node(entry));
            } else if self
                .options
                .code_extensions
                .iter()
                .any(|ext| has_extension(&entry.name, ext))
            {
                children.push(TreeNode::code(entry.name, entry.rel_path));
            }
        }
        sort_children(&mut children);

        debug!(
            path = %rel_path,
            children = children.len(),
            has_index,
            "Built directory node"
        );
        Ok(Some(TreeNode::directory(
            name, rel_path, title, has_index, children,
        )))
    }

    fn file_node(&self, entry: Entry) -> TreeNode {
        let record = self.metadata.get(&entry.rel_path);
        let title = record
            .and_then(|r| r.title.clone())
            .unwrap_or_else(|| title_from_filename(file_stem(&entry.name)));
        let summary = record.and_then(|r| r.summary.clone());
        TreeNode::file(entry.name, entry.rel_path, title, summary)
    }

    /// Immediate entries of `dir` minus hidden and excluded ones, in key order.
    fn list_entries(&self, dir: &Path, root: &Path) -> Result<Vec<Entry>, ContentError> {
        let read_dir = std::fs::read_dir(dir).map_err(|source| ContentError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();
        for item in read_dir {
            let item = item.map_err(|source| ContentError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let name = item.file_name().to_string_lossy().into_owned();
            if is_hidden(&name) {
                continue;
            }
            let path = item.path();
            let rel_path = relative_path(&path, root);
            if self.exclude.matches(&rel_path) {
                debug!(path = %rel_path, "Excluded entry");
                continue;
            }
            entries.push(Entry {
                key: SortKey::from_name(&name),
                is_dir: path.is_dir(),
                name,
                path,
                rel_path,
            });
        }
        entries.sort_by(|a, b| a.key.cmp(&b.key).then_with(|| a.name.cmp(&b.name)));
        Ok(entries)
    }
}

/// Sort siblings by key; equal keys fall back to the name for a stable result.
fn sort_children(children: &mut [TreeNode]) {
    children.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
}

fn join_rel(rel_dir: &str, name: &str) -> String {
    if rel_dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", rel_dir, name)
    }
}

fn has_extension(name: &str, ext: &str) -> bool {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy() == ext)
        .unwrap_or(false)
}

fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

/// Build one directory subtree with default options.
pub fn build_tree(
    dir: &Path,
    metadata: &MetadataMap,
    root: &Path,
    exclude: &ExcludePatterns,
) -> Result<Option<TreeNode>, ContentError> {
    HierarchyBuilder::new(metadata, exclude).build_dir(dir, root)
}

/// Build the full hierarchy for `content_root` with default options.
pub fn generate_hierarchy(
    content_root: &Path,
    metadata: &MetadataMap,
    exclude: &ExcludePatterns,
) -> Result<TreeNode, ContentError> {
    HierarchyBuilder::new(metadata, exclude).generate(content_root)
}
