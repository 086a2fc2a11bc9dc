//! Metadata extraction over the content tree.

use super::components::parse_components;
use super::frontmatter::{
    extract_bool, extract_string, extract_string_list, first_heading, parse_frontmatter,
    split_frontmatter,
};
use super::record::{MetadataMap, MetadataRecord};
use crate::error::ContentError;
use crate::tree::filter::{is_hidden, relative_path, ExcludePatterns};
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Build a record from Markdown source. `origin` only labels warnings.
pub fn parse_markdown(source: &str, origin: &str) -> MetadataRecord {
    let split = split_frontmatter(source);
    let fm = match split.yaml.map(parse_frontmatter) {
        Some(Ok(map)) => map,
        Some(Err(e)) => {
            warn!(file = %origin, error = %e, "Ignoring invalid front matter");
            serde_yaml::Mapping::new()
        }
        None => serde_yaml::Mapping::new(),
    };

    MetadataRecord {
        title: extract_string(&fm, "title").or_else(|| first_heading(split.body)),
        summary: extract_string(&fm, "summary").or_else(|| extract_string(&fm, "description")),
        kind: extract_string(&fm, "type"),
        id: extract_string(&fm, "id"),
        date: extract_string(&fm, "date"),
        due: extract_string(&fm, "due"),
        tags: extract_string_list(&fm, "tags"),
        draft: extract_bool(&fm, "draft").unwrap_or(false),
        components: parse_components(split.body, split.body_line_offset),
    }
}

/// Read and parse one Markdown file.
pub fn extract_file(path: &Path, origin: &str) -> Result<MetadataRecord, ContentError> {
    let source = std::fs::read_to_string(path).map_err(|source| ContentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_markdown(&source, origin))
}

/// Extract records for every Markdown file under `content_root`.
///
/// Hidden entries and entries whose relative path matches `exclude` are
/// pruned. A missing content root yields an empty map.
pub fn extract_all_metadata(
    content_root: &Path,
    exclude: &ExcludePatterns,
) -> Result<MetadataMap, ContentError> {
    let mut metadata = MetadataMap::new();
    if !content_root.exists() {
        info!(
            content_root = %content_root.display(),
            "Content root does not exist, no metadata extracted"
        );
        return Ok(metadata);
    }

    let walker = WalkDir::new(content_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            if is_hidden(&name) {
                return false;
            }
            !exclude.matches(&relative_path(entry.path(), content_root))
        });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_markdown = entry
            .path()
            .extension()
            .map(|ext| ext == "md")
            .unwrap_or(false);
        if !is_markdown {
            continue;
        }
        let rel_path = relative_path(entry.path(), content_root);
        let record = extract_file(entry.path(), &rel_path)?;
        debug!(
            path = %rel_path,
            components = record.components.len(),
            "Extracted metadata"
        );
        metadata.insert(rel_path, record);
    }

    info!(records = metadata.len(), "Metadata extraction complete");
    Ok(metadata)
}
