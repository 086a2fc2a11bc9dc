//! Preprocess Pipeline
//!
//! Runs the three stages in order (metadata extraction, hierarchy generation,
//! task aggregation) and writes their JSON outputs plus the pass-through site
//! settings. Each file is written only once its structure is fully built.

use crate::config::SiteConfig;
use crate::error::ApiError;
use crate::metadata::{extract_all_metadata, MetadataMap};
use crate::tasks::{aggregate_all_tasks, TaskIndex};
use crate::tree::{ExcludePatterns, HierarchyBuilder, TreeNode};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const METADATA_FILE: &str = "metadata.json";
pub const HIERARCHY_FILE: &str = "hierarchy.json";
pub const TASKS_FILE: &str = "tasks.json";
pub const SITE_FILE: &str = "site.json";

/// Result of a full preprocess run.
#[derive(Debug, Clone, Serialize)]
pub struct PreprocessSummary {
    pub content_dir: PathBuf,
    pub output_dir: PathBuf,
    pub metadata_records: usize,
    /// Top-level sections in presentation order: (name, title).
    pub sections: Vec<(String, String)>,
    pub homework: usize,
    pub exams: usize,
    pub projects: usize,
    pub written: Vec<PathBuf>,
}

impl PreprocessSummary {
    pub fn total_tasks(&self) -> usize {
        self.homework + self.exams + self.projects
    }
}

/// Pipeline stages bound to one configuration.
pub struct Preprocessor<'a> {
    config: &'a SiteConfig,
    exclude: ExcludePatterns,
}

impl<'a> Preprocessor<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            exclude: config.source.exclude_patterns(),
            config,
        }
    }

    /// Stage 1: metadata for every Markdown file.
    pub fn extract_metadata(&self, content_dir: &Path) -> Result<MetadataMap, ApiError> {
        info!(content_dir = %content_dir.display(), "Extracting metadata from markdown files");
        Ok(extract_all_metadata(content_dir, &self.exclude)?)
    }

    /// Stage 2: presentation hierarchy.
    pub fn build_hierarchy(
        &self,
        content_dir: &Path,
        metadata: &MetadataMap,
    ) -> Result<TreeNode, ApiError> {
        info!("Generating hierarchy tree");
        let builder = HierarchyBuilder::new(metadata, &self.exclude)
            .with_options(self.config.source.hierarchy_options());
        Ok(builder.generate(content_dir)?)
    }

    /// Stage 3: task index.
    pub fn aggregate_tasks(&self, metadata: &MetadataMap) -> TaskIndex {
        info!("Aggregating tasks");
        aggregate_all_tasks(metadata)
    }

    /// Run every stage and write the four output files into `output_dir`.
    pub fn run(&self, content_dir: &Path, output_dir: &Path) -> Result<PreprocessSummary, ApiError> {
        std::fs::create_dir_all(output_dir).map_err(|source| ApiError::Output {
            path: output_dir.to_path_buf(),
            source,
        })?;
        let mut written = Vec::new();

        let metadata = self.extract_metadata(content_dir)?;
        written.push(write_json(&output_dir.join(METADATA_FILE), &metadata)?);

        let hierarchy = self.build_hierarchy(content_dir, &metadata)?;
        written.push(write_json(&output_dir.join(HIERARCHY_FILE), &hierarchy)?);

        let tasks = self.aggregate_tasks(&metadata);
        written.push(write_json(&output_dir.join(TASKS_FILE), &tasks)?);

        written.push(write_json(&output_dir.join(SITE_FILE), &self.config.site)?);

        info!(output_dir = %output_dir.display(), "Preprocessing complete");
        Ok(PreprocessSummary {
            content_dir: content_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            metadata_records: metadata.len(),
            sections: hierarchy
                .children()
                .iter()
                .map(|c| (c.name.clone(), c.title.clone()))
                .collect(),
            homework: tasks.homework.len(),
            exams: tasks.exams.len(),
            projects: tasks.projects.len(),
            written,
        })
    }
}

/// Pretty-print `value` as JSON (2-space indent, non-ASCII kept) to `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf, ApiError> {
    let text = serde_json::to_string_pretty(value)?;
    std::fs::write(path, text).map_err(|source| ApiError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Wrote output");
    Ok(path.to_path_buf())
}
