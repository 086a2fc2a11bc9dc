//! Configuration
//!
//! Site configuration is read from a YAML file (optional) and overlaid with
//! `UU_INDEX_*` environment variables. The `site` mapping is opaque to the
//! preprocessor and passed through to `site.json` for the templates.

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::tree::{ExcludePatterns, HierarchyOptions, DEFAULT_INDEX_FILE, DEFAULT_ROOT_TITLE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default site configuration path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "uu_framework/config/site.yaml";

/// Complete preprocessor configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Free-form site settings forwarded to the templates.
    #[serde(default)]
    pub site: BTreeMap<String, serde_json::Value>,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the content tree is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Substrings; any relative path containing one is skipped.
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default = "default_index_file")]
    pub index_file: String,

    #[serde(default = "default_code_extensions")]
    pub code_extensions: Vec<String>,

    #[serde(default = "default_root_title")]
    pub root_title: String,
}

fn default_index_file() -> String {
    DEFAULT_INDEX_FILE.to_string()
}

fn default_code_extensions() -> Vec<String> {
    vec!["py".to_string()]
}

fn default_root_title() -> String {
    DEFAULT_ROOT_TITLE.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            index_file: default_index_file(),
            code_extensions: default_code_extensions(),
            root_title: default_root_title(),
        }
    }
}

impl SourceConfig {
    pub fn exclude_patterns(&self) -> ExcludePatterns {
        ExcludePatterns::new(self.exclude.iter().cloned())
    }

    pub fn hierarchy_options(&self) -> HierarchyOptions {
        HierarchyOptions {
            index_file: self.index_file.clone(),
            code_extensions: self
                .code_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
            root_title: self.root_title.clone(),
        }
    }
}
