//! CLI Tooling
//!
//! Command-line interface for the preprocessor. Every command returns its
//! output as a string; the binary prints it.

use crate::config::{ConfigLoader, SiteConfig, DEFAULT_CONFIG_PATH};
use crate::error::ApiError;
use crate::format::{format_hierarchy_text, format_preprocess_summary_text, format_tasks_text};
use crate::logging::LoggingOverrides;
use crate::pipeline::Preprocessor;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Default content directory, relative to the working directory.
pub const DEFAULT_CONTENT_DIR: &str = "clase";

/// Default output directory for the JSON data files.
pub const DEFAULT_OUTPUT_DIR: &str = "uu_framework/eleventy/_data";

/// uu-index - course content preprocessor
#[derive(Parser)]
#[command(name = "uu-index")]
#[command(about = "Builds the navigation hierarchy, metadata and task index for course content")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to site configuration (YAML)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Path to content directory
    #[arg(long, global = true, default_value = DEFAULT_CONTENT_DIR)]
    pub content: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn logging_overrides(&self) -> LoggingOverrides {
        LoggingOverrides {
            verbose: self.verbose,
            level: self.log_level.clone(),
            format: self.log_format.clone(),
            output: self.log_output.clone(),
            file: self.log_file.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline and write metadata, hierarchy, tasks and site JSON
    Preprocess {
        /// Path to output data directory
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
    },
    /// Print the content hierarchy
    Hierarchy {
        /// Output format (json or text)
        #[arg(long, default_value = "json", value_parser = ["json", "text"])]
        format: String,
    },
    /// Print extracted metadata as JSON
    Metadata,
    /// Print the aggregated task index
    Tasks {
        /// Output format (json or text)
        #[arg(long, default_value = "json", value_parser = ["json", "text"])]
        format: String,
    },
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Preprocess { .. } => "preprocess",
        Commands::Hierarchy { .. } => "hierarchy",
        Commands::Metadata => "metadata",
        Commands::Tasks { .. } => "tasks",
    }
}

/// CLI context for executing commands
pub struct CliContext {
    config: SiteConfig,
    /// Site file the config was read from; `None` when it was missing.
    config_file: Option<PathBuf>,
    content_dir: PathBuf,
    verbose: bool,
}

impl CliContext {
    /// Create a new CLI context; a missing config file falls back to defaults.
    pub fn new(content_dir: PathBuf, config_path: &Path, verbose: bool) -> Result<Self, ApiError> {
        let config = ConfigLoader::load(config_path)?;
        let mut context = Self::with_config(content_dir, config, verbose);
        if config_path.exists() {
            context.config_file = Some(config_path.to_path_buf());
        }
        Ok(context)
    }

    /// Create a context from an already-loaded configuration.
    pub fn with_config(content_dir: PathBuf, config: SiteConfig, verbose: bool) -> Self {
        Self {
            config,
            config_file: None,
            content_dir,
            verbose,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        let preprocessor = Preprocessor::new(&self.config);
        match command {
            Commands::Preprocess { output } => {
                let summary = preprocessor.run(&self.content_dir, output)?;
                Ok(format_preprocess_summary_text(&summary, self.verbose))
            }
            Commands::Hierarchy { format } => {
                let metadata = preprocessor.extract_metadata(&self.content_dir)?;
                let hierarchy = preprocessor.build_hierarchy(&self.content_dir, &metadata)?;
                match format.as_str() {
                    "text" => Ok(format_hierarchy_text(&hierarchy)),
                    _ => Ok(serde_json::to_string_pretty(&hierarchy)?),
                }
            }
            Commands::Metadata => {
                let metadata = preprocessor.extract_metadata(&self.content_dir)?;
                Ok(serde_json::to_string_pretty(&metadata)?)
            }
            Commands::Tasks { format } => {
                let metadata = preprocessor.extract_metadata(&self.content_dir)?;
                let tasks = preprocessor.aggregate_tasks(&metadata);
                match format.as_str() {
                    "text" => Ok(format_tasks_text(&tasks)),
                    _ => Ok(serde_json::to_string_pretty(&tasks)?),
                }
            }
        }
    }
}
