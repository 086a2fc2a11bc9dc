//! Built-in defaults applied beneath every other source.

use crate::config::SourceConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Start a builder seeded with the `source.*` defaults.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = SourceConfig::default();
    Config::builder()
        .set_default("source.exclude", Vec::<String>::new())?
        .set_default("source.index_file", defaults.index_file)?
        .set_default("source.code_extensions", defaults.code_extensions)?
        .set_default("source.root_title", defaults.root_title)
}
