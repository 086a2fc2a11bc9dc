//! Environment variable source: UU_INDEX_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "UU_INDEX";

/// Add environment variable overlay to builder.
///
/// `UU_INDEX_SOURCE__ROOT_TITLE=Course` sets `source.root_title`; list keys
/// (`source.exclude`, `source.code_extensions`) take comma-separated values.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("source.exclude")
            .with_list_parse_key("source.code_extensions"),
    );
    Ok(builder)
}
