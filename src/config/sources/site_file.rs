//! YAML site file source.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::collections::BTreeMap;
use std::path::Path;

/// Add the site file to the builder.
///
/// When `required` is false a missing file is skipped so the defaults apply.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !required && !path.exists() {
        return Ok(builder);
    }
    Ok(builder.add_source(
        File::from(path)
            .format(FileFormat::Yaml)
            .required(required),
    ))
}

/// Read the `site` mapping with its keys exactly as written.
///
/// The layered builder folds key case, and templates address these keys by
/// name (`siteName`, `baseURL`), so this subtree is read with `serde_yaml`
/// directly. A missing file or section yields an empty mapping.
pub fn read_site_section(
    path: &Path,
) -> Result<BTreeMap<String, serde_json::Value>, ConfigError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Message(format!("Failed to read {:?}: {}", path, e)))?;
    let document: serde_yaml::Value = serde_yaml::from_str(&text)
        .map_err(|e| ConfigError::Message(format!("Invalid YAML in {:?}: {}", path, e)))?;
    match document.get("site") {
        None | Some(serde_yaml::Value::Null) => Ok(BTreeMap::new()),
        Some(site) => serde_yaml::from_value(site.clone()).map_err(|e| {
            ConfigError::Message(format!("Invalid `site` section in {:?}: {}", path, e))
        }),
    }
}
