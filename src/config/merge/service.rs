//! MergeService: orchestrates sources, applies merge policy, deserializes to SiteConfig.

use crate::config::sources::{environment, site_file};
use crate::config::SiteConfig;
use config::ConfigError;
use std::path::Path;

use super::policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from an optional site file plus the environment.
    /// Precedence: defaults (lowest) -> site file -> environment (highest).
    pub fn load(site_path: &Path) -> Result<SiteConfig, ConfigError> {
        let builder = policy::builder_with_defaults()?;
        let builder = site_file::add_to_builder(builder, site_path, false)?;
        let builder = environment::add_to_builder(builder)?;

        let config: SiteConfig = builder.build()?.try_deserialize()?;
        Self::with_verbatim_site(config, site_path)
    }

    /// Load config from a site file that must exist, with environment overlay.
    pub fn load_from_file(site_path: &Path) -> Result<SiteConfig, ConfigError> {
        let builder = policy::builder_with_defaults()?;
        let builder = site_file::add_to_builder(builder, site_path, true)?;
        let builder = environment::add_to_builder(builder)?;

        let config: SiteConfig = builder.build()?.try_deserialize()?;
        Self::with_verbatim_site(config, site_path)
    }

    /// Replace the case-folded `site` mapping with the one read straight from
    /// the file. Environment overrides apply to `source` and `logging` only.
    fn with_verbatim_site(
        mut config: SiteConfig,
        site_path: &Path,
    ) -> Result<SiteConfig, ConfigError> {
        config.site = site_file::read_site_section(site_path)?;
        Ok(config)
    }
}
