//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::SiteConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration; a missing site file falls back to defaults.
    pub fn load(site_path: &Path) -> Result<SiteConfig, ConfigError> {
        MergeService::load(site_path)
    }

    /// Load configuration from a site file that must exist.
    pub fn load_from_file(path: &Path) -> Result<SiteConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> SiteConfig {
        SiteConfig::default()
    }
}
