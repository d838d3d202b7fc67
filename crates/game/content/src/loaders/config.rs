//! Ghost configuration loader.

use std::path::Path;

use ghost_core::GhostConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for ghost configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GhostConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GhostConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::info!(
            path = %path.display(),
            extra_ghost_depth = config.extra_ghost_depth,
            "loaded ghost config"
        );
        Ok(config)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GhostConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }

    /// The config shipped with the crate.
    pub fn embedded() -> LoadResult<GhostConfig> {
        Self::parse(include_str!("../../data/config.toml"))
    }
}
