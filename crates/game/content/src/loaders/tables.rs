//! Ghost generation tables loader.

use std::path::Path;

use ghost_core::GhostTables;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`GhostTables`] from RON files.
///
/// Loaded tables are validated before they are returned, so generators never
/// see an empty pool or a zero-weight table.
pub struct TablesLoader;

impl TablesLoader {
    /// Load and validate tables from a RON file.
    pub fn load(path: &Path) -> LoadResult<GhostTables> {
        let content = read_file(path)?;
        let tables = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::info!(
            path = %path.display(),
            conjurations = tables.demon_spells.conjurations.len(),
            colours = tables.ugly.colours.len(),
            "loaded ghost tables"
        );
        Ok(tables)
    }

    /// Parse and validate tables from RON text.
    pub fn parse(content: &str) -> LoadResult<GhostTables> {
        let tables: GhostTables = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables RON: {}", e))?;
        tables
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid ghost tables: {}", e))?;
        Ok(tables)
    }

    /// The tables shipped with the crate.
    pub fn embedded() -> LoadResult<GhostTables> {
        Self::parse(include_str!("../../data/tables.ron"))
    }
}
