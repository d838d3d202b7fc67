//! Lore and name-syllable loaders for demon lord naming.

use std::path::Path;

use ghost_core::{LoreIndex, SyllableNames};

use crate::loaders::{LoadResult, read_file};

/// Loader for the list of names that already carry lore.
pub struct LoreLoader;

impl LoreLoader {
    pub fn load(path: &Path) -> LoadResult<LoreIndex> {
        let content = read_file(path)?;
        let lore = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::info!(path = %path.display(), names = lore.len(), "loaded lore index");
        Ok(lore)
    }

    pub fn parse(content: &str) -> LoadResult<LoreIndex> {
        let names: Vec<String> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse lore RON: {}", e))?;
        Ok(LoreIndex::new(names))
    }

    pub fn embedded() -> LoadResult<LoreIndex> {
        Self::parse(include_str!("../../data/lore.ron"))
    }
}

/// Loader for [`SyllableNames`] tables.
pub struct NameLoader;

impl NameLoader {
    pub fn load(path: &Path) -> LoadResult<SyllableNames> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse syllable tables, rejecting ones that cannot produce a name.
    pub fn parse(content: &str) -> LoadResult<SyllableNames> {
        let names: SyllableNames = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse name syllables RON: {}", e))?;

        if names.vowels.iter().all(String::is_empty) {
            anyhow::bail!("Name syllables need at least one non-empty vowel");
        }
        if names.min_syllables < 1 || names.max_syllables < names.min_syllables {
            anyhow::bail!(
                "Invalid syllable range {}..={}",
                names.min_syllables,
                names.max_syllables
            );
        }
        Ok(names)
    }

    pub fn embedded() -> LoadResult<SyllableNames> {
        Self::parse(include_str!("../../data/names.ron"))
    }
}
