//! Content factory for building ghost generation inputs from data files.

use std::path::{Path, PathBuf};

use ghost_core::{GhostConfig, GhostTables, LoreIndex, SpellCatalog, SyllableNames};

use crate::loaders::{
    ConfigLoader, LoadResult, LoreLoader, NameLoader, SpellLoader, TablesLoader,
};

/// Everything ghost generation reads besides randomness and the level.
#[derive(Clone, Debug, PartialEq)]
pub struct GhostContent {
    pub config: GhostConfig,
    pub tables: GhostTables,
    pub spells: SpellCatalog,
    pub lore: LoreIndex,
    pub names: SyllableNames,
}

impl GhostContent {
    /// Content compiled into the crate.
    pub fn embedded() -> LoadResult<Self> {
        Ok(Self {
            config: ConfigLoader::embedded()?,
            tables: TablesLoader::embedded()?,
            spells: SpellLoader::embedded()?,
            lore: LoreLoader::embedded()?,
            names: NameLoader::embedded()?,
        })
    }
}

/// Content factory that loads ghost content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── tables.ron
/// ├── spells.ron
/// ├── lore.ron
/// └── names.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load generation parameters from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GhostConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load and validate generation tables from `tables.ron`.
    pub fn load_tables(&self) -> LoadResult<GhostTables> {
        TablesLoader::load(&self.data_dir.join("tables.ron"))
    }

    /// Load spell flag overrides from `spells.ron`.
    pub fn load_spells(&self) -> LoadResult<SpellCatalog> {
        SpellLoader::load(&self.data_dir.join("spells.ron"))
    }

    /// Load lore names from `lore.ron`.
    pub fn load_lore(&self) -> LoadResult<LoreIndex> {
        LoreLoader::load(&self.data_dir.join("lore.ron"))
    }

    /// Load name syllables from `names.ron`.
    pub fn load_names(&self) -> LoadResult<SyllableNames> {
        NameLoader::load(&self.data_dir.join("names.ron"))
    }

    /// Load every content file, failing on the first broken one.
    pub fn load_all(&self) -> LoadResult<GhostContent> {
        Ok(GhostContent {
            config: self.load_config()?,
            tables: self.load_tables()?,
            spells: self.load_spells()?,
            lore: self.load_lore()?,
            names: self.load_names()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DATA_FILES: [(&str, &str); 5] = [
        ("config.toml", include_str!("../../data/config.toml")),
        ("tables.ron", include_str!("../../data/tables.ron")),
        ("spells.ron", include_str!("../../data/spells.ron")),
        ("lore.ron", include_str!("../../data/lore.ron")),
        ("names.ron", include_str!("../../data/names.ron")),
    ];

    fn populated_dir() -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        for (name, content) in DATA_FILES {
            std::fs::write(dir.path().join(name), content).expect("write data file");
        }
        dir
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn test_load_all_matches_embedded() {
        let dir = populated_dir();
        let content = ContentFactory::new(dir.path()).load_all().expect("load content");
        assert_eq!(content, GhostContent::embedded().expect("embedded content"));
        assert_eq!(content.tables, GhostTables::default());
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let dir = populated_dir();
        std::fs::remove_file(dir.path().join("lore.ron")).expect("remove lore");

        let err = ContentFactory::new(dir.path())
            .load_all()
            .expect_err("lore is missing");
        assert!(err.to_string().contains("lore.ron"), "{err}");
    }

    #[test]
    fn test_broken_tables_fail_to_load() {
        let dir = populated_dir();
        std::fs::write(dir.path().join("tables.ron"), "(spell_substitutions: [])")
            .expect("overwrite tables");

        let err = ContentFactory::new(dir.path())
            .load_tables()
            .expect_err("incomplete tables");
        assert!(err.to_string().contains("tables.ron"), "{err}");
    }
}
