//! Spell catalog loader.

use std::path::Path;

use ghost_core::{Spell, SpellCatalog, SpellFlags};

use crate::loaders::{LoadResult, read_file};

/// Loader for spell flag overrides.
///
/// The file lists `(spell, flags)` pairs that replace the entries of
/// [`SpellCatalog::standard`]; spells not listed keep their built-in flags.
pub struct SpellLoader;

impl SpellLoader {
    pub fn load(path: &Path) -> LoadResult<SpellCatalog> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::info!(path = %path.display(), spells = catalog.len(), "loaded spell catalog");
        Ok(catalog)
    }

    pub fn parse(content: &str) -> LoadResult<SpellCatalog> {
        let overrides: Vec<(Spell, SpellFlags)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell overrides RON: {}", e))?;

        let mut catalog = SpellCatalog::standard();
        for (spell, flags) in overrides {
            if spell.is_none() {
                anyhow::bail!("Spell overrides may not mention {}", spell);
            }
            catalog.insert(spell, flags);
        }
        Ok(catalog)
    }

    pub fn embedded() -> LoadResult<SpellCatalog> {
        Self::parse(include_str!("../../data/spells.ron"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghost_core::SpellOracle;

    #[test]
    fn test_embedded_overrides_match_standard_catalog() {
        let catalog = SpellLoader::embedded().expect("embedded spells parse");
        assert_eq!(catalog, SpellCatalog::standard());
    }

    #[test]
    fn test_override_can_forbid_a_spell_for_ghosts() {
        let catalog =
            SpellLoader::parse(r#"[(Fireball, "MONSTER | PLAYER | NO_GHOST")]"#).expect("valid ron");
        assert!(catalog.is_valid_monster_spell(Spell::Fireball));
        assert!(!catalog.allowed_for_ghost(Spell::Fireball));
        assert!(catalog.allowed_for_ghost(Spell::BoltOfFire));
    }

    #[test]
    fn test_no_spell_override_is_rejected() {
        assert!(SpellLoader::parse(r#"[(NoSpell, "MONSTER")]"#).is_err());
    }
}
