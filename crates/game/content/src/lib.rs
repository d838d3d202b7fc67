//! Data-driven ghost content and loaders.
//!
//! This crate ships the static data ghost generation reads and loaders for
//! its RON/TOML files:
//! - Generation tables: brands, spell pools, ugly thing templates (RON)
//! - Spell flag overrides on top of the built-in catalog (RON)
//! - Lore names and name syllables for demon lords (RON)
//! - Generation parameters (TOML)
//!
//! All loaders deserialize straight into ghost-core types with serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, GhostContent, LoadResult, LoreLoader, NameLoader, SpellLoader,
    TablesLoader,
};
