//! Traits describing the collaborators ghost generation consumes.
//!
//! Randomness, spell metadata, naming/lore and the surrounding level are all
//! injected. Each trait ships with a simple concrete implementation so the
//! generators can be driven without a full game around them.
mod names;
mod rng;
mod spells;
mod world;

pub use names::{LoreIndex, LoreOracle, NameGenerator, SyllableNames};
pub use rng::{PcgRng, RandomSource, ScriptedRng};
pub use spells::{SpellCatalog, SpellFlags, SpellOracle};
pub use world::{GhostWorld, LevelGhosts};
