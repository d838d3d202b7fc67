//! Ghost stat-block synthesis and validation.
//!
//! `ghost-core` builds the compact stat-blocks shared by player ghosts,
//! Pandemonium lords, ugly things and animated weapons, and checks blocks read
//! back from bones files before they are trusted. Randomness, spell metadata,
//! naming and the surrounding level are injected through the traits in
//! [`env`]; static data lives in [`tables::GhostTables`].
pub mod collector;
pub mod config;
pub mod env;
pub mod error;
pub mod rank;
pub mod synth;
pub mod tables;
pub mod types;
pub mod validate;

pub use collector::{GhostList, GhostRegistry, collect_ghosts};
pub use config::GhostConfig;
pub use env::{
    GhostWorld, LevelGhosts, LoreIndex, LoreOracle, NameGenerator, PcgRng, RandomSource,
    ScriptedRng, SpellCatalog, SpellFlags, SpellOracle, SyllableNames,
};
pub use error::{ErrorSeverity, GhostError, TableError};
pub use rank::{MAX_RANK, level_to_rank, rank_to_level};
pub use synth::{
    KnownSpell, MutationLevels, PlayerSnapshot, SkillLevels, StaffProfile, WeaponProfile, Wielded,
};
pub use tables::{
    DemonSpellTables, FlavourResist, GhostTables, HitDice, MonsterTemplate, RareSpell,
    UglyThingTables, WeightedTable,
};
pub use types::{
    AttackFlavour, AttackType, Brand, Colour, Element, EntityId, GhostStatBlock, God, Job,
    MonsterKind, ResistanceProfile, Resists, Skill, SlotFlags, Species, Spell, SpellSlot,
    Spellbook, StaffKind, UndeadState,
};
pub use validate::{GhostViolation, check_ghost, is_valid_ghost, validate_name};
