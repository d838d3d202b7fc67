//! Stat-block synthesis, one constructor per archetype.
//!
//! Every routine is a pure function of its inputs and the random stream it is
//! handed:
//!
//! - `GhostStatBlock::player_ghost`: copy of a deceased player character
//! - `GhostStatBlock::pandemonium_lord`: invented demon lord
//! - `GhostStatBlock::ugly_thing`, plus `mutate_ugly_thing` and
//!   `upgrade_ugly_thing` on an existing one
//! - `GhostStatBlock::dancing_weapon`, `GhostStatBlock::spectral_weapon`

mod pandemonium;
mod player;
mod spells;
mod ugly;
mod weapons;

pub use player::{KnownSpell, MutationLevels, PlayerSnapshot, SkillLevels, StaffProfile, Wielded};
pub use spells::{demon_spellbook, player_spellbook};
pub use weapons::WeaponProfile;
