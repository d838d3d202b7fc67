//! Value types shared by every synthesis routine.
mod colour;
mod combat;
mod ghost;
mod ids;
mod resists;
mod spell;

pub use colour::Colour;
pub use combat::{AttackFlavour, AttackType, Brand, StaffKind};
pub use ghost::{GhostStatBlock, MonsterKind};
pub use ids::{EntityId, God, Job, Skill, Species, UndeadState};
pub use resists::{Element, ResistanceProfile, Resists};
pub use spell::{SlotFlags, Spell, SpellSlot, Spellbook};
