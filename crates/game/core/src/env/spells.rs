use std::collections::BTreeMap;

use bitflags::bitflags;

use crate::types::Spell;

bitflags! {
    /// Static properties of a spell that matter to ghost generation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellFlags: u8 {
        /// Monsters have an implementation of this spell.
        const MONSTER  = 1 << 0;
        /// Players can learn this spell.
        const PLAYER   = 1 << 1;
        /// Never carried over into a player's ghost.
        const NO_GHOST = 1 << 2;
    }
}

/// Oracle providing spell metadata.
pub trait SpellOracle {
    /// Flags for `spell`. Unknown spells have no flags.
    fn flags(&self, spell: Spell) -> SpellFlags;

    /// True when a monster can cast `spell`.
    fn is_valid_monster_spell(&self, spell: Spell) -> bool {
        !spell.is_none() && self.flags(spell).contains(SpellFlags::MONSTER)
    }

    /// True when a player ghost may keep `spell`.
    fn allowed_for_ghost(&self, spell: Spell) -> bool {
        self.is_valid_monster_spell(spell) && !self.flags(spell).contains(SpellFlags::NO_GHOST)
    }
}

/// Table-backed [`SpellOracle`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellCatalog {
    entries: BTreeMap<Spell, SpellFlags>,
}

impl SpellCatalog {
    pub fn new(entries: impl IntoIterator<Item = (Spell, SpellFlags)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The built-in catalog: every spell is monster-castable and learnable,
    /// except for a handful of player-only forms and ghost-unsuitable
    /// self-transformations.
    pub fn standard() -> Self {
        use strum::IntoEnumIterator;

        let both = SpellFlags::MONSTER | SpellFlags::PLAYER;
        Self::new(Spell::iter().filter(|spell| !spell.is_none()).map(|spell| {
            let flags = match spell {
                // Player forms that monsters cast under another name.
                Spell::ControlledBlink | Spell::DelayedFireball | Spell::DragonCall => {
                    SpellFlags::PLAYER
                }
                Spell::Apportation => SpellFlags::PLAYER,
                Spell::OzocubusArmour | Spell::StatueForm | Spell::Necromutation => {
                    SpellFlags::PLAYER | SpellFlags::NO_GHOST
                }
                // Monster-only.
                Spell::Hellfire
                | Spell::HellfireBurst
                | Spell::EnergyBolt
                | Spell::MetalSplinters
                | Spell::SummonEyeballs
                | Spell::SummonHydra
                | Spell::SummonGreaterDemon
                | Spell::Smiting
                | Spell::Blinkbolt
                | Spell::Petrify
                | Spell::SteamBall
                | Spell::Paralyse
                | Spell::Slow
                | Spell::Sleep
                | Spell::DrainMagic
                | Spell::Haste
                | Spell::Invisibility
                | Spell::TeleportOther
                | Spell::Confuse
                | Spell::SummonIceBeast
                | Spell::SummonVermin
                | Spell::SummonSwarm
                | Spell::SummonButterflies => SpellFlags::MONSTER,
                _ => both,
            };
            (spell, flags)
        }))
    }

    pub fn insert(&mut self, spell: Spell, flags: SpellFlags) {
        self.entries.insert(spell, flags);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SpellOracle for SpellCatalog {
    fn flags(&self, spell: Spell) -> SpellFlags {
        self.entries.get(&spell).copied().unwrap_or_default()
    }
}
