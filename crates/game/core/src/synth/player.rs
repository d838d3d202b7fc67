//! Ghost of a deceased (or departing) player character.

use strum::EnumCount;

use crate::config::GhostConfig;
use crate::env::{RandomSource, SpellOracle};
use crate::tables::GhostTables;
use crate::types::{
    Brand, GhostStatBlock, God, Job, MonsterKind, ResistanceProfile, Skill, Species, Spell,
    StaffKind, UndeadState,
};

use super::spells::player_spellbook;
use super::weapons::WeaponProfile;

/// Damage of an empty-handed or non-weapon attack before skills apply.
const BASE_DAMAGE: i32 = 4;

/// Fastest move-energy cost a player can reach.
const MIN_MOVE_ENERGY: i32 = 6;

/// Trained level of every skill, indexed in skill order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillLevels([i32; Skill::COUNT]);

impl SkillLevels {
    pub const fn new() -> Self {
        Self([0; Skill::COUNT])
    }

    pub fn from_levels(levels: impl IntoIterator<Item = (Skill, i32)>) -> Self {
        let mut skills = Self::new();
        for (skill, level) in levels {
            skills.set(skill, level);
        }
        skills
    }

    #[inline]
    pub const fn get(&self, skill: Skill) -> i32 {
        self.0[skill.as_index()]
    }

    pub fn set(&mut self, skill: Skill, level: i32) {
        self.0[skill.as_index()] = level;
    }

    /// Highest trained skill and its level. Ties go to the earlier skill.
    pub fn best(&self) -> (Skill, i32) {
        use strum::IntoEnumIterator;

        Skill::iter().fold((Skill::Fighting, self.get(Skill::Fighting)), |best, skill| {
            let level = self.get(skill);
            if level > best.1 { (skill, level) } else { best }
        })
    }
}

impl Default for SkillLevels {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutations that shape how a ghost moves and fights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationLevels {
    pub fast: i32,
    pub slow: i32,
    /// Innate (permanent) claws level; temporary claws are ignored.
    pub innate_claws: i32,
}

/// Magical staff in the player's hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaffProfile {
    pub kind: StaffKind,
    pub damage: i32,
}

/// Whatever occupies the weapon hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wielded {
    Weapon(WeaponProfile),
    Staff(StaffProfile),
    /// A wielded non-weapon item: no unarmed bonuses, no weapon damage.
    Other,
}

/// A memorised spell and its current failure rate in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnownSpell {
    pub spell: Spell,
    pub failure: i32,
}

impl KnownSpell {
    pub const fn new(spell: Spell, failure: i32) -> Self {
        Self { spell, failure }
    }
}

/// Everything ghost synthesis reads from the player character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    pub name: String,
    pub species: Species,
    pub job: Job,
    pub religion: God,
    pub experience_level: i32,
    pub undead: UndeadState,

    pub max_hp: i32,
    pub evasion: i32,
    pub armour_class: i32,
    pub strength: i32,
    pub see_invisible: bool,
    pub resists: ResistanceProfile,

    pub mutations: MutationLevels,
    pub running_boots: bool,
    pub ponderous_armour: bool,

    pub wielded: Option<Wielded>,
    pub skills: SkillLevels,
    pub spells: Vec<KnownSpell>,
}

impl PlayerSnapshot {
    /// Move-energy cost of the player's ghost. Lower is faster.
    pub fn ghost_move_energy(&self) -> i32 {
        let mut energy = GhostStatBlock::BASE_MOVE_ENERGY;

        let fast = self.mutations.fast;
        if fast > 0 {
            energy -= fast + 1;
        }
        let slow = self.mutations.slow;
        if slow > 0 {
            energy += slow + 2;
        }
        if self.running_boots {
            energy -= 1;
        }
        if self.ponderous_armour {
            energy += 1;
        }

        energy.max(MIN_MOVE_ENERGY)
    }

    /// Melee damage and brand of the player's ghost.
    pub fn ghost_melee(&self, tables: &GhostTables) -> (i32, Brand) {
        let skill = |skill| self.skills.get(skill);
        let weapon_damage = |base: i32, level: i32| base * (25 + level) / 25;

        let (mut damage, brand) = match self.wielded {
            Some(Wielded::Weapon(weapon)) => {
                let trained = if weapon.ranged {
                    skill(Skill::Fighting)
                } else {
                    skill(weapon.skill)
                };
                (weapon_damage(weapon.damage, trained), weapon.brand.for_ghost())
            }
            Some(Wielded::Staff(staff)) => (
                weapon_damage(staff.damage, skill(Skill::Staves)),
                tables.staff_brand(staff.kind).for_ghost(),
            ),
            Some(Wielded::Other) => (BASE_DAMAGE, Brand::Normal),
            None => {
                let mut damage = BASE_DAMAGE;
                if self.mutations.innate_claws > 0 {
                    damage += self.experience_level;
                }
                (damage + skill(Skill::UnarmedCombat), Brand::Normal)
            }
        };

        damage = damage * (30 + skill(Skill::Fighting)) / 30;
        damage += self.strength / 4;

        (damage.min(GhostConfig::MAX_GHOST_DAMAGE), brand)
    }
}

impl GhostStatBlock {
    /// Builds the ghost a player leaves behind.
    ///
    /// `actual` is false for illusory copies of the player, which never get a
    /// draconian breath weapon.
    pub fn player_ghost<R, O>(
        player: &PlayerSnapshot,
        actual: bool,
        tables: &GhostTables,
        spells: &O,
        rng: &mut R,
    ) -> Self
    where
        R: RandomSource,
        O: SpellOracle + ?Sized,
    {
        let (damage, brand) = player.ghost_melee(tables);
        let (best_skill, best_skill_level) = player.skills.best();

        let ghost = Self {
            kind: MonsterKind::PlayerGhost,
            name: player.name.clone(),
            species: player.species,
            job: player.job,
            religion: player.religion,
            best_skill,
            best_skill_level,
            xl: player.experience_level,
            max_hp: player.max_hp.min(GhostConfig::MAX_GHOST_HP),
            ev: player.evasion.min(GhostConfig::MAX_GHOST_EVASION),
            ac: player.armour_class,
            damage,
            speed: Self::BASE_SPEED,
            move_energy: player.ghost_move_energy(),
            see_invis: player.see_invisible,
            flies: true,
            brand,
            resists: player.resists.to_resists(),
            spells: player_spellbook(
                &player.spells,
                player.experience_level,
                player.species,
                actual,
                tables,
                spells,
                rng,
            ),
            ..Self::blank(MonsterKind::PlayerGhost)
        };

        tracing::debug!(
            name = %ghost.name,
            xl = ghost.xl,
            damage = ghost.damage,
            brand = %ghost.brand,
            spells = ghost.spells.len(),
            "synthesized player ghost"
        );
        ghost
    }
}
