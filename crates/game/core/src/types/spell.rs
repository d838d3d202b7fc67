//! Spells and the frequency-weighted spellbook attached to a stat-block.

use bitflags::bitflags;

/// Spell identifiers known to ghost generation.
///
/// `NoSpell` is the "nothing here" marker. It never appears in a
/// well-formed spellbook.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Spell {
    #[default]
    NoSpell,
    // ========================================================================
    // Conjurations and bolts
    // ========================================================================
    MagicDart,
    Freeze,
    ThrowFlame,
    ThrowFrost,
    ThrowIcicle,
    StoneArrow,
    ForceLance,
    DazzlingSpray,
    StickyFlameRange,
    SteamBall,
    VenomBolt,
    PoisonArrow,
    BoltOfFire,
    BoltOfCold,
    BoltOfMagma,
    BoltOfDraining,
    LightningBolt,
    ChainLightning,
    Discharge,
    Airstrike,
    IronShot,
    Lrd,
    QuicksilverBolt,
    CorrosiveBolt,
    Disintegrate,
    Fireball,
    DelayedFireball,
    FireStorm,
    Glaciate,
    LehudibsCrystalSpear,
    Iood,
    IskenderunsMysticBlast,
    Blinkbolt,
    VampiricDraining,
    Agony,
    Smiting,
    EnergyBolt,
    MetalSplinters,
    OrbOfElectricity,
    Hellfire,
    HellfireBurst,
    // ========================================================================
    // Summonings
    // ========================================================================
    SummonButterflies,
    SummonVermin,
    SummonSwarm,
    SummonIceBeast,
    SummonDemon,
    SummonGreaterDemon,
    SummonHorribleThings,
    SummonHydra,
    SummonDragon,
    DragonCall,
    SummonEyeballs,
    ShadowCreatures,
    MonstrousMenagerie,
    MalignGateway,
    Haunt,
    Battlesphere,
    FulminantPrism,
    // ========================================================================
    // Self enchantments and translocations
    // ========================================================================
    Blink,
    ControlledBlink,
    Haste,
    Swiftness,
    Invisibility,
    Silence,
    OzocubusArmour,
    StatueForm,
    Necromutation,
    Apportation,
    // ========================================================================
    // Battlefield effects and hexes
    // ========================================================================
    Shatter,
    SymbolOfTorment,
    Banishment,
    FreezingCloud,
    PoisonousCloud,
    MephiticCloud,
    MassConfusion,
    Englaciation,
    DispelUndead,
    Dig,
    Petrify,
    OlgrebsToxicRadiance,
    Paralyse,
    Polymorph,
    Confuse,
    TeleportOther,
    Slow,
    Sleep,
    DrainMagic,
}

impl Spell {
    pub const fn is_none(self) -> bool {
        matches!(self, Self::NoSpell)
    }
}

bitflags! {
    /// How a monster casts a spellbook entry.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SlotFlags: u8 {
        /// Learned magic; blocked by silence.
        const WIZARD  = 1 << 0;
        /// Divine invocation.
        const PRIEST  = 1 << 1;
        /// Innate demonic ability.
        const DEMONIC = 1 << 2;
        /// Innate natural ability.
        const NATURAL = 1 << 3;
        /// Breath weapon.
        const BREATH  = 1 << 4;
    }
}

/// One spellbook entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellSlot {
    pub spell: Spell,
    /// Relative casting frequency.
    pub freq: u8,
    pub flags: SlotFlags,
}

impl SpellSlot {
    pub const fn new(spell: Spell, freq: u8, flags: SlotFlags) -> Self {
        Self { spell, freq, flags }
    }
}

/// Ordered, duplicate-tolerant list of spell slots.
///
/// Duplicates are meaningful: two slots of the same spell cast it twice as
/// often after [`Spellbook::normalize`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Spellbook {
    slots: Vec<SpellSlot>,
}

impl Spellbook {
    /// Casting budget added on top of the caster's power level.
    pub const BASE_BUDGET: u32 = 50;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, slot: SpellSlot) {
        self.slots.push(slot);
    }

    /// Appends `spell` with zero frequency, ignoring the `NoSpell` marker.
    pub fn add(&mut self, spell: Spell, flags: SlotFlags) {
        if !spell.is_none() {
            self.slots.push(SpellSlot::new(spell, 0, flags));
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpellSlot> {
        self.slots.iter()
    }

    pub fn slots(&self) -> &[SpellSlot] {
        &self.slots
    }

    /// Number of slots holding `spell`.
    pub fn count(&self, spell: Spell) -> usize {
        self.slots.iter().filter(|slot| slot.spell == spell).count()
    }

    /// Rescales frequencies so that they share a budget of `xl + 50`.
    ///
    /// Slots that already carry frequencies keep their proportions; if none
    /// do, the budget is split evenly. Every slot ends with frequency >= 1.
    pub fn normalize(&mut self, xl: i32) {
        if self.slots.is_empty() {
            return;
        }
        let budget = (Self::BASE_BUDGET as i64 + i64::from(xl.max(0))) as u64;
        let given: u64 = self.slots.iter().map(|slot| u64::from(slot.freq)).sum();
        let count = self.slots.len() as u64;
        for slot in &mut self.slots {
            let share = if given > 0 {
                budget * u64::from(slot.freq) / given
            } else {
                budget / count
            };
            slot.freq = share.clamp(1, u64::from(u8::MAX)) as u8;
        }
    }
}

impl<'a> IntoIterator for &'a Spellbook {
    type Item = &'a SpellSlot;
    type IntoIter = core::slice::Iter<'a, SpellSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl FromIterator<SpellSlot> for Spellbook {
    fn from_iter<I: IntoIterator<Item = SpellSlot>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}
