//! Immutable lookup tables consumed by the synthesis routines.
//!
//! [`GhostTables::default`] is the canonical data set. Content packs may load
//! a replacement (see `ghost-content`), which should be checked once with
//! [`GhostTables::validate`] before it is shared with generators.

use crate::env::RandomSource;
use crate::error::TableError;
use crate::types::{
    AttackFlavour, AttackType, Brand, Colour, Element, MonsterKind, Resists, Spell, StaffKind,
};

/// Largest total weight a [`WeightedTable`] can be drawn from.
const MAX_TOTAL_WEIGHT: u64 = i32::MAX as u64;

// ============================================================================
// Building blocks
// ============================================================================

/// Hit dice of a monster template. Each die yields `min_per_die` plus
/// `0..=rand_per_die` hit points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitDice {
    pub dice: i32,
    pub min_per_die: i32,
    pub rand_per_die: i32,
}

impl HitDice {
    pub const fn new(dice: i32, min_per_die: i32, rand_per_die: i32) -> Self {
        Self {
            dice,
            min_per_die,
            rand_per_die,
        }
    }

    pub fn roll<R: RandomSource>(&self, rng: &mut R) -> i32 {
        (0..self.dice)
            .map(|_| self.min_per_die + rng.random2(self.rand_per_die + 1))
            .sum()
    }

    pub const fn min_hp(&self) -> i32 {
        self.dice * self.min_per_die
    }

    pub const fn max_hp(&self) -> i32 {
        self.dice * (self.min_per_die + self.rand_per_die)
    }
}

/// Base stats of a fixed monster type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub speed: i32,
    pub ev: i32,
    pub ac: i32,
    /// Damage of the first melee attack.
    pub damage: i32,
    pub move_energy: i32,
    pub hit_dice: HitDice,
}

/// Non-empty list of `(weight, value)` pairs with a positive total weight of
/// at most `i32::MAX`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<(u32, T)>",
        into = "Vec<(u32, T)>",
        bound(
            serialize = "T: Clone + serde::Serialize",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct WeightedTable<T> {
    entries: Vec<(u32, T)>,
}

impl<T> WeightedTable<T> {
    /// Builds a table, rejecting empty lists and zero or oversized total weight.
    pub fn new(name: &'static str, entries: Vec<(u32, T)>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::EmptyPool(name));
        }
        let table = Self { entries };
        table.check_total(name)?;
        Ok(table)
    }

    fn check_total(&self, name: &'static str) -> Result<(), TableError> {
        match self.total_weight() {
            0 => Err(TableError::ZeroWeight(name)),
            total if total > MAX_TOTAL_WEIGHT => Err(TableError::WeightOverflow(name)),
            _ => Ok(()),
        }
    }

    pub fn entries(&self) -> &[(u32, T)] {
        &self.entries
    }

    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|(weight, _)| u64::from(*weight)).sum()
    }
}

impl<T: Copy> WeightedTable<T> {
    /// Draws one value, proportionally to its weight.
    pub fn pick<R: RandomSource>(&self, rng: &mut R) -> T {
        match rng.choose_weighted(&self.entries) {
            Some(value) => *value,
            // Unreachable for a table built through `new`.
            None => self.entries[self.entries.len() - 1].1,
        }
    }
}

impl<T> TryFrom<Vec<(u32, T)>> for WeightedTable<T> {
    type Error = TableError;

    fn try_from(entries: Vec<(u32, T)>) -> Result<Self, Self::Error> {
        Self::new("weighted table", entries)
    }
}

impl<T> From<WeightedTable<T>> for Vec<(u32, T)> {
    fn from(table: WeightedTable<T>) -> Self {
        table.entries
    }
}

/// A spell granted with probability `1 / chance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RareSpell {
    pub chance: i32,
    pub spell: Spell,
}

impl RareSpell {
    pub const fn new(chance: i32, spell: Spell) -> Self {
        Self { chance, spell }
    }
}

/// Resistance granted alongside an attack flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlavourResist {
    pub flavour: AttackFlavour,
    pub element: Element,
    /// Level doubles for the very tier.
    pub scales_with_tier: bool,
}

impl FlavourResist {
    pub const fn new(flavour: AttackFlavour, element: Element, scales_with_tier: bool) -> Self {
        Self {
            flavour,
            element,
            scales_with_tier,
        }
    }
}

// ============================================================================
// Table groups
// ============================================================================

/// Candidate pools for a spellcasting demon lord.
///
/// A `NoSpell` entry in a pool is a chance of drawing nothing from it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemonSpellTables {
    /// Bolts and conjurations.
    pub conjurations: Vec<Spell>,
    /// Self-enchantments and summonings.
    pub self_enchantments: Vec<Spell>,
    /// Battlefield effects and hexes.
    pub misc: Vec<Spell>,
    /// Replaces the self-enchantment pick with probability `1 / chance`.
    pub summon_override: RareSpell,
    /// One of `signature_pool` is added with probability `1 / signature_chance`.
    pub signature_chance: i32,
    pub signature_pool: Vec<Spell>,
    /// Independent low-probability extras, checked in order.
    pub rare: Vec<RareSpell>,
}

/// Colour palette and element tables for the ugly-thing family.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UglyThingTables {
    pub ugly_thing: MonsterTemplate,
    pub very_ugly_thing: MonsterTemplate,
    pub attack_types: Vec<AttackType>,
    /// Low-intensity colours an ugly thing may be born with.
    pub colours: Vec<Colour>,
    /// Flavour per low-intensity hue. Hues not listed attack plainly.
    pub colour_flavours: Vec<(Colour, AttackFlavour)>,
    pub flavour_resists: Vec<FlavourResist>,
    /// Hue whose damage is multiplied by 4/3.
    pub bonus_damage_colour: Colour,
}

impl UglyThingTables {
    pub fn template(&self, very_ugly: bool) -> &MonsterTemplate {
        if very_ugly {
            &self.very_ugly_thing
        } else {
            &self.ugly_thing
        }
    }

    /// Attack flavour for `colour`, upgraded if the colour is high intensity.
    pub fn flavour_for(&self, colour: Colour) -> AttackFlavour {
        let low = colour.to_low();
        let flavour = self
            .colour_flavours
            .iter()
            .find(|(hue, _)| *hue == low)
            .map(|(_, flavour)| *flavour)
            .unwrap_or_default();
        if colour.is_high() {
            flavour.upgraded()
        } else {
            flavour
        }
    }

    /// Resistances implied by `flavour`, derived from scratch.
    pub fn resists_for(&self, very_ugly: bool, flavour: AttackFlavour) -> Resists {
        self.flavour_resists
            .iter()
            .filter(|entry| entry.flavour == flavour)
            .fold(Resists::NONE, |acc, entry| {
                let level = if very_ugly && entry.scales_with_tier { 2 } else { 1 };
                acc.with(entry.element, level)
            })
    }
}

/// Every table the synthesis routines read.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GhostTables {
    // ----- player ghosts -----
    /// Player spell → closest monster spell. Unlisted spells map to themselves.
    pub spell_substitutions: Vec<(Spell, Spell)>,
    /// Approximate brand for a wielded staff. Unlisted staves stay unbranded.
    pub staff_brands: Vec<(StaffKind, Brand)>,
    /// Breath granted to ghosts of coloured draconians.
    pub breath: (Spell, u8),

    // ----- demon lords -----
    pub demon_brands: WeightedTable<Brand>,
    /// Fire/cold resistance tiers.
    pub demon_resist_levels: WeightedTable<i8>,
    pub demon_spells: DemonSpellTables,

    // ----- ugly things -----
    pub ugly: UglyThingTables,
}

impl GhostTables {
    /// Closest monster equivalent of a player spell.
    pub fn translate_spell(&self, spell: Spell) -> Spell {
        self.spell_substitutions
            .iter()
            .find(|(from, _)| *from == spell)
            .map(|(_, to)| *to)
            .unwrap_or(spell)
    }

    pub fn staff_brand(&self, staff: StaffKind) -> Brand {
        self.staff_brands
            .iter()
            .find(|(kind, _)| *kind == staff)
            .map(|(_, brand)| *brand)
            .unwrap_or_default()
    }

    /// Checks the structural requirements generation relies on.
    ///
    /// # Errors
    ///
    /// Returns the first [`TableError`] found.
    pub fn validate(&self) -> Result<(), TableError> {
        // Weighted tables guard themselves, but may have been built by hand.
        self.demon_brands.check_total("demon_brands")?;
        self.demon_resist_levels.check_total("demon_resist_levels")?;

        let spells = &self.demon_spells;
        for (name, pool) in [
            ("demon_spells.conjurations", &spells.conjurations),
            ("demon_spells.self_enchantments", &spells.self_enchantments),
            ("demon_spells.misc", &spells.misc),
            ("demon_spells.signature_pool", &spells.signature_pool),
        ] {
            if pool.iter().all(|spell| spell.is_none()) {
                return Err(TableError::EmptyPool(name));
            }
        }
        if self.ugly.colours.is_empty() {
            return Err(TableError::EmptyPool("ugly.colours"));
        }
        if self.ugly.attack_types.is_empty() {
            return Err(TableError::EmptyPool("ugly.attack_types"));
        }
        if spells.signature_chance <= 0
            || spells.summon_override.chance <= 0
            || spells.rare.iter().any(|rare| rare.chance <= 0)
        {
            return Err(TableError::ZeroChance("demon_spells"));
        }

        for (kind, template) in [
            (MonsterKind::UglyThing, &self.ugly.ugly_thing),
            (MonsterKind::VeryUglyThing, &self.ugly.very_ugly_thing),
        ] {
            let dice = template.hit_dice;
            if dice.dice <= 0 || dice.max_hp() <= 0 {
                return Err(TableError::NoHitDice(kind));
            }
            if template.damage < 0 || template.ev < 0 || template.ac < 0 || dice.min_per_die < 0 {
                return Err(TableError::NegativeStats(kind));
            }
        }
        Ok(())
    }
}

impl Default for GhostTables {
    fn default() -> Self {
        use AttackFlavour as F;
        use Spell::*;

        fn weighted<T>(name: &'static str, entries: Vec<(u32, T)>) -> WeightedTable<T> {
            match WeightedTable::new(name, entries) {
                Ok(table) => table,
                Err(err) => unreachable!("built-in table is well-formed: {err}"),
            }
        }

        Self {
            spell_substitutions: vec![
                (ControlledBlink, Blink),
                (DelayedFireball, Fireball),
                (DragonCall, SummonDragon),
            ],
            staff_brands: vec![
                (StaffKind::Fire, Brand::Flaming),
                (StaffKind::Cold, Brand::Freezing),
                (StaffKind::Poison, Brand::Venom),
                (StaffKind::Death, Brand::Pain),
                (StaffKind::Air, Brand::Electrocution),
                (StaffKind::Earth, Brand::Vorpal),
            ],
            breath: (BoltOfDraining, 33),

            demon_brands: weighted(
                "demon_brands",
                vec![
                    (10, Brand::Flaming),
                    (10, Brand::Freezing),
                    (10, Brand::Electrocution),
                    (10, Brand::Venom),
                    (5, Brand::Draining),
                    (20, Brand::Vampirism),
                    (20, Brand::Pain),
                    (20, Brand::Antimagic),
                    (20, Brand::Distortion),
                    (20, Brand::Chaos),
                ],
            ),
            demon_resist_levels: weighted(
                "demon_resist_levels",
                vec![(1, -1), (3, 0), (3, 1), (3, 2)],
            ),
            demon_spells: DemonSpellTables {
                conjurations: vec![
                    FireStorm,
                    Glaciate,
                    LehudibsCrystalSpear,
                    ChainLightning,
                    Iood,
                    CorrosiveBolt,
                    Disintegrate,
                    BoltOfFire,
                    BoltOfCold,
                    IronShot,
                    PoisonArrow,
                    BoltOfDraining,
                    QuicksilverBolt,
                    ForceLance,
                    Fireball,
                    BoltOfMagma,
                    Lrd,
                    LightningBolt,
                    Blinkbolt,
                    VenomBolt,
                    Agony,
                    DrainMagic,
                    Sleep,
                    IskenderunsMysticBlast,
                    StickyFlameRange,
                    SteamBall,
                    ThrowIcicle,
                    Airstrike,
                    Smiting,
                    DazzlingSpray,
                    StoneArrow,
                    Discharge,
                    VampiricDraining,
                    ThrowFlame,
                    ThrowFrost,
                    NoSpell,
                ],
                self_enchantments: vec![
                    SummonDragon,
                    SummonHorribleThings,
                    SummonGreaterDemon,
                    Haunt,
                    SummonHydra,
                    MalignGateway,
                    Haste,
                    Invisibility,
                    SymbolOfTorment,
                    MonstrousMenagerie,
                    Silence,
                    ShadowCreatures,
                    SummonDemon,
                    SummonVermin,
                    SummonSwarm,
                    Battlesphere,
                    FulminantPrism,
                    SummonIceBeast,
                    Swiftness,
                    Blink,
                    SummonButterflies,
                    NoSpell,
                ],
                misc: vec![
                    Shatter,
                    SymbolOfTorment,
                    Banishment,
                    FreezingCloud,
                    PoisonousCloud,
                    MassConfusion,
                    Englaciation,
                    DispelUndead,
                    Dig,
                    Petrify,
                    OlgrebsToxicRadiance,
                    Paralyse,
                    Polymorph,
                    MephiticCloud,
                    Confuse,
                    TeleportOther,
                    Slow,
                    NoSpell,
                ],
                summon_override: RareSpell::new(4, SummonDemon),
                signature_chance: 4,
                signature_pool: vec![
                    HellfireBurst,
                    FireStorm,
                    Glaciate,
                    MetalSplinters,
                    EnergyBolt,
                    OrbOfElectricity,
                ],
                rare: vec![
                    RareSpell::new(25, Hellfire),
                    RareSpell::new(25, HellfireBurst),
                    RareSpell::new(25, Iood),
                    RareSpell::new(22, SummonHydra),
                    RareSpell::new(20, SummonDragon),
                    RareSpell::new(12, SummonGreaterDemon),
                    RareSpell::new(12, SummonDemon),
                    RareSpell::new(10, SummonEyeballs),
                    RareSpell::new(20, SummonGreaterDemon),
                    RareSpell::new(20, SummonDemon),
                    RareSpell::new(20, MalignGateway),
                    RareSpell::new(15, Dig),
                ],
            },

            ugly: UglyThingTables {
                ugly_thing: MonsterTemplate {
                    speed: 10,
                    ev: 10,
                    ac: 3,
                    damage: 15,
                    move_energy: 10,
                    hit_dice: HitDice::new(8, 3, 5),
                },
                very_ugly_thing: MonsterTemplate {
                    speed: 10,
                    ev: 8,
                    ac: 4,
                    damage: 27,
                    move_energy: 10,
                    hit_dice: HitDice::new(12, 3, 5),
                },
                attack_types: vec![
                    AttackType::Bite,
                    AttackType::Sting,
                    AttackType::Engulf,
                    AttackType::Claw,
                    AttackType::Peck,
                    AttackType::Headbutt,
                    AttackType::Punch,
                    AttackType::Kick,
                    AttackType::TentacleSlap,
                    AttackType::TailSlap,
                    AttackType::Gore,
                    AttackType::TrunkSlap,
                ],
                colours: vec![
                    Colour::Red,
                    Colour::Brown,
                    Colour::Green,
                    Colour::Cyan,
                    Colour::Magenta,
                    Colour::LightGrey,
                ],
                colour_flavours: vec![
                    (Colour::Red, F::Fire),
                    (Colour::Brown, F::Acid),
                    (Colour::Green, F::Poison),
                    (Colour::Cyan, F::Elec),
                    (Colour::LightGrey, F::Cold),
                ],
                flavour_resists: vec![
                    FlavourResist::new(F::Fire, Element::Fire, true),
                    FlavourResist::new(F::StickyFlame, Element::Fire, true),
                    FlavourResist::new(F::StickyFlame, Element::StickyFlame, false),
                    FlavourResist::new(F::Acid, Element::Acid, false),
                    FlavourResist::new(F::Poison, Element::Poison, true),
                    FlavourResist::new(F::PoisonStrong, Element::Poison, true),
                    FlavourResist::new(F::Elec, Element::Elec, true),
                    FlavourResist::new(F::Cold, Element::Cold, true),
                ],
                bonus_damage_colour: Colour::Magenta,
            },
        }
    }
}
