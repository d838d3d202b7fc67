//! Identity enumerations copied from the player into a ghost.
//!
//! Only player ghosts carry meaningful identity. Every other archetype keeps
//! the defaults (`Unknown` species and job, `NoGod`, `Fighting` at level 0).

/// Playable species, plus the `Unknown` marker used by non-player ghosts.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Species {
    Human,
    HighElf,
    DeepElf,
    Halfling,
    HillOrc,
    Kobold,
    Mummy,
    Naga,
    Ogre,
    Troll,
    BaseDraconian,
    RedDraconian,
    WhiteDraconian,
    GreenDraconian,
    YellowDraconian,
    GreyDraconian,
    BlackDraconian,
    PurpleDraconian,
    MottledDraconian,
    PaleDraconian,
    Centaur,
    Demigod,
    Spriggan,
    Minotaur,
    Demonspawn,
    Ghoul,
    Tengu,
    Merfolk,
    Vampire,
    DeepDwarf,
    Felid,
    Octopode,
    Gargoyle,
    Formicid,
    VineStalker,
    /// Not a playable species; the value carried by non-player ghosts.
    #[default]
    Unknown,
}

impl Species {
    /// True for every draconian, including the uncoloured hatchling form.
    pub const fn is_draconian(self) -> bool {
        matches!(
            self,
            Self::BaseDraconian
                | Self::RedDraconian
                | Self::WhiteDraconian
                | Self::GreenDraconian
                | Self::YellowDraconian
                | Self::GreyDraconian
                | Self::BlackDraconian
                | Self::PurpleDraconian
                | Self::MottledDraconian
                | Self::PaleDraconian
        )
    }

    /// Draconians whose ghosts keep a breath weapon. Grey draconians have no
    /// breath, and base draconians have not matured into a colour yet.
    pub const fn has_breath(self) -> bool {
        self.is_draconian() && !matches!(self, Self::BaseDraconian | Self::GreyDraconian)
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Starting background ("class").
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Job {
    Fighter,
    Wizard,
    Gladiator,
    Necromancer,
    Assassin,
    Berserker,
    Hunter,
    Conjurer,
    Enchanter,
    FireElementalist,
    IceElementalist,
    Summoner,
    AirElementalist,
    EarthElementalist,
    Skald,
    VenomMage,
    ChaosKnight,
    Transmuter,
    Monk,
    Warper,
    Wanderer,
    ArcaneMarksman,
    AbyssalKnight,
    Artificer,
    #[default]
    Unknown,
}

impl Job {
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Worshipped deity. `NoGod` is a valid choice for a player.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum God {
    #[default]
    NoGod,
    Zin,
    ShiningOne,
    Kikubaaqudgha,
    Yredelemnul,
    Xom,
    Vehumet,
    Okawaru,
    Makhleb,
    SifMuna,
    Trog,
    Nemelex,
    Elyvilon,
    Lugonu,
    Beogh,
    Jiyva,
    Fedhas,
    Cheibriados,
    Ashenzari,
    Dithmenos,
    Gozag,
    Qazlal,
    Ru,
}

/// Trainable skills, in the order used to break ties for "best skill".
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Skill {
    #[default]
    Fighting,
    ShortBlades,
    LongBlades,
    Axes,
    MacesFlails,
    Polearms,
    Staves,
    Slings,
    Bows,
    Crossbows,
    Throwing,
    Armour,
    Dodging,
    Stealth,
    Shields,
    UnarmedCombat,
    Spellcasting,
    Conjurations,
    Hexes,
    Charms,
    Summonings,
    Necromancy,
    Translocations,
    Transmutations,
    FireMagic,
    IceMagic,
    AirMagic,
    EarthMagic,
    PoisonMagic,
    Invocations,
    Evocations,
}

impl Skill {
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Whether a character is alive or already some flavour of undead.
///
/// Only living characters leave a ghost of themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UndeadState {
    #[default]
    Alive,
    SemiUndead,
    FullyUndead,
}

/// Identifier of a creature in the surrounding world.
///
/// Ghost bookkeeping refers to creatures by id and never owns them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
