//! Melee qualities carried by a stat-block: brand, attack verb and flavour.

/// Weapon brand.
///
/// The declaration order matters: every brand up to and including
/// [`Brand::Chaos`] can be carried by a ghost's melee attack, everything after
/// it is ranged-only or artefact-only. Holy wrath is inside that range but is
/// excluded separately.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Brand {
    #[default]
    Normal,
    Flaming,
    Freezing,
    HolyWrath,
    Electrocution,
    Venom,
    Protection,
    Draining,
    Speed,
    Vorpal,
    Vampirism,
    Pain,
    Antimagic,
    Distortion,
    Chaos,
    // ----- ranged / artefact only -----
    Flame,
    Frost,
    Penetration,
    Reaping,
    Acid,
}

impl Brand {
    /// Last brand a ghost may keep.
    pub const MAX_GHOST_BRAND: Brand = Brand::Chaos;

    /// True when a ghost's melee attack may carry this brand.
    pub fn is_ghost_safe(self) -> bool {
        self != Brand::HolyWrath && self <= Self::MAX_GHOST_BRAND
    }

    /// The brand a ghost actually keeps when copying this one.
    pub fn for_ghost(self) -> Brand {
        if self.is_ghost_safe() {
            self
        } else {
            Brand::Normal
        }
    }
}

/// Verb describing the melee attack. Only ugly things use anything but `Hit`.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackType {
    #[default]
    Hit,
    Bite,
    Sting,
    Engulf,
    Claw,
    Peck,
    Headbutt,
    Punch,
    Kick,
    TentacleSlap,
    TailSlap,
    Gore,
    TrunkSlap,
}

/// Elemental side effect of the melee attack.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackFlavour {
    #[default]
    Plain,
    Fire,
    StickyFlame,
    Acid,
    Poison,
    PoisonStrong,
    Elec,
    Cold,
}

impl AttackFlavour {
    /// Stronger form used by very ugly things. Flavours without a stronger
    /// form are returned unchanged.
    pub const fn upgraded(self) -> AttackFlavour {
        match self {
            Self::Fire => Self::StickyFlame,
            Self::Poison => Self::PoisonStrong,
            other => other,
        }
    }
}

/// Magical staff type. Staves are wielded like weapons but carry no brand of
/// their own; ghosts approximate one from the staff's element.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StaffKind {
    Wizardry,
    Power,
    Fire,
    Cold,
    Poison,
    Energy,
    Death,
    Conjuration,
    Air,
    Earth,
    Summoning,
}
