use super::{
    AttackFlavour, AttackType, Brand, Colour, God, Job, Resists, Skill, Species, Spellbook,
};

/// Creature archetype a stat-block was synthesized for.
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
pub enum MonsterKind {
    #[default]
    PlayerGhost,
    PandemoniumLord,
    UglyThing,
    VeryUglyThing,
    DancingWeapon,
    SpectralWeapon,
}

impl MonsterKind {
    /// The only archetypes allowed non-default attack verbs and flavours.
    pub const fn is_ugly_thing(self) -> bool {
        matches!(self, Self::UglyThing | Self::VeryUglyThing)
    }
}

/// Compact stat-block shared by every ghost-like archetype.
///
/// Which fields are meaningful depends on [`GhostStatBlock::kind`]: identity
/// is only filled for player ghosts and demon lords, attack verb and flavour
/// only for ugly things. A default value is the "reset" state every
/// constructor starts from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GhostStatBlock {
    pub kind: MonsterKind,

    // identity
    pub name: String,
    pub species: Species,
    pub job: Job,
    pub religion: God,
    pub best_skill: Skill,
    pub best_skill_level: i32,

    // combat
    /// Experience level for player ghosts, hit dice for everything else.
    pub xl: i32,
    pub max_hp: i32,
    pub ev: i32,
    pub ac: i32,
    pub damage: i32,
    pub speed: i32,
    /// Energy spent per move; lower is faster.
    pub move_energy: i32,

    pub see_invis: bool,
    pub flies: bool,

    // melee
    pub brand: Brand,
    pub att_type: AttackType,
    pub att_flav: AttackFlavour,
    pub colour: Colour,

    pub resists: Resists,
    pub spells: Spellbook,
}

impl GhostStatBlock {
    pub const BASE_SPEED: i32 = 10;
    pub const BASE_MOVE_ENERGY: i32 = 10;

    /// A reset stat-block tagged with `kind`.
    pub fn blank(kind: MonsterKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn has_spells(&self) -> bool {
        !self.spells.is_empty()
    }
}

impl Default for GhostStatBlock {
    fn default() -> Self {
        Self {
            kind: MonsterKind::default(),
            name: String::new(),
            species: Species::Unknown,
            job: Job::Unknown,
            religion: God::NoGod,
            best_skill: Skill::Fighting,
            best_skill_level: 0,
            xl: 0,
            max_hp: 0,
            ev: 0,
            ac: 0,
            damage: 0,
            speed: Self::BASE_SPEED,
            move_energy: Self::BASE_MOVE_ENERGY,
            see_invis: false,
            flies: false,
            brand: Brand::Normal,
            att_type: AttackType::Hit,
            att_flav: AttackFlavour::Plain,
            colour: Colour::Undefined,
            resists: Resists::NONE,
            spells: Spellbook::new(),
        }
    }
}
