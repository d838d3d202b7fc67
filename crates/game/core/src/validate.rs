//! Invariant checks for stat-blocks coming from untrusted sources.
//!
//! Ghosts are read back from bones files written by earlier games, possibly
//! by other versions or tampered with. A stat-block that fails any check is
//! discarded; nothing is repaired.

use crate::config::GhostConfig;
use crate::error::{ErrorSeverity, GhostError};
use crate::types::{AttackFlavour, AttackType, Brand, Element, GhostStatBlock, MonsterKind};

/// First invariant a stat-block breaks.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GhostViolation {
    #[error("{0} is not a player ghost")]
    Kind(MonsterKind),

    #[error("damage {0} outside 0..={max}", max = GhostConfig::MAX_GHOST_DAMAGE)]
    Damage(i32),

    #[error("max hp {0} outside 1..={max}", max = GhostConfig::MAX_GHOST_HP)]
    HitPoints(i32),

    #[error("experience level {0} outside 1..={max}", max = GhostConfig::MAX_XL)]
    ExperienceLevel(i32),

    #[error("evasion {0} above {max}", max = GhostConfig::MAX_GHOST_EVASION)]
    Evasion(i32),

    #[error("negative electricity resistance {0}")]
    ElecResist(i8),

    #[error("brand {0} cannot be carried by a ghost")]
    Brand(Brand),

    #[error("unknown species")]
    Species,

    #[error("unknown job")]
    Job,

    #[error("best skill level {0} outside 0..={max}", max = GhostConfig::MAX_SKILL_LEVEL)]
    SkillLevel(i32),

    #[error("{kind} may not attack with {att_type}/{att_flav}")]
    Attack {
        kind: MonsterKind,
        att_type: AttackType,
        att_flav: AttackFlavour,
    },

    #[error("name rejected by the naming policy")]
    Name,

    #[error("name is {0} bytes long")]
    NameLength(usize),

    #[error("name has surrounding whitespace")]
    NamePadding,

    #[error("spell slot {0} is empty")]
    EmptySpellSlot(usize),
}

impl GhostError for GhostViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Kind(_) => "GHOST_KIND",
            Self::Damage(_) => "GHOST_DAMAGE",
            Self::HitPoints(_) => "GHOST_HIT_POINTS",
            Self::ExperienceLevel(_) => "GHOST_EXPERIENCE_LEVEL",
            Self::Evasion(_) => "GHOST_EVASION",
            Self::ElecResist(_) => "GHOST_ELEC_RESIST",
            Self::Brand(_) => "GHOST_BRAND",
            Self::Species => "GHOST_SPECIES",
            Self::Job => "GHOST_JOB",
            Self::SkillLevel(_) => "GHOST_SKILL_LEVEL",
            Self::Attack { .. } => "GHOST_ATTACK",
            Self::Name => "GHOST_NAME",
            Self::NameLength(_) => "GHOST_NAME_LENGTH",
            Self::NamePadding => "GHOST_NAME_PADDING",
            Self::EmptySpellSlot(_) => "GHOST_EMPTY_SPELL_SLOT",
        }
    }
}

/// Character-name policy shared with new player names.
///
/// Names must be non-empty, contain no control characters or path
/// separators, not start with a dot and not be blank.
pub fn validate_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.trim().is_empty()
        && !name
            .chars()
            .any(|c| c.is_control() || c == '/' || c == '\\')
}

/// Checks every invariant, stopping at the first violation.
///
/// Only player ghosts are persisted, so any other archetype tag is itself a
/// violation. The tag is read from the same untrusted data as everything
/// else and never relaxes a rule.
pub fn check_ghost(ghost: &GhostStatBlock) -> Result<(), GhostViolation> {
    if ghost.kind != MonsterKind::PlayerGhost {
        return Err(GhostViolation::Kind(ghost.kind));
    }
    if !(0..=GhostConfig::MAX_GHOST_DAMAGE).contains(&ghost.damage) {
        return Err(GhostViolation::Damage(ghost.damage));
    }
    if !(1..=GhostConfig::MAX_GHOST_HP).contains(&ghost.max_hp) {
        return Err(GhostViolation::HitPoints(ghost.max_hp));
    }
    if !(1..=GhostConfig::MAX_XL).contains(&ghost.xl) {
        return Err(GhostViolation::ExperienceLevel(ghost.xl));
    }
    if ghost.ev > GhostConfig::MAX_GHOST_EVASION {
        return Err(GhostViolation::Evasion(ghost.ev));
    }

    let elec = ghost.resists.level(Element::Elec);
    if elec < 0 {
        return Err(GhostViolation::ElecResist(elec));
    }

    if !ghost.brand.is_ghost_safe() {
        return Err(GhostViolation::Brand(ghost.brand));
    }

    if !ghost.species.is_known() {
        return Err(GhostViolation::Species);
    }
    if !ghost.job.is_known() {
        return Err(GhostViolation::Job);
    }
    if !(0..=GhostConfig::MAX_SKILL_LEVEL).contains(&ghost.best_skill_level) {
        return Err(GhostViolation::SkillLevel(ghost.best_skill_level));
    }

    if ghost.att_type != AttackType::Hit || ghost.att_flav != AttackFlavour::Plain {
        return Err(GhostViolation::Attack {
            kind: ghost.kind,
            att_type: ghost.att_type,
            att_flav: ghost.att_flav,
        });
    }

    if !validate_name(&ghost.name) {
        return Err(GhostViolation::Name);
    }
    if ghost.name.len() > GhostConfig::MAX_GHOST_NAME_BYTES {
        return Err(GhostViolation::NameLength(ghost.name.len()));
    }
    if ghost.name.trim() != ghost.name {
        return Err(GhostViolation::NamePadding);
    }

    if let Some(index) = ghost.spells.iter().position(|slot| slot.spell.is_none()) {
        return Err(GhostViolation::EmptySpellSlot(index));
    }

    Ok(())
}

/// True when `ghost` satisfies every invariant.
pub fn is_valid_ghost(ghost: &GhostStatBlock) -> bool {
    match check_ghost(ghost) {
        Ok(()) => true,
        Err(violation) => {
            tracing::debug!(
                name = %ghost.name,
                code = violation.error_code(),
                %violation,
                "rejected ghost"
            );
            false
        }
    }
}
