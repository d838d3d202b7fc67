/// Ghost generation limits and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GhostConfig {
    /// Absolute depth (0-based) from which extra ghosts may be collected.
    /// Shallower levels only ever carry the player's own ghost.
    pub extra_ghost_depth: u32,

    /// Upper bound on demon-lord name candidates before the last one is
    /// accepted even if it collides with existing lore.
    pub name_attempts: u32,

    /// Upper bound on random colour draws when recolouring an ugly thing.
    pub recolour_attempts: u32,
}

impl GhostConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of ghosts gathered for one bones record.
    pub const MAX_GHOSTS: usize = 10;

    // ===== stat-block invariants =====
    pub const MAX_GHOST_DAMAGE: i32 = 50;
    pub const MAX_GHOST_HP: i32 = 400;
    pub const MAX_GHOST_EVASION: i32 = 60;
    /// Highest experience level / power level a persisted ghost may carry.
    pub const MAX_XL: i32 = 27;
    /// Highest skill level.
    pub const MAX_SKILL_LEVEL: i32 = 27;
    /// Player name length limit. Ghost names may be up to ten times longer
    /// to leave room for combining characters.
    pub const MAX_NAME_LENGTH: usize = 30;
    pub const MAX_GHOST_NAME_BYTES: usize = Self::MAX_NAME_LENGTH * 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_EXTRA_GHOST_DEPTH: u32 = 10;
    pub const DEFAULT_NAME_ATTEMPTS: u32 = 100;
    pub const DEFAULT_RECOLOUR_ATTEMPTS: u32 = 50;

    pub fn new() -> Self {
        Self {
            extra_ghost_depth: Self::DEFAULT_EXTRA_GHOST_DEPTH,
            name_attempts: Self::DEFAULT_NAME_ATTEMPTS,
            recolour_attempts: Self::DEFAULT_RECOLOUR_ATTEMPTS,
        }
    }

    pub fn with_extra_ghost_depth(mut self, depth: u32) -> Self {
        self.extra_ghost_depth = depth;
        self
    }

    /// Number of ghosts other than the player's that a level at `depth` may
    /// contribute to a bones record.
    pub fn extra_ghost_quota(&self, depth: u32) -> usize {
        if depth < self.extra_ghost_depth {
            0
        } else {
            Self::MAX_GHOSTS - 1
        }
    }
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self::new()
    }
}
