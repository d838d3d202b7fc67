//! Common error infrastructure for ghost-core.
//!
//! Generation routines are total and never fail. Errors only surface at the
//! edges: malformed lookup tables ([`TableError`]) and stat-blocks that break
//! an invariant ([`crate::validate::GhostViolation`]).

use crate::types::MonsterKind;

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be discarded, never repaired.
    ///
    /// Examples: a ghost read from a bones file with damage 51.
    Validation,

    /// Static data is inconsistent; generation cannot be trusted.
    ///
    /// Examples: an empty spell pool, a weight table summing to zero.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the data itself is broken rather than the input.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all ghost-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Give every variant a stable, upper-case error code
pub trait GhostError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors reported by [`crate::tables::GhostTables::validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A candidate list that generation draws from is empty.
    #[error("table '{0}' has no entries")]
    EmptyPool(&'static str),

    /// A weighted table whose weights sum to zero.
    #[error("weighted table '{0}' has zero total weight")]
    ZeroWeight(&'static str),

    /// A weighted table whose weights sum past what a single draw can cover.
    #[error("weighted table '{0}' has total weight above {max}", max = i32::MAX)]
    WeightOverflow(&'static str),

    /// A one-in-N gate with N = 0.
    #[error("table '{0}' contains a one-in-zero chance")]
    ZeroChance(&'static str),

    /// A monster template without hit dice.
    #[error("template for {0} has no hit dice")]
    NoHitDice(MonsterKind),

    /// A template attack that would produce negative damage.
    #[error("template for {0} has negative base stats")]
    NegativeStats(MonsterKind),
}

impl GhostError for TableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use TableError::*;
        match self {
            EmptyPool(_) => "TABLE_EMPTY_POOL",
            ZeroWeight(_) => "TABLE_ZERO_WEIGHT",
            WeightOverflow(_) => "TABLE_WEIGHT_OVERFLOW",
            ZeroChance(_) => "TABLE_ZERO_CHANCE",
            NoHitDice(_) => "TABLE_NO_HIT_DICE",
            NegativeStats(_) => "TABLE_NEGATIVE_STATS",
        }
    }
}
