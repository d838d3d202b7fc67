//! Mapping between experience level and the eight ghost ranks.
//!
//! Ranks drive the title a ghost is described with. The forward mapping is a
//! step function; the inverse only returns a representative level per rank.

/// Lowest level of ranks 1 through 7.
const RANK_BREAKPOINTS: [i32; 7] = [4, 7, 11, 16, 22, 26, 27];

/// Representative level for each rank.
const RANK_LEVELS: [i32; 8] = [2, 5, 9, 13, 19, 24, 26, 27];

/// Highest rank.
pub const MAX_RANK: usize = RANK_LEVELS.len() - 1;

/// Rank (0..=7) of a character at `level`.
pub fn level_to_rank(level: i32) -> usize {
    RANK_BREAKPOINTS
        .iter()
        .take_while(|&&breakpoint| level >= breakpoint)
        .count()
}

/// A level that falls inside `rank`.
///
/// # Panics
///
/// Panics if `rank` is greater than [`MAX_RANK`].
pub fn rank_to_level(rank: usize) -> i32 {
    match RANK_LEVELS.get(rank) {
        Some(&level) => level,
        None => panic!("bad ghost rank {rank}"),
    }
}
