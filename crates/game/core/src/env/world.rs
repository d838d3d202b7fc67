use crate::types::{EntityId, GhostStatBlock};

/// Read-only view of the level that ghosts are collected from.
pub trait GhostWorld {
    /// Zero-based absolute depth of the current level.
    fn absolute_depth(&self) -> u32;

    /// Stat-block of the ghost-bearing creature `id`, if it is still around.
    fn ghost(&self, id: EntityId) -> Option<&GhostStatBlock>;

    /// Player ghosts among the creatures currently on the level.
    fn active_ghosts(&self) -> impl Iterator<Item = &GhostStatBlock>;

    /// Player ghosts queued to arrive on the current level.
    fn transiting_ghosts(&self) -> impl Iterator<Item = &GhostStatBlock>;
}

/// In-memory level: creatures that carry a stat-block, plus a transit queue.
///
/// Owns its stat-blocks; a [`crate::collector::GhostRegistry`] only refers
/// to them by id.
#[derive(Clone, Debug, Default)]
pub struct LevelGhosts {
    depth: u32,
    creatures: Vec<(EntityId, GhostStatBlock)>,
    transit: Vec<GhostStatBlock>,
}

impl LevelGhosts {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Places a ghost-bearing creature on the level, replacing any previous
    /// stat-block for the same id.
    pub fn spawn(&mut self, id: EntityId, ghost: GhostStatBlock) {
        match self.creatures.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => *slot = ghost,
            None => self.creatures.push((id, ghost)),
        }
    }

    /// Removes a creature, handing its stat-block back to the caller.
    pub fn despawn(&mut self, id: EntityId) -> Option<GhostStatBlock> {
        let index = self.creatures.iter().position(|(existing, _)| *existing == id)?;
        Some(self.creatures.remove(index).1)
    }

    /// Queues a ghost that is following the player onto this level.
    pub fn enqueue_transit(&mut self, ghost: GhostStatBlock) {
        self.transit.push(ghost);
    }

    pub fn creature_count(&self) -> usize {
        self.creatures.len()
    }
}

impl GhostWorld for LevelGhosts {
    fn absolute_depth(&self) -> u32 {
        self.depth
    }

    fn ghost(&self, id: EntityId) -> Option<&GhostStatBlock> {
        self.creatures
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, ghost)| ghost)
    }

    fn active_ghosts(&self) -> impl Iterator<Item = &GhostStatBlock> {
        self.creatures
            .iter()
            .map(|(_, ghost)| ghost)
            .filter(|ghost| ghost.kind == crate::types::MonsterKind::PlayerGhost)
    }

    fn transiting_ghosts(&self) -> impl Iterator<Item = &GhostStatBlock> {
        self.transit
            .iter()
            .filter(|ghost| ghost.kind == crate::types::MonsterKind::PlayerGhost)
    }
}
