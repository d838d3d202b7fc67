//! Gathering ghosts for a bones record, and tracking ghost-bearing creatures.

use std::collections::BTreeSet;

use arrayvec::ArrayVec;

use crate::config::GhostConfig;
use crate::env::{GhostWorld, LevelGhosts, RandomSource, SpellOracle};
use crate::synth::PlayerSnapshot;
use crate::tables::GhostTables;
use crate::types::{EntityId, GhostStatBlock, MonsterKind, UndeadState};
use crate::validate::check_ghost;

/// Ghosts written to one bones record.
pub type GhostList = ArrayVec<GhostStatBlock, { GhostConfig::MAX_GHOSTS }>;

/// Collects the player's own ghost plus any other ghosts on the level.
///
/// A living player contributes a ghost of themselves first. Levels deep
/// enough then add ghosts already walking the level, followed by ghosts still
/// in transit towards it, until [`GhostConfig::MAX_GHOSTS`] is reached.
pub fn collect_ghosts<W, O, R>(
    player: Option<&PlayerSnapshot>,
    world: &W,
    tables: &GhostTables,
    spells: &O,
    rng: &mut R,
    config: &GhostConfig,
) -> GhostList
where
    W: GhostWorld + ?Sized,
    O: SpellOracle + ?Sized,
    R: RandomSource,
{
    let mut ghosts = GhostList::new();

    if let Some(player) = player.filter(|player| player.undead == UndeadState::Alive) {
        let ghost = GhostStatBlock::player_ghost(player, true, tables, spells, rng);
        announce_ghost(&ghost);
        ghosts.push(ghost);
    }

    let depth = world.absolute_depth();
    let wanted = (config.extra_ghost_quota(depth) + 1).saturating_sub(ghosts.len());

    let extras = world
        .active_ghosts()
        .chain(world.transiting_ghosts())
        .take(wanted.min(ghosts.remaining_capacity()))
        .cloned();
    ghosts.extend(extras);

    tracing::debug!(depth, count = ghosts.len(), "collected ghosts");
    ghosts
}

fn announce_ghost(ghost: &GhostStatBlock) {
    tracing::debug!(
        name = %ghost.name,
        species = %ghost.species,
        job = %ghost.job,
        xl = ghost.xl,
        "saving ghost"
    );
}

/// Entity ids of every creature currently carrying a ghost stat-block.
///
/// Owned by the level controller. The stat-blocks themselves stay with the
/// world; the registry only remembers which creatures have one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GhostRegistry {
    ids: BTreeSet<EntityId>,
}

impl GhostRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `id`. Returns false if it was already tracked.
    pub fn track(&mut self, id: EntityId) -> bool {
        self.ids.insert(id)
    }

    /// Stops tracking `id`. Returns false if it was not tracked.
    pub fn release(&mut self, id: EntityId) -> bool {
        self.ids.remove(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.ids.iter().copied()
    }

    /// Destroys creature `id`: removes it from `world` and stops tracking it.
    ///
    /// Returns the creature's stat-block if it was on the level.
    pub fn despawn(&mut self, world: &mut LevelGhosts, id: EntityId) -> Option<GhostStatBlock> {
        self.release(id);
        world.despawn(id)
    }

    /// Validates every tracked ghost against `world`.
    ///
    /// Returns false if any tracked creature is gone, or is a player ghost
    /// whose stat-block breaks an invariant. Other archetypes only need to be
    /// present. Every failure is logged, not just the first.
    pub fn check_all<W: GhostWorld + ?Sized>(&self, world: &W) -> bool {
        let mut ok = true;
        for id in self.iter() {
            match world.ghost(id) {
                None => {
                    tracing::warn!(%id, "tracked ghost is missing from the level");
                    ok = false;
                }
                Some(ghost) if ghost.kind == MonsterKind::PlayerGhost => {
                    if let Err(violation) = check_ghost(ghost) {
                        tracing::warn!(%id, name = %ghost.name, %violation, "invalid ghost");
                        ok = false;
                    }
                }
                Some(_) => {}
            }
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{LoreIndex, PcgRng, SpellCatalog, SyllableNames};
    use crate::synth::WeaponProfile;
    use crate::types::{Brand, Colour, Job, Skill, Species};

    fn ghost(name: &str) -> GhostStatBlock {
        GhostStatBlock {
            name: name.into(),
            species: Species::Human,
            job: Job::Fighter,
            xl: 5,
            max_hp: 30,
            ..GhostStatBlock::default()
        }
    }

    fn player() -> PlayerSnapshot {
        PlayerSnapshot {
            name: "Hero".into(),
            species: Species::Minotaur,
            job: Job::Berserker,
            experience_level: 12,
            max_hp: 120,
            ..PlayerSnapshot::default()
        }
    }

    #[test]
    fn extra_ghost_depth_is_configurable() {
        let mut world = LevelGhosts::new(3);
        world.spawn(EntityId(1), ghost("Other"));
        let ghosts = collect_ghosts(
            Some(&player()),
            &world,
            &GhostTables::default(),
            &SpellCatalog::standard(),
            &mut PcgRng::seeded(0),
            &GhostConfig::default().with_extra_ghost_depth(3),
        );
        let names: Vec<_> = ghosts.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Hero", "Other"]);
    }

    #[test]
    fn shallow_levels_only_keep_the_player() {
        let mut world = LevelGhosts::new(3);
        world.spawn(EntityId(1), ghost("Other"));
        let ghosts = collect_ghosts(
            Some(&player()),
            &world,
            &GhostTables::default(),
            &SpellCatalog::standard(),
            &mut PcgRng::seeded(0),
            &GhostConfig::default(),
        );
        assert_eq!(ghosts.len(), 1);
        assert_eq!(ghosts[0].name, "Hero");
    }

    #[test]
    fn shallow_level_without_player_takes_one_ghost() {
        let mut world = LevelGhosts::new(0);
        world.spawn(EntityId(1), ghost("First"));
        world.spawn(EntityId(2), ghost("Second"));
        let ghosts = collect_ghosts(
            None,
            &world,
            &GhostTables::default(),
            &SpellCatalog::standard(),
            &mut PcgRng::seeded(0),
            &GhostConfig::default(),
        );
        let names: Vec<_> = ghosts.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["First"]);
    }

    #[test]
    fn deep_levels_fill_from_world_then_transit() {
        let mut world = LevelGhosts::new(12);
        for i in 0..6 {
            world.spawn(EntityId(i), ghost(&format!("Active{i}")));
        }
        // Not a player ghost; never collected.
        world.spawn(EntityId(99), GhostStatBlock::blank(MonsterKind::DancingWeapon));
        for i in 0..6 {
            world.enqueue_transit(ghost(&format!("Transit{i}")));
        }

        let ghosts = collect_ghosts(
            Some(&player()),
            &world,
            &GhostTables::default(),
            &SpellCatalog::standard(),
            &mut PcgRng::seeded(0),
            &GhostConfig::default(),
        );
        assert_eq!(ghosts.len(), GhostConfig::MAX_GHOSTS);
        assert_eq!(ghosts[0].name, "Hero");
        assert_eq!(ghosts[6].name, "Active5");
        assert_eq!(ghosts[7].name, "Transit0");
        assert_eq!(ghosts[9].name, "Transit2");
    }

    #[test]
    fn undead_players_leave_no_ghost() {
        let mut undead = player();
        undead.undead = UndeadState::FullyUndead;
        let world = LevelGhosts::new(15);
        let ghosts = collect_ghosts(
            Some(&undead),
            &world,
            &GhostTables::default(),
            &SpellCatalog::standard(),
            &mut PcgRng::seeded(0),
            &GhostConfig::default(),
        );
        assert!(ghosts.is_empty());
    }

    #[test]
    fn registry_checks_tracked_ghosts() {
        let mut world = LevelGhosts::new(5);
        world.spawn(EntityId(1), ghost("Good"));
        let mut registry = GhostRegistry::new();
        assert!(registry.track(EntityId(1)));
        assert!(!registry.track(EntityId(1)));
        assert!(registry.check_all(&world));

        let mut bad = ghost("Bad");
        bad.damage = 51;
        world.spawn(EntityId(2), bad);
        registry.track(EntityId(2));
        assert!(!registry.check_all(&world));

        registry.release(EntityId(2));
        registry.track(EntityId(3));
        assert!(!registry.check_all(&world), "missing creature");

        registry.release(EntityId(3));
        assert!(registry.check_all(&world));
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec![EntityId(1)]);
    }

    #[test]
    fn registry_only_validates_player_ghosts() {
        let tables = GhostTables::default();
        let config = GhostConfig::default();
        let mut rng = PcgRng::seeded(6);
        let sword = WeaponProfile {
            damage: 12,
            speed: 14,
            skill: Skill::LongBlades,
            ranged: false,
            brand: Brand::Normal,
            colour: Colour::LightCyan,
        };

        let mut world = LevelGhosts::new(8);
        world.spawn(EntityId(1), GhostStatBlock::dancing_weapon(&sword, 100));
        world.spawn(
            EntityId(2),
            GhostStatBlock::pandemonium_lord(
                &tables,
                &SyllableNames::default(),
                &LoreIndex::default(),
                &config,
                &mut rng,
            ),
        );
        world.spawn(
            EntityId(3),
            GhostStatBlock::ugly_thing(&tables.ugly, &config, true, None, &mut rng),
        );

        let mut registry = GhostRegistry::new();
        for id in 1..=3 {
            registry.track(EntityId(id));
        }
        assert!(registry.check_all(&world));

        // A construct masquerading as a player ghost is still validated.
        let mut forged = GhostStatBlock::dancing_weapon(&sword, 100);
        forged.kind = MonsterKind::PlayerGhost;
        world.spawn(EntityId(4), forged);
        registry.track(EntityId(4));
        assert!(!registry.check_all(&world));
    }

    #[test]
    fn despawn_releases_the_tracked_id() {
        let mut world = LevelGhosts::new(5);
        world.spawn(EntityId(1), ghost("Gone"));
        world.spawn(EntityId(2), ghost("Stays"));
        let mut registry = GhostRegistry::new();
        registry.track(EntityId(1));
        registry.track(EntityId(2));

        let removed = registry.despawn(&mut world, EntityId(1));
        assert_eq!(removed.map(|g| g.name), Some("Gone".to_owned()));
        assert!(!registry.contains(EntityId(1)));
        assert_eq!(world.creature_count(), 1);
        assert!(registry.check_all(&world));

        // Untracked or already-gone ids are harmless.
        assert!(registry.despawn(&mut world, EntityId(1)).is_none());
        assert_eq!(registry.len(), 1);
    }
}
