use ghost_core::{
    AttackFlavour, Brand, Colour, Element, EntityId, GhostConfig, GhostStatBlock, GhostTables, Job,
    KnownSpell, LevelGhosts, LoreIndex, LoreOracle, MonsterKind, PcgRng, PlayerSnapshot, RandomSource,
    ResistanceProfile, Skill, SkillLevels, SpellCatalog, Species, Spell, SyllableNames,
    WeaponProfile, Wielded, check_ghost, collect_ghosts, is_valid_ghost, level_to_rank,
    rank_to_level,
};

fn holy_warrior() -> PlayerSnapshot {
    PlayerSnapshot {
        name: "Aurelia".into(),
        species: Species::Human,
        job: Job::Fighter,
        experience_level: 14,
        max_hp: 150,
        evasion: 12,
        armour_class: 18,
        strength: 20,
        resists: ResistanceProfile {
            fire: 1,
            steam: 2,
            ..ResistanceProfile::default()
        },
        wielded: Some(Wielded::Weapon(WeaponProfile {
            damage: 13,
            speed: 15,
            skill: Skill::LongBlades,
            ranged: false,
            brand: Brand::HolyWrath,
            colour: Colour::White,
        })),
        skills: SkillLevels::from_levels([(Skill::Fighting, 15), (Skill::LongBlades, 18)]),
        spells: vec![KnownSpell::new(Spell::Blink, 0)],
        ..PlayerSnapshot::default()
    }
}

/// Random player snapshots covering extreme stats.
fn random_player(rng: &mut PcgRng) -> PlayerSnapshot {
    let mut player = holy_warrior();
    player.experience_level = rng.random_range(1, 27);
    player.max_hp = rng.random_range(1, 900);
    player.evasion = rng.random_range(0, 120);
    player.strength = rng.random_range(1, 80);
    player.skills = SkillLevels::from_levels([
        (Skill::Fighting, rng.random_range(0, 27)),
        (Skill::UnarmedCombat, rng.random_range(0, 27)),
        (Skill::LongBlades, rng.random_range(0, 27)),
    ]);
    player.mutations.innate_claws = rng.random2(4);
    player.wielded = match rng.random2(3) {
        0 => None,
        1 => Some(Wielded::Other),
        _ => Some(Wielded::Weapon(WeaponProfile {
            damage: rng.random_range(3, 30),
            speed: 12,
            skill: Skill::LongBlades,
            ranged: rng.coinflip(),
            brand: *rng
                .choose(&[Brand::HolyWrath, Brand::Flame, Brand::Venom, Brand::Chaos])
                .unwrap(),
            colour: Colour::Cyan,
        })),
    };
    player
}

// ================================================================
// Player ghosts
// ================================================================

#[test]
fn test_holy_wrath_weapon_ghost_has_normal_brand() {
    let tables = GhostTables::default();
    let catalog = SpellCatalog::standard();
    let mut rng = PcgRng::seeded(9);

    let ghost = GhostStatBlock::player_ghost(&holy_warrior(), true, &tables, &catalog, &mut rng);

    assert_eq!(ghost.kind, MonsterKind::PlayerGhost);
    assert_eq!(ghost.brand, Brand::Normal);
    // 13 * 43 / 25 = 22; 22 * 45 / 30 = 33; + 5
    assert_eq!(ghost.damage, 38);
    assert_eq!(ghost.best_skill, Skill::LongBlades);
    assert_eq!(ghost.best_skill_level, 18);
    assert_eq!(ghost.resists.level(Element::Fire), 1);
    assert_eq!(ghost.resists.level(Element::Steam), 1);
    assert!(ghost.flies);
    assert_eq!(ghost.speed, 10);
    assert_eq!(ghost.spells.len(), 1);
    assert_eq!(check_ghost(&ghost), Ok(()));
}

#[test]
fn test_player_ghosts_always_validate() {
    let tables = GhostTables::default();
    let catalog = SpellCatalog::standard();
    let mut rng = PcgRng::seeded(31337);

    for _ in 0..500 {
        let player = random_player(&mut rng);
        let ghost = GhostStatBlock::player_ghost(&player, true, &tables, &catalog, &mut rng);
        assert!((0..=50).contains(&ghost.damage), "damage {}", ghost.damage);
        assert!((1..=400).contains(&ghost.max_hp));
        assert!(ghost.ev <= 60);
        assert_ne!(ghost.brand, Brand::HolyWrath);
        assert!(ghost.brand.is_ghost_safe());
        assert!(ghost.move_energy >= 6);
        assert_eq!(check_ghost(&ghost), Ok(()), "{ghost:?}");
    }
}

// ================================================================
// Ranks
// ================================================================

#[test]
fn test_rank_scenarios() {
    assert_eq!(level_to_rank(27), 7);
    assert_eq!(rank_to_level(7), 27);
    assert_eq!(level_to_rank(10), 2);
    assert_eq!(rank_to_level(2), 9);
}

#[test]
fn test_rank_is_monotonic_with_exact_breakpoints() {
    let mut previous = level_to_rank(1);
    let mut steps = Vec::new();
    for level in 2..=40 {
        let rank = level_to_rank(level);
        assert!(rank >= previous);
        assert!(rank <= 7);
        if rank != previous {
            steps.push(level);
        }
        previous = rank;
    }
    assert_eq!(steps, vec![4, 7, 11, 16, 22, 26, 27]);
}

// ================================================================
// Demon lords
// ================================================================

#[test]
fn test_pandemonium_lords_respect_documented_ranges() {
    let tables = GhostTables::default();
    let names = SyllableNames::default();
    let lore = LoreIndex::new(["Mnoleg", "Lom Lobon", "Cerebov", "Gloorx Vloq"]);
    let config = GhostConfig::default();
    let mut rng = PcgRng::seeded(404);

    for _ in 0..500 {
        let lord = GhostStatBlock::pandemonium_lord(&tables, &names, &lore, &config, &mut rng);
        assert!((12..=30).contains(&lord.xl));
        for element in [Element::Fire, Element::Cold] {
            assert!([-1, 0, 1, 2].contains(&lord.resists.level(element)));
        }
        assert!([0, 1].contains(&lord.resists.level(Element::Elec)));
        assert!(!lore.has_lore(&lord.name));
        assert!(lord.spells.iter().all(|slot| slot.freq > 0));
    }
}

// ================================================================
// Ugly things
// ================================================================

#[test]
fn test_red_ugly_thing_then_upgrade() {
    let tables = GhostTables::default();
    let config = GhostConfig::default();
    let mut rng = PcgRng::seeded(17);

    let mut ugly =
        GhostStatBlock::ugly_thing(&tables.ugly, &config, false, Some(Colour::Red), &mut rng);
    assert_eq!(ugly.att_flav, AttackFlavour::Fire);
    assert_eq!(ugly.resists.level(Element::Fire), 1);
    assert_eq!(ugly.resists.level(Element::StickyFlame), 0);

    ugly.upgrade_ugly_thing(&tables.ugly);
    assert_eq!(ugly.kind, MonsterKind::VeryUglyThing);
    assert_eq!(ugly.colour, Colour::LightRed);
    assert_eq!(ugly.att_flav, AttackFlavour::StickyFlame);
    assert_eq!(ugly.resists.level(Element::Fire), 2);
    assert_eq!(ugly.resists.level(Element::StickyFlame), 1);
}

#[test]
fn test_upgrade_never_weakens_flavour_resistance() {
    let tables = GhostTables::default();
    let config = GhostConfig::default();
    let mut rng = PcgRng::seeded(8);

    for &colour in &tables.ugly.colours {
        let mut ugly =
            GhostStatBlock::ugly_thing(&tables.ugly, &config, false, Some(colour), &mut rng);
        let before = ugly.resists;
        ugly.upgrade_ugly_thing(&tables.ugly);
        assert!(ugly.colour.is_high());
        for (element, level) in before.levels() {
            assert!(ugly.resists.level(element) >= level, "{colour} {element:?}");
        }
    }
}

#[test]
fn test_recolour_preserves_hit_points() {
    let tables = GhostTables::default();
    let config = GhostConfig::default();
    let mut rng = PcgRng::seeded(99);
    let mut ugly = GhostStatBlock::ugly_thing(&tables.ugly, &config, true, None, &mut rng);
    let (xl, max_hp) = (ugly.xl, ugly.max_hp);

    for round in 0..100 {
        ugly.mutate_ugly_thing(&tables.ugly, &config, round % 2 == 0, None, &mut rng);
        assert_eq!((ugly.xl, ugly.max_hp), (xl, max_hp));
        assert!(ugly.kind.is_ugly_thing());
    }
}

// ================================================================
// Animated weapons
// ================================================================

#[test]
fn test_dancing_weapon_full_power_is_baseline() {
    let weapon = WeaponProfile {
        damage: 10,
        speed: 10,
        skill: Skill::Axes,
        ranged: false,
        brand: Brand::Normal,
        colour: Colour::LightGrey,
    };
    let dancer = GhostStatBlock::dancing_weapon(&weapon, 100);
    // Baselines: speed 30 - 10, ac 10, hp 2 * 10, damage 2 * 10.
    assert_eq!(dancer.speed, 20);
    assert_eq!(dancer.ac, 10);
    assert_eq!(dancer.max_hp, 20);
    assert_eq!(dancer.damage, 20);
    assert_eq!(dancer.ev, 20);
}

// ================================================================
// Collection and validation
// ================================================================

#[test]
fn test_collected_ghosts_are_valid() {
    let tables = GhostTables::default();
    let catalog = SpellCatalog::standard();
    let config = GhostConfig::default();
    let mut rng = PcgRng::seeded(1);

    let mut world = LevelGhosts::new(20);
    for id in 0..4 {
        let mut player = random_player(&mut rng);
        player.name = format!("Lost{id}");
        let ghost = GhostStatBlock::player_ghost(&player, false, &tables, &catalog, &mut rng);
        world.spawn(EntityId(id), ghost);
    }

    let ghosts = collect_ghosts(
        Some(&holy_warrior()),
        &world,
        &tables,
        &catalog,
        &mut rng,
        &config,
    );
    assert_eq!(ghosts.len(), 5);
    assert!(ghosts.iter().all(is_valid_ghost));
}

#[test]
fn test_validator_rejects_corrupt_records() {
    let tables = GhostTables::default();
    let catalog = SpellCatalog::standard();
    let mut rng = PcgRng::seeded(2);
    let good = GhostStatBlock::player_ghost(&holy_warrior(), true, &tables, &catalog, &mut rng);
    assert!(is_valid_ghost(&good));

    let mut long = good.clone();
    long.name = "A".repeat(301);
    assert!(!is_valid_ghost(&long));

    let mut padded = good.clone();
    padded.name = "Aurelia ".into();
    assert!(!is_valid_ghost(&padded));

    let mut strong = good.clone();
    strong.damage = 51;
    assert!(!is_valid_ghost(&strong));

    let mut holy = good;
    holy.brand = Brand::HolyWrath;
    assert!(!is_valid_ghost(&holy));
}
