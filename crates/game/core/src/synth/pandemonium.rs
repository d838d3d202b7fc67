//! Randomly invented demon lords.

use crate::config::GhostConfig;
use crate::env::{LoreOracle, NameGenerator, RandomSource};
use crate::tables::GhostTables;
use crate::types::{Brand, Colour, Element, GhostStatBlock, MonsterKind, Resists};

use super::spells::demon_spellbook;

/// Colours a random monster may take: every palette entry except black and
/// dark grey.
const MONSTER_COLOURS: [Colour; 14] = [
    Colour::Blue,
    Colour::Green,
    Colour::Cyan,
    Colour::Red,
    Colour::Magenta,
    Colour::Brown,
    Colour::LightGrey,
    Colour::LightBlue,
    Colour::LightGreen,
    Colour::LightCyan,
    Colour::LightRed,
    Colour::LightMagenta,
    Colour::Yellow,
    Colour::White,
];

/// Picks a name no existing lore entry claims.
///
/// Gives up after `attempts` candidates and keeps the last one.
fn unique_name<R, N, L>(names: &N, lore: &L, attempts: u32, rng: &mut R) -> String
where
    R: RandomSource,
    N: NameGenerator + ?Sized,
    L: LoreOracle + ?Sized,
{
    let mut candidate = names.make_name(rng);
    for _ in 1..attempts.max(1) {
        if !lore.has_lore(&candidate) {
            return candidate;
        }
        candidate = names.make_name(rng);
    }
    if lore.has_lore(&candidate) {
        tracing::warn!(
            name = %candidate,
            attempts,
            "no unclaimed demon lord name found; reusing a lore name"
        );
    }
    candidate
}

impl GhostStatBlock {
    /// Invents a Pandemonium lord.
    ///
    /// Three in four lords are casters. Non-casters always carry a special
    /// brand and are faster to compensate; casters only sometimes do.
    pub fn pandemonium_lord<R, N, L>(
        tables: &GhostTables,
        names: &N,
        lore: &L,
        config: &GhostConfig,
        rng: &mut R,
    ) -> Self
    where
        R: RandomSource,
        N: NameGenerator + ?Sized,
        L: LoreOracle + ?Sized,
    {
        let name = unique_name(names, lore, config.name_attempts, rng);

        let max_hp = 100 + rng.roll_dice(3, 50);
        let ev = 5 + rng.random2(20);
        let ac = 5 + rng.random2(20);

        let mut resists = Resists::NONE;
        resists.set(Element::Fire, tables.demon_resist_levels.pick(rng));
        resists.set(Element::Cold, tables.demon_resist_levels.pick(rng));
        if rng.one_chance_in(3) {
            resists.set(Element::Elec, 1);
        }

        let damage = 20 + rng.roll_dice(2, 20);
        let flies = rng.x_chance_in_y(2, 3);
        let xl = 10 + rng.roll_dice(2, 10);

        let caster = rng.x_chance_in_y(3, 4);
        // The one-in-three draw is taken even for non-casters.
        let brand = if rng.one_chance_in(3) || !caster {
            tables.demon_brands.pick(rng)
        } else {
            Brand::Normal
        };

        let speed = if !caster {
            11 + rng.roll_dice(2, 4)
        } else if rng.one_chance_in(3) {
            10
        } else {
            8 + rng.roll_dice(2, 5)
        };

        let spells = if caster {
            demon_spellbook(xl, &tables.demon_spells, rng)
        } else {
            Default::default()
        };

        let colour = if rng.one_chance_in(10) {
            Colour::Shimmering
        } else {
            rng.choose(&MONSTER_COLOURS)
                .copied()
                .unwrap_or(Colour::LightGrey)
        };

        let lord = Self {
            kind: MonsterKind::PandemoniumLord,
            name,
            xl,
            max_hp,
            ev,
            ac,
            damage,
            speed,
            see_invis: true,
            flies,
            brand,
            colour,
            resists,
            spells,
            ..Self::blank(MonsterKind::PandemoniumLord)
        };

        tracing::debug!(
            name = %lord.name,
            xl = lord.xl,
            caster,
            brand = %lord.brand,
            spells = lord.spells.len(),
            "synthesized pandemonium lord"
        );
        lord
    }
}
