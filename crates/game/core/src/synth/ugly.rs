//! Ugly things: palette-driven mutants whose colour decides their attack.

use crate::config::GhostConfig;
use crate::env::RandomSource;
use crate::tables::UglyThingTables;
use crate::types::{Colour, GhostStatBlock, MonsterKind};

/// Random low-intensity palette colour other than `exclude`.
///
/// Gives up after `attempts` draws and falls back to the first palette entry
/// that differs from `exclude`.
fn pick_colour<R: RandomSource>(
    palette: &[Colour],
    exclude: Option<Colour>,
    attempts: u32,
    rng: &mut R,
) -> Colour {
    for _ in 0..attempts {
        match rng.choose(palette) {
            Some(&colour) if Some(colour) != exclude => return colour,
            Some(_) => {}
            None => break,
        }
    }

    let fallback = palette
        .iter()
        .copied()
        .find(|colour| Some(*colour) != exclude)
        .unwrap_or(Colour::LightGrey);
    tracing::warn!(
        ?exclude,
        attempts,
        colour = %fallback,
        "ugly thing recolour hit its draw cap"
    );
    fallback
}

impl GhostStatBlock {
    /// A freshly spawned ugly thing (or very ugly thing).
    ///
    /// A `force_colour` fixes the hue; its low-intensity form is used.
    pub fn ugly_thing<R: RandomSource>(
        tables: &UglyThingTables,
        config: &GhostConfig,
        very_ugly: bool,
        force_colour: Option<Colour>,
        rng: &mut R,
    ) -> Self {
        let mut ghost = Self::blank(MonsterKind::UglyThing);
        ghost.init_ugly_thing(tables, config, very_ugly, false, force_colour, rng);
        ghost
    }

    /// Re-rolls an ugly thing's colour, attack and resistances in place.
    ///
    /// Hit dice and maximum HP are kept. Without a forced colour the new hue
    /// always differs from the old one.
    pub fn mutate_ugly_thing<R: RandomSource>(
        &mut self,
        tables: &UglyThingTables,
        config: &GhostConfig,
        very_ugly: bool,
        force_colour: Option<Colour>,
        rng: &mut R,
    ) {
        self.init_ugly_thing(tables, config, very_ugly, true, force_colour, rng);
    }

    /// Promotes an ugly thing to the very tier.
    ///
    /// Colour is brightened first, since the flavour upgrade depends on it.
    pub fn upgrade_ugly_thing(&mut self, tables: &UglyThingTables) {
        self.kind = MonsterKind::VeryUglyThing;
        self.colour = self.colour.to_high();
        self.att_flav = self.att_flav.upgraded();
        self.resists = tables.resists_for(true, self.att_flav);
    }

    fn init_ugly_thing<R: RandomSource>(
        &mut self,
        tables: &UglyThingTables,
        config: &GhostConfig,
        very_ugly: bool,
        only_mutate: bool,
        force_colour: Option<Colour>,
        rng: &mut R,
    ) {
        let template = tables.template(very_ugly);

        self.kind = MonsterKind::UglyThing;
        self.speed = template.speed;
        self.ev = template.ev;
        self.ac = template.ac;
        self.damage = template.damage;
        self.move_energy = template.move_energy;

        if !only_mutate {
            self.xl = template.hit_dice.dice;
            self.max_hp = template.hit_dice.roll(rng);
        }

        if let Some(&verb) = rng.choose(&tables.attack_types) {
            self.att_type = verb;
        }

        self.colour = match force_colour {
            Some(colour) => colour.to_low(),
            None => {
                let exclude = only_mutate.then(|| self.colour.to_low());
                pick_colour(&tables.colours, exclude, config.recolour_attempts, rng)
            }
        };

        self.att_flav = tables.flavour_for(self.colour);
        if self.colour == tables.bonus_damage_colour {
            self.damage = self.damage * 4 / 3;
        }

        self.resists = tables.resists_for(false, self.att_flav);

        if very_ugly {
            self.upgrade_ugly_thing(tables);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};
    use crate::tables::GhostTables;
    use crate::types::{AttackFlavour, AttackType, Element, Resists};

    #[test]
    fn forced_red_ugly_thing_breathes_plain_fire() {
        let tables = GhostTables::default().ugly;
        let mut rng = PcgRng::seeded(1);
        let ugly = GhostStatBlock::ugly_thing(
            &tables,
            &GhostConfig::default(),
            false,
            Some(Colour::LightRed),
            &mut rng,
        );

        assert_eq!(ugly.kind, MonsterKind::UglyThing);
        assert_eq!(ugly.colour, Colour::Red);
        assert_eq!(ugly.att_flav, AttackFlavour::Fire);
        assert_eq!(ugly.resists, Resists::NONE.with(Element::Fire, 1));
        assert_eq!(ugly.damage, 15);
        assert_eq!(ugly.xl, 8);
        assert!((24..=64).contains(&ugly.max_hp));
    }

    #[test]
    fn scripted_very_ugly_magenta() {
        let tables = GhostTables::default().ugly;
        let mut draws = vec![0; 12]; // hit dice: 3 each
        draws.push(6); // Punch
        draws.push(4); // Magenta
        let mut rng = ScriptedRng::new(draws);
        let ugly = GhostStatBlock::ugly_thing(&tables, &GhostConfig::default(), true, None, &mut rng);

        assert!(rng.is_exhausted());
        assert_eq!(ugly.kind, MonsterKind::VeryUglyThing);
        assert_eq!(ugly.xl, 12);
        assert_eq!(ugly.max_hp, 36);
        assert_eq!(ugly.att_type, AttackType::Punch);
        assert_eq!(ugly.colour, Colour::LightMagenta);
        assert_eq!(ugly.att_flav, AttackFlavour::Plain);
        assert_eq!(ugly.damage, 36);
        assert!(ugly.resists.is_empty());
        assert_eq!(ugly.ev, 8);
        assert_eq!(ugly.ac, 4);
    }

    #[test]
    fn upgrade_brightens_before_upgrading_flavour() {
        let tables = GhostTables::default().ugly;
        let mut rng = PcgRng::seeded(2);
        let mut ugly = GhostStatBlock::ugly_thing(
            &tables,
            &GhostConfig::default(),
            false,
            Some(Colour::Red),
            &mut rng,
        );
        ugly.upgrade_ugly_thing(&tables);

        assert_eq!(ugly.kind, MonsterKind::VeryUglyThing);
        assert_eq!(ugly.colour, Colour::LightRed);
        assert_eq!(ugly.att_flav, AttackFlavour::StickyFlame);
        assert_eq!(ugly.resists.level(Element::Fire), 2);
        assert_eq!(ugly.resists.level(Element::StickyFlame), 1);
    }

    #[test]
    fn mutation_changes_colour_but_keeps_hit_points() {
        let tables = GhostTables::default().ugly;
        let config = GhostConfig::default();
        let mut rng = PcgRng::seeded(77);
        let mut ugly = GhostStatBlock::ugly_thing(&tables, &config, false, None, &mut rng);
        let (xl, max_hp) = (ugly.xl, ugly.max_hp);

        for _ in 0..50 {
            let before = ugly.colour;
            ugly.mutate_ugly_thing(&tables, &config, false, None, &mut rng);
            assert_ne!(ugly.colour, before);
            assert!(tables.colours.contains(&ugly.colour));
            assert_eq!((ugly.xl, ugly.max_hp), (xl, max_hp));
        }
    }

    #[test]
    fn mutation_excludes_the_low_form_of_a_bright_colour() {
        let tables = GhostTables::default().ugly;
        let config = GhostConfig::default();
        let mut rng = PcgRng::seeded(5);
        let mut very = GhostStatBlock::ugly_thing(&tables, &config, true, Some(Colour::Green), &mut rng);
        assert_eq!(very.colour, Colour::LightGreen);

        for _ in 0..30 {
            very.mutate_ugly_thing(&tables, &config, true, None, &mut rng);
            assert!(very.colour.is_high());
            assert_ne!(very.colour, Colour::LightGreen);
            very.mutate_ugly_thing(&tables, &config, true, Some(Colour::Green), &mut rng);
        }
    }

    #[test]
    fn recolour_cap_falls_back_to_first_other_colour() {
        let palette = [Colour::Red, Colour::Brown];
        // Every scripted draw lands on the excluded red.
        let mut rng = ScriptedRng::new([0, 0, 0]);
        assert_eq!(pick_colour(&palette, Some(Colour::Red), 3, &mut rng), Colour::Brown);
        assert_eq!(pick_colour(&palette, Some(Colour::Red), 0, &mut rng), Colour::Brown);
    }
}
