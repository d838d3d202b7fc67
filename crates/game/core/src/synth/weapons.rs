//! Animated-weapon constructs: dancing weapons and spectral weapons.

use crate::env::RandomSource;
use crate::types::{Brand, Colour, GhostStatBlock, MonsterKind, Skill};

/// The properties of a weapon that ghosts and constructs derive stats from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponProfile {
    /// Base damage.
    pub damage: i32,
    /// Attack delay; lower is faster.
    pub speed: i32,
    pub skill: Skill,
    pub ranged: bool,
    pub brand: Brand,
    pub colour: Colour,
}

/// Hit dice of every dancing weapon.
const DANCING_WEAPON_XL: i32 = 15;
const MAX_POWER: i32 = 100;
const MAX_SPECTRAL_SKILL: i32 = 270;

impl GhostStatBlock {
    /// A weapon animated by a spell of strength `power` (capped at 100).
    ///
    /// Light, fast weapons dance quickly and dodge well, heavy ones hit hard
    /// and soak damage. At full power the baseline stats are kept.
    pub fn dancing_weapon(weapon: &WeaponProfile, power: i32) -> Self {
        let power = power.clamp(0, MAX_POWER);
        let delay = weapon.speed;
        let damage = weapon.damage;

        let speed = 30 - delay;
        let ev = 25 - delay / 2;
        let ac = damage;
        let hit = 2 * damage;
        let hp = 2 * delay;

        Self {
            kind: MonsterKind::DancingWeapon,
            xl: DANCING_WEAPON_XL,
            speed: ((speed / 2) * (1 + power / 100)).max(3),
            ev: (ev * power / 100).max(3),
            ac: ac * power / 100,
            max_hp: (hp * power / 100).max(5),
            damage: (hit * power / 100).max(1),
            colour: weapon.colour,
            flies: true,
            ..Self::blank(MonsterKind::DancingWeapon)
        }
    }

    /// A spectral copy of the caster's weapon.
    ///
    /// `skill` is the caster's weapon skill in tenths of a level (capped at
    /// 270); it sets the construct's hit dice and boosts its damage, more so
    /// at low spell power.
    pub fn spectral_weapon<R: RandomSource>(
        weapon: &WeaponProfile,
        power: i32,
        skill: i32,
        rng: &mut R,
    ) -> Self {
        let power = power.clamp(0, MAX_POWER);
        let skill = skill.clamp(0, MAX_SPECTRAL_SKILL);

        let scale = 250 * 150 / (50 + power);
        let damage = weapon.damage * (scale + skill) / scale;

        let ev = 10 + rng.div_rand_round(power, 10);
        let ac = 2 + rng.div_rand_round(power, 10);
        let max_hp = 10 + rng.div_rand_round(power, 3);

        Self {
            kind: MonsterKind::SpectralWeapon,
            xl: (skill / 10).max(1),
            damage,
            speed: 30,
            ev,
            ac,
            max_hp,
            colour: weapon.colour,
            flies: true,
            ..Self::blank(MonsterKind::SpectralWeapon)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    fn weapon(damage: i32, speed: i32) -> WeaponProfile {
        WeaponProfile {
            damage,
            speed,
            skill: Skill::LongBlades,
            ranged: false,
            brand: Brand::Normal,
            colour: Colour::LightCyan,
        }
    }

    #[test]
    fn full_power_dancing_weapon_keeps_baseline() {
        let dancer = GhostStatBlock::dancing_weapon(&weapon(5, 10), 100);
        assert_eq!(dancer.kind, MonsterKind::DancingWeapon);
        // (20 / 2) * (1 + 1)
        assert_eq!(dancer.speed, 20);
        assert_eq!(dancer.ev, 20);
        assert_eq!(dancer.ac, 5);
        assert_eq!(dancer.max_hp, 20);
        assert_eq!(dancer.damage, 10);
        assert_eq!(dancer.xl, 15);
        assert_eq!(dancer.colour, Colour::LightCyan);
        assert!(dancer.flies);
    }

    #[test]
    fn dancing_weapon_power_is_capped() {
        let capped = GhostStatBlock::dancing_weapon(&weapon(7, 12), 150);
        let full = GhostStatBlock::dancing_weapon(&weapon(7, 12), 100);
        assert_eq!(capped, full);
    }

    #[test]
    fn weak_dancing_weapon_hits_floors() {
        let dancer = GhostStatBlock::dancing_weapon(&weapon(3, 10), 10);
        // speed (20/2) * 1, ev max(3, 2), ac 0, hp max(5, 2), damage max(1, 0)
        assert_eq!(dancer.speed, 10);
        assert_eq!(dancer.ev, 3);
        assert_eq!(dancer.ac, 0);
        assert_eq!(dancer.max_hp, 5);
        assert_eq!(dancer.damage, 1);
    }

    #[test]
    fn spectral_weapon_formulae() {
        // power 50: scale 375, skill 150 -> damage 10 * 525 / 375 = 14
        let mut rng = ScriptedRng::new([0, 0, 0]);
        let spectral = GhostStatBlock::spectral_weapon(&weapon(10, 12), 50, 150, &mut rng);
        assert_eq!(spectral.kind, MonsterKind::SpectralWeapon);
        assert_eq!(spectral.xl, 15);
        assert_eq!(spectral.damage, 14);
        assert_eq!(spectral.speed, 30);
        assert_eq!(spectral.ev, 15);
        assert_eq!(spectral.ac, 7);
        // 50 / 3 = 16 rem 2, draw 0 < 2 rounds up
        assert_eq!(spectral.max_hp, 27);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn spectral_weapon_clamps_inputs() {
        let mut rng = ScriptedRng::new([]);
        let spectral = GhostStatBlock::spectral_weapon(&weapon(10, 12), 500, 9000, &mut rng);
        // power 100, skill 270: scale 250, damage 10 * 520 / 250 = 20
        assert_eq!(spectral.xl, 27);
        assert_eq!(spectral.damage, 20);
        assert_eq!(spectral.ev, 20);
        // 100 / 3 = 33 rem 1, draw 0 rounds up
        assert_eq!(spectral.max_hp, 44);

        let unskilled = GhostStatBlock::spectral_weapon(&weapon(10, 12), 0, 0, &mut rng);
        assert_eq!(unskilled.xl, 1);
        assert_eq!(unskilled.damage, 10);
    }
}
