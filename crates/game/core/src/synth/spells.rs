//! Spellbook selection for player ghosts and demon lords.

use crate::env::{RandomSource, SpellOracle};
use crate::tables::{DemonSpellTables, GhostTables};
use crate::types::{SlotFlags, Species, Spell, SpellSlot, Spellbook};

use super::player::KnownSpell;

/// Failure rate at or above which a spell is always forgotten.
const FORGET_THRESHOLD: i32 = 50;

/// Spells a ghost remembers from its former life.
///
/// Each known spell survives with probability `(50 - failure)² / 2500`, after
/// being mapped to its closest monster equivalent. Frequencies are normalized
/// against `xl`; an actual ghost of a breathing draconian then gets its
/// breath weapon appended at a fixed frequency.
pub fn player_spellbook<R, O>(
    known: &[KnownSpell],
    xl: i32,
    species: Species,
    actual: bool,
    tables: &GhostTables,
    spells: &O,
    rng: &mut R,
) -> Spellbook
where
    R: RandomSource,
    O: SpellOracle + ?Sized,
{
    let mut book = Spellbook::new();

    for entry in known {
        let chance = (FORGET_THRESHOLD - entry.failure).max(0);
        let spell = tables.translate_spell(entry.spell);
        if spells.allowed_for_ghost(spell)
            && rng.x_chance_in_y(
                chance * chance,
                FORGET_THRESHOLD * FORGET_THRESHOLD,
            )
        {
            book.add(spell, SlotFlags::WIZARD);
        }
    }

    book.normalize(xl);

    if actual && species.has_breath() {
        let (breath, freq) = tables.breath;
        book.push(SpellSlot::new(
            breath,
            freq,
            SlotFlags::NATURAL | SlotFlags::BREATH,
        ));
    }
    book
}

/// Randomized spellbook for a spellcasting demon lord.
///
/// Every entry is an innate demonic ability. Duplicates are kept and simply
/// raise that spell's share after normalization.
pub fn demon_spellbook<R: RandomSource>(
    xl: i32,
    tables: &DemonSpellTables,
    rng: &mut R,
) -> Spellbook {
    let mut book = Spellbook::new();
    let add = |book: &mut Spellbook, spell: Option<&Spell>| {
        if let Some(spell) = spell {
            book.add(*spell, SlotFlags::DEMONIC);
        }
    };

    for _ in 0..2 {
        if rng.coinflip() {
            add(&mut book, rng.choose(&tables.conjurations));
        }
    }

    if rng.one_chance_in(tables.summon_override.chance) {
        add(&mut book, Some(&tables.summon_override.spell));
    } else {
        add(&mut book, rng.choose(&tables.self_enchantments));
    }

    for _ in 0..2 {
        if rng.coinflip() {
            add(&mut book, rng.choose(&tables.misc));
        }
    }

    if rng.one_chance_in(tables.signature_chance) {
        add(&mut book, rng.choose(&tables.signature_pool));
    }

    for rare in &tables.rare {
        if rng.one_chance_in(rare.chance) {
            add(&mut book, Some(&rare.spell));
        }
    }

    book.normalize(xl);
    book
}
