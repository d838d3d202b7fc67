//! Per-element resistance levels packed into one bitfield.
//!
//! Each [`Element`] owns a 3-bit two's-complement field, so a level ranges
//! over `-4..=3`. Negative levels are vulnerabilities. Levels outside that
//! range are clamped when encoded.

use core::fmt;

/// Damage element that a resistance level applies to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    Elec,
    Poison,
    Fire,
    Steam,
    Cold,
    Acid,
    NegativeEnergy,
    Rotting,
    StickyFlame,
    Petrify,
}

impl Element {
    const FIELD_BITS: u32 = 3;
    const FIELD_MASK: u32 = (1 << Self::FIELD_BITS) - 1;

    #[inline]
    const fn shift(self) -> u32 {
        self as u32 * Self::FIELD_BITS
    }
}

/// Packed resistance levels.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Resists(u32);

impl Resists {
    pub const NONE: Resists = Resists(0);
    pub const MIN_LEVEL: i8 = -4;
    pub const MAX_LEVEL: i8 = 3;

    /// Raw bitfield, as stored by persistence layers.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Rebuilds a bitfield from its stored form. Every bit pattern decodes
    /// to valid levels, so no checking is needed here.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Level for one element.
    pub const fn level(self, element: Element) -> i8 {
        let raw = (self.0 >> element.shift()) & Element::FIELD_MASK;
        if raw >= 4 { raw as i8 - 8 } else { raw as i8 }
    }

    /// Overwrites the level for one element, clamping into the encodable range.
    pub fn set(&mut self, element: Element, level: i8) {
        let clamped = level.clamp(Self::MIN_LEVEL, Self::MAX_LEVEL);
        let field = (clamped as i32 as u32) & Element::FIELD_MASK;
        self.0 = (self.0 & !(Element::FIELD_MASK << element.shift())) | (field << element.shift());
    }

    /// Builder form of [`Resists::set`].
    #[must_use]
    pub fn with(mut self, element: Element, level: i8) -> Self {
        self.set(element, level);
        self
    }

    /// Composes a bitfield from `(element, level)` pairs. Later pairs for the
    /// same element win.
    pub fn from_levels(levels: impl IntoIterator<Item = (Element, i8)>) -> Self {
        levels
            .into_iter()
            .fold(Self::NONE, |acc, (element, level)| acc.with(element, level))
    }

    /// Decomposes into every non-zero `(element, level)` pair.
    pub fn levels(self) -> impl Iterator<Item = (Element, i8)> {
        use strum::IntoEnumIterator;
        Element::iter()
            .map(move |element| (element, self.level(element)))
            .filter(|(_, level)| *level != 0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Resists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.levels()).finish()
    }
}

/// Live resistance readings for a character, before packing.
///
/// Most elements keep their full level. Steam is boolean for monsters, so any
/// positive reading becomes level 1 when packed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResistanceProfile {
    pub fire: i8,
    pub cold: i8,
    pub elec: i8,
    pub poison: i8,
    pub negative_energy: i8,
    pub acid: i8,
    pub steam: i8,
    pub sticky_flame: i8,
    pub rotting: i8,
    pub petrify: i8,
}

impl ResistanceProfile {
    pub fn to_resists(&self) -> Resists {
        Resists::from_levels([
            (Element::Fire, self.fire),
            (Element::Cold, self.cold),
            (Element::Elec, self.elec),
            (Element::Poison, self.poison),
            (Element::NegativeEnergy, self.negative_energy),
            (Element::Acid, self.acid),
            (Element::Steam, i8::from(self.steam > 0)),
            (Element::StickyFlame, self.sticky_flame),
            (Element::Rotting, self.rotting),
            (Element::Petrify, self.petrify),
        ])
    }
}
