//! Name generation and lore lookup for invented demon lords.

use std::collections::BTreeSet;

use super::RandomSource;

/// Produces random candidate names.
pub trait NameGenerator {
    fn make_name<R: RandomSource>(&self, rng: &mut R) -> String;
}

/// Answers whether a name already has flavour text attached.
///
/// Demon lords must not collide with named uniques, so candidates with lore
/// are rejected.
pub trait LoreOracle {
    fn has_lore(&self, name: &str) -> bool;
}

/// Case-insensitive set of names that already carry lore.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoreIndex {
    names: BTreeSet<String>,
}

impl LoreIndex {
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn insert(&mut self, name: &str) {
        self.names.insert(name.to_lowercase());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl LoreOracle for LoreIndex {
    fn has_lore(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }
}

/// Syllable-based generator for alien-sounding names.
///
/// A name is two to four syllables, each an optional onset, a vowel cluster
/// and an optional coda, with the first letter capitalised.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyllableNames {
    pub onsets: Vec<String>,
    pub vowels: Vec<String>,
    pub codas: Vec<String>,
    pub min_syllables: i32,
    pub max_syllables: i32,
}

impl SyllableNames {
    fn pick<'a, R: RandomSource>(rng: &mut R, pool: &'a [String]) -> &'a str {
        rng.choose(pool).map(String::as_str).unwrap_or("")
    }
}

impl Default for SyllableNames {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| (*s).to_owned()).collect();
        Self {
            onsets: owned(&[
                "b", "c", "d", "g", "gr", "k", "kh", "l", "m", "n", "ph", "r", "s", "sh", "t",
                "th", "v", "x", "z", "zh",
            ]),
            vowels: owned(&["a", "e", "i", "o", "u", "y", "ae", "ai", "ou", "ua"]),
            codas: owned(&["", "", "", "k", "l", "n", "r", "s", "th", "x", "z"]),
            min_syllables: 2,
            max_syllables: 4,
        }
    }
}

impl NameGenerator for SyllableNames {
    fn make_name<R: RandomSource>(&self, rng: &mut R) -> String {
        let syllables = rng.random_range(self.min_syllables.max(1), self.max_syllables);
        let mut name = String::new();
        for i in 0..syllables {
            // Every other syllable may drop its onset to avoid consonant pile-ups.
            if i == 0 || rng.coinflip() {
                name.push_str(Self::pick(rng, &self.onsets));
            }
            name.push_str(Self::pick(rng, &self.vowels));
            name.push_str(Self::pick(rng, &self.codas));
        }

        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => name,
        }
    }
}
