//! Random tables and the built-in table set.
//!
//! A table pairs a list of entries with the die shown to the player. The
//! die roll is cosmetic: the entry is drawn uniformly and independently of
//! it, so tables need not have as many entries as the die has sides.

use rand::Rng;
use rand::rngs::StdRng;

use ficha_mechanics::dice::{DicePool, Die};

use crate::error::{TableError, TableResult};

/// Character names (8 entries, rolled with a d8).
pub const NAMES: &[&str] = &[
    "Aragorn", "Legolas", "Gimli", "Gandalf", "Boromir", "Faramir", "Éowyn", "Arwen",
];

/// Settlements and sites (5 entries, rolled with a d20).
pub const LOCATIONS: &[&str] = &[
    "Isolated village ringed by marshes",
    "Merchant town at a crossroads",
    "Monastery in the snowy mountains",
    "Ancient ruins with broken statues",
    "Fishing hamlet on a rocky island",
];

/// Treasure hoards (5 entries, rolled with a d12).
pub const TREASURES: &[&str] = &[
    "2d6 × 10 gp and a keepsake",
    "1d4 gems (50 gp each) and a torn map",
    "+1 weapon (or a magical equivalent)",
    "Enchanted light armor (+1 AC)",
    "Potion of healing (or 2d4 lesser potions)",
];

/// A named table of entries.
#[derive(Debug, Clone)]
pub struct RandomTable {
    /// Lookup key, e.g. "names".
    pub key: String,
    /// Display title, e.g. "Random Names".
    pub title: String,
    /// The die shown with each roll.
    pub die: Die,
    /// The entries to pick from.
    pub entries: Vec<String>,
}

impl RandomTable {
    /// Create a table.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        die: Die,
        entries: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            die,
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Roll the table's die and draw an entry. Returns `(die roll, entry)`.
    pub fn roll<'a>(&'a self, rng: &mut StdRng) -> TableResult<(u32, &'a str)> {
        if self.entries.is_empty() {
            return Err(TableError::EmptyTable(self.key.clone()));
        }
        if self.die.sides() == 0 {
            return Err(TableError::InvalidDie(self.key.clone()));
        }
        let roll = DicePool::new().add(self.die, 1).roll(rng).total();
        let entry = &self.entries[rng.random_range(0..self.entries.len())];
        Ok((roll, entry))
    }
}

/// The built-in tables: names, locations, and treasures.
pub fn builtin_tables() -> Vec<RandomTable> {
    vec![
        RandomTable::new("names", "Random Names", Die::D8, NAMES.iter().copied()),
        RandomTable::new("locations", "Random Locations", Die::D20, LOCATIONS.iter().copied()),
        RandomTable::new("treasures", "Random Treasures", Die::D12, TREASURES.iter().copied()),
    ]
}
