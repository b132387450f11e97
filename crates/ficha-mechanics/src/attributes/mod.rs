//! The six ability attributes and a character's scores in them.

pub mod generate;

pub use generate::{DEFAULT_SCORE, GenerationMethod, STANDARD_ARRAY, roll_4d6_drop_lowest};

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// One of the six fixed ability attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Physical power and athletic capacity.
    Strength,
    /// Agility, reflexes, and balance.
    Dexterity,
    /// Health, stamina, and vitality.
    Constitution,
    /// Reasoning, memory, and knowledge.
    Intelligence,
    /// Perception, intuition, and good sense.
    Wisdom,
    /// Force of personality and leadership.
    Charisma,
}

impl Attribute {
    /// All attributes in canonical sheet order.
    pub const ALL: [Attribute; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Full lowercase name, e.g. "strength".
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Three-letter abbreviation, e.g. "STR".
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Parse an attribute from its full name or abbreviation (case-insensitive).
    pub fn parse(s: &str) -> MechResult<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == lower || a.abbreviation().eq_ignore_ascii_case(&lower))
            .ok_or_else(|| MechError::UnknownAttribute(s.to_string()))
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A character's six attribute scores.
///
/// Scores are conventionally in 3-20 but nothing here enforces that; every
/// derived value is plain arithmetic on whatever is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Strength score.
    pub strength: i32,
    /// Dexterity score.
    pub dexterity: i32,
    /// Constitution score.
    pub constitution: i32,
    /// Intelligence score.
    pub intelligence: i32,
    /// Wisdom score.
    pub wisdom: i32,
    /// Charisma score.
    pub charisma: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::uniform(DEFAULT_SCORE)
    }
}

impl AbilityScores {
    /// Scores with every attribute set to `value`.
    pub fn uniform(value: i32) -> Self {
        Self::from_array([value; 6])
    }

    /// Build scores from an array in canonical order (STR, DEX, CON, INT, WIS, CHA).
    pub fn from_array(values: [i32; 6]) -> Self {
        let [strength, dexterity, constitution, intelligence, wisdom, charisma] = values;
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    /// The scores as an array in canonical order.
    pub fn to_array(&self) -> [i32; 6] {
        Attribute::ALL.map(|a| self.get(a))
    }

    /// The score for one attribute.
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    /// Set the score for one attribute.
    pub fn set(&mut self, attribute: Attribute, value: i32) {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Constitution => &mut self.constitution,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        };
        *slot = value;
    }

    /// Iterate `(attribute, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}
