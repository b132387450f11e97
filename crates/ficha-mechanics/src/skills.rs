//! The eighteen skills, their governing attributes, and per-character bonuses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attributes::Attribute;
use crate::error::{MechError, MechResult};

/// Lowest bonus a skill can carry.
pub const MIN_SKILL_BONUS: i32 = 0;
/// Highest bonus a skill can carry.
pub const MAX_SKILL_BONUS: i32 = 10;

/// One of the eighteen fixed skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    /// Acrobatics (DEX).
    Acrobatics,
    /// Animal Handling (WIS).
    AnimalHandling,
    /// Arcana (INT).
    Arcana,
    /// Athletics (STR).
    Athletics,
    /// Deception (CHA).
    Deception,
    /// History (INT).
    History,
    /// Insight (WIS).
    Insight,
    /// Intimidation (CHA).
    Intimidation,
    /// Investigation (INT).
    Investigation,
    /// Medicine (WIS).
    Medicine,
    /// Nature (INT).
    Nature,
    /// Perception (WIS).
    Perception,
    /// Performance (CHA).
    Performance,
    /// Persuasion (CHA).
    Persuasion,
    /// Religion (INT).
    Religion,
    /// Sleight of Hand (DEX).
    SleightOfHand,
    /// Stealth (DEX).
    Stealth,
    /// Survival (WIS).
    Survival,
}

/// Static data for one skill.
#[derive(Debug, Clone, Copy)]
pub struct SkillInfo {
    /// The skill.
    pub skill: Skill,
    /// Display name.
    pub name: &'static str,
    /// The attribute whose modifier the skill uses.
    pub attribute: Attribute,
    /// Short description.
    pub description: &'static str,
}

const fn info(
    skill: Skill,
    name: &'static str,
    attribute: Attribute,
    description: &'static str,
) -> SkillInfo {
    SkillInfo {
        skill,
        name,
        attribute,
        description,
    }
}

/// Skill table, indexed by `Skill as usize`.
pub static SKILLS: [SkillInfo; 18] = [
    info(Skill::Acrobatics, "Acrobatics", Attribute::Dexterity, "Agility, reflexes, and balance"),
    info(
        Skill::AnimalHandling,
        "Animal Handling",
        Attribute::Wisdom,
        "Calming and directing animals",
    ),
    info(Skill::Arcana, "Arcana", Attribute::Intelligence, "Knowledge of magic"),
    info(Skill::Athletics, "Athletics", Attribute::Strength, "Physical strength and endurance"),
    info(Skill::Deception, "Deception", Attribute::Charisma, "Lying convincingly"),
    info(Skill::History, "History", Attribute::Intelligence, "Knowledge of past events"),
    info(Skill::Insight, "Insight", Attribute::Wisdom, "Reading intentions"),
    info(Skill::Intimidation, "Intimidation", Attribute::Charisma, "Threats and coercion"),
    info(Skill::Investigation, "Investigation", Attribute::Intelligence, "Finding clues"),
    info(Skill::Medicine, "Medicine", Attribute::Wisdom, "Treating wounds"),
    info(Skill::Nature, "Nature", Attribute::Intelligence, "Knowledge of the natural world"),
    info(Skill::Perception, "Perception", Attribute::Wisdom, "Noticing details"),
    info(Skill::Performance, "Performance", Attribute::Charisma, "Entertaining an audience"),
    info(Skill::Persuasion, "Persuasion", Attribute::Charisma, "Convincing others"),
    info(Skill::Religion, "Religion", Attribute::Intelligence, "Knowledge of faiths and rites"),
    info(Skill::SleightOfHand, "Sleight of Hand", Attribute::Dexterity, "Manual trickery"),
    info(Skill::Stealth, "Stealth", Attribute::Dexterity, "Moving unseen and unheard"),
    info(Skill::Survival, "Survival", Attribute::Wisdom, "Living off the land"),
];

impl Skill {
    /// All skills in alphabetical order.
    pub const ALL: [Skill; 18] = [
        Skill::Acrobatics,
        Skill::AnimalHandling,
        Skill::Arcana,
        Skill::Athletics,
        Skill::Deception,
        Skill::History,
        Skill::Insight,
        Skill::Intimidation,
        Skill::Investigation,
        Skill::Medicine,
        Skill::Nature,
        Skill::Perception,
        Skill::Performance,
        Skill::Persuasion,
        Skill::Religion,
        Skill::SleightOfHand,
        Skill::Stealth,
        Skill::Survival,
    ];

    /// Static data for this skill.
    pub fn info(self) -> &'static SkillInfo {
        &SKILLS[self as usize]
    }

    /// Display name, e.g. "Sleight of Hand".
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// The governing attribute.
    pub fn attribute(self) -> Attribute {
        self.info().attribute
    }

    /// Parse a skill by display name, ignoring case, spaces, dashes and underscores.
    pub fn parse(s: &str) -> MechResult<Self> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|skill| normalize(skill.name()) == wanted)
            .ok_or_else(|| MechError::UnknownSkill(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Manually assigned skill bonuses. Skills without an entry count as 0.
///
/// Serialized as a plain `skill -> bonus` map. Deserialized bonuses are
/// clamped to 0-10 the same way [`SkillBonuses::set`] clamps them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Skill, i32>", into = "BTreeMap<Skill, i32>")]
pub struct SkillBonuses {
    bonuses: BTreeMap<Skill, i32>,
}

impl From<BTreeMap<Skill, i32>> for SkillBonuses {
    fn from(raw: BTreeMap<Skill, i32>) -> Self {
        let mut bonuses = Self::new();
        for (skill, bonus) in raw {
            bonuses.set(skill, bonus);
        }
        bonuses
    }
}

impl From<SkillBonuses> for BTreeMap<Skill, i32> {
    fn from(bonuses: SkillBonuses) -> Self {
        bonuses.bonuses
    }
}

impl SkillBonuses {
    /// No bonuses set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bonus for a skill, 0 when unset.
    pub fn get(&self, skill: Skill) -> i32 {
        self.bonuses.get(&skill).copied().unwrap_or(0)
    }

    /// Set a skill's bonus, clamped to 0-10. Returns the stored value.
    pub fn set(&mut self, skill: Skill, bonus: i32) -> i32 {
        let clamped = bonus.clamp(MIN_SKILL_BONUS, MAX_SKILL_BONUS);
        self.bonuses.insert(skill, clamped);
        clamped
    }

    /// Remove a skill's entry so it counts as unset again.
    pub fn clear(&mut self, skill: Skill) -> Option<i32> {
        self.bonuses.remove(&skill)
    }

    /// Whether a skill has an explicit entry (even a zero).
    pub fn is_set(&self, skill: Skill) -> bool {
        self.bonuses.contains_key(&skill)
    }

    /// Number of skills with an explicit entry.
    pub fn len(&self) -> usize {
        self.bonuses.len()
    }

    /// True if no skill has an explicit entry.
    pub fn is_empty(&self) -> bool {
        self.bonuses.is_empty()
    }

    /// Iterate explicit `(skill, bonus)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (Skill, i32)> + '_ {
        self.bonuses.iter().map(|(s, b)| (*s, *b))
    }

    /// Summary figures over the explicitly set bonuses.
    pub fn summary(&self, proficiency_bonus: i32) -> SkillSummary {
        let count = self.bonuses.len() as i32;
        let total = self.bonuses.values().fold(0i32, |acc, b| acc.saturating_add(*b));
        // Bonuses are never negative, so this is round-half-up.
        let average = if count == 0 {
            0
        } else {
            (2 * total + count) / (2 * count)
        };
        SkillSummary {
            proficient: self.bonuses.values().filter(|b| **b > 0).count(),
            average,
            total,
            expertise: self
                .bonuses
                .values()
                .filter(|b| **b >= proficiency_bonus)
                .count(),
        }
    }
}

/// Aggregate figures over a character's skill bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSummary {
    /// Skills with a bonus above zero.
    pub proficient: usize,
    /// Mean bonus over the set entries, rounded half up.
    pub average: i32,
    /// Sum of all bonuses.
    pub total: i32,
    /// Skills whose bonus reaches the proficiency bonus.
    pub expertise: usize,
}
