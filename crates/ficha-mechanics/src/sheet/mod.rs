//! Character sheets: identity, attributes, combat stats, and skills.
//!
//! A sheet only stores base values. Modifiers, skill totals, and point-buy
//! cost are derived on demand through [`crate::stats`].

pub mod hit_points;

pub use hit_points::HitPoints;

use serde::{Deserialize, Serialize};

use crate::attributes::{AbilityScores, Attribute};
use crate::error::{MechError, MechResult};
use crate::skills::{SkillBonuses, SkillSummary};
use crate::stats::{self, DerivedStats};

/// Lowest level the sheet accepts.
pub const MIN_LEVEL: i32 = 1;
/// Highest level the sheet accepts.
pub const MAX_LEVEL: i32 = 20;

/// Rules edition a character is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edition {
    /// Fifth edition.
    #[default]
    Dnd5e,
    /// Edition 3.5.
    Dnd35,
}

impl Edition {
    /// Every edition.
    pub const ALL: [Edition; 2] = [Self::Dnd5e, Self::Dnd35];

    /// Badge label, e.g. "D&D 5.0".
    pub fn label(self) -> &'static str {
        match self {
            Self::Dnd5e => "D&D 5.0",
            Self::Dnd35 => "D&D 3.5",
        }
    }

    /// Parse "5e", "dnd5e", "5.0", "3.5", "dnd35" and the like.
    pub fn parse(s: &str) -> MechResult<Self> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        let key = key
            .strip_prefix("dnd")
            .or_else(|| key.strip_prefix("dd"))
            .unwrap_or(&key);
        match key {
            "5" | "5e" | "50" => Ok(Self::Dnd5e),
            "35" | "35e" => Ok(Self::Dnd35),
            _ => Err(MechError::UnknownEdition(s.to_string())),
        }
    }
}

impl std::fmt::Display for Edition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Combat figures entered on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    /// Armor class.
    pub armor_class: i32,
    /// Hit points.
    pub hit_points: HitPoints,
    /// Initiative modifier.
    pub initiative: i32,
    /// Walking speed in feet.
    pub speed: i32,
    /// Stored proficiency bonus, kept in step with the level by the edit session.
    pub proficiency_bonus: i32,
}

impl Default for CombatStats {
    fn default() -> Self {
        Self {
            armor_class: 10,
            hit_points: HitPoints::default(),
            initiative: 0,
            speed: 30,
            proficiency_bonus: stats::proficiency_bonus(MIN_LEVEL),
        }
    }
}

/// A character record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Character name. Required before saving.
    pub name: String,
    /// Player name.
    pub player: String,
    /// Rules edition.
    pub edition: Edition,
    /// Race, e.g. "Human".
    pub race: String,
    /// Subrace, e.g. "High Elf".
    pub subrace: String,
    /// Class, e.g. "Ranger".
    pub class: String,
    /// Subclass or archetype.
    pub subclass: String,
    /// Background, e.g. "Soldier".
    pub background: String,
    /// Alignment, e.g. "Lawful Good".
    pub alignment: String,
    /// Character level.
    pub level: i32,
    /// Experience points.
    pub experience: u32,
    /// Attribute scores.
    pub scores: AbilityScores,
    /// Combat figures.
    pub combat: CombatStats,
    /// Skill bonuses.
    pub skills: SkillBonuses,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self {
            name: String::new(),
            player: String::new(),
            edition: Edition::default(),
            race: String::new(),
            subrace: String::new(),
            class: String::new(),
            subclass: String::new(),
            background: String::new(),
            alignment: String::new(),
            level: MIN_LEVEL,
            experience: 0,
            scores: AbilityScores::default(),
            combat: CombatStats::default(),
            skills: SkillBonuses::default(),
        }
    }
}

impl CharacterSheet {
    /// A blank level-1 sheet with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Check the sheet can be saved: the name must not be blank.
    pub fn validate(&self) -> MechResult<()> {
        if self.name.trim().is_empty() {
            return Err(MechError::MissingName);
        }
        Ok(())
    }

    /// Name for display, with a placeholder when blank.
    pub fn display_name(&self) -> &str {
        match self.name.trim() {
            "" => "Unnamed",
            name => name,
        }
    }

    /// Player for display, with a placeholder when blank.
    pub fn display_player(&self) -> &str {
        match self.player.trim() {
            "" => "Anonymous player",
            player => player,
        }
    }

    /// Ability modifier for one attribute.
    pub fn modifier(&self, attribute: Attribute) -> i32 {
        stats::ability_modifier(self.scores.get(attribute))
    }

    /// All derived values, computed from the level rather than the stored bonus.
    pub fn derived(&self) -> DerivedStats {
        DerivedStats::compute(&self.scores, self.level, &self.skills)
    }

    /// Point-buy cost of the current scores.
    pub fn points_used(&self) -> i32 {
        stats::total_points_used(&self.scores)
    }

    /// Summary of the skill bonuses against the level's proficiency bonus.
    pub fn skill_summary(&self) -> SkillSummary {
        self.skills.summary(stats::proficiency_bonus(self.level))
    }
}
