//! Character stat engine for Ficha.
//!
//! Derives ability modifiers, proficiency bonus, point-buy cost, and skill
//! totals from a character's base values; generates attribute scores by
//! rolling 4d6-drop-lowest, the standard array, or reset; and provides the
//! character sheet record, an edit session that keeps the proficiency bonus
//! in step with the level, and a filterable roster.

pub mod attributes;
pub mod dice;
pub mod error;
pub mod roster;
pub mod session;
pub mod sheet;
pub mod skills;
pub mod stats;

pub use attributes::{AbilityScores, Attribute, GenerationMethod};
pub use dice::{DicePool, Die, DieResult, RollResult};
pub use error::{MechError, MechResult};
pub use roster::{Roster, RosterEntry, RosterQuery};
pub use session::EditSession;
pub use sheet::{CharacterSheet, CombatStats, Edition, HitPoints};
pub use skills::{Skill, SkillBonuses, SkillSummary};
pub use stats::{
    DerivedStats, POINT_BUY_BUDGET, ability_modifier, point_buy_cost, proficiency_bonus,
    skill_total,
};
