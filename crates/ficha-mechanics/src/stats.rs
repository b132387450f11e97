//! Derived statistics: ability modifiers, proficiency bonus, point-buy cost,
//! and skill totals.
//!
//! Everything here is a pure function of its inputs. Nothing is cached;
//! callers recompute whenever a score, level, or skill bonus changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attributes::{AbilityScores, Attribute};
use crate::skills::{Skill, SkillBonuses};

/// The point pool conventionally available for point-buy.
///
/// Informational only: nothing in the engine enforces it.
pub const POINT_BUY_BUDGET: i32 = 27;

/// Ability modifier for a score: `floor((score - 10) / 2)`.
///
/// Division rounds toward negative infinity, so 9 gives -1 rather than 0.
pub fn ability_modifier(score: i32) -> i32 {
    // Widened so the subtraction cannot overflow; the halved result always fits.
    (i64::from(score) - 10).div_euclid(2) as i32
}

/// Proficiency bonus for a level: `ceil(level / 4) + 1`.
///
/// Intended for levels 1-20 but defined for every integer.
pub fn proficiency_bonus(level: i32) -> i32 {
    ((i64::from(level) + 3).div_euclid(4) + 1) as i32
}

/// Point-buy cost of a single score.
///
/// | score | cost      |
/// |-------|-----------|
/// | ≤ 13  | score − 8 |
/// | 14    | 7         |
/// | 15    | 9         |
/// | > 15  | 0         |
///
/// Scores below 8 yield negative costs and scores above 15 cost nothing;
/// both are kept as-is rather than rejected.
pub fn point_buy_cost(score: i32) -> i32 {
    match score {
        ..=13 => score.saturating_sub(8),
        14 => 7,
        15 => 9,
        _ => 0,
    }
}

/// Sum of [`point_buy_cost`] over all six attributes.
pub fn total_points_used(scores: &AbilityScores) -> i32 {
    scores
        .iter()
        .fold(0i32, |acc, (_, score)| acc.saturating_add(point_buy_cost(score)))
}

/// Points left from [`POINT_BUY_BUDGET`]; negative when overspent.
pub fn points_remaining(scores: &AbilityScores) -> i32 {
    POINT_BUY_BUDGET.saturating_sub(total_points_used(scores))
}

/// Total modifier for a skill check: the governing modifier plus the skill's bonus.
pub fn skill_total(governing_score: i32, bonus: i32) -> i32 {
    ability_modifier(governing_score).saturating_add(bonus)
}

/// Total modifier for `skill` given a character's scores and skill bonuses.
pub fn skill_total_for(skill: Skill, scores: &AbilityScores, bonuses: &SkillBonuses) -> i32 {
    skill_total(scores.get(skill.attribute()), bonuses.get(skill))
}

/// Render a modifier with an explicit sign, e.g. "+2", "0", "-1".
pub fn format_modifier(modifier: i32) -> String {
    if modifier > 0 {
        format!("+{modifier}")
    } else {
        modifier.to_string()
    }
}

/// All derived values for a character, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    /// Ability modifier per attribute.
    pub modifiers: BTreeMap<Attribute, i32>,
    /// Level-derived proficiency bonus.
    pub proficiency_bonus: i32,
    /// Total modifier per skill, for all eighteen skills.
    pub skills: BTreeMap<Skill, i32>,
    /// Point-buy cost of the current scores.
    pub points_used: i32,
}

impl DerivedStats {
    /// Compute derived values from scores, level, and skill bonuses.
    pub fn compute(scores: &AbilityScores, level: i32, bonuses: &SkillBonuses) -> Self {
        let modifiers = scores
            .iter()
            .map(|(attribute, score)| (attribute, ability_modifier(score)))
            .collect();
        let skills = Skill::ALL
            .into_iter()
            .map(|skill| (skill, skill_total_for(skill, scores, bonuses)))
            .collect();
        let stats = Self {
            modifiers,
            proficiency_bonus: proficiency_bonus(level),
            skills,
            points_used: total_points_used(scores),
        };
        tracing::debug!(
            level,
            proficiency = stats.proficiency_bonus,
            points_used = stats.points_used,
            "derived stats recomputed"
        );
        stats
    }

    /// Modifier for one attribute.
    pub fn modifier(&self, attribute: Attribute) -> i32 {
        self.modifiers.get(&attribute).copied().unwrap_or(0)
    }

    /// Total for one skill.
    pub fn skill(&self, skill: Skill) -> i32 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }
}
