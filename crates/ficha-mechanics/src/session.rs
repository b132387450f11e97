//! Editing session for a single character sheet.
//!
//! `EditSession` owns the sheet being edited and keeps the stored
//! proficiency bonus in step with the level: every level change recomputes
//! it. Saving validates the sheet and hands back a snapshot.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::attributes::{AbilityScores, Attribute, GenerationMethod};
use crate::error::MechResult;
use crate::sheet::{CharacterSheet, Edition, MAX_LEVEL, MIN_LEVEL};
use crate::skills::Skill;
use crate::stats::{self, DerivedStats};

/// An in-progress edit of one character sheet.
pub struct EditSession {
    sheet: CharacterSheet,
    rng: StdRng,
    dirty: bool,
}

impl EditSession {
    /// Start editing `sheet`, seeding attribute rolls from the OS.
    pub fn new(sheet: CharacterSheet) -> Self {
        Self::with_rng(sheet, StdRng::from_os_rng())
    }

    /// Start editing `sheet` with a fixed RNG seed for reproducible rolls.
    pub fn with_seed(sheet: CharacterSheet, seed: u64) -> Self {
        Self::with_rng(sheet, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut sheet: CharacterSheet, rng: StdRng) -> Self {
        sheet.combat.proficiency_bonus = stats::proficiency_bonus(sheet.level);
        Self {
            sheet,
            rng,
            dirty: false,
        }
    }

    /// The sheet as currently edited.
    pub fn sheet(&self) -> &CharacterSheet {
        &self.sheet
    }

    /// Finish editing and take the sheet back, saved or not.
    pub fn into_sheet(self) -> CharacterSheet {
        self.sheet
    }

    /// True if anything changed since the session started or last saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Apply an arbitrary change to the sheet and mark the session dirty.
    ///
    /// Use this for the free-text identity fields (player, race, class,
    /// background and so on). The level is clamped afterwards and the
    /// proficiency bonus recomputed from it.
    pub fn edit<R>(&mut self, change: impl FnOnce(&mut CharacterSheet) -> R) -> R {
        let out = change(&mut self.sheet);
        self.dirty = true;
        self.sync_level();
        out
    }

    /// Set the character name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.sheet.name = name.into();
        self.dirty = true;
    }

    /// Set the rules edition.
    pub fn set_edition(&mut self, edition: Edition) {
        self.sheet.edition = edition;
        self.dirty = true;
    }

    /// Set experience points.
    pub fn set_experience(&mut self, experience: u32) {
        self.sheet.experience = experience;
        self.dirty = true;
    }

    /// Set the level (clamped to 1-20) and recompute the proficiency bonus.
    pub fn set_level(&mut self, level: i32) -> i32 {
        self.sheet.level = level;
        self.dirty = true;
        let level = self.sync_level();
        tracing::debug!(
            level,
            proficiency = self.sheet.combat.proficiency_bonus,
            "level changed"
        );
        level
    }

    fn sync_level(&mut self) -> i32 {
        let level = self.sheet.level.clamp(MIN_LEVEL, MAX_LEVEL);
        self.sheet.level = level;
        self.sheet.combat.proficiency_bonus = stats::proficiency_bonus(level);
        level
    }

    /// Set one attribute score. No range is enforced.
    pub fn set_score(&mut self, attribute: Attribute, score: i32) {
        self.sheet.scores.set(attribute, score);
        self.dirty = true;
    }

    /// Set a skill bonus (clamped to 0-10). Returns the stored value.
    pub fn set_skill_bonus(&mut self, skill: Skill, bonus: i32) -> i32 {
        self.dirty = true;
        self.sheet.skills.set(skill, bonus)
    }

    /// Set maximum hit points, pulling current hit points down if needed.
    pub fn set_hit_points_max(&mut self, max: i32) -> i32 {
        self.dirty = true;
        self.sheet.combat.hit_points.set_max(max)
    }

    /// Set current hit points, clamped into `0..=max`.
    pub fn set_hit_points(&mut self, current: i32) -> i32 {
        self.dirty = true;
        self.sheet.combat.hit_points.set_current(current)
    }

    /// Set temporary hit points (never negative).
    pub fn set_temp_hit_points(&mut self, temp: i32) -> i32 {
        self.dirty = true;
        self.sheet.combat.hit_points.set_temp(temp)
    }

    /// Apply damage, temporary hit points first. Returns current hit points.
    pub fn damage(&mut self, amount: i32) -> i32 {
        self.dirty = true;
        let current = self.sheet.combat.hit_points.damage(amount);
        tracing::debug!(amount, current, "damage taken");
        current
    }

    /// Heal up to maximum hit points. Returns current hit points.
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.dirty = true;
        self.sheet.combat.hit_points.heal(amount)
    }

    /// Set armor class.
    pub fn set_armor_class(&mut self, armor_class: i32) {
        self.sheet.combat.armor_class = armor_class;
        self.dirty = true;
    }

    /// Set the initiative bonus.
    pub fn set_initiative(&mut self, initiative: i32) {
        self.sheet.combat.initiative = initiative;
        self.dirty = true;
    }

    /// Set speed in feet.
    pub fn set_speed(&mut self, speed: i32) {
        self.sheet.combat.speed = speed;
        self.dirty = true;
    }

    /// Replace all six scores using `method`.
    pub fn generate_attributes(&mut self, method: GenerationMethod) -> AbilityScores {
        self.sheet.scores = method.generate(&mut self.rng);
        self.dirty = true;
        tracing::debug!(?method, scores = ?self.sheet.scores.to_array(), "attributes generated");
        self.sheet.scores
    }

    /// Roll every attribute with 4d6-drop-lowest, using the session's RNG.
    pub fn roll_attributes(&mut self) -> AbilityScores {
        self.generate_attributes(GenerationMethod::Roll)
    }

    /// Assign the standard array.
    pub fn apply_standard_array(&mut self) -> AbilityScores {
        self.generate_attributes(GenerationMethod::StandardArray)
    }

    /// Put every attribute back to 10.
    pub fn reset_attributes(&mut self) -> AbilityScores {
        self.generate_attributes(GenerationMethod::Reset)
    }

    /// Derived values for the sheet as it stands.
    pub fn derived(&self) -> DerivedStats {
        self.sheet.derived()
    }

    /// Point-buy cost of the current scores.
    pub fn points_used(&self) -> i32 {
        self.sheet.points_used()
    }

    /// Validate and save. Returns the saved snapshot.
    ///
    /// A blank name is rejected and the session is left unchanged.
    pub fn save(&mut self) -> MechResult<CharacterSheet> {
        if let Err(e) = self.sheet.validate() {
            tracing::warn!(error = %e, "save rejected");
            return Err(e);
        }
        self.dirty = false;
        tracing::info!(name = %self.sheet.name, level = self.sheet.level, "character saved");
        Ok(self.sheet.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MechError;

    fn session() -> EditSession {
        EditSession::with_seed(CharacterSheet::new("Aragorn"), 42)
    }

    #[test]
    fn level_change_recomputes_proficiency() {
        let mut s = session();
        assert_eq!(s.sheet().combat.proficiency_bonus, 2);
        s.set_level(5);
        assert_eq!(s.sheet().combat.proficiency_bonus, 3);
        s.set_level(20);
        assert_eq!(s.sheet().combat.proficiency_bonus, 6);
        s.set_level(4);
        assert_eq!(s.sheet().combat.proficiency_bonus, 2);
    }

    #[test]
    fn level_is_clamped() {
        let mut s = session();
        assert_eq!(s.set_level(0), 1);
        assert_eq!(s.set_level(25), 20);
        assert_eq!(s.sheet().combat.proficiency_bonus, 6);
    }

    #[test]
    fn session_syncs_stale_proficiency() {
        let mut sheet = CharacterSheet::new("Gimli");
        sheet.level = 9;
        sheet.combat.proficiency_bonus = 2;
        let s = EditSession::with_seed(sheet, 1);
        assert_eq!(s.sheet().combat.proficiency_bonus, 4);
        assert!(!s.is_dirty());
    }

    #[test]
    fn standard_array_regardless_of_prior_state() {
        let mut s = session();
        s.roll_attributes();
        s.set_score(Attribute::Charisma, 19);
        let scores = s.apply_standard_array();
        assert_eq!(scores.to_array(), [15, 14, 13, 12, 10, 8]);
        assert_eq!(s.points_used(), 27);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut s = session();
        s.roll_attributes();
        let first = s.reset_attributes();
        let second = s.reset_attributes();
        assert_eq!(first, second);
        assert_eq!(first.to_array(), [10; 6]);
    }

    #[test]
    fn rolled_attributes_in_range_and_seeded() {
        let mut a = session();
        let mut b = session();
        let rolled = a.roll_attributes();
        assert_eq!(rolled, b.roll_attributes());
        assert!(rolled.to_array().iter().all(|v| (3..=18).contains(v)));
    }

    #[test]
    fn derived_tracks_edits() {
        let mut s = session();
        s.set_score(Attribute::Dexterity, 14);
        assert_eq!(s.derived().skill(Skill::Stealth), 2);
        s.set_skill_bonus(Skill::Stealth, 3);
        assert_eq!(s.derived().skill(Skill::Stealth), 5);
    }

    #[test]
    fn hit_point_max_clamps_current() {
        let mut s = session();
        s.set_hit_points_max(4);
        assert_eq!(s.sheet().combat.hit_points.current, 4);
    }

    #[test]
    fn hit_point_edits_mark_dirty() {
        let mut s = session();
        s.set_hit_points_max(20);
        s.save().unwrap();

        assert_eq!(s.set_hit_points(12), 12);
        assert!(s.is_dirty());
        assert_eq!(s.set_temp_hit_points(5), 5);
        assert_eq!(s.damage(8), 9);
        assert_eq!(s.sheet().combat.hit_points.temp, 0);
        assert_eq!(s.heal(30), 20);
        assert_eq!(s.set_hit_points(-1), 0);
        insta::assert_snapshot!(s.sheet().combat.hit_points.to_string(), @"0/20");
    }

    #[test]
    fn combat_and_identity_setters() {
        let mut s = session();
        s.set_armor_class(16);
        s.set_initiative(2);
        s.set_speed(25);
        s.set_edition(Edition::Dnd35);
        s.set_experience(6500);
        let combat = s.sheet().combat;
        assert_eq!((combat.armor_class, combat.initiative, combat.speed), (16, 2, 25));
        assert_eq!(s.sheet().edition, Edition::Dnd35);
        assert_eq!(s.sheet().experience, 6500);
        assert!(s.is_dirty());
    }

    #[test]
    fn edit_changes_free_text_fields() {
        let mut s = session();
        s.save().unwrap();
        s.edit(|sheet| {
            sheet.player = "João Silva".into();
            sheet.race = "Human".into();
            sheet.class = "Ranger".into();
            sheet.subclass = "Hunter".into();
            sheet.background = "Outlander".into();
            sheet.alignment = "Chaotic Good".into();
        });
        assert!(s.is_dirty());
        let saved = s.save().unwrap();
        assert_eq!(saved.display_player(), "João Silva");
        assert_eq!(saved.subclass, "Hunter");
    }

    #[test]
    fn edit_keeps_level_and_proficiency_in_step() {
        let mut s = session();
        s.edit(|sheet| sheet.level = 9);
        assert_eq!(s.sheet().combat.proficiency_bonus, 4);
        let old = s.edit(|sheet| std::mem::replace(&mut sheet.level, 40));
        assert_eq!(old, 9);
        assert_eq!(s.sheet().level, 20);
        assert_eq!(s.sheet().combat.proficiency_bonus, 6);
    }

    #[test]
    fn save_rejects_blank_name() {
        let mut s = session();
        s.set_name("   ");
        assert!(matches!(s.save(), Err(MechError::MissingName)));
        assert!(s.is_dirty());
    }

    #[test]
    fn save_returns_snapshot() {
        let mut s = session();
        s.set_level(3);
        assert!(s.is_dirty());
        let saved = s.save().unwrap();
        assert_eq!(saved.name, "Aragorn");
        assert_eq!(saved.level, 3);
        assert!(!s.is_dirty());
        assert_eq!(&saved, s.sheet());
    }
}
