//! A list of characters with search, filters, and summary figures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attributes::AbilityScores;
use crate::sheet::{CharacterSheet, CombatStats, Edition, HitPoints};

/// A character in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Roster-local identifier.
    pub id: u32,
    /// The character.
    pub sheet: CharacterSheet,
    /// When the character was created.
    pub created: NaiveDate,
}

/// An ordered collection of characters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// An empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character, assigning the next id. Returns the id.
    ///
    /// Ids count up from the highest in use. Once that reaches `u32::MAX`
    /// the lowest free id is reused.
    pub fn add(&mut self, sheet: CharacterSheet, created: NaiveDate) -> u32 {
        let highest = self.entries.iter().map(|e| e.id).max().unwrap_or(0);
        let id = highest
            .checked_add(1)
            .or_else(|| (1..u32::MAX).find(|id| self.get(*id).is_none()))
            .unwrap_or(u32::MAX);
        self.entries.push(RosterEntry { id, sheet, created });
        id
    }

    /// Look up a character by id.
    pub fn get(&self, id: u32) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the roster has no characters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start a filtered query over this roster.
    pub fn query(&self) -> RosterQuery<'_> {
        RosterQuery::new(self)
    }

    /// Number of characters built for `edition`.
    pub fn count_edition(&self, edition: Edition) -> usize {
        self.entries
            .iter()
            .filter(|e| e.sheet.edition == edition)
            .count()
    }

    /// Mean level rounded half up, or 0 for an empty roster.
    pub fn average_level(&self) -> i32 {
        if self.entries.is_empty() {
            return 0;
        }
        let sum: i64 = self.entries.iter().map(|e| i64::from(e.sheet.level)).sum();
        let mean = sum as f64 / self.entries.len() as f64;
        (mean + 0.5).floor() as i32
    }

    /// Distinct non-empty classes in first-seen order.
    pub fn unique_classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = Vec::new();
        for entry in &self.entries {
            let class = entry.sheet.class.as_str();
            if !class.is_empty() && !classes.contains(&class) {
                classes.push(class);
            }
        }
        classes
    }

    /// A small built-in roster for demos and tests.
    pub fn sample() -> Self {
        let mut roster = Self::new();
        roster.add(
            sample_sheet(SampleCharacter {
                name: "Aragorn",
                player: "João Silva",
                edition: Edition::Dnd5e,
                race: "Human",
                class: "Ranger",
                level: 5,
                alignment: "Lawful Good",
                scores: [16, 14, 15, 12, 13, 11],
                armor_class: 16,
                hit_points: (45, 45),
            }),
            date(2024, 1, 15),
        );
        roster.add(
            sample_sheet(SampleCharacter {
                name: "Legolas",
                player: "Maria Santos",
                edition: Edition::Dnd5e,
                race: "Elf",
                class: "Ranger",
                level: 4,
                alignment: "Chaotic Good",
                scores: [12, 18, 13, 14, 15, 12],
                armor_class: 15,
                hit_points: (32, 28),
            }),
            date(2024, 1, 10),
        );
        roster.add(
            sample_sheet(SampleCharacter {
                name: "Gimli",
                player: "Pedro Costa",
                edition: Edition::Dnd35,
                race: "Dwarf",
                class: "Fighter",
                level: 6,
                alignment: "Lawful Neutral",
                scores: [18, 10, 16, 11, 12, 8],
                armor_class: 18,
                hit_points: (54, 54),
            }),
            date(2024, 1, 5),
        );
        roster
    }
}

struct SampleCharacter {
    name: &'static str,
    player: &'static str,
    edition: Edition,
    race: &'static str,
    class: &'static str,
    level: i32,
    alignment: &'static str,
    scores: [i32; 6],
    armor_class: i32,
    hit_points: (i32, i32),
}

fn sample_sheet(c: SampleCharacter) -> CharacterSheet {
    let (max, current) = c.hit_points;
    CharacterSheet {
        player: c.player.to_string(),
        edition: c.edition,
        race: c.race.to_string(),
        class: c.class.to_string(),
        level: c.level,
        alignment: c.alignment.to_string(),
        scores: AbilityScores::from_array(c.scores),
        combat: CombatStats {
            armor_class: c.armor_class,
            hit_points: HitPoints::with_current(max, current),
            proficiency_bonus: crate::stats::proficiency_bonus(c.level),
            ..CombatStats::default()
        },
        ..CharacterSheet::new(c.name)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// A builder for searching and filtering a roster.
pub struct RosterQuery<'r> {
    roster: &'r Roster,
    search: Option<String>,
    edition: Option<Edition>,
    class: Option<String>,
}

impl<'r> RosterQuery<'r> {
    /// A query matching every entry.
    pub fn new(roster: &'r Roster) -> Self {
        Self {
            roster,
            search: None,
            edition: None,
            class: None,
        }
    }

    /// Match entries whose name, race, or class contains `term` (case-insensitive).
    /// An empty term matches everything.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into().trim().to_lowercase();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    /// Match only entries of one edition.
    pub fn edition(mut self, edition: Edition) -> Self {
        self.edition = Some(edition);
        self
    }

    /// Match only entries of exactly this class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Matching entries in roster order.
    pub fn execute(self) -> Vec<&'r RosterEntry> {
        self.roster
            .entries
            .iter()
            .filter(|e| self.matches(e))
            .collect()
    }

    /// Count matching entries.
    pub fn count(self) -> usize {
        self.roster
            .entries
            .iter()
            .filter(|e| self.matches(e))
            .count()
    }

    fn matches(&self, entry: &RosterEntry) -> bool {
        let sheet = &entry.sheet;

        if let Some(ref term) = self.search
            && ![&sheet.name, &sheet.race, &sheet.class]
                .iter()
                .any(|field| field.to_lowercase().contains(term))
        {
            return false;
        }

        if let Some(edition) = self.edition
            && sheet.edition != edition
        {
            return false;
        }

        if let Some(ref class) = self.class
            && sheet.class != *class
        {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[&RosterEntry]) -> Vec<String> {
        entries.iter().map(|e| e.sheet.name.clone()).collect()
    }

    #[test]
    fn sample_roster() {
        let roster = Roster::sample();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.get(3).unwrap().sheet.name, "Gimli");
        assert_eq!(roster.get(2).unwrap().sheet.combat.hit_points.current, 28);
        assert!(roster.get(4).is_none());
    }

    #[test]
    fn unfiltered_query_returns_all_in_order() {
        let roster = Roster::sample();
        let all = roster.query().execute();
        assert_eq!(names(&all), ["Aragorn", "Legolas", "Gimli"]);
    }

    #[test]
    fn search_is_case_insensitive_over_name_race_class() {
        let roster = Roster::sample();
        assert_eq!(names(&roster.query().search("LEGO").execute()), ["Legolas"]);
        assert_eq!(names(&roster.query().search("dwarf").execute()), ["Gimli"]);
        assert_eq!(
            names(&roster.query().search("ranger").execute()),
            ["Aragorn", "Legolas"]
        );
        assert_eq!(roster.query().search("wizard").count(), 0);
    }

    #[test]
    fn empty_search_matches_all() {
        let roster = Roster::sample();
        assert_eq!(roster.query().search("   ").count(), 3);
    }

    #[test]
    fn edition_and_class_filters() {
        let roster = Roster::sample();
        assert_eq!(
            names(&roster.query().edition(Edition::Dnd35).execute()),
            ["Gimli"]
        );
        assert_eq!(roster.query().class("Ranger").count(), 2);
        assert_eq!(roster.query().class("ranger").count(), 0);
        assert_eq!(
            roster
                .query()
                .search("a")
                .edition(Edition::Dnd5e)
                .class("Ranger")
                .count(),
            2
        );
    }

    #[test]
    fn summary_figures() {
        let roster = Roster::sample();
        assert_eq!(roster.count_edition(Edition::Dnd5e), 2);
        assert_eq!(roster.count_edition(Edition::Dnd35), 1);
        assert_eq!(roster.average_level(), 5);
        assert_eq!(roster.unique_classes(), ["Ranger", "Fighter"]);
    }

    #[test]
    fn average_level_rounds_half_up() {
        let mut roster = Roster::new();
        let created = date(2024, 2, 1);
        for level in [1, 2] {
            let sheet = CharacterSheet {
                level,
                ..CharacterSheet::new("x")
            };
            roster.add(sheet, created);
        }
        assert_eq!(roster.average_level(), 2);
        assert_eq!(Roster::new().average_level(), 0);
    }

    #[test]
    fn add_assigns_increasing_ids() {
        let mut roster = Roster::sample();
        let id = roster.add(CharacterSheet::new("Boromir"), date(2024, 3, 1));
        assert_eq!(id, 4);
        assert_eq!(roster.unique_classes().len(), 2);
    }

    #[test]
    fn add_after_highest_possible_id_reuses_a_free_one() {
        let json = serde_json::json!({
            "entries": [{
                "id": u32::MAX,
                "sheet": CharacterSheet::new("Sauron"),
                "created": "2024-01-01",
            }]
        });
        let mut roster: Roster = serde_json::from_value(json).unwrap();
        let id = roster.add(CharacterSheet::new("Frodo"), date(2024, 3, 1));
        assert_eq!(id, 1);
        assert_eq!(roster.get(1).unwrap().sheet.name, "Frodo");
        assert_eq!(roster.add(CharacterSheet::new("Sam"), date(2024, 3, 1)), 2);
    }
}
