//! Rolling on tables and keeping a history of results.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::TablesConfig;
use crate::error::{TableError, TableResult};
use crate::table::{RandomTable, builtin_tables};

/// One recorded roll on a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRoll {
    /// Key of the table rolled on.
    pub key: String,
    /// Title of the table rolled on.
    pub table: String,
    /// The die value shown with the result.
    pub roll: u32,
    /// The entry drawn.
    pub result: String,
    /// When the roll happened.
    pub timestamp: DateTime<Utc>,
}

impl std::fmt::Display for TableRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.table, self.roll, self.result)
    }
}

/// Rolls on a set of tables and remembers the most recent results.
pub struct TableRoller {
    tables: Vec<RandomTable>,
    history: VecDeque<TableRoll>,
    history_limit: usize,
    rng: StdRng,
}

impl TableRoller {
    /// A roller over the built-in tables.
    pub fn new(config: TablesConfig) -> Self {
        Self::with_tables(config, builtin_tables())
    }

    /// A roller over a custom set of tables.
    pub fn with_tables(config: TablesConfig, tables: Vec<RandomTable>) -> Self {
        Self {
            tables,
            history: VecDeque::new(),
            history_limit: config.history_limit.max(1),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Register another table, replacing any with the same key.
    pub fn add_table(&mut self, table: RandomTable) {
        self.tables.retain(|t| t.key != table.key);
        self.tables.push(table);
    }

    /// The available tables.
    pub fn tables(&self) -> &[RandomTable] {
        &self.tables
    }

    /// Find a table by key (case-insensitive).
    pub fn table(&self, key: &str) -> Option<&RandomTable> {
        self.tables.iter().find(|t| t.key.eq_ignore_ascii_case(key))
    }

    /// Roll on the table with `key` and record the result.
    pub fn roll(&mut self, key: &str) -> TableResult<TableRoll> {
        let table = self
            .tables
            .iter()
            .find(|t| t.key.eq_ignore_ascii_case(key))
            .ok_or_else(|| TableError::UnknownTable(key.to_string()))?;

        let (roll, result) = table.roll(&mut self.rng)?;
        let record = TableRoll {
            key: table.key.clone(),
            table: table.title.clone(),
            roll,
            result: result.to_string(),
            timestamp: Utc::now(),
        };
        tracing::debug!(table = %record.key, roll, result = %record.result, "rolled on table");

        self.history.push_front(record.clone());
        self.history.truncate(self.history_limit);
        Ok(record)
    }

    /// Recorded rolls, newest first.
    pub fn history(&self) -> impl Iterator<Item = &TableRoll> {
        self.history.iter()
    }

    /// Number of recorded rolls.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Forget all recorded rolls.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for TableRoller {
    fn default() -> Self {
        Self::new(TablesConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ficha_mechanics::Die;

    #[test]
    fn roll_records_history() {
        let mut roller = TableRoller::default();
        let roll = roller.roll("names").unwrap();
        assert_eq!(roll.table, "Random Names");
        assert_eq!(roll.key, "names");
        assert!((1..=8).contains(&roll.roll));
        assert_eq!(roller.history_len(), 1);
        assert_eq!(roller.history().next(), Some(&roll));
    }

    #[test]
    fn history_is_newest_first() {
        let mut roller = TableRoller::default();
        roller.roll("names").unwrap();
        roller.roll("treasures").unwrap();
        let keys: Vec<&str> = roller.history().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["treasures", "names"]);
    }

    #[test]
    fn history_capped_at_limit() {
        let mut roller = TableRoller::default();
        for _ in 0..15 {
            roller.roll("locations").unwrap();
        }
        assert_eq!(roller.history_len(), 10);

        let mut small = TableRoller::new(TablesConfig::default().with_history_limit(2));
        small.roll("names").unwrap();
        small.roll("locations").unwrap();
        small.roll("treasures").unwrap();
        let keys: Vec<&str> = small.history().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["treasures", "locations"]);
    }

    #[test]
    fn clear_history_empties() {
        let mut roller = TableRoller::default();
        roller.roll("names").unwrap();
        roller.clear_history();
        assert_eq!(roller.history_len(), 0);
    }

    #[test]
    fn unknown_table_errors_without_recording() {
        let mut roller = TableRoller::default();
        assert!(matches!(
            roller.roll("weather"),
            Err(TableError::UnknownTable(k)) if k == "weather"
        ));
        assert_eq!(roller.history_len(), 0);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let mut roller = TableRoller::default();
        assert!(roller.roll("Treasures").is_ok());
        assert!(roller.table("NAMES").is_some());
    }

    #[test]
    fn same_seed_same_results() {
        let mut a = TableRoller::new(TablesConfig::default().with_seed(9));
        let mut b = TableRoller::new(TablesConfig::default().with_seed(9));
        for key in ["names", "locations", "treasures"] {
            let ra = a.roll(key).unwrap();
            let rb = b.roll(key).unwrap();
            assert_eq!((ra.roll, ra.result), (rb.roll, rb.result));
        }
    }

    #[test]
    fn custom_tables() {
        let mut roller = TableRoller::with_tables(TablesConfig::default(), Vec::new());
        assert!(roller.roll("names").is_err());
        roller.add_table(RandomTable::new("coin", "Coin", Die::Custom(2), ["heads", "tails"]));
        roller.add_table(RandomTable::new("coin", "Coin", Die::Custom(2), ["edge"]));
        assert_eq!(roller.tables().len(), 1);
        assert_eq!(roller.roll("coin").unwrap().result, "edge");
    }

    #[test]
    fn display() {
        let roll = TableRoll {
            key: "names".into(),
            table: "Random Names".into(),
            roll: 5,
            result: "Gimli".into(),
            timestamp: Utc::now(),
        };
        insta::assert_snapshot!(roll.to_string(), @"Random Names [5] Gimli");
    }
}
