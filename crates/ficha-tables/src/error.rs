//! Error types for the table roller.

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur when rolling on a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// No table is registered under the key.
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// The table has no entries to pick from.
    #[error("table '{0}' has no entries")]
    EmptyTable(String),

    /// The table's die has no sides to roll.
    #[error("table '{0}' uses a die with no sides")]
    InvalidDie(String),
}
