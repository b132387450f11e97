//! Random table roller for Ficha.
//!
//! Rolls on built-in tables of names, locations, and treasures and keeps a
//! short newest-first history of results.

pub mod config;
pub mod error;
pub mod roller;
pub mod table;

pub use config::TablesConfig;
pub use error::{TableError, TableResult};
pub use roller::{TableRoll, TableRoller};
pub use table::{RandomTable, builtin_tables};
