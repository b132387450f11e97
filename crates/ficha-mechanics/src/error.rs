//! Error types for the mechanics engine.

/// Errors that can occur around character sheets.
///
/// The stat formulas themselves are total and never fail; these errors come
/// from parsing user-facing names and from the save guard.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// An attribute name could not be recognized.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A skill name could not be recognized.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// An edition name could not be recognized.
    #[error("unknown edition: {0}")]
    UnknownEdition(String),

    /// An attribute generation method could not be recognized.
    #[error("unknown generation method: {0}")]
    UnknownGenerationMethod(String),

    /// The character has an empty or whitespace-only name.
    #[error("character name is required")]
    MissingName,
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
