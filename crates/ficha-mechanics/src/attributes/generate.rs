//! Attribute generation: rolled, standard array, and reset.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::AbilityScores;
use crate::dice::{DicePool, Die};
use crate::error::{MechError, MechResult};

/// The standard array, assigned positionally to STR, DEX, CON, INT, WIS, CHA.
pub const STANDARD_ARRAY: [i32; 6] = [15, 14, 13, 12, 10, 8];

/// The score every attribute returns to on reset.
pub const DEFAULT_SCORE: i32 = 10;

/// Roll 4d6 and sum the highest three. Always in 3..=18.
pub fn roll_4d6_drop_lowest(rng: &mut StdRng) -> i32 {
    let roll = DicePool::new().add(Die::D6, 4).roll(rng);
    let kept = roll.drop_lowest(1);
    tracing::trace!(%roll, kept = kept.total(), "rolled 4d6 drop lowest");
    // Three d6 never exceed 18, so the cast is lossless.
    kept.total() as i32
}

/// How a fresh set of attribute scores is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMethod {
    /// 4d6-drop-lowest for each attribute in canonical order.
    #[default]
    Roll,
    /// The fixed standard array.
    StandardArray,
    /// Every attribute back to 10.
    Reset,
}

impl GenerationMethod {
    /// Parse a method name: "roll", "standard" / "standard_array", or "reset".
    pub fn parse(s: &str) -> MechResult<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "roll" | "4d6" => Ok(Self::Roll),
            "standard" | "standard_array" | "array" => Ok(Self::StandardArray),
            "reset" => Ok(Self::Reset),
            other => Err(MechError::UnknownGenerationMethod(other.to_string())),
        }
    }

    /// Produce scores with this method. Only [`GenerationMethod::Roll`] draws
    /// from the RNG.
    pub fn generate(self, rng: &mut StdRng) -> AbilityScores {
        match self {
            Self::Roll => AbilityScores::rolled(rng),
            Self::StandardArray => AbilityScores::standard_array(),
            Self::Reset => AbilityScores::reset(),
        }
    }
}

impl AbilityScores {
    /// Scores rolled with 4d6-drop-lowest, one roll per attribute in canonical order.
    pub fn rolled(rng: &mut StdRng) -> Self {
        let mut values = [0; 6];
        for slot in &mut values {
            *slot = roll_4d6_drop_lowest(rng);
        }
        Self::from_array(values)
    }

    /// The standard array in canonical order.
    pub fn standard_array() -> Self {
        Self::from_array(STANDARD_ARRAY)
    }

    /// All attributes at [`DEFAULT_SCORE`].
    pub fn reset() -> Self {
        Self::uniform(DEFAULT_SCORE)
    }
}
