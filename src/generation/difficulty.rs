//! # Difficulty Profiles
//!
//! Static spawn-rate table keyed by difficulty.

use crate::DungeonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty setting of a generated dungeon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Per-position spawn probabilities for one difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnProfile {
    /// Probability (0-1] that a position gets an enemy
    pub enemy_rate: f64,
    /// Probability (0-1] that a free position gets an item
    pub item_rate: f64,
}

const EASY_PROFILE: SpawnProfile = SpawnProfile {
    enemy_rate: 0.6,
    item_rate: 0.3,
};

const MEDIUM_PROFILE: SpawnProfile = SpawnProfile {
    enemy_rate: 0.7,
    item_rate: 0.2,
};

const HARD_PROFILE: SpawnProfile = SpawnProfile {
    enemy_rate: 0.8,
    item_rate: 0.1,
};

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Spawn rates for this difficulty.
    ///
    /// # Examples
    ///
    /// ```
    /// use brc_dungeon::Difficulty;
    ///
    /// let hard = Difficulty::Hard.profile();
    /// let easy = Difficulty::Easy.profile();
    /// assert!(hard.enemy_rate > easy.enemy_rate);
    /// assert!(hard.item_rate < easy.item_rate);
    /// ```
    pub const fn profile(self) -> SpawnProfile {
        match self {
            Difficulty::Easy => EASY_PROFILE,
            Difficulty::Medium => MEDIUM_PROFILE,
            Difficulty::Hard => HARD_PROFILE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DungeonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DungeonError::InvalidDifficulty(s.to_string())),
        }
    }
}
