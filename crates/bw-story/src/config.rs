//! Session configuration and difficulty presets.

use std::fmt;
use std::str::FromStr;

/// Difficulty presets scaling starting health and incoming damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// More health, less damage.
    Easy,
    /// The balanced baseline.
    #[default]
    Normal,
    /// Less health, more damage.
    Hard,
}

impl Difficulty {
    /// Starting (and maximum) health for this difficulty.
    pub fn max_health(&self) -> u32 {
        match self {
            Difficulty::Easy => 150,
            Difficulty::Normal => 100,
            Difficulty::Hard => 75,
        }
    }

    /// Multiplier applied to every damage amount the player takes.
    pub fn damage_multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.5,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty: {other} (expected easy, normal, or hard)"
            )),
        }
    }
}

/// Configuration for a story session.
#[derive(Debug, Clone)]
pub struct StoryConfig {
    /// Starting and maximum player health.
    pub max_health: u32,
    /// Multiplier applied to damage amounts, rounded to the nearest point.
    pub damage_multiplier: f64,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::Normal)
    }
}

impl StoryConfig {
    /// Build the configuration for a difficulty preset.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            max_health: difficulty.max_health(),
            damage_multiplier: difficulty.damage_multiplier(),
        }
    }

    /// Set the starting health (minimum 1).
    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health.max(1);
        self
    }

    /// Set the damage multiplier (negative values are treated as zero).
    pub fn with_damage_multiplier(mut self, multiplier: f64) -> Self {
        self.damage_multiplier = multiplier.max(0.0);
        self
    }

    /// Scale a base damage amount by the configured multiplier.
    pub fn scale_damage(&self, base: u32) -> u32 {
        (base as f64 * self.damage_multiplier).round() as u32
    }
}
