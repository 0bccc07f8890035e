use crate::club::team::builder::TeamBuilder;
use crate::error::{LeagueError, LeagueResult};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_STRENGTH: u8 = 1;
pub const MAX_STRENGTH: u8 = 10;

/// Team rating on a 1..=10 scale, the only input to goal probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Strength(u8);

impl Strength {
    pub fn new(value: u8) -> LeagueResult<Self> {
        if !(MIN_STRENGTH..=MAX_STRENGTH).contains(&value) {
            return Err(LeagueError::Validation(format!(
                "strength must be between {} and {}, got {}",
                MIN_STRENGTH, MAX_STRENGTH, value
            )));
        }

        Ok(Strength(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Strength {
    type Error = LeagueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Strength::new(value)
    }
}

impl From<Strength> for u8 {
    fn from(strength: Strength) -> Self {
        strength.0
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cumulative league record of a team.
///
/// Points and goal difference are derived on read, there is nothing to
/// keep in sync when the counters change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStatistics {
    pub played: u16,
    pub won: u16,
    pub drawn: u16,
    pub lost: u16,
    pub goals_for: u16,
    pub goals_against: u16,
}

impl TeamStatistics {
    #[inline]
    pub fn points(&self) -> u32 {
        3 * self.won as u32 + self.drawn as u32
    }

    #[inline]
    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub strength: Strength,
    pub statistics: TeamStatistics,
}

impl Team {
    pub fn new(id: u32, name: String, strength: Strength) -> Self {
        Team {
            id,
            name,
            strength,
            statistics: TeamStatistics::default(),
        }
    }

    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    pub fn points(&self) -> u32 {
        self.statistics.points()
    }

    pub fn goal_difference(&self) -> i32 {
        self.statistics.goal_difference()
    }

    /// Clears the season record, keeping identity and strength.
    pub fn reset_statistics(&mut self) {
        self.statistics = TeamStatistics::default();
    }
}
