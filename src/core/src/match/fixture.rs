use crate::r#match::MatchScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled fixture. A score is present exactly when the match has been
/// played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: u32,
    pub week: u8,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_team_name: String,
    pub away_team_name: String,
    pub score: Option<MatchScore>,
    pub is_edited: bool,
    pub played_at: Option<DateTime<Utc>>,
}

impl Match {
    pub fn scheduled(
        id: u32,
        week: u8,
        home_team_id: u32,
        home_team_name: String,
        away_team_id: u32,
        away_team_name: String,
    ) -> Self {
        Match {
            id,
            week,
            home_team_id,
            away_team_id,
            home_team_name,
            away_team_name,
            score: None,
            is_edited: false,
            played_at: None,
        }
    }

    #[inline]
    pub fn is_played(&self) -> bool {
        self.score.is_some()
    }

    /// Played fixtures that were not corrected by hand are final.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.is_played() && !self.is_edited
    }

    pub fn record(&mut self, score: MatchScore, played_at: DateTime<Utc>) {
        self.score = Some(score);
        self.played_at = Some(played_at);
    }

    /// Back to an unplayed fixture.
    pub fn clear(&mut self) {
        self.score = None;
        self.is_edited = false;
        self.played_at = None;
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}
