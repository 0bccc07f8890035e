mod edit;
mod list;
pub mod routes;
mod simulate;

pub use routes::match_routes;

use chrono::{DateTime, Utc};
use footballsim_core::{League, Match};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MatchDto {
    pub id: u32,
    pub week: u8,
    pub home_team_id: u32,
    pub home_team_name: String,
    pub away_team_id: u32,
    pub away_team_name: String,
    pub home_goals: Option<u8>,
    pub away_goals: Option<u8>,
    pub played: bool,
    pub is_edited: bool,
    pub played_at: Option<DateTime<Utc>>,
}

impl From<&Match> for MatchDto {
    fn from(fixture: &Match) -> Self {
        MatchDto {
            id: fixture.id,
            week: fixture.week,
            home_team_id: fixture.home_team_id,
            home_team_name: fixture.home_team_name.clone(),
            away_team_id: fixture.away_team_id,
            away_team_name: fixture.away_team_name.clone(),
            home_goals: fixture.score.map(|score| score.home_goals),
            away_goals: fixture.score.map(|score| score.away_goals),
            played: fixture.is_played(),
            is_edited: fixture.is_edited,
            played_at: fixture.played_at,
        }
    }
}

/// Fixtures played by a simulation call and the season state afterwards.
#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    pub matches: Vec<MatchDto>,
    pub league: League,
}

impl SimulationResponse {
    pub fn new(played: &[Match], league: League) -> Self {
        SimulationResponse {
            matches: played.iter().map(MatchDto::from).collect(),
            league,
        }
    }
}
