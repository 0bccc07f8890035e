mod get;
mod list;
pub mod routes;
mod update;

pub use routes::team_routes;

use footballsim_core::Team;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TeamDto {
    pub id: u32,
    pub name: String,
    pub strength: u8,
    pub played: u16,
    pub won: u16,
    pub drawn: u16,
    pub lost: u16,
    pub goals_for: u16,
    pub goals_against: u16,
    pub goal_difference: i32,
    pub points: u32,
}

impl From<&Team> for TeamDto {
    fn from(team: &Team) -> Self {
        let statistics = &team.statistics;

        TeamDto {
            id: team.id,
            name: team.name.clone(),
            strength: team.strength.value(),
            played: statistics.played,
            won: statistics.won,
            drawn: statistics.drawn,
            lost: statistics.lost,
            goals_for: statistics.goals_for,
            goals_against: statistics.goals_against,
            goal_difference: statistics.goal_difference(),
            points: statistics.points(),
        }
    }
}
