use crate::loaders::DatabaseEntity;
use crate::stores::{MemoryLeagueStore, MemoryMatchStore, MemoryTeamStore};
use footballsim_core::{League, LeagueError, LeagueResult, ScheduleGenerator, Team};
use log::info;
use std::collections::HashSet;

/// Stores seeded with a fresh season: every team at zero, the full
/// fixture list unplayed and the pointer on week 1.
pub struct SimulatorData {
    pub teams: MemoryTeamStore,
    pub matches: MemoryMatchStore,
    pub league: MemoryLeagueStore,
}

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(data: &DatabaseEntity) -> LeagueResult<SimulatorData> {
        let teams = Self::generate_teams(data)?;

        let fixtures = ScheduleGenerator::generate(&teams)?;
        let total_weeks = ScheduleGenerator::total_weeks(teams.len());

        let league = League::new(data.id, data.name.clone(), data.season.clone(), total_weeks);

        info!(
            "🏆 {} {} generated: {} teams, {} fixtures over {} weeks",
            league.name,
            league.season,
            teams.len(),
            fixtures.len(),
            total_weeks
        );

        Ok(SimulatorData {
            teams: MemoryTeamStore::new(teams),
            matches: MemoryMatchStore::new(fixtures),
            league: MemoryLeagueStore::new(league),
        })
    }

    fn generate_teams(data: &DatabaseEntity) -> LeagueResult<Vec<Team>> {
        let mut seen = HashSet::with_capacity(data.teams.len());
        if let Some(duplicate) = data.teams.iter().find(|team| !seen.insert(team.id)) {
            return Err(LeagueError::Validation(format!("team id {} is used twice", duplicate.id)));
        }

        data.teams
            .iter()
            .map(|team| {
                Team::builder()
                    .id(team.id)
                    .name(team.name.clone())
                    .strength(team.strength)
                    .build()
            })
            .collect()
    }
}
