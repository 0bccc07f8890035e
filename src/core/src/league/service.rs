use crate::club::{Strength, Team};
use crate::error::{LeagueError, LeagueResult, StoreContext};
use crate::league::{League, LeagueTable, Standing, TablePredictor, WeekProgression};
use crate::r#match::{Match, MatchScore, MatchSimulator};
use crate::store::{LeagueStore, MatchStore, TeamStore};
use log::{info, warn};
use rand::Rng;
use serde::Serialize;

pub const DEFAULT_PREDICTION_MIN_WEEK: u8 = 4;
/// Week 1 has no results to project from, whatever the settings say.
pub const EARLIEST_PREDICTION_WEEK: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSettings {
    /// Predictions open once the season pointer reaches this week.
    pub prediction_min_week: u8,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        ServiceSettings {
            prediction_min_week: DEFAULT_PREDICTION_MIN_WEEK,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeagueTableView {
    pub standings: Vec<Standing>,
    pub current_week: u8,
    pub total_weeks: u8,
    pub is_completed: bool,
}

/// Operations the host service calls. Owns the stores; anything taking
/// `&self` is read-only by construction.
pub struct LeagueService<T, M, L>
where
    T: TeamStore,
    M: MatchStore,
    L: LeagueStore,
{
    teams: T,
    matches: M,
    leagues: L,
    settings: ServiceSettings,
}

impl<T, M, L> LeagueService<T, M, L>
where
    T: TeamStore,
    M: MatchStore,
    L: LeagueStore,
{
    pub fn new(teams: T, matches: M, leagues: L, settings: ServiceSettings) -> Self {
        LeagueService {
            teams,
            matches,
            leagues,
            settings,
        }
    }

    pub fn teams(&self) -> &T {
        &self.teams
    }

    pub fn matches(&self) -> &M {
        &self.matches
    }

    pub fn leagues(&self) -> &L {
        &self.leagues
    }

    pub fn settings(&self) -> ServiceSettings {
        self.settings
    }

    fn progression(&mut self) -> WeekProgression<'_, T, M, L> {
        WeekProgression::new(&mut self.teams, &mut self.matches, &mut self.leagues)
    }

    // ========== QUERIES ==========

    pub fn league(&self) -> LeagueResult<League> {
        self.leagues.current().with_context(|| "loading league")
    }

    pub fn all_teams(&self) -> LeagueResult<Vec<Team>> {
        self.teams.all().with_context(|| "loading teams")
    }

    pub fn team(&self, team_id: u32) -> LeagueResult<Team> {
        self.teams
            .by_id(team_id)
            .with_context(|| format!("loading team {}", team_id))
    }

    pub fn fixtures(&self) -> LeagueResult<Vec<Match>> {
        self.matches.all().with_context(|| "loading matches")
    }

    pub fn fixtures_of_week(&self, week: u8) -> LeagueResult<Vec<Match>> {
        self.league()?.validate_week(week)?;

        self.matches
            .by_week(week)
            .with_context(|| format!("loading fixtures of week {}", week))
    }

    // ========== SIMULATION ==========

    /// One-off match between two stored teams. Nothing is recorded.
    pub fn simulate_match<R: Rng + ?Sized>(&self, home_id: u32, away_id: u32, rng: &mut R) -> LeagueResult<Match> {
        if home_id == away_id {
            return Err(LeagueError::Validation(format!(
                "team {} cannot play itself",
                home_id
            )));
        }

        let home = self.team(home_id)?;
        let away = self.team(away_id)?;

        Ok(MatchSimulator::simulate(&home, &away, rng))
    }

    pub fn simulate_week<R: Rng + ?Sized>(&mut self, week: u8, rng: &mut R) -> LeagueResult<Vec<Match>> {
        self.progression().simulate_week(week, rng)
    }

    pub fn simulate_remaining<R: Rng + ?Sized>(&mut self, rng: &mut R) -> LeagueResult<Vec<Match>> {
        self.progression().simulate_remaining(rng)
    }

    pub fn edit_result(&mut self, match_id: u32, home_goals: u8, away_goals: u8) -> LeagueResult<Match> {
        self.progression()
            .edit_result(match_id, MatchScore::new(home_goals, away_goals))
    }

    pub fn reset(&mut self) -> LeagueResult<League> {
        self.progression().reset()
    }

    // ========== STANDINGS ==========

    pub fn table(&self) -> LeagueResult<LeagueTableView> {
        let league = self.league()?;
        let teams = self.all_teams()?;

        Ok(LeagueTableView {
            standings: LeagueTable::from_teams(&teams).into_rows(),
            current_week: league.current_week,
            total_weeks: league.total_weeks,
            is_completed: league.is_completed,
        })
    }

    /// Projected final table. Refused until enough of the season has been
    /// played for the current records to mean something: never in week 1,
    /// never before a single fixture is played.
    pub fn predict_final_table<R: Rng + ?Sized>(&self, rng: &mut R) -> LeagueResult<Vec<Standing>> {
        let league = self.leagues.current().with_context(|| "loading league for prediction")?;
        let opens_at = self.settings.prediction_min_week.max(EARLIEST_PREDICTION_WEEK);

        if !league.is_completed && league.current_week < opens_at {
            warn!(
                "prediction requested in week {}, available from week {}",
                league.current_week, opens_at
            );
            return Err(LeagueError::Precondition(format!(
                "predictions are only available from week {}",
                opens_at
            )));
        }

        let teams = self.teams.all().with_context(|| "loading teams for prediction")?;
        let fixtures = self.matches.all().with_context(|| "loading matches for prediction")?;
        let unplayed = self
            .matches
            .unplayed()
            .with_context(|| "loading unplayed matches for prediction")?;

        if !league.is_completed && unplayed.len() == fixtures.len() {
            warn!("prediction requested in week {} before any match was played", league.current_week);
            return Err(LeagueError::Precondition(
                "predictions need at least one played match".to_string(),
            ));
        }

        TablePredictor::predict(&teams, &unplayed, rng)
    }

    // ========== TEAMS ==========

    /// Renames a team and/or changes its strength. The record itself is not
    /// writable; fixtures pick up a new name.
    pub fn update_team(&mut self, team_id: u32, name: Option<String>, strength: Option<u8>) -> LeagueResult<Team> {
        let mut team = self.team(team_id)?;

        if let Some(strength) = strength {
            team.strength = Strength::new(strength)?;
        }

        let renamed = match name {
            Some(name) if name.trim().is_empty() => {
                return Err(LeagueError::Validation("name must not be empty".to_string()));
            }
            Some(name) if name != team.name => {
                team.name = name;
                true
            }
            _ => false,
        };

        self.teams
            .update(&team)
            .with_context(|| format!("saving team {}", team_id))?;

        if renamed {
            self.rename_in_fixtures(&team)?;
        }

        info!("team {} updated: {} (strength {})", team.id, team.name, team.strength);

        Ok(team)
    }

    fn rename_in_fixtures(&mut self, team: &Team) -> LeagueResult<()> {
        let fixtures = self.matches.all().with_context(|| "loading matches for rename")?;

        for mut fixture in fixtures.into_iter().filter(|fixture| fixture.involves(team.id)) {
            if fixture.home_team_id == team.id {
                fixture.home_team_name = team.name.clone();
            } else {
                fixture.away_team_name = team.name.clone();
            }

            self.matches
                .update(&fixture)
                .with_context(|| format!("renaming team {} in match {}", team.id, fixture.id))?;
        }

        Ok(())
    }
}
