use crate::club::Team;
use crate::error::{LeagueError, LeagueResult, StoreContext};
use crate::league::{League, LeagueTable, WeekTransition};
use crate::r#match::{Match, MatchScore, MatchSimulator};
use crate::store::{LeagueStore, MatchStore, TeamStore};
use chrono::Utc;
use log::{debug, info, warn};
use rand::Rng;

/// Drives the season forward one week at a time and owns every write to
/// team records, fixtures and the week pointer.
///
/// A failing store call aborts the run. Fixtures persisted before the
/// failure stay persisted: progress within a week is at least partial, not
/// atomic.
pub struct WeekProgression<'s, T, M, L>
where
    T: TeamStore,
    M: MatchStore,
    L: LeagueStore,
{
    teams: &'s mut T,
    matches: &'s mut M,
    leagues: &'s mut L,
}

impl<'s, T, M, L> WeekProgression<'s, T, M, L>
where
    T: TeamStore,
    M: MatchStore,
    L: LeagueStore,
{
    pub fn new(teams: &'s mut T, matches: &'s mut M, leagues: &'s mut L) -> Self {
        WeekProgression {
            teams,
            matches,
            leagues,
        }
    }

    /// Plays every fixture of `week` that is not final yet and moves the
    /// season on when `week` is the current one. Returns the fixtures played
    /// by this call.
    pub fn simulate_week<R: Rng + ?Sized>(&mut self, week: u8, rng: &mut R) -> LeagueResult<Vec<Match>> {
        let league = self.current_league(week)?;
        league.validate_week(week)?;

        let fixtures = self
            .matches
            .by_week(week)
            .with_context(|| format!("loading fixtures of week {}", week))?;

        info!("⚽ simulating week {} of {} ({} fixtures)", week, league.total_weeks, fixtures.len());

        let mut played = Vec::with_capacity(fixtures.len());

        for fixture in fixtures {
            if fixture.is_final() {
                debug!(
                    "skipping already played match {}: {} vs {}",
                    fixture.id, fixture.home_team_name, fixture.away_team_name
                );
                continue;
            }

            played.push(self.play_fixture(fixture, rng)?);
        }

        self.finish_week(week)?;

        info!("week {}: {} matches simulated", week, played.len());

        Ok(played)
    }

    /// Runs [`Self::simulate_week`] for the current week and every week after
    /// it. A completed season yields no matches.
    pub fn simulate_remaining<R: Rng + ?Sized>(&mut self, rng: &mut R) -> LeagueResult<Vec<Match>> {
        let league = self
            .leagues
            .current()
            .with_context(|| "loading league for remaining weeks")?;

        let mut played = Vec::new();

        for week in league.remaining_weeks() {
            played.extend(self.simulate_week(week, rng)?);
        }

        info!("remaining season simulated: {} matches", played.len());

        Ok(played)
    }

    /// Overwrites the score of a fixture by hand. A previous result is taken
    /// out of both team records before the new one goes in, and the fixture
    /// is flagged as edited.
    pub fn edit_result(&mut self, match_id: u32, score: MatchScore) -> LeagueResult<Match> {
        let mut fixture = self
            .matches
            .by_id(match_id)
            .with_context(|| format!("loading match {}", match_id))?;

        let (home, away) = self.load_teams(&fixture)?;

        let (home, away) = if fixture.is_played() {
            LeagueTable::revert_result(home, away, &fixture)?
        } else {
            (home, away)
        };

        fixture.score = Some(score);
        fixture.is_edited = true;
        if fixture.played_at.is_none() {
            fixture.played_at = Some(Utc::now());
        }

        let (home, away) = LeagueTable::apply_result(home, away, &fixture)?;

        self.persist(&fixture, &home, &away)?;

        info!(
            "result edited: {} {} - {} {} (week {})",
            fixture.home_team_name, score.home_goals, score.away_goals, fixture.away_team_name, fixture.week
        );

        Ok(fixture)
    }

    /// Back to the start of the season: empty records, unplayed fixtures,
    /// week 1.
    pub fn reset(&mut self) -> LeagueResult<League> {
        for mut team in self.teams.all().with_context(|| "loading teams for reset")? {
            team.reset_statistics();
            self.teams
                .update(&team)
                .with_context(|| format!("resetting team {}", team.id))?;
        }

        for mut fixture in self.matches.all().with_context(|| "loading matches for reset")? {
            if !fixture.is_played() && !fixture.is_edited {
                continue;
            }

            fixture.clear();
            self.matches
                .update(&fixture)
                .with_context(|| format!("resetting match {}", fixture.id))?;
        }

        let mut league = self.leagues.current().with_context(|| "loading league for reset")?;
        league.restart();
        self.leagues.update(&league).with_context(|| "saving reset league")?;

        warn!("league {} reset to week 1", league.name);

        Ok(league)
    }

    // ========== FIXTURE PROCESSING ==========

    fn play_fixture<R: Rng + ?Sized>(&mut self, mut fixture: Match, rng: &mut R) -> LeagueResult<Match> {
        let (home, away) = self.load_teams(&fixture)?;

        // an edited fixture gets replayed; its hand-entered result comes out first
        let (home, away) = if fixture.is_played() {
            LeagueTable::revert_result(home, away, &fixture)?
        } else {
            (home, away)
        };

        let simulated = MatchSimulator::simulate(&home, &away, rng);

        fixture.score = simulated.score;
        fixture.played_at = simulated.played_at;

        let (home, away) = LeagueTable::apply_result(home, away, &fixture)?;

        self.persist(&fixture, &home, &away)?;

        Ok(fixture)
    }

    fn load_teams(&self, fixture: &Match) -> LeagueResult<(Team, Team)> {
        if fixture.home_team_id == fixture.away_team_id {
            return Err(LeagueError::Validation(format!(
                "match {} pairs team {} with itself",
                fixture.id, fixture.home_team_id
            )));
        }

        let home = self.teams.by_id(fixture.home_team_id).with_context(|| {
            format!("loading home team {} of match {}", fixture.home_team_id, fixture.id)
        })?;

        let away = self.teams.by_id(fixture.away_team_id).with_context(|| {
            format!("loading away team {} of match {}", fixture.away_team_id, fixture.id)
        })?;

        Ok((home, away))
    }

    fn persist(&mut self, fixture: &Match, home: &Team, away: &Team) -> LeagueResult<()> {
        self.matches
            .update(fixture)
            .with_context(|| format!("saving match {} (week {})", fixture.id, fixture.week))?;

        self.teams
            .update(home)
            .with_context(|| format!("saving team {} after match {}", home.id, fixture.id))?;

        self.teams
            .update(away)
            .with_context(|| format!("saving team {} after match {}", away.id, fixture.id))?;

        Ok(())
    }

    // ========== SEASON POINTER ==========

    fn current_league(&self, week: u8) -> LeagueResult<League> {
        self.leagues
            .current()
            .with_context(|| format!("loading league for week {}", week))
    }

    fn finish_week(&mut self, week: u8) -> LeagueResult<WeekTransition> {
        let league = self.current_league(week)?;
        let transition = league.transition_after(week);

        match transition {
            WeekTransition::Advance(next) => {
                info!("advancing {} to week {}", league.name, next);
                self.leagues
                    .update_week(next)
                    .with_context(|| format!("advancing to week {}", next))?;
            }
            WeekTransition::Complete => {
                info!("🏆 {} {} completed", league.name, league.season);
                self.leagues
                    .mark_completed()
                    .with_context(|| format!("completing season after week {}", week))?;
            }
            WeekTransition::Unchanged => {
                debug!(
                    "week {} is not the current week ({}), pointer unchanged",
                    week, league.current_week
                );
            }
        }

        Ok(transition)
    }
}
