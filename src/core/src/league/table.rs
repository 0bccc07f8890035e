use crate::club::{Team, TeamStatistics};
use crate::error::{LeagueError, LeagueResult};
use crate::r#match::{Match, MatchOutcome, MatchScore};
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Ordering;

/// One ranked row of a live or projected table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub position: u16,
    pub team_id: u32,
    pub team_name: String,
    pub played: u16,
    pub won: u16,
    pub drawn: u16,
    pub lost: u16,
    pub goals_for: u16,
    pub goals_against: u16,
    pub goal_difference: i32,
    pub points: u32,
}

impl Standing {
    fn from_team(team: &Team) -> Self {
        let stats = &team.statistics;

        Standing {
            position: 0,
            team_id: team.id,
            team_name: team.name.clone(),
            played: stats.played,
            won: stats.won,
            drawn: stats.drawn,
            lost: stats.lost,
            goals_for: stats.goals_for,
            goals_against: stats.goals_against,
            goal_difference: stats.goal_difference(),
            points: stats.points(),
        }
    }
}

/// Ranked standings. Built fresh from team records on every read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeagueTable {
    rows: Vec<Standing>,
}

impl LeagueTable {
    pub fn from_teams(teams: &[Team]) -> Self {
        let rows = teams
            .iter()
            .map(Standing::from_team)
            .sorted_by(Self::compare)
            .enumerate()
            .map(|(idx, mut row)| {
                row.position = idx as u16 + 1;
                row
            })
            .collect();

        LeagueTable { rows }
    }

    pub fn get(&self) -> &[Standing] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Standing> {
        self.rows
    }

    pub fn leader(&self) -> Option<&Standing> {
        self.rows.first()
    }

    /// Points, then goal difference, then goals scored, all descending.
    /// Rows level on all three are ordered by ascending team id.
    pub fn compare(a: &Standing, b: &Standing) -> Ordering {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.team_id.cmp(&b.team_id))
    }

    // ========== AGGREGATION ==========

    /// Folds a played fixture into both team records and returns them.
    pub fn apply_result(mut home: Team, mut away: Team, fixture: &Match) -> LeagueResult<(Team, Team)> {
        let score = Self::checked_score(&home, &away, fixture)?;

        Self::add(&mut home.statistics, score.home_goals, score.away_goals);
        Self::add(&mut away.statistics, score.away_goals, score.home_goals);

        match score.outcome() {
            MatchOutcome::HomeWin => {
                home.statistics.won += 1;
                away.statistics.lost += 1;
            }
            MatchOutcome::AwayWin => {
                home.statistics.lost += 1;
                away.statistics.won += 1;
            }
            MatchOutcome::Draw => {
                home.statistics.drawn += 1;
                away.statistics.drawn += 1;
            }
        }

        Ok((home, away))
    }

    /// Exact inverse of [`LeagueTable::apply_result`] for the score currently
    /// stored on `fixture`. Records that cannot contain that result are
    /// rejected rather than wrapped around.
    pub fn revert_result(mut home: Team, mut away: Team, fixture: &Match) -> LeagueResult<(Team, Team)> {
        let score = Self::checked_score(&home, &away, fixture)?;
        let inconsistent = || {
            LeagueError::Precondition(format!(
                "records of {} and {} do not contain match {}",
                home.name, away.name, fixture.id
            ))
        };

        let (home_won, home_drawn, home_lost) = match score.outcome() {
            MatchOutcome::HomeWin => (1, 0, 0),
            MatchOutcome::AwayWin => (0, 0, 1),
            MatchOutcome::Draw => (0, 1, 0),
        };

        let home_stats = Self::subtract(
            &home.statistics,
            score.home_goals,
            score.away_goals,
            (home_won, home_drawn, home_lost),
        )
        .ok_or_else(inconsistent)?;

        let away_stats = Self::subtract(
            &away.statistics,
            score.away_goals,
            score.home_goals,
            (home_lost, home_drawn, home_won),
        )
        .ok_or_else(inconsistent)?;

        home.statistics = home_stats;
        away.statistics = away_stats;

        Ok((home, away))
    }

    fn checked_score(home: &Team, away: &Team, fixture: &Match) -> LeagueResult<MatchScore> {
        if fixture.home_team_id != home.id || fixture.away_team_id != away.id {
            return Err(LeagueError::Validation(format!(
                "match {} is {} vs {}, got teams {} and {}",
                fixture.id, fixture.home_team_id, fixture.away_team_id, home.id, away.id
            )));
        }

        fixture.score.ok_or_else(|| {
            LeagueError::Precondition(format!("match {} has not been played", fixture.id))
        })
    }

    fn add(stats: &mut TeamStatistics, scored: u8, conceded: u8) {
        stats.played += 1;
        stats.goals_for += scored as u16;
        stats.goals_against += conceded as u16;
    }

    fn subtract(
        stats: &TeamStatistics,
        scored: u8,
        conceded: u8,
        (won, drawn, lost): (u16, u16, u16),
    ) -> Option<TeamStatistics> {
        Some(TeamStatistics {
            played: stats.played.checked_sub(1)?,
            won: stats.won.checked_sub(won)?,
            drawn: stats.drawn.checked_sub(drawn)?,
            lost: stats.lost.checked_sub(lost)?,
            goals_for: stats.goals_for.checked_sub(scored as u16)?,
            goals_against: stats.goals_against.checked_sub(conceded as u16)?,
        })
    }
}
