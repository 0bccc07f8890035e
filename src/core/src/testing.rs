//! Fixtures shared by the unit tests: a constant random source and stores
//! that count every write.

use crate::club::{Strength, Team};
use crate::league::{League, ScheduleGenerator};
use crate::r#match::Match;
use crate::store::{LeagueStore, MatchStore, StoreError, StoreResult, TeamStore};
use rand::RngCore;
use std::collections::BTreeMap;

/// Random source returning the same word forever. `half()` makes every
/// uniform `f64` draw exactly 0.5.
pub struct FixedRoll(u64);

impl FixedRoll {
    pub fn half() -> Self {
        FixedRoll(1 << 63)
    }
}

impl RngCore for FixedRoll {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let bytes = self.0.to_le_bytes();
        for (idx, byte) in dst.iter_mut().enumerate() {
            *byte = bytes[idx % bytes.len()];
        }
    }
}

#[derive(Default)]
pub struct RecordingTeams {
    pub teams: BTreeMap<u32, Team>,
    pub updates: usize,
    /// Writes of this team id fail with a backend error.
    pub fail_on: Option<u32>,
}

impl TeamStore for RecordingTeams {
    fn all(&self) -> StoreResult<Vec<Team>> {
        Ok(self.teams.values().cloned().collect())
    }

    fn by_id(&self, id: u32) -> StoreResult<Team> {
        self.teams
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { entity: "team", id })
    }

    fn update(&mut self, team: &Team) -> StoreResult<()> {
        if self.fail_on == Some(team.id) {
            return Err(StoreError::Backend("write timed out".to_string()));
        }

        self.updates += 1;
        self.teams.insert(team.id, team.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingMatches {
    pub matches: BTreeMap<u32, Match>,
    pub updates: usize,
    /// Writes of this match id fail with a backend error.
    pub fail_on: Option<u32>,
}

impl MatchStore for RecordingMatches {
    fn all(&self) -> StoreResult<Vec<Match>> {
        Ok(self.matches.values().cloned().collect())
    }

    fn by_id(&self, id: u32) -> StoreResult<Match> {
        self.matches
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { entity: "match", id })
    }

    fn by_week(&self, week: u8) -> StoreResult<Vec<Match>> {
        Ok(self.matches.values().filter(|m| m.week == week).cloned().collect())
    }

    fn unplayed(&self) -> StoreResult<Vec<Match>> {
        let mut unplayed: Vec<Match> = self.matches.values().filter(|m| !m.is_played()).cloned().collect();
        unplayed.sort_by_key(|m| (m.week, m.id));
        Ok(unplayed)
    }

    fn update(&mut self, fixture: &Match) -> StoreResult<()> {
        if self.fail_on == Some(fixture.id) {
            return Err(StoreError::Backend("connection reset".to_string()));
        }

        self.updates += 1;
        self.matches.insert(fixture.id, fixture.clone());
        Ok(())
    }
}

pub struct RecordingLeague {
    pub league: League,
    pub updates: usize,
}

impl LeagueStore for RecordingLeague {
    fn current(&self) -> StoreResult<League> {
        Ok(self.league.clone())
    }

    fn update_week(&mut self, week: u8) -> StoreResult<()> {
        self.updates += 1;
        self.league.current_week = week;
        Ok(())
    }

    fn mark_completed(&mut self) -> StoreResult<()> {
        self.updates += 1;
        self.league.is_completed = true;
        Ok(())
    }

    fn update(&mut self, league: &League) -> StoreResult<()> {
        self.updates += 1;
        self.league = league.clone();
        Ok(())
    }
}

pub struct TestStores {
    pub teams: RecordingTeams,
    pub matches: RecordingMatches,
    pub league: RecordingLeague,
}

impl TestStores {
    /// League of `strengths.len()` teams with a full double round robin.
    pub fn league(strengths: &[u8]) -> Self {
        let teams: Vec<Team> = strengths
            .iter()
            .enumerate()
            .map(|(idx, &strength)| {
                let id = idx as u32 + 1;
                Team::new(id, format!("Team {}", id), Strength::new(strength).unwrap())
            })
            .collect();

        let fixtures = ScheduleGenerator::generate(&teams).unwrap();
        let total_weeks = ScheduleGenerator::total_weeks(teams.len());

        TestStores {
            teams: RecordingTeams {
                teams: teams.into_iter().map(|t| (t.id, t)).collect(),
                updates: 0,
                fail_on: None,
            },
            matches: RecordingMatches {
                matches: fixtures.into_iter().map(|m| (m.id, m)).collect(),
                updates: 0,
                fail_on: None,
            },
            league: RecordingLeague {
                league: League::new(1, "Test League".to_string(), "2024/25".to_string(), total_weeks),
                updates: 0,
            },
        }
    }

    pub fn reset_counters(&mut self) {
        self.teams.updates = 0;
        self.matches.updates = 0;
        self.league.updates = 0;
    }

    pub fn total_writes(&self) -> usize {
        self.teams.updates + self.matches.updates + self.league.updates
    }
}
