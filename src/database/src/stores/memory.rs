use footballsim_core::{League, LeagueStore, Match, MatchStore, StoreError, StoreResult, Team, TeamStore};
use std::collections::BTreeMap;

/// Team records kept in process memory, ordered by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryTeamStore {
    teams: BTreeMap<u32, Team>,
}

impl MemoryTeamStore {
    pub fn new(teams: Vec<Team>) -> Self {
        MemoryTeamStore {
            teams: teams.into_iter().map(|team| (team.id, team)).collect(),
        }
    }
}

impl TeamStore for MemoryTeamStore {
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
        match self.teams.get_mut(&team.id) {
            Some(stored) => {
                *stored = team.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: "team",
                id: team.id,
            }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryMatchStore {
    matches: BTreeMap<u32, Match>,
}

impl MemoryMatchStore {
    pub fn new(matches: Vec<Match>) -> Self {
        MemoryMatchStore {
            matches: matches.into_iter().map(|fixture| (fixture.id, fixture)).collect(),
        }
    }
}

impl MatchStore for MemoryMatchStore {
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
        Ok(self
            .matches
            .values()
            .filter(|fixture| fixture.week == week)
            .cloned()
            .collect())
    }

    fn unplayed(&self) -> StoreResult<Vec<Match>> {
        let mut unplayed: Vec<Match> = self
            .matches
            .values()
            .filter(|fixture| !fixture.is_played())
            .cloned()
            .collect();

        unplayed.sort_by_key(|fixture| (fixture.week, fixture.id));

        Ok(unplayed)
    }

    fn update(&mut self, fixture: &Match) -> StoreResult<()> {
        match self.matches.get_mut(&fixture.id) {
            Some(stored) => {
                *stored = fixture.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: "match",
                id: fixture.id,
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemoryLeagueStore {
    league: League,
}

impl MemoryLeagueStore {
    pub fn new(league: League) -> Self {
        MemoryLeagueStore { league }
    }
}

impl LeagueStore for MemoryLeagueStore {
    fn current(&self) -> StoreResult<League> {
        Ok(self.league.clone())
    }

    fn update_week(&mut self, week: u8) -> StoreResult<()> {
        self.league.current_week = week;
        Ok(())
    }

    fn mark_completed(&mut self) -> StoreResult<()> {
        self.league.is_completed = true;
        Ok(())
    }

    fn update(&mut self, league: &League) -> StoreResult<()> {
        if league.id != self.league.id {
            return Err(StoreError::NotFound {
                entity: "league",
                id: league.id,
            });
        }

        self.league = league.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use footballsim_core::{MatchScore, Strength};

    fn fixtures() -> Vec<Match> {
        vec![
            Match::scheduled(3, 2, 1, "A".to_string(), 2, "B".to_string()),
            Match::scheduled(1, 1, 1, "A".to_string(), 2, "B".to_string()),
            Match::scheduled(2, 1, 3, "C".to_string(), 4, "D".to_string()),
        ]
    }

    #[test]
    fn test_team_store_round_trip() {
        let mut store = MemoryTeamStore::new(vec![Team::new(1, "A".to_string(), Strength::new(5).unwrap())]);

        let mut team = store.by_id(1).unwrap();
        team.statistics.won = 1;
        store.update(&team).unwrap();

        assert_eq!(store.by_id(1).unwrap().statistics.won, 1);
        assert_eq!(store.by_id(2), Err(StoreError::NotFound { entity: "team", id: 2 }));
    }

    #[test]
    fn test_update_of_unknown_team_fails() {
        let mut store = MemoryTeamStore::default();
        let team = Team::new(9, "Ghost".to_string(), Strength::new(5).unwrap());

        assert!(store.update(&team).is_err());
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn test_match_queries_are_ordered() {
        let mut store = MemoryMatchStore::new(fixtures());

        let week_one: Vec<u32> = store.by_week(1).unwrap().iter().map(|m| m.id).collect();
        assert_eq!(week_one, vec![1, 2]);

        let mut played = store.by_id(1).unwrap();
        played.score = Some(MatchScore::new(1, 0));
        store.update(&played).unwrap();

        let unplayed: Vec<u32> = store.unplayed().unwrap().iter().map(|m| m.id).collect();
        assert_eq!(unplayed, vec![2, 3]);
    }

    #[test]
    fn test_league_store_pointer() {
        let mut store = MemoryLeagueStore::new(League::new(1, "L".to_string(), "2024/25".to_string(), 6));

        store.update_week(3).unwrap();
        assert_eq!(store.current_week().unwrap(), 3);

        store.mark_completed().unwrap();
        assert!(store.current().unwrap().is_completed);

        let other = League::new(2, "Other".to_string(), "2024/25".to_string(), 6);
        assert!(store.update(&other).is_err());
    }
}
