//! Persistence contracts consumed by the core.
//!
//! The core never implements these; the host wires in whatever storage it
//! has. Reads borrow the store shared, writes need it exclusively, so code
//! holding only `&S` can never persist anything.

use crate::club::Team;
use crate::league::League;
use crate::r#match::Match;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: u32 },

    #[error("store backend failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub trait TeamStore {
    fn all(&self) -> StoreResult<Vec<Team>>;
    fn by_id(&self, id: u32) -> StoreResult<Team>;
    fn update(&mut self, team: &Team) -> StoreResult<()>;
}

pub trait MatchStore {
    fn all(&self) -> StoreResult<Vec<Match>>;
    fn by_id(&self, id: u32) -> StoreResult<Match>;
    /// Fixtures of one week, ordered by id.
    fn by_week(&self, week: u8) -> StoreResult<Vec<Match>>;
    /// Fixtures without a score, ordered by week then id.
    fn unplayed(&self) -> StoreResult<Vec<Match>>;
    fn update(&mut self, fixture: &Match) -> StoreResult<()>;
}

pub trait LeagueStore {
    fn current(&self) -> StoreResult<League>;

    fn current_week(&self) -> StoreResult<u8> {
        self.current().map(|league| league.current_week)
    }

    fn total_weeks(&self) -> StoreResult<u8> {
        self.current().map(|league| league.total_weeks)
    }

    fn update_week(&mut self, week: u8) -> StoreResult<()>;
    fn mark_completed(&mut self) -> StoreResult<()>;
    fn update(&mut self, league: &League) -> StoreResult<()>;
}
