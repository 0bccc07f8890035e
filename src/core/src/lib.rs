pub mod club;
pub mod error;
pub mod league;
pub mod r#match;
pub mod store;
pub mod utils;

#[cfg(test)]
mod testing;

pub use club::{Strength, Team, TeamBuilder, TeamStatistics};
pub use error::{LeagueError, LeagueResult, StoreContext};
pub use league::{
    League, LeagueService, LeagueTable, LeagueTableView, ScheduleGenerator, ServiceSettings,
    Standing, TablePredictor, WeekProgression, WeekTransition,
};
pub use r#match::{GoalGenerator, Match, MatchOutcome, MatchScore, MatchSimulator};
pub use store::{LeagueStore, MatchStore, StoreError, StoreResult, TeamStore};
pub use utils::*;
