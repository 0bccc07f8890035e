use crate::club::Team;
use crate::error::{LeagueError, LeagueResult};
use crate::league::{LeagueTable, Standing};
use crate::r#match::{Match, MatchSimulator};
use log::debug;
use rand::Rng;
use std::collections::HashMap;

/// Projects the end-of-season table by playing out every unplayed fixture
/// once on private copies of the team records.
pub struct TablePredictor;

impl TablePredictor {
    pub fn predict<R: Rng + ?Sized>(
        teams: &[Team],
        unplayed: &[Match],
        rng: &mut R,
    ) -> LeagueResult<Vec<Standing>> {
        let mut projected: HashMap<u32, Team> = teams.iter().map(|team| (team.id, team.clone())).collect();

        let mut simulated = 0;

        for fixture in unplayed.iter().filter(|fixture| !fixture.is_played()) {
            if fixture.home_team_id == fixture.away_team_id {
                return Err(LeagueError::Validation(format!(
                    "match {} pairs team {} with itself",
                    fixture.id, fixture.home_team_id
                )));
            }

            let home = Self::take(&mut projected, fixture.home_team_id)?;
            let away = Self::take(&mut projected, fixture.away_team_id)?;

            let result = MatchSimulator::simulate(&home, &away, rng);
            let (home, away) = LeagueTable::apply_result(home, away, &result)?;

            projected.insert(home.id, home);
            projected.insert(away.id, away);

            simulated += 1;
        }

        debug!("prediction: {} fixtures projected for {} teams", simulated, projected.len());

        let projected: Vec<Team> = projected.into_values().collect();

        Ok(LeagueTable::from_teams(&projected).into_rows())
    }

    fn take(projected: &mut HashMap<u32, Team>, team_id: u32) -> LeagueResult<Team> {
        projected.remove(&team_id).ok_or(LeagueError::NotFound {
            entity: "team",
            id: team_id,
        })
    }
}
