use crate::club::Team;
use crate::r#match::{GoalGenerator, Match, MatchScore};
use chrono::Utc;
use log::debug;
use rand::Rng;

/// Id and week carried by matches that are not part of the schedule.
pub const UNSCHEDULED: u32 = 0;

pub struct MatchSimulator;

impl MatchSimulator {
    /// Plays `home` against `away`. The teams are only read; folding the
    /// result into their records is the caller's job.
    pub fn simulate<R: Rng + ?Sized>(home: &Team, away: &Team, rng: &mut R) -> Match {
        let score = Self::play(home, away, rng);

        let mut result = Match::scheduled(
            UNSCHEDULED,
            UNSCHEDULED as u8,
            home.id,
            home.name.clone(),
            away.id,
            away.name.clone(),
        );

        result.record(score, Utc::now());

        result
    }

    pub fn play<R: Rng + ?Sized>(home: &Team, away: &Team, rng: &mut R) -> MatchScore {
        let home_goals = GoalGenerator::goals(home.strength, true, rng);
        let away_goals = GoalGenerator::goals(away.strength, false, rng);

        debug!(
            "simulated: {} {} - {} {}",
            home.name, home_goals, away_goals, away.name
        );

        MatchScore::new(home_goals, away_goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::Strength;
    use crate::r#match::SCORING_OPPORTUNITIES;
    use crate::testing::FixedRoll;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn team(id: u32, name: &str, strength: u8) -> Team {
        Team::new(id, name.to_string(), Strength::new(strength).unwrap())
    }

    #[test]
    fn test_strong_home_against_weak_away() {
        let home = team(1, "Manchester City", 10);
        let away = team(2, "Sheffield United", 1);

        let result = MatchSimulator::simulate(&home, &away, &mut FixedRoll::half());

        assert!(result.is_played());
        assert!(result.played_at.is_some());
        assert_eq!(result.score, Some(MatchScore::new(5, 0)));
        assert_eq!(result.home_team_id, 1);
        assert_eq!(result.away_team_id, 2);
        assert_eq!(result.home_team_name, "Manchester City");
    }

    #[test]
    fn test_goals_in_range_and_teams_untouched() {
        let home = team(1, "Chelsea", 7);
        let away = team(2, "Arsenal", 8);
        let (home_before, away_before) = (home.clone(), away.clone());
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..100 {
            let result = MatchSimulator::simulate(&home, &away, &mut rng);
            let score = result.score.unwrap();

            assert!(score.home_goals <= SCORING_OPPORTUNITIES);
            assert!(score.away_goals <= SCORING_OPPORTUNITIES);
        }

        assert_eq!(home, home_before);
        assert_eq!(away, away_before);
    }
}
