use crate::club::Team;
use crate::error::{LeagueError, LeagueResult};
use crate::r#match::Match;
use log::debug;

/// Largest field whose double round robin still fits a `u8` week number.
pub const MAX_TEAMS: usize = 128;

/// Double round-robin fixture list built with the circle method: every pair
/// meets once at each ground, the second half mirrors the first.
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    pub fn total_weeks(team_count: usize) -> u8 {
        let slots = team_count + team_count % 2;
        (2 * (slots.saturating_sub(1))) as u8
    }

    pub fn generate(teams: &[Team]) -> LeagueResult<Vec<Match>> {
        if teams.len() < 2 || teams.len() > MAX_TEAMS {
            return Err(LeagueError::Validation(format!(
                "a league needs between 2 and {} teams, got {}",
                MAX_TEAMS,
                teams.len()
            )));
        }

        let mut slots: Vec<Option<&Team>> = teams.iter().map(Some).collect();
        if slots.len() % 2 == 1 {
            slots.push(None);
        }

        let slot_count = slots.len();
        let rounds = slot_count - 1;

        let mut first_leg: Vec<Vec<(&Team, &Team)>> = Vec::with_capacity(rounds);

        for round in 0..rounds {
            let mut pairs = Vec::with_capacity(slot_count / 2);

            for idx in 0..slot_count / 2 {
                if let (Some(a), Some(b)) = (slots[idx], slots[slot_count - 1 - idx]) {
                    if (round + idx) % 2 == 0 {
                        pairs.push((a, b));
                    } else {
                        pairs.push((b, a));
                    }
                }
            }

            first_leg.push(pairs);
            slots[1..].rotate_right(1);
        }

        let second_leg = first_leg
            .iter()
            .map(|pairs| pairs.iter().map(|&(home, away)| (away, home)).collect::<Vec<_>>());

        let mut fixtures = Vec::with_capacity(rounds * slot_count);
        let mut next_id = 1u32;

        for (week_idx, pairs) in first_leg.iter().cloned().chain(second_leg).enumerate() {
            let week = week_idx as u8 + 1;

            for (home, away) in pairs {
                fixtures.push(Match::scheduled(
                    next_id,
                    week,
                    home.id,
                    home.name.clone(),
                    away.id,
                    away.name.clone(),
                ));
                next_id += 1;
            }
        }

        debug!(
            "generated {} fixtures over {} weeks for {} teams",
            fixtures.len(),
            Self::total_weeks(teams.len()),
            teams.len()
        );

        Ok(fixtures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::Strength;
    use std::collections::{HashMap, HashSet};

    fn teams(count: u32) -> Vec<Team> {
        (1..=count)
            .map(|id| Team::new(id, format!("Team {}", id), Strength::new(5).unwrap()))
            .collect()
    }

    #[test]
    fn test_total_weeks() {
        assert_eq!(ScheduleGenerator::total_weeks(4), 6);
        assert_eq!(ScheduleGenerator::total_weeks(5), 10);
        assert_eq!(ScheduleGenerator::total_weeks(20), 38);
    }

    #[test]
    fn test_rejects_tiny_league() {
        assert!(ScheduleGenerator::generate(&teams(1)).is_err());
    }

    #[test]
    fn test_every_pair_meets_home_and_away() {
        for count in [2, 4, 5, 6] {
            let teams = teams(count);
            let fixtures = ScheduleGenerator::generate(&teams).unwrap();

            let n = count as usize;
            assert_eq!(fixtures.len(), n * (n - 1));

            let pairs: HashSet<(u32, u32)> = fixtures
                .iter()
                .map(|f| (f.home_team_id, f.away_team_id))
                .collect();
            assert_eq!(pairs.len(), fixtures.len());
            assert!(pairs.iter().all(|(home, away)| home != away));

            let max_week = fixtures.iter().map(|f| f.week).max().unwrap();
            assert_eq!(max_week, ScheduleGenerator::total_weeks(n));
        }
    }

    #[test]
    fn test_nobody_plays_twice_in_a_week() {
        let fixtures = ScheduleGenerator::generate(&teams(6)).unwrap();

        let mut by_week: HashMap<u8, Vec<u32>> = HashMap::new();
        for fixture in &fixtures {
            let entry = by_week.entry(fixture.week).or_default();
            entry.push(fixture.home_team_id);
            entry.push(fixture.away_team_id);
        }

        for (_, team_ids) in by_week {
            let unique: HashSet<&u32> = team_ids.iter().collect();
            assert_eq!(unique.len(), team_ids.len());
            assert_eq!(team_ids.len(), 6);
        }
    }

    #[test]
    fn test_ids_follow_week_order() {
        let fixtures = ScheduleGenerator::generate(&teams(4)).unwrap();

        for window in fixtures.windows(2) {
            assert_eq!(window[1].id, window[0].id + 1);
            assert!(window[1].week >= window[0].week);
        }
        assert!(fixtures.iter().all(|f| !f.is_played()));
    }
}
