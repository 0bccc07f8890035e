use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub home_goals: u8,
    pub away_goals: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl MatchScore {
    pub fn new(home_goals: u8, away_goals: u8) -> Self {
        MatchScore {
            home_goals,
            away_goals,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        match self.home_goals.cmp(&self.away_goals) {
            std::cmp::Ordering::Greater => MatchOutcome::HomeWin,
            std::cmp::Ordering::Less => MatchOutcome::AwayWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// League points earned by (home, away).
    pub fn points(&self) -> (u8, u8) {
        match self.outcome() {
            MatchOutcome::HomeWin => (3, 0),
            MatchOutcome::AwayWin => (0, 3),
            MatchOutcome::Draw => (1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome() {
        assert_eq!(MatchScore::new(2, 1).outcome(), MatchOutcome::HomeWin);
        assert_eq!(MatchScore::new(0, 3).outcome(), MatchOutcome::AwayWin);
        assert_eq!(MatchScore::new(2, 2).outcome(), MatchOutcome::Draw);
    }

    #[test]
    fn test_points() {
        assert_eq!(MatchScore::new(5, 0).points(), (3, 0));
        assert_eq!(MatchScore::new(1, 4).points(), (0, 3));
        assert_eq!(MatchScore::new(0, 0).points(), (1, 1));
    }
}
