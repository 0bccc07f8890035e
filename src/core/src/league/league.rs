use crate::error::{LeagueError, LeagueResult};
use serde::{Deserialize, Serialize};

/// Season state: which week is up next and whether the season is over.
///
/// `current_week` stays within `1..=total_weeks`; finishing the last week
/// sets `is_completed` and leaves the pointer on the last week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub season: String,
    pub current_week: u8,
    pub total_weeks: u8,
    pub is_completed: bool,
}

/// What finishing a week does to the season pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekTransition {
    Advance(u8),
    Complete,
    Unchanged,
}

impl League {
    pub fn new(id: u32, name: String, season: String, total_weeks: u8) -> Self {
        League {
            id,
            name,
            season,
            current_week: 1,
            total_weeks,
            is_completed: false,
        }
    }

    pub fn validate_week(&self, week: u8) -> LeagueResult<()> {
        if week == 0 || week > self.total_weeks {
            return Err(LeagueError::Validation(format!(
                "week must be between 1 and {}, got {}",
                self.total_weeks, week
            )));
        }

        Ok(())
    }

    /// Transition after every fixture of `week` has been processed. Only the
    /// current week moves the pointer.
    pub fn transition_after(&self, week: u8) -> WeekTransition {
        if self.is_completed || week != self.current_week {
            return WeekTransition::Unchanged;
        }

        if week < self.total_weeks {
            WeekTransition::Advance(week + 1)
        } else {
            WeekTransition::Complete
        }
    }

    pub fn apply(&mut self, transition: WeekTransition) {
        match transition {
            WeekTransition::Advance(week) => self.current_week = week,
            WeekTransition::Complete => self.is_completed = true,
            WeekTransition::Unchanged => {}
        }
    }

    /// Weeks the remaining-season run has to visit, current week included.
    pub fn remaining_weeks(&self) -> std::ops::RangeInclusive<u8> {
        if self.is_completed {
            return 1..=0;
        }

        self.current_week..=self.total_weeks
    }

    pub fn restart(&mut self) {
        self.current_week = 1;
        self.is_completed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn league(current_week: u8, total_weeks: u8) -> League {
        let mut league = League::new(1, "Premier League".to_string(), "2024/25".to_string(), total_weeks);
        league.current_week = current_week;
        league
    }

    #[test]
    fn test_validate_week() {
        let league = league(1, 6);
        assert!(league.validate_week(0).is_err());
        assert!(league.validate_week(7).is_err());
        assert!(league.validate_week(1).is_ok());
        assert!(league.validate_week(6).is_ok());
    }

    #[test]
    fn test_current_week_advances() {
        let mut league = league(3, 5);

        let transition = league.transition_after(3);
        assert_eq!(transition, WeekTransition::Advance(4));

        league.apply(transition);
        assert_eq!(league.current_week, 4);
        assert!(!league.is_completed);
    }

    #[test]
    fn test_last_week_completes_without_moving_pointer() {
        let mut league = league(5, 5);

        let transition = league.transition_after(5);
        assert_eq!(transition, WeekTransition::Complete);

        league.apply(transition);
        assert_eq!(league.current_week, 5);
        assert!(league.is_completed);

        assert_eq!(league.transition_after(5), WeekTransition::Unchanged);
    }

    #[test]
    fn test_other_weeks_leave_pointer() {
        let league = league(3, 5);
        assert_eq!(league.transition_after(2), WeekTransition::Unchanged);
        assert_eq!(league.transition_after(4), WeekTransition::Unchanged);
    }

    #[test]
    fn test_remaining_weeks() {
        let mut league = league(4, 6);
        assert_eq!(league.remaining_weeks().collect::<Vec<_>>(), vec![4, 5, 6]);

        league.current_week = 6;
        league.is_completed = true;
        assert_eq!(league.remaining_weeks().count(), 0);

        league.restart();
        assert_eq!(league.current_week, 1);
        assert!(!league.is_completed);
    }
}
