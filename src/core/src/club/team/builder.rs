use crate::error::{LeagueError, LeagueResult};
use crate::{Strength, Team, TeamStatistics};

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<u32>,
    name: Option<String>,
    strength: Option<u8>,
    statistics: Option<TeamStatistics>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn strength(mut self, strength: u8) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn statistics(mut self, statistics: TeamStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn build(self) -> LeagueResult<Team> {
        let required = |field: &str| LeagueError::Validation(format!("{} is required", field));

        let name = self.name.ok_or_else(|| required("name"))?;
        if name.trim().is_empty() {
            return Err(LeagueError::Validation("name must not be empty".to_string()));
        }

        Ok(Team {
            id: self.id.ok_or_else(|| required("id"))?,
            name,
            strength: Strength::new(self.strength.ok_or_else(|| required("strength"))?)?,
            statistics: self.statistics.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_team() {
        let team = Team::builder()
            .id(1)
            .name("Chelsea".to_string())
            .strength(7)
            .build()
            .unwrap();

        assert_eq!(team.id, 1);
        assert_eq!(team.strength.value(), 7);
        assert_eq!(team.statistics.played, 0);
    }

    #[test]
    fn test_build_rejects_missing_and_invalid_fields() {
        assert!(Team::builder().name("Chelsea".to_string()).strength(7).build().is_err());
        assert!(Team::builder().id(1).name("  ".to_string()).strength(7).build().is_err());
        assert!(Team::builder().id(1).name("Chelsea".to_string()).strength(0).build().is_err());
    }
}
