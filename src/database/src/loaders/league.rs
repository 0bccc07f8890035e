use serde::Deserialize;

const STATIC_LEAGUE_JSON: &str = include_str!("../data/league.json");

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseEntity {
    pub id: u32,
    pub name: String,
    pub season: String,
    pub teams: Vec<TeamEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
    pub strength: u8,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, serde_json::Error> {
        Self::load_from(STATIC_LEAGUE_JSON)
    }

    pub fn load_from(json: &str) -> Result<DatabaseEntity, serde_json::Error> {
        serde_json::from_str(json)
    }
}
