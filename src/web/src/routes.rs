use crate::common::default_handler::default_handler;
use crate::league::league_routes;
use crate::matches::match_routes;
use crate::teams::team_routes;
use crate::GameAppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<GameAppData> {
        Router::<GameAppData>::new()
            .merge(team_routes())
            .merge(match_routes())
            .merge(league_routes())
            .fallback(default_handler)
    }
}
