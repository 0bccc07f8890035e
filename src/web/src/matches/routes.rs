use crate::GameAppData;
use axum::routing::{get, post, put};
use axum::Router;

pub fn match_routes() -> Router<GameAppData> {
    Router::new()
        .route("/api/matches", get(super::list::match_list_action))
        .route("/api/matches/week/{week}", get(super::list::match_week_action))
        .route(
            "/api/matches/week/{week}/simulate",
            post(super::simulate::match_simulate_week_action),
        )
        .route("/api/matches/simulate-all", post(super::simulate::match_simulate_all_action))
        .route("/api/matches/{match_id}", put(super::edit::match_edit_action))
}
