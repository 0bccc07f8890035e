use crate::GameAppData;
use axum::routing::{get, post};
use axum::Router;

pub fn league_routes() -> Router<GameAppData> {
    Router::new()
        .route("/api/league", get(super::get::league_get_action))
        .route("/api/league/table", get(super::get::league_table_action))
        .route("/api/league/prediction", get(super::prediction::league_prediction_action))
        .route("/api/league/reset", post(super::reset::league_reset_action))
}
