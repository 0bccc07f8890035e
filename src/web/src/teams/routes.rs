use crate::GameAppData;
use axum::routing::get;
use axum::Router;

pub fn team_routes() -> Router<GameAppData> {
    Router::new()
        .route("/api/teams", get(super::list::team_list_action))
        .route(
            "/api/teams/{team_id}",
            get(super::get::team_get_action).put(super::update::team_update_action),
        )
}
