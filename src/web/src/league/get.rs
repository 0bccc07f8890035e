use crate::{ApiResult, GameAppData};
use axum::extract::State;
use axum::Json;
use footballsim_core::{League, LeagueTableView};

pub async fn league_get_action(State(state): State<GameAppData>) -> ApiResult<Json<League>> {
    let service = state.data.read().await;

    Ok(Json(service.league()?))
}

pub async fn league_table_action(State(state): State<GameAppData>) -> ApiResult<Json<LeagueTableView>> {
    let service = state.data.read().await;

    Ok(Json(service.table()?))
}
