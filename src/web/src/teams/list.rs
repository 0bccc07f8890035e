use crate::teams::TeamDto;
use crate::{ApiResult, GameAppData};
use axum::extract::State;
use axum::Json;

pub async fn team_list_action(State(state): State<GameAppData>) -> ApiResult<Json<Vec<TeamDto>>> {
    let service = state.data.read().await;

    let teams = service.all_teams()?;

    Ok(Json(teams.iter().map(TeamDto::from).collect()))
}
