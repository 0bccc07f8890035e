use axum::Json;
use axum::extract::State;
use crate::common::ApiPath;
use crate::teams::TeamDto;
use crate::{ApiResult, GameAppData};

pub async fn team_get_action(
    State(state): State<GameAppData>,
    ApiPath(team_id): ApiPath<u32>,
) -> ApiResult<Json<TeamDto>> {
    let service = state.data.read().await;

    let team = service.team(team_id)?;

    Ok(Json(TeamDto::from(&team)))
}
