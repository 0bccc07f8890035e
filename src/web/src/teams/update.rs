use axum::Json;
use axum::extract::State;
use crate::common::{ApiJson, ApiPath};
use crate::teams::TeamDto;
use crate::{ApiResult, GameAppData};
use serde::Deserialize;

/// Only the name and strength are editable; records come from results.
#[derive(Debug, Deserialize)]
pub struct TeamUpdateRequest {
    pub name: Option<String>,
    pub strength: Option<u8>,
}

pub async fn team_update_action(
    State(state): State<GameAppData>,
    ApiPath(team_id): ApiPath<u32>,
    ApiJson(request): ApiJson<TeamUpdateRequest>,
) -> ApiResult<Json<TeamDto>> {
    let mut service = state.data.write().await;

    let team = service.update_team(team_id, request.name, request.strength)?;

    Ok(Json(TeamDto::from(&team)))
}
