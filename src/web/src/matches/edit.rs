use axum::Json;
use axum::extract::State;
use crate::common::{ApiJson, ApiPath};
use crate::matches::MatchDto;
use crate::{ApiResult, GameAppData};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MatchEditRequest {
    #[serde(alias = "home_team_goals")]
    pub home_goals: u8,
    #[serde(alias = "away_team_goals")]
    pub away_goals: u8,
}

pub async fn match_edit_action(
    State(state): State<GameAppData>,
    ApiPath(match_id): ApiPath<u32>,
    ApiJson(request): ApiJson<MatchEditRequest>,
) -> ApiResult<Json<MatchDto>> {
    let edited = state
        .write(move |service, _| service.edit_result(match_id, request.home_goals, request.away_goals))
        .await?;

    Ok(Json(MatchDto::from(&edited)))
}
