use axum::Json;
use axum::extract::State;
use crate::common::ApiPath;
use crate::matches::MatchDto;
use crate::{ApiResult, GameAppData};

pub async fn match_list_action(State(state): State<GameAppData>) -> ApiResult<Json<Vec<MatchDto>>> {
    let service = state.data.read().await;

    let fixtures = service.fixtures()?;

    Ok(Json(fixtures.iter().map(MatchDto::from).collect()))
}

pub async fn match_week_action(
    State(state): State<GameAppData>,
    ApiPath(week): ApiPath<u8>,
) -> ApiResult<Json<Vec<MatchDto>>> {
    let service = state.data.read().await;

    let fixtures = service.fixtures_of_week(week)?;

    Ok(Json(fixtures.iter().map(MatchDto::from).collect()))
}
