use crate::{ApiResult, GameAppData};
use axum::extract::State;
use axum::Json;
use footballsim_core::Standing;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub current_week: u8,
    pub total_weeks: u8,
    pub standings: Vec<Standing>,
}

pub async fn league_prediction_action(State(state): State<GameAppData>) -> ApiResult<Json<PredictionResponse>> {
    let response = state
        .read_with_rng(|service, rng| {
            let standings = service.predict_final_table(rng)?;
            let league = service.league()?;

            Ok(PredictionResponse {
                current_week: league.current_week,
                total_weeks: league.total_weeks,
                standings,
            })
        })
        .await?;

    Ok(Json(response))
}
