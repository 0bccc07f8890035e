use axum::Json;
use axum::extract::State;
use crate::common::ApiPath;
use crate::matches::SimulationResponse;
use crate::{ApiResult, GameAppData};
use log::debug;
use std::time::Instant;

pub async fn match_simulate_week_action(
    State(state): State<GameAppData>,
    ApiPath(week): ApiPath<u8>,
) -> ApiResult<Json<SimulationResponse>> {
    let now = Instant::now();

    let response = state
        .write(move |service, rng| {
            let played = service.simulate_week(week, rng)?;
            Ok(SimulationResponse::new(&played, service.league()?))
        })
        .await?;

    debug!("week {} simulated in {} ms", week, now.elapsed().as_millis());

    Ok(Json(response))
}

pub async fn match_simulate_all_action(State(state): State<GameAppData>) -> ApiResult<Json<SimulationResponse>> {
    let now = Instant::now();

    let response = state
        .write(|service, rng| {
            let played = service.simulate_remaining(rng)?;
            Ok(SimulationResponse::new(&played, service.league()?))
        })
        .await?;

    debug!(
        "remaining season simulated in {} ms: {} fixtures",
        now.elapsed().as_millis(),
        response.matches.len()
    );

    Ok(Json(response))
}
