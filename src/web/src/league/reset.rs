use crate::{ApiResult, GameAppData};
use axum::extract::State;
use axum::Json;
use footballsim_core::League;
use log::info;

pub async fn league_reset_action(State(state): State<GameAppData>) -> ApiResult<Json<League>> {
    let league = state.write(|service, _| service.reset()).await?;

    info!("🔄 {} {} reset", league.name, league.season);

    Ok(Json(league))
}
