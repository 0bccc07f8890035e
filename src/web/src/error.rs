use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use footballsim_core::LeagueError;
use log::{error, warn};
use serde_json::json;

/// Error type for API handlers
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InternalError(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<LeagueError> for ApiError {
    fn from(err: LeagueError) -> Self {
        match err {
            LeagueError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            LeagueError::Validation(_) | LeagueError::Precondition(_) => {
                warn!("rejected request: {}", err);
                ApiError::BadRequest(err.to_string())
            }
            LeagueError::Persistence { .. } => {
                error!("persistence failure: {}", err);
                ApiError::InternalError(err.to_string())
            }
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        warn!("rejected path: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("rejected body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        error!("simulation task failed: {}", err);
        ApiError::InternalError(format!("Simulation task failed: {}", err))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use footballsim_core::StoreError;

    #[test]
    fn test_league_errors_map_to_status() {
        let cases = [
            (LeagueError::NotFound { entity: "match", id: 3 }, StatusCode::NOT_FOUND),
            (LeagueError::Validation("bad week".to_string()), StatusCode::BAD_REQUEST),
            (LeagueError::Precondition("too early".to_string()), StatusCode::BAD_REQUEST),
            (
                LeagueError::Persistence {
                    context: "saving match 1".to_string(),
                    source: StoreError::Backend("disk full".to_string()),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }
}
