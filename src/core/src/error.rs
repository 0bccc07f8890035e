use crate::store::StoreError;
use thiserror::Error;

/// Errors surfaced by the simulation core.
///
/// Store failures keep their source and gain a short description of the
/// fixture, team or week that was being processed.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u32 },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{context}: {source}")]
    Persistence {
        context: String,
        #[source]
        source: StoreError,
    },

    #[error("operation not allowed: {0}")]
    Precondition(String),
}

impl LeagueError {
    /// Wraps a store failure. A missing record stays a `NotFound`, everything
    /// else becomes a `Persistence` error carrying `context`.
    pub fn from_store(source: StoreError, context: impl Into<String>) -> Self {
        match source {
            StoreError::NotFound { entity, id } => LeagueError::NotFound { entity, id },
            source => LeagueError::Persistence {
                context: context.into(),
                source,
            },
        }
    }
}

pub type LeagueResult<T> = Result<T, LeagueError>;

/// Attaches league context to store results, `anyhow`-style.
pub trait StoreContext<T> {
    fn with_context<F, C>(self, context: F) -> LeagueResult<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> StoreContext<T> for Result<T, StoreError> {
    fn with_context<F, C>(self, context: F) -> LeagueResult<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|err| LeagueError::from_store(err, context()))
    }
}
