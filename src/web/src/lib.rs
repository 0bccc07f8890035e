mod common;
mod error;
mod league;
mod matches;
mod routes;
mod settings;
mod teams;

pub use error::{ApiError, ApiResult};
pub use settings::{Settings, SettingsError};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use axum::Router;
use footballsim_core::{LeagueResult, LeagueService};
use database::{MemoryLeagueStore, MemoryMatchStore, MemoryTeamStore};
use log::info;
use rand::rngs::StdRng;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub type SimulatorService = LeagueService<MemoryTeamStore, MemoryMatchStore, MemoryLeagueStore>;

pub struct FootballSimulatorServer {
    data: GameAppData,
    port: u16,
}

impl FootballSimulatorServer {
    pub fn new(data: GameAppData, port: u16) -> Self {
        FootballSimulatorServer { data, port }
    }

    pub fn router(&self) -> Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        ApiError::InternalError("Internal server error - handler panicked".to_string())
                            .into_response()
                    })),
            )
            .with_state(self.data.clone())
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = TcpListener::bind(addr).await?;

        info!("listen at: http://localhost:{}", self.port);

        axum::serve(listener, self.router()).await
    }
}

/// Shared handler state. Every write takes the league lock exclusively, so a
/// week can never be simulated twice concurrently.
pub struct GameAppData {
    pub data: Arc<RwLock<SimulatorService>>,
    pub rng: Arc<Mutex<StdRng>>,
}

impl GameAppData {
    pub fn new(service: SimulatorService, rng: StdRng) -> Self {
        GameAppData {
            data: Arc::new(RwLock::new(service)),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Runs `action` on the blocking pool holding the write lock.
    pub async fn write<T, F>(&self, action: F) -> ApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SimulatorService, &mut StdRng) -> LeagueResult<T> + Send + 'static,
    {
        let mut service = Arc::clone(&self.data).write_owned().await;
        let rng = Arc::clone(&self.rng);

        let result = tokio::task::spawn_blocking(move || {
            let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            action(&mut *service, &mut *rng)
        })
        .await?;

        Ok(result?)
    }

    /// Like [`GameAppData::write`] but with shared access to the league.
    pub async fn read_with_rng<T, F>(&self, action: F) -> ApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&SimulatorService, &mut StdRng) -> LeagueResult<T> + Send + 'static,
    {
        let service = Arc::clone(&self.data).read_owned().await;
        let rng = Arc::clone(&self.rng);

        let result = tokio::task::spawn_blocking(move || {
            let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            action(&*service, &mut *rng)
        })
        .await?;

        Ok(result?)
    }
}

impl Clone for GameAppData {
    fn clone(&self) -> Self {
        GameAppData {
            data: Arc::clone(&self.data),
            rng: Arc::clone(&self.rng),
        }
    }
}
