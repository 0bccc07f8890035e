use footballsim_core::utils::TimeEstimation;
use footballsim_core::LeagueService;
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use log::info;
use web::{FootballSimulatorServer, GameAppData, Settings};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("debug")
    ).init();

    let settings = Settings::from_env()?;

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("database loaded: {} ms", estimated);

    if let Some(seed) = settings.simulation_seed {
        info!("simulation seed: {}", seed);
    }

    let data = DatabaseGenerator::generate(&database)?;

    let service = LeagueService::new(data.teams, data.matches, data.league, settings.service_settings());

    let data = GameAppData::new(service, settings.rng());

    FootballSimulatorServer::new(data, settings.port).run().await?;

    Ok(())
}
