mod get;
mod prediction;
mod reset;
pub mod routes;

pub use routes::league_routes;
