mod league;
mod predictor;
mod progression;
mod schedule;
mod service;
mod table;

pub use league::*;
pub use predictor::*;
pub use progression::*;
pub use schedule::*;
pub use service::*;
pub use table::*;
