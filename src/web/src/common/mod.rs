pub mod default_handler;
pub mod extract;

pub use extract::{ApiJson, ApiPath};
