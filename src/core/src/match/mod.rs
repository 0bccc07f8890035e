mod fixture;
mod outcome;
mod result;
mod simulator;

pub use fixture::*;
pub use outcome::*;
pub use result::*;
pub use simulator::*;
