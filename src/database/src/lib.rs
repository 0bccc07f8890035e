mod generators;
mod loaders;
mod stores;

pub use generators::*;
pub use loaders::*;
pub use stores::*;
